//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The hotel access path is read-only, so every handler here is a query.

pub mod handlers;

pub use handlers::hotel::{
    GetHotelRoomsHandler, GetHotelRoomsQuery, GetHotelRoomsResult, ListHotelsHandler,
    ListHotelsQuery, ListHotelsResult,
};
