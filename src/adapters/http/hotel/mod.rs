//! HTTP adapter for hotel endpoints.
//!
//! - `GET /hotels` - Hotels available to the caller's ticket
//! - `GET /hotels/:hotelId` - One hotel with its rooms

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{get_hotel_rooms, list_hotels, HotelApiError, HotelAppState};
pub use routes::{hotel_router, hotel_routes};
