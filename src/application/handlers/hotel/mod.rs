//! Hotel handlers.
//!
//! ## Queries
//! - List hotels for an eligible ticket holder
//! - Get one hotel with its rooms

mod get_hotel_rooms;
mod list_hotels;

pub use get_hotel_rooms::{GetHotelRoomsHandler, GetHotelRoomsQuery, GetHotelRoomsResult};
pub use list_hotels::{ListHotelsHandler, ListHotelsQuery, ListHotelsResult};
