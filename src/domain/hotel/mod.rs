//! Hotel domain module.
//!
//! Hotels, their rooms, and the rule deciding who may see them.
//!
//! # Module Structure
//!
//! - `hotel` - Hotel, Room and HotelWithRooms entities
//! - `eligibility` - Ticket-based lodging eligibility
//! - `errors` - HotelError kinds mapped to HTTP statuses at the boundary

mod eligibility;
mod errors;
mod hotel;

pub use eligibility::{HotelEligibility, Ineligibility};
pub use errors::HotelError;
pub use hotel::{Hotel, HotelWithRooms, Room};
