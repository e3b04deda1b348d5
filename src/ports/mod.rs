//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports (read-only)
//!
//! - `EnrollmentReader` - Enrollment (with address) by user
//! - `TicketReader` - Ticket (with type) by enrollment
//! - `HotelReader` - Hotel catalogue and rooms
//!
//! ## Authentication Ports
//!
//! - `SessionValidator` - Bearer token validation

mod enrollment_reader;
mod hotel_reader;
mod session_validator;
mod ticket_reader;

pub use enrollment_reader::EnrollmentReader;
pub use hotel_reader::HotelReader;
pub use session_validator::SessionValidator;
pub use ticket_reader::TicketReader;
