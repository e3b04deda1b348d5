//! PostgreSQL adapters - Database implementations of the reader ports.
//!
//! - `PostgresEnrollmentReader` - Enrollment with address by user
//! - `PostgresTicketReader` - Ticket with ticket type by enrollment
//! - `PostgresHotelReader` - Hotel catalogue and rooms
//! - `create_pool` - Connection pool from `DatabaseConfig`

mod enrollment_reader;
mod hotel_reader;
mod pool;
mod ticket_reader;

pub use enrollment_reader::PostgresEnrollmentReader;
pub use hotel_reader::PostgresHotelReader;
pub use pool::{create_pool, health_check};
pub use ticket_reader::PostgresTicketReader;
