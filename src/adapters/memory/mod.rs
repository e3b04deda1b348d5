//! In-memory persistence adapters.
//!
//! Used by unit and HTTP tests in place of PostgreSQL.

mod booking_store;

pub use booking_store::InMemoryBookingStore;
