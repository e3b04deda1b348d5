//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session token validators (HS256 JWT, mock)
//! - `http` - Axum routes, handlers and middleware
//! - `memory` - In-memory readers for tests
//! - `postgres` - sqlx readers over the booking schema

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use http::{app_router, HotelAppState};
pub use memory::InMemoryBookingStore;
pub use postgres::{
    create_pool, PostgresEnrollmentReader, PostgresHotelReader, PostgresTicketReader,
};
