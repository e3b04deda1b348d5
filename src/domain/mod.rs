//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth, errors)
//! - `enrollment` - Event enrollment and address
//! - `ticket` - Tickets, ticket types and payment status
//! - `hotel` - Hotels, rooms and lodging eligibility

pub mod enrollment;
pub mod foundation;
pub mod hotel;
pub mod ticket;
