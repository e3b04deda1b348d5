//! Hotel Access - Ticket-gated hotel and room listing API
//!
//! Event participants whose ticket is paid, in-person and includes lodging
//! can browse the partner hotels and their rooms.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
