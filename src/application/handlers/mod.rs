//! Application handlers.
//!
//! Query handlers that orchestrate domain rules over the reader ports.

pub mod hotel;
