//! Ticket domain module.
//!
//! A ticket is bought against an enrollment and belongs to a ticket type
//! that decides whether attendance is remote and whether lodging is included.
//!
//! # Module Structure
//!
//! - `status` - TicketStatus payment state
//! - `ticket_type` - TicketType category flags
//! - `ticket` - Ticket entity joined with its type

mod status;
mod ticket;
mod ticket_type;

pub use status::TicketStatus;
pub use ticket::Ticket;
pub use ticket_type::TicketType;
