//! Lodging eligibility rule.
//!
//! A ticket grants access to the hotel catalogue only when it is paid, is
//! for in-person attendance, and its type includes lodging. Any one failing
//! condition is enough to deny access.

use std::fmt;

use super::HotelError;
use crate::domain::ticket::Ticket;

/// Why a ticket does not grant lodging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligibility {
    /// Payment has not been confirmed.
    Unpaid,
    /// Remote tickets never include lodging.
    RemoteTicket,
    /// The ticket type does not include lodging.
    HotelNotIncluded,
}

impl Ineligibility {
    /// Stable machine-readable reason, reported alongside a 402.
    pub fn code(&self) -> &'static str {
        match self {
            Ineligibility::Unpaid => "TICKET_UNPAID",
            Ineligibility::RemoteTicket => "TICKET_REMOTE",
            Ineligibility::HotelNotIncluded => "HOTEL_NOT_INCLUDED",
        }
    }
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Ineligibility::Unpaid => "ticket has not been paid",
            Ineligibility::RemoteTicket => "ticket is for remote attendance",
            Ineligibility::HotelNotIncluded => "ticket type does not include lodging",
        };
        f.write_str(s)
    }
}

/// Outcome of checking a ticket against the lodging rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelEligibility {
    Eligible,
    Ineligible(Ineligibility),
}

impl HotelEligibility {
    /// Evaluates the ticket. Conditions are checked in the order
    /// paid, in-person, lodging; the first failure is reported.
    pub fn of(ticket: &Ticket) -> Self {
        if !ticket.is_paid() {
            return HotelEligibility::Ineligible(Ineligibility::Unpaid);
        }
        if ticket.is_remote() {
            return HotelEligibility::Ineligible(Ineligibility::RemoteTicket);
        }
        if !ticket.includes_hotel() {
            return HotelEligibility::Ineligible(Ineligibility::HotelNotIncluded);
        }
        HotelEligibility::Eligible
    }

    /// Converts a denial into `HotelError::PaymentRequired`.
    pub fn ensure(self) -> Result<(), HotelError> {
        match self {
            HotelEligibility::Eligible => Ok(()),
            HotelEligibility::Ineligible(reason) => Err(HotelError::payment_required(reason)),
        }
    }
}
