//! Hotel-access error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | EnrollmentNotFound | 404 |
//! | TicketNotFound | 404 |
//! | NoHotels | 404 |
//! | HotelNotFound | 404 |
//! | PaymentRequired | 402 |
//! | Infrastructure | 400 |

use super::Ineligibility;
use crate::domain::foundation::{DomainError, EnrollmentId, ErrorCode, UserId};

/// Errors raised while resolving hotel access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelError {
    /// The user never enrolled.
    EnrollmentNotFound(UserId),

    /// The enrollment has no ticket.
    TicketNotFound(EnrollmentId),

    /// The catalogue is empty.
    NoHotels,

    /// No hotel matches the requested id (raw path value).
    HotelNotFound(String),

    /// The ticket does not grant lodging.
    PaymentRequired(Ineligibility),

    /// Persistence failure.
    Infrastructure(String),
}

impl HotelError {
    pub fn enrollment_not_found(user_id: UserId) -> Self {
        HotelError::EnrollmentNotFound(user_id)
    }

    pub fn ticket_not_found(enrollment_id: EnrollmentId) -> Self {
        HotelError::TicketNotFound(enrollment_id)
    }

    pub fn hotel_not_found(requested: impl Into<String>) -> Self {
        HotelError::HotelNotFound(requested.into())
    }

    pub fn payment_required(reason: Ineligibility) -> Self {
        HotelError::PaymentRequired(reason)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        HotelError::Infrastructure(message.into())
    }

    /// Returns true for every "record missing" variant.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HotelError::EnrollmentNotFound(_)
                | HotelError::TicketNotFound(_)
                | HotelError::NoHotels
                | HotelError::HotelNotFound(_)
        )
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            HotelError::EnrollmentNotFound(_) => ErrorCode::EnrollmentNotFound,
            HotelError::TicketNotFound(_) => ErrorCode::TicketNotFound,
            HotelError::NoHotels | HotelError::HotelNotFound(_) => ErrorCode::HotelNotFound,
            HotelError::PaymentRequired(_) => ErrorCode::PaymentRequired,
            HotelError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            HotelError::EnrollmentNotFound(user_id) => {
                format!("No enrollment found for user {}", user_id)
            }
            HotelError::TicketNotFound(enrollment_id) => {
                format!("No ticket found for enrollment {}", enrollment_id)
            }
            HotelError::NoHotels => "No hotels available".to_string(),
            HotelError::HotelNotFound(requested) => format!("Hotel not found: {}", requested),
            HotelError::PaymentRequired(reason) => {
                format!("Ticket does not grant hotel access: {}", reason)
            }
            HotelError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for HotelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for HotelError {}

impl From<DomainError> for HotelError {
    fn from(err: DomainError) -> Self {
        HotelError::Infrastructure(err.to_string())
    }
}
