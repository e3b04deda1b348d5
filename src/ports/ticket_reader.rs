//! Ticket reader port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EnrollmentId};
use crate::domain::ticket::Ticket;

/// Reader port for tickets.
///
/// Tickets are always returned joined with their `TicketType`.
#[async_trait]
pub trait TicketReader: Send + Sync {
    /// Find the ticket bought against an enrollment.
    ///
    /// Returns `None` if the enrollment has no ticket.
    async fn find_with_type_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError>;
}
