//! ListHotelsHandler - Query handler for the ticket-gated hotel catalogue.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::hotel::{Hotel, HotelEligibility, HotelError};
use crate::ports::{EnrollmentReader, HotelReader, TicketReader};

/// Query to list hotels on behalf of a user.
#[derive(Debug, Clone)]
pub struct ListHotelsQuery {
    pub user_id: UserId,
}

/// Result of a successful listing; never empty.
pub type ListHotelsResult = Vec<Hotel>;

/// Handler for listing hotels.
///
/// Resolves the user's enrollment, then its ticket, checks that the ticket
/// grants lodging and finally loads the catalogue. The first failing step
/// ends the request.
pub struct ListHotelsHandler {
    enrollment_reader: Arc<dyn EnrollmentReader>,
    ticket_reader: Arc<dyn TicketReader>,
    hotel_reader: Arc<dyn HotelReader>,
}

impl ListHotelsHandler {
    pub fn new(
        enrollment_reader: Arc<dyn EnrollmentReader>,
        ticket_reader: Arc<dyn TicketReader>,
        hotel_reader: Arc<dyn HotelReader>,
    ) -> Self {
        Self {
            enrollment_reader,
            ticket_reader,
            hotel_reader,
        }
    }

    pub async fn handle(&self, query: ListHotelsQuery) -> Result<ListHotelsResult, HotelError> {
        let enrollment = self
            .enrollment_reader
            .find_with_address_by_user(&query.user_id)
            .await?
            .ok_or_else(|| HotelError::enrollment_not_found(query.user_id))?;

        let ticket = self
            .ticket_reader
            .find_with_type_by_enrollment(&enrollment.id)
            .await?
            .ok_or_else(|| HotelError::ticket_not_found(enrollment.id))?;

        HotelEligibility::of(&ticket).ensure().map_err(|e| {
            tracing::debug!(
                user_id = %query.user_id,
                ticket_id = %ticket.id,
                error = %e,
                "Hotel access denied"
            );
            e
        })?;

        let hotels = self.hotel_reader.list_all().await?;
        if hotels.is_empty() {
            return Err(HotelError::NoHotels);
        }

        Ok(hotels)
    }
}
