//! HTTP handlers for hotel endpoints.
//!
//! These handlers connect Axum routes to the application query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::hotel::{
    GetHotelRoomsHandler, GetHotelRoomsQuery, ListHotelsHandler, ListHotelsQuery,
};
use crate::domain::hotel::HotelError;
use crate::ports::{EnrollmentReader, HotelReader, TicketReader};

use super::dto::{ErrorResponse, HotelRoomsResponse, HotelSummaryResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the hotel endpoints.
#[derive(Clone)]
pub struct HotelAppState {
    pub enrollment_reader: Arc<dyn EnrollmentReader>,
    pub ticket_reader: Arc<dyn TicketReader>,
    pub hotel_reader: Arc<dyn HotelReader>,
}

impl HotelAppState {
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

    pub fn list_hotels_handler(&self) -> ListHotelsHandler {
        ListHotelsHandler::new(
            self.enrollment_reader.clone(),
            self.ticket_reader.clone(),
            self.hotel_reader.clone(),
        )
    }

    pub fn get_hotel_rooms_handler(&self) -> GetHotelRoomsHandler {
        GetHotelRoomsHandler::new(self.hotel_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /hotels - List hotels for a user whose ticket includes lodging
pub async fn list_hotels(
    State(state): State<HotelAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, HotelApiError> {
    let handler = state.list_hotels_handler();
    let query = ListHotelsQuery { user_id: user.id };

    let hotels = handler.handle(query).await?;

    let response: Vec<HotelSummaryResponse> =
        hotels.into_iter().map(HotelSummaryResponse::from).collect();
    Ok(Json(response))
}

/// GET /hotels/:hotelId - Get one hotel with its rooms
pub async fn get_hotel_rooms(
    State(state): State<HotelAppState>,
    RequireAuth(_user): RequireAuth,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, HotelApiError> {
    let handler = state.get_hotel_rooms_handler();
    let query = GetHotelRoomsQuery::from_raw(hotel_id);

    let hotels = handler.handle(query).await?;

    let response: Vec<HotelRoomsResponse> =
        hotels.into_iter().map(HotelRoomsResponse::from).collect();
    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct HotelApiError(HotelError);

impl From<HotelError> for HotelApiError {
    fn from(err: HotelError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HotelApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            err if err.is_not_found() => StatusCode::NOT_FOUND,
            HotelError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            err => {
                tracing::error!(error = %err, "Hotel request failed");
                StatusCode::BAD_REQUEST
            }
        };

        let code = self.0.code().to_string();
        let body = match &self.0 {
            HotelError::PaymentRequired(reason) => ErrorResponse::with_details(
                code,
                self.0.message(),
                serde_json::json!({ "reason": reason.code() }),
            ),
            err => ErrorResponse::new(code, err.message()),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EnrollmentId, UserId};
    use crate::domain::hotel::Ineligibility;

    async fn status_and_body(err: HotelError) -> (StatusCode, serde_json::Value) {
        let response = HotelApiError::from(err).into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_variants_map_to_404() {
        for err in [
            HotelError::enrollment_not_found(UserId::from_db(1)),
            HotelError::ticket_not_found(EnrollmentId::from_db(1)),
            HotelError::NoHotels,
            HotelError::hotel_not_found("999999"),
        ] {
            let (status, _) = status_and_body(err).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn payment_required_maps_to_402() {
        let (status, body) =
            status_and_body(HotelError::payment_required(Ineligibility::Unpaid)).await;

        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(body["error_code"], "PAYMENT_REQUIRED");
        assert_eq!(body["details"]["reason"], "TICKET_UNPAID");
    }

    #[tokio::test]
    async fn infrastructure_maps_to_400() {
        let (status, body) = status_and_body(HotelError::infrastructure("db down")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_code"], "DATABASE_ERROR");
    }

    #[tokio::test]
    async fn error_body_carries_message() {
        let (_, body) = status_and_body(HotelError::hotel_not_found("abc")).await;
        assert_eq!(body["error_code"], "HOTEL_NOT_FOUND");
        assert_eq!(body["message"], "Hotel not found: abc");
        assert!(body.get("details").is_none());
    }
}
