//! Axum router configuration for hotel endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_hotel_rooms, list_hotels, HotelAppState};

/// Create the hotel API router.
///
/// # Routes (require authentication)
/// - `GET /` - List hotels for the caller's ticket
/// - `GET /:hotelId` - Get one hotel with its rooms
pub fn hotel_routes() -> Router<HotelAppState> {
    Router::new()
        .route("/", get(list_hotels))
        .route("/:hotelId", get(get_hotel_rooms))
}

/// Create the hotel module router, mounted at `/hotels`.
///
/// # Example
///
/// ```ignore
/// let app = hotel_router()
///     .with_state(state)
///     .layer(middleware::from_fn_with_state(validator, auth_middleware));
/// ```
pub fn hotel_router() -> Router<HotelAppState> {
    Router::new().nest("/hotels", hotel_routes())
}
