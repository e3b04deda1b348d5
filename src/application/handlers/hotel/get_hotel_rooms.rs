//! GetHotelRoomsHandler - Query handler for one hotel and its rooms.

use std::sync::Arc;

use crate::domain::foundation::HotelId;
use crate::domain::hotel::{HotelError, HotelWithRooms};
use crate::ports::HotelReader;

/// Query for a hotel's rooms.
#[derive(Debug, Clone)]
pub struct GetHotelRoomsQuery {
    /// `None` when the requested id was not a positive integer.
    pub hotel_id: Option<HotelId>,
    /// The id as it was requested, for error reporting.
    pub requested: String,
}

impl GetHotelRoomsQuery {
    /// Builds a query from a raw path segment.
    ///
    /// Anything that is not a positive integer becomes an id that matches
    /// no hotel.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let requested = raw.into();
        Self {
            hotel_id: requested.parse().ok(),
            requested,
        }
    }

    pub fn for_id(hotel_id: HotelId) -> Self {
        Self {
            hotel_id: Some(hotel_id),
            requested: hotel_id.to_string(),
        }
    }
}

/// Holds at most one hotel.
pub type GetHotelRoomsResult = Vec<HotelWithRooms>;

/// Handler for loading a hotel with its rooms.
pub struct GetHotelRoomsHandler {
    hotel_reader: Arc<dyn HotelReader>,
}

impl GetHotelRoomsHandler {
    pub fn new(hotel_reader: Arc<dyn HotelReader>) -> Self {
        Self { hotel_reader }
    }

    pub async fn handle(
        &self,
        query: GetHotelRoomsQuery,
    ) -> Result<GetHotelRoomsResult, HotelError> {
        let Some(hotel_id) = query.hotel_id else {
            return Err(HotelError::hotel_not_found(query.requested));
        };

        let hotels: Vec<HotelWithRooms> = self
            .hotel_reader
            .find_with_rooms(&hotel_id)
            .await?
            .into_iter()
            .collect();

        if hotels.is_empty() {
            return Err(HotelError::hotel_not_found(query.requested));
        }

        Ok(hotels)
    }
}
