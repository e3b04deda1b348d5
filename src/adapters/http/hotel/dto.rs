//! Data Transfer Objects for hotel endpoints.
//!
//! Response bodies use camelCase field names. The nested room list keeps the
//! capitalized `Rooms` key that existing clients read.

use serde::Serialize;

use crate::domain::foundation::{HotelId, RoomId, Timestamp};
use crate::domain::hotel::{Hotel, HotelWithRooms, Room};

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Hotel as listed in `GET /hotels`.
#[derive(Debug, Clone, Serialize)]
pub struct HotelSummaryResponse {
    pub id: HotelId,
    pub name: String,
    pub image: String,
}

impl From<Hotel> for HotelSummaryResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
        }
    }
}

/// Room nested under a hotel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            name: room.name,
            capacity: room.capacity,
            hotel_id: room.hotel_id,
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

/// Hotel with its rooms, as returned by `GET /hotels/:hotelId`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelRoomsResponse {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelRoomsResponse {
    fn from(entry: HotelWithRooms) -> Self {
        let HotelWithRooms { hotel, rooms } = entry;
        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
            rooms: rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response DTO
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Extra machine-readable context, such as why a ticket was refused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hotel() -> Hotel {
        Hotel {
            id: HotelId::from_db(1),
            name: "Beach Resort".to_string(),
            image: "https://example.com/beach.jpg".to_string(),
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    fn room(id: i32) -> Room {
        Room {
            id: RoomId::from_db(id),
            name: format!("Suite {}", id),
            capacity: 2,
            hotel_id: HotelId::from_db(1),
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[test]
    fn summary_serializes_only_id_name_image() {
        let value = serde_json::to_value(HotelSummaryResponse::from(hotel())).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Beach Resort",
                "image": "https://example.com/beach.jpg"
            })
        );
    }

    #[test]
    fn hotel_rooms_uses_capitalized_rooms_key() {
        let entry = HotelWithRooms::new(hotel(), vec![room(1), room(2)]);
        let value = serde_json::to_value(HotelRoomsResponse::from(entry)).unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("rooms").is_none());

        let rooms = value["Rooms"].as_array().unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0]["hotelId"], 1);
        assert_eq!(rooms[1]["name"], "Suite 2");
        assert_eq!(rooms[0]["capacity"], 2);
    }

    #[test]
    fn error_response_omits_missing_details() {
        let value = serde_json::to_value(ErrorResponse::new("HOTEL_NOT_FOUND", "gone")).unwrap();

        assert_eq!(value["error_code"], "HOTEL_NOT_FOUND");
        assert_eq!(value["message"], "gone");
        assert!(value.get("details").is_none());
    }

    #[test]
    fn error_response_with_details_includes_details() {
        let response = ErrorResponse::with_details(
            "PAYMENT_REQUIRED",
            "no lodging",
            json!({ "reason": "TICKET_REMOTE" }),
        );
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["details"]["reason"], "TICKET_REMOTE");
    }
}
