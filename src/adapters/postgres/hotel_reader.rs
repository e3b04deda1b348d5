//! PostgreSQL implementation of HotelReader.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, HotelId, RoomId, Timestamp};
use crate::domain::hotel::{Hotel, HotelWithRooms, Room};
use crate::ports::HotelReader;

/// PostgreSQL implementation of the HotelReader port.
pub struct PostgresHotelReader {
    pool: PgPool,
}

impl PostgresHotelReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct HotelRow {
    id: i32,
    name: String,
    image: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

#[derive(Debug, sqlx::FromRow)]
struct RoomRow {
    id: i32,
    name: String,
    capacity: i32,
    hotel_id: i32,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel {
            id: HotelId::from_db(row.id),
            name: row.name,
            image: row.image,
            created_at: Timestamp::from_naive_utc(row.created_at),
            updated_at: Timestamp::from_naive_utc(row.updated_at),
        }
    }
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Room {
            id: RoomId::from_db(row.id),
            name: row.name,
            capacity: row.capacity,
            hotel_id: HotelId::from_db(row.hotel_id),
            created_at: Timestamp::from_naive_utc(row.created_at),
            updated_at: Timestamp::from_naive_utc(row.updated_at),
        }
    }
}

#[async_trait]
impl HotelReader for PostgresHotelReader {
    async fn list_all(&self) -> Result<Vec<Hotel>, DomainError> {
        let rows: Vec<HotelRow> = sqlx::query_as(
            r#"
            SELECT id, name, image, "createdAt" AS created_at, "updatedAt" AS updated_at
            FROM "Hotel"
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list hotels", e))?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_with_rooms(
        &self,
        hotel_id: &HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        let hotel: Option<HotelRow> = sqlx::query_as(
            r#"
            SELECT id, name, image, "createdAt" AS created_at, "updatedAt" AS updated_at
            FROM "Hotel"
            WHERE id = $1
            "#,
        )
        .bind(hotel_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get hotel", e))?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms: Vec<RoomRow> = sqlx::query_as(
            r#"
            SELECT id, name, capacity, "hotelId" AS hotel_id,
                   "createdAt" AS created_at, "updatedAt" AS updated_at
            FROM "Room"
            WHERE "hotelId" = $1
            ORDER BY id ASC
            "#,
        )
        .bind(hotel_id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list rooms", e))?;

        Ok(Some(HotelWithRooms::new(
            Hotel::from(hotel),
            rooms.into_iter().map(Room::from).collect(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 20)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()
    }

    #[test]
    fn hotel_row_maps_fields() {
        let hotel = Hotel::from(HotelRow {
            id: 3,
            name: "Beach Resort".to_string(),
            image: "https://example.com/beach.jpg".to_string(),
            created_at: ts(),
            updated_at: ts(),
        });

        assert_eq!(hotel.id, HotelId::from_db(3));
        assert_eq!(hotel.name, "Beach Resort");
        assert_eq!(hotel.created_at.as_datetime().naive_utc(), ts());
    }

    #[test]
    fn room_row_maps_owning_hotel() {
        let room = Room::from(RoomRow {
            id: 30,
            name: "101".to_string(),
            capacity: 2,
            hotel_id: 3,
            created_at: ts(),
            updated_at: ts(),
        });

        assert_eq!(room.id, RoomId::from_db(30));
        assert_eq!(room.hotel_id, HotelId::from_db(3));
        assert_eq!(room.capacity, 2);
    }
}
