//! In-Memory Booking Store Adapter
//!
//! Implements every reader port over plain vectors. The store is populated
//! up front through the builder methods and is immutable afterwards, matching
//! the read-only nature of the hotel access path.

use async_trait::async_trait;

use crate::domain::enrollment::Enrollment;
use crate::domain::foundation::{DomainError, EnrollmentId, ErrorCode, HotelId, UserId};
use crate::domain::hotel::{Hotel, HotelWithRooms, Room};
use crate::domain::ticket::Ticket;
use crate::ports::{EnrollmentReader, HotelReader, TicketReader};

/// In-memory store backing the enrollment, ticket and hotel readers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingStore {
    enrollments: Vec<Enrollment>,
    tickets: Vec<Ticket>,
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
    /// Every read fails with a database error when set.
    fail_reads: bool,
}

impl InMemoryBookingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose every read fails (for error-path tests).
    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn with_enrollment(mut self, enrollment: Enrollment) -> Self {
        self.enrollments.push(enrollment);
        self
    }

    pub fn with_ticket(mut self, ticket: Ticket) -> Self {
        self.tickets.push(ticket);
        self
    }

    pub fn with_hotel(mut self, hotel: Hotel) -> Self {
        self.hotels.push(hotel);
        self
    }

    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.fail_reads {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated read failure",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl EnrollmentReader for InMemoryBookingStore {
    async fn find_with_address_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Enrollment>, DomainError> {
        self.check_available()?;
        Ok(self
            .enrollments
            .iter()
            .find(|e| e.belongs_to(user_id))
            .cloned())
    }
}

#[async_trait]
impl TicketReader for InMemoryBookingStore {
    async fn find_with_type_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        self.check_available()?;
        Ok(self
            .tickets
            .iter()
            .find(|t| &t.enrollment_id == enrollment_id)
            .cloned())
    }
}

#[async_trait]
impl HotelReader for InMemoryBookingStore {
    async fn list_all(&self) -> Result<Vec<Hotel>, DomainError> {
        self.check_available()?;
        let mut hotels = self.hotels.clone();
        hotels.sort_by_key(|h| h.id);
        Ok(hotels)
    }

    async fn find_with_rooms(
        &self,
        hotel_id: &HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        self.check_available()?;
        let Some(hotel) = self.hotels.iter().find(|h| &h.id == hotel_id).cloned() else {
            return Ok(None);
        };

        let mut rooms: Vec<Room> = self
            .rooms
            .iter()
            .filter(|r| &r.hotel_id == hotel_id)
            .cloned()
            .collect();
        rooms.sort_by_key(|r| r.id);

        Ok(Some(HotelWithRooms::new(hotel, rooms)))
    }
}
