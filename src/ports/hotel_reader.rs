//! Hotel reader port (read side).
//!
//! # Example
//!
//! ```ignore
//! async fn rooms_left(reader: &dyn HotelReader, id: HotelId) -> usize {
//!     reader
//!         .find_with_rooms(&id)
//!         .await
//!         .ok()
//!         .flatten()
//!         .map(|h| h.rooms.len())
//!         .unwrap_or(0)
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, HotelId};
use crate::domain::hotel::{Hotel, HotelWithRooms};

/// Reader port for the hotel catalogue.
#[async_trait]
pub trait HotelReader: Send + Sync {
    /// List every hotel, ordered by id.
    async fn list_all(&self) -> Result<Vec<Hotel>, DomainError>;

    /// Get one hotel with its rooms, ordered by room id.
    ///
    /// Returns `None` if no hotel has this id.
    async fn find_with_rooms(&self, hotel_id: &HotelId)
        -> Result<Option<HotelWithRooms>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotel_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn HotelReader) {}
    }

    #[test]
    fn hotel_reader_arc_is_send_sync() {
        fn _assert_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_send_sync::<std::sync::Arc<dyn HotelReader>>();
    }
}
