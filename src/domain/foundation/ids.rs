//! Strongly-typed identifier value objects.
//!
//! Every record in the booking store is keyed by a positive integer. The
//! newtypes keep a ticket id from being passed where an enrollment id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates an id, rejecting zero and negative values.
            pub fn new(value: i32) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::out_of_range($field, 1, i32::MAX, value));
                }
                Ok(Self(value))
            }

            /// Wraps a value read back from storage.
            ///
            /// Primary keys coming out of the database are trusted as-is.
            pub fn from_db(value: i32) -> Self {
                Self(value)
            }

            /// Returns the raw integer value.
            pub fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| ValidationError::invalid_format($field, e.to_string()))?;
                Self::new(value)
            }
        }
    };
}

integer_id!(
    /// Identifier of an account holder, as carried in the access token.
    UserId,
    "user_id"
);

integer_id!(
    /// Identifier of an event enrollment.
    EnrollmentId,
    "enrollment_id"
);

integer_id!(
    /// Identifier of an enrollment address.
    AddressId,
    "address_id"
);

integer_id!(
    /// Identifier of a purchased ticket.
    TicketId,
    "ticket_id"
);

integer_id!(
    /// Identifier of a ticket category.
    TicketTypeId,
    "ticket_type_id"
);

integer_id!(
    /// Identifier of a hotel.
    HotelId,
    "hotel_id"
);

integer_id!(
    /// Identifier of a hotel room.
    RoomId,
    "room_id"
);
