//! Ticket category.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TicketTypeId, Timestamp};

/// Category of ticket, defining how the holder attends the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    /// Price in whole currency units.
    pub price: i32,
    /// Online attendance only.
    pub is_remote: bool,
    /// Lodging is part of the package.
    pub includes_hotel: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
