//! Ticket entity.

use serde::{Deserialize, Serialize};

use super::{TicketStatus, TicketType};
use crate::domain::foundation::{EnrollmentId, TicketId, Timestamp};

/// A ticket together with its ticket type.
///
/// The persistence layer always loads the type alongside the ticket, so the
/// eligibility rules never need a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    #[serde(rename = "TicketType")]
    pub ticket_type: TicketType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ticket {
    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }

    pub fn is_remote(&self) -> bool {
        self.ticket_type.is_remote
    }

    pub fn includes_hotel(&self) -> bool {
        self.ticket_type.includes_hotel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TicketTypeId;

    fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
        Ticket {
            id: TicketId::from_db(1),
            enrollment_id: EnrollmentId::from_db(2),
            status,
            ticket_type: TicketType {
                id: TicketTypeId::from_db(3),
                name: "Presencial + Hotel".to_string(),
                price: 600,
                is_remote,
                includes_hotel,
                created_at: Timestamp::now(),
                updated_at: Timestamp::now(),
            },
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[test]
    fn accessors_reflect_status_and_type_flags() {
        let t = ticket(TicketStatus::Paid, false, true);
        assert!(t.is_paid());
        assert!(!t.is_remote());
        assert!(t.includes_hotel());

        let t = ticket(TicketStatus::Reserved, true, false);
        assert!(!t.is_paid());
        assert!(t.is_remote());
        assert!(!t.includes_hotel());
    }

    #[test]
    fn serializes_ticket_type_under_capitalized_key() {
        let json = serde_json::to_value(ticket(TicketStatus::Paid, false, true)).unwrap();
        assert_eq!(json["status"], "PAID");
        assert_eq!(json["TicketType"]["isRemote"], false);
        assert_eq!(json["TicketType"]["includesHotel"], true);
        assert_eq!(json["enrollmentId"], 2);
    }
}
