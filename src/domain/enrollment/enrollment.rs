//! Enrollment entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Address;
use crate::domain::foundation::{EnrollmentId, Timestamp, UserId};

/// A user's registration for the event, together with their address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub cpf: String,
    pub birthday: NaiveDate,
    pub phone: String,
    /// `None` only for enrollments created before addresses were mandatory.
    pub address: Option<Address>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Enrollment {
    /// Returns true if this enrollment belongs to the given user.
    pub fn belongs_to(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrollment() -> Enrollment {
        Enrollment {
            id: EnrollmentId::from_db(10),
            user_id: UserId::from_db(3),
            name: "Maria Souza".to_string(),
            cpf: "12345678909".to_string(),
            birthday: NaiveDate::from_ymd_opt(1995, 4, 2).unwrap(),
            phone: "(11) 99999-0000".to_string(),
            address: None,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[test]
    fn belongs_to_matches_owner() {
        let e = enrollment();
        assert!(e.belongs_to(&UserId::from_db(3)));
        assert!(!e.belongs_to(&UserId::from_db(4)));
    }

    #[test]
    fn serializes_user_id_in_camel_case() {
        let json = serde_json::to_value(enrollment()).unwrap();
        assert_eq!(json["userId"], 3);
        assert_eq!(json["birthday"], "1995-04-02");
    }
}
