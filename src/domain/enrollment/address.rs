//! Postal address attached to an enrollment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AddressId, EnrollmentId};

/// Postal address of an enrolled participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub enrollment_id: EnrollmentId,
    /// Brazilian postal code, digits only or `00000-000`.
    pub cep: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub number: String,
    pub neighborhood: String,
    pub address_detail: Option<String>,
}
