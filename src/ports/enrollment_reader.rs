//! Enrollment reader port.
//!
//! Looks up a user's enrollment by the owning user id (one enrollment per
//! user). The address is loaded together with the enrollment.

use async_trait::async_trait;

use crate::domain::enrollment::Enrollment;
use crate::domain::foundation::{DomainError, UserId};

/// Reader port for enrollments.
///
/// # Contract
///
/// - `Ok(None)` when the user never enrolled
/// - `Err(DomainError)` with `ErrorCode::DatabaseError` on storage failure
#[async_trait]
pub trait EnrollmentReader: Send + Sync {
    /// Find the enrollment (with address) owned by a user.
    async fn find_with_address_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Enrollment>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrollment_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn EnrollmentReader) {}
    }
}
