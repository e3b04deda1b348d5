//! Mock session validator for testing.
//!
//! Lets tests authenticate requests without signing real tokens.
//!
//! # Example
//!
//! ```ignore
//! use hotel_access::adapters::auth::MockSessionValidator;
//!
//! let validator = MockSessionValidator::new().with_test_user("valid-token", 7);
//!
//! let user = validator.validate("valid-token").await?;
//! assert_eq!(user.id.as_i32(), 7);
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Mock session validator for testing.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Clone, Default)]
pub struct MockSessionValidator {
    tokens: HashMap<String, AuthenticatedUser>,
    /// Returned for every validation when set
    force_error: Option<AuthError>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    /// Adds a valid token for the given numeric user id.
    ///
    /// Panics if `user_id` is not positive.
    pub fn with_test_user(self, token: impl Into<String>, user_id: i32) -> Self {
        let id = UserId::new(user_id).unwrap_or_else(|e| panic!("invalid test user id: {}", e));
        self.with_user(token, AuthenticatedUser::new(id))
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.force_error = Some(error);
        self
    }

    /// Returns the number of registered valid tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }

        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn valid_token_returns_user() {
        let validator = MockSessionValidator::new().with_test_user("token-1", 12);

        let user = validator.validate("token-1").await.unwrap();

        assert_eq!(user.id, UserId::from_db(12));
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let validator = MockSessionValidator::new().with_test_user("token-1", 12);

        let result = validator.validate("token-2").await;

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn forced_error_wins_over_known_token() {
        let validator = MockSessionValidator::new()
            .with_test_user("token-1", 12)
            .with_error(AuthError::service_unavailable("down"));

        let result = validator.validate("token-1").await;

        assert!(matches!(result, Err(AuthError::ServiceUnavailable(_))));
    }

    #[test]
    fn counts_tokens() {
        let validator = MockSessionValidator::new()
            .with_test_user("a", 1)
            .with_test_user("b", 2);
        assert_eq!(validator.token_count(), 2);
    }
}
