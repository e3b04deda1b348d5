//! Booking database connection settings.
//!
//! The service only reads enrollments, tickets and hotels, so the pool is
//! kept small and connections are never held across requests.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound on the read pool.
pub const MAX_POOL_SIZE: u32 = 32;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://` URL of the booking database.
    pub url: String,

    #[serde(default = "default_pool_size")]
    pub pool_size: u32,

    /// How long a request waits for a free connection.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("HOTEL_ACCESS__DATABASE__URL"));
        }
        if !["postgres://", "postgresql://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
        {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.pool_size == 0 || self.pool_size > MAX_POOL_SIZE {
            return Err(ValidationError::InvalidPoolSize(self.pool_size));
        }
        if self.connect_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_pool_size() -> u32 {
    8
}

fn default_connect_timeout() -> u64 {
    5
}
