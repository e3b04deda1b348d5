//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `JwtSessionValidator` - HS256 tokens signed with the configured secret
//! - `MockSessionValidator` - Fixed token table for tests

mod jwt;
mod mock;

pub use jwt::JwtSessionValidator;
pub use mock::MockSessionValidator;
