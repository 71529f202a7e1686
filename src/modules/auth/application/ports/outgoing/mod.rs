pub mod password_verifier;
pub mod token_provider;

pub use password_verifier::PasswordVerifier;
pub use token_provider::{AdminClaims, TokenError, TokenProvider};
