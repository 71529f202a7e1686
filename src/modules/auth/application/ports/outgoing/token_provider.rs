use serde::{Deserialize, Serialize};

/// Claims carried by an admin token. There is a single fixed role; no
/// per-admin identity exists anywhere in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token does not carry the admin role")]
    InvalidRole,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

pub trait TokenProvider: Send + Sync {
    /// Issue a signed, time-boxed token carrying the fixed admin role claim.
    fn issue_admin_token(&self) -> Result<String, TokenError>;

    /// Verify signature, expiry and role.
    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError>;
}
