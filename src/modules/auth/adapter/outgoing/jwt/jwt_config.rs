#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Admin token lifetime in seconds.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub const DEFAULT_TOKEN_EXPIRY: i64 = 24 * 60 * 60;

    pub fn from_env() -> Self {
        let secret_key = std::env::var("JWT_SECRET").expect("JWT_SECRET is not set");

        let issuer =
            std::env::var("JWT_ISSUER").unwrap_or_else(|_| "portfolio-api".to_string());

        let token_expiry = std::env::var("ADMIN_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::DEFAULT_TOKEN_EXPIRY);

        Self {
            secret_key,
            issuer,
            token_expiry,
        }
    }
}
