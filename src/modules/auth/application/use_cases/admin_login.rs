use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{PasswordVerifier, TokenProvider};

// ========================= Login Request =========================

/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    password: String, // Private - guaranteed non-empty
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(password: String) -> Result<Self, LoginRequestError> {
        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { password })
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ====================== Login Response ==========================

#[derive(Debug, Clone, Serialize)]
pub struct AdminLoginResponse {
    pub token: String,
}

// ====================== Admin Login Use Case ====================

#[async_trait]
pub trait IAdminLoginUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<AdminLoginResponse, LoginError>;
}

/// Compares the submitted password against the single pre-hashed admin
/// secret; on match issues the fixed-role token.
pub struct AdminLoginUseCase<V>
where
    V: PasswordVerifier,
{
    password_hash: String,
    verifier: V,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<V> AdminLoginUseCase<V>
where
    V: PasswordVerifier,
{
    pub fn new(
        password_hash: String,
        verifier: V,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            password_hash,
            verifier,
            tokens,
        }
    }
}

#[async_trait]
impl<V> IAdminLoginUseCase for AdminLoginUseCase<V>
where
    V: PasswordVerifier + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<AdminLoginResponse, LoginError> {
        let is_match = self
            .verifier
            .verify(request.password(), &self.password_hash)
            .map_err(LoginError::VerificationFailed)?;

        if !is_match {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue_admin_token()
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(AdminLoginResponse { token })
    }
}
