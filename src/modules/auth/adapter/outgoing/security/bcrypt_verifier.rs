use crate::auth::application::ports::outgoing::PasswordVerifier;

/// Verifies against the pre-hashed admin secret with bcrypt.
#[derive(Debug, Clone, Default)]
pub struct BcryptVerifier;

impl PasswordVerifier for BcryptVerifier {
    fn verify(&self, password: &str, hash: &str) -> Result<bool, String> {
        bcrypt::verify(password, hash).map_err(|e| e.to_string())
    }
}
