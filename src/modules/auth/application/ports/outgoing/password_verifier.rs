/// Checks a submitted password against a pre-computed hash.
pub trait PasswordVerifier: Send + Sync {
    fn verify(&self, password: &str, hash: &str) -> Result<bool, String>;
}
