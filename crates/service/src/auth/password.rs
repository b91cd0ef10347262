//! bcrypt helpers. Verification is constant-time inside the bcrypt crate.

use super::errors::AuthError;

pub fn hash_password(plain: &str, cost: u32) -> Result<String, AuthError> {
    if plain.is_empty() {
        return Err(AuthError::Validation("password required".into()));
    }
    bcrypt::hash(plain, cost).map_err(|e| AuthError::HashError(e.to_string()))
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is malformed.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, AuthError> {
    bcrypt::verify(plain, hash).map_err(|e| AuthError::HashError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("s3cret-pass", 4).unwrap();
        assert!(hash.starts_with("$2"));
        assert_ne!(hash, "s3cret-pass");
        assert!(verify_password("s3cret-pass", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn empty_password_is_rejected() {
        assert!(matches!(hash_password("", 4), Err(AuthError::Validation(_))));
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("x", "not-a-bcrypt-hash").is_err());
    }
}
