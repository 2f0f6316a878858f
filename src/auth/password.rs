use std::sync::OnceLock;

use bcrypt::{hash, verify};
use tracing::warn;

use crate::error::AppError;

/// Salted bcrypt hash of `password`.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost).map_err(|e| AppError::internal(format!("Hash error: {e}")))
}

/// A stored hash that bcrypt cannot parse never matches.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match verify(password, password_hash) {
        Ok(ok) => ok,
        Err(e) => {
            warn!(error = %e, "Stored password hash is not a valid bcrypt hash");
            false
        }
    }
}

static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

/// Runs one bcrypt verification against a throwaway hash built with `cost`
/// and always returns false. Login calls it when no user matches so both
/// failure paths take the same time.
pub fn verify_unknown_user(password: &str, cost: u32) -> bool {
    let dummy = DUMMY_HASH.get_or_init(|| hash("tienda-dummy-password", cost).ok());
    if let Some(dummy) = dummy {
        let _ = verify(password, dummy);
    }
    false
}
