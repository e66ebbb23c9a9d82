/// Work factor for new hashes. Rows in existing `twitterClone.db` files use
/// the same cost.
pub const HASH_COST: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Hashes a password with bcrypt and a random salt, returning the modular
/// crypt string (`$2b$10$...`).
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    Ok(bcrypt::hash(password, HASH_COST)?)
}

/// Checks a password against any `$2a$`, `$2b$`, `$2x$` or `$2y$` hash.
/// A stored hash that cannot be parsed never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
