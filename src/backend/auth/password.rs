/**
 * Password Hashing
 *
 * One-way hashing and verification of user passwords with bcrypt.
 *
 * bcrypt is deliberately slow, so both operations run on tokio's blocking
 * pool; the request awaits the result instead of stalling a runtime worker.
 * Plaintext passwords are never logged.
 */

use crate::backend::error::BackendError;

/// bcrypt work factor.
pub const BCRYPT_COST: u32 = 10;

/// bcrypt only reads this many bytes of input.
pub const MAX_PASSWORD_BYTES: usize = 72;

pub const PASSWORD_TOO_LONG: &str = "Password must be at most 72 bytes";

/// Hash a plaintext password with a fresh salt.
///
/// Passwords longer than [`MAX_PASSWORD_BYTES`] are a 400 rather than being
/// cut short, so two passwords sharing a 72-byte prefix never share a hash.
pub async fn hash_password(plaintext: &str) -> Result<String, BackendError> {
    if plaintext.len() > MAX_PASSWORD_BYTES {
        return Err(BackendError::validation(PASSWORD_TOO_LONG));
    }

    let plaintext = plaintext.to_owned();
    let hashed =
        tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(plaintext, BCRYPT_COST))
            .await??;
    Ok(hashed)
}

/// Check a plaintext password against a stored hash.
///
/// A wrong password is `Ok(false)`. A stored hash that bcrypt cannot parse
/// is an error: that is a data problem, not a failed login. An over-long
/// candidate cannot match anything [`hash_password`] produced.
pub async fn verify_password(plaintext: &str, hash: &str) -> Result<bool, BackendError> {
    if plaintext.len() > MAX_PASSWORD_BYTES {
        return Ok(false);
    }

    let plaintext = plaintext.to_owned();
    let hash = hash.to_owned();
    let valid =
        tokio::task::spawn_blocking(move || bcrypt::non_truncating_verify(plaintext, &hash))
            .await??;
    Ok(valid)
}
