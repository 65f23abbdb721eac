// src/auth/password.rs
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::auth::token::hashes_equal;
use crate::errors::ServerError;

const SALT_BYTES: usize = 16;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Hash a password for storage. Output layout: 16 salt bytes followed
/// by SHA-256(salt || password), stored as a single BLOB.
pub fn hash_password(password: &str) -> Vec<u8> {
    let mut salt = [0u8; SALT_BYTES];
    OsRng.fill_bytes(&mut salt);
    hash_with_salt(&salt, password)
}

/// Verify a candidate password against a stored salt+hash blob.
pub fn verify_password(stored: &[u8], candidate: &str) -> bool {
    if stored.len() <= SALT_BYTES {
        return false;
    }
    let salt = &stored[..SALT_BYTES];
    let recomputed = hash_with_salt(salt, candidate);
    hashes_equal(stored, &recomputed)
}

/// Minimal policy check shared by the register and admin-create forms.
pub fn check_password_policy(password: &str) -> Result<(), ServerError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ServerError::BadRequest(format!(
            "Password should be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

fn hash_with_salt(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    let digest = hasher.finalize();

    let mut out = Vec::with_capacity(salt.len() + digest.len());
    out.extend_from_slice(salt);
    out.extend_from_slice(&digest);
    out
}
