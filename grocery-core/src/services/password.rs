//! Password hashing and verification
//!
//! Stored hashes have the form `<salt>.<hash>` where both parts are standard
//! base64. The hash is PBKDF2-HMAC-SHA256 over the password with the salt.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::Rng;
use sha2::Sha256;

/// Random salt length in bytes
pub const SALT_SIZE: usize = 16;

/// Derived key length in bytes
pub const KEY_SIZE: usize = 32;

/// PBKDF2 iteration count
pub const ITERATIONS: u32 = 100_000;

const SEPARATOR: char = '.';

/// Hash a password with a freshly generated salt
pub fn hash_password(password: &str) -> String {
    let salt: [u8; SALT_SIZE] = rand::thread_rng().gen();
    let key = derive_key(password, &salt);

    format!(
        "{}{}{}",
        STANDARD.encode(salt),
        SEPARATOR,
        STANDARD.encode(key)
    )
}

/// Check a plain password against a stored `<salt>.<hash>` value
///
/// Any malformed stored value counts as a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Some((salt, expected)) = decode_stored_hash(stored_hash) else {
        tracing::debug!("stored password hash is invalid");
        return false;
    };

    let actual = derive_key(password, &salt);
    constant_time_eq(&actual, &expected)
}

fn decode_stored_hash(stored_hash: &str) -> Option<(Vec<u8>, Vec<u8>)> {
    let mut parts = stored_hash.split(SEPARATOR);
    let (salt, hash) = match (parts.next(), parts.next(), parts.next()) {
        (Some(salt), Some(hash), None) => (salt, hash),
        _ => return None,
    };

    let salt = STANDARD.decode(salt).ok()?;
    let hash = STANDARD.decode(hash).ok()?;
    if salt.is_empty() || hash.len() != KEY_SIZE {
        return None;
    }

    Some((salt, hash))
}

fn derive_key(password: &str, salt: &[u8]) -> [u8; KEY_SIZE] {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, ITERATIONS, &mut key);
    key
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }

    result == 0
}
