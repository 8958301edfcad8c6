//! Password hashing for the credential file.
//!
//! Stored form: `sha256$<salt hex>$<digest hex>`, digest = SHA-256(salt ‖ password).

use rand::RngCore;
use sha2::{Digest, Sha256};

const SCHEME: &str = "sha256";
const SALT_LEN: usize = 16;

/// Hash `password` under a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    hash_with_salt(password, &salt)
}

pub fn hash_with_salt(password: &str, salt: &[u8]) -> String {
    format!(
        "{}${}${}",
        SCHEME,
        hex::encode(salt),
        hex::encode(digest(salt, password))
    )
}

/// Whether a stored password field uses the hashed form.
pub fn is_hashed(stored: &str) -> bool {
    stored.starts_with("sha256$")
}

/// Check `password` against a stored field. Fields without the hash prefix
/// are legacy plaintext and compare directly.
pub fn verify_password(password: &str, stored: &str) -> bool {
    if !is_hashed(stored) {
        return password == stored;
    }

    let mut parts = stored.splitn(3, '$');
    let (_, salt_hex, digest_hex) = match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(salt), Some(digest)) => (scheme, salt, digest),
        _ => return false,
    };
    let (Ok(salt), Ok(expected)) = (hex::decode(salt_hex), hex::decode(digest_hex)) else {
        return false;
    };
    bytes_match(&digest(&salt, password), &expected)
}

fn digest(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

/// Equality that looks at every byte regardless of where they differ.
fn bytes_match(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
