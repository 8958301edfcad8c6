//! Player accounts: a username → password table behind the login screen.
//!
//! The table lives in `users.txt`, one `username;password` record per line.
//! Passwords are stored as salted SHA-256 digests; older plaintext records
//! still log in and are rewritten hashed on the next save.

pub mod password;
pub mod store;

pub use store::{validate_username, AccountError, CredentialStore};
