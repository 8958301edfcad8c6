//! Username/password table backed by `users.txt`, one `name;password` record per line.

use super::password::{hash_password, is_hashed, verify_password};
use log::{info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const FIELD_SEPARATOR: char = ';';
const MAX_USERNAME_LEN: usize = 32;

/// Login and registration failures shown to the player.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Username or password is incorrect!")]
    InvalidCredentials,

    #[error("Passwords don't match!")]
    PasswordMismatch,

    #[error("This username is already taken!")]
    UsernameTaken,

    #[error("Invalid username: {0}")]
    InvalidUsername(&'static str),

    #[error("Password cannot be empty!")]
    EmptyPassword,
}

pub fn validate_username(name: &str) -> Result<(), AccountError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(AccountError::InvalidUsername("name cannot be empty"));
    }
    if trimmed.chars().count() > MAX_USERNAME_LEN {
        return Err(AccountError::InvalidUsername(
            "name must be 32 characters or less",
        ));
    }
    if trimmed
        .chars()
        .any(|c| c == FIELD_SEPARATOR || c.is_control())
    {
        return Err(AccountError::InvalidUsername(
            "name cannot contain ';' or control characters",
        ));
    }

    Ok(())
}

/// The username → stored-password table and its backing file.
pub struct CredentialStore {
    path: PathBuf,
    users: BTreeMap<String, String>,
}

impl CredentialStore {
    /// Empty table bound to `path`; nothing is read.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            users: BTreeMap::new(),
        }
    }

    /// Read the whole table. A missing or unreadable file leaves it empty.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::empty(path);
        match fs::read_to_string(&store.path) {
            Ok(content) => {
                store.users = parse_records(&content);
                info!(
                    "Loaded {} account(s) from {}",
                    store.users.len(),
                    store.path.display()
                );
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Could not read {}: {}", store.path.display(), e),
        }
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username.trim())
    }

    /// Check a username/password pair. Returns the username to play as.
    pub fn login(&self, username: &str, password: &str) -> Result<String, AccountError> {
        let username = username.trim();
        match self.users.get(username) {
            Some(stored) if verify_password(password, stored) => {
                info!("Login succeeded for {}", username);
                Ok(username.to_string())
            }
            _ => {
                info!("Login failed for {}", username);
                Err(AccountError::InvalidCredentials)
            }
        }
    }

    /// Add an account and rewrite the file. The table is untouched on error.
    /// A failed write is logged; the account still exists for this run.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AccountError> {
        if password != confirm_password {
            return Err(AccountError::PasswordMismatch);
        }
        validate_username(username)?;
        let username = username.trim();
        if self.users.contains_key(username) {
            return Err(AccountError::UsernameTaken);
        }
        if password.is_empty() {
            return Err(AccountError::EmptyPassword);
        }

        self.users
            .insert(username.to_string(), hash_password(password));
        info!("Registered {}", username);

        if let Err(e) = self.save() {
            warn!("Could not write {}: {}", self.path.display(), e);
        }
        Ok(())
    }

    /// Rewrite the file in full, hashing any legacy plaintext records.
    pub fn save(&mut self) -> io::Result<()> {
        for stored in self.users.values_mut() {
            if !is_hashed(stored) {
                *stored = hash_password(stored);
            }
        }

        let mut writer = BufWriter::new(fs::File::create(&self.path)?);
        for (username, stored) in &self.users {
            writeln!(writer, "{}{}{}", username, FIELD_SEPARATOR, stored)?;
        }
        writer.flush()
    }
}

/// Keep lines with exactly two `;`-separated fields holding a valid username
/// and a non-empty password. Everything else is skipped.
fn parse_records(content: &str) -> BTreeMap<String, String> {
    let mut users = BTreeMap::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        match fields.as_slice() {
            [username, stored] if !stored.is_empty() && validate_username(username).is_ok() => {
                users.insert(username.trim().to_string(), stored.to_string());
            }
            _ => warn!("Skipping malformed account record"),
        }
    }
    users
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> CredentialStore {
        CredentialStore::load(dir.path().join("users.txt"))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
        assert_eq!(
            store.login("alice", "pw"),
            Err(AccountError::InvalidCredentials)
        );
    }

    #[test]
    fn test_register_then_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.register("alice", "pw1", "pw1").unwrap();
        assert_eq!(store.login("alice", "pw1"), Ok("alice".to_string()));
        assert_eq!(
            store.login("alice", "nope"),
            Err(AccountError::InvalidCredentials)
        );
        assert_eq!(
            store.login("bob", "pw1"),
            Err(AccountError::InvalidCredentials)
        );
    }

    #[test]
    fn test_duplicate_username_leaves_table_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.register("alice", "pw1", "pw1").unwrap();
        let file_before = fs::read_to_string(store.path()).unwrap();

        assert_eq!(
            store.register("alice", "pw2", "pw2"),
            Err(AccountError::UsernameTaken)
        );
        assert_eq!(store.len(), 1);
        assert!(store.login("alice", "pw1").is_ok());
        assert!(store.login("alice", "pw2").is_err());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), file_before);
    }

    #[test]
    fn test_password_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        assert_eq!(
            store.register("alice", "pw1", "pw2"),
            Err(AccountError::PasswordMismatch)
        );
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_rejects_bad_usernames() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        for name in ["", "   ", "semi;colon", "new\nline"] {
            assert!(matches!(
                store.register(name, "pw", "pw"),
                Err(AccountError::InvalidUsername(_))
            ));
        }
        assert!(store.register(&"x".repeat(33), "pw", "pw").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_rejects_empty_password() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        assert_eq!(
            store.register("alice", "", ""),
            Err(AccountError::EmptyPassword)
        );
    }

    #[test]
    fn test_username_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.register("  alice ", "pw", "pw").unwrap();
        assert!(store.contains("alice"));
        assert_eq!(store.login("alice ", "pw"), Ok("alice".to_string()));
    }

    #[test]
    fn test_file_round_trip_is_hashed() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.register("alice", "secret", "secret").unwrap();
        store.register("bob", "hunter2", "hunter2").unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(!content.contains("secret"));
        assert!(!content.contains("hunter2"));
        for line in content.lines() {
            assert_eq!(line.split(';').count(), 2);
        }

        let reloaded = store_in(&dir);
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.login("alice", "secret").is_ok());
        assert!(reloaded.login("bob", "hunter2").is_ok());
    }

    #[test]
    fn test_legacy_plaintext_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.txt");
        fs::write(
            &path,
            "alice;pw1\nbroken line\na;b;c\n\ncarol;pw3\nerin;\n;pw5\n  ;pw6\n",
        )
        .unwrap();

        let mut store = CredentialStore::load(&path);
        assert_eq!(store.len(), 2);
        // Empty passwords and blank usernames never load
        assert!(!store.contains("erin"));
        assert_eq!(
            store.login("erin", ""),
            Err(AccountError::InvalidCredentials)
        );
        assert_eq!(store.login("", "pw5"), Err(AccountError::InvalidCredentials));
        assert!(store.login("alice", "pw1").is_ok());
        assert!(store.login("carol", "pw3").is_ok());

        // Next save upgrades them to hashes
        store.register("dave", "pw4", "pw4").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("pw1"));
        let reloaded = CredentialStore::load(&path);
        assert!(reloaded.login("alice", "pw1").is_ok());
        assert!(reloaded.login("dave", "pw4").is_ok());
    }

    #[test]
    fn test_failed_write_keeps_account_for_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CredentialStore::empty(dir.path().join("missing").join("users.txt"));
        store.register("alice", "pw", "pw").unwrap();
        assert!(store.login("alice", "pw").is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AccountError::InvalidCredentials.to_string(),
            "Username or password is incorrect!"
        );
        assert_eq!(
            AccountError::PasswordMismatch.to_string(),
            "Passwords don't match!"
        );
        assert_eq!(
            AccountError::UsernameTaken.to_string(),
            "This username is already taken!"
        );
    }
}
