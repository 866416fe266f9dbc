// security/src/lib.rs
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

pub mod roles;

pub use roles::{Permission, Role};

// The credential table is tiny and rebuilt on every start, so a light
// parameter set keeps startup quick.
const HASH_MEMORY_KIB: u32 = 4096;
const HASH_ITERATIONS: u32 = 1;
const HASH_LANES: u32 = 1;

/// Errors raised while building the credential table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username already exists: {0}")]
    DuplicateUser(String),
    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

/// One seeded account. Only used to build an [`AccessControl`]; the
/// plaintext password is hashed and dropped there.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Credential {
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// The accounts every fresh process starts with.
pub fn default_credentials() -> Vec<Credential> {
    vec![
        Credential::new("admin", "admin123", Role::Admin),
        Credential::new("reception", "pass123", Role::Receptionist),
    ]
}

fn hasher() -> Result<Argon2<'static>, AuthError> {
    let params = Params::new(HASH_MEMORY_KIB, HASH_ITERATIONS, HASH_LANES, None)
        .map_err(|e| AuthError::PasswordHash(format!("Invalid Argon2 parameters: {}", e)))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes a password using Argon2.
fn hash_password_argon2(argon2: &Argon2<'_>, password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(format!("Failed to hash password with Argon2: {}", e)))
}

/// Verifies a password against an Argon2 hash. Any failure counts as a mismatch.
fn verify_password_argon2(password: &str, hashed_password: &str) -> bool {
    let password_hash = match PasswordHash::new(hashed_password) {
        Ok(hash) => hash,
        Err(e) => {
            log::error!("Stored password hash could not be parsed: {}", e);
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &password_hash)
        .is_ok()
}

#[derive(Debug, Clone)]
struct Account {
    password_hash: String,
    role: Role,
}

/// Fixed table of accounts and their roles.
///
/// The table is built once from explicit initialization data and is
/// read-only afterwards. There is no lockout: retry limits belong to the
/// caller.
#[derive(Debug, Clone)]
pub struct AccessControl {
    accounts: BTreeMap<String, Account>,
    roles: BTreeMap<String, Role>,
}

impl AccessControl {
    pub fn new(credentials: Vec<Credential>) -> Result<Self, AuthError> {
        let argon2 = hasher()?;
        let mut accounts = BTreeMap::new();
        let mut roles = BTreeMap::new();

        for credential in credentials {
            if accounts.contains_key(&credential.username) {
                return Err(AuthError::DuplicateUser(credential.username));
            }
            let password_hash = hash_password_argon2(&argon2, &credential.password)?;
            roles.insert(credential.username.clone(), credential.role);
            accounts.insert(
                credential.username,
                Account { password_hash, role: credential.role },
            );
        }

        log::debug!("Access control initialized with {} accounts", accounts.len());
        Ok(AccessControl { accounts, roles })
    }

    /// Builds the table from [`default_credentials`].
    pub fn seeded() -> Result<Self, AuthError> {
        Self::new(default_credentials())
    }

    /// Returns the account's role when both username and password match
    /// exactly. An unknown username and a wrong password both yield `None`.
    pub fn login(&self, username: &str, password: &str) -> Option<Role> {
        let account = match self.accounts.get(username) {
            Some(account) => account,
            None => {
                log::warn!("Login rejected: no such user");
                return None;
            }
        };
        if verify_password_argon2(password, &account.password_hash) {
            log::info!("User '{}' logged in as {}", username, account.role);
            Some(account.role)
        } else {
            log::warn!("Login rejected for user '{}': wrong password", username);
            None
        }
    }

    /// Username to role, ordered by username.
    pub fn all_roles(&self) -> &BTreeMap<String, Role> {
        &self.roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{LevelFilter, Log, Metadata, Record};
    use std::sync::Mutex;

    static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct Capture;

    impl Log for Capture {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture;

    fn captured_logs() -> Vec<String> {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);
        RECORDS.lock().unwrap().clone()
    }

    #[test]
    fn seeded_accounts_log_in_with_their_roles() {
        let access = AccessControl::seeded().unwrap();
        assert_eq!(access.login("admin", "admin123"), Some(Role::Admin));
        assert_eq!(access.login("reception", "pass123"), Some(Role::Receptionist));
    }

    #[test]
    fn wrong_password_and_unknown_user_look_the_same() {
        let access = AccessControl::seeded().unwrap();
        assert_eq!(access.login("admin", "wrong"), None);
        assert_eq!(access.login("nobody", "admin123"), None);
        assert_eq!(access.login("admin", ""), None);
    }

    #[test]
    fn login_is_exact_match() {
        let access = AccessControl::seeded().unwrap();
        assert_eq!(access.login("Admin", "admin123"), None);
        assert_eq!(access.login("admin", "admin123 "), None);
    }

    #[test]
    fn all_roles_lists_every_account() {
        let access = AccessControl::seeded().unwrap();
        let roles: Vec<(&str, Role)> = access
            .all_roles()
            .iter()
            .map(|(user, role)| (user.as_str(), *role))
            .collect();
        assert_eq!(roles, vec![("admin", Role::Admin), ("reception", Role::Receptionist)]);
    }

    #[test]
    fn duplicate_usernames_are_rejected() {
        let result = AccessControl::new(vec![
            Credential::new("admin", "one", Role::Admin),
            Credential::new("admin", "two", Role::Receptionist),
        ]);
        assert_eq!(result.unwrap_err(), AuthError::DuplicateUser("admin".to_string()));
    }

    #[test]
    fn passwords_are_not_kept_in_plaintext() {
        let access = AccessControl::seeded().unwrap();
        let account = access.accounts.get("admin").unwrap();
        assert_ne!(account.password_hash, "admin123");
        assert!(account.password_hash.starts_with("$argon2id$"));
    }

    #[test]
    fn credential_debug_redacts_password() {
        let rendered = format!("{:?}", Credential::new("admin", "admin123", Role::Admin));
        assert!(!rendered.contains("admin123"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn unknown_username_is_not_written_to_the_log() {
        captured_logs();
        let access = AccessControl::seeded().unwrap();
        assert_eq!(access.login("s3cret-typed-as-username", "x"), None);
        let logs = captured_logs();
        assert!(logs.iter().any(|line| line.contains("no such user")));
        assert!(logs.iter().all(|line| !line.contains("s3cret")));
    }
}
