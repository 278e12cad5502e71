use crate::auth::models::{Credential, UserRole};

/// Immutable credential lookup table.
///
/// Injected into [`crate::AppState`] rather than living in a process-wide
/// singleton so tests can substitute their own fixtures. Lookup is a linear
/// scan over the exact username+password pair; callers get no signal about
/// which half of the pair failed.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: Vec<Credential>,
}

impl CredentialStore {
    pub fn new(users: Vec<Credential>) -> Self {
        Self { users }
    }

    pub fn verify(&self, username: &str, password: &str) -> Option<&Credential> {
        self.users
            .iter()
            .find(|user| user.username == username && user.password == password)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(vec![
            Credential::new("admin", "password123", UserRole::Admin),
            Credential::new("user1", "userpass1", UserRole::User),
            Credential::new("user2", "userpass2", UserRole::User),
        ])
    }
}
