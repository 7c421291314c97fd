//! The user store: who is registered, and with which role.

use std::collections::HashMap;

use betdesk_types::{Account, BetdeskError, BetdeskResult, Role, UserRecord};

/// Storage capability for user records.
///
/// Implementors provide the four primitive operations; the derived ones
/// (`exists`, `list_active_regular_usernames`, `ban`) have default
/// implementations built on top of them, so a custom backend only has to
/// get lookup and upsert right.
///
/// All methods are synchronous: nothing here blocks, and a ban's
/// read-flip-write runs under one `&mut self` borrow, so it cannot
/// interleave with another write.
pub trait UserDirectory: Send + Sync + 'static {
    /// Looks up a record by username. Returns a copy; write it back with
    /// [`upsert`](Self::upsert) to change it.
    fn get_by_username(&self, username: &str) -> Option<UserRecord>;

    /// All records, in no particular order.
    fn list_all(&self) -> Vec<UserRecord>;

    /// Inserts a record, or overwrites the one with the same username.
    fn upsert(&mut self, record: UserRecord);

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn exists(&self, username: &str) -> bool {
        self.get_by_username(username).is_some()
    }

    /// Usernames of every regular user who is not banned, sorted.
    fn list_active_regular_usernames(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .list_all()
            .into_iter()
            .filter(UserRecord::is_active_regular)
            .map(|record| record.username)
            .collect();
        names.sort();
        names
    }

    /// Bans a regular user.
    ///
    /// Banning someone who is already banned succeeds without change.
    ///
    /// # Errors
    /// [`BetdeskError::UserDoesNotExist`] if there is no such user, and
    /// also if the user is an admin: admins cannot be banned, and the
    /// caller is not told which of the two cases it hit.
    fn ban(&mut self, username: &str) -> BetdeskResult<()> {
        let mut record = self
            .get_by_username(username)
            .ok_or_else(|| BetdeskError::UserDoesNotExist(username.into()))?;

        match record.account {
            Account::Admin => {
                Err(BetdeskError::UserDoesNotExist(username.into()))
            }
            Account::Regular { banned: true } => Ok(()),
            Account::Regular { banned: false } => {
                record.account = Account::Regular { banned: true };
                self.upsert(record);
                tracing::debug!(username, "ban flag set");
                Ok(())
            }
        }
    }
}

/// In-memory [`UserDirectory`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct UserStore {
    /// Keyed by username. Keying on the name is what makes usernames
    /// unique: a second insert under the same key replaces, never
    /// duplicates.
    users: HashMap<String, UserRecord>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of regular users, banned or not.
    pub fn regular_count(&self) -> usize {
        self.users
            .values()
            .filter(|record| record.role() == Role::RegularUser)
            .count()
    }
}

impl UserDirectory for UserStore {
    fn get_by_username(&self, username: &str) -> Option<UserRecord> {
        self.users.get(username).cloned()
    }

    fn list_all(&self) -> Vec<UserRecord> {
        let mut records: Vec<UserRecord> =
            self.users.values().cloned().collect();
        records.sort_by(|a, b| a.username.cmp(&b.username));
        records
    }

    fn upsert(&mut self, record: UserRecord) {
        self.users.insert(record.username.clone(), record);
    }

    fn len(&self) -> usize {
        self.users.len()
    }

    // Overridden to skip the clone the default would make.
    fn exists(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }
}
