//! Credential checks and account creation.
//!
//! The controller never touches passwords itself. It hands the user store
//! to an [`Authenticator`] and acts on the outcome, which keeps the
//! credential rules swappable (a test double, a stricter policy) without
//! changing any session code.

use betdesk_store::UserDirectory;
use betdesk_types::{BetdeskError, BetdeskResult, Role, UserRecord};

/// Validates credentials and creates accounts against a [`UserDirectory`].
///
/// # Trait bounds
///
/// `Send + Sync + 'static` so a controller holding an authenticator can be
/// moved into a shared handle and used from any task.
pub trait Authenticator: Send + Sync + 'static {
    /// Creates a new account.
    ///
    /// # Errors
    /// - [`BetdeskError::BadData`] — empty username or password
    /// - [`BetdeskError::UserAlreadyRegistered`] — the username is taken
    fn register<U: UserDirectory>(
        &self,
        users: &mut U,
        username: &str,
        password: &str,
        role: Role,
    ) -> BetdeskResult<()>;

    /// Checks credentials and returns the matching record.
    ///
    /// # Errors
    /// - [`BetdeskError::BadData`] — empty field, or wrong password
    /// - [`BetdeskError::UserDoesNotExist`] — unknown username
    /// - [`BetdeskError::UserInBlacklist`] — the user is banned
    fn login<U: UserDirectory>(
        &self,
        users: &U,
        username: &str,
        password: &str,
    ) -> BetdeskResult<UserRecord>;
}

/// Compares passwords verbatim. No hashing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainAuthenticator;

impl Authenticator for PlainAuthenticator {
    fn register<U: UserDirectory>(
        &self,
        users: &mut U,
        username: &str,
        password: &str,
        role: Role,
    ) -> BetdeskResult<()> {
        if username.is_empty() || password.is_empty() {
            return Err(BetdeskError::BadData);
        }
        if users.exists(username) {
            return Err(BetdeskError::UserAlreadyRegistered(username.into()));
        }

        users.upsert(UserRecord::new(username, password, role));
        Ok(())
    }

    fn login<U: UserDirectory>(
        &self,
        users: &U,
        username: &str,
        password: &str,
    ) -> BetdeskResult<UserRecord> {
        if username.is_empty() || password.is_empty() {
            return Err(BetdeskError::BadData);
        }

        let record = users
            .get_by_username(username)
            .ok_or_else(|| BetdeskError::UserDoesNotExist(username.into()))?;

        // Same value as the empty-input case on purpose.
        if record.password != password {
            return Err(BetdeskError::BadData);
        }
        if record.is_banned() {
            return Err(BetdeskError::UserInBlacklist(username.into()));
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use betdesk_store::UserStore;

    use super::*;

    fn registered(name: &str, password: &str, role: Role) -> UserStore {
        let mut users = UserStore::new();
        PlainAuthenticator
            .register(&mut users, name, password, role)
            .expect("registration should succeed");
        users
    }

    // =====================================================================
    // register()
    // =====================================================================

    #[test]
    fn test_register_new_user_stores_record() {
        let users = registered("bob", "pw", Role::RegularUser);

        let record = users.get_by_username("bob").expect("should exist");
        assert_eq!(record.password, "pw");
        assert!(record.is_active_regular());
    }

    #[test]
    fn test_register_empty_fields_returns_bad_data() {
        for role in [Role::Admin, Role::RegularUser] {
            let mut users = UserStore::new();
            let auth = PlainAuthenticator;

            assert_eq!(
                auth.register(&mut users, "", "x", role),
                Err(BetdeskError::BadData)
            );
            assert_eq!(
                auth.register(&mut users, "x", "", role),
                Err(BetdeskError::BadData)
            );
            assert!(users.is_empty(), "nothing stored for {role}");
        }
    }

    #[test]
    fn test_register_taken_username_returns_already_registered() {
        let mut users = registered("bob", "pw", Role::RegularUser);

        let result =
            PlainAuthenticator.register(&mut users, "bob", "other", Role::Admin);

        assert_eq!(
            result,
            Err(BetdeskError::UserAlreadyRegistered("bob".into()))
        );
        // The original record survives.
        let record = users.get_by_username("bob").unwrap();
        assert_eq!(record.password, "pw");
        assert_eq!(record.role(), Role::RegularUser);
    }

    // =====================================================================
    // login()
    // =====================================================================

    #[test]
    fn test_login_valid_credentials_returns_record() {
        let users = registered("alice", "secret", Role::Admin);

        let record = PlainAuthenticator
            .login(&users, "alice", "secret")
            .expect("should succeed");

        assert_eq!(record.username, "alice");
        assert_eq!(record.role(), Role::Admin);
    }

    #[test]
    fn test_login_empty_fields_returns_bad_data() {
        let users = registered("alice", "secret", Role::Admin);

        assert_eq!(
            PlainAuthenticator.login(&users, "", "secret"),
            Err(BetdeskError::BadData)
        );
        assert_eq!(
            PlainAuthenticator.login(&users, "alice", ""),
            Err(BetdeskError::BadData)
        );
    }

    #[test]
    fn test_login_unknown_user_returns_does_not_exist() {
        let users = UserStore::new();

        let result = PlainAuthenticator.login(&users, "ghost", "pw");

        assert_eq!(
            result,
            Err(BetdeskError::UserDoesNotExist("ghost".into()))
        );
    }

    #[test]
    fn test_login_wrong_password_returns_bad_data() {
        let users = registered("alice", "secret", Role::Admin);

        let result = PlainAuthenticator.login(&users, "alice", "Secret");

        assert_eq!(result, Err(BetdeskError::BadData));
    }

    #[test]
    fn test_login_banned_user_returns_blacklist() {
        let mut users = registered("bob", "pw", Role::RegularUser);
        users.ban("bob").unwrap();

        let result = PlainAuthenticator.login(&users, "bob", "pw");

        assert_eq!(result, Err(BetdeskError::UserInBlacklist("bob".into())));
    }

    #[test]
    fn test_login_banned_user_wrong_password_returns_bad_data() {
        // The password check comes first: a banned account does not reveal
        // its ban to someone without the password.
        let mut users = registered("bob", "pw", Role::RegularUser);
        users.ban("bob").unwrap();

        let result = PlainAuthenticator.login(&users, "bob", "nope");

        assert_eq!(result, Err(BetdeskError::BadData));
    }
}
