//! The session controller: every user-facing action goes through here.
//!
//! It owns the [`Session`], an [`Authenticator`], and the two stores, and
//! for each call it:
//! - checks the busy/free state and the caller's role
//! - delegates to the authenticator or a store
//! - updates the session slot on login/logout
//!
//! Errors from the delegate are returned as-is. The controller only adds
//! its own gating errors, [`BetdeskError::SystemBusy`] and
//! [`BetdeskError::PermissionFailed`], and a rejected call changes nothing.
//!
//! # Concurrency note
//!
//! Like the stores, the controller takes `&mut self` and has no locks of
//! its own. One call runs to completion before the next starts. To share it
//! between tasks, wrap the whole controller in a mutex so the session
//! check and the session update stay in one critical section.

use std::collections::BTreeSet;

use betdesk_store::{BetLedger, BetStore, UserDirectory, UserStore};
use betdesk_types::{Bet, BetdeskError, BetdeskResult, Role, UserRecord};

use crate::{Authenticator, PlainAuthenticator, Session, SessionState};

/// Routes actions through the session state machine.
///
/// ## Transitions
///
/// ```text
///            registration (Free only)
///                 ┌──────┐
///                 ▼      │
///   ──────────→ [Free] ──┘
///                 │  ▲
///         log_in  │  │  log_out
///                 ▼  │
///               [Busy] ──┐  place_bet / print_all_bets  (RegularUser)
///                 ▲      │  show_users / ban_user       (Admin)
///                 └──────┘
/// ```
///
/// The type parameters default to the in-memory stores and the plain
/// authenticator, so `SessionController::new()` is all most callers need.
pub struct SessionController<
    A = PlainAuthenticator,
    U = UserStore,
    B = BetStore,
> {
    session: Session,
    auth: A,
    users: U,
    bets: B,
}

impl SessionController {
    /// A free controller with empty in-memory stores.
    pub fn new() -> Self {
        Self::with_parts(PlainAuthenticator, UserStore::new(), BetStore::new())
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, U, B> SessionController<A, U, B>
where
    A: Authenticator,
    U: UserDirectory,
    B: BetLedger,
{
    /// Builds a free controller around existing components.
    pub fn with_parts(auth: A, users: U, bets: B) -> Self {
        Self::with_session(Session::new(), auth, users, bets)
    }

    /// Builds a controller around an existing session.
    pub fn with_session(session: Session, auth: A, users: U, bets: B) -> Self {
        Self {
            session,
            auth,
            users,
            bets,
        }
    }

    /// Takes the controller apart again.
    pub fn into_parts(self) -> (Session, A, U, B) {
        (self.session, self.auth, self.users, self.bets)
    }

    // -- Read-only accessors ----------------------------------------------

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The logged-in user's record, read fresh from the user store.
    pub fn current_user(&self) -> Option<UserRecord> {
        self.session
            .identity()
            .and_then(|username| self.users.get_by_username(username))
    }

    pub fn users(&self) -> &U {
        &self.users
    }

    pub fn bets(&self) -> &B {
        &self.bets
    }

    // -- Free-state operations --------------------------------------------

    /// Creates an account. Only allowed while nobody is logged in.
    ///
    /// # Errors
    /// - [`BetdeskError::SystemBusy`] — someone is logged in
    /// - whatever the authenticator returns
    pub fn registration(
        &mut self,
        username: &str,
        password: &str,
        role: Role,
    ) -> BetdeskResult<()> {
        if self.session.is_busy() {
            tracing::debug!(username, "registration rejected: system busy");
            return Err(BetdeskError::SystemBusy);
        }

        self.auth
            .register(&mut self.users, username, password, role)
            .inspect_err(|e| {
                tracing::debug!(username, error = %e, "registration rejected");
            })?;

        tracing::info!(username, %role, "account registered");
        Ok(())
    }

    /// Logs in and makes the session busy.
    ///
    /// While busy this fails with `SystemBusy` without looking at the
    /// credentials at all.
    ///
    /// # Errors
    /// - [`BetdeskError::SystemBusy`] — someone is logged in
    /// - whatever the authenticator returns
    pub fn log_in(
        &mut self,
        username: &str,
        password: &str,
    ) -> BetdeskResult<UserRecord> {
        if self.session.is_busy() {
            tracing::debug!(username, "login rejected: system busy");
            return Err(BetdeskError::SystemBusy);
        }

        let record = self
            .auth
            .login(&self.users, username, password)
            .inspect_err(|e| {
                tracing::debug!(username, error = %e, "login rejected");
            })?;

        self.session.begin(record.username.clone())?;
        tracing::info!(username, role = %record.role(), "logged in");
        Ok(record)
    }

    /// Ends the session.
    ///
    /// # Errors
    /// [`BetdeskError::PermissionFailed`] if nobody is logged in.
    pub fn log_out(&mut self) -> BetdeskResult<()> {
        let username = self.session.end().inspect_err(|_| {
            tracing::debug!("logout rejected: not logged in");
        })?;
        tracing::info!(%username, "logged out");
        Ok(())
    }

    // -- Regular-user operations ------------------------------------------

    /// Places a bet for the logged-in regular user.
    ///
    /// # Errors
    /// - [`BetdeskError::PermissionFailed`] — not logged in as an active
    ///   regular user
    /// - [`BetdeskError::BetAlreadyPlaced`] — same description already bet
    pub fn place_bet(&mut self, bet: Bet) -> BetdeskResult<()> {
        let user = self.require(Role::RegularUser)?;

        self.bets
            .add_bet(&user.username, bet.clone())
            .inspect_err(|e| {
                tracing::debug!(username = %user.username, error = %e, "bet rejected");
            })?;

        tracing::info!(username = %user.username, %bet, "bet placed");
        Ok(())
    }

    /// Every bet the logged-in regular user has placed.
    ///
    /// # Errors
    /// [`BetdeskError::PermissionFailed`] — not logged in as an active
    /// regular user.
    pub fn print_all_bets(&self) -> BetdeskResult<BTreeSet<Bet>> {
        let user = self.require(Role::RegularUser)?;
        Ok(self.bets.get_bets(&user.username))
    }

    // -- Admin operations -------------------------------------------------

    /// Usernames of all regular users who are not banned.
    ///
    /// # Errors
    /// [`BetdeskError::PermissionFailed`] — not logged in as an admin.
    pub fn show_users(&self) -> BetdeskResult<Vec<String>> {
        self.require(Role::Admin)?;
        Ok(self.users.list_active_regular_usernames())
    }

    /// Bans a regular user.
    ///
    /// # Errors
    /// - [`BetdeskError::PermissionFailed`] — not logged in as an admin
    /// - [`BetdeskError::UserDoesNotExist`] — no such user, or the target
    ///   is an admin
    pub fn ban_user(&mut self, username: &str) -> BetdeskResult<()> {
        let admin = self.require(Role::Admin)?;

        self.users.ban(username).inspect_err(|e| {
            tracing::debug!(admin = %admin.username, target = username, error = %e, "ban rejected");
        })?;

        tracing::info!(admin = %admin.username, target = username, "user banned");
        Ok(())
    }

    // -- Permission gate --------------------------------------------------

    /// Returns the logged-in user's record if they hold `role`.
    ///
    /// The record is re-read from the store each time. A regular user who
    /// has been banned since logging in no longer passes.
    fn require(&self, role: Role) -> BetdeskResult<UserRecord> {
        let Some(user) = self.current_user() else {
            tracing::debug!(required = %role, "permission failed: no active user");
            return Err(BetdeskError::PermissionFailed);
        };

        if user.role() != role || user.is_banned() {
            tracing::debug!(
                username = %user.username,
                required = %role,
                "permission failed: wrong role"
            );
            return Err(BetdeskError::PermissionFailed);
        }

        Ok(user)
    }
}

// =========================================================================
// Tests
// =========================================================================
