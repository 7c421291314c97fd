//! A task-safe handle around one controller.
//!
//! `SessionController` is `&mut self` everywhere and lock-free. When several
//! tasks need to drive the same desk, they share a [`SharedBetdesk`]: one
//! controller behind one `tokio::sync::Mutex`. Each operation holds the lock
//! for its whole run, so the session check and the session update can never
//! interleave with another call; two concurrent logins cannot both see the
//! desk as free.

use std::collections::BTreeSet;
use std::sync::Arc;

use betdesk_session::{
    Authenticator, PlainAuthenticator, SessionController, SessionState,
};
use betdesk_store::{BetLedger, BetStore, UserDirectory, UserStore};
use betdesk_types::{Bet, BetdeskResult, Role, UserRecord};
use tokio::sync::Mutex;

/// Cloneable handle to a shared [`SessionController`].
///
/// Clones point at the same controller.
pub struct SharedBetdesk<A = PlainAuthenticator, U = UserStore, B = BetStore> {
    inner: Arc<Mutex<SessionController<A, U, B>>>,
}

// Manual impl: `#[derive(Clone)]` would require `A: Clone` etc., but only
// the `Arc` is cloned.
impl<A, U, B> Clone for SharedBetdesk<A, U, B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, U, B> SharedBetdesk<A, U, B>
where
    A: Authenticator,
    U: UserDirectory,
    B: BetLedger,
{
    pub fn new(controller: SessionController<A, U, B>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Runs `f` with exclusive access to the controller.
    ///
    /// For multi-step sequences that must not interleave with other
    /// callers, e.g. log in, bet, log out as one unit.
    pub async fn with_controller<R>(
        &self,
        f: impl FnOnce(&mut SessionController<A, U, B>) -> R,
    ) -> R {
        let mut controller = self.inner.lock().await;
        f(&mut controller)
    }

    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state()
    }

    pub async fn current_user(&self) -> Option<UserRecord> {
        self.inner.lock().await.current_user()
    }

    pub async fn registration(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> BetdeskResult<()> {
        self.inner
            .lock()
            .await
            .registration(username, password, role)
    }

    pub async fn log_in(
        &self,
        username: &str,
        password: &str,
    ) -> BetdeskResult<UserRecord> {
        self.inner.lock().await.log_in(username, password)
    }

    pub async fn log_out(&self) -> BetdeskResult<()> {
        self.inner.lock().await.log_out()
    }

    pub async fn place_bet(&self, bet: Bet) -> BetdeskResult<()> {
        self.inner.lock().await.place_bet(bet)
    }

    pub async fn print_all_bets(&self) -> BetdeskResult<BTreeSet<Bet>> {
        self.inner.lock().await.print_all_bets()
    }

    pub async fn show_users(&self) -> BetdeskResult<Vec<String>> {
        self.inner.lock().await.show_users()
    }

    pub async fn ban_user(&self, username: &str) -> BetdeskResult<()> {
        self.inner.lock().await.ban_user(username)
    }
}
