//! `Betdesk` builder.
//!
//! The builder collects a seed configuration and an authenticator, applies
//! the seed to fresh in-memory stores, and returns a free controller.

use betdesk_session::{Authenticator, PlainAuthenticator, SessionController};
use betdesk_store::{BetLedger, BetStore, UserDirectory, UserStore};
use betdesk_types::{Bet, BetdeskError, Role};

use crate::{BetdeskConfig, SetupError, SharedBetdesk};

/// Entry point: `Betdesk::builder()`.
pub struct Betdesk;

impl Betdesk {
    pub fn builder() -> BetdeskBuilder {
        BetdeskBuilder::new()
    }
}

/// Builder for a seeded [`SessionController`].
///
/// # Example
///
/// ```rust
/// use betdesk::prelude::*;
///
/// let desk = Betdesk::builder()
///     .config(BetdeskConfig::demo())
///     .build()
///     .unwrap();
/// assert!(desk.users().exists("User0"));
/// ```
pub struct BetdeskBuilder<A = PlainAuthenticator> {
    config: BetdeskConfig,
    auth: A,
}

impl BetdeskBuilder {
    /// Empty seed, plain authenticator.
    pub fn new() -> Self {
        Self {
            config: BetdeskConfig::default(),
            auth: PlainAuthenticator,
        }
    }
}

impl Default for BetdeskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Authenticator> BetdeskBuilder<A> {
    /// Sets the seed configuration.
    pub fn config(mut self, config: BetdeskConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the authenticator. Seed accounts go through it too.
    pub fn authenticator<A2: Authenticator>(self, auth: A2) -> BetdeskBuilder<A2> {
        BetdeskBuilder {
            config: self.config,
            auth,
        }
    }

    /// Applies the seed and returns a free controller.
    ///
    /// # Errors
    /// [`SetupError::Seed`] with the first rejected seed entry:
    /// - an account the authenticator refuses (empty field, duplicate)
    /// - a bet for an unknown user ([`BetdeskError::UserDoesNotExist`])
    /// - a bet for an admin ([`BetdeskError::PermissionFailed`])
    /// - a duplicate bet ([`BetdeskError::BetAlreadyPlaced`])
    pub fn build(self) -> Result<SessionController<A>, SetupError> {
        let mut users = UserStore::new();
        let mut bets = BetStore::new();

        for account in &self.config.accounts {
            self.auth.register(
                &mut users,
                &account.username,
                &account.password,
                account.role,
            )?;
        }

        for seed in &self.config.bets {
            let owner = users.get_by_username(&seed.username).ok_or_else(|| {
                BetdeskError::UserDoesNotExist(seed.username.clone())
            })?;
            if owner.role() != Role::RegularUser {
                return Err(BetdeskError::PermissionFailed.into());
            }
            bets.add_bet(&seed.username, Bet::new(seed.description.as_str()))?;
        }

        tracing::info!(
            accounts = users.len(),
            bets = self.config.bets.len(),
            "desk seeded"
        );

        Ok(SessionController::with_parts(self.auth, users, bets))
    }

    /// Like [`build`](Self::build), wrapped in a [`SharedBetdesk`].
    pub fn build_shared(self) -> Result<SharedBetdesk<A>, SetupError> {
        Ok(SharedBetdesk::new(self.build()?))
    }
}
