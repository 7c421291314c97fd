//! The bet store: which bets each user has placed.

use std::collections::{BTreeSet, HashMap};

use betdesk_types::{Bet, BetdeskError, BetdeskResult};

/// Storage capability for placed bets.
///
/// Each username has its own independent set. A username that never bet
/// simply has no entry, which reads back as an empty set.
pub trait BetLedger: Send + Sync + 'static {
    /// Records `bet` for `username`.
    ///
    /// # Errors
    /// [`BetdeskError::BetAlreadyPlaced`] if this user already has a bet
    /// with the same description. Nothing is changed in that case.
    fn add_bet(&mut self, username: &str, bet: Bet) -> BetdeskResult<()>;

    /// All bets placed by `username`, ordered by description.
    fn get_bets(&self, username: &str) -> BTreeSet<Bet>;

    fn bet_count(&self, username: &str) -> usize {
        self.get_bets(username).len()
    }
}

/// In-memory [`BetLedger`].
#[derive(Debug, Default)]
pub struct BetStore {
    /// `BTreeSet` gives description-based de-duplication and a stable
    /// listing order in one structure.
    bets: HashMap<String, BTreeSet<Bet>>,
}

impl BetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BetLedger for BetStore {
    fn add_bet(&mut self, username: &str, bet: Bet) -> BetdeskResult<()> {
        if self
            .bets
            .get(username)
            .is_some_and(|placed| placed.contains(&bet))
        {
            return Err(BetdeskError::BetAlreadyPlaced(
                bet.description().to_string(),
            ));
        }

        tracing::debug!(username, bet = %bet, "bet recorded");
        self.bets.entry(username.to_string()).or_default().insert(bet);
        Ok(())
    }

    fn get_bets(&self, username: &str) -> BTreeSet<Bet> {
        self.bets.get(username).cloned().unwrap_or_default()
    }

    fn bet_count(&self, username: &str) -> usize {
        self.bets.get(username).map_or(0, BTreeSet::len)
    }
}
