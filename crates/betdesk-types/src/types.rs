//! User and bet records.
//!
//! These are plain data. The stores own them; the session layer only ever
//! refers to a user by username and looks the record up when it needs it.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role / Account
// ---------------------------------------------------------------------------

/// The role a user registers with.
///
/// This is the bare discriminant: what registration asks for and what the
/// permission checks compare against. The per-role data lives in
/// [`Account`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Manages other users: lists and bans them. Cannot bet.
    Admin,
    /// Places bets. Can be banned.
    RegularUser,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "Admin"),
            Self::RegularUser => write!(f, "RegularUser"),
        }
    }
}

/// Role plus the fields that only make sense for that role.
///
/// `banned` exists only on the regular variant, so there is no such thing
/// as a banned admin to reason about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Account {
    Admin,
    Regular { banned: bool },
}

impl Account {
    /// A fresh account for `role`. Regular users start unbanned.
    pub fn new(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::RegularUser => Self::Regular { banned: false },
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::Regular { .. } => Role::RegularUser,
        }
    }
}

// ---------------------------------------------------------------------------
// UserRecord
// ---------------------------------------------------------------------------

/// A registered user.
///
/// Created by registration; the only mutation afterwards is a ban, which
/// flips `banned` on a regular account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique, non-empty.
    pub username: String,

    /// Non-empty, compared verbatim.
    pub password: String,

    pub account: Account,
}

impl UserRecord {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            account: Account::new(role),
        }
    }

    pub fn role(&self) -> Role {
        self.account.role()
    }

    /// `true` only for a regular user whose ban flag is set.
    pub fn is_banned(&self) -> bool {
        matches!(self.account, Account::Regular { banned: true })
    }

    /// `true` for a regular user who has not been banned.
    pub fn is_active_regular(&self) -> bool {
        matches!(self.account, Account::Regular { banned: false })
    }
}

// ---------------------------------------------------------------------------
// Bet
// ---------------------------------------------------------------------------

/// A wager, identified by its description alone.
///
/// Two bets with the same text are the same bet: equality, hashing and
/// ordering all come from the single `description` field. The field is
/// private so a bet cannot change after it is created.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Bet {
    description: String,
}

impl Bet {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
