//! Seed configuration.
//!
//! A desk can start with accounts and bets already in place. The seed is
//! plain serde data, so it can be written inline or loaded from JSON:
//!
//! ```json
//! {
//!   "accounts": [
//!     { "username": "alice", "password": "pw", "role": "Admin" },
//!     { "username": "bob",   "password": "pw", "role": "RegularUser" }
//!   ],
//!   "bets": [
//!     { "username": "bob", "description": "X-Y 1:0" }
//!   ]
//! }
//! ```

use betdesk_types::Role;
use serde::{Deserialize, Serialize};

use crate::SetupError;

/// Password shared by every account in [`BetdeskConfig::demo`].
const DEMO_PASSWORD: &str = "12345";

/// What a desk starts with. Both lists default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BetdeskConfig {
    /// Registered in order, through the desk's authenticator.
    pub accounts: Vec<SeedAccount>,

    /// Placed after all accounts exist.
    pub bets: Vec<SeedBet>,
}

/// An account to register at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAccount {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// A bet to record for an existing regular user at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedBet {
    pub username: String,
    pub description: String,
}

impl SeedAccount {
    pub fn new(username: &str, password: &str, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}

impl BetdeskConfig {
    /// Parses a JSON seed document.
    pub fn from_json_str(json: &str) -> Result<Self, SetupError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The demo fixture: admin `User0`, regular users `User1`–`User4`
    /// (password `12345`), and three sample bets held by `User1`.
    pub fn demo() -> Self {
        let mut accounts =
            vec![SeedAccount::new("User0", DEMO_PASSWORD, Role::Admin)];
        accounts.extend((1..=4).map(|n| {
            SeedAccount::new(&format!("User{n}"), DEMO_PASSWORD, Role::RegularUser)
        }));

        let bets = ["Milan - Uventus 2:0", "Barselona  - RM 10:0", "D  - Sh 5:5"]
            .into_iter()
            .map(|description| SeedBet {
                username: "User1".into(),
                description: description.into(),
            })
            .collect();

        Self { accounts, bets }
    }
}
