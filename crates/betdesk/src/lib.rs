//! # Betdesk
//!
//! A single-session betting desk. Users register, log in, and depending on
//! their role either place bets or administer other users.
//!
//! This crate ties the layers together:
//!
//! - [`Betdesk::builder`] — seeds accounts and bets from a
//!   [`BetdeskConfig`] and hands back a ready controller
//! - [`SharedBetdesk`] — a cloneable, task-safe handle around one
//!   controller
//! - [`prelude`] — everything a driver needs in one import
//!
//! ## Quick Start
//!
//! ```rust
//! use betdesk::prelude::*;
//!
//! let mut desk = Betdesk::builder().build().unwrap();
//! desk.registration("bob", "pw", Role::RegularUser).unwrap();
//! desk.log_in("bob", "pw").unwrap();
//! desk.place_bet(Bet::new("X-Y 1:0")).unwrap();
//! assert_eq!(desk.print_all_bets().unwrap().len(), 1);
//! ```

mod builder;
mod config;
mod error;
mod shared;

pub use builder::{Betdesk, BetdeskBuilder};
pub use config::{BetdeskConfig, SeedAccount, SeedBet};
pub use error::SetupError;
pub use shared::SharedBetdesk;

pub use betdesk_session::{
    Authenticator, PlainAuthenticator, Session, SessionController,
    SessionState,
};
pub use betdesk_store::{BetLedger, BetStore, UserDirectory, UserStore};
pub use betdesk_types::{
    Account, Bet, BetdeskError, BetdeskResult, Role, UserRecord,
};

/// Common imports for drivers and tests.
pub mod prelude {
    pub use crate::{
        Bet, Betdesk, BetdeskConfig, BetdeskError, BetdeskResult, BetLedger,
        Role, SessionController, SessionState, SetupError, SharedBetdesk,
        UserDirectory, UserRecord,
    };
}
