//! Domain types for Betdesk.
//!
//! This crate is the bottom of the stack. It defines the data every other
//! layer passes around:
//!
//! - **Records** ([`UserRecord`], [`Account`], [`Role`]) — who a user is and
//!   what they are allowed to do.
//! - **Bets** ([`Bet`]) — an immutable wager identified by its description.
//! - **Errors** ([`BetdeskError`]) — the single outcome type every
//!   operation returns on failure.
//!
//! # Architecture
//!
//! ```text
//! Session layer (controller, authenticator)
//!     ↕
//! Store layer (users, bets)
//!     ↕
//! Types (this crate)
//! ```
//!
//! Nothing here knows about sessions or storage.

mod error;
mod types;

pub use error::{BetdeskError, BetdeskResult};
pub use types::{Account, Bet, Role, UserRecord};
