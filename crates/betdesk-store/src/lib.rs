//! Storage managers for Betdesk.
//!
//! Two independent capabilities, each a trait with an in-memory
//! implementation:
//!
//! - [`UserDirectory`] / [`UserStore`] — username → [`UserRecord`], one
//!   record per username.
//! - [`BetLedger`] / [`BetStore`] — username → set of bets, one bet per
//!   description per user.
//!
//! The stores know nothing about sessions or permissions. Whoever holds a
//! `&mut` to a store may change it; gating happens in the session layer.
//!
//! [`UserRecord`]: betdesk_types::UserRecord

mod bets;
mod users;

pub use bets::{BetLedger, BetStore};
pub use users::{UserDirectory, UserStore};
