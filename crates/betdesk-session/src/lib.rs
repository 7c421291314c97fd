//! Session management for Betdesk.
//!
//! This crate decides who may do what:
//!
//! 1. **Authentication** — checking credentials and creating accounts
//!    ([`Authenticator`] trait, [`PlainAuthenticator`])
//! 2. **Session tracking** — the single logged-in identity and its
//!    busy/free state ([`Session`], [`SessionState`])
//! 3. **Permission gating** — routing every action through a role check
//!    before it reaches a store ([`SessionController`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Driver (above)  ← calls controller operations, renders results
//!     ↕
//! Session Layer (this crate)  ← identity, busy/free, role checks
//!     ↕
//! Store Layer (below)  ← users and bets, no session awareness
//! ```

mod auth;
mod controller;
mod session;

pub use auth::{Authenticator, PlainAuthenticator};
pub use controller::SessionController;
pub use session::{Session, SessionState};
