//! The session slot: who is logged in right now.
//!
//! There is one identity slot and two states. The state is not stored
//! separately; it is computed from the slot, so "Busy" and "someone is
//! logged in" can never disagree.

use betdesk_types::{BetdeskError, BetdeskResult};

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Whether the terminal is in use.
///
/// ```text
///   Free ──(log_in)──→ Busy
///     ↑                  │
///     └────(log_out)─────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nobody is logged in. Registration and login are allowed.
    Free,

    /// Someone is logged in. Only logout and that user's role-specific
    /// actions are allowed.
    Busy,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "Free"),
            Self::Busy => write!(f, "Busy"),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The current identity, held by username.
///
/// The session never keeps a copy of the user record. Whoever needs the
/// record looks it up in the user store, so a change to the record (a
/// ban, for instance) is seen immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<String>,
}

impl Session {
    /// A free session.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that is already busy as `username`.
    ///
    /// For restoring a session into a fresh controller. No credentials are
    /// checked here; the controller still re-reads the record on every
    /// gated call and refuses if it is missing.
    pub fn resume(username: impl Into<String>) -> Self {
        Self {
            identity: Some(username.into()),
        }
    }

    pub fn state(&self) -> SessionState {
        match self.identity {
            Some(_) => SessionState::Busy,
            None => SessionState::Free,
        }
    }

    /// Username of whoever is logged in.
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.identity.is_some()
    }

    /// Free → Busy.
    ///
    /// # Errors
    /// [`BetdeskError::SystemBusy`] if someone is already logged in.
    pub(crate) fn begin(&mut self, username: String) -> BetdeskResult<()> {
        if self.is_busy() {
            return Err(BetdeskError::SystemBusy);
        }
        self.identity = Some(username);
        Ok(())
    }

    /// Busy → Free. Returns the username that was logged in.
    ///
    /// # Errors
    /// [`BetdeskError::PermissionFailed`] if nobody is logged in.
    pub(crate) fn end(&mut self) -> BetdeskResult<String> {
        self.identity.take().ok_or(BetdeskError::PermissionFailed)
    }
}
