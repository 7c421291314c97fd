//! The uniform error channel.
//!
//! Every Betdesk operation returns `Result<T, BetdeskError>`. Failures are
//! expected, recoverable outcomes: a driver matches on the variant to decide
//! what to show the user, and a rejected call never leaves partial state
//! behind.

/// Shorthand for results produced by Betdesk operations.
pub type BetdeskResult<T> = Result<T, BetdeskError>;

/// Everything that can go wrong in a Betdesk call.
///
/// Variants are matched on, not parsed: the `#[error(...)]` text exists for
/// logs and for drivers that want a default message.
///
/// `Clone + PartialEq` let tests compare outcomes with `assert_eq!`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BetdeskError {
    /// Registration used a username that already has a record.
    #[error("user {0} is already registered")]
    UserAlreadyRegistered(String),

    /// The user is already banned. Part of the catalog for drivers; the
    /// store's ban is idempotent and does not produce it.
    #[error("user {0} is already banned")]
    UserAlreadyBanned(String),

    /// Empty username/password, or a password that does not match.
    ///
    /// The two cases are deliberately the same value so a failed login does
    /// not reveal which part was wrong.
    #[error("bad data")]
    BadData,

    /// No such user. Also returned when trying to ban an admin, so that a
    /// ban attempt does not reveal the target's role.
    #[error("user {0} does not exist")]
    UserDoesNotExist(String),

    /// The user is banned and cannot log in.
    #[error("user {0} is in the blacklist")]
    UserInBlacklist(String),

    /// Someone is already logged in; log out first.
    #[error("system is busy")]
    SystemBusy,

    /// Not logged in, or logged in with the wrong role for this action.
    #[error("permission failed")]
    PermissionFailed,

    /// The caller abandoned the operation. Reserved for drivers; the core
    /// never suspends, so it never cancels.
    #[error("operation canceled")]
    OperationCanceled,

    /// This user already placed a bet with the same description.
    #[error("bet {0:?} already placed")]
    BetAlreadyPlaced(String),
}
