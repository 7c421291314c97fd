//! Errors raised while setting a desk up.

use betdesk_types::BetdeskError;

/// Failure while loading configuration or applying seed data.
///
/// Operations on a running desk return [`BetdeskError`] directly; this
/// type only covers construction. `#[from]` lets `?` lift either source.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The configuration text was not valid JSON for [`BetdeskConfig`].
    ///
    /// [`BetdeskConfig`]: crate::BetdeskConfig
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A seed account or seed bet was rejected.
    #[error("seed data rejected: {0}")]
    Seed(#[from] BetdeskError),
}
