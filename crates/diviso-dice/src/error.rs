//! Error types for the group dice engine.

use thiserror::Error;

use crate::catalog::DiceType;

/// Result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

/// Errors that can occur while selecting, rolling, or mapping dice.
#[derive(Debug, Error)]
pub enum DiceError {
    /// A dice type tag outside the five known types.
    #[error("unknown dice type: {0}")]
    UnknownDiceType(String),

    /// A locale tag that is neither Arabic nor English.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// A payer roll was requested for a group without members.
    #[error("cannot pick a payer from an empty member list")]
    EmptyMemberList,

    /// The dice type is not admissible for the given group context.
    #[error("dice type '{0}' is not allowed for this group")]
    TypeNotAllowed(DiceType),

    /// The group context could not be parsed.
    #[error("invalid group context: {0}")]
    InvalidContext(#[from] serde_json::Error),
}
