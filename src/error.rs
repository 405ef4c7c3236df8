//! Error types.
//!
//! Table operations never fail: rejected intents are no-ops. Errors only
//! surface from configuration validation and from parsing custom amounts,
//! where the caller may want to know why an input was ignored.

use thiserror::Error;

/// Invalid [`CounterConfig`](crate::core::CounterConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer than two seats makes loss detection meaningless.
    #[error("minimum player count must be at least 2, got {0}")]
    TooFewPlayers(usize),

    /// Player IDs are `u8`.
    #[error("maximum player count must be at most 256, got {0}")]
    TooManyPlayers(usize),

    #[error("maximum player count {max} is below minimum {min}")]
    InvertedBounds { min: usize, max: usize },

    #[error("seeded player count {seeded} is outside {min}..={max}")]
    SeededOutOfRange { seeded: usize, min: usize, max: usize },

    #[error("preset increments must be positive, got {0}")]
    NonPositivePreset(i64),

    #[error("roster of {len} is outside {min}..={max}")]
    RosterSize { len: usize, min: usize, max: usize },

    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Why a custom amount was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("amount {0:?} is not a number")]
    NotANumber(String),

    #[error("amount must be positive, got {0}")]
    NotPositive(i64),

    #[error("amount {0} is too large")]
    TooLarge(i64),
}

/// A roster that would break ID uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("duplicate player id {0:?}")]
    DuplicateId(crate::core::PlayerId),

    #[error("player id space exhausted")]
    IdsExhausted,
}
