//! Error types for strict parsing.
//!
//! Card construction never fails; these errors only come from the
//! [`FromStr`](core::str::FromStr) implementations.

use thiserror::Error;

/// Errors that can occur when parsing a suit label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseSuitError {
    /// Not a suit label.
    #[error("unknown suit label")]
    UnknownLabel,
}

/// Errors that can occur when parsing a card from its canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is empty.
    #[error("card text is empty")]
    Empty,
    /// Input is the canonical form of an invalid card.
    #[error("card text describes an invalid card")]
    InvalidCard,
    /// Rank is missing, not a number, or outside 2..=15.
    #[error("rank is missing or outside 2..=15")]
    InvalidRank,
    /// Rank is not followed by a suit initial.
    #[error("suit initial is missing")]
    MissingSuit,
    /// Suit initial does not belong to any suit.
    #[error("unknown suit initial {0:?}")]
    UnknownSuit(char),
    /// Extra characters after the suit initial.
    #[error("unexpected characters after the suit initial")]
    TrailingCharacters,
}
