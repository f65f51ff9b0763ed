//! Error types for card conversions and permutations.

use thiserror::Error;

/// Errors that can occur when parsing a card from its display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is neither `"Joker"` nor `"<Rank> of <Suit>s"`.
    #[error("expected \"<rank> of <suit>s\" or \"Joker\"")]
    Malformed,
    /// Rank name not recognized.
    #[error("unknown rank name")]
    UnknownRank,
    /// Suit name not recognized.
    #[error("unknown suit name")]
    UnknownSuit,
}

/// Integer outside the rank range 1..=13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid rank value {0}")]
pub struct InvalidRank(pub u8);

/// Integer outside the suit range 0..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid suit value {0}")]
pub struct InvalidSuit(pub u8);

/// Errors that can occur when applying an externally supplied permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PermutationError {
    /// The permutation does not cover every card.
    #[error("permutation has {actual} indices, expected {expected}")]
    LengthMismatch {
        /// Number of cards.
        expected: usize,
        /// Number of indices produced.
        actual: usize,
    },
    /// An index points past the end of the sequence.
    #[error("permutation index {index} out of range for {len} cards")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of cards.
        len: usize,
    },
    /// An index appears more than once.
    #[error("permutation index {0} appears more than once")]
    DuplicateIndex(usize),
}
