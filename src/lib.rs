//! A playing-card deck builder with optional `no_std` support.
//!
//! [`new_deck`] starts from the 52 standard cards in canonical order and
//! threads them through a pipeline of [`Transform`]s: filtering, multiple
//! decks, jokers, sorting, and shuffling. [`DeckOptions`] describes common
//! recipes without spelling out the pipeline.
//!
//! # Example
//!
//! ```
//! use deckrs::{Rank, new_deck, transform};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let deck = new_deck([
//!     transform::multi_deck(2),
//!     transform::jokers(2),
//!     transform::filter(|card| card.rank() == Some(Rank::Ace)),
//!     transform::shuffled_with(ChaCha8Rng::seed_from_u64(42)),
//! ]);
//! assert_eq!(deck.len(), 2 * 48 + 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod order;
pub mod shuffle;
pub mod transform;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::new_deck;
pub use error::{InvalidRank, InvalidSuit, ParseCardError, PermutationError};
pub use options::{DeckOptions, DeckOrder, ShuffleMode};
pub use order::IndexComparator;
#[cfg(feature = "std")]
pub use shuffle::shuffle;
pub use shuffle::{Permutation, RandomPermutation, permute, shuffle_with};
pub use transform::Transform;
