//! Randomized reordering of card sequences.
//!
//! Every shuffle reads the input at the positions of a permutation of
//! `0..len`: `out[i] = cards[perm[i]]`. The permutation comes from a
//! [`Permutation`] source, which is a seeded or entropy-seeded generator in
//! normal use and can be any closure in tests.

use alloc::vec;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::PermutationError;

/// A source of index permutations.
///
/// Implemented by [`RandomPermutation`] and by any
/// `FnMut(usize) -> Vec<usize>` closure.
pub trait Permutation {
    /// Returns an ordering of the indices `0..len`.
    fn permutation(&mut self, len: usize) -> Vec<usize>;
}

impl<F> Permutation for F
where
    F: FnMut(usize) -> Vec<usize>,
{
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        self(len)
    }
}

/// Uniformly random permutations drawn from a random number generator.
#[derive(Debug, Clone)]
pub struct RandomPermutation<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RandomPermutation<R> {
    /// Creates a permutation source backed by `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the underlying generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomPermutation {
    /// Creates a reproducible source from a seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a source seeded from operating system entropy.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot provide entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_os_rng())
    }
}

impl<R: Rng> Permutation for RandomPermutation<R> {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        random_indices(len, &mut self.rng)
    }
}

fn random_indices<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    indices.shuffle(rng);
    indices
}

/// Builds the output sequence; `indices` must be a permutation of `0..len`.
fn gather(cards: &[Card], indices: &[usize]) -> Vec<Card> {
    indices.iter().map(|&i| cards[i]).collect()
}

/// Returns a copy of `cards` in uniformly random order.
///
/// A fresh generator is seeded from operating system entropy on every call,
/// so concurrent callers never share random state.
///
/// # Panics
///
/// Panics if the operating system cannot provide entropy.
///
/// # Example
///
/// ```
/// use deckrs::{new_deck, shuffle};
///
/// let deck = new_deck([]);
/// let shuffled = shuffle(&deck);
/// assert_eq!(shuffled.len(), deck.len());
/// ```
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn shuffle(cards: &[Card]) -> Vec<Card> {
    let mut source = RandomPermutation::from_entropy();
    log::trace!("shuffling {} cards", cards.len());
    gather(cards, &source.permutation(cards.len()))
}

/// Returns a copy of `cards` shuffled with the given generator.
///
/// # Example
///
/// ```
/// use deckrs::{new_deck, shuffle_with};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let deck = new_deck([]);
/// let a = shuffle_with(&deck, &mut ChaCha8Rng::seed_from_u64(7));
/// let b = shuffle_with(&deck, &mut ChaCha8Rng::seed_from_u64(7));
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn shuffle_with<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    log::trace!("shuffling {} cards", cards.len());
    gather(cards, &random_indices(cards.len(), rng))
}

/// Reorders `cards` with a permutation obtained from `source`.
///
/// # Errors
///
/// Returns an error if the indices produced by `source` are not a
/// permutation of `0..cards.len()`.
pub fn permute<P: Permutation + ?Sized>(
    cards: &[Card],
    source: &mut P,
) -> Result<Vec<Card>, PermutationError> {
    let len = cards.len();
    let indices = source.permutation(len);

    if indices.len() != len {
        return Err(PermutationError::LengthMismatch {
            expected: len,
            actual: indices.len(),
        });
    }

    let mut seen = vec![false; len];
    for &index in &indices {
        let slot = seen
            .get_mut(index)
            .ok_or(PermutationError::IndexOutOfRange { index, len })?;
        if *slot {
            return Err(PermutationError::DuplicateIndex(index));
        }
        *slot = true;
    }

    Ok(gather(cards, &indices))
}
