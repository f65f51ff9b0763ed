//! Deck transformations.
//!
//! A [`Transform`] consumes a whole card sequence and returns its
//! replacement. [`crate::new_deck`] threads the standard deck through a list
//! of transforms, left to right.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use rand::Rng;

use crate::card::Card;
use crate::order::{self, IndexComparator};
use crate::shuffle::shuffle_with;

/// A step in the deck-building pipeline.
pub struct Transform(Box<dyn FnMut(Vec<Card>) -> Vec<Card>>);

impl Transform {
    /// Wraps a closure as a pipeline step.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Transform, new_deck};
    ///
    /// let top_ten = Transform::new(|mut cards| {
    ///     cards.truncate(10);
    ///     cards
    /// });
    /// assert_eq!(new_deck([top_ten]).len(), 10);
    /// ```
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(Vec<Card>) -> Vec<Card> + 'static,
    {
        Self(Box::new(f))
    }

    /// Applies the transformation to `cards`.
    pub fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        (self.0)(cards)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").finish_non_exhaustive()
    }
}

/// Sorts cards in the canonical order (suit-major, rank-minor).
#[must_use]
pub fn sort() -> Transform {
    sort_with(order::by_index)
}

/// Sorts cards with a comparator built from the whole sequence.
///
/// `make` runs once per sort and receives the sequence as it was before
/// sorting. The [`IndexComparator`] it returns compares positions in that
/// sequence, so it can consult a summary built once (counts, neighbours)
/// instead of rebuilding it on every comparison. The sort is stable.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Rank, Suit, new_deck, transform};
///
/// // Reverse the original positions.
/// let reversed = new_deck([transform::sort_with(|_| Box::new(|i: usize, j: usize| j.cmp(&i)))]);
/// assert_eq!(reversed[0], Card::new(Suit::Heart, Rank::King));
/// ```
#[must_use]
pub fn sort_with<F>(mut make: F) -> Transform
where
    F: for<'a> FnMut(&'a [Card]) -> IndexComparator<'a> + 'static,
{
    Transform::new(move |cards: Vec<Card>| {
        let mut indices: Vec<usize> = (0..cards.len()).collect();
        let mut compare = make(&cards);
        indices.sort_by(|&i, &j| compare(i, j));
        indices.into_iter().map(|i| cards[i]).collect()
    })
}

/// Sorts cards with a pairwise comparator. The sort is stable.
///
/// ```
/// use deckrs::{Rank, new_deck, order, transform};
///
/// let deck = new_deck([transform::sort_by(order::rank_major)]);
/// assert!(deck[..4].iter().all(|card| card.rank() == Some(Rank::Ace)));
/// ```
#[must_use]
pub fn sort_by<F>(mut compare: F) -> Transform
where
    F: FnMut(&Card, &Card) -> Ordering + 'static,
{
    Transform::new(move |mut cards: Vec<Card>| {
        cards.sort_by(&mut compare);
        cards
    })
}

/// Removes every card for which `predicate` returns `true`.
///
/// The remaining cards keep their relative order. The predicate sees every
/// card, including duplicates and jokers added by earlier steps.
#[must_use]
pub fn filter<F>(mut predicate: F) -> Transform
where
    F: FnMut(&Card) -> bool + 'static,
{
    Transform::new(move |mut cards: Vec<Card>| {
        cards.retain(|card| !predicate(card));
        cards
    })
}

/// Repeats the sequence `n` times.
///
/// `multi_deck(0)` yields an empty deck.
#[must_use]
pub fn multi_deck(n: usize) -> Transform {
    Transform::new(move |cards: Vec<Card>| cards.repeat(n))
}

/// Appends `n` jokers with indices `0..n`.
#[must_use]
pub fn jokers(n: usize) -> Transform {
    Transform::new(move |mut cards: Vec<Card>| {
        cards.extend((0..n).map(Card::joker));
        cards
    })
}

/// Shuffles the sequence with a generator seeded from operating system
/// entropy each time the step runs.
///
/// # Panics
///
/// The step panics if the operating system cannot provide entropy.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn shuffled() -> Transform {
    Transform::new(|cards: Vec<Card>| crate::shuffle::shuffle(&cards))
}

/// Shuffles the sequence with the given generator.
#[must_use]
pub fn shuffled_with<R>(mut rng: R) -> Transform
where
    R: Rng + 'static,
{
    Transform::new(move |cards: Vec<Card>| shuffle_with(&cards, &mut rng))
}
