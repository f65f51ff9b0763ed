//! Card ordering.
//!
//! The canonical order groups cards by suit (spades, diamonds, clubs, hearts,
//! then jokers) and orders each group from ace to king. It is computed from a
//! single integer [`key`] per card, so it is total and agrees with card
//! equality: two cards share a key only if they are equal.
//!
//! Alternate orders plug into [`crate::transform::sort_with`] or
//! [`crate::transform::sort_by`] without touching deck assembly.

use alloc::boxed::Box;
use core::cmp::Ordering;

use crate::card::{Card, Rank, Suit};

/// Key of the first joker: one past the king of the last standard suit.
const JOKER_BASE: usize = Suit::Joker.weight() * Rank::COUNT + 1;

/// Returns the canonical ordering key of a card.
///
/// Standard cards map to `suit_weight * 13 + rank`. Jokers map past every
/// standard card and are ordered by their index.
#[must_use]
pub fn key(card: &Card) -> usize {
    card.rank().map_or_else(
        || JOKER_BASE.saturating_add(card.joker_index().unwrap_or_default()),
        |rank| card.suit().weight() * Rank::COUNT + usize::from(rank.value()),
    )
}

/// Default comparator: suit-major, rank-minor.
#[must_use]
pub fn suit_major(a: &Card, b: &Card) -> Ordering {
    // Keys saturate for absurd joker indices; fall back to the raw index.
    key(a)
        .cmp(&key(b))
        .then_with(|| a.joker_index().cmp(&b.joker_index()))
}

/// Alternate comparator: rank-major, suit-minor, jokers last.
#[must_use]
pub fn rank_major(a: &Card, b: &Card) -> Ordering {
    let major = |card: &Card| card.rank().map_or(usize::MAX, |rank| usize::from(rank.value()));
    major(a)
        .cmp(&major(b))
        .then_with(|| suit_major(a, b))
}

/// A comparator over positions in one card sequence.
pub type IndexComparator<'a> = Box<dyn FnMut(usize, usize) -> Ordering + 'a>;

/// Builds the default index-pair comparator for `cards`.
///
/// This is the comparator factory used by [`crate::transform::sort`]; any
/// function with the same shape can be passed to
/// [`crate::transform::sort_with`]. The returned comparator panics if an
/// index is out of bounds.
#[must_use]
pub fn by_index(cards: &[Card]) -> IndexComparator<'_> {
    Box::new(move |i: usize, j: usize| suit_major(&cards[i], &cards[j]))
}

/// Builds a predicate telling whether the card at `i` sorts strictly before
/// the card at `j`.
///
/// The returned predicate panics if an index is out of bounds.
#[must_use]
pub fn less(cards: &[Card]) -> impl Fn(usize, usize) -> bool + '_ {
    move |i: usize, j: usize| suit_major(&cards[i], &cards[j]) == Ordering::Less
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        suit_major(self, other)
    }
}
