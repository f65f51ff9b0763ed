//! Deck assembly.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::transform::Transform;

/// Returns the 52 standard cards, spades to hearts, ace to king.
#[must_use]
pub fn standard() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Builds a deck by threading the standard deck through `transforms`.
///
/// Transforms run in order, each receiving the output of the previous one.
/// With no transforms the result is exactly [`standard`].
///
/// # Example
///
/// ```
/// use deckrs::{Rank, new_deck, transform};
///
/// let deck = new_deck([
///     transform::filter(|card| card.rank() == Some(Rank::Two)),
///     transform::multi_deck(2),
///     transform::jokers(2),
/// ]);
/// assert_eq!(deck.len(), 48 * 2 + 2);
/// ```
pub fn new_deck<I>(transforms: I) -> Vec<Card>
where
    I: IntoIterator<Item = Transform>,
{
    let mut steps = 0_usize;
    let cards = transforms
        .into_iter()
        .fold(standard(), |cards, mut transform| {
            steps += 1;
            transform.apply(cards)
        });

    log::debug!("built deck of {} cards through {steps} transforms", cards.len());
    cards
}
