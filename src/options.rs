//! Deck recipe options.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank};
use crate::deck::new_deck;
use crate::order;
use crate::transform::{self, Transform};

/// Order applied to the deck before any shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DeckOrder {
    /// Suit-major, rank-minor.
    #[default]
    Canonical,
    /// Rank-major, suit-minor.
    RankMajor,
}

/// How the finished deck is shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ShuffleMode {
    /// Leave the deck ordered.
    #[default]
    None,
    /// Shuffle with a `ChaCha8Rng` seeded from the given value.
    Seeded(u64),
    /// Shuffle with a generator seeded from operating system entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    Entropy,
}

/// A common deck recipe.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{DeckOptions, Rank, ShuffleMode};
///
/// let deck = DeckOptions::default()
///     .with_decks(2)
///     .with_jokers(4)
///     .without_rank(Rank::Two)
///     .with_shuffle(ShuffleMode::Seeded(42))
///     .build();
/// assert_eq!(deck.len(), 48 * 2 + 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Number of standard decks combined.
    pub decks: usize,
    /// Number of jokers added.
    pub jokers: usize,
    /// Ranks removed from every suit.
    pub without_ranks: Vec<Rank>,
    /// Order of the deck before shuffling.
    pub order: DeckOrder,
    /// Shuffle applied last.
    pub shuffle: ShuffleMode,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            jokers: 0,
            without_ranks: Vec::new(),
            order: DeckOrder::Canonical,
            shuffle: ShuffleMode::None,
        }
    }
}

impl DeckOptions {
    /// Sets the number of standard decks.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(2);
    /// assert_eq!(options.jokers, 2);
    /// ```
    #[must_use]
    pub fn with_jokers(mut self, jokers: usize) -> Self {
        self.jokers = jokers;
        self
    }

    /// Removes a rank from every suit.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, Rank};
    ///
    /// let options = DeckOptions::default().without_rank(Rank::Six);
    /// assert_eq!(options.without_ranks, vec![Rank::Six]);
    /// ```
    #[must_use]
    pub fn without_rank(mut self, rank: Rank) -> Self {
        if !self.without_ranks.contains(&rank) {
            self.without_ranks.push(rank);
        }
        self
    }

    /// Sets the order of the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, DeckOrder};
    ///
    /// let options = DeckOptions::default().with_order(DeckOrder::RankMajor);
    /// assert_eq!(options.order, DeckOrder::RankMajor);
    /// ```
    #[must_use]
    pub fn with_order(mut self, order: DeckOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the shuffle mode.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, ShuffleMode};
    ///
    /// let options = DeckOptions::default().with_shuffle(ShuffleMode::Seeded(7));
    /// assert_eq!(options.shuffle, ShuffleMode::Seeded(7));
    /// ```
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Expands the options into deck transforms.
    ///
    /// The steps run filter, multi-deck, jokers, sort, shuffle. A canonical
    /// sort is only added for multiple decks; a single deck with appended
    /// jokers is already in canonical order.
    #[must_use]
    pub fn transforms(&self) -> Vec<Transform> {
        let mut steps = Vec::new();

        if !self.without_ranks.is_empty() {
            let ranks = self.without_ranks.clone();
            steps.push(transform::filter(move |card: &Card| {
                card.rank().is_some_and(|rank| ranks.contains(&rank))
            }));
        }
        if self.decks != 1 {
            steps.push(transform::multi_deck(self.decks));
        }
        if self.jokers > 0 {
            steps.push(transform::jokers(self.jokers));
        }
        match self.order {
            DeckOrder::Canonical if self.decks > 1 => steps.push(transform::sort()),
            DeckOrder::Canonical => {}
            DeckOrder::RankMajor => steps.push(transform::sort_by(order::rank_major)),
        }
        match self.shuffle {
            ShuffleMode::None => {}
            ShuffleMode::Seeded(seed) => {
                steps.push(transform::shuffled_with(ChaCha8Rng::seed_from_u64(seed)));
            }
            #[cfg(feature = "std")]
            ShuffleMode::Entropy => steps.push(transform::shuffled()),
        }

        steps
    }

    /// Builds the deck described by the options.
    #[must_use]
    pub fn build(&self) -> Vec<Card> {
        log::debug!("building deck from {self:?}");
        new_deck(self.transforms())
    }
}
