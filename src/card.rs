//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::{InvalidRank, InvalidSuit, ParseCardError};

/// Card suit.
///
/// The declaration order is the canonical suit order used by
/// [`crate::order`]. [`Suit::Joker`] never appears in a generated deck; it
/// only tags jokers added by [`crate::transform::jokers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Joker sentinel.
    Joker,
}

impl Suit {
    /// The four suits of a standard deck, in generation order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Returns the ordering weight of the suit (0 for spades, 4 for jokers).
    #[must_use]
    pub const fn weight(self) -> usize {
        self as usize
    }

    /// Returns the singular name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Suit {
    type Error = InvalidSuit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Spade),
            1 => Ok(Self::Diamond),
            2 => Ok(Self::Club),
            3 => Ok(Self::Heart),
            4 => Ok(Self::Joker),
            _ => Err(InvalidSuit(value)),
        }
    }
}

/// Card rank, from ace (1) to king (13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks from ace to king.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Number of playing ranks.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the numeric value of the rank (1 = Ace, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Rank {
    type Error = InvalidRank;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=13 => Ok(Self::ALL[value as usize - 1]),
            _ => Err(InvalidRank(value)),
        }
    }
}

/// A playing card.
///
/// Jokers carry an index that only tells several jokers in the same deck
/// apart. It is not a rank: it is never displayed and [`Card::rank`] returns
/// `None` for a joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card(Face);

/// Standard cards never hold [`Suit::Joker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Face {
    Standard(Suit, Rank),
    Joker(usize),
}

impl Card {
    /// Creates a new card.
    ///
    /// If `suit` is [`Suit::Joker`], `rank` is ignored and a joker with
    /// index 0 is returned.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        match suit {
            Suit::Joker => Self::joker(0),
            _ => Self(Face::Standard(suit, rank)),
        }
    }

    /// Creates a joker with the given index.
    #[must_use]
    pub const fn joker(index: usize) -> Self {
        Self(Face::Joker(index))
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        match self.0 {
            Face::Standard(suit, _) => suit,
            Face::Joker(_) => Suit::Joker,
        }
    }

    /// Returns the rank of the card, or `None` for a joker.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        match self.0 {
            Face::Standard(_, rank) => Some(rank),
            Face::Joker(_) => None,
        }
    }

    /// Returns the joker index, or `None` for a standard card.
    #[must_use]
    pub const fn joker_index(&self) -> Option<usize> {
        match self.0 {
            Face::Standard(..) => None,
            Face::Joker(index) => Some(index),
        }
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.0, Face::Joker(_))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Face::Standard(suit, rank) => write!(f, "{rank} of {suit}s"),
            Face::Joker(_) => f.write_str(Suit::Joker.name()),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the [`Display`](fmt::Display) form of a card, such as
    /// `"Queen of Hearts"` or `"Joker"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Suit::Joker.name() {
            return Ok(Self::joker(0));
        }

        let (rank, suit) = s
            .split_once(" of ")
            .ok_or(ParseCardError::Malformed)?;
        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.name() == rank)
            .ok_or(ParseCardError::UnknownRank)?;
        let suit = Suit::STANDARD
            .into_iter()
            .find(|candidate| suit.strip_suffix('s') == Some(candidate.name()))
            .ok_or(ParseCardError::UnknownSuit)?;

        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::STANDARD.len() * Rank::COUNT;
