//! Deck pipeline integration tests.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

#[cfg(feature = "std")]
use deckrs::shuffle;
use deckrs::{
    Card, DECK_SIZE, DeckOptions, ParseCardError, PermutationError, RandomPermutation, Rank,
    ShuffleMode, Suit, new_deck, order, permute, shuffle_with, transform,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

fn is_two(card: &Card) -> bool {
    card.rank() == Some(Rank::Two)
}

#[test]
fn new_deck_has_every_card_once_in_order() {
    let deck = new_deck([]);
    assert_eq!(deck.len(), DECK_SIZE);

    let expected: Vec<Card> = Suit::STANDARD
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| card(suit, rank)))
        .collect();
    assert_eq!(deck, expected);
    assert!(counts(&deck).values().all(|&count| count == 1));
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Heart, Rank::Ace).to_string(), "Ace of Hearts");
    assert_eq!(card(Suit::Diamond, Rank::Jack).to_string(), "Jack of Diamonds");
    assert_eq!(card(Suit::Joker, Rank::Seven).to_string(), "Joker");
    assert_eq!(Card::joker(12).to_string(), "Joker");
}

#[test]
fn display_parses_back() {
    for card in new_deck([transform::jokers(1)]) {
        let parsed: Card = card.to_string().parse().unwrap();
        assert_eq!(parsed, card);
    }
    assert_eq!("".parse::<Card>(), Err(ParseCardError::Malformed));
}

#[test]
fn sort_restores_reversed_deck() {
    let reverse = transform::sort_with(|_| Box::new(|i: usize, j: usize| j.cmp(&i)));
    let reversed = new_deck([reverse]);
    assert_eq!(reversed.first(), Some(&card(Suit::Heart, Rank::King)));

    let restored = new_deck([
        transform::sort_with(|_| Box::new(|i: usize, j: usize| j.cmp(&i))),
        transform::sort(),
    ]);
    assert_eq!(restored, new_deck([]));
}

#[test]
fn custom_sort_substitutes_order() {
    let deck = new_deck([transform::sort_by(order::rank_major)]);
    assert_eq!(
        &deck[..5],
        &[
            card(Suit::Spade, Rank::Ace),
            card(Suit::Diamond, Rank::Ace),
            card(Suit::Club, Rank::Ace),
            card(Suit::Heart, Rank::Ace),
            card(Suit::Spade, Rank::Two),
        ]
    );
    assert_eq!(deck.last(), Some(&card(Suit::Heart, Rank::King)));
}

#[test]
fn custom_sort_summarizes_sequence_once() {
    let summaries = Rc::new(Cell::new(0_usize));
    let counter = Rc::clone(&summaries);

    let deck = new_deck([
        transform::filter(|card| card.suit() == Suit::Heart),
        transform::multi_deck(2),
        transform::jokers(2),
        transform::sort_with(move |cards| {
            counter.set(counter.get() + 1);
            let copies = counts(cards);
            Box::new(move |i: usize, j: usize| {
                copies[&cards[i]]
                    .cmp(&copies[&cards[j]])
                    .then_with(|| order::suit_major(&cards[i], &cards[j]))
            })
        }),
    ]);

    assert_eq!(summaries.get(), 1);
    assert_eq!(deck.len(), (DECK_SIZE - 13) * 2 + 2);
    assert_eq!(&deck[..2], &[Card::joker(0), Card::joker(1)]);
    assert_eq!(deck[2], card(Suit::Spade, Rank::Ace));
    assert_eq!(deck[3], card(Suit::Spade, Rank::Ace));
}

#[test]
fn default_comparator_factory_matches_sort() {
    let restored = new_deck([
        transform::sort_with(|_| Box::new(|i: usize, j: usize| j.cmp(&i))),
        transform::sort_with(order::by_index),
    ]);
    assert_eq!(restored, new_deck([]));

    let deck = new_deck([]);
    let less = order::less(&deck);
    assert!(less(0, 1));
    assert!(!less(51, 0));
}

#[test]
fn filter_removes_one_two_per_suit() {
    let base = new_deck([]);
    let deck = new_deck([transform::filter(is_two)]);

    assert_eq!(deck.len(), DECK_SIZE - 4);
    assert!(deck.iter().all(|card| !is_two(card)));

    let expected: Vec<Card> = base.into_iter().filter(|card| !is_two(card)).collect();
    assert_eq!(deck, expected);
}

#[test]
fn multi_deck_concatenates_copies() {
    let base = new_deck([]);
    let deck = new_deck([transform::multi_deck(3)]);

    assert_eq!(deck.len(), DECK_SIZE * 3);
    for chunk in deck.chunks(DECK_SIZE) {
        assert_eq!(chunk, base.as_slice());
    }
}

#[test]
fn jokers_are_appended() {
    let base = new_deck([transform::filter(|card| card.suit() != Suit::Spade)]);
    let deck = new_deck([
        transform::filter(|card| card.suit() != Suit::Spade),
        transform::jokers(2),
    ]);

    assert_eq!(deck.len(), base.len() + 2);
    assert_eq!(&deck[..base.len()], base.as_slice());
    assert_eq!(&deck[base.len()..], &[Card::joker(0), Card::joker(1)]);
    assert!(deck[base.len()..].iter().all(|card| card.suit() == Suit::Joker));
}

#[test]
fn filter_after_duplication_and_jokers() {
    let deck = new_deck([
        transform::multi_deck(2),
        transform::jokers(2),
        transform::filter(is_two),
    ]);
    assert_eq!(deck.len(), DECK_SIZE * 2 - 8 + 2);
    assert_eq!(deck.iter().filter(|card| card.is_joker()).count(), 2);

    let no_jokers = new_deck([
        transform::jokers(3),
        transform::filter(|card| card.is_joker()),
    ]);
    assert_eq!(no_jokers, new_deck([]));
}

#[test]
fn sorting_multi_deck_keeps_duplicates_adjacent() {
    let deck = new_deck([
        transform::jokers(1),
        transform::multi_deck(2),
        transform::sort(),
    ]);
    assert_eq!(deck.len(), (DECK_SIZE + 1) * 2);
    for pair in deck.chunks(2) {
        assert_eq!(pair[0], pair[1]);
    }
    assert!(deck.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[cfg(feature = "std")]
#[test]
fn shuffle_preserves_length_and_cards() {
    let deck = new_deck([transform::multi_deck(2), transform::jokers(2)]);
    let copy = deck.clone();

    let shuffled = shuffle(&deck);
    assert_eq!(deck, copy);
    assert_eq!(shuffled.len(), deck.len());
    assert_eq!(counts(&shuffled), counts(&deck));
}

#[test]
fn seeded_shuffle_preserves_cards() {
    let deck = new_deck([transform::multi_deck(2), transform::jokers(2)]);
    let copy = deck.clone();

    let seeded = shuffle_with(&deck, &mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(deck, copy);
    assert_eq!(seeded.len(), deck.len());
    assert_eq!(counts(&seeded), counts(&deck));
}

#[test]
fn seeded_shuffle_step_is_reproducible() {
    let build = || {
        new_deck([transform::shuffled_with(ChaCha8Rng::seed_from_u64(11))])
    };
    assert_eq!(build(), build());
    assert_eq!(counts(&build()), counts(&new_deck([])));
}

#[test]
fn injected_permutation_drives_shuffle() {
    let deck = new_deck([]);

    let mut rotate = |len: usize| (0..len).map(|i| (i + 1) % len).collect::<Vec<_>>();
    let rotated = permute(&deck, &mut rotate).unwrap();
    assert_eq!(rotated[0], deck[1]);
    assert_eq!(rotated[DECK_SIZE - 1], deck[0]);

    let mut source = RandomPermutation::from_seed(8);
    let a = permute(&deck, &mut source).unwrap();
    let b = permute(&deck, &mut RandomPermutation::from_seed(8)).unwrap();
    assert_eq!(a, b);

    let mut broken = |_: usize| vec![0_usize, 1];
    assert_eq!(
        permute(&deck, &mut broken),
        Err(PermutationError::LengthMismatch {
            expected: DECK_SIZE,
            actual: 2
        })
    );
}

#[test]
fn options_build_pipeline() {
    let deck = DeckOptions::default()
        .with_decks(2)
        .with_jokers(2)
        .without_rank(Rank::Two)
        .build();
    assert_eq!(deck.len(), (DECK_SIZE - 4) * 2 + 2);
    assert_eq!(deck[0], deck[1]);
    assert!(deck[deck.len() - 2..].iter().all(Card::is_joker));

    let seeded = DeckOptions::default().with_shuffle(ShuffleMode::Seeded(3));
    assert_eq!(seeded.build(), seeded.build());
    assert_eq!(counts(&seeded.build()), counts(&new_deck([])));
}

#[cfg(feature = "std")]
#[test]
fn options_entropy_shuffle_keeps_cards() {
    let options = DeckOptions::default().with_shuffle(ShuffleMode::Entropy);
    assert_eq!(counts(&options.build()), counts(&new_deck([])));
}

#[test]
fn shuffle_mode_matches_need_wildcard() {
    let describe = |mode: ShuffleMode| match mode {
        ShuffleMode::None => "ordered",
        ShuffleMode::Seeded(_) => "seeded",
        _ => "other",
    };
    assert_eq!(describe(ShuffleMode::default()), "ordered");
    assert_eq!(describe(ShuffleMode::Seeded(1)), "seeded");
}
