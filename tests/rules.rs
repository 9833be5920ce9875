//! Card, deck, hand evaluation, dealer policy and adjudication tests.

use std::collections::HashSet;

use bjround::{
    BLACKJACK, Card, DECK_SIZE, DealError, Deck, GameResult, HandAssessment, Rank, Suit,
    assess_game, assess_hand, dealer_should_take_card, possible_hand_values,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Builds a hand of spades with the given ranks.
fn spades(ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(rank, Suit::Spades)).collect()
}

fn drain(deck: &mut Deck) -> Vec<Card> {
    let mut cards = Vec::new();
    while let Ok(card) = deck.deal_one_card() {
        cards.push(card);
    }
    cards
}

#[test]
fn rank_values_and_display() {
    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::Seven.value(), 7);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Jack.value(), 10);
    assert_eq!(Rank::Queen.value(), 10);
    assert_eq!(Rank::King.value(), 10);

    assert_eq!(card(Rank::Queen, Suit::Hearts).to_string(), "Q♥");
    assert_eq!(card(Rank::Ten, Suit::Diamonds).to_string(), "10♦");
    assert_eq!(card(Rank::Ace, Suit::Spades), card(Rank::Ace, Suit::Spades));
    assert_ne!(card(Rank::Ace, Suit::Spades), card(Rank::Ace, Suit::Clubs));
}

#[test]
fn new_deck_deals_every_card_in_canonical_order() {
    let mut deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert_eq!(deck.deal_one_card(), Ok(card(rank, suit)));
        }
    }

    assert!(deck.is_empty());
}

#[test]
fn dealing_from_empty_deck_fails() {
    let mut deck = Deck::new();
    for _ in 0..DECK_SIZE {
        deck.deal_one_card().unwrap();
    }

    assert_eq!(deck.deal_one_card().unwrap_err(), DealError::EmptyDeck);
    assert_eq!(deck.deal_one_card().unwrap_err(), DealError::EmptyDeck);
    assert_eq!(deck.deal_cards(1).unwrap_err(), DealError::NotEnoughCards);
}

#[test]
fn deal_cards_is_all_or_nothing() {
    let mut deck = Deck::from_cards(spades(&[Rank::Two, Rank::Three, Rank::Four]));

    assert_eq!(deck.deal_cards(4).unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.deal_cards(2).unwrap(), spades(&[Rank::Two, Rank::Three]));
    assert_eq!(deck.iter().copied().collect::<Vec<_>>(), spades(&[Rank::Four]));
}

#[test]
fn shuffle_keeps_every_card_once() {
    let mut deck = Deck::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(1234));

    let cards = drain(&mut deck);
    assert_eq!(cards.len(), DECK_SIZE);

    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn shuffle_is_reproducible_for_a_seed() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(3723));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(3723));
    assert_eq!(first, second);

    let mut other = Deck::new();
    other.shuffle(&mut ChaCha8Rng::seed_from_u64(3724));
    assert_ne!(drain(&mut first), drain(&mut other));
}

#[test]
fn shuffle_with_seed_1234_deals_known_cards() {
    let mut deck = Deck::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(1234));

    assert_eq!(deck.deal_one_card(), Ok(card(Rank::Four, Suit::Hearts)));
    assert_eq!(deck.deal_one_card(), Ok(card(Rank::Six, Suit::Hearts)));
    assert_eq!(deck.deal_one_card(), Ok(card(Rank::Ace, Suit::Hearts)));
    for _ in 0..46 {
        deck.deal_one_card().unwrap();
    }
    assert_eq!(deck.deal_one_card(), Ok(card(Rank::Ten, Suit::Clubs)));
    assert_eq!(deck.deal_one_card(), Ok(card(Rank::Five, Suit::Spades)));
    assert_eq!(deck.deal_one_card(), Ok(card(Rank::Six, Suit::Diamonds)));
    assert!(deck.is_empty());
}

#[test]
fn deck_iterates_remaining_cards_by_reference() {
    let mut deck = Deck::new();
    deck.deal_one_card().unwrap();

    let mut count = 0;
    for remaining in &deck {
        assert_ne!(*remaining, card(Rank::Ace, Suit::Spades));
        count += 1;
    }
    assert_eq!(count, DECK_SIZE - 1);
    assert_eq!(deck.iter().next(), Some(&card(Rank::Two, Suit::Spades)));
}

#[test]
fn possible_hand_values_cases() {
    let cases: &[(&[Rank], &[u8])] = &[
        (&[Rank::Two, Rank::Three, Rank::Four], &[9]),
        (&[Rank::Ace, Rank::Two, Rank::Three], &[6, 16]),
        (&[Rank::Ace, Rank::Six, Rank::Five], &[12]),
        (&[Rank::Ace, Rank::Eight, Rank::Four, Rank::Queen], &[23]),
        (&[Rank::Four, Rank::Nine, Rank::Seven], &[20]),
        (&[Rank::King, Rank::Two, Rank::Five, Rank::Two], &[19]),
        (&[Rank::Ten, Rank::Eight, Rank::Seven], &[25]),
        (&[Rank::Ace, Rank::Six], &[7, 17]),
        (&[Rank::Ace, Rank::King], &[11, 21]),
        (&[Rank::Ace, Rank::Seven, Rank::Four], &[12]),
        (&[Rank::Ace, Rank::Ace, Rank::Eight], &[10, 20]),
        (&[Rank::Ace, Rank::Six, Rank::Six, Rank::Ten], &[23]),
        (&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace], &[4, 14]),
        (&[Rank::Ace, Rank::Ace, Rank::Ace], &[3, 13]),
        (&[], &[0]),
    ];

    for (ranks, expected) in cases {
        let values = possible_hand_values(&spades(ranks));
        assert_eq!(values.to_vec(), expected.to_vec(), "hand {ranks:?}");
    }
}

#[test]
fn hand_values_accessors() {
    let soft = possible_hand_values(&spades(&[Rank::Ace, Rank::Seven]));
    assert_eq!(soft.hard(), 8);
    assert_eq!(soft.soft(), Some(18));
    assert_eq!(soft.lowest(), 8);
    assert_eq!(soft.highest(), 18);
    assert!(soft.is_soft());
    assert!(soft.contains(18));

    let hard = possible_hand_values(&spades(&[Rank::King, Rank::Seven]));
    assert_eq!(hard.soft(), None);
    assert_eq!(hard.highest(), 17);
    assert!(!hard.is_soft());
}

#[test]
fn assess_hand_cases() {
    assert_eq!(assess_hand(&[]), HandAssessment::InsufficientCards);
    assert_eq!(
        assess_hand(&spades(&[Rank::Ace])),
        HandAssessment::InsufficientCards
    );
    assert_eq!(
        assess_hand(&spades(&[Rank::Ace, Rank::King])),
        HandAssessment::NaturalBlackjack
    );
    assert_eq!(
        assess_hand(&spades(&[Rank::Queen, Rank::Ace])),
        HandAssessment::NaturalBlackjack
    );
    assert_eq!(
        assess_hand(&spades(&[Rank::Ace, Rank::Jack])),
        HandAssessment::NaturalBlackjack
    );
    assert_eq!(
        assess_hand(&spades(&[Rank::King, Rank::Jack, Rank::Queen])),
        HandAssessment::Bust
    );
    assert_eq!(
        assess_hand(&spades(&[Rank::King, Rank::Jack])),
        HandAssessment::Normal
    );
    // 21 on three cards is not a natural.
    assert_eq!(
        assess_hand(&spades(&[Rank::Seven, Rank::Seven, Rank::Seven])),
        HandAssessment::Normal
    );
    assert_eq!(
        assess_hand(&spades(&[Rank::Ace, Rank::Ace, Rank::Nine])),
        HandAssessment::Normal
    );
    assert_eq!(
        assess_hand(&spades(&[Rank::Ace, Rank::Six, Rank::Six, Rank::Ten])),
        HandAssessment::Bust
    );
}

#[test]
fn dealer_policy_cases() {
    let cases: &[(&[Rank], bool)] = &[
        (&[Rank::King], true),
        (&[Rank::Two, Rank::Three], true),
        (&[Rank::Ace, Rank::Six], true),
        (&[Rank::Two, Rank::Four, Rank::Ace], true),
        (&[Rank::King, Rank::Six], true),
        (&[Rank::King, Rank::Seven], false),
        (&[Rank::Eight, Rank::Eight, Rank::Ace], false),
        (&[Rank::Five, Rank::King, Rank::Two], false),
        (&[Rank::Three, Rank::Four, Rank::Ace], false),
        (&[Rank::Ace, Rank::Seven], false),
        (&[Rank::King, Rank::Nine], false),
        (&[Rank::King, Rank::Queen, Rank::Five], false),
    ];

    for (ranks, draws) in cases {
        assert_eq!(
            dealer_should_take_card(&spades(ranks)),
            *draws,
            "dealer hand {ranks:?}"
        );
    }
}

#[test]
fn adjudication_naturals_come_first() {
    let natural = spades(&[Rank::Ace, Rank::King]);
    let other_natural = vec![card(Rank::Jack, Suit::Hearts), card(Rank::Ace, Suit::Hearts)];
    let twenty = spades(&[Rank::King, Rank::Queen]);
    let bust = spades(&[Rank::King, Rank::Queen, Rank::Five]);

    assert_eq!(assess_game(&natural, &other_natural), GameResult::Push);
    assert_eq!(assess_game(&natural, &twenty), GameResult::NaturalBlackjack);
    assert_eq!(assess_game(&natural, &bust), GameResult::NaturalBlackjack);
    assert_eq!(assess_game(&twenty, &natural), GameResult::PlayerLost);

    let three_card_21 = spades(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    assert_eq!(assess_game(&three_card_21, &natural), GameResult::Push);
}

#[test]
fn adjudication_busts() {
    let bust = spades(&[Rank::King, Rank::Queen, Rank::Five]);
    let dealer_bust = vec![
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Seven, Suit::Hearts),
    ];
    let eighteen = spades(&[Rank::King, Rank::Eight]);

    assert_eq!(assess_game(&bust, &dealer_bust), GameResult::PlayerLost);
    assert_eq!(assess_game(&bust, &eighteen), GameResult::PlayerLost);
    assert_eq!(assess_game(&eighteen, &dealer_bust), GameResult::PlayerWon);
}

#[test]
fn adjudication_compares_highest_totals() {
    let twenty = spades(&[Rank::King, Rank::Queen]);
    let nineteen = spades(&[Rank::King, Rank::Nine]);
    let eighteen = spades(&[Rank::King, Rank::Eight]);
    let soft_eighteen = spades(&[Rank::Ace, Rank::Seven]);
    let hard_seventeen = spades(&[Rank::King, Rank::Seven]);

    assert_eq!(assess_game(&twenty, &nineteen), GameResult::PlayerWon);
    assert_eq!(assess_game(&eighteen, &nineteen), GameResult::PlayerLost);
    assert_eq!(assess_game(&nineteen, &nineteen), GameResult::Push);
    assert_eq!(assess_game(&soft_eighteen, &hard_seventeen), GameResult::PlayerWon);
    assert_eq!(assess_game(&soft_eighteen, &eighteen), GameResult::Push);
}

#[test]
fn blackjack_constant_matches_natural_total() {
    let natural = spades(&[Rank::Ace, Rank::Queen]);
    assert_eq!(possible_hand_values(&natural).highest(), BLACKJACK);
}
