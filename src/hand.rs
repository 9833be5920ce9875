//! Hand representation and evaluation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Best total a hand can reach without busting.
pub const BLACKJACK: u8 = 21;

/// Extra points when one ace is counted as 11 instead of 1.
const SOFT_ACE_BONUS: u8 = 10;

/// The totals a set of cards can represent.
///
/// The hard total counts every ace as 1. The soft total counts exactly one
/// ace as 11 and only exists when it does not exceed 21, so at most two
/// values are ever possible and the soft one is always the larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValues {
    hard: u8,
    soft: Option<u8>,
}

impl HandValues {
    /// Returns the total with every ace counted as 1.
    #[must_use]
    pub const fn hard(&self) -> u8 {
        self.hard
    }

    /// Returns the total with one ace counted as 11, if it does not bust.
    #[must_use]
    pub const fn soft(&self) -> Option<u8> {
        self.soft
    }

    /// Returns the smallest possible total.
    #[must_use]
    pub const fn lowest(&self) -> u8 {
        self.hard
    }

    /// Returns the largest possible total, the one that counts for play.
    #[must_use]
    pub const fn highest(&self) -> u8 {
        match self.soft {
            Some(soft) => soft,
            None => self.hard,
        }
    }

    /// Returns whether a soft total exists.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft.is_some()
    }

    /// Returns whether `value` is one of the possible totals.
    #[must_use]
    pub fn contains(&self, value: u8) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Iterates over the possible totals in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> {
        core::iter::once(self.hard).chain(self.soft)
    }

    /// Collects the possible totals in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

/// Computes every total the cards can represent.
///
/// Only one ace is ever promoted to 11; any further ace would bust the hand.
#[must_use]
pub fn possible_hand_values(cards: &[Card]) -> HandValues {
    let mut hard: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        has_ace |= card.rank.is_ace();
        hard = hard.saturating_add(card.value());
    }

    let soft = (has_ace && hard <= BLACKJACK - SOFT_ACE_BONUS).then(|| hard + SOFT_ACE_BONUS);

    HandValues { hard, soft }
}

/// Classification of a hand at a moment in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandAssessment {
    /// Fewer than two cards.
    InsufficientCards,
    /// Two cards worth 21.
    NaturalBlackjack,
    /// Every possible total exceeds 21.
    Bust,
    /// Any other hand.
    Normal,
}

impl fmt::Display for HandAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InsufficientCards => "insufficient cards",
            Self::NaturalBlackjack => "natural blackjack",
            Self::Bust => "bust",
            Self::Normal => "normal",
        })
    }
}

/// Classifies a hand.
///
/// The card count is checked before any total, so a single ace is
/// [`HandAssessment::InsufficientCards`] rather than a normal hand.
#[must_use]
pub fn assess_hand(cards: &[Card]) -> HandAssessment {
    if cards.len() < 2 {
        return HandAssessment::InsufficientCards;
    }

    let values = possible_hand_values(cards);

    if cards.len() == 2 && values.contains(BLACKJACK) {
        HandAssessment::NaturalBlackjack
    } else if values.lowest() > BLACKJACK {
        HandAssessment::Bust
    } else {
        HandAssessment::Normal
    }
}

/// A hand held by the player or the dealer.
///
/// Cards are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the possible totals of the hand.
    #[must_use]
    pub fn values(&self) -> HandValues {
        possible_hand_values(&self.cards)
    }

    /// Returns the playing total of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.values().highest()
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.values().is_soft()
    }

    /// Classifies the hand.
    #[must_use]
    pub fn assessment(&self) -> HandAssessment {
        assess_hand(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
