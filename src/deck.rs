//! A single 52-card deck dealt from the front.

extern crate alloc;

use alloc::collections::{VecDeque, vec_deque};
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered, consumable sequence of cards.
///
/// A fresh deck holds every rank and suit combination exactly once, grouped
/// by suit (spades, hearts, clubs, diamonds) with ranks ascending from ace
/// to king. Cards only ever leave the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a stacked deck that deals `cards` front to back.
    ///
    /// No uniqueness check is made; this is meant for arranged play and
    /// tests.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Shuffles the remaining cards with the given random source.
    ///
    /// The same source state always yields the same order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        log::trace!("shuffled {} cards", self.cards.len());
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal_one_card(&mut self) -> Result<Card, DealError> {
        self.draw().ok_or(DealError::EmptyDeck)
    }

    /// Draws the front card, if any.
    pub(crate) fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Removes and returns the next `count` cards, or none at all if fewer
    /// remain.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than `count` cards remain.
    pub fn deal_cards(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        if self.cards.len() < count {
            return Err(DealError::NotEnoughCards);
        }
        Ok(self.cards.drain(..count).collect())
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards in dealing order.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
