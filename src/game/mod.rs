//! Round engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::AssessError;
use crate::hand::Hand;
use crate::options::RoundOptions;
use crate::result::{GameResult, assess_game};

mod actions;
mod dealer;
pub mod state;

pub use dealer::dealer_should_take_card;
pub use state::Party;

/// A single round of blackjack between one player and the dealer.
///
/// The round owns the deck and both hands. Callers only ever see copies of
/// the hands, so nothing outside the round can alter its state.
///
/// A hand is absent until its initial two cards are dealt; operations that
/// need a hand report that case as an error rather than treating it like an
/// empty hand.
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards not yet dealt.
    deck: Deck,
    /// Round options.
    options: RoundOptions,
    /// Player's hand, once dealt.
    player: Option<Hand>,
    /// Dealer's hand, once dealt.
    dealer: Option<Hand>,
}

impl Round {
    /// Creates a round with a fresh deck shuffled by `rng`.
    pub fn new<R: Rng + ?Sized>(options: RoundOptions, rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        log::debug!("new round with shuffled deck ({} cards)", deck.len());
        Self::from_deck(options, deck)
    }

    /// Creates a round whose deck is shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Round, RoundOptions};
    ///
    /// let round = Round::with_seed(RoundOptions::default(), 42);
    /// assert_eq!(round.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn with_seed(options: RoundOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new(options, &mut rng)
    }

    /// Creates a round that deals from `deck` as given, without shuffling.
    #[must_use]
    pub const fn from_deck(options: RoundOptions, deck: Deck) -> Self {
        Self {
            deck,
            options,
            player: None,
            dealer: None,
        }
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns a copy of the player's hand, if dealt.
    #[must_use]
    pub fn player_hand(&self) -> Option<Hand> {
        self.player.clone()
    }

    /// Returns a copy of the dealer's hand, if dealt.
    #[must_use]
    pub fn dealer_hand(&self) -> Option<Hand> {
        self.dealer.clone()
    }

    /// Returns a copy of the given party's hand, if dealt.
    #[must_use]
    pub fn hand(&self, party: Party) -> Option<Hand> {
        self.hand_ref(party).cloned()
    }

    /// Decides the round from the current hands.
    ///
    /// Nothing stops this from being called mid-round; callers should wait
    /// until both parties have finished drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if either hand has not been dealt.
    pub fn result(&self) -> Result<GameResult, AssessError> {
        let player = self
            .player
            .as_ref()
            .ok_or(AssessError::PlayerHandNotDealt)?;
        let dealer = self
            .dealer
            .as_ref()
            .ok_or(AssessError::DealerHandNotDealt)?;

        let result = assess_game(player.cards(), dealer.cards());
        log::debug!("round result: {result} (player {player}, dealer {dealer})");
        Ok(result)
    }

    const fn hand_ref(&self, party: Party) -> Option<&Hand> {
        match party {
            Party::Player => self.player.as_ref(),
            Party::Dealer => self.dealer.as_ref(),
        }
    }

    const fn slot_mut(&mut self, party: Party) -> &mut Option<Hand> {
        match party {
            Party::Player => &mut self.player,
            Party::Dealer => &mut self.dealer,
        }
    }
}
