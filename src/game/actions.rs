extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DealError, DrawError};
use crate::hand::Hand;
use crate::options::DealOrder;

use super::{Party, Round};

/// Cards each party receives on the initial deal.
const INITIAL_CARDS: usize = 2;

impl Round {
    /// Deals the initial two cards to both parties.
    ///
    /// Cards go out in the order set by [`RoundOptions::deal_order`]. With the
    /// default [`DealOrder::PlayerFirst`] the player takes the first two cards
    /// of the deck and the dealer the next two.
    ///
    /// [`RoundOptions::deal_order`]: crate::RoundOptions::deal_order
    ///
    /// # Errors
    ///
    /// Returns an error if either hand was already dealt or fewer than four
    /// cards remain. Nothing is dealt in either case.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.player.is_some() || self.dealer.is_some() {
            return Err(DealError::AlreadyDealt);
        }
        if self.deck.len() < INITIAL_CARDS * 2 {
            return Err(DealError::NotEnoughCards);
        }

        match self.options.deal_order {
            DealOrder::PlayerFirst => {
                self.deal_initial(Party::Player)?;
                self.deal_initial(Party::Dealer)?;
            }
            DealOrder::DealerFirst => {
                self.deal_initial(Party::Dealer)?;
                self.deal_initial(Party::Player)?;
            }
            DealOrder::Alternating => {
                let mut player = Hand::new();
                let mut dealer = Hand::new();
                for _ in 0..INITIAL_CARDS {
                    player.add_card(self.deck.deal_one_card()?);
                    dealer.add_card(self.deck.deal_one_card()?);
                }
                log::debug!("dealt player {player}, dealer {dealer}");
                self.player = Some(player);
                self.dealer = Some(dealer);
            }
        }

        Ok(())
    }

    /// Deals the player's initial two cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's hand was already dealt or fewer than
    /// two cards remain.
    pub fn deal_player_initial(&mut self) -> Result<(), DealError> {
        self.deal_initial(Party::Player)
    }

    /// Deals the dealer's initial two cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer's hand was already dealt or fewer than
    /// two cards remain.
    pub fn deal_dealer_initial(&mut self) -> Result<(), DealError> {
        self.deal_initial(Party::Dealer)
    }

    /// Deals one more card to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's hand has not been dealt or the deck
    /// is empty.
    pub fn player_take_card(&mut self) -> Result<Card, DrawError> {
        self.take_card(Party::Player)
    }

    /// Deals one more card to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer's hand has not been dealt or the deck
    /// is empty.
    pub fn dealer_take_card(&mut self) -> Result<Card, DrawError> {
        self.take_card(Party::Dealer)
    }

    fn deal_initial(&mut self, party: Party) -> Result<(), DealError> {
        if self.hand_ref(party).is_some() {
            return Err(DealError::AlreadyDealt);
        }

        let cards: Vec<Card> = self.deck.deal_cards(INITIAL_CARDS)?;
        let hand = Hand::from(cards);
        log::debug!("dealt {party} {hand}");
        *self.slot_mut(party) = Some(hand);

        Ok(())
    }

    pub(super) fn take_card(&mut self, party: Party) -> Result<Card, DrawError> {
        if self.hand_ref(party).is_none() {
            return Err(DrawError::HandNotDealt);
        }

        let card = self.deck.draw().ok_or(DrawError::EmptyDeck)?;
        if let Some(hand) = self.slot_mut(party) {
            hand.add_card(card);
        }
        log::trace!("{party} takes {card}");

        Ok(card)
    }
}
