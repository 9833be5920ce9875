extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{AssessError, DrawError};
use crate::hand::{HandValues, possible_hand_values};

use super::{Party, Round};

/// Whether the dealer draws on the given totals.
///
/// The decision is made on the highest total: 16 or less draws, 18 or more
/// stands, and 17 draws only when it is soft and the table hits soft 17.
const fn should_draw(values: HandValues, stand_on_soft_17: bool) -> bool {
    match values.highest() {
        ..=16 => true,
        17 => values.is_soft() && !stand_on_soft_17,
        _ => false,
    }
}

/// Returns whether a dealer holding `cards` must take another card.
///
/// This is the casino rule that hits soft 17: ace-six draws, king-seven
/// stands.
///
/// # Example
///
/// ```
/// use bjround::{Card, Rank, Suit, dealer_should_take_card};
///
/// let soft_17 = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Six, Suit::Hearts)];
/// assert!(dealer_should_take_card(&soft_17));
/// ```
#[must_use]
pub fn dealer_should_take_card(cards: &[Card]) -> bool {
    should_draw(possible_hand_values(cards), false)
}

impl Round {
    /// Returns whether the dealer must take another card under this round's
    /// options.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer's hand has not been dealt.
    pub fn dealer_should_take_card(&self) -> Result<bool, AssessError> {
        let dealer = self
            .dealer
            .as_ref()
            .ok_or(AssessError::DealerHandNotDealt)?;

        let draw = should_draw(dealer.values(), self.options.stand_on_soft_17);
        log::trace!("dealer at {:?} draws: {draw}", dealer.values().to_vec());
        Ok(draw)
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// Draws until [`Round::dealer_should_take_card`] answers no and returns
    /// the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer's hand has not been dealt or the deck
    /// runs out while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DrawError> {
        let mut drawn_cards = Vec::new();

        while self.dealer_should_take_card()? {
            drawn_cards.push(self.take_card(Party::Dealer)?);
        }

        log::debug!("dealer stands after drawing {} cards", drawn_cards.len());
        Ok(drawn_cards)
    }
}
