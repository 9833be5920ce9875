//! Round outcome and adjudication.

use core::cmp::Ordering;
use core::fmt;

use crate::card::Card;
use crate::hand::{HandAssessment, assess_hand, possible_hand_values};

/// Outcome of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Player has a natural blackjack and the dealer does not.
    NaturalBlackjack,
    /// Tie; no bet changes hands.
    Push,
    /// Player beats the dealer.
    PlayerWon,
    /// Dealer beats the player.
    PlayerLost,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NaturalBlackjack => "natural blackjack",
            Self::Push => "push",
            Self::PlayerWon => "player won",
            Self::PlayerLost => "player lost",
        })
    }
}

/// Decides the round from the player's and dealer's cards.
///
/// Naturals are settled first, then a player bust (which loses even if the
/// dealer also busts), then a dealer bust. Otherwise the highest totals are
/// compared. A dealer natural against a three-card player 21 is a push.
#[must_use]
pub fn assess_game(player: &[Card], dealer: &[Card]) -> GameResult {
    match (assess_hand(player), assess_hand(dealer)) {
        (HandAssessment::NaturalBlackjack, HandAssessment::NaturalBlackjack) => GameResult::Push,
        (HandAssessment::NaturalBlackjack, _) => GameResult::NaturalBlackjack,
        (HandAssessment::Bust, _) => GameResult::PlayerLost,
        (_, HandAssessment::Bust) => GameResult::PlayerWon,
        _ => {
            let player_value = possible_hand_values(player).highest();
            let dealer_value = possible_hand_values(dealer).highest();

            match player_value.cmp(&dealer_value) {
                Ordering::Greater => GameResult::PlayerWon,
                Ordering::Less => GameResult::PlayerLost,
                Ordering::Equal => GameResult::Push,
            }
        }
    }
}
