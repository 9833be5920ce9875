//! Round participant types.

use core::fmt;

/// A participant in the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Party {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "player",
            Self::Dealer => "dealer",
        })
    }
}
