//! A single-round blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that owns a shuffled deck and the
//! player's and dealer's hands, together with the pure rules it runs on:
//! hand valuation, the dealer's drawing policy, and adjudication.
//!
//! # Example
//!
//! ```
//! use bjround::{Round, RoundOptions};
//!
//! let mut round = Round::with_seed(RoundOptions::default(), 42);
//! round.deal()?;
//! while round.player_hand().is_some_and(|hand| hand.value() < 17) {
//!     round.player_take_card()?;
//! }
//! round.dealer_play()?;
//! let _result = round.result()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{AssessError, DealError, DrawError};
pub use game::{Party, Round, dealer_should_take_card};
pub use hand::{BLACKJACK, Hand, HandAssessment, HandValues, assess_hand, possible_hand_values};
pub use options::{DealOrder, RoundOptions};
pub use result::{GameResult, assess_game};
