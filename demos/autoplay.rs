//! Plays one seeded round with a player who hits below 17.
//!
//! Usage: `cargo run --example autoplay -- [seed]`

use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{GameResult, Hand, Round, RoundOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
    };
    println!("Blackjack autoplay (seed {seed})");

    let mut round = Round::with_seed(RoundOptions::default(), seed);
    round.deal()?;

    if let Some(up) = round.dealer_hand().and_then(|hand| hand.cards().first().copied()) {
        println!("Dealer shows {up}");
    }

    while round.player_hand().is_some_and(|hand| hand.value() < 17) {
        let card = round.player_take_card()?;
        println!("Player draws {card}");
    }

    for card in round.dealer_play()? {
        println!("Dealer draws {card}");
    }

    if let (Some(player), Some(dealer)) = (round.player_hand(), round.dealer_hand()) {
        print_hand("Player", &player);
        print_hand("Dealer", &dealer);
    }

    let message = match round.result()? {
        GameResult::NaturalBlackjack => "Blackjack! Player wins 3:2.",
        GameResult::PlayerWon => "Player wins.",
        GameResult::PlayerLost => "Dealer wins.",
        GameResult::Push => "Push.",
    };
    println!("{message}");

    Ok(())
}

fn print_hand(label: &str, hand: &Hand) {
    println!(
        "{label}: {hand} ({}, {})",
        hand.value(),
        hand.assessment()
    );
}
