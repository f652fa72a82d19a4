//! Deals through a full deck and prints what happens.
//!
//! Run with `RUST_LOG=decksim=debug` to see every deal logged.

use decksim::Deck;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    println!("Welcome to the casino!");

    let mut deck = Deck::new();
    print!("{deck}");

    println!("Shuffling...");
    deck.shuffle();

    let _first_hand = deck.deal_hand(50);
    let second_hand = deck.deal_hand(10);

    println!("Second hand:");
    print!("{second_hand}");

    print!("{deck}");
}
