//! Watch an automatic search run to completion
//!
//! This demo drives a session against a small difficulty and prints
//! each attempt as the engine reports it, followed by the final
//! statistics and the retained history.

use mining_puzzle_engine::utils::{format_hash_rate, init_logging};
use mining_puzzle_engine::{Difficulty, SearchConfig, SearchEvent, SearchSession};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() {
    init_logging("warn");

    let config = SearchConfig::new(&b"Block #1"[..], Difficulty::new(2), 100)
        .expect("configuration is within bounds");
    let session = SearchSession::with_default_provider(config).expect("session construction");

    let (tx, mut rx) = mpsc::channel(256);
    session.set_event_sink(tx);

    println!("Searching for a digest with 2 leading zeros...\n");
    session.start().expect("session is idle");

    while let Some(event) = rx.recv().await {
        match event {
            SearchEvent::Attempt { nonce, digest } => {
                println!("  nonce {:>6}  {}", nonce, digest);
            }
            SearchEvent::Found {
                nonce,
                digest,
                attempts,
            } => {
                println!("\nFound after {} attempts!", attempts);
                println!("  nonce  {}", nonce);
                println!("  digest {}", digest);
                break;
            }
            _ => {}
        }
    }

    let stats = session.stats();
    println!(
        "\nElapsed {:.2}s at {}",
        stats.elapsed_seconds,
        format_hash_rate(stats.hash_rate)
    );

    println!("\nRecent attempts (newest first):");
    for entry in session.history() {
        let marker = if entry.matched { "*" } else { " " };
        println!("  {} nonce {:>6}  {}", marker, entry.nonce, entry.digest);
    }
}
