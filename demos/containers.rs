//! Thread-safe container example
//!
//! Run with: cargo run --example containers

use safe_toolkit::prelude::*;
use std::thread;

fn main() {
    println!("=== Safe Toolkit - Containers Example ===\n");

    let scores = OrderedMap::new();
    let seen = UniqueSlice::new();
    let events = Slice::new();

    thread::scope(|s| {
        for player in ["ann", "bo", "cy"] {
            let (scores, seen, events) = (&scores, &seen, &events);
            s.spawn(move || {
                for round in 1..=3 {
                    scores.set(player, round * 10);
                    seen.append(player);
                    events.append(format!("{} finished round {}", player, round));
                }
            });
        }
    });

    println!("Players (first-seen order): {:?}", seen.items());
    println!("Scores: {:?}", scores);
    println!("{} events recorded", events.len());

    scores.delete(&"bo");
    scores.set("bo", 99);
    println!("After re-adding bo: {:?}", scores.keys());
}
