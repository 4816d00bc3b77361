// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
// Elapsed:         0.102s
// Hands/sec:       25480000
//
// High Card:       1302540
// One  Pair:       1098240
// Two Pairs:       123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```

use std::time::Instant;

use showdown_cards::combos;
use showdown_eval::*;

#[rustfmt::skip]
fn main() {
    // Evaluate all 2.5M 5 cards hands.
    let now = Instant::now();
    let mut counts = [0usize; 9];

    Deck::default().for_each(5, |hand| {
        let rank = HandValue::eval(hand).expect("deck hands are distinct").rank();
        counts[rank as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    assert_eq!(total, combos::nck(52, 5));

    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandRank::HighCard as usize]);
    println!("One  Pair:       {}", counts[HandRank::OnePair as usize]);
    println!("Two Pairs:       {}", counts[HandRank::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Full House:      {}", counts[HandRank::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandRank::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush as usize]);
}
