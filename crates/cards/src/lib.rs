// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(kd.to_string(), "KD");
//! ```
//!
//! cards can also be built from validated integers or parsed from the
//! name format used at the UI boundary:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let qs = Card::from_rank_suit(12, 4).unwrap();
//! assert_eq!(qs, Card::new(Rank::Queen, Suit::Spades));
//!
//! let qs = Card::from_name("Queen_of_Spades").unwrap();
//! assert_eq!(qs, Card::new(Rank::Queen, Suit::Spades));
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the
//! deck. For example to iterate through all 5 cards hands:
//!
//! ```
//! # use showdown_cards::{Card, Deck, Rank, Suit};
//! // Iterate through all 5 cards hands (2.5M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! The [combos] module has the choose-k helpers used to enumerate
//! sub-hands out of a larger cards pool:
//!
//! ```
//! # use showdown_cards::combos;
//! assert_eq!(combos::nck(7, 5), 21);
//!
//! let mut subsets = Vec::new();
//! combos::for_each_combination(4, 2, |idx| subsets.push(idx.to_vec()));
//! assert_eq!(subsets.len(), 6);
//! assert_eq!(subsets[0], [0, 1]);
//! assert_eq!(subsets[5], [2, 3]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combos;

mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod parse;
pub use parse::CardError;
