// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator and equity simulator.
//!
//! The evaluator classifies a 5 cards hand into one of the 9 standard
//! categories and orders hands of the same category by their tie-break
//! ranks. [HandValue]s are totally ordered, comparing two of them
//! compares the hands:
//!
//! ```
//! # use showdown_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]).unwrap();
//! let v2 = HandValue::eval(&cards[5..]).unwrap();
//! assert!(v2 > v1);
//! ```
//!
//! [BestHand] picks the strongest 5 cards sub-hand out of hole and
//! community cards, for Hold'em and Omaha pool shapes:
//!
//! ```
//! # use showdown_eval::*;
//! let hole: Vec<Card> = ["9S", "TS"].iter().map(|c| c.parse().unwrap()).collect();
//! let board: Vec<Card> = ["JS", "QS", "KS", "2D", "7C"]
//!     .iter()
//!     .map(|c| c.parse().unwrap())
//!     .collect();
//!
//! let best = BestHand::find(&hole, &board).unwrap();
//! assert_eq!(best.value().rank(), HandRank::StraightFlush);
//! ```
//!
//! and [simulate_equity] estimates each player's probability of winning
//! the showdown by sampling random board completions from an explicit
//! random source:
//!
//! ```
//! # use showdown_eval::*;
//! # use rand::{SeedableRng, rngs::SmallRng};
//! let players = vec![
//!     PlayerHand::new(&["AS".parse().unwrap(), "AH".parse().unwrap()]).unwrap(),
//!     PlayerHand::new(&["KD".parse().unwrap(), "KC".parse().unwrap()]).unwrap(),
//! ];
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let equities = simulate_equity(&players, &[], 1_000, &mut rng).unwrap();
//! assert!(equities[0].win_rate() > equities[1].win_rate());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HAND_SIZE, HandRank, HandValue};

mod best;
pub use best::{BestHand, MAX_COMMUNITY, MIN_COMMUNITY};

mod error;
pub use error::EvalError;

mod hand;
pub use hand::PlayerHand;

mod equity;
#[cfg(feature = "parallel")]
pub use equity::par_simulate_equity;
pub use equity::{DEFAULT_TRIALS, MAX_PLAYERS, PlayerEquity, simulate_equity};

// Reexport cards types.
pub use showdown_cards::{Card, CardError, Deck, Rank, Suit};
