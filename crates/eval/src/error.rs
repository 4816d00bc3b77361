// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator and simulator errors.
use thiserror::Error;

use showdown_cards::Card;

/// Errors raised by the hand evaluator and the equity simulator.
///
/// Every violated precondition surfaces synchronously at the call that
/// broke it; nothing is retried and inputs are never truncated or padded
/// to fit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A hand passed to the 5 card ranker has the wrong cardinality.
    #[error("a poker hand must have exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    /// A player holds the wrong number of hole cards.
    #[error("hole cards must be 2 for Hold'em or 4 for Omaha, and equal for every player, got {0}")]
    InvalidHoleCards(usize),
    /// The community cards cannot complete a 5 card hand.
    #[error("cannot form a 5 card hand from {0} community cards")]
    HandNotFormed(usize),
    /// The same card appears twice in a pool that must be a set.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// The deck has fewer cards left than the board needs.
    #[error("not enough cards left in the deck to complete the board")]
    InsufficientCards,
    /// The simulator supports 1 to 5 players.
    #[error("player count must be between 1 and 5, got {0}")]
    InvalidPlayerCount(usize),
}
