// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Classifies an exactly 5 cards hand into one of the 9 standard
//! categories and extracts the tie-break ranks that order hands within a
//! category. The evaluator runs a fixed pipeline of pure category checks
//! over rank frequency counts, in descending category precedence; the
//! first match wins.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::Card;

use crate::error::EvalError;

/// The number of cards in an evaluated hand.
pub const HAND_SIZE: usize = 5;

/// The sorted rank values of the wheel, the A-2-3-4-5 straight where the
/// ace plays low.
const WHEEL: [u8; HAND_SIZE] = [2, 3, 4, 5, 14];

/// A Poker hand category, higher categories beat lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// Tie-break ranks padded to a fixed width.
///
/// Each category produces a fixed number of tie-break ranks so the zero
/// padding never takes part in a same category comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
struct TieBreakers {
    ranks: [u8; HAND_SIZE],
    len: u8,
}

/// A hand evaluation result.
///
/// Values order by category first, then by the tie-break ranks most
/// significant first; two equal values mean the hands tie and split the
/// pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    breakers: TieBreakers,
}

impl HandValue {
    /// Evaluates a 5 cards hand.
    ///
    /// Fails with [EvalError::InvalidHandSize] for any other cards count
    /// and with [EvalError::DuplicateCard] if a card repeats, the hand is
    /// never truncated or padded.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        let cards: &[Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;

        for i in 0..HAND_SIZE {
            for j in (i + 1)..HAND_SIZE {
                if cards[i] == cards[j] {
                    return Err(EvalError::DuplicateCard(cards[i]));
                }
            }
        }

        Ok(Self::eval_exact(cards))
    }

    /// Evaluates every hand in a collection.
    pub fn eval_each<'a, I>(hands: I) -> Result<Vec<HandValue>, EvalError>
    where
        I: IntoIterator<Item = &'a [Card]>,
    {
        hands.into_iter().map(Self::eval).collect()
    }

    /// Evaluates every hand in a collection and returns the maximal value.
    ///
    /// The first maximal value found wins; callers can still detect a
    /// split pot by comparing the returned value against each hand.
    /// Returns `None` for an empty collection.
    pub fn eval_best<'a, I>(hands: I) -> Result<Option<HandValue>, EvalError>
    where
        I: IntoIterator<Item = &'a [Card]>,
    {
        let mut best = None;
        for hand in hands {
            let value = Self::eval(hand)?;
            // Strict comparison keeps the first of equal maximal values.
            match best {
                Some(b) if value <= b => {}
                _ => best = Some(value),
            }
        }

        Ok(best)
    }

    /// Evaluates 5 distinct cards.
    pub(crate) fn eval_exact(cards: &[Card; HAND_SIZE]) -> HandValue {
        let mut values = [0u8; HAND_SIZE];
        for (value, card) in values.iter_mut().zip(cards) {
            *value = card.rank().value();
        }
        values.sort_unstable();

        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight = is_straight(&values);

        let mut counts = [0u8; 15];
        for &value in &values {
            counts[value as usize] += 1;
        }

        straight_flush(&values, straight, flush)
            .or_else(|| four_of_a_kind(&counts))
            .or_else(|| full_house(&counts))
            .or_else(|| flush_value(&values, flush))
            .or_else(|| straight_value(&values, straight))
            .or_else(|| three_of_a_kind(&counts))
            .or_else(|| two_pairs(&counts))
            .or_else(|| one_pair(&counts))
            .unwrap_or_else(|| high_card(&values))
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break rank values, most significant first.
    pub fn tie_breakers(&self) -> &[u8] {
        &self.breakers.ranks[..self.breakers.len as usize]
    }

    fn new(rank: HandRank, breakers: &[u8]) -> HandValue {
        let mut ranks = [0u8; HAND_SIZE];
        ranks[..breakers.len()].copy_from_slice(breakers);

        Self {
            rank,
            breakers: TieBreakers {
                ranks,
                len: breakers.len() as u8,
            },
        }
    }
}

/// True for five consecutive rank values or the wheel.
fn is_straight(values: &[u8; HAND_SIZE]) -> bool {
    values.windows(2).all(|w| w[0] + 1 == w[1]) || *values == WHEEL
}

/// The straight high card, the five for the wheel where the ace plays low.
fn straight_high(values: &[u8; HAND_SIZE]) -> u8 {
    if *values == WHEEL { 5 } else { values[HAND_SIZE - 1] }
}

/// Rank values appearing exactly `count` times, highest first.
fn ranks_with_count(counts: &[u8; 15], count: u8) -> impl Iterator<Item = u8> + '_ {
    (2..=14u8).rev().filter(move |&v| counts[v as usize] == count)
}

fn straight_flush(values: &[u8; HAND_SIZE], straight: bool, flush: bool) -> Option<HandValue> {
    (straight && flush).then(|| HandValue::new(HandRank::StraightFlush, &[straight_high(values)]))
}

fn four_of_a_kind(counts: &[u8; 15]) -> Option<HandValue> {
    let quad = ranks_with_count(counts, 4).next()?;
    let kicker = ranks_with_count(counts, 1).next()?;
    Some(HandValue::new(HandRank::FourOfAKind, &[quad, kicker]))
}

fn full_house(counts: &[u8; 15]) -> Option<HandValue> {
    let triplet = ranks_with_count(counts, 3).next()?;
    let pair = ranks_with_count(counts, 2).next()?;
    Some(HandValue::new(HandRank::FullHouse, &[triplet, pair]))
}

fn flush_value(values: &[u8; HAND_SIZE], flush: bool) -> Option<HandValue> {
    flush.then(|| HandValue::new(HandRank::Flush, &descending(values)))
}

fn straight_value(values: &[u8; HAND_SIZE], straight: bool) -> Option<HandValue> {
    straight.then(|| HandValue::new(HandRank::Straight, &[straight_high(values)]))
}

fn three_of_a_kind(counts: &[u8; 15]) -> Option<HandValue> {
    let triplet = ranks_with_count(counts, 3).next()?;

    let mut breakers = [triplet, 0, 0];
    for (slot, kicker) in breakers[1..].iter_mut().zip(ranks_with_count(counts, 1)) {
        *slot = kicker;
    }

    Some(HandValue::new(HandRank::ThreeOfAKind, &breakers))
}

fn two_pairs(counts: &[u8; 15]) -> Option<HandValue> {
    let mut pairs = ranks_with_count(counts, 2);
    let high = pairs.next()?;
    let low = pairs.next()?;
    let kicker = ranks_with_count(counts, 1).next()?;
    Some(HandValue::new(HandRank::TwoPair, &[high, low, kicker]))
}

fn one_pair(counts: &[u8; 15]) -> Option<HandValue> {
    let pair = ranks_with_count(counts, 2).next()?;

    let mut breakers = [pair, 0, 0, 0];
    for (slot, kicker) in breakers[1..].iter_mut().zip(ranks_with_count(counts, 1)) {
        *slot = kicker;
    }

    Some(HandValue::new(HandRank::OnePair, &breakers))
}

fn high_card(values: &[u8; HAND_SIZE]) -> HandValue {
    HandValue::new(HandRank::HighCard, &descending(values))
}

fn descending(values: &[u8; HAND_SIZE]) -> [u8; HAND_SIZE] {
    let mut ranks = *values;
    ranks.reverse();
    ranks
}
