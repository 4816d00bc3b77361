// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player hole cards.
use std::fmt;

use showdown_cards::Card;

use crate::{best::BestHand, error::EvalError};

/// One player's hole cards.
///
/// A player holds 2 cards in Hold'em or 4 in Omaha. The hand is built
/// whole from distinct cards and never changes afterwards; the community
/// cards stay shared and are passed in where needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHand {
    cards: Vec<Card>,
}

impl PlayerHand {
    /// Creates a player hand from 2 or 4 distinct hole cards.
    pub fn new(cards: &[Card]) -> Result<PlayerHand, EvalError> {
        if cards.len() != 2 && cards.len() != 4 {
            return Err(EvalError::InvalidHoleCards(cards.len()));
        }

        for i in 0..cards.len() {
            for j in (i + 1)..cards.len() {
                if cards[i] == cards[j] {
                    return Err(EvalError::DuplicateCard(cards[i]));
                }
            }
        }

        Ok(Self {
            cards: cards.to_vec(),
        })
    }

    /// The hole cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// True for a 4 cards Omaha hand.
    pub fn is_omaha(&self) -> bool {
        self.cards.len() == 4
    }

    /// The best 5 cards hand this player makes with the community cards.
    pub fn best_hand(&self, community: &[Card]) -> Result<BestHand, EvalError> {
        BestHand::find(&self.cards, community)
    }
}

impl fmt::Display for PlayerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for card in &self.cards {
            write!(f, "{sep}{card}")?;
            sep = " ";
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::HandRank;

    fn cards(hand: &str) -> Vec<Card> {
        hand.split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect()
    }

    #[test]
    fn holds_two_or_four_cards() {
        let hand = PlayerHand::new(&cards("AS KD")).unwrap();
        assert!(!hand.is_omaha());
        assert_eq!(hand.cards(), cards("AS KD"));

        let hand = PlayerHand::new(&cards("AS KD QH JC")).unwrap();
        assert!(hand.is_omaha());

        for bad in ["", "AS", "AS KD QH", "AS KD QH JC TS"] {
            let err = PlayerHand::new(&cards(bad)).unwrap_err();
            assert!(matches!(err, EvalError::InvalidHoleCards(_)));
        }
    }

    #[test]
    fn rejects_duplicates() {
        let dup: Card = "AS".parse().unwrap();
        let err = PlayerHand::new(&[dup, dup]).unwrap_err();
        assert_eq!(err, EvalError::DuplicateCard(dup));
    }

    #[test]
    fn best_hand_with_community() {
        let hand = PlayerHand::new(&cards("8C 8D")).unwrap();
        let best = hand.best_hand(&cards("8H 2S 5D")).unwrap();
        assert_eq!(best.value().rank(), HandRank::ThreeOfAKind);
    }

    #[test]
    fn displays_cards() {
        let hand = PlayerHand::new(&cards("AS KD")).unwrap();
        assert_eq!(hand.to_string(), "AS KD");
    }
}
