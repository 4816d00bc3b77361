// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Validated card construction and boundary parsers.
//!
//! The table layer identifies cards either by `"Rank_of_Suit"` names
//! ("Ace_of_Spades", "10_of_Hearts") or by rank and suit integers; both
//! forms are validated here and never silently coerced.
use ahash::AHashMap;
use std::{str::FromStr, sync::LazyLock};
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Errors raised building a card from boundary inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    /// The rank integer is outside the 2..=14 range.
    #[error("invalid card: rank {0} must be between 2 and 14")]
    InvalidRank(u8),
    /// The suit integer is outside the 1..=4 range.
    #[error("invalid card: suit {0} must be between 1 and 4")]
    InvalidSuit(u8),
    /// The card name does not match any known card.
    #[error("unrecognized card name '{0}'")]
    UnknownName(String),
}

/// Rank names as the table layer spells them.
static RANK_NAMES: LazyLock<AHashMap<&'static str, Rank>> = LazyLock::new(|| {
    let mut ranks = AHashMap::with_capacity(13);

    ranks.insert("2", Rank::Deuce);
    ranks.insert("3", Rank::Trey);
    ranks.insert("4", Rank::Four);
    ranks.insert("5", Rank::Five);
    ranks.insert("6", Rank::Six);
    ranks.insert("7", Rank::Seven);
    ranks.insert("8", Rank::Eight);
    ranks.insert("9", Rank::Nine);
    ranks.insert("10", Rank::Ten);
    ranks.insert("Jack", Rank::Jack);
    ranks.insert("Queen", Rank::Queen);
    ranks.insert("King", Rank::King);
    ranks.insert("Ace", Rank::Ace);

    ranks
});

impl Rank {
    /// Builds a rank from its numeric value, 2 up to 14 for the ace.
    pub fn from_value(value: u8) -> Result<Rank, CardError> {
        match value {
            2 => Ok(Rank::Deuce),
            3 => Ok(Rank::Trey),
            4 => Ok(Rank::Four),
            5 => Ok(Rank::Five),
            6 => Ok(Rank::Six),
            7 => Ok(Rank::Seven),
            8 => Ok(Rank::Eight),
            9 => Ok(Rank::Nine),
            10 => Ok(Rank::Ten),
            11 => Ok(Rank::Jack),
            12 => Ok(Rank::Queen),
            13 => Ok(Rank::King),
            14 => Ok(Rank::Ace),
            v => Err(CardError::InvalidRank(v)),
        }
    }
}

impl Suit {
    /// Builds a suit from its numeric id, 1=Clubs up to 4=Spades.
    pub fn from_id(id: u8) -> Result<Suit, CardError> {
        match id {
            1 => Ok(Suit::Clubs),
            2 => Ok(Suit::Diamonds),
            3 => Ok(Suit::Hearts),
            4 => Ok(Suit::Spades),
            v => Err(CardError::InvalidSuit(v)),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl Card {
    /// Builds a card from a rank value and a suit id.
    pub fn from_rank_suit(rank: u8, suit: u8) -> Result<Card, CardError> {
        Ok(Card::new(Rank::from_value(rank)?, Suit::from_id(suit)?))
    }

    /// Parses a `"Rank_of_Suit"` card name.
    ///
    /// Rank tokens are `"2"` to `"10"`, `"Jack"`, `"Queen"`, `"King"`,
    /// `"Ace"` and must match exactly; suit tokens match ignoring case.
    pub fn from_name(name: &str) -> Result<Card, CardError> {
        let unknown = || CardError::UnknownName(name.to_string());

        let (rank, suit) = name.split_once("_of_").ok_or_else(unknown)?;
        let rank = RANK_NAMES.get(rank).ok_or_else(unknown)?;
        let suit = Suit::suits()
            .find(|s| s.name().eq_ignore_ascii_case(suit))
            .ok_or_else(unknown)?;

        Ok(Card::new(*rank, suit))
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the compact two character form produced by [Card]'s
    /// `Display`, e.g. `"AS"` or `"td"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CardError::UnknownName(s.to_string());

        let mut chars = s.chars();
        let rank = chars.next().ok_or_else(unknown)?;
        let suit = chars.next().ok_or_else(unknown)?;
        if chars.next().is_some() {
            return Err(unknown());
        }

        let rank = match rank.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(unknown()),
        };
        let suit = match suit.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(unknown()),
        };

        Ok(Card::new(rank, suit))
    }
}
