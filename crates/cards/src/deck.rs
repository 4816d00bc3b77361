// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Poker card.
///
/// A card pairs a [Rank] and a [Suit]; two cards are equal when both
/// match. Cards are immutable values, a deck or a hand never holds the
/// same card twice.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and a suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Card rank.
///
/// Ranks order from deuce up to the ace; the ace plays low only inside
/// the wheel straight and that case is handled by the hand evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// This rank numeric value, 2 for the deuce up to 14 for the ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Suits carry no ordering, they only partition the deck; the numeric
/// ids match the table layer convention 1=Clubs up to 4=Spades.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Hearts suit.
    Hearts = 3,
    /// Spades suit.
    Spades = 4,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// This suit numeric id.
    pub fn id(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck without the given cards.
    ///
    /// Used to build the per trial deck for equity simulations where the
    /// players hole cards and the board cards are already dealt.
    pub fn excluding(used: &[Card]) -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .filter(|c| !used.contains(c))
            .collect();
        Self { cards }
    }

    /// Shuffles the deck cards.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().unwrap()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!(2 <= k && k <= 7, "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();
        let mut h = vec![Card::new(Rank::Ace, Suit::Hearts); 7];

        for c1 in 0..n {
            h[0] = self.cards[c1];

            for c2 in (c1 + 1)..n {
                h[1] = self.cards[c2];

                if k == 2 {
                    f(&h[0..k]);
                    continue;
                }

                for c3 in (c2 + 1)..n {
                    h[2] = self.cards[c3];

                    if k == 3 {
                        f(&h[0..k]);
                        continue;
                    }

                    for c4 in (c3 + 1)..n {
                        h[3] = self.cards[c4];

                        if k == 4 {
                            f(&h[0..k]);
                            continue;
                        }

                        for c5 in (c4 + 1)..n {
                            h[4] = self.cards[c5];

                            if k == 5 {
                                f(&h[0..k]);
                                continue;
                            }

                            for c6 in (c5 + 1)..n {
                                h[5] = self.cards[c6];

                                if k == 6 {
                                    f(&h[0..k]);
                                    continue;
                                }

                                for c7 in (c6 + 1)..n {
                                    h[6] = self.cards[c7];
                                    f(&h[0..k]);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_values() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while !deck.is_empty() {
            let card = deck.deal();
            assert!((2..=14).contains(&card.rank().value()));
            assert!((1..=4).contains(&card.suit().id()));
            cards.insert(card);
        }

        // Check uniqueness.
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_excluding() {
        let used = [
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::King, Suit::Diamonds),
        ];

        let deck = Deck::excluding(&used);
        assert_eq!(deck.count(), Deck::SIZE - used.len());
        assert!(deck.into_iter().all(|c| !used.contains(&c)));
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }
}
