//! Ordered FIFO hand container.
//!
//! `Hand` keeps cards in the order they were received. The front of the hand
//! is the oldest card and is the next one played.
//!
//! ## Usage
//!
//! ```
//! use war_hand::hand::Hand;
//! use war_hand::cards::{Card, Rank, Suit};
//!
//! let mut hand = Hand::new();
//! hand.push_back(Card::new(Rank::Two, Suit::Clubs));
//! hand.push_back(Card::new(Rank::Seven, Suit::Diamonds));
//!
//! assert_eq!(hand.pop_front(), Some(Card::new(Rank::Two, Suit::Clubs)));
//! assert_eq!(hand.len(), 1);
//!
//! // Stakes take what is available
//! let stake = hand.take_front(5);
//! assert_eq!(stake.len(), 1);
//! assert!(hand.is_empty());
//! ```

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Number of cards a player stakes when a war breaks out.
pub const WAR_CARD_COUNT: usize = 5;

/// Cards removed from the front of a hand, oldest first.
///
/// A full war stake fits inline without allocating.
pub type WarCards = SmallVec<[Card; WAR_CARD_COUNT]>;

/// An ordered hand of cards.
///
/// Backed by a persistent `im::Vector`, so cloning a hand for a snapshot is
/// O(1) and removing from the front does not shift the remaining cards.
/// Duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vector<Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Peek at the oldest card without removing it.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Add a card to the back of the hand.
    pub fn push_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the oldest card.
    ///
    /// Returns `None` on an empty hand, leaving it empty.
    pub fn pop_front(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Check if a structurally equal card is anywhere in the hand.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Remove up to `count` cards from the front, oldest first.
    ///
    /// A hand shorter than `count` is emptied.
    pub fn take_front(&mut self, count: usize) -> WarCards {
        let count = count.min(self.cards.len());
        let rest = self.cards.split_off(count);
        std::mem::replace(&mut self.cards, rest)
            .into_iter()
            .collect()
    }

    /// Iterate over the cards, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<'a> Extend<&'a Card> for Hand {
    fn extend<I: IntoIterator<Item = &'a Card>>(&mut self, iter: I) {
        self.cards.extend(iter.into_iter().copied());
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
