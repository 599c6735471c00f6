//! A participant in the card game War.
//!
//! `WarPlayer` carries nothing beyond a name and a hand. Its turn action is
//! left empty: comparing revealed cards and settling wars belongs to the
//! game driver, which uses `play_card` and `play_war_cards`.
//!
//! ```
//! use war_hand::{Card, Player, WarPlayer};
//!
//! let cards: Vec<Card> = ["2♣", "7♦", "K♠"].iter().map(|s| s.parse().unwrap()).collect();
//! let mut alice = WarPlayer::new("Alice").with_cards(cards);
//!
//! assert_eq!(alice.to_string(), "Alice (3 cards)");
//! assert_eq!(alice.play_card().map(|c| c.to_string()), Some("2♣".to_string()));
//! ```

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use super::Player;
use crate::cards::Card;
use crate::hand::Hand;

/// A War player: a name and an ordered hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarPlayer {
    name: String,
    hand: Hand,
}

impl WarPlayer {
    /// Create a player with an empty hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Add cards to the back of the hand, in order.
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hand.extend(cards);
        self
    }
}

impl Player for WarPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn play(&mut self) {
        trace!("{} takes a turn", self.name);
    }
}

impl fmt::Display for WarPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hand.len() {
            1 => write!(f, "{} (1 card)", self.name),
            n => write!(f, "{} ({} cards)", self.name, n),
        }
    }
}
