//! # war-hand
//!
//! Card-game participants that hold an ordered hand of cards, as a base for
//! simple turn-based games such as War.
//!
//! ## Design Principles
//!
//! 1. **FIFO Hands**: Cards are played from the front (oldest first) and
//!    collected onto the back.
//!
//! 2. **Total Operations**: Hand operations never fail. An empty hand yields
//!    `None` or an empty stake rather than an error.
//!
//! 3. **Variants Over Inheritance**: `Player` is a trait; each game supplies
//!    its own variant (`WarPlayer`) with its own turn action.
//!
//! ## Modules
//!
//! - `cards`: Card, rank and suit value types
//! - `hand`: The ordered hand container and war staging
//! - `players`: The `Player` capability set and the `WarPlayer` variant
//!
//! ## Example
//!
//! ```
//! use war_hand::{Card, Player, Rank, Suit, WarPlayer};
//!
//! let mut alice = WarPlayer::new("Alice");
//! alice.add_card_to_hand(Card::new(Rank::Two, Suit::Clubs));
//! alice.add_card_to_hand(Card::new(Rank::King, Suit::Spades));
//!
//! assert_eq!(alice.play_card(), Some(Card::new(Rank::Two, Suit::Clubs)));
//! assert_eq!(alice.hand_size(), 1);
//! ```

pub mod cards;
pub mod hand;
pub mod players;

// Re-export commonly used types
pub use crate::cards::{Card, ParseCardError, Rank, Suit};
pub use crate::hand::{Hand, WarCards, WAR_CARD_COUNT};
pub use crate::players::{Player, WarPlayer};
