//! The `Player` trait.
//!
//! A player has a name and an ordered hand. Implementors provide access to
//! both and define what a turn does; the hand operations are provided
//! methods built on `hand` and `hand_mut`.
//!
//! ## Implementation Notes
//!
//! - Hand operations never fail. An empty hand gives `None` or an empty stake.
//! - The trait is object safe, so a game driver can hold `Box<dyn Player>`.
//! - Moving cards between players is the driver's job: take them from one
//!   hand and give them to another.

use log::debug;

use crate::cards::Card;
use crate::hand::{Hand, WarCards, WAR_CARD_COUNT};

/// Capability set shared by every card-game participant.
pub trait Player {
    /// Current name.
    fn name(&self) -> &str;

    /// Replace the name. Any string is accepted, including empty ones.
    fn set_name(&mut self, name: String);

    /// The cards currently held.
    fn hand(&self) -> &Hand;

    /// Mutable access to the held cards.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Take this player's turn.
    ///
    /// Each game variant defines what a turn means.
    fn play(&mut self);

    // === Hand Operations ===

    /// Add a card to the back of the hand.
    fn add_card_to_hand(&mut self, card: Card) {
        self.hand_mut().push_back(card);
    }

    /// Remove and return the oldest card, or `None` if the hand is empty.
    fn play_card(&mut self) -> Option<Card> {
        self.hand_mut().pop_front()
    }

    /// Number of cards held.
    fn hand_size(&self) -> usize {
        self.hand().len()
    }

    /// Check if a structurally equal card is held.
    fn has_card(&self, card: &Card) -> bool {
        self.hand().contains(card)
    }

    /// Add several cards to the back of the hand, keeping their order.
    fn collect_cards(&mut self, cards: &[Card]) {
        if !cards.is_empty() {
            debug!("{} collects {} cards", self.name(), cards.len());
        }
        self.hand_mut().extend(cards);
    }

    /// Remove up to `WAR_CARD_COUNT` cards from the front for a war.
    ///
    /// Returns the cards oldest first. A short hand stakes everything it has.
    fn play_war_cards(&mut self) -> WarCards {
        let staked = self.hand_mut().take_front(WAR_CARD_COUNT);
        debug!(
            "{} stakes {} war cards, {} left",
            self.name(),
            staked.len(),
            self.hand_size()
        );
        staked
    }
}
