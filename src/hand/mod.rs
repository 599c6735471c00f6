//! Hand system: the ordered cards a player holds.
//!
//! Hands are first-in-first-out: cards are played from the front (oldest)
//! and collected onto the back. War stakes are taken from the front in
//! batches of up to `WAR_CARD_COUNT`.

pub mod ordered;

pub use ordered::{Hand, WarCards, WAR_CARD_COUNT};
