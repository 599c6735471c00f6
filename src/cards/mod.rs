//! Card value types.
//!
//! - `Card`: A rank and a suit, compared structurally
//! - `Rank`, `Suit`: The standard French-suited deck
//! - `ParseCardError`: Failure parsing a card from text

pub mod card;

pub use card::{Card, ParseCardError, Rank, Suit};
