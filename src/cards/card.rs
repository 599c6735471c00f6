//! Playing cards: rank, suit, and their text form.
//!
//! Cards are plain values. Two cards are equal when their rank and suit
//! match, so a hand can hold duplicates and `contains` is a structural scan.
//!
//! ## Text Form
//!
//! A card prints as its rank label followed by its suit symbol. Parsing
//! accepts that form as well as ASCII suit letters and `T` for ten.
//!
//! ```
//! use war_hand::cards::{Card, Rank, Suit};
//!
//! let card: Card = "10♦".parse().unwrap();
//! assert_eq!(card, Card::new(Rank::Ten, Suit::Diamonds));
//! assert_eq!("ks".parse::<Card>().unwrap().to_string(), "K♠");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use snafu::{ensure, OptionExt, Snafu};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '♣' | 'c' | 'C' => Some(Suit::Clubs),
            '♦' | 'd' | 'D' => Some(Suit::Diamonds),
            '♥' | 'h' | 'H' => Some(Suit::Hearts),
            '♠' | 's' | 'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, ordered with Ace high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All thirteen ranks, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value: 2 through 10 for pips, then 11 (Jack) up to 14 (Ace).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }

    /// Look up a rank by its numeric value.
    ///
    /// Returns `None` outside `2..=14`.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.value() == value)
    }

    /// Short label used in the text form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_uppercase().as_str() {
            "T" => Some(Rank::Ten),
            upper => Self::ALL.iter().copied().find(|r| r.label() == upper),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
///
/// Ordering compares rank first, then suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Error parsing a card from text.
#[derive(Debug, Snafu)]
pub enum ParseCardError {
    #[snafu(display("card text is empty"))]
    Empty,

    #[snafu(display("unknown rank `{rank}`"))]
    UnknownRank { rank: String },

    #[snafu(display("unknown suit `{suit}`"))]
    UnknownSuit { suit: char },
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let suit_char = chars.next_back().context(EmptySnafu)?;
        let rank_label = chars.as_str();
        ensure!(!rank_label.is_empty(), UnknownRankSnafu { rank: rank_label });

        let suit = Suit::from_char(suit_char).context(UnknownSuitSnafu { suit: suit_char })?;
        let rank = Rank::from_label(rank_label).context(UnknownRankSnafu { rank: rank_label })?;

        Ok(Card::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[test]
    fn test_rank_from_value() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).to_string(), "2♣");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10♦");
        assert_eq!(Card::new(Rank::King, Suit::Spades).to_string(), "K♠");
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).to_string(), "A♥");
    }

    #[test]
    fn test_card_parse_symbols_and_letters() {
        assert_eq!("7♦".parse::<Card>().unwrap(), Card::new(Rank::Seven, Suit::Diamonds));
        assert_eq!("7D".parse::<Card>().unwrap(), Card::new(Rank::Seven, Suit::Diamonds));
        assert_eq!("qh".parse::<Card>().unwrap(), Card::new(Rank::Queen, Suit::Hearts));
        assert_eq!("Tc".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Clubs));
        assert_eq!(" 10S ".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Spades));
    }

    #[test]
    fn test_card_parse_every_display_form() {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
            }
        }
    }

    #[test]
    fn test_card_parse_errors() {
        assert!(matches!("".parse::<Card>(), Err(ParseCardError::Empty)));
        assert!(matches!("   ".parse::<Card>(), Err(ParseCardError::Empty)));
        assert!(matches!("♣".parse::<Card>(), Err(ParseCardError::UnknownRank { .. })));
        assert!(matches!("1♣".parse::<Card>(), Err(ParseCardError::UnknownRank { .. })));
        assert!(matches!("11S".parse::<Card>(), Err(ParseCardError::UnknownRank { .. })));
        assert!(matches!("KX".parse::<Card>(), Err(ParseCardError::UnknownSuit { suit: 'X' })));
    }

    #[test]
    fn test_parse_error_message() {
        let err = "ZS".parse::<Card>().unwrap_err();
        assert_eq!(err.to_string(), "unknown rank `Z`");
    }

    #[test]
    fn test_card_equality_is_structural() {
        let a = Card::new(Rank::Five, Suit::Hearts);
        let b = Card::new(Rank::Five, Suit::Hearts);
        assert_eq!(a, b);
        assert_ne!(a, Card::new(Rank::Five, Suit::Spades));
    }

    #[test]
    fn test_card_ordering_rank_first() {
        let two_spades = Card::new(Rank::Two, Suit::Spades);
        let three_clubs = Card::new(Rank::Three, Suit::Clubs);
        assert!(two_spades < three_clubs);
        assert!(Card::new(Rank::Ace, Suit::Clubs) > Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(Rank::Queen, Suit::Diamonds);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
