use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents one of the four suits in a standard 52-card deck.
/// Declaration order is the fixed presentation order used by [`sort_hand`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn from_symbol(c: char) -> Option<Suit> {
        match c {
            '♠' => Some(Suit::Spades),
            '♥' => Some(Suit::Hearts),
            '♦' => Some(Suit::Diamonds),
            '♣' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// The two joker colors. Their wire markers reuse the spade and heart
/// symbols, matching the printed black and red jokers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum JokerColor {
    /// Black joker (marker ♠)
    Black,
    /// Red joker (marker ♥)
    Red,
}

impl JokerColor {
    pub fn marker(self) -> char {
        match self {
            JokerColor::Black => '♠',
            JokerColor::Red => '♥',
        }
    }

    pub fn from_marker(c: char) -> Option<JokerColor> {
        match c {
            '♠' => Some(JokerColor::Black),
            '♥' => Some(JokerColor::Red),
            _ => None,
        }
    }
}

/// Represents the rank of a standard card, Ace low through King.
/// Numeric values follow the display order (A=1 .. K=13).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    /// Wire label for this rank ("A", "2".."10", "J", "Q", "K").
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
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
        }
    }

    pub fn from_label(s: &str) -> Option<Rank> {
        let r = match s {
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return None,
        };
        Some(r)
    }

    /// Point value counted against a hand: 2-10 at face value, A=1, J/Q/K=10.
    pub fn value(self) -> u32 {
        match self {
            Rank::Ace => 1,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            r => r as u32,
        }
    }
}

/// A card token could not be parsed back into a [`Card`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized card token: {0:?}")]
pub struct ParseCardError(pub String);

/// A single playing card: one of the 52 rank/suit cards or one of the two
/// jokers. Cards are the fundamental unit moved between the deck, the
/// players' hands, and the play pile.
///
/// The wire form is the rank label followed by a one-character suit or
/// color marker (`A♠`, `10♥`, `JOKER♠`); serde uses the same token.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Card {
    /// A rank/suit card
    Standard {
        /// The rank of the card (Ace through King)
        rank: Rank,
        /// The suit of the card
        suit: Suit,
    },
    /// A wildcard joker, worth zero points
    Joker(JokerColor),
}

impl Card {
    /// Point value counted against a hand; jokers are worth nothing.
    pub fn value(self) -> u32 {
        match self {
            Card::Standard { rank, .. } => rank.value(),
            Card::Joker(_) => 0,
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Card::Joker(_))
    }

    /// Display ordering key: jokers first (black before red), then
    /// ascending rank, then suit order. Presentation only; game logic
    /// never consults it.
    pub fn sort_key(self) -> (i8, u8) {
        match self {
            Card::Joker(color) => (-1, color as u8),
            Card::Standard { rank, suit } => (rank as i8, suit as u8),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard { rank, suit } => write!(f, "{}{}", rank.label(), suit.symbol()),
            Card::Joker(color) => write!(f, "JOKER{}", color.marker()),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(marker) = s.strip_prefix("JOKER") {
            let mut chars = marker.chars();
            return match (chars.next(), chars.next()) {
                (Some(m), None) => JokerColor::from_marker(m)
                    .map(Card::Joker)
                    .ok_or_else(|| ParseCardError(s.to_string())),
                _ => Err(ParseCardError(s.to_string())),
            };
        }
        let mut chars = s.chars();
        let marker = chars
            .next_back()
            .ok_or_else(|| ParseCardError(s.to_string()))?;
        let suit = Suit::from_symbol(marker).ok_or_else(|| ParseCardError(s.to_string()))?;
        let rank =
            Rank::from_label(chars.as_str()).ok_or_else(|| ParseCardError(s.to_string()))?;
        Ok(Card::Standard { rank, suit })
    }
}

impl From<Card> for String {
    fn from(c: Card) -> String {
        c.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
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
    ]
}

/// The 54 unique cards a game starts from: 13 ranks x 4 suits plus the
/// two jokers.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(54);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::Standard { rank: r, suit: s });
        }
    }
    v.push(Card::Joker(JokerColor::Black));
    v.push(Card::Joker(JokerColor::Red));
    v
}

/// Returns the cards in display order (see [`Card::sort_key`]).
pub fn sort_hand(cards: &[Card]) -> Vec<Card> {
    let mut v = cards.to_vec();
    v.sort_by_key(|c| c.sort_key());
    v
}
