use serde::{Deserialize, Serialize};

use crate::cards::{sort_hand, Card};
use crate::errors::GameError;

/// Where a player chose to take their replacement card from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawSource {
    /// The face-down deck (restocked from the pile when empty)
    Deck,
    /// The exposed top card of the play pile
    Pile,
}

/// A seated player: a unique name, an unordered hand, and a cumulative
/// score that only moves down on an explicit reset.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Sum of the point values of the cards currently held.
    pub fn hand_value(&self) -> u32 {
        self.hand.iter().map(|c| c.value()).sum()
    }

    /// Hand in display order (jokers first, then rank, then suit).
    pub fn sorted_hand(&self) -> Vec<Card> {
        sort_hand(&self.hand)
    }

    /// Adds a drawn card to the hand. A failed draw (None) is tolerated
    /// and leaves the hand unchanged.
    pub fn give_card(&mut self, card: Option<Card>) {
        if let Some(c) = card {
            self.hand.push(c);
        }
    }

    /// Removes the given cards from the hand, all or nothing. If any card
    /// is not actually held the hand is left untouched and the missing
    /// card is reported.
    pub fn remove_cards(&mut self, cards: &[Card]) -> Result<(), GameError> {
        let mut remaining = self.hand.clone();
        for card in cards {
            match remaining.iter().position(|c| c == card) {
                Some(pos) => {
                    remaining.remove(pos);
                }
                None => return Err(GameError::CardNotInHand { card: *card }),
            }
        }
        self.hand = remaining;
        Ok(())
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
