use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};

/// The face-down draw stack. The RNG is owned by the deck and serialized
/// with it, so a restored snapshot keeps drawing the same cards a live
/// game would have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep construction order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Uniformly permutes the cards currently in the deck.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Restores all 54 cards in construction order, keeping the RNG state.
    pub fn refill(&mut self) {
        self.cards = full_deck();
    }

    /// Removes and returns the top card, or None when the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Rebuilds the deck from a play pile once the deck has run dry. The
    /// pile's top card stays behind as the sole pile card; everything
    /// beneath it becomes the new, reshuffled deck. A pile of one card or
    /// fewer cannot be restocked from and is left untouched.
    pub fn restock_from_pile(&mut self, pile: &mut Vec<Card>) {
        if pile.len() <= 1 {
            return;
        }
        if let Some(top) = pile.pop() {
            self.cards.append(pile);
            self.shuffle();
            pile.push(top);
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
