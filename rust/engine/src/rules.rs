use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// Tunable rule parameters for a game.
///
/// The declare threshold is deliberately configurable: the house rule is
/// that a player may only end a round holding `declare_threshold` points
/// or fewer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Maximum hand value with which a player may declare an end of round
    pub declare_threshold: u32,
    /// Cumulative score at which the whole game ends
    pub game_over_score: u32,
    /// Points added to a declarer's round value when undercut
    pub penalty: u32,
    /// Cards dealt to each player at the start of a round
    pub hand_size: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            declare_threshold: 5,
            game_over_score: 100,
            penalty: 15,
            hand_size: 5,
        }
    }
}

impl Rules {
    pub fn can_declare(&self, hand_value: u32) -> bool {
        hand_value <= self.declare_threshold
    }
}

/// Checks whether the cards form a valid set: all non-joker cards share
/// one rank. Jokers may tag along, but a meld of jokers alone is not a
/// set (there is no rank to claim), and neither is an empty meld.
///
/// # Examples
///
/// ```
/// use yaniv_engine::cards::Card;
/// use yaniv_engine::rules::is_valid_set;
///
/// let fives: Vec<Card> = ["5♠", "5♥", "5♦"].iter().map(|t| t.parse().unwrap()).collect();
/// assert!(is_valid_set(&fives));
///
/// let mixed: Vec<Card> = ["5♠", "6♥"].iter().map(|t| t.parse().unwrap()).collect();
/// assert!(!is_valid_set(&mixed));
///
/// let jokers_only: Vec<Card> = ["JOKER♠"].iter().map(|t| t.parse().unwrap()).collect();
/// assert!(!is_valid_set(&jokers_only));
/// ```
pub fn is_valid_set(cards: &[Card]) -> bool {
    let mut set_rank = None;
    for c in cards {
        if let Card::Standard { rank, .. } = c {
            match set_rank {
                None => set_rank = Some(*rank),
                Some(r) if r == *rank => {}
                _ => return false,
            }
        }
    }
    set_rank.is_some()
}

/// Checks whether the cards form a valid run: at least three cards of a
/// single suit whose ranks are contiguous on the circular rank wheel
/// `A,2,..,10,J,Q,K,A,..`, read in either direction. Jokers are
/// wildcards: each one fills exactly one position of the run, so
/// `3♠ JOKER 5♠` reads as three, four, five.
///
/// Only non-joker cards are held to the single-suit requirement, and a
/// run needs at least one of them to pin the suit down.
///
/// # Examples
///
/// ```
/// use yaniv_engine::cards::Card;
/// use yaniv_engine::rules::is_valid_run;
///
/// let run: Vec<Card> = ["3♠", "4♠", "5♠"].iter().map(|t| t.parse().unwrap()).collect();
/// assert!(is_valid_run(&run));
///
/// // The ace sits between king and two, so runs may wrap
/// let wrap: Vec<Card> = ["K♠", "A♠", "2♠"].iter().map(|t| t.parse().unwrap()).collect();
/// assert!(is_valid_run(&wrap));
///
/// let mixed: Vec<Card> = ["3♠", "4♥", "5♠"].iter().map(|t| t.parse().unwrap()).collect();
/// assert!(!is_valid_run(&mixed));
/// ```
pub fn is_valid_run(cards: &[Card]) -> bool {
    if cards.len() < 3 {
        return false;
    }
    let mut run_suit: Option<Suit> = None;
    for c in cards {
        if let Card::Standard { suit, .. } = c {
            match run_suit {
                None => run_suit = Some(*suit),
                Some(s) if s == *suit => {}
                _ => return false,
            }
        }
    }
    if run_suit.is_none() {
        return false;
    }
    runs_along_wheel(cards, 1) || runs_along_wheel(cards, -1)
}

/// Walks the cards in the given wheel direction (+1 ascending, -1
/// descending), anchored at the first non-joker. Every later non-joker
/// must land on the wheel position its offset from the anchor demands;
/// jokers consume a position without constraining it.
fn runs_along_wheel(cards: &[Card], dir: i64) -> bool {
    let mut anchor: Option<(i64, i64)> = None;
    for (i, c) in cards.iter().enumerate() {
        let Card::Standard { rank, .. } = c else {
            continue;
        };
        let pos = *rank as i64 - 1;
        match anchor {
            None => anchor = Some((i as i64, pos)),
            Some((start, base)) => {
                let expected = (base + dir * (i as i64 - start)).rem_euclid(13);
                if pos != expected {
                    return false;
                }
            }
        }
    }
    true
}
