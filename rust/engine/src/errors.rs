use thiserror::Error;

use crate::cards::Card;

/// Domain errors reported to the caller as structured failures. Every
/// failing operation leaves the game exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("A game needs at least one player")]
    NoPlayers,
    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },
    #[error("Card not in hand: {card}")]
    CardNotInHand { card: Card },
    #[error("Hand value {hand_value} is above the declare threshold of {threshold}")]
    NotEligibleToEndRound { hand_value: u32, threshold: u32 },
    #[error("Round has not ended")]
    RoundNotEnded,
}
