//! # yaniv-engine: Draw-and-Discard Card Game Rules Engine
//!
//! A deterministic rules engine for a multiplayer rummy-family card game:
//! melds of equal rank or suited runs, a shared discard pile, penalty
//! scoring at round end, and a cumulative score race to the game-over
//! threshold. The engine owns only in-memory state and never performs
//! I/O; transports, lobbies, and storage drive it through its public
//! operations and the snapshot contract.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, jokers), point values, wire tokens
//! - [`deck`] - Deterministic 54-card deck with ChaCha20 RNG and pile restocking
//! - [`game`] - Turn resolution, round scoring, and the round/game lifecycle
//! - [`player`] - Player state: name, hand, and cumulative score
//! - [`rules`] - Meld validation (sets and circular runs) and tunable rule parameters
//! - [`logger`] - Last-action records, round summaries, and JSONL round history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use yaniv_engine::game::Game;
//! use yaniv_engine::player::DrawSource;
//!
//! let mut game = Game::new(&["alice", "bob"], Some(42)).unwrap();
//!
//! // alice discards a card and draws from the deck
//! let card = game.players()[0].hand()[0];
//! game.play_cards("alice", &[card], DrawSource::Deck, None).unwrap();
//! game.advance_turn();
//!
//! // the engine conserves all 54 cards across every operation
//! let held: usize = game.players().iter().map(|p| p.hand().len()).sum();
//! assert_eq!(game.deck_remaining() + held + game.pile().len(), 54);
//! ```
//!
//! ## Meld Validation
//!
//! Meld checks are a capability, not a gate: [`game::Game::play_cards`]
//! accepts any discard-shaped play, and callers decide whether to enforce
//! shapes first.
//!
//! ```rust
//! use yaniv_engine::cards::Card;
//! use yaniv_engine::rules::{is_valid_run, is_valid_set};
//!
//! let run: Vec<Card> = ["9♦", "10♦", "J♦"].iter().map(|t| t.parse().unwrap()).collect();
//! assert!(is_valid_run(&run));
//!
//! let set: Vec<Card> = ["Q♠", "Q♥", "JOKER♠"].iter().map(|t| t.parse().unwrap()).collect();
//! assert!(is_valid_set(&set));
//! ```
//!
//! ## Snapshots
//!
//! Deployments that rebuild the game per request round-trip it through
//! [`game::Game::to_snapshot`] / [`game::Game::from_snapshot`]; the
//! snapshot carries every field, RNG state included, so nothing is lost
//! between requests. The engine provides no cross-request locking; the
//! storage layer must serialize concurrent writes to the same game.
//!
//! ```rust
//! use yaniv_engine::game::Game;
//!
//! let game = Game::new(&["alice", "bob"], Some(42)).unwrap();
//! let snapshot = game.to_snapshot().unwrap();
//! let restored = Game::from_snapshot(&snapshot).unwrap();
//! assert_eq!(game, restored);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
