use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::logger::{ActionRecord, RoundSummary};
use crate::player::{DrawSource, Player};
use crate::rules::Rules;

/// A player tied at the winning (lowest) cumulative score once the game
/// is over.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Winner {
    pub name: String,
    pub score: u32,
}

/// What a play produced: the cards moved to the pile (declared top last)
/// and the replacement card, if any could be drawn.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayOutcome {
    pub played: Vec<Card>,
    pub drawn: Option<Card>,
}

/// One table of the draw-and-discard game: the deck, the play pile, the
/// seated players in fixed turn order, and the round/game lifecycle
/// flags. Every operation is a synchronous state transition; apparent
/// waiting (for other players to act or ready up) is plain state that an
/// external transport polls.
///
/// The whole game serializes with serde, RNG state included, so a
/// store-reload cycle between requests loses nothing.
///
/// # Examples
///
/// ```
/// use yaniv_engine::game::Game;
/// use yaniv_engine::player::DrawSource;
///
/// let mut game = Game::new(&["alice", "bob"], Some(7)).unwrap();
/// assert_eq!(game.players().len(), 2);
///
/// // alice discards one card and draws a replacement from the deck
/// let card = game.players()[0].hand()[0];
/// let outcome = game.play_cards("alice", &[card], DrawSource::Deck, None).unwrap();
/// assert_eq!(outcome.played, vec![card]);
///
/// // turn advancement is explicit and wraps around the table
/// game.advance_turn();
/// assert_eq!(game.current_player().name(), "bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    players: Vec<Player>,
    deck: Deck,
    pile: Vec<Card>,
    current_player_index: usize,
    round_ended: bool,
    game_over: bool,
    ready_players: BTreeSet<String>,
    seen_game_over: BTreeSet<String>,
    last_action: Option<ActionRecord>,
    round_summary: Option<RoundSummary>,
    winners: Vec<Winner>,
    rules: Rules,
    seed: u64,
}

impl Game {
    /// Creates a game with the default [`Rules`], deals each player their
    /// opening hand, and seeds the pile with one card. Turn order is the
    /// order of `names`. Fails with [`GameError::NoPlayers`] when no
    /// names are given.
    pub fn new<S: AsRef<str>>(names: &[S], seed: Option<u64>) -> Result<Self, GameError> {
        Self::new_with_rules(names, seed, Rules::default())
    }

    pub fn new_with_rules<S: AsRef<str>>(
        names: &[S],
        seed: Option<u64>,
        rules: Rules,
    ) -> Result<Self, GameError> {
        if names.is_empty() {
            return Err(GameError::NoPlayers);
        }
        let seed = seed.unwrap_or(0xA1A2_A3A4);
        let mut game = Self {
            players: names.iter().map(|n| Player::new(n.as_ref())).collect(),
            deck: Deck::new_with_seed(seed),
            pile: Vec::new(),
            current_player_index: 0,
            round_ended: false,
            game_over: false,
            ready_players: BTreeSet::new(),
            seen_game_over: BTreeSet::new(),
            last_action: None,
            round_summary: None,
            winners: Vec::new(),
            rules,
            seed,
        };
        game.start_round();
        Ok(game)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    pub fn pile_top(&self) -> Option<Card> {
        self.pile.last().copied()
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn round_ended(&self) -> bool {
        self.round_ended
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn winners(&self) -> &[Winner] {
        &self.winners
    }

    pub fn ready_players(&self) -> &BTreeSet<String> {
        &self.ready_players
    }

    pub fn last_action(&self) -> Option<&ActionRecord> {
        self.last_action.as_ref()
    }

    pub fn round_summary(&self) -> Option<&RoundSummary> {
        self.round_summary.as_ref()
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn scores(&self) -> BTreeMap<String, u32> {
        self.players
            .iter()
            .map(|p| (p.name().to_string(), p.score()))
            .collect()
    }

    fn player_index(&self, name: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| GameError::PlayerNotFound {
                name: name.to_string(),
            })
    }

    /// Draws from the deck, restocking it from the pile first when it has
    /// run dry. Returns None when no card can be produced at all (deck
    /// empty and pile too small to restock from); callers tolerate that.
    fn draw_from_deck(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            self.deck.restock_from_pile(&mut self.pile);
        }
        self.deck.draw()
    }

    /// Moves the current-player pointer to the next seat, wrapping.
    /// Deliberately separate from [`Game::play_cards`]; the caller
    /// decides when a turn is over.
    pub fn advance_turn(&mut self) {
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
    }

    /// Discards `cards` from the named player's hand onto the pile and
    /// draws a replacement. When `new_top` names one of the played cards
    /// it is placed last so it shows as the pile top. With
    /// [`DrawSource::Pile`] the pre-play pile top is taken as the
    /// replacement instead of a deck draw (recycling the prior discard),
    /// falling back to the deck when the pile was empty.
    ///
    /// The play is all-or-nothing: an unknown player or a card not
    /// actually held fails the call and changes nothing. Meld shape is
    /// NOT checked here; callers that want rule-strict play gate on
    /// [`crate::rules::is_valid_set`] / [`crate::rules::is_valid_run`]
    /// before committing.
    pub fn play_cards(
        &mut self,
        name: &str,
        cards: &[Card],
        source: DrawSource,
        new_top: Option<Card>,
    ) -> Result<PlayOutcome, GameError> {
        let idx = self.player_index(name)?;
        let prior_top = self.pile_top();

        self.players[idx].remove_cards(cards)?;

        let mut played = cards.to_vec();
        if let Some(top) = new_top {
            if let Some(pos) = played.iter().position(|c| *c == top) {
                let chosen = played.remove(pos);
                played.push(chosen);
            }
        }
        self.pile.extend(played.iter().copied());

        let drawn = match source {
            DrawSource::Pile => match prior_top {
                Some(top) => {
                    // the prior top is buried under the new discards now
                    if let Some(pos) = self.pile.iter().position(|c| *c == top) {
                        self.pile.remove(pos);
                    }
                    Some(top)
                }
                None => self.draw_from_deck(),
            },
            DrawSource::Deck => self.draw_from_deck(),
        };
        self.players[idx].give_card(drawn);

        self.last_action = Some(ActionRecord {
            player: name.to_string(),
            played: played.clone(),
            drawn,
            draw_source: source,
        });

        Ok(PlayOutcome { played, drawn })
    }

    /// Ends the round on the named player's declaration and applies the
    /// scoring:
    ///
    /// - the declarer must hold no more than the declare threshold;
    /// - if any other player's hand value is less than or equal to the
    ///   declarer's, the declarer is undercut and counted at their hand
    ///   value plus the penalty, otherwise they count as zero;
    /// - every player whose counted value is the round-low is charged
    ///   nothing; everyone else adds their counted value to their score.
    ///
    /// Scores are applied before the game-over check, so the round that
    /// pushes someone over the line is the round whose summary reports
    /// it. Winners are the players tied at the lowest cumulative score.
    /// The player with the lowest score opens the next round.
    pub fn end_round(&mut self, name: &str) -> Result<RoundSummary, GameError> {
        let ender_idx = self.player_index(name)?;
        let ending_value = self.players[ender_idx].hand_value();
        if !self.rules.can_declare(ending_value) {
            return Err(GameError::NotEligibleToEndRound {
                hand_value: ending_value,
                threshold: self.rules.declare_threshold,
            });
        }

        let penalty_applied = self
            .players
            .iter()
            .enumerate()
            .any(|(i, p)| i != ender_idx && p.hand_value() <= ending_value);

        let mut counted: Vec<u32> = self.players.iter().map(|p| p.hand_value()).collect();
        counted[ender_idx] = if penalty_applied {
            ending_value + self.rules.penalty
        } else {
            0
        };
        let lowest = counted.iter().copied().min().unwrap_or(0);

        let mut round_values = BTreeMap::new();
        let mut lowest_players = Vec::new();
        for (i, p) in self.players.iter_mut().enumerate() {
            let charged = if counted[i] == lowest {
                lowest_players.push(p.name().to_string());
                0
            } else {
                counted[i]
            };
            p.add_score(charged);
            round_values.insert(p.name().to_string(), charged);
        }

        self.game_over = self
            .players
            .iter()
            .any(|p| p.score() >= self.rules.game_over_score);
        self.winners.clear();
        if self.game_over {
            let best = self.players.iter().map(|p| p.score()).min().unwrap_or(0);
            self.winners = self
                .players
                .iter()
                .filter(|p| p.score() == best)
                .map(|p| Winner {
                    name: p.name().to_string(),
                    score: p.score(),
                })
                .collect();
        }

        // lowest cumulative score opens the next round, seat order breaking ties
        if let Some((idx, _)) = self
            .players
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| p.score())
        {
            self.current_player_index = idx;
        }

        self.round_ended = true;
        self.ready_players.clear();

        let summary = RoundSummary {
            ender: self.players[ender_idx].name().to_string(),
            hands: self
                .players
                .iter()
                .map(|p| (p.name().to_string(), p.sorted_hand()))
                .collect(),
            round_values,
            scores: self.scores(),
            penalty_applied,
            lowest_players,
        };
        self.round_summary = Some(summary.clone());
        Ok(summary)
    }

    /// Toggles the named player's membership in the ready set while the
    /// table waits between rounds. Returns the player's new ready state.
    pub fn toggle_ready(&mut self, name: &str) -> Result<bool, GameError> {
        if !self.round_ended {
            return Err(GameError::RoundNotEnded);
        }
        let idx = self.player_index(name)?;
        let key = self.players[idx].name().to_string();
        if self.ready_players.remove(&key) {
            Ok(false)
        } else {
            self.ready_players.insert(key);
            Ok(true)
        }
    }

    pub fn all_ready(&self) -> bool {
        self.players
            .iter()
            .all(|p| self.ready_players.contains(p.name()))
    }

    /// Starts the next round once the current one has ended: a fresh
    /// shuffled deal with cumulative scores kept. If the game was over,
    /// scores and winners are cleared first and a brand-new game begins.
    pub fn advance_round(&mut self) -> Result<(), GameError> {
        if !self.round_ended {
            return Err(GameError::RoundNotEnded);
        }
        if self.game_over {
            self.clear_game();
        }
        self.start_round();
        Ok(())
    }

    /// Explicitly begins a brand-new game: all scores to zero, winners
    /// cleared, fresh deal.
    pub fn reset_scores(&mut self) {
        self.clear_game();
        self.start_round();
    }

    /// Marks the game-over notice as seen by the named player. Returns
    /// true while some player still has the notice pending; once everyone
    /// has acknowledged, the set clears (scores and winners persist until
    /// the next reset).
    pub fn acknowledge_game_over(&mut self, name: &str) -> Result<bool, GameError> {
        let idx = self.player_index(name)?;
        let key = self.players[idx].name().to_string();
        self.seen_game_over.insert(key);
        let all_seen = self
            .players
            .iter()
            .all(|p| self.seen_game_over.contains(p.name()));
        if all_seen {
            self.seen_game_over.clear();
            Ok(false)
        } else {
            Ok(true)
        }
    }

    fn clear_game(&mut self) {
        for p in &mut self.players {
            p.reset_score();
        }
        self.game_over = false;
        self.winners.clear();
        self.seen_game_over.clear();
    }

    fn start_round(&mut self) {
        self.deck.refill();
        self.deck.shuffle();
        self.pile.clear();
        for p in &mut self.players {
            p.clear_hand();
        }
        for _ in 0..self.rules.hand_size {
            for p in &mut self.players {
                p.give_card(self.deck.draw());
            }
        }
        self.pile.extend(self.deck.draw());
        if let Some((idx, _)) = self
            .players
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| p.score())
        {
            self.current_player_index = idx;
        }
        self.round_ended = false;
        self.ready_players.clear();
        self.last_action = None;
        self.round_summary = None;
    }

    /// Serializes the full game (hands, pile order, scores, flags, RNG
    /// state) to a JSON snapshot. [`Game::from_snapshot`] restores an
    /// identical game.
    pub fn to_snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_snapshot(snapshot: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(snapshot)
    }
}
