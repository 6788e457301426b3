use yaniv_engine::cards::Card;
use yaniv_engine::errors::GameError;
use yaniv_engine::game::Game;
use yaniv_engine::player::DrawSource;

fn c(token: &str) -> Card {
    token.parse().expect("valid card token")
}

fn total_cards(game: &Game) -> usize {
    let held: usize = game.players().iter().map(|p| p.hand().len()).sum();
    game.deck_remaining() + held + game.pile().len()
}

fn rig_hand(game: &mut Game, name: &str, tokens: &[&str]) {
    let player = game
        .players_mut()
        .iter_mut()
        .find(|p| p.name() == name)
        .expect("player exists");
    player.clear_hand();
    for t in tokens {
        player.give_card(Some(t.parse().expect("valid token")));
    }
}

#[test]
fn deal_gives_five_cards_each_and_seeds_the_pile() {
    let game = Game::new(&["alice", "bob", "carol"], Some(11)).unwrap();
    for p in game.players() {
        assert_eq!(p.hand().len(), 5);
        assert_eq!(p.score(), 0);
    }
    assert_eq!(game.pile().len(), 1);
    assert_eq!(game.deck_remaining(), 54 - 3 * 5 - 1);
    assert_eq!(total_cards(&game), 54);
    assert_eq!(game.current_player().name(), "alice");
}

#[test]
fn zero_players_is_rejected() {
    let names: [&str; 0] = [];
    assert_eq!(Game::new(&names, None).unwrap_err(), GameError::NoPlayers);
}

#[test]
fn advance_turn_wraps_around_the_table() {
    let mut game = Game::new(&["alice", "bob", "carol"], Some(3)).unwrap();
    assert_eq!(game.current_player_index(), 0);
    game.advance_turn();
    assert_eq!(game.current_player().name(), "bob");
    game.advance_turn();
    assert_eq!(game.current_player().name(), "carol");
    game.advance_turn();
    assert_eq!(game.current_player().name(), "alice");
}

#[test]
fn conservation_holds_across_plays_and_restocks() {
    let mut game = Game::new(&["alice", "bob"], Some(99)).unwrap();
    // enough turns to drain the deck and force a restock mid-loop
    for _ in 0..60 {
        let name = game.current_player().name().to_string();
        let card = game.current_player().hand()[0];
        let outcome = game
            .play_cards(&name, &[card], DrawSource::Deck, None)
            .expect("play succeeds");
        assert!(outcome.drawn.is_some(), "a card is always available here");
        assert_eq!(total_cards(&game), 54);
        game.advance_turn();
    }
}

#[test]
fn declared_top_card_lands_on_top_of_the_pile() {
    let mut game = Game::new(&["alice", "bob"], Some(5)).unwrap();
    rig_hand(&mut game, "alice", &["5♠", "5♥", "5♦", "K♣", "2♣"]);

    let meld = [c("5♠"), c("5♥"), c("5♦")];
    let outcome = game
        .play_cards("alice", &meld, DrawSource::Deck, Some(c("5♥")))
        .unwrap();

    assert_eq!(outcome.played, vec![c("5♠"), c("5♦"), c("5♥")]);
    assert_eq!(game.pile_top(), Some(c("5♥")));
    let n = game.pile().len();
    assert_eq!(&game.pile()[n - 3..], &[c("5♠"), c("5♦"), c("5♥")]);
}

#[test]
fn pile_draw_recycles_the_prior_discard() {
    let mut game = Game::new(&["alice", "bob"], Some(21)).unwrap();
    let prior_top = game.pile_top().expect("pile is seeded");
    let card = game.players()[0].hand()[0];

    let outcome = game
        .play_cards("alice", &[card], DrawSource::Pile, None)
        .unwrap();

    assert_eq!(outcome.drawn, Some(prior_top));
    assert!(game.players()[0].hand().contains(&prior_top));
    assert_eq!(game.pile_top(), Some(card), "played card is the new top");
    assert!(!game.pile().contains(&prior_top), "recycled card left the pile");
    assert_eq!(game.players()[0].hand().len(), 5);
    assert_eq!(total_cards(&game), 54);
}

#[test]
fn card_not_in_hand_fails_and_changes_nothing() {
    let game = Game::new(&["alice", "bob"], Some(8)).unwrap();
    let foreign = game.players()[1].hand()[0];

    let mut attempt = game.clone();
    let err = attempt
        .play_cards("alice", &[foreign], DrawSource::Deck, None)
        .unwrap_err();
    assert_eq!(err, GameError::CardNotInHand { card: foreign });
    assert_eq!(attempt, game, "failed play must be a no-op");
}

#[test]
fn unknown_player_cannot_play() {
    let mut game = Game::new(&["alice", "bob"], Some(8)).unwrap();
    let card = game.players()[0].hand()[0];
    let err = game
        .play_cards("mallory", &[card], DrawSource::Deck, None)
        .unwrap_err();
    assert_eq!(
        err,
        GameError::PlayerNotFound {
            name: "mallory".to_string()
        }
    );
}

#[test]
fn last_action_records_the_play_for_replay() {
    let mut game = Game::new(&["alice", "bob"], Some(13)).unwrap();
    assert!(game.last_action().is_none());

    let card = game.players()[0].hand()[0];
    let outcome = game
        .play_cards("alice", &[card], DrawSource::Deck, None)
        .unwrap();

    let action = game.last_action().expect("action recorded");
    assert_eq!(action.player, "alice");
    assert_eq!(action.played, vec![card]);
    assert_eq!(action.drawn, outcome.drawn);
    assert_eq!(action.draw_source, DrawSource::Deck);
}

#[test]
fn duplicate_card_in_a_play_request_is_rejected() {
    let mut game = Game::new(&["alice", "bob"], Some(5)).unwrap();
    rig_hand(&mut game, "alice", &["5♠", "K♣"]);
    let err = game
        .play_cards("alice", &[c("5♠"), c("5♠")], DrawSource::Deck, None)
        .unwrap_err();
    assert_eq!(err, GameError::CardNotInHand { card: c("5♠") });
}
