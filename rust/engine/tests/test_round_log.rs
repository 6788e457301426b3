use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use yaniv_engine::cards::Card;
use yaniv_engine::game::Game;
use yaniv_engine::logger::{format_round_id, RoundLogger, RoundRecord, RoundSummary};

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn c(token: &str) -> Card {
    token.parse().expect("valid card token")
}

fn sample_summary() -> RoundSummary {
    let mut hands = BTreeMap::new();
    hands.insert("alice".to_string(), vec![c("A♠")]);
    hands.insert("bob".to_string(), vec![c("4♥"), c("5♥")]);
    let mut round_values = BTreeMap::new();
    round_values.insert("alice".to_string(), 0);
    round_values.insert("bob".to_string(), 9);
    let mut scores = BTreeMap::new();
    scores.insert("alice".to_string(), 12);
    scores.insert("bob".to_string(), 31);
    RoundSummary {
        ender: "alice".to_string(),
        hands,
        round_values,
        scores,
        penalty_applied: false,
        lowest_players: vec!["alice".to_string()],
    }
}

#[test]
fn round_record_serializes_and_deserializes() {
    let rec = RoundRecord {
        round_id: "20250102-000123".to_string(),
        seed: Some(42),
        summary: sample_summary(),
        ts: None,
        meta: None,
    };
    let s = serde_json::to_string(&rec).expect("serialize");
    let back: RoundRecord = serde_json::from_str(&s).expect("deserialize");
    assert_eq!(rec, back);
}

#[test]
fn id_format_is_date_dash_sequence() {
    assert_eq!(format_round_id("20251231", 42), "20251231-000042");
}

#[test]
fn sequential_ids_increment() {
    let mut logger = RoundLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("roundlog");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    let rec = RoundRecord {
        round_id: "20250102-000001".to_string(),
        seed: Some(1),
        summary: sample_summary(),
        ts: None,
        meta: None,
    };
    logger.write(&rec).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let path = tmp_path("roundlog_ts");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    let rec = RoundRecord {
        round_id: "20250102-000010".to_string(),
        seed: Some(7),
        summary: sample_summary(),
        ts: None,
        meta: None,
    };
    logger.write(&rec).expect("write");
    let line = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(line.contains("\"ts\":"), "ts should be injected");

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = RoundRecord {
        ts: Some(preset.clone()),
        ..rec
    };
    logger.write(&rec2).expect("write2");
    let content = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
}

#[test]
fn a_real_round_summary_logs_cleanly() {
    let mut game = Game::new(&["alice", "bob"], Some(3)).unwrap();
    {
        let alice = game
            .players_mut()
            .iter_mut()
            .find(|p| p.name() == "alice")
            .unwrap();
        alice.clear_hand();
        alice.give_card(Some(c("A♠")));
    }
    let summary = game.end_round("alice").expect("declare succeeds");

    let path = tmp_path("roundlog_real");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    let rec = RoundRecord {
        round_id: "20250102-000001".to_string(),
        seed: Some(game.seed()),
        summary,
        ts: None,
        meta: None,
    };
    logger.write(&rec).expect("write");

    let line = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    let back: RoundRecord = serde_json::from_str(line.trim()).expect("parse line");
    assert_eq!(back.round_id, rec.round_id);
    assert_eq!(back.summary.ender, "alice");
}
