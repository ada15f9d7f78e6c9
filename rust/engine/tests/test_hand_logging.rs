use std::fs;
use std::path::PathBuf;

use holdem_engine::cards::{Card, Rank as R, Suit as S};
use holdem_engine::config::TableConfig;
use holdem_engine::game::Phase;
use holdem_engine::logger::{ActionRecord, HandLogger, HandRecord};
use holdem_engine::player::PlayerAction;
use holdem_engine::table::Table;

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn sample(hand_id: &str) -> HandRecord {
    HandRecord {
        hand_id: hand_id.to_string(),
        seed: Some(1),
        button: 0,
        actions: vec![ActionRecord {
            seat: 0,
            phase: Phase::PreFlop,
            action: PlayerAction::Check,
            auto: false,
        }],
        board: vec![Card::new(R::Ace, S::Clubs)],
        payouts: vec![0, 15],
        ts: None,
        meta: None,
        showdown: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("handlog");
    let mut logger = HandLogger::create(&path).expect("create logger");
    logger.write(&sample("20250102-000001")).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn sequential_ids_increment() {
    let mut logger = HandLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let path = tmp_path("handlog_ts");
    let mut logger = HandLogger::create(&path).expect("create logger");
    let rec = sample("20250102-000010");
    logger.write(&rec).expect("write");
    let line = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(line.contains("\"ts\":"), "ts should be injected");

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = HandRecord {
        ts: Some(preset.clone()),
        ..rec
    };
    logger.write(&rec2).expect("write2");
    let content = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
}

#[test]
fn finished_hand_round_trips_through_jsonl() {
    let mut table = Table::new(TableConfig {
        seed: Some(77),
        ..TableConfig::default()
    })
    .unwrap();
    assert!(table.hand_record("x".into()).is_none());
    table.start_hand().unwrap();
    table.apply_action(0, PlayerAction::Call).unwrap();
    table.apply_action(1, PlayerAction::Raise(30)).unwrap();
    table.apply_action(0, PlayerAction::Fold).unwrap();

    let mut logger = HandLogger::with_seq_for_test("20260101");
    let record = table.hand_record(logger.next_id()).unwrap();
    assert_eq!(record.hand_id, "20260101-000001");
    assert_eq!(record.seed, Some(77));
    assert_eq!(record.actions.len(), 3);
    assert_eq!(record.actions[1].action, PlayerAction::Raise(30));
    assert_eq!(record.payouts, vec![0, 40]);
    assert!(record.showdown.is_none());

    let path = tmp_path("handlog_table");
    let mut file_logger = HandLogger::create(&path).unwrap();
    file_logger.write(&record).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let parsed: HandRecord = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(parsed.actions, record.actions);
    assert_eq!(parsed.payouts, record.payouts);
    assert!(parsed.ts.is_some());
}
