//! End-to-end ranking behavior through the public library API.

use chrono::{DateTime, TimeZone, Utc};

use chat_intent_search::engine::{RECENCY_DIVISOR, SearchEngine, SynonymTable};
use chat_intent_search::models::{Badge, Direction, MatchKind, Message, MessageKind};
use chat_intent_search::presentation::group_results;

fn ts(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
}

fn incoming(id: &str, sender: &str, timestamp: DateTime<Utc>, body: &str) -> Message {
    Message::text(id, sender, timestamp, body, Direction::Incoming)
}

fn billing_corpus() -> Vec<Message> {
    vec![
        incoming("m1", "Power Co.", ts(1, 9), "Your electricity bill for March is generated."),
        incoming("m2", "Mom", ts(2, 10), "Did you pay the electricity this month?"),
        incoming("m3", "Teammate", ts(3, 11), "Lunch tomorrow?"),
        incoming("m4", "Power Co.", ts(4, 12), "Payment overdue. Please clear your dues.")
            .with_kind(MessageKind::Document)
            .with_file_name("Bill_MAR24.pdf"),
        incoming("m5", "Landlord", ts(5, 13), "")
            .with_kind(MessageKind::Image)
            .with_recognized_text("ELECTRICITY BOARD  AMOUNT DUE: 1,240"),
    ]
}

fn billing_synonyms() -> SynonymTable {
    let mut table = SynonymTable::new();
    table.insert("bill", ["due", "overdue", "payment"]);
    table.insert("electricity", ["power", "board"]);
    table
}

#[test]
fn test_exact_hits_rank_above_semantic_hits() {
    let engine = SearchEngine::new(billing_synonyms());
    let corpus = billing_corpus();
    let results = engine.rank("bill", &corpus);

    let ids: Vec<&str> = results.iter().map(|r| r.message.id.as_str()).collect();
    // m1 and m4 carry the literal phrase, the rest only synonym evidence.
    // m4 stacks file-name and synonym hits on top of the exact bonus.
    assert_eq!(&ids[..2], &["m4", "m1"]);
    assert!(results[0].classification == MatchKind::Exact);
    assert!(results[1].classification == MatchKind::Exact);
    assert!(results[2..].iter().all(|r| r.classification == MatchKind::Semantic));
}

#[test]
fn test_unrelated_messages_are_excluded() {
    let engine = SearchEngine::new(billing_synonyms());
    let corpus = billing_corpus();
    let results = engine.rank("bill", &corpus);
    assert!(results.iter().all(|r| r.message.id != "m3"));
}

#[test]
fn test_short_query_returns_nothing() {
    let engine = SearchEngine::new(billing_synonyms());
    let corpus = billing_corpus();
    assert!(engine.rank("b", &corpus).is_empty());
    assert!(engine.rank("  b  ", &corpus).is_empty());
    assert!(engine.rank("", &corpus).is_empty());
}

#[test]
fn test_plural_query_matches_singular_text() {
    let engine = SearchEngine::new(SynonymTable::new());
    let corpus = billing_corpus();
    // "bills" stems to "bill", which hits m1's body and m4's file name.
    let results = engine.rank("bills", &corpus);
    let ids: Vec<&str> = results.iter().map(|r| r.message.id.as_str()).collect();
    assert!(ids.contains(&"m1"));
    assert!(ids.contains(&"m4"));
    // The plural form appears nowhere verbatim, so no exact classification.
    assert!(results.iter().all(|r| r.classification == MatchKind::Semantic));
}

#[test]
fn test_recognized_text_hit_carries_ocr_badge() {
    let engine = SearchEngine::new(SynonymTable::new());
    let corpus = billing_corpus();
    let results = engine.rank("electricity", &corpus);
    let m5 = results.iter().find(|r| r.message.id == "m5").expect("OCR hit present");
    assert!(m5.badges.contains(&Badge::Ocr));
}

#[test]
fn test_recency_breaks_exact_score_ties() {
    let engine = SearchEngine::new(SynonymTable::new());
    let corpus = vec![
        incoming("old", "Mom", ts(1, 9), "Parking ticket reminder"),
        incoming("new", "Mom", ts(20, 9), "Parking ticket reminder"),
    ];
    let results = engine.rank("ticket", &corpus);
    assert_eq!(results[0].message.id, "new");
    assert_eq!(results[1].message.id, "old");
}

#[test]
fn test_recency_never_outranks_field_evidence() {
    let engine = SearchEngine::new(SynonymTable::new());
    // The older message has one extra sender hit (+5); a much newer
    // timestamp must not flip the order.
    let corpus = vec![
        incoming("weak", "Alice", Utc.with_ymd_and_hms(2031, 12, 31, 23, 0, 0).unwrap(), "ticket"),
        incoming("strong", "Ticket Desk", ts(1, 9), "ticket"),
    ];
    let results = engine.rank("ticket", &corpus);
    assert_eq!(results[0].message.id, "strong");

    // Sanity: the tiebreak term stays far below the smallest weight.
    let millis = Utc.with_ymd_and_hms(2031, 12, 31, 23, 0, 0).unwrap().timestamp_millis();
    assert!((millis as f64) / RECENCY_DIVISOR < 5.0);
}

#[test]
fn test_grouping_partitions_by_classification() {
    let engine = SearchEngine::new(billing_synonyms());
    let corpus = billing_corpus();
    let grouped = group_results(engine.rank("bill", &corpus));

    assert_eq!(grouped.exact.len(), 2);
    assert!(!grouped.semantic.is_empty());
    assert_eq!(grouped.total(), grouped.exact.len() + grouped.semantic.len());
    assert!(grouped.exact.iter().all(|r| r.classification == MatchKind::Exact));
    assert!(grouped.semantic.iter().all(|r| r.classification == MatchKind::Semantic));
}

#[test]
fn test_results_serialize_with_display_badges() {
    let engine = SearchEngine::new(SynonymTable::new());
    let corpus = billing_corpus();
    let results = engine.rank("electricity bill", &corpus);
    let json = serde_json::to_string(&results).expect("results serialize");
    assert!(json.contains("\"Exact Match\""));
    assert!(json.contains("\"classification\""));
}

#[test]
fn test_extra_field_evidence_never_lowers_rank() {
    let engine = SearchEngine::new(SynonymTable::new());
    // Identical bodies; "more" adds an independent file-name hit on top.
    let corpus = vec![
        incoming("less", "Mom", ts(20, 9), "the bill arrived"),
        incoming("more", "Mom", ts(1, 9), "the bill arrived")
            .with_kind(MessageKind::Document)
            .with_file_name("bill.pdf"),
    ];
    let results = engine.rank("bill", &corpus);
    assert_eq!(results[0].message.id, "more");
    assert!(results[0].score > results[1].score);
}

#[test]
fn test_rank_is_deterministic() {
    let engine = SearchEngine::new(billing_synonyms());
    let corpus = billing_corpus();
    let first: Vec<String> =
        engine.rank("bill", &corpus).iter().map(|r| r.message.id.clone()).collect();
    for _ in 0..5 {
        let again: Vec<String> =
            engine.rank("bill", &corpus).iter().map(|r| r.message.id.clone()).collect();
        assert_eq!(again, first);
    }
}
