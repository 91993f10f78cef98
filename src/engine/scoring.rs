//! Field-weighted evidence scoring for a single message.
//!
//! Every check is a case-insensitive substring containment test against a
//! lowercased view of the message's searchable fields. Contributions
//! accumulate additively across every token and every field; the same token
//! may score several fields at once.

use std::collections::BTreeSet;

use crate::models::{Badge, Message};

use super::synonyms::SynonymTable;

/// Full normalized query found verbatim in body or file name.
pub const WEIGHT_EXACT_PHRASE: f64 = 100.0;
/// Token found in OCR-recognized attachment text.
pub const WEIGHT_RECOGNIZED_TEXT: f64 = 30.0;
/// Token found in a shared link's title.
pub const WEIGHT_LINK_TITLE: f64 = 30.0;
/// Token found in an attachment file name.
pub const WEIGHT_FILE_NAME: f64 = 20.0;
/// Token found in the message body.
pub const WEIGHT_BODY: f64 = 10.0;
/// Token found in the sender display name.
pub const WEIGHT_SENDER: f64 = 5.0;
/// A related term from the synonym table found in any field but sender.
pub const WEIGHT_SYNONYM: f64 = 15.0;

/// Lowercased view of a message's searchable surface. Missing optional
/// fields degrade to empty strings rather than being treated specially.
pub(crate) struct FieldText {
    body: String,
    recognized: String,
    link_title: String,
    file_name: String,
    sender: String,
}

impl FieldText {
    pub(crate) fn from_message(message: &Message) -> Self {
        Self {
            body: message.body.to_lowercase(),
            recognized: message.recognized_text.as_deref().unwrap_or("").to_lowercase(),
            link_title: message.link_title.as_deref().unwrap_or("").to_lowercase(),
            file_name: message.file_name.as_deref().unwrap_or("").to_lowercase(),
            sender: message.sender.to_lowercase(),
        }
    }
}

/// Accumulated evidence for one message over one query. Built by a local
/// fold in [`evaluate`]; immutable once returned.
pub(crate) struct Evidence {
    pub(crate) score: f64,
    pub(crate) badges: BTreeSet<Badge>,
    pub(crate) exact: bool,
}

/// Fold the exact-phrase check, every token's field checks, and the
/// synonym expansion into one evidence record for `message`.
pub(crate) fn evaluate(
    message: &Message,
    normalized_query: &str,
    tokens: &[String],
    synonyms: &SynonymTable,
) -> Evidence {
    let fields = FieldText::from_message(message);
    let mut evidence = Evidence { score: 0.0, badges: BTreeSet::new(), exact: false };

    // Once per message, independent of token count. Sole determinant of
    // the Exact classification.
    if fields.body.contains(normalized_query) || fields.file_name.contains(normalized_query) {
        evidence.score += WEIGHT_EXACT_PHRASE;
        evidence.badges.insert(Badge::ExactMatch);
        evidence.exact = true;
    }

    for token in tokens {
        score_token(&fields, token, synonyms, &mut evidence);
    }

    evidence
}

/// Per-field checks plus synonym expansion for one token. Repeated tokens
/// run their checks repeatedly; only badges deduplicate.
fn score_token(fields: &FieldText, token: &str, synonyms: &SynonymTable, evidence: &mut Evidence) {
    // High-value fields.
    if fields.recognized.contains(token) {
        evidence.score += WEIGHT_RECOGNIZED_TEXT;
        evidence.badges.insert(Badge::Ocr);
    }
    if fields.link_title.contains(token) {
        evidence.score += WEIGHT_LINK_TITLE;
        evidence.badges.insert(Badge::Semantic);
    }
    if fields.file_name.contains(token) {
        evidence.score += WEIGHT_FILE_NAME;
    }

    // Standard fields.
    if fields.body.contains(token) {
        evidence.score += WEIGHT_BODY;
    }
    if fields.sender.contains(token) {
        evidence.score += WEIGHT_SENDER;
    }

    // Each related term that independently hits contributes again; the
    // sender field is excluded from expansion.
    if let Some(related) = synonyms.related(token) {
        for term in related {
            if fields.body.contains(term)
                || fields.recognized.contains(term)
                || fields.link_title.contains(term)
                || fields.file_name.contains(term)
            {
                evidence.score += WEIGHT_SYNONYM;
                evidence.badges.insert(Badge::Semantic);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::{Direction, MessageKind};

    fn message(body: &str) -> Message {
        Message::text(
            "m1",
            "Power Co.",
            Utc.with_ymd_and_hms(2024, 1, 6, 9, 0, 0).unwrap(),
            body,
            Direction::Incoming,
        )
    }

    fn eval(msg: &Message, query: &str, synonyms: &SynonymTable) -> Evidence {
        let tokens = crate::engine::tokenizer::tokenize(query);
        evaluate(msg, &crate::engine::tokenizer::normalize(query), &tokens, synonyms)
    }

    #[test]
    fn test_exact_phrase_in_body() {
        let msg = message("Your electricity bill for January is generated.");
        let ev = eval(&msg, "bill", &SynonymTable::new());
        assert!(ev.exact);
        assert!(ev.badges.contains(&Badge::ExactMatch));
        // 100 exact + 10 body hit for the token itself.
        assert_eq!(ev.score, WEIGHT_EXACT_PHRASE + WEIGHT_BODY);
    }

    #[test]
    fn test_exact_phrase_in_file_name() {
        let msg = message("Here is the estimate.")
            .with_kind(MessageKind::Document)
            .with_file_name("Repair_Est_Toyota.pdf");
        let ev = eval(&msg, "toyota", &SynonymTable::new());
        assert!(ev.exact);
        // 100 exact + 20 file-name token hit.
        assert_eq!(ev.score, WEIGHT_EXACT_PHRASE + WEIGHT_FILE_NAME);
    }

    #[test]
    fn test_recognized_text_and_link_title_badges() {
        let msg = message("")
            .with_kind(MessageKind::Image)
            .with_recognized_text("UNIQUE IDENTIFICATION AUTHORITY OF INDIA");
        let ev = eval(&msg, "id", &SynonymTable::new());
        assert!(!ev.exact);
        assert!(ev.badges.contains(&Badge::Ocr));
        assert_eq!(ev.score, WEIGHT_RECOGNIZED_TEXT);

        let link = message("Use this for integration.")
            .with_link("https://docs.example/payments", "Acme Payments v2 - Developer Guide");
        let ev = eval(&link, "developer", &SynonymTable::new());
        assert!(ev.badges.contains(&Badge::Semantic));
        assert_eq!(ev.score, WEIGHT_LINK_TITLE);
    }

    #[test]
    fn test_sender_hit_is_lowest_weight() {
        let msg = message("Nothing relevant here.");
        let ev = eval(&msg, "power", &SynonymTable::new());
        assert_eq!(ev.score, WEIGHT_SENDER);
        assert!(ev.badges.is_empty());
    }

    #[test]
    fn test_one_token_can_hit_several_fields() {
        let msg = message("The statement arrived.")
            .with_kind(MessageKind::Document)
            .with_file_name("Statement_JAN24.pdf")
            .with_recognized_text("Statement of account");
        let ev = eval(&msg, "statement", &SynonymTable::new());
        // exact (body) + ocr + file name + body.
        assert_eq!(
            ev.score,
            WEIGHT_EXACT_PHRASE + WEIGHT_RECOGNIZED_TEXT + WEIGHT_FILE_NAME + WEIGHT_BODY
        );
    }

    #[test]
    fn test_synonym_expansion_scores_per_hitting_term() {
        let mut synonyms = SynonymTable::new();
        synonyms.insert("bill", ["invoice", "statement", "due"]);
        let msg = message("Invoice attached. Statement due this week.");
        let ev = eval(&msg, "zz-bill", &SynonymTable::new());
        assert_eq!(ev.score, 0.0);

        let ev = eval(&msg, "bill", &synonyms);
        // No literal "bill" anywhere; three related terms each hit the body.
        assert!(!ev.exact);
        assert_eq!(ev.score, 3.0 * WEIGHT_SYNONYM);
        assert!(ev.badges.contains(&Badge::Semantic));
    }

    #[test]
    fn test_synonyms_do_not_match_sender() {
        let mut synonyms = SynonymTable::new();
        synonyms.insert("electricity", ["power"]);
        // "power" appears only in the sender name.
        let msg = message("Monthly statement attached.");
        let ev = eval(&msg, "electricity", &synonyms);
        assert_eq!(ev.score, 0.0);
    }

    #[test]
    fn test_repeated_tokens_score_repeatedly() {
        let msg = message("Your electricity bill for January is generated.");
        let once = eval(&msg, "bill", &SynonymTable::new());
        let twice = eval(&msg, "bill bill", &SynonymTable::new());
        // Two identical tokens double the token evidence; the exact-phrase
        // bonus is applied once per message either way.
        assert_eq!(twice.score, once.score + WEIGHT_BODY);
    }

    #[test]
    fn test_missing_optional_fields_match_as_empty() {
        let msg = message("");
        let ev = eval(&msg, "anything", &SynonymTable::new());
        assert_eq!(ev.score, 0.0);
        assert!(ev.badges.is_empty());
        assert!(!ev.exact);
    }
}
