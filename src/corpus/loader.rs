use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::engine::SynonymTable;
use crate::models::Message;

const MAX_CONSECUTIVE_ERRORS: usize = 100;

/// Parse a JSONL corpus file (one message object per line).
///
/// Malformed lines are logged and skipped so a single bad record cannot
/// break the whole corpus; the load fails only on systematic corruption,
/// i.e. more than 50% of lines failing or more than 100 consecutive
/// failures.
pub fn load_messages(path: &Path) -> Result<Vec<Message>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open corpus file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut messages = Vec::new();
    let mut skipped_count = 0;
    let mut total_lines = 0;
    let mut consecutive_errors = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read line from corpus file")?;
        if line.trim().is_empty() {
            continue;
        }
        total_lines += 1;

        match serde_json::from_str::<Message>(&line) {
            Ok(message) => {
                messages.push(message);
                consecutive_errors = 0;
            }
            Err(e) => {
                eprintln!("Warning: Failed to parse line {} in corpus file: {}", line_num + 1, e);
                skipped_count += 1;
                consecutive_errors += 1;
                if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    bail!(
                        "Too many consecutive parse errors ({}) in corpus file - file may be corrupted",
                        consecutive_errors
                    );
                }
            }
        }
    }

    if total_lines > 0 {
        let failure_rate = (skipped_count as f64) / (total_lines as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many parse failures in corpus file: {} of {} lines failed ({:.1}%)",
                skipped_count,
                total_lines,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        eprintln!("Parsed corpus file: {} messages ({} skipped)", messages.len(), skipped_count);
    }

    Ok(messages)
}

/// Parse a synonym table from a JSON object file mapping term to related
/// terms. Entries are lowercased on construction; value order is kept.
pub fn load_synonyms(path: &Path) -> Result<SynonymTable> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open synonyms file: {}", path.display()))?;
    let table: SynonymTable = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse synonyms file: {}", path.display()))?;
    Ok(table)
}
