use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::corpus::{default_synonyms, demo_chats, demo_messages, load_messages, load_synonyms};
use crate::engine::{MIN_QUERY_LEN, SearchEngine, SynonymTable};
use crate::models::{ChatSession, Message, MessageKind, SearchResult};
use crate::presentation::{GroupedResults, group_results, preview};
use crate::utils::strip_ansi_codes;

#[derive(Parser)]
#[command(name = "chat-intent-search")]
#[command(version = "0.1.0")]
#[command(about = "Rank chat messages by intent with keyword and synonym matching", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank corpus messages by relevance to a query
    Search {
        /// Free-text query (minimum 2 characters after trimming)
        query: String,
        /// JSONL corpus file, one message per line (default: demo corpus)
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// JSON synonym table file (default: built-in table)
        #[arg(long)]
        synonyms: Option<PathBuf>,
        /// Restrict the search to one demo chat session, by id or name
        #[arg(long, value_name = "ID_OR_NAME", conflicts_with = "corpus")]
        chat: Option<String>,
        /// Show every result instead of the first 3 per section
        #[arg(long)]
        all: bool,
        /// Emit the complete ranked list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show statistics about the corpus
    Stats {
        /// JSONL corpus file (default: demo corpus)
        #[arg(long)]
        corpus: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Search { query, corpus, synonyms, chat, all, json }) => {
            run_search(&query, corpus.as_deref(), synonyms.as_deref(), chat.as_deref(), all, json)
        }
        Some(Commands::Stats { corpus }) => show_stats(corpus.as_deref()),
        None => {
            // No subcommand: interactive chat mockup over the demo data.
            crate::tui::run_interactive(demo_chats(), default_synonyms())
        }
    }
}

fn load_corpus(path: Option<&Path>) -> Result<Vec<Message>> {
    match path {
        Some(path) => load_messages(path),
        None => Ok(demo_messages()),
    }
}

fn load_table(path: Option<&Path>) -> Result<SynonymTable> {
    match path {
        Some(path) => load_synonyms(path),
        None => Ok(default_synonyms()),
    }
}

/// Pick one demo chat session by id or case-insensitive name.
fn select_chat(wanted: &str) -> Result<ChatSession> {
    let mut chats = demo_chats();
    let lowered = wanted.to_lowercase();
    let idx = chats.iter().position(|c| c.id == wanted || c.name.to_lowercase() == lowered);
    match idx {
        Some(idx) => Ok(chats.swap_remove(idx)),
        None => {
            let names: Vec<&str> = chats.iter().map(|c| c.name.as_str()).collect();
            anyhow::bail!("No chat named '{}'. Available chats: {}", wanted, names.join(", "))
        }
    }
}

fn run_search(
    query: &str,
    corpus: Option<&Path>,
    synonyms: Option<&Path>,
    chat: Option<&str>,
    all: bool,
    json: bool,
) -> Result<()> {
    if query.trim().chars().count() < MIN_QUERY_LEN {
        println!("Query too short: need at least {} characters", MIN_QUERY_LEN);
        return Ok(());
    }

    let messages = match chat {
        Some(wanted) => select_chat(wanted)?.messages,
        None => load_corpus(corpus)?,
    };
    let engine = SearchEngine::new(load_table(synonyms)?);
    let results = engine.rank(query, &messages);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let grouped = group_results(results);
    if grouped.is_empty() {
        println!("No results found");
        println!("Try different keywords like \"bill\", \"invoice\", \"photo\"...");
        return Ok(());
    }

    print_grouped(&grouped, all);
    Ok(())
}

fn print_grouped(grouped: &GroupedResults<'_>, expanded: bool) {
    print_section("Exact matches", &grouped.exact, expanded);
    print_section("Semantic matches", &grouped.semantic, expanded);
}

fn print_section(title: &str, section: &[SearchResult<'_>], expanded: bool) {
    if section.is_empty() {
        return;
    }
    println!("{} ({})", title, section.len());

    let (visible, hidden) = preview(section, expanded);
    for result in visible {
        let msg = result.message;
        let badges: Vec<String> = result.badges.iter().map(|b| format!("[{}]", b)).collect();
        println!(
            "  {}  {} - {} {}",
            msg.timestamp.format("%Y-%m-%d"),
            strip_ansi_codes(&msg.sender),
            strip_ansi_codes(msg.preview()),
            badges.join(" ")
        );
    }
    if hidden > 0 {
        println!("  ... {} more (use --all to show)", hidden);
    }
    println!();
}

fn show_stats(corpus: Option<&Path>) -> Result<()> {
    let messages = load_corpus(corpus)?;

    let count_kind =
        |kind: MessageKind| messages.iter().filter(|m| m.kind == kind).count();
    let with_recognized = messages.iter().filter(|m| m.recognized_text.is_some()).count();

    println!("Chat Corpus Statistics");
    println!("======================");
    println!("Total messages: {}", messages.len());
    println!("  Text: {}", count_kind(MessageKind::Text));
    println!("  Images: {}", count_kind(MessageKind::Image));
    println!("  Documents: {}", count_kind(MessageKind::Document));
    println!("  Links: {}", count_kind(MessageKind::Link));
    println!("  With recognized text: {}", with_recognized);

    if let Some(oldest) = messages.iter().min_by_key(|m| m.timestamp) {
        println!("Oldest message: {}", oldest.timestamp.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = messages.iter().max_by_key(|m| m.timestamp) {
        println!("Newest message: {}", newest.timestamp.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
