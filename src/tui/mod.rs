// TUI module for the interactive chat browser with in-chat smart search
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::engine::SynonymTable;
use crate::models::ChatSession;

/// Run the interactive TUI over the given chats.
pub fn run_interactive(chats: Vec<ChatSession>, synonyms: SynonymTable) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(chats, synonyms);

    let res = app.run(manager.terminal_mut());

    // Explicit restore so errors surface; the Drop guard covers panics.
    manager.restore()?;

    res
}
