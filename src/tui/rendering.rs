use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::app::{App, MessageType, View};
use super::layout::{ChatLayout, ListLayout};
use super::timestamps::format_timestamp;
use crate::engine::MIN_QUERY_LEN;
use crate::models::{ChatSession, Direction, MatchKind, Message, MessageKind};
use crate::utils::strip_ansi_codes;

// Shared palette
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129); // Emerald
const HIGHLIGHT_BG: Color = Color::Rgb(251, 191, 36); // Amber
const STATUS_BG: Color = Color::Rgb(24, 24, 27);
const ERROR: Color = Color::Rgb(239, 68, 68);

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, app: &App) {
    match app.view {
        View::ChatList => render_chat_list_view(frame, app),
        View::Chat => render_chat_view(frame, app),
    }
}

fn render_chat_list_view(frame: &mut Frame, app: &App) {
    let layout = ListLayout::new(frame.area());

    let title = Paragraph::new(" Chats ").style(Style::default().fg(BRIGHT).bg(STATUS_BG));
    frame.render_widget(title, layout.title_area);

    let items: Vec<ListItem> = app
        .chats()
        .iter()
        .enumerate()
        .map(|(idx, chat)| {
            let last = chat
                .last_message()
                .map(|m| {
                    let preview: String =
                        strip_ansi_codes(m.preview()).chars().take(40).collect();
                    format!("{}  {}", format_timestamp(&m.timestamp), preview)
                })
                .unwrap_or_else(|| "No messages".to_string());

            let unread = chat
                .unread_count
                .filter(|&n| n > 0)
                .map(|n| format!(" ({})", n))
                .unwrap_or_default();

            let content = format!(" {}{} | {}", chat.name, unread, last);

            let style = if idx == app.list_selected {
                Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED)),
    );
    frame.render_widget(list, layout.list_area);

    render_status_bar(frame, layout.status_area, app, " Enter: open | Ctrl+C: quit ");
}

fn render_chat_view(frame: &mut Frame, app: &App) {
    let layout = ChatLayout::new(frame.area());
    let chat = app.active_chat();

    render_chat_header(frame, layout.header_area, chat);
    render_search_bar(frame, layout.search_area, &app.search_query);

    if app.search_active() {
        render_results_overlay(frame, layout.body_area, app);
    } else {
        render_history(frame, layout.body_area, app, chat);
    }

    let help = if app.search_active() {
        " ↑/↓: select | Enter: jump | Tab: expand | Ctrl+Y: copy | Esc: clear "
    } else {
        " type to search | ↑/↓: scroll | Esc: back | Ctrl+C: quit "
    };
    render_status_bar(frame, layout.status_area, app, help);
}

fn render_chat_header(frame: &mut Frame, area: Rect, chat: &ChatSession) {
    let header = Paragraph::new(format!(" {} | {}", chat.name, chat.status))
        .style(Style::default().fg(BRIGHT).bg(STATUS_BG));
    frame.render_widget(header, area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, query: &str) {
    let hint = if query.is_empty() {
        Span::styled("Search this chat…", Style::default().fg(MUTED))
    } else if query.trim().chars().count() < MIN_QUERY_LEN {
        Span::styled(query.to_string(), Style::default().fg(MUTED))
    } else {
        Span::styled(query.to_string(), Style::default().fg(BRIGHT))
    };

    let paragraph = Paragraph::new(Line::from(hint)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Search "),
    );
    frame.render_widget(paragraph, area);
}

fn render_history(frame: &mut Frame, area: Rect, app: &App, chat: &ChatSession) {
    let highlighted_id = app.highlight.as_ref().map(|h| h.message_id.as_str());
    let lines: Vec<Line> =
        chat.messages.iter().map(|m| history_line(m, highlighted_id)).collect();

    // Clamp the scroll so u16::MAX (set on entry) shows the latest messages.
    let visible = area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(visible) as u16;
    let scroll = app.history_scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED)),
        )
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn history_line<'a>(message: &'a Message, highlighted_id: Option<&str>) -> Line<'a> {
    let tag = match message.kind {
        MessageKind::Text => "",
        MessageKind::Image => "📷 ",
        MessageKind::Document => "📄 ",
        MessageKind::Link => "🔗 ",
    };

    let text = format!(
        "{} {}: {}{}",
        message.timestamp.format("%H:%M"),
        message.sender,
        tag,
        strip_ansi_codes(message.preview()),
    );

    let style = if highlighted_id == Some(message.id.as_str()) {
        Style::default().fg(Color::Black).bg(HIGHLIGHT_BG).add_modifier(Modifier::BOLD)
    } else if message.direction == Direction::Outgoing {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(BRIGHT)
    };

    let line = Line::from(Span::styled(text, style));
    if message.direction == Direction::Outgoing {
        line.alignment(Alignment::Right)
    } else {
        line
    }
}

fn render_results_overlay(frame: &mut Frame, area: Rect, app: &App) {
    let visible = app.visible_results();

    if visible.rows.is_empty() {
        let paragraph = Paragraph::new("No results found")
            .style(Style::default().fg(MUTED))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(MUTED))
                    .title(" Results "),
            );
        frame.render_widget(paragraph, area);
        return;
    }

    let header_style = Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD);
    let more_style = Style::default().fg(MUTED).add_modifier(Modifier::ITALIC);

    let mut items: Vec<ListItem> = Vec::new();
    let mut row_idx = 0usize;
    let mut push_row = |items: &mut Vec<ListItem>, row: &super::app::ResultRow| {
        let badges = if row.badges.is_empty() {
            String::new()
        } else {
            format!(" [{}]", row.badges.join("] ["))
        };
        let preview: String = row.preview.chars().take(60).collect();
        let content = format!("  {} {} - {}{}", row.when, row.sender, preview, badges);

        let style = if row_idx == app.result_selected {
            Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        items.push(ListItem::new(content).style(style));
        row_idx += 1;
    };

    if visible.exact_total > 0 {
        items.push(
            ListItem::new(format!("Exact matches ({})", visible.exact_total))
                .style(header_style),
        );
        for row in visible.rows.iter().copied().filter(|r| r.kind == MatchKind::Exact) {
            push_row(&mut items, row);
        }
        if visible.exact_hidden > 0 {
            items.push(
                ListItem::new(format!("  … {} more (Tab to expand)", visible.exact_hidden))
                    .style(more_style),
            );
        }
    }

    if visible.semantic_total > 0 {
        items.push(
            ListItem::new(format!("Semantic matches ({})", visible.semantic_total))
                .style(header_style),
        );
        for row in visible.rows.iter().copied().filter(|r| r.kind == MatchKind::Semantic) {
            push_row(&mut items, row);
        }
        if visible.semantic_hidden > 0 {
            items.push(
                ListItem::new(format!("  … {} more (Tab to expand)", visible.semantic_hidden))
                    .style(more_style),
            );
        }
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" Results "),
    );
    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, help: &str) {
    let (text, style) = match &app.status_message {
        Some(msg) => {
            let fg = match msg.message_type {
                MessageType::Success => ACCENT,
                MessageType::Error => ERROR,
            };
            (format!(" {} ", msg.text), Style::default().fg(fg).bg(STATUS_BG))
        }
        None => (help.to_string(), Style::default().fg(BRIGHT).bg(STATUS_BG)),
    };

    let paragraph = Paragraph::new(text).style(style);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::corpus::{default_synonyms, demo_chats};
    use crate::tui::events::Action;

    fn drawn(app: &App) {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        // Just verify it doesn't panic
    }

    #[test]
    fn test_render_chat_list() {
        let app = App::new(demo_chats(), default_synonyms());
        drawn(&app);
    }

    #[test]
    fn test_render_chat_list_empty() {
        let app = App::new(vec![], default_synonyms());
        drawn(&app);
    }

    #[test]
    fn test_render_chat_history() {
        let mut app = App::new(demo_chats(), default_synonyms());
        app.handle_action(Action::Select);
        drawn(&app);
    }

    #[test]
    fn test_render_results_overlay() {
        let mut app = App::new(demo_chats(), default_synonyms());
        app.handle_action(Action::Select);
        for c in "bill".chars() {
            app.handle_action(Action::UpdateSearch(c));
        }
        app.requery_now();
        drawn(&app);
    }

    #[test]
    fn test_render_overlay_no_results() {
        let mut app = App::new(demo_chats(), default_synonyms());
        app.handle_action(Action::Select);
        for c in "zzzzzz".chars() {
            app.handle_action(Action::UpdateSearch(c));
        }
        app.requery_now();
        drawn(&app);
    }

    #[test]
    fn test_render_overlay_expanded() {
        let mut app = App::new(demo_chats(), default_synonyms());
        app.handle_action(Action::Select);
        for c in "bill".chars() {
            app.handle_action(Action::UpdateSearch(c));
        }
        app.requery_now();
        app.handle_action(Action::ToggleExpand);
        drawn(&app);
    }

    #[test]
    fn test_render_small_terminal() {
        let mut app = App::new(demo_chats(), default_synonyms());
        app.handle_action(Action::Select);
        let backend = TestBackend::new(20, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_ui(f, &app)).unwrap();
    }
}
