//! Terminal output sanitization.
//!
//! Message bodies, OCR text, and link titles come straight out of chat
//! exports and are printed back to the terminal by the `search` command
//! and the TUI preview. A crafted message could embed ANSI escape
//! sequences that clear the screen, move the cursor, or restyle the
//! terminal, so user-controlled text is passed through
//! [`strip_ansi_codes`] before display.

/// Strip ANSI CSI escape sequences and stray control characters from
/// corpus text, keeping tab, newline, and carriage return.
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI sequences end at the first ASCII letter.
            while let Some(&next_ch) = chars.peek() {
                chars.next();
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}
