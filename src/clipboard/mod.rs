//! Copying message text to the system clipboard from the TUI.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Cap on copied text; a corpus line should never be anywhere near this,
/// so anything larger is treated as malformed input.
const MAX_CLIPBOARD_SIZE: usize = 1024 * 1024;

/// Clipboard operations behind a trait so tests can mock the system
/// clipboard (headless CI has none).
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        anyhow::bail!("Cannot copy empty text to clipboard");
    }
    if text.len() > MAX_CLIPBOARD_SIZE {
        anyhow::bail!(
            "Text too large for clipboard ({} bytes, max {})",
            text.len(),
            MAX_CLIPBOARD_SIZE
        );
    }
    Ok(())
}

#[cfg(test)]
fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)?;
    Ok(())
}

/// Copy message text to the system clipboard after validation.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    validate_clipboard_text(text)?;
    let mut clipboard = SystemClipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockClipboard {
        contents: Option<String>,
    }

    impl ClipboardProvider for MockClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_message_text() {
        let mut mock = MockClipboard { contents: None };
        copy_with_provider("Your electricity bill for January is generated.", &mut mock).unwrap();
        assert_eq!(
            mock.contents.as_deref(),
            Some("Your electricity bill for January is generated.")
        );
    }

    #[test]
    fn test_rejects_empty_text() {
        let mut mock = MockClipboard { contents: None };
        assert!(copy_with_provider("", &mut mock).is_err());
        assert!(mock.contents.is_none());
    }

    #[test]
    fn test_rejects_oversized_text() {
        let mut mock = MockClipboard { contents: None };
        let huge = "x".repeat(MAX_CLIPBOARD_SIZE + 1);
        assert!(copy_with_provider(&huge, &mut mock).is_err());
    }

    #[test]
    fn test_validation_accepts_unicode() {
        assert!(validate_clipboard_text("Happy New Year! 🎆").is_ok());
    }
}
