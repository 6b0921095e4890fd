use orchestrator::{Clipboard, ClipboardError};

/// System clipboard through arboard.
///
/// A handle is opened per write, so a headless session only fails the copy
/// instead of the whole command. On X11 the contents may not outlive the
/// process.
#[derive(Debug, Default)]
pub struct ArboardClipboard;

impl Clipboard for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError(format!("{}", e)))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError(format!("{}", e)))
    }
}

/// Used with `--no-copy`.
#[derive(Debug, Default)]
pub struct DisabledClipboard;

impl Clipboard for DisabledClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}
