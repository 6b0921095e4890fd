use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ClipboardError(pub String);

/// System clipboard or whatever stands in for it.
pub trait Clipboard: Send {
    fn write_text(&mut self, text: &str) -> std::result::Result<(), ClipboardError>;
}

/// Clipboard for requests served over HTTP.
///
/// The browser does the actual copy once it has the response, so the
/// server side only records the text it was asked to copy.
#[derive(Debug, Default)]
pub struct ClientSideClipboard {
    last: Option<String>,
}

impl ClientSideClipboard {
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl Clipboard for ClientSideClipboard {
    fn write_text(&mut self, text: &str) -> std::result::Result<(), ClipboardError> {
        self.last = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_side_clipboard_keeps_last_text() {
        let mut clipboard = ClientSideClipboard::default();
        assert!(clipboard.last().is_none());

        clipboard.write_text("first").unwrap();
        clipboard.write_text("second").unwrap();
        assert_eq!(clipboard.last(), Some("second"));
    }
}
