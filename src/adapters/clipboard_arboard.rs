use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// System clipboard backed by arboard.
///
/// The platform handle is opened on the first write so commands that never
/// copy do not require a display server.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, AppError> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new().map_err(clipboard_error)?);
        }
        self.clipboard.as_mut().ok_or_else(|| AppError::ClipboardError("unavailable".into()))
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.handle()?.set_text(text.to_owned()).map_err(clipboard_error)?;
        tracing::debug!(chars = text.chars().count(), "copied text to clipboard");
        Ok(())
    }
}

fn clipboard_error(error: arboard::Error) -> AppError {
    AppError::ClipboardError(error.to_string())
}
