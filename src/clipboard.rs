//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::AppError;

pub struct Clipboard {
    ctx: ClipboardContext,
}

impl Clipboard {
    pub fn connect() -> Result<Self, AppError> {
        ClipboardContext::new()
            .map(|ctx| Self { ctx })
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }

    /// Copy `text` and read it back once so the provider has taken ownership.
    /// The read-back copy is zeroized.
    pub fn copy(&mut self, text: &str) -> Result<(), AppError> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| AppError::Clipboard(e.to_string()))?;
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        tracing::debug!(bytes = text.len(), "copied to clipboard");
        Ok(())
    }
}
