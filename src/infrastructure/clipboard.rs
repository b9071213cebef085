//! Clipboard access with a selection-copy fallback.
//!
//! The primary path writes text straight to the clipboard. Hosts may reject
//! it (no permission, insecure context), in which case the text field is
//! selected and copied the legacy way. That fallback is assumed to succeed.

use crate::domain::error::{DashboardError, Result};

/// Host clipboard.
pub trait Clipboard {
    /// Writes `text` through the primary clipboard API.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Clipboard`] when the host rejects the write.
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Selects the field `field_id` (holding `text`) and copies the selection.
    fn select_and_copy(&mut self, field_id: &str, text: &str);
}

/// Which path a copy took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Primary,
    Fallback,
}

impl CopyOutcome {
    #[must_use]
    pub const fn used_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// Copies `text`, falling back to selection copy if the primary write fails.
///
/// ```
/// use imagedeck::infrastructure::{copy_with_fallback, CopyOutcome, MemoryClipboard};
///
/// let mut clipboard = MemoryClipboard::rejecting();
/// let outcome = copy_with_fallback(&mut clipboard, "pull-nginx", "docker pull nginx:latest");
/// assert_eq!(outcome, CopyOutcome::Fallback);
/// assert_eq!(clipboard.contents(), Some("docker pull nginx:latest"));
/// ```
pub fn copy_with_fallback<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    field_id: &str,
    text: &str,
) -> CopyOutcome {
    match clipboard.write_text(text) {
        Ok(()) => CopyOutcome::Primary,
        Err(e) => {
            tracing::debug!(
                field_id,
                error = %e,
                "primary clipboard rejected, using selection copy"
            );
            clipboard.select_and_copy(field_id, text);
            CopyOutcome::Fallback
        }
    }
}

/// In-process clipboard.
///
/// Can be configured to reject primary writes to exercise the fallback.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    reject_primary: bool,
    /// Field ids that went through selection copy, in order.
    selections: Vec<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose primary write always fails.
    #[must_use]
    pub fn rejecting() -> Self {
        Self {
            reject_primary: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    #[must_use]
    pub fn selections(&self) -> &[String] {
        &self.selections
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.reject_primary {
            return Err(DashboardError::Clipboard("write permission denied".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn select_and_copy(&mut self, field_id: &str, text: &str) {
        self.selections.push(field_id.to_string());
        self.contents = Some(text.to_string());
    }
}
