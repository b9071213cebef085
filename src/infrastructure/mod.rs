//! Infrastructure layer for host interactions: filesystem locations and the
//! clipboard.

pub mod clipboard;
pub mod paths;

pub use clipboard::{copy_with_fallback, Clipboard, CopyOutcome, MemoryClipboard};
pub use paths::{data_dir, expand_tilde, preferences_path};
