//! Best-effort clipboard access
//!
//! Clipboard support is an optional capability: failures are logged and the
//! UI silently carries on without it.

use tracing::warn;

/// Copy text to the system clipboard. Returns whether the copy happened.
pub fn copy_best_effort(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string())) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "clipboard unavailable, skipping copy");
            false
        }
    }
}
