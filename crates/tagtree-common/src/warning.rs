//! Parser warnings with colored terminal output.
//!
//! Provides deduplication so a document with many identical problems
//! reports each one only once.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock cannot leave the set half-updated.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Add `key` to the set; false when it was already there.
fn record(key: String) -> bool {
    warned().get_or_insert_with(HashSet::new).insert(key)
}

/// Warn about a parse issue (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Parser", "<a> is never closed");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(key(component, message)) {
        eprintln!("{}", format!("[tagtree {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before parsing a new document)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_is_recorded_once() {
        let k = key("Test", "recorded once");
        assert!(record(k.clone()));
        assert!(!record(k));
    }

    #[test]
    fn test_key_includes_component() {
        assert_ne!(key("Test", "same"), key("Other", "same"));
    }
}
