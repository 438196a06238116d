//! In-memory call-log buffer.
//!
//! Appended to by every webhook invocation, read and cleared by the
//! dashboard endpoints. The buffer is unbounded and lost on restart; both
//! are accepted simplifications of this system.

use std::sync::{Mutex, PoisonError};

use api_shared::LogEntry;

/// Process-wide ordered sequence of webhook log entries.
///
/// Appends from concurrent requests are serialised by the internal mutex so
/// `list` always observes arrival order. Share via `Arc`.
#[derive(Default)]
pub struct CallLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to the end of the buffer.
    pub fn append(&self, entry: LogEntry) {
        self.lock().push(entry);
    }

    /// Snapshot of all entries in arrival order.
    pub fn list(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The log is plain data; a panic while holding the lock leaves it in a
    // usable state, so poisoning is recovered rather than propagated.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(n: usize) -> LogEntry {
        LogEntry::pre_call(
            format!("req-{n}"),
            format!("2025-06-01T00:00:0{n}.000Z"),
            json!({}),
            json!({}),
        )
    }

    #[test]
    fn append_preserves_arrival_order() {
        let log = CallLog::new();
        for n in 0..5 {
            log.append(entry(n));
        }
        let entries = log.list();
        assert_eq!(entries.len(), 5);
        let ids: Vec<&str> = entries.iter().map(|e| e.request_id.as_str()).collect();
        assert_eq!(ids, ["req-0", "req-1", "req-2", "req-3", "req-4"]);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let log = CallLog::new();
        log.append(entry(0));
        log.append(entry(1));
        assert_eq!(log.len(), 2);
        log.clear();
        assert!(log.is_empty());
        assert!(log.list().is_empty());
    }

    #[test]
    fn concurrent_appends_are_all_recorded() {
        use std::sync::Arc;

        let log = Arc::new(CallLog::new());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let log = log.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        log.append(entry(n * 50 + i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(log.len(), 400);
    }
}
