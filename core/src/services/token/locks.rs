//! Per-subject serialization of store mutations.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

/// Registry handing out one async mutex per subject.
///
/// Issue, rotate, and revoke hold the subject's lock across their
/// delete/insert sequences so that concurrent calls for the same subject
/// cannot interleave. Different subjects never contend.
pub(crate) struct SubjectLocks {
    inner: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SubjectLocks {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the lock for a subject, creating it on first use.
    pub(crate) async fn for_subject(&self, subject: &str) -> Arc<Mutex<()>> {
        let mut locks = self.inner.lock().await;
        locks
            .entry(subject.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
