//! Input scanning with the idempotency gate
//!
//! Lists the input documents and yields only those whose artifact does not
//! exist yet. The existence check happens when a record is pulled from the
//! iterator, not when the scan starts.

use crate::ports::record_store::{InputLocation, RecordStore, StoreError};
use newsdesk_domain::{OutputArtifact, RecordId};
use tracing::{debug, info};

/// An input whose artifact has not been generated yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRecord {
    pub location: InputLocation,
}

impl PendingRecord {
    pub fn record_id(&self) -> &RecordId {
        &self.location.record_id
    }
}

/// Discovers pending records in a [`RecordStore`]
pub struct InputScanner<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> InputScanner<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// List the inputs and return a lazy iterator over the pending ones.
    pub fn list_pending(&self) -> Result<PendingRecords<'a, S>, StoreError> {
        let candidates = self.store.list_inputs()?;
        let discovered = candidates.len();
        if discovered == 0 {
            info!("No input records found");
        } else {
            info!("Found {} input records", discovered);
        }

        Ok(PendingRecords {
            store: self.store,
            candidates: candidates.into_iter(),
            discovered,
            already_processed: 0,
        })
    }
}

/// Iterator over pending records; see [`InputScanner::list_pending`]
pub struct PendingRecords<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    candidates: std::vec::IntoIter<InputLocation>,
    discovered: usize,
    already_processed: usize,
}

impl<S: RecordStore + ?Sized> PendingRecords<'_, S> {
    /// Number of inputs listed, processed or not
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    /// Number of inputs skipped so far because their artifact exists
    pub fn already_processed(&self) -> usize {
        self.already_processed
    }
}

impl<S: RecordStore + ?Sized> Iterator for PendingRecords<'_, S> {
    type Item = PendingRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for location in self.candidates.by_ref() {
            if self
                .store
                .artifact_exists(&OutputArtifact::file_name_for(&location.record_id))
            {
                debug!("Skipping {}, already processed", location.record_id);
                self.already_processed += 1;
                continue;
            }
            return Some(PendingRecord { location });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MemoryStore;

    #[test]
    fn test_empty_store_yields_nothing() {
        let store = MemoryStore::new();
        let scanner = InputScanner::new(&store);
        let mut pending = scanner.list_pending().unwrap();
        assert_eq!(pending.discovered(), 0);
        assert!(pending.next().is_none());
    }

    #[test]
    fn test_existing_artifacts_are_filtered() {
        let store = MemoryStore::new()
            .with_input("post_1", r#"{"text": "one"}"#)
            .with_input("post_2", r#"{"text": "two"}"#)
            .with_artifact("news_post_1.txt", "already here");

        let scanner = InputScanner::new(&store);
        let mut pending = scanner.list_pending().unwrap();
        let ids: Vec<String> = pending
            .by_ref()
            .map(|p| p.record_id().to_string())
            .collect();

        assert_eq!(ids, vec!["post_2"]);
        assert_eq!(pending.discovered(), 2);
        assert_eq!(pending.already_processed(), 1);
    }

    #[test]
    fn test_artifact_name_is_derived_from_id() {
        let store = MemoryStore::new()
            .with_input("tweet_9", "{}")
            .with_input("tweet_10", "{}")
            .with_artifact("tweet_9.txt", "not the artifact name");
        let scanner = InputScanner::new(&store);
        let ids: Vec<String> = scanner
            .list_pending()
            .unwrap()
            .map(|p| p.record_id().to_string())
            .collect();
        assert_eq!(ids, vec!["tweet_9", "tweet_10"]);
    }

    #[test]
    fn test_existence_is_checked_lazily() {
        let store = MemoryStore::new()
            .with_input("a", "{}")
            .with_input("b", "{}");

        let scanner = InputScanner::new(&store);
        let mut pending = scanner.list_pending().unwrap();
        assert_eq!(pending.next().unwrap().record_id().as_str(), "a");

        // Appears after the scan started but before "b" is pulled
        store.put_artifact("news_b.txt", "late");
        assert!(pending.next().is_none());
        assert_eq!(pending.already_processed(), 1);
    }
}
