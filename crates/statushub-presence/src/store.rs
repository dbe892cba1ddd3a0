//! Concurrent presence store — the only shared-mutable state between the
//! event-ingest task and the request handlers.
//!
//! Writes replace the whole record for a member atomically; reads hand out
//! an `Arc` snapshot. DashMap's per-shard locking means writers on
//! different members do not block each other, while two writes to the same
//! member serialize (last write wins by arrival order at the store).
//! Neither operation suspends, so the ingest task can never be stalled by
//! a slow reader.

use std::sync::Arc;

use dashmap::DashMap;

use statushub_core::types::UserId;

use crate::record::PresenceRecord;

/// Live mirror of platform presence, keyed by member.
///
/// No TTL and no eviction: the population is bounded by guild size, and a
/// member who was never seen simply has no entry.
#[derive(Debug, Default)]
pub struct PresenceStore {
    records: DashMap<UserId, Arc<PresenceRecord>>,
}

impl PresenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Replace the record for `record.user_id`, atomically.
    ///
    /// Never fails for a well-formed record.
    pub fn put(&self, record: PresenceRecord) {
        self.records
            .insert(record.user_id.clone(), Arc::new(record));
    }

    /// Fetch a fully-formed snapshot of a member's record, or `None` if
    /// the member was never seen.
    pub fn get(&self, user_id: &UserId) -> Option<Arc<PresenceRecord>> {
        self.records.get(user_id).map(|r| Arc::clone(r.value()))
    }

    /// Number of distinct members ever seen this session.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no member has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
