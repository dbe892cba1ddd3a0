//! # statushub-presence
//!
//! Presence mirror domain. Provides:
//!
//! - The [`record::PresenceRecord`] entity and its activity variants
//! - The concurrent, torn-read-free [`store::PresenceStore`]
//! - The [`ingest`] adapter that normalizes raw platform notifications
//!   into whole records and writes them to the store

pub mod ingest;
pub mod record;
pub mod store;

pub use ingest::{PresenceIngest, PresenceUpdate, RawActivity};
pub use record::{ActivityEntry, PresenceRecord, PresenceStatus};
pub use store::PresenceStore;
