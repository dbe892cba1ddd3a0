//! Ingest adapter — normalizes raw platform presence notifications into
//! whole [`PresenceRecord`]s and writes them to the store.
//!
//! The adapter runs as a single-consumer task over an mpsc channel, so two
//! events for the same member are applied in delivery order while the
//! transport (the platform-side bridge) stays decoupled from the store.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use statushub_core::types::UserId;

use crate::record::{ActivityEntry, PresenceRecord, PresenceStatus};
use crate::store::PresenceStore;

/// Raw presence-change notification, as delivered by the platform bridge.
///
/// Delivered at most once per actual presence change. Absent strings stay
/// absent here; defaults are applied when the record is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceUpdate {
    /// Member the change applies to.
    pub user_id: UserId,
    /// Guild the event was observed in, when the bridge scopes events.
    #[serde(default)]
    pub guild_id: Option<u64>,
    /// Raw status string ("online", "idle", "dnd", "offline", ...).
    pub status: String,
    /// Raw activities in platform-reported order.
    #[serde(default)]
    pub activities: Vec<RawActivity>,
    /// Account name, if known.
    #[serde(default)]
    pub username: Option<String>,
    /// Guild display name, if known.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Avatar URL, if known.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// One raw activity from a presence notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawActivity {
    /// Activity name.
    pub name: String,
    /// Whether this entry is a free-text custom status.
    #[serde(default)]
    pub custom: bool,
    /// Platform activity type string (for rich entries).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// State line.
    #[serde(default)]
    pub state: Option<String>,
    /// Detail line.
    #[serde(default)]
    pub details: Option<String>,
    /// Large artwork URL.
    #[serde(default)]
    pub large_image_url: Option<String>,
    /// Small artwork URL.
    #[serde(default)]
    pub small_image_url: Option<String>,
}

/// Normalizes presence notifications and writes them to the store.
pub struct PresenceIngest {
    store: Arc<PresenceStore>,
    guild_id: u64,
}

impl PresenceIngest {
    /// Create an adapter writing into `store`, scoped to `guild_id`.
    pub fn new(store: Arc<PresenceStore>, guild_id: u64) -> Self {
        Self { store, guild_id }
    }

    /// Apply one notification: map every raw activity to exactly one
    /// [`ActivityEntry`], build one whole record, and put it exactly once.
    ///
    /// Events scoped to a different guild are dropped.
    pub fn apply(&self, event: PresenceUpdate) {
        if let Some(guild_id) = event.guild_id {
            if guild_id != self.guild_id {
                debug!(user_id = %event.user_id, guild_id, "Dropping out-of-scope presence event");
                return;
            }
        }

        let activities: Vec<ActivityEntry> =
            event.activities.into_iter().map(map_activity).collect();

        let record = PresenceRecord {
            user_id: event.user_id,
            status: PresenceStatus::from_str_or_default(&event.status),
            activities,
            username: event.username.unwrap_or_else(unknown),
            display_name: event.display_name.unwrap_or_else(unknown),
            avatar_url: event.avatar_url.unwrap_or_default(),
            last_updated: Utc::now(),
        };

        debug!(
            user_id = %record.user_id,
            status = record.status.as_str(),
            activities = record.activities.len(),
            "Presence updated"
        );

        // Single whole-record put per event keeps updates atomic per member.
        self.store.put(record);
    }
}

/// Map one raw activity into exactly one entry variant.
///
/// A custom-status entry never carries image or detail fields, even if the
/// bridge supplied them; a rich entry copies each optional field only when
/// it was supplied.
fn map_activity(raw: RawActivity) -> ActivityEntry {
    if raw.custom {
        ActivityEntry::Custom {
            name: raw.name,
            state: raw.state,
        }
    } else {
        ActivityEntry::Rich {
            name: raw.name,
            kind: raw.kind,
            details: raw.details,
            state: raw.state,
            large_image_url: raw.large_image_url,
            small_image_url: raw.small_image_url,
        }
    }
}

fn unknown() -> String {
    "Unknown".to_string()
}

/// Spawn the single-consumer ingest loop.
///
/// The task ends when every sender has been dropped.
pub fn spawn(ingest: PresenceIngest, mut rx: mpsc::Receiver<PresenceUpdate>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            ingest.apply(event);
        }
        info!("Presence ingest channel closed, stopping ingest task");
    })
}
