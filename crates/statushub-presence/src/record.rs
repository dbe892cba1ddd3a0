//! Presence record and activity definitions.

use chrono::{DateTime, Utc};

use statushub_core::types::UserId;

/// Member presence status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceStatus {
    /// Member is online.
    Online,
    /// Member is connected but idle.
    Idle,
    /// Do not disturb.
    DoNotDisturb,
    /// Member is not connected, or was never seen.
    Offline,
}

impl PresenceStatus {
    /// Parses a platform status string; anything unrecognized is `Offline`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "online" => Self::Online,
            "idle" => Self::Idle,
            "dnd" | "do_not_disturb" => Self::DoNotDisturb,
            _ => Self::Offline,
        }
    }

    /// Converts to the wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Idle => "idle",
            Self::DoNotDisturb => "dnd",
            Self::Offline => "offline",
        }
    }
}

/// One activity attached to a presence record.
///
/// Closed tagged union so that a new platform activity shape is a
/// compile-time-visible gap, not a silent fallthrough. A `Custom` entry is
/// a free-text status and structurally cannot carry image or detail
/// fields; a `Rich` entry carries each optional field only when the
/// platform actually supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityEntry {
    /// Free-text custom status.
    Custom {
        /// Activity name.
        name: String,
        /// Free-text state line, if set.
        state: Option<String>,
    },
    /// Structured game/app presence.
    Rich {
        /// Activity name.
        name: String,
        /// Platform-reported activity type string, passed through opaquely.
        kind: Option<String>,
        /// Detail line.
        details: Option<String>,
        /// State line.
        state: Option<String>,
        /// Large artwork URL.
        large_image_url: Option<String>,
        /// Small artwork URL.
        small_image_url: Option<String>,
    },
}

impl ActivityEntry {
    /// The display name of the activity, whichever variant it is.
    pub fn name(&self) -> &str {
        match self {
            Self::Custom { name, .. } => name,
            Self::Rich { name, .. } => name,
        }
    }
}

/// A member's mirrored presence at one point in time.
///
/// Records are created or replaced wholesale per presence event; they are
/// never patched field by field. That, plus the store's whole-record
/// insert, is what keeps readers from ever observing a half-updated
/// record.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenceRecord {
    /// Member identifier, unique key in the store.
    pub user_id: UserId,
    /// Current status.
    pub status: PresenceStatus,
    /// Activities in platform-reported order; may be empty.
    pub activities: Vec<ActivityEntry>,
    /// Account name.
    pub username: String,
    /// Guild display name.
    pub display_name: String,
    /// Avatar URL; empty when the member has none.
    pub avatar_url: String,
    /// Timestamp of the most recent write. Diagnostics only.
    pub last_updated: DateTime<Utc>,
}
