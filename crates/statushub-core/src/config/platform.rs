//! Chat-platform scope configuration.

use serde::{Deserialize, Serialize};

/// Chat-platform scope configuration.
///
/// Presence events are mirrored for a single guild; events scoped to any
/// other guild are dropped by the ingest adapter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlatformConfig {
    /// Identifier of the guild whose member presence is mirrored.
    /// Required; zero means "not configured" and fails validation.
    #[serde(default)]
    pub guild_id: u64,
}
