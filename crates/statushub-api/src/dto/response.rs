//! Response DTOs.
//!
//! Wire field names follow the original mirrored service
//! (`display_name`, `profile_picture`) so existing consumers keep working.

use serde::{Deserialize, Serialize};

use statushub_presence::{ActivityEntry, PresenceRecord};

/// Mirrored presence document for one member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceResponse {
    /// Status wire string: online, idle, dnd, or offline.
    pub status: String,
    /// Activities in platform-reported order.
    pub activities: Vec<ActivityDto>,
    /// Account name.
    pub username: String,
    /// Guild display name.
    pub display_name: String,
    /// Avatar URL; empty when the member has none.
    pub profile_picture: String,
}

impl From<&PresenceRecord> for PresenceResponse {
    fn from(record: &PresenceRecord) -> Self {
        Self {
            status: record.status.as_str().to_string(),
            activities: record.activities.iter().map(ActivityDto::from).collect(),
            username: record.username.clone(),
            display_name: record.display_name.clone(),
            profile_picture: record.avatar_url.clone(),
        }
    }
}

/// One activity in a presence document. Absent fields are omitted, never
/// serialized as placeholder strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDto {
    /// Activity name.
    pub name: String,
    /// Activity type: the fixed tag `CustomActivity` for custom statuses,
    /// otherwise the platform-reported type string.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// State line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Detail line (rich entries only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Large artwork URL (rich entries only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_image_url: Option<String>,
    /// Small artwork URL (rich entries only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image_url: Option<String>,
}

impl From<&ActivityEntry> for ActivityDto {
    fn from(entry: &ActivityEntry) -> Self {
        match entry {
            ActivityEntry::Custom { name, state } => Self {
                name: name.clone(),
                kind: Some("CustomActivity".to_string()),
                state: state.clone(),
                details: None,
                large_image_url: None,
                small_image_url: None,
            },
            ActivityEntry::Rich {
                name,
                kind,
                details,
                state,
                large_image_url,
                small_image_url,
            } => Self {
                name: name.clone(),
                kind: kind.clone(),
                state: state.clone(),
                details: details.clone(),
                large_image_url: large_image_url.clone(),
                small_image_url: small_image_url.clone(),
            },
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}
