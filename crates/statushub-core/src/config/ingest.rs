//! Presence ingest configuration.

use serde::{Deserialize, Serialize};

/// Presence ingest configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Buffer size of the ingest channel between the event transport and
    /// the store-writing task.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            channel_buffer: default_channel_buffer(),
        }
    }
}

fn default_channel_buffer() -> usize {
    256
}
