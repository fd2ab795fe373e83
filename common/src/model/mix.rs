use serde::{Deserialize, Serialize};

/// An audio link paired with a video link. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixResult {
    pub audio_id: String,
    pub video_id: String,
}
