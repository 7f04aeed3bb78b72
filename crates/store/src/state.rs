use serde::{Deserialize, Serialize};

use shared::domain::ParticipantId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmstripState {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceState {
    #[serde(default)]
    pub audio_only: bool,
    #[serde(default)]
    pub stream_limit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantsState {
    #[serde(default)]
    pub pinned: Option<ParticipantId>,
}

/// One committed view of every state slice. A slice absent from serialized
/// input reads as its falsy default rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub callee_info_visible: bool,
    #[serde(default)]
    pub filmstrip: FilmstripState,
    #[serde(default)]
    pub conference: ConferenceState,
    #[serde(default)]
    pub participants: ParticipantsState,
}
