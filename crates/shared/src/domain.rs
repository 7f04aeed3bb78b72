use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Which host flavor this process runs as. Set once by the host shell at
/// startup; everything downstream only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    /// Full host that still carries the legacy imperative layout component.
    Desktop,
    /// Constrained host without the legacy layout component.
    Mobile,
}

impl HostKind {
    pub fn has_legacy_layout(self) -> bool {
        matches!(self, HostKind::Desktop)
    }
}
