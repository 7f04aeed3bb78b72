use serde::{Deserialize, Serialize};

use crate::domain::ParticipantId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    SetCalleeInfoVisible {
        visible: bool,
    },
    SetFilmstripEnabled {
        enabled: bool,
    },
    SetAudioOnly {
        audio_only: bool,
    },
    /// `None` clears the current pin.
    PinParticipant {
        participant: Option<ParticipantId>,
    },
    /// `None` removes the receiver stream-count limit.
    SetStreamLimit {
        limit: Option<u32>,
    },
}

pub fn set_callee_info_visible(visible: bool) -> Action {
    Action::SetCalleeInfoVisible { visible }
}

pub fn set_filmstrip_enabled(enabled: bool) -> Action {
    Action::SetFilmstripEnabled { enabled }
}

pub fn set_audio_only(audio_only: bool) -> Action {
    Action::SetAudioOnly { audio_only }
}

pub fn pin_participant(participant: Option<ParticipantId>) -> Action {
    Action::PinParticipant { participant }
}

pub fn set_stream_limit(limit: Option<u32>) -> Action {
    Action::SetStreamLimit { limit }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_serialize_with_snake_case_tags() {
        let json = serde_json::to_value(set_filmstrip_enabled(false)).expect("serialize");
        assert_eq!(json["type"], "set_filmstrip_enabled");
        assert_eq!(json["payload"]["enabled"], false);

        let json = serde_json::to_value(set_stream_limit(Some(1))).expect("serialize");
        assert_eq!(json["type"], "set_stream_limit");
        assert_eq!(json["payload"]["limit"], 1);
    }

    #[test]
    fn pin_participant_accepts_a_cleared_target() {
        let action: Action = serde_json::from_str(
            r#"{"type":"pin_participant","payload":{"participant":null}}"#,
        )
        .expect("deserialize");
        assert_eq!(action, pin_participant(None));
    }
}
