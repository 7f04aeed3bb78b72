use shared::action::Action;

use crate::state::AppState;

/// The store's single writer. Each dispatch commits here atomically before
/// `Store::dispatch` returns to its caller.
pub fn reduce(state: &mut AppState, action: &Action) {
    match action {
        Action::SetCalleeInfoVisible { visible } => {
            state.callee_info_visible = *visible;
        }
        Action::SetFilmstripEnabled { enabled } => {
            state.filmstrip.enabled = *enabled;
        }
        Action::SetAudioOnly { audio_only } => {
            state.conference.audio_only = *audio_only;
        }
        Action::PinParticipant { participant } => {
            state.participants.pinned = participant.clone();
        }
        Action::SetStreamLimit { limit } => {
            state.conference.stream_limit = *limit;
        }
    }
}
