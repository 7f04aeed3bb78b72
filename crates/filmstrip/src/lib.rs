//! Keeps two non-reactive consumers consistent with store transitions: the
//! legacy layout component on full hosts, and the pin/stream-limit slices on
//! constrained hosts.

use std::rc::Rc;

use tracing::debug;

use shared::action::{self, Action};
use shared::domain::HostKind;
use store::{DispatchResult, Middleware, Next, Store};

pub mod bridge;

use bridge::LayoutBridge;

pub struct FilmstripSyncMiddleware {
    host: HostKind,
    bridge: Rc<dyn LayoutBridge>,
}

impl FilmstripSyncMiddleware {
    pub fn new(host: HostKind, bridge: Rc<dyn LayoutBridge>) -> Self {
        Self { host, bridge }
    }

    /// Reconciles the legacy layout component with the callee-info flag.
    /// Reads the flag, forwards, reads again; only a real flip reaches the
    /// bridge, and only while it is mounted.
    fn sync_callee_info(&self, store: &Store, next: Next<'_>, action: Action) -> DispatchResult {
        if !self.host.has_legacy_layout() {
            return next(action);
        }

        let old_visible = store.snapshot().callee_info_visible;
        let result = next(action);
        let new_visible = store.snapshot().callee_info_visible;

        if old_visible != new_visible {
            if self.bridge.is_mounted() {
                debug!(
                    visible = new_visible,
                    "filmstrip: callee info flipped; toggling layout component"
                );
                self.bridge.toggle_filmstrip(!new_visible);
            } else {
                debug!(
                    visible = new_visible,
                    "filmstrip: callee info flipped but layout component is unmounted"
                );
            }
        }

        result
    }

    /// Issues the compensating dispatches that keep pinning and the stream
    /// limit consistent with the filmstrip toggle on constrained hosts.
    /// Forwards first: the compensation must see the post-transition state.
    fn sync_filmstrip_enabled(
        &self,
        store: &Store,
        next: Next<'_>,
        action: Action,
    ) -> DispatchResult {
        let result = next(action);

        if self.host.has_legacy_layout() {
            return result;
        }

        let state = store.snapshot();
        let enabled = state.filmstrip.enabled;
        let audio_only = state.conference.audio_only;

        if !enabled {
            debug!("filmstrip: disabled; clearing pinned participant");
            store.dispatch(action::pin_participant(None));
        }

        // Audio-only mode owns the stream limit while it is active.
        if !audio_only {
            let limit = if enabled { None } else { Some(1) };
            debug!(?limit, "filmstrip: toggled; adjusting stream limit");
            store.dispatch(action::set_stream_limit(limit));
        }

        result
    }
}

impl Middleware for FilmstripSyncMiddleware {
    fn handle(&self, store: &Store, next: Next<'_>, action: Action) -> DispatchResult {
        match action {
            Action::SetCalleeInfoVisible { .. } => self.sync_callee_info(store, next, action),
            Action::SetFilmstripEnabled { .. } => self.sync_filmstrip_enabled(store, next, action),
            _ => next(action),
        }
    }
}

#[cfg(test)]
#[path = "tests/middleware_tests.rs"]
mod tests;
