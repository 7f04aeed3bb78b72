//! End-to-end acceptance over a fully wired store: the middleware, a live
//! bridge stub, and the real reducer.

use std::cell::RefCell;
use std::rc::Rc;

use filmstrip::bridge::{LayoutBridge, UnmountedLayoutBridge};
use filmstrip::FilmstripSyncMiddleware;
use shared::action::{self, Action};
use shared::domain::{HostKind, ParticipantId};
use store::{AppState, DispatchResult, Middleware, Next, Store};

struct RecordingBridge {
    toggles: RefCell<Vec<bool>>,
}

impl RecordingBridge {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            toggles: RefCell::new(Vec::new()),
        })
    }
}

impl LayoutBridge for RecordingBridge {
    fn is_mounted(&self) -> bool {
        true
    }

    fn toggle_filmstrip(&self, hidden: bool) {
        self.toggles.borrow_mut().push(hidden);
    }
}

struct RecordingTail {
    seen: Rc<RefCell<Vec<Action>>>,
}

impl Middleware for RecordingTail {
    fn handle(&self, _store: &Store, next: Next<'_>, action: Action) -> DispatchResult {
        self.seen.borrow_mut().push(action.clone());
        next(action)
    }
}

fn wired(
    host: HostKind,
    bridge: Rc<dyn LayoutBridge>,
    state: AppState,
) -> (Store, Rc<RefCell<Vec<Action>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let store = Store::with_middleware(
        state,
        vec![
            Box::new(FilmstripSyncMiddleware::new(host, bridge)),
            Box::new(RecordingTail {
                seen: Rc::clone(&seen),
            }),
        ],
    );
    (store, seen)
}

#[test]
fn disabling_the_filmstrip_on_mobile_compensates_pin_and_limit() {
    let mut state = AppState::default();
    state.filmstrip.enabled = true;
    state.participants.pinned = Some(ParticipantId::new("speaker"));
    let (store, seen) = wired(HostKind::Mobile, Rc::new(UnmountedLayoutBridge), state);

    store.dispatch(action::set_filmstrip_enabled(false));

    assert_eq!(
        *seen.borrow(),
        vec![
            action::set_filmstrip_enabled(false),
            action::pin_participant(None),
            action::set_stream_limit(Some(1)),
        ]
    );
    let state = store.snapshot();
    assert!(!state.filmstrip.enabled);
    assert_eq!(state.participants.pinned, None);
    assert_eq!(state.conference.stream_limit, Some(1));
}

#[test]
fn enabling_the_filmstrip_during_audio_only_compensates_nothing() {
    let mut state = AppState::default();
    state.conference.audio_only = true;
    let (store, seen) = wired(HostKind::Mobile, Rc::new(UnmountedLayoutBridge), state);

    store.dispatch(action::set_filmstrip_enabled(true));

    assert_eq!(*seen.borrow(), vec![action::set_filmstrip_enabled(true)]);
    let state = store.snapshot();
    assert!(state.filmstrip.enabled);
    assert_eq!(state.conference.stream_limit, None);
}

#[test]
fn hiding_callee_info_on_desktop_toggles_the_bridge_only() {
    let bridge = RecordingBridge::new();
    let mut state = AppState::default();
    state.callee_info_visible = true;
    let (store, seen) = wired(HostKind::Desktop, bridge.clone(), state);

    store.dispatch(action::set_callee_info_visible(false));

    assert_eq!(*bridge.toggles.borrow(), vec![true]);
    assert_eq!(
        *seen.borrow(),
        vec![action::set_callee_info_visible(false)]
    );
    assert!(!store.snapshot().callee_info_visible);
}
