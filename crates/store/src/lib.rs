use std::cell::RefCell;

use tracing::trace;

use shared::action::Action;

pub mod reducer;
pub mod state;

pub use state::AppState;

/// Value produced by the innermost pipeline stage and handed back unchanged
/// through every middleware to the dispatching caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    /// The action as the innermost stage saw it.
    pub action: Action,
}

/// Downstream-forward function handed to a middleware. Invoke it exactly
/// once per intercepted action and propagate its return value unchanged.
pub type Next<'a> = &'a dyn Fn(Action) -> DispatchResult;

pub trait Middleware {
    fn handle(&self, store: &Store, next: Next<'_>, action: Action) -> DispatchResult;
}

/// Synchronous, run-to-completion action store. One action is fully
/// processed, including any nested dispatches issued from inside the
/// middleware chain, before `dispatch` returns. The pipeline is strictly
/// single-threaded; interior mutability is confined to the reducer stage so
/// reentrant dispatch is safe.
pub struct Store {
    state: RefCell<AppState>,
    middleware: Vec<Box<dyn Middleware>>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self::with_middleware(initial, Vec::new())
    }

    pub fn with_middleware(initial: AppState, middleware: Vec<Box<dyn Middleware>>) -> Self {
        Self {
            state: RefCell::new(initial),
            middleware,
        }
    }

    /// Latest committed state. Returns a clone so callers can diff across a
    /// forwarded action without holding a borrow into the store.
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Runs `action` through the middleware chain and then the reducer.
    /// A middleware may dispatch again from inside the chain; the nested
    /// action re-enters the full chain and resolves before the outer call
    /// returns.
    pub fn dispatch(&self, action: Action) -> DispatchResult {
        self.run_stage(0, action)
    }

    fn run_stage(&self, stage: usize, action: Action) -> DispatchResult {
        match self.middleware.get(stage) {
            Some(middleware) => {
                let next = move |action: Action| self.run_stage(stage + 1, action);
                middleware.handle(self, &next, action)
            }
            None => {
                trace!(?action, "reduce");
                reducer::reduce(&mut self.state.borrow_mut(), &action);
                DispatchResult { action }
            }
        }
    }
}
