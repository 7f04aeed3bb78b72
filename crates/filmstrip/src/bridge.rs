//! Borrowed handle to the legacy imperative layout component.

/// Layout component owned and lifecycle-managed by the host shell. This
/// crate only checks liveness and invokes the toggle; it never constructs
/// or tears the component down.
pub trait LayoutBridge {
    /// Whether the component is currently live in this process.
    fn is_mounted(&self) -> bool;

    /// Imperatively hides or shows the filmstrip. Infallible; the component
    /// keeps its own visual state.
    fn toggle_filmstrip(&self, hidden: bool);
}

/// Stand-in for hosts that never mount the layout component.
pub struct UnmountedLayoutBridge;

impl LayoutBridge for UnmountedLayoutBridge {
    fn is_mounted(&self) -> bool {
        false
    }

    fn toggle_filmstrip(&self, _hidden: bool) {}
}
