//! Overlay state machine
//!
//! Replaces the ad hoc open/close boolean with a named two-state machine
//! so idempotence and the equivalence of dismiss paths are checkable.

/// Visibility of a brand view's overlay
///
/// The redirect brand never leaves `Closed`; its activation is a stateless
/// side effect rather than a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

impl OverlayState {
    /// Transition `Closed -> Open`. Opening while already open stays open.
    pub fn open(&mut self) {
        *self = OverlayState::Open;
    }

    /// Transition `Open -> Closed`. Idempotent: dismissing while closed is
    /// a no-op, never an error. Backdrop click, close key, Cancel, and Save
    /// all route here.
    pub fn dismiss(&mut self) {
        *self = OverlayState::Closed;
    }

    pub fn is_open(&self) -> bool {
        *self == OverlayState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        assert_eq!(OverlayState::default(), OverlayState::Closed);
    }

    #[test]
    fn test_open_then_dismiss() {
        let mut state = OverlayState::default();
        state.open();
        assert!(state.is_open());
        state.dismiss();
        assert!(!state.is_open());
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut state = OverlayState::Open;
        state.dismiss();
        let once = state;
        state.dismiss();
        assert_eq!(state, once);
        assert_eq!(state, OverlayState::Closed);
    }

    #[test]
    fn test_dismiss_from_closed_is_a_noop() {
        let mut state = OverlayState::Closed;
        state.dismiss();
        assert_eq!(state, OverlayState::Closed);
    }

    #[test]
    fn test_visibility_tracks_opens_and_closes() {
        // Visibility equals "an open happened since the last dismiss".
        let mut state = OverlayState::default();
        for _ in 0..3 {
            state.open();
            assert!(state.is_open());
            state.dismiss();
            assert!(!state.is_open());
        }
    }
}
