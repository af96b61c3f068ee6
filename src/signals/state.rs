use serde::Serialize;

use crate::models::TargetId;

use super::{KeyTimingSignal, PointerSignal};

/// Everything the sampler reads on a tick. Mutated by host events.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignalState {
    pub pointer: PointerSignal,
    pub keys: KeyTimingSignal,
    pub focus: Option<TargetId>,
}

impl SignalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, viewport_width: f64, viewport_height: f64) {
        self.pointer.update(x, y, viewport_width, viewport_height);
    }

    pub fn on_key_down(&mut self, now_ms: f64) {
        self.keys.record_press(now_ms);
    }

    /// Last focus wins.
    pub fn on_focus_change(&mut self, target: Option<TargetId>) {
        self.focus = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_focus_wins() {
        let mut state = SignalState::new();
        assert!(state.focus.is_none());

        state.on_focus_change(Some(TargetId(0)));
        state.on_focus_change(Some(TargetId(2)));
        assert_eq!(state.focus, Some(TargetId(2)));

        state.on_focus_change(None);
        assert!(state.focus.is_none());
    }

    #[test]
    fn events_update_their_own_signal_only() {
        let mut state = SignalState::new();
        state.on_pointer_move(10.0, 20.0, 100.0, 100.0);
        state.on_key_down(5.0);

        assert_eq!(state.pointer.position(), (10.0, 20.0));
        assert_eq!(state.keys.total_presses, 1);
        assert!(state.focus.is_none());
    }
}
