//! Process-wide focus state: which subject is framed and whether its content
//! has been revealed.
//!
//! The phase enum makes "revealed without an active subject" unrepresentable.
//! Readers poll [`FocusState::active_id`] and [`FocusState::content_revealed`]
//! once per frame; there are no change notifications.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Unfocused,
    Focused(String),
    Revealed(String),
}

/// Requests flowing into the focus machine from controllers, navigation
/// links or the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FocusEvent {
    Select(String),
    Confirm,
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusState {
    phase: Phase,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_id(&self) -> Option<&str> {
        match &self.phase {
            Phase::Unfocused => None,
            Phase::Focused(id) | Phase::Revealed(id) => Some(id),
        }
    }

    pub fn content_revealed(&self) -> bool {
        matches!(self.phase, Phase::Revealed(_))
    }

    pub fn is_focused(&self) -> bool {
        self.active_id().is_some()
    }

    /// Frame `id`. Always clears the reveal flag, even when re-selecting the
    /// subject that is already revealed.
    pub fn select(&mut self, id: &str) {
        log::debug!("[focus] select {}", id);
        self.phase = Phase::Focused(id.to_string());
    }

    /// Reveal content for the active subject. Returns `false` (state unchanged)
    /// when nothing is focused.
    pub fn confirm(&mut self) -> bool {
        match std::mem::take(&mut self.phase) {
            Phase::Unfocused => {
                log::debug!("[focus] confirm ignored: nothing focused");
                false
            }
            Phase::Focused(id) | Phase::Revealed(id) => {
                log::debug!("[focus] reveal {}", id);
                self.phase = Phase::Revealed(id);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        if self.phase != Phase::Unfocused {
            log::debug!("[focus] reset");
        }
        self.phase = Phase::Unfocused;
    }

    /// Dispatch an event. Returns whether the state changed.
    pub fn apply(&mut self, event: &FocusEvent) -> bool {
        let before = self.phase.clone();
        match event {
            FocusEvent::Select(id) => self.select(id),
            FocusEvent::Confirm => {
                self.confirm();
            }
            FocusEvent::Reset => self.reset(),
        }
        before != self.phase
    }
}
