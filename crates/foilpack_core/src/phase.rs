//! Pack interaction phase machine
//!
//! Flat state machine for the single-shot reveal:
//! `Closed -> Dragging -> Opening -> Opened`. Card flips only happen once
//! the machine reaches `Opened`; that sub-state lives with the flip
//! controller, not here. Invalid events in a phase are no-ops.

use tracing::trace;

/// Interaction phase of the pack
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PackPhase {
    #[default]
    Closed,
    Dragging,
    /// Release animation in flight
    Opening,
    Opened,
}

/// Events that drive phase transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseEvent {
    /// Pointer went down on the flap
    DragStart,
    /// Pointer released mid-drag
    Release,
    /// Keyboard short-circuit into the reveal
    OpenRequested,
    /// Release animation reached its target
    OpenFinished,
}

/// The phase machine with a transition history for diagnostics
#[derive(Debug, Default)]
pub struct PhaseMachine {
    current: PackPhase,
    history: Vec<(PackPhase, PhaseEvent, PackPhase)>,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> PackPhase {
        self.current
    }

    pub fn is_in(&self, phase: PackPhase) -> bool {
        self.current == phase
    }

    /// Transition history, oldest first
    pub fn history(&self) -> &[(PackPhase, PhaseEvent, PackPhase)] {
        &self.history
    }

    fn target_for(&self, event: PhaseEvent) -> Option<PackPhase> {
        use PackPhase::*;
        use PhaseEvent::*;
        match (self.current, event) {
            (Closed, DragStart) => Some(Dragging),
            (Dragging, Release) => Some(Opening),
            // Space short-circuits the drag entirely
            (Closed, OpenRequested) => Some(Opening),
            (Dragging, OpenRequested) => Some(Opening),
            // A fresh drag supersedes an in-flight reveal
            (Opening, DragStart) => Some(Dragging),
            (Opening, OpenFinished) => Some(Opened),
            _ => None,
        }
    }

    /// Check whether an event would trigger a transition
    pub fn can_send(&self, event: PhaseEvent) -> bool {
        self.target_for(event).is_some()
    }

    /// Send an event, returning the (possibly unchanged) current phase
    pub fn send(&mut self, event: PhaseEvent) -> PackPhase {
        let Some(next) = self.target_for(event) else {
            return self.current;
        };
        trace!(from = ?self.current, ?event, to = ?next, "pack phase transition");
        self.history.push((self.current, event, next));
        self.current = next;
        next
    }
}
