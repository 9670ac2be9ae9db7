//! Demo state and its reducer.
//!
//! Every transition is a pure function from `(DemoState, DemoAction)` to an
//! [`Update`]. Side effects (starting or aborting reveal timers) are returned
//! as [`Effect`] values and executed by the caller.

use std::time::Duration;

use super::panel::PanelId;

/// Identifies one activation of one panel.
///
/// Tickets are never reused, so a completion carrying an old ticket can be
/// told apart from the one currently pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealTicket(u64);

impl RevealTicket {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RevealTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of a single panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStatus {
    /// Not activated. The placeholder is shown.
    #[default]
    NotRequested,
    /// Activated, waiting for its reveal to elapse. The skeleton is shown.
    Pending(RevealTicket),
    /// Content is shown.
    Resolved,
}

impl PanelStatus {
    /// The panel's "requested" flag.
    #[must_use]
    pub const fn is_requested(self) -> bool {
        !matches!(self, Self::NotRequested)
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending(_))
    }

    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

/// Status of every panel, keyed by [`PanelId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    slots: [PanelStatus; 3],
}

impl PanelState {
    #[must_use]
    pub const fn status(&self, panel: PanelId) -> PanelStatus {
        self.slots[panel.index()]
    }

    #[must_use]
    pub const fn is_requested(&self, panel: PanelId) -> bool {
        self.status(panel).is_requested()
    }

    /// Iterates `(panel, status)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (PanelId, PanelStatus)> + '_ {
        PanelId::ALL.into_iter().map(|p| (p, self.status(p)))
    }

    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_resolved()).count()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_pending()).count()
    }

    fn set(&mut self, panel: PanelId, status: PanelStatus) {
        self.slots[panel.index()] = status;
    }
}

/// Everything the demo screen needs to know about the interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoState {
    panels: PanelState,
    show_code: bool,
    next_ticket: u64,
}

impl DemoState {
    /// Initial state: no panel requested, code hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn panels(&self) -> &PanelState {
        &self.panels
    }

    #[must_use]
    pub const fn show_code(&self) -> bool {
        self.show_code
    }

    fn issue_ticket(&mut self) -> RevealTicket {
        let ticket = RevealTicket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }
}

/// Inputs to the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAction {
    /// User requested a panel.
    Activate(PanelId),
    /// A reveal timer fired.
    RevealElapsed {
        panel: PanelId,
        ticket: RevealTicket,
    },
    /// Clear every panel flag.
    Reset,
    /// Flip code sample visibility.
    ToggleCode,
}

/// Work the reducer asks its caller to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start a timer that reports `RevealElapsed` after `delay`.
    ScheduleReveal {
        panel: PanelId,
        ticket: RevealTicket,
        delay: Duration,
    },
    /// Abort the timer for a pending reveal.
    CancelReveal {
        panel: PanelId,
        ticket: RevealTicket,
    },
}

/// Result of one reducer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub state: DemoState,
    pub effects: Vec<Effect>,
}

impl Update {
    fn unchanged(state: DemoState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

/// Applies `action` to `state`.
#[must_use]
pub fn reduce(mut state: DemoState, action: DemoAction) -> Update {
    match action {
        DemoAction::Activate(panel) => {
            if state.panels.is_requested(panel) {
                return Update::unchanged(state);
            }
            let ticket = state.issue_ticket();
            state.panels.set(panel, PanelStatus::Pending(ticket));
            Update {
                state,
                effects: vec![Effect::ScheduleReveal {
                    panel,
                    ticket,
                    delay: panel.reveal_delay(),
                }],
            }
        }
        DemoAction::RevealElapsed { panel, ticket } => {
            if state.panels.status(panel) != PanelStatus::Pending(ticket) {
                return Update::unchanged(state);
            }
            state.panels.set(panel, PanelStatus::Resolved);
            Update::unchanged(state)
        }
        DemoAction::Reset => {
            let effects = state
                .panels
                .iter()
                .filter_map(|(panel, status)| match status {
                    PanelStatus::Pending(ticket) => Some(Effect::CancelReveal { panel, ticket }),
                    _ => None,
                })
                .collect();
            state.panels = PanelState::default();
            Update { state, effects }
        }
        DemoAction::ToggleCode => {
            state.show_code = !state.show_code;
            Update::unchanged(state)
        }
    }
}
