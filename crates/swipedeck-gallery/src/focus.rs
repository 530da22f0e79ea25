#![forbid(unsafe_code)]

//! Focus grid: the select/dim/panel state machine for card grids.
//!
//! A grid of cards where selecting one dims the rest, springs the selected
//! card forward, and opens a detail panel after a short delay. Closing runs
//! a grace period during which the grid ignores re-selection so the return
//! animation can finish.
//!
//! Timers are owned by the caller: state transitions that need a delayed
//! follow-up return a [`FocusAction`] the caller schedules (and cancels on
//! teardown or re-entry) through the runtime scheduler. The corresponding
//! `*_timer_fired` method completes the transition.
//!
//! # Invariants
//!
//! 1. `select` is ignored while closing and when re-selecting the already
//!    selected card.
//! 2. Hover highlighting applies only while nothing is selected.
//! 3. Every state is a valid render state; a timer firing late (after the
//!    state moved on) is a no-op.

use web_time::Duration;

/// Delay before the selected card's detail panel opens.
pub const PANEL_OPEN_DELAY: Duration = Duration::from_millis(350);
/// Grace period after close before the grid accepts selections again.
pub const CLOSE_GRACE: Duration = Duration::from_millis(380);

/// Delayed follow-up the caller must schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusAction {
    /// Call [`FocusGrid::panel_timer_fired`] after this delay.
    OpenPanelAfter(Duration),
    /// Call [`FocusGrid::close_timer_fired`] after this delay.
    ClearAfter(Duration),
}

/// Render phase for one card in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPhase {
    /// Nothing selected; card at rest.
    Idle,
    /// Another card is selected; this one recedes.
    Dimmed,
    /// Another card's panel is open; this one recedes further.
    DimmedDeep,
    /// This card is selected, panel not yet open.
    Selected,
    /// This card is selected and the panel is open; it softens behind it.
    SelectedSoft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Idle,
    Selected { id: String, panel_open: bool },
    Closing { id: String },
}

/// Selection state machine for one focus-card grid instance.
#[derive(Debug, Clone)]
pub struct FocusGrid {
    state: State,
    hovered: Option<String>,
}

impl Default for FocusGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusGrid {
    /// Create an idle grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            hovered: None,
        }
    }

    /// Id of the selected card, if any (including during close).
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        match &self.state {
            State::Idle => None,
            State::Selected { id, .. } | State::Closing { id } => Some(id),
        }
    }

    /// Whether the detail panel is open.
    #[must_use]
    pub fn panel_open(&self) -> bool {
        matches!(
            self.state,
            State::Selected {
                panel_open: true,
                ..
            }
        )
    }

    /// Pointer entered a card. Highlight applies only while idle.
    pub fn hover(&mut self, id: &str) {
        if matches!(self.state, State::Idle) {
            self.hovered = Some(id.to_owned());
        }
    }

    /// Pointer left the hovered card.
    pub fn hover_clear(&mut self) {
        self.hovered = None;
    }

    /// Select a card. Returns the panel-open action to schedule, or `None`
    /// if the selection was ignored (closing in progress, or same card).
    pub fn select(&mut self, id: &str) -> Option<FocusAction> {
        match &self.state {
            State::Closing { .. } => None,
            State::Selected { id: current, .. } if current == id => None,
            _ => {
                self.hovered = None;
                self.state = State::Selected {
                    id: id.to_owned(),
                    panel_open: false,
                };
                Some(FocusAction::OpenPanelAfter(PANEL_OPEN_DELAY))
            }
        }
    }

    /// The panel-open delay elapsed.
    pub fn panel_timer_fired(&mut self) {
        if let State::Selected { panel_open, .. } = &mut self.state {
            *panel_open = true;
        }
    }

    /// Close the detail view. Returns the clear action to schedule, or
    /// `None` if nothing was selected.
    pub fn close(&mut self) -> Option<FocusAction> {
        match &self.state {
            State::Selected { id, .. } => {
                self.state = State::Closing { id: id.clone() };
                Some(FocusAction::ClearAfter(CLOSE_GRACE))
            }
            _ => None,
        }
    }

    /// The close grace period elapsed.
    pub fn close_timer_fired(&mut self) {
        if matches!(self.state, State::Closing { .. }) {
            self.state = State::Idle;
        }
    }

    /// Whether the card is the hover highlight target.
    #[must_use]
    pub fn is_hovered(&self, id: &str) -> bool {
        matches!(self.state, State::Idle) && self.hovered.as_deref() == Some(id)
    }

    /// Render phase for a card, per the grid's variant table.
    #[must_use]
    pub fn phase(&self, id: &str) -> FocusPhase {
        match &self.state {
            State::Idle => FocusPhase::Idle,
            State::Selected {
                id: selected,
                panel_open,
            } => match (selected == id, panel_open) {
                (true, false) => FocusPhase::Selected,
                (true, true) => FocusPhase::SelectedSoft,
                (false, false) => FocusPhase::Dimmed,
                (false, true) => FocusPhase::DimmedDeep,
            },
            // Closing renders like a selection with the panel shut.
            State::Closing { id: selected } => {
                if selected == id {
                    FocusPhase::Selected
                } else {
                    FocusPhase::Dimmed
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_schedules_panel_open() {
        let mut grid = FocusGrid::new();
        assert_eq!(
            grid.select("alpha"),
            Some(FocusAction::OpenPanelAfter(PANEL_OPEN_DELAY))
        );
        assert_eq!(grid.phase("alpha"), FocusPhase::Selected);
        assert_eq!(grid.phase("beta"), FocusPhase::Dimmed);

        grid.panel_timer_fired();
        assert!(grid.panel_open());
        assert_eq!(grid.phase("alpha"), FocusPhase::SelectedSoft);
        assert_eq!(grid.phase("beta"), FocusPhase::DimmedDeep);
    }

    #[test]
    fn reselecting_same_card_is_ignored() {
        let mut grid = FocusGrid::new();
        grid.select("alpha");
        assert_eq!(grid.select("alpha"), None);
    }

    #[test]
    fn close_runs_grace_then_clears() {
        let mut grid = FocusGrid::new();
        grid.select("alpha");
        grid.panel_timer_fired();
        assert_eq!(grid.close(), Some(FocusAction::ClearAfter(CLOSE_GRACE)));
        // Panel shuts immediately; selection lingers through the grace.
        assert!(!grid.panel_open());
        assert_eq!(grid.phase("alpha"), FocusPhase::Selected);
        // Selection during the grace is ignored.
        assert_eq!(grid.select("beta"), None);

        grid.close_timer_fired();
        assert_eq!(grid.phase("alpha"), FocusPhase::Idle);
        assert!(grid.select("beta").is_some());
    }

    #[test]
    fn hover_only_applies_while_idle() {
        let mut grid = FocusGrid::new();
        grid.hover("alpha");
        assert!(grid.is_hovered("alpha"));
        grid.select("beta");
        grid.hover("alpha");
        assert!(!grid.is_hovered("alpha"));
    }

    #[test]
    fn switching_selection_restarts_panel_delay() {
        let mut grid = FocusGrid::new();
        grid.select("alpha");
        grid.panel_timer_fired();
        // Selecting another card resets the panel to shut.
        assert!(grid.select("beta").is_some());
        assert!(!grid.panel_open());
        assert_eq!(grid.phase("beta"), FocusPhase::Selected);
        assert_eq!(grid.phase("alpha"), FocusPhase::Dimmed);
    }

    #[test]
    fn late_timers_are_no_ops() {
        let mut grid = FocusGrid::new();
        grid.panel_timer_fired();
        grid.close_timer_fired();
        assert_eq!(grid.phase("alpha"), FocusPhase::Idle);
    }
}
