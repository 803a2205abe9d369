// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress indicator state.
//!
//! The poll session owns a [`DisplayState`] and turns status changes into
//! [`DisplayAction`]s; the output sink is what actually draws them.

use crate::status::PipelineStatus;

/// Action for the output sink to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayAction {
    /// Start a progress indicator with this label
    Start(String),
    /// Stop the running indicator, marking it with a symbol
    Stop { label: String, symbol: String },
    NoOp,
}

/// Which progress indicator, if any, is currently running
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    current_label: Option<String>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_label(&self) -> Option<&str> {
        self.current_label.as_deref()
    }

    /// Start an indicator. Callers stop the running one first.
    pub fn start(&mut self, label: impl Into<String>) -> DisplayAction {
        let label = label.into();
        self.current_label = Some(label.clone());
        DisplayAction::Start(label)
    }

    /// Stop the running indicator. `None` when nothing was running.
    pub fn stop(&mut self, symbol: impl Into<String>) -> Option<DisplayAction> {
        self.current_label.take().map(|label| DisplayAction::Stop {
            label,
            symbol: symbol.into(),
        })
    }
}

/// Map a status to its display action.
///
/// Starts an indicator only when the status just changed and has a label;
/// an unchanged status keeps the already running indicator.
pub fn display_action(status: &PipelineStatus, transitioned: bool) -> DisplayAction {
    match status.label() {
        Some(label) if transitioned => DisplayAction::Start(label.to_string()),
        _ => DisplayAction::NoOp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_then_stop() {
        let mut state = DisplayState::new();
        assert_eq!(
            state.start("Building"),
            DisplayAction::Start("Building".to_string())
        );
        assert_eq!(state.current_label(), Some("Building"));

        let stop = state.stop("✔");
        assert_eq!(
            stop,
            Some(DisplayAction::Stop {
                label: "Building".to_string(),
                symbol: "✔".to_string(),
            })
        );
        assert_eq!(state.current_label(), None);
    }

    #[test]
    fn stop_without_running_indicator_is_none() {
        let mut state = DisplayState::new();
        assert_eq!(state.stop("✔"), None);
    }

    #[test]
    fn unchanged_status_is_noop() {
        assert_eq!(
            display_action(&PipelineStatus::Created, false),
            DisplayAction::NoOp
        );
        assert_eq!(
            display_action(&PipelineStatus::Created, true),
            DisplayAction::Start("Preparing".to_string())
        );
    }

    #[test]
    fn terminal_statuses_never_start_indicator() {
        assert_eq!(display_action(&PipelineStatus::Ok, true), DisplayAction::NoOp);
        assert_eq!(
            display_action(&PipelineStatus::Unknown("X".to_string()), true),
            DisplayAction::NoOp
        );
    }

    #[test]
    fn restart_replaces_label() {
        let mut state = DisplayState::new();
        state.start("Building");
        state.start("Publishing");
        assert_eq!(state.current_label(), Some("Publishing"));
    }
}
