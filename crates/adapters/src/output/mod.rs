// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing output sinks

mod console;

pub use console::ConsoleOutput;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeOutput, OutputCall};

use sq_core::DisplayAction;

/// Where progress and log lines are shown to the user
pub trait OutputSink: Send + Sync {
    fn log(&self, text: &str);

    fn warn(&self, text: &str);

    /// Start a progress indicator
    fn action_start(&self, label: &str);

    /// Stop the running progress indicator with a closing symbol
    fn action_stop(&self, symbol: &str);

    /// Draw a display transition
    fn apply(&self, action: &DisplayAction) {
        match action {
            DisplayAction::Start(label) => self.action_start(label),
            DisplayAction::Stop { symbol, .. } => self.action_stop(symbol),
            DisplayAction::NoOp => {}
        }
    }
}
