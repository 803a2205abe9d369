// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake output sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::OutputSink;
use std::sync::{Arc, Mutex};

/// Recorded output call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputCall {
    Log(String),
    Warn(String),
    ActionStart(String),
    ActionStop(String),
}

/// Output sink that records everything it is asked to show
#[derive(Clone, Default)]
pub struct FakeOutput {
    calls: Arc<Mutex<Vec<OutputCall>>>,
}

impl FakeOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<OutputCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Labels of every started progress indicator, in order
    pub fn started(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                OutputCall::ActionStart(label) => Some(label),
                _ => None,
            })
            .collect()
    }

    /// Every logged line, in order
    pub fn logs(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                OutputCall::Log(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: OutputCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }
}

impl OutputSink for FakeOutput {
    fn log(&self, text: &str) {
        self.record(OutputCall::Log(text.to_string()));
    }

    fn warn(&self, text: &str) {
        self.record(OutputCall::Warn(text.to_string()));
    }

    fn action_start(&self, label: &str) {
        self.record(OutputCall::ActionStart(label.to_string()));
    }

    fn action_stop(&self, symbol: &str) {
        self.record(OutputCall::ActionStop(symbol.to_string()));
    }
}
