// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal output

use super::OutputSink;
use std::io::Write;
use std::sync::{Arc, Mutex};

type Writer = Box<dyn Write + Send>;

struct Streams {
    stdout: Writer,
    stderr: Writer,
    /// Label of the indicator left unterminated on stderr
    open: Option<String>,
}

/// Writes log lines to stdout and progress indicators to stderr.
///
/// A progress indicator is printed as `label... ` and completed in place
/// by `action_stop`, so piped stdout only carries log lines. A warning
/// printed while an indicator is open goes on its own line and the label
/// is redrawn after it.
#[derive(Clone)]
pub struct ConsoleOutput {
    streams: Arc<Mutex<Streams>>,
}

impl ConsoleOutput {
    pub fn new() -> Self {
        Self::with_writers(Box::new(std::io::stdout()), Box::new(std::io::stderr()))
    }

    fn with_writers(stdout: Writer, stderr: Writer) -> Self {
        Self {
            streams: Arc::new(Mutex::new(Streams {
                stdout,
                stderr,
                open: None,
            })),
        }
    }

    fn streams(&self) -> std::sync::MutexGuard<'_, Streams> {
        self.streams.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for ConsoleOutput {
    fn log(&self, text: &str) {
        let mut streams = self.streams();
        let _ = writeln!(streams.stdout, "{}", text);
        let _ = streams.stdout.flush();
    }

    fn warn(&self, text: &str) {
        let mut guard = self.streams();
        let streams = &mut *guard;
        if streams.open.is_some() {
            let _ = writeln!(streams.stderr);
        }
        let _ = writeln!(streams.stderr, "warning: {}", text);
        if let Some(label) = &streams.open {
            let _ = write!(streams.stderr, "{}... ", label);
        }
        let _ = streams.stderr.flush();
    }

    fn action_start(&self, label: &str) {
        let mut streams = self.streams();
        if streams.open.is_some() {
            let _ = writeln!(streams.stderr);
        }
        let _ = write!(streams.stderr, "{}... ", label);
        let _ = streams.stderr.flush();
        streams.open = Some(label.to_string());
    }

    fn action_stop(&self, symbol: &str) {
        let mut streams = self.streams();
        let _ = writeln!(streams.stderr, "{}", symbol);
        let _ = streams.stderr.flush();
        streams.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shared buffer standing in for a terminal stream
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn console() -> (ConsoleOutput, Captured, Captured) {
        let stdout = Captured::default();
        let stderr = Captured::default();
        let output = ConsoleOutput::with_writers(Box::new(stdout.clone()), Box::new(stderr.clone()));
        (output, stdout, stderr)
    }

    #[test]
    fn indicator_completes_in_place() {
        let (output, stdout, stderr) = console();

        output.action_start("Building");
        output.action_stop("✔");
        output.log("Streaming logs:");

        assert_eq!(stderr.text(), "Building... ✔\n");
        assert_eq!(stdout.text(), "Streaming logs:\n");
    }

    #[test]
    fn warning_breaks_open_indicator_and_redraws_it() {
        let (output, _stdout, stderr) = console();

        output.action_start("Preparing");
        output.warn("could not fetch pipeline status: timed out");
        output.action_stop("✔");

        assert_eq!(
            stderr.text(),
            "Preparing... \nwarning: could not fetch pipeline status: timed out\nPreparing... ✔\n"
        );
    }

    #[test]
    fn warning_without_indicator_is_one_line() {
        let (output, _stdout, stderr) = console();

        output.action_start("Deploying");
        output.action_stop("✖");
        output.warn("retrying");

        assert_eq!(stderr.text(), "Deploying... ✖\nwarning: retrying\n");
    }
}
