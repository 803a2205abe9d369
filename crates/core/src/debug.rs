// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose diagnostic text shown when a pipeline finishes or fails

use crate::snapshot::PipelineSnapshot;

pub const DEBUG_BANNER: &str = "==================== DEBUG INFO ====================";

/// Debug dump for one snapshot
pub struct DebugDump;

impl DebugDump {
    /// Compose the dump text. Empty log lines and a missing or empty
    /// comment are left out.
    pub fn compose(squid: &str, version: &str, snapshot: &PipelineSnapshot) -> String {
        let header = [
            DEBUG_BANNER.to_string(),
            format!("Squid: {}", squid),
            format!("Version: {}", version),
            format!("Pipeline: {}", snapshot.id),
        ];

        header
            .into_iter()
            .chain(snapshot.logs.iter().cloned())
            .chain(snapshot.comment.iter().cloned())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::PipelineStatus;
    use similar_asserts::assert_eq;

    #[test]
    fn includes_identity_logs_and_comment() {
        let snapshot = PipelineSnapshot::new("77", PipelineStatus::ImageBuilding)
            .with_logs(["pulling base image", "", "compiling"])
            .with_comment("build exceeded memory limit");

        let dump = DebugDump::compose("my-squid", "v1", &snapshot);
        assert_eq!(
            dump,
            [
                DEBUG_BANNER,
                "Squid: my-squid",
                "Version: v1",
                "Pipeline: 77",
                "pulling base image",
                "compiling",
                "build exceeded memory limit",
            ]
            .join("\n")
        );
    }

    #[test]
    fn omits_missing_and_empty_comment() {
        let snapshot = PipelineSnapshot::new("1", PipelineStatus::Ok);
        let dump = DebugDump::compose("sq", "v2", &snapshot);
        assert!(dump.ends_with("Pipeline: 1"));

        let snapshot = PipelineSnapshot::new("1", PipelineStatus::Ok).with_comment("");
        assert_eq!(DebugDump::compose("sq", "v2", &snapshot), dump);
    }
}
