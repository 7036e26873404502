use crate::pipeline::domain::MergedCallGraph;
use crate::ports::outbound::CallGraphMerger;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Output document of the merge engine
#[derive(Debug, Deserialize)]
struct MergeOutput {
    #[serde(default)]
    edges: Vec<(i64, i64)>,
    #[serde(default)]
    uris: BTreeMap<i64, String>,
}

/// CommandCallGraphMerger adapter running the merge engine as a subprocess
///
/// Invocation: `<command> --callable-index <dir> <coordinate>...`, with the
/// temporary folder as working directory and `TMPDIR`. The engine prints
/// `{"edges": [[source, target], ...], "uris": {"<id>": "<uri>", ...}}` on
/// stdout and exits with status 0.
pub struct CommandCallGraphMerger {
    program: String,
    args: Vec<String>,
    callable_index: PathBuf,
    work_dir: PathBuf,
}

impl CommandCallGraphMerger {
    /// # Errors
    /// Returns an error if `command` is blank
    pub fn new(
        command: &str,
        callable_index: impl Into<PathBuf>,
        work_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| anyhow::anyhow!("Merger command must not be empty"))?;

        Ok(Self {
            program,
            args: parts.collect(),
            callable_index: callable_index.into(),
            work_dir: work_dir.into(),
        })
    }
}

/// Decodes the engine's stdout
fn parse_merge_output(stdout: &[u8]) -> Result<MergedCallGraph> {
    let output: MergeOutput = serde_json::from_slice(stdout)
        .map_err(|e| anyhow::anyhow!("Failed to decode merger output: {}", e))?;
    Ok(MergedCallGraph::new(output.edges, output.uris))
}

#[async_trait]
impl CallGraphMerger for CommandCallGraphMerger {
    async fn merge(&self, coordinates: &[String]) -> Result<MergedCallGraph> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg("--callable-index")
            .arg(&self.callable_index)
            .args(coordinates)
            .current_dir(&self.work_dir)
            .env("TMPDIR", &self.work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to execute {}: {}", self.program, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            );
        }

        parse_merge_output(&output.stdout)
    }
}
