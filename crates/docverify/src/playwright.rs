//! Executes the generated check script with node

use std::io;
use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::{VerifyError, VerifyResult};

/// Runs Playwright scripts through a node subprocess
pub struct PlaywrightRunner {
    /// Interpreter to execute the script with. Overridable so tests can
    /// substitute a stub; not exposed as user configuration.
    node_program: PathBuf,
}

impl PlaywrightRunner {
    pub fn new() -> Self {
        Self {
            node_program: PathBuf::from("node"),
        }
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            node_program: program.into(),
        }
    }

    /// Write the script to a temp file, run it, and return captured stdout.
    ///
    /// The child is always awaited to completion, so the browser process
    /// tree never outlives this call. `NODE_PATH` points at the invocation
    /// directory's `node_modules` so a project-local Playwright install
    /// resolves from the temp script location.
    pub async fn run_script(&self, script: &str) -> VerifyResult<String> {
        let temp_dir = tempfile::tempdir()?;
        let script_path = temp_dir.path().join("verify_docs.js");
        std::fs::write(&script_path, script)?;

        debug!("Running check script: {}", script_path.display());

        let node_path = std::env::current_dir()?.join("node_modules");

        let output = Command::new(&self.node_program)
            .arg(&script_path)
            .env("NODE_PATH", &node_path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    VerifyError::PlaywrightNotFound
                } else {
                    VerifyError::Io(e)
                }
            })?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VerifyError::Script(format!(
                "node exited with {}:\nstdout: {}\nstderr: {}",
                output.status, stdout, stderr
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for PlaywrightRunner {
    fn default() -> Self {
        Self::new()
    }
}
