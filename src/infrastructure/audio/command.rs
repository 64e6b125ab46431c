use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::application::ports::{LipSyncError, TranscodeError};

/// Failure of an external command-line tool.
#[derive(Debug)]
pub(super) enum ToolError {
    Spawn(std::io::Error),
    Failed { status: String, stderr: String },
}

/// Runs `program` with `args` (no shell) and returns its stdout on a zero exit.
pub(super) async fn run_tool<I, S>(program: &Path, args: I) -> Result<String, ToolError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(ToolError::Spawn)?;

    if !output.status.success() {
        return Err(ToolError::Failed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl From<ToolError> for TranscodeError {
    fn from(e: ToolError) -> Self {
        match e {
            ToolError::Spawn(e) => TranscodeError::SpawnFailed(e),
            ToolError::Failed { status, stderr } => TranscodeError::ProcessFailed { status, stderr },
        }
    }
}

impl From<ToolError> for LipSyncError {
    fn from(e: ToolError) -> Self {
        match e {
            ToolError::Spawn(e) => LipSyncError::SpawnFailed(e),
            ToolError::Failed { status, stderr } => LipSyncError::ProcessFailed { status, stderr },
        }
    }
}
