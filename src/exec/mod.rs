//! Shell command execution with captured output.

use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Failure of an external command invocation. Fatal to the query that issued
/// it; no retry or partial-result salvage happens at this layer.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to spawn `{cmd}`: {source}")]
    Spawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },
    #[error("command `{cmd}` exited with {status}: {stderr}")]
    CommandFailed {
        cmd: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Executes a command line and hands back its captured stdout.
///
/// The extractor only depends on this trait, so tests (and any future
/// embedding that already holds a dump) can substitute a canned source.
pub trait CommandRunner {
    fn run(&self, cmd: &str, cwd: &Path) -> Result<String, ExecError>;
}

/// Runs the command through the user's shell, blocking until it exits.
///
/// No timeout is imposed here; cancellation policy belongs to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, cmd: &str, cwd: &Path) -> Result<String, ExecError> {
        let output = if cfg!(windows) {
            Command::new("cmd.exe")
                .args(["/c", cmd])
                .current_dir(cwd)
                .output()
        } else {
            let shell = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".into());
            Command::new(shell)
                .arg("-c")
                .arg(cmd)
                .current_dir(cwd)
                .output()
        }
        .map_err(|source| ExecError::Spawn {
            cmd: cmd.to_string(),
            source,
        })?;

        if !output.status.success() {
            return Err(ExecError::CommandFailed {
                cmd: cmd.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cwd() -> PathBuf {
        std::env::temp_dir()
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout() {
        let out = ShellRunner.run("echo hello", &cwd()).unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_an_error() {
        let err = ShellRunner.run("echo oops >&2; exit 3", &cwd()).unwrap_err();
        match err {
            ExecError::CommandFailed { status, stderr, .. } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "oops");
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }
}
