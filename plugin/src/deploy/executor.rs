//! Command execution

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error};

use crate::deploy::command::FirebaseCommand;
use crate::errors::PluginError;

/// Runs a firebase command to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` from `workdir`
    async fn run(&self, command: &FirebaseCommand, workdir: &Path) -> Result<(), PluginError>;
}

/// Runs commands as child processes sharing the plugin's stdout and stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &FirebaseCommand, workdir: &Path) -> Result<(), PluginError> {
        debug!("Running `{}` in {}", command, workdir.display());

        let status = Command::new(&command.program)
            .args(&command.args)
            .env_clear()
            .envs(command.env.iter())
            .current_dir(workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| PluginError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        if !status.success() {
            error!("`{}` failed: {}", command, status);
            return Err(PluginError::Execution {
                command: command.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// The line printed for a traced command
pub fn trace_line(command: &FirebaseCommand) -> String {
    format!("$ {}", command)
}

/// Trace and run a command.
///
/// The command is traced to stdout when `debug` or `dry_run` is set. A dry run
/// returns right after tracing.
pub async fn execute<R>(
    runner: &R,
    command: &FirebaseCommand,
    workdir: &Path,
    debug: bool,
    dry_run: bool,
) -> Result<(), PluginError>
where
    R: CommandRunner + ?Sized,
{
    if debug || dry_run {
        println!("{}", trace_line(command));
    }

    if dry_run {
        debug!("Dry run, skipping `{}`", command);
        return Ok(());
    }

    runner.run(command, workdir).await
}
