//! Deployment run

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::app::options::RunOptions;
use crate::deploy::command::{should_select_project, CommandBuilder};
use crate::deploy::executor::{execute, CommandRunner};
use crate::errors::PluginError;
use crate::input::PluginInput;

/// Run a deployment: select the project if one is given, then deploy.
///
/// Stops at the first failing step. A project selection that succeeded is
/// not undone when the deploy fails.
pub async fn run<R>(
    input: &PluginInput,
    options: &RunOptions,
    runner: &R,
) -> Result<(), PluginError>
where
    R: CommandRunner + ?Sized,
{
    let params = &input.params;

    println!("Changing to path: {}", input.workspace.path().display());
    let workdir = resolve_workdir(input.workspace.path()).await?;

    let builder = CommandBuilder::new(&options.program, &options.base_env);

    if should_select_project(params) {
        info!("Selecting project {}", params.project_id);
        let select = builder.select_project(params);
        execute(runner, &select, &workdir, params.debug, params.dry_run).await?;
    } else {
        debug!("No project id, keeping the active project");
    }

    let deploy = builder.deploy(params);
    execute(runner, &deploy, &workdir, params.debug, params.dry_run).await?;

    info!("Deployment finished");
    Ok(())
}

/// The workspace path, which must be an existing directory
async fn resolve_workdir(path: &Path) -> Result<PathBuf, PluginError> {
    let workdir_error = |source| PluginError::Workdir {
        path: path.to_path_buf(),
        source,
    };

    let metadata = tokio::fs::metadata(path).await.map_err(workdir_error)?;
    if !metadata.is_dir() {
        return Err(workdir_error(io::Error::other("not a directory")));
    }

    Ok(path.to_path_buf())
}
