//! Firebase command construction
//!
//! Builds the two invocations the plugin needs:
//!
//! ```text
//! $ firebase use [<project_id>]
//! $ firebase deploy [--only <targets>] [--message "<message>"]
//! ```

use std::fmt;

use crate::deploy::env::Environment;
use crate::models::params::DeploymentParameters;

/// Default name of the Firebase CLI binary
pub const DEFAULT_PROGRAM: &str = "firebase";

/// A fully described firebase invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseCommand {
    pub program: String,
    pub args: Vec<String>,
    pub env: Environment,
}

impl FirebaseCommand {
    /// Program followed by its arguments
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for FirebaseCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

/// Whether a `use` command has to run before deploying
pub fn should_select_project(params: &DeploymentParameters) -> bool {
    !params.project_id.is_empty()
}

/// Builds firebase commands against a base environment
#[derive(Debug, Clone)]
pub struct CommandBuilder<'a> {
    program: &'a str,
    base_env: &'a Environment,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(program: &'a str, base_env: &'a Environment) -> Self {
        Self { program, base_env }
    }

    /// `firebase use [<project_id>]`
    ///
    /// Always constructible; without a project id this is a bare `use`.
    /// Callers gate on [`should_select_project`].
    pub fn select_project(&self, params: &DeploymentParameters) -> FirebaseCommand {
        let mut args = vec!["use".to_string()];

        if !params.project_id.is_empty() {
            args.push(params.project_id.clone());
        }

        self.command(args, params)
    }

    /// `firebase deploy [--only <targets>] [--message "<message>"]`
    pub fn deploy(&self, params: &DeploymentParameters) -> FirebaseCommand {
        let mut args = vec!["deploy".to_string()];

        if !params.targets.is_empty() {
            args.push("--only".to_string());
            args.push(params.targets.clone());
        }

        // Quotes are literal, embedded quotes are not escaped.
        if !params.message.is_empty() {
            args.push("--message".to_string());
            args.push(format!("\"{}\"", params.message));
        }

        self.command(args, params)
    }

    fn command(&self, args: Vec<String>, params: &DeploymentParameters) -> FirebaseCommand {
        FirebaseCommand {
            program: self.program.to_string(),
            args,
            env: self.base_env.for_firebase(params.token(), params.debug),
        }
    }
}
