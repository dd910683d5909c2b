//! Deployment parameters

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::errors::PluginError;

/// Parameters as they appear under the `vargs` key
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawParameters {
    #[serde(default)]
    pub token: String,

    #[serde(default)]
    pub project_id: String,

    #[serde(default)]
    pub message: String,

    /// Comma separated deploy targets, passed through verbatim
    #[serde(default)]
    pub targets: String,

    #[serde(default, rename = "dryrun")]
    pub dry_run: bool,

    #[serde(default)]
    pub debug: bool,
}

/// Validated deployment parameters
#[derive(Debug)]
pub struct DeploymentParameters {
    /// Firebase CI token, forwarded through `FIREBASE_TOKEN`
    pub token: SecretString,

    /// Project to select before deploying (optional)
    pub project_id: String,

    /// Deploy message (optional)
    pub message: String,

    /// Comma separated deploy targets (optional)
    pub targets: String,

    /// Log the commands instead of running them
    pub dry_run: bool,

    /// Trace commands and enable `DEBUG=true` for the CLI
    pub debug: bool,
}

impl DeploymentParameters {
    /// The token in clear text
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }
}

impl Default for DeploymentParameters {
    fn default() -> Self {
        Self {
            token: SecretString::from(String::new()),
            project_id: String::new(),
            message: String::new(),
            targets: String::new(),
            dry_run: false,
            debug: false,
        }
    }
}

impl TryFrom<RawParameters> for DeploymentParameters {
    type Error = PluginError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        let token = raw.token.trim();
        if token.is_empty() {
            return Err(PluginError::Validation(
                "token must not be empty".to_string(),
            ));
        }

        Ok(Self {
            token: SecretString::from(token.to_string()),
            project_id: raw.project_id,
            message: raw.message.trim().to_string(),
            targets: raw.targets,
            dry_run: raw.dry_run,
            debug: raw.debug,
        })
    }
}
