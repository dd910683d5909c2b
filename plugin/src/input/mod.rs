//! Plugin input parsing
//!
//! The pipeline hands the plugin one JSON object. Only the `workspace` and
//! `vargs` members are consumed; everything else is ignored, including any
//! data after the first object. A member set to `null` decodes to defaults.

use std::io::Read;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::errors::PluginError;
use crate::models::params::{DeploymentParameters, RawParameters};
use crate::models::workspace::WorkspaceDescriptor;

const WORKSPACE_KEY: &str = "workspace";
const VARGS_KEY: &str = "vargs";

/// Parsed and validated plugin input
#[derive(Debug)]
pub struct PluginInput {
    pub workspace: WorkspaceDescriptor,
    pub params: DeploymentParameters,
}

/// `None` only when the key is absent; a present `null` is `Some(Value::Null)`
#[derive(Deserialize)]
struct Payload {
    #[serde(default, deserialize_with = "present")]
    workspace: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    vargs: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Parse the plugin input from a reader yielding one JSON object
pub fn parse_input<R: Read>(reader: R) -> Result<PluginInput, PluginError> {
    let payload = first_payload(serde_json::Deserializer::from_reader(reader).into_iter())?;
    decode(payload)
}

/// Parse the plugin input from a string
pub fn parse_input_str(input: &str) -> Result<PluginInput, PluginError> {
    let payload = first_payload(serde_json::Deserializer::from_str(input).into_iter())?;
    decode(payload)
}

fn first_payload<I>(mut stream: I) -> Result<Payload, PluginError>
where
    I: Iterator<Item = Result<Payload, serde_json::Error>>,
{
    match stream.next() {
        Some(payload) => Ok(payload?),
        None => Err(serde_json::Error::custom("no JSON object in input").into()),
    }
}

fn decode(payload: Payload) -> Result<PluginInput, PluginError> {
    let workspace: WorkspaceDescriptor = decode_member(WORKSPACE_KEY, payload.workspace)?;
    let raw: RawParameters = decode_member(VARGS_KEY, payload.vargs)?;
    let params = DeploymentParameters::try_from(raw)?;

    debug!(
        workspace = %workspace.path().display(),
        project_id = %params.project_id,
        dry_run = params.dry_run,
        "Parsed plugin input"
    );

    Ok(PluginInput { workspace, params })
}

fn decode_member<T>(key: &'static str, value: Option<Value>) -> Result<T, PluginError>
where
    T: DeserializeOwned + Default,
{
    match value.ok_or(PluginError::MissingField(key))? {
        Value::Null => Ok(T::default()),
        value => serde_json::from_value(value).map_err(|source| PluginError::Decode { key, source }),
    }
}
