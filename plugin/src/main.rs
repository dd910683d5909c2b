//! Drone Firebase Plugin - Entry Point
//!
//! Usage: drone-firebase '<payload json>'
//!
//! Deploys the pipeline workspace with the Firebase CLI.

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use tracing::error;

use drone_firebase::app::options::{RunOptions, Settings};
use drone_firebase::app::run::run;
use drone_firebase::deploy::executor::ProcessRunner;
use drone_firebase::errors::PluginError;
use drone_firebase::input::parse_input_str;
use drone_firebase::logs::{init_logging, LogHandle, LogLevel, LogOptions};
use drone_firebase::utils::{banner, version_info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    // Print version and exit
    if args.iter().any(|arg| arg == "--version") {
        match serde_json::to_string_pretty(&version_info()) {
            Ok(version) => println!("{}", version),
            Err(e) => {
                println!("Firebase: {}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("{}", banner());

    let Some(payload) = args.iter().find(|arg| !arg.starts_with("--")) else {
        println!("Firebase: Too few arguments.");
        return ExitCode::FAILURE;
    };

    let settings = Settings::from_env();
    let log_options = match &settings {
        Ok(settings) => LogOptions {
            log_level: settings.log_level,
            json_format: settings.log_json,
        },
        Err(_) => LogOptions::default(),
    };
    let mut logs = match init_logging(log_options) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    match deploy(payload, settings, logs.as_mut()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            println!("Firebase: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn deploy(
    payload: &str,
    settings: Result<Settings, PluginError>,
    logs: Option<&mut LogHandle>,
) -> anyhow::Result<()> {
    let settings = settings.context("Unable to read plugin settings")?;
    let input = parse_input_str(payload).context("Unable to parse invalid plugin input")?;

    if input.params.debug {
        if let Some(logs) = logs {
            if let Err(e) = logs.raise_to(LogLevel::Debug) {
                eprintln!("Failed to raise log level: {e}");
            }
        }
        println!("Workspace data: {:?}", input.workspace);
        println!("Firebase plugin data: {:?}", input.params);
    }

    let options = RunOptions::from_settings(&settings);
    run(&input, &options, &ProcessRunner)
        .await
        .context("Error in deployment")
}
