//! Application entry points
//!
//! Shared startup (error reporting, logging, settings and backend resolution)
//! followed by either the TUI or headless mode.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use jproc_app::config::{self, BackendConfig, Settings};
use jproc_core::prelude::*;
use jproc_core::FilterKind;

use crate::headless;

/// Startup options from the command line
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Overrides `JPROC_BACKEND_URL` and the config file
    pub backend_url: Option<String>,
    pub headless: bool,
    /// Headless input; stdin when unset or `-`
    pub input: Option<PathBuf>,
    pub filters: Vec<FilterKind>,
}

/// Load `.jproc/config.toml` under `dir` and resolve the backend endpoint
pub fn resolve(dir: &Path, backend_url: Option<&str>) -> Result<(Settings, BackendConfig)> {
    let settings = config::load_settings(dir);
    let backend = config::resolve_backend(backend_url, &settings)?;
    Ok((settings, backend))
}

/// Main application entry point
pub async fn run(options: Options) -> Result<ExitCode> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    jproc_core::logging::init()?;

    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (settings, backend) = resolve(&dir, options.backend_url.as_deref())?;

    let result = if options.headless {
        headless::run_headless(&backend, options.input.as_deref(), &options.filters)
            .await
            .map(|success| {
                if success {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            })
    } else {
        jproc_tui::run(settings, backend)
            .await
            .map(|()| ExitCode::SUCCESS)
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("JSON Processor exiting");
    result
}
