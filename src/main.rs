//! JSON Processor - validate JSON, post it to a backend, filter the response
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jproc_core::prelude::*;
use jproc_core::FilterKind;

/// JSON Processor - validate JSON, post it to a /bfhl backend, filter the response
#[derive(Parser, Debug)]
#[command(name = "jproc")]
#[command(about = "Validate JSON, post it to a /bfhl backend and filter the response", long_about = None)]
struct Args {
    /// Backend base URL (overrides JPROC_BACKEND_URL and .jproc/config.toml)
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Run one submit cycle without the TUI, printing NDJSON events
    #[arg(long)]
    headless: bool,

    /// Headless input file ("-" or omitted reads stdin)
    #[arg(long, value_name = "PATH", requires = "headless")]
    input: Option<PathBuf>,

    /// Headless filter: alphabets, numbers or highestAlphabet (repeatable)
    #[arg(long = "filter", value_name = "NAME", requires = "headless")]
    filters: Vec<FilterKind>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let options = json_processor::Options {
        backend_url: args.backend_url,
        headless: args.headless,
        input: args.input,
        filters: args.filters,
    };

    match json_processor::run(options).await {
        Err(Error::NoBackendUrl) => {
            eprintln!("❌ No backend URL configured.");
            eprintln!();
            eprintln!("Set one of:");
            eprintln!("  • --backend-url http://localhost:3000");
            eprintln!("  • JPROC_BACKEND_URL=http://localhost:3000");
            eprintln!("  • base_url under [backend] in .jproc/config.toml");
            Ok(ExitCode::FAILURE)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_args() {
        let args = Args::try_parse_from([
            "jproc",
            "--headless",
            "--backend-url",
            "http://localhost:3000",
            "--input",
            "body.json",
            "--filter",
            "alphabets",
            "--filter",
            "highestAlphabet",
        ])
        .unwrap();

        assert!(args.headless);
        assert_eq!(args.backend_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(args.input, Some(PathBuf::from("body.json")));
        assert_eq!(
            args.filters,
            vec![FilterKind::Alphabets, FilterKind::HighestAlphabet]
        );
    }

    #[test]
    fn test_unknown_filter_is_rejected() {
        let result = Args::try_parse_from(["jproc", "--headless", "--filter", "letters"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_filter_requires_headless() {
        let result = Args::try_parse_from(["jproc", "--filter", "numbers"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_to_tui() {
        let args = Args::try_parse_from(["jproc"]).unwrap();
        assert!(!args.headless);
        assert!(args.filters.is_empty());
    }
}
