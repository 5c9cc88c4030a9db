//! Settings parser for .jproc/config.toml and backend URL resolution

use std::path::Path;
use std::time::Duration;

use url::Url;

use super::types::{BackendConfig, Settings};
use jproc_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const JPROC_DIR: &str = ".jproc";

/// Environment variable holding the backend base URL
pub const BACKEND_URL_ENV: &str = "JPROC_BACKEND_URL";

/// Path of the endpoint appended to the base URL
pub const ENDPOINT_PATH: &str = "bfhl";

/// Load settings from `.jproc/config.toml` under `dir`.
///
/// A missing or unreadable file yields defaults.
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = dir.join(JPROC_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Resolve the backend once at startup.
///
/// Precedence: `cli_url`, then `JPROC_BACKEND_URL`, then `backend.base_url`.
pub fn resolve_backend(cli_url: Option<&str>, settings: &Settings) -> Result<BackendConfig> {
    let env_url = std::env::var(BACKEND_URL_ENV).ok();
    resolve_backend_from(cli_url, env_url.as_deref(), settings)
}

/// Same as [`resolve_backend`] with the environment value passed in
pub fn resolve_backend_from(
    cli_url: Option<&str>,
    env_url: Option<&str>,
    settings: &Settings,
) -> Result<BackendConfig> {
    let base = [cli_url, env_url, settings.backend.base_url.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .ok_or(Error::NoBackendUrl)?;

    let endpoint = endpoint_url(base)?;
    let timeout = settings
        .backend
        .request_timeout_ms
        .map(Duration::from_millis);

    info!("Backend endpoint: {}", endpoint);
    Ok(BackendConfig { endpoint, timeout })
}

/// Build `<base>/bfhl`, ignoring trailing slashes on `base`
pub fn endpoint_url(base: &str) -> Result<Url> {
    let trimmed = base.trim().trim_end_matches('/');
    let joined = format!("{}/{}", trimmed, ENDPOINT_PATH);

    let url = Url::parse(&joined)
        .map_err(|e| Error::config_invalid(format!("backend URL '{}': {}", base, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::config_invalid(format!(
            "backend URL '{}' must use http or https, not '{}'",
            base, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn settings_with_url(url: &str) -> Settings {
        let mut settings = Settings::default();
        settings.backend.base_url = Some(url.to_string());
        settings
    }

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert!(settings.backend.base_url.is_none());
        assert!(settings.ui.show_key_hints);
    }

    #[test]
    fn test_load_settings_from_file() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(JPROC_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(CONFIG_FILENAME),
            r#"
[backend]
base_url = "http://localhost:3000"
request_timeout_ms = 2500

[ui]
show_key_hints = false
"#,
        )
        .unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(
            settings.backend.base_url.as_deref(),
            Some("http://localhost:3000")
        );
        assert_eq!(settings.backend.request_timeout_ms, Some(2500));
        assert!(!settings.ui.show_key_hints);
    }

    #[test]
    fn test_load_settings_invalid_toml_falls_back() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(JPROC_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILENAME), "[backend\nbase_url = ").unwrap();

        let settings = load_settings(temp.path());
        assert!(settings.backend.base_url.is_none());
    }

    #[test]
    fn test_endpoint_url_appends_bfhl() {
        assert_eq!(
            endpoint_url("http://localhost:3000").unwrap().as_str(),
            "http://localhost:3000/bfhl"
        );
        assert_eq!(
            endpoint_url("https://api.example.com/v1//").unwrap().as_str(),
            "https://api.example.com/v1/bfhl"
        );
    }

    #[test]
    fn test_endpoint_url_rejects_bad_urls() {
        assert!(matches!(
            endpoint_url("localhost:3000"),
            Err(Error::ConfigInvalid { .. })
        ));
        assert!(matches!(
            endpoint_url("ftp://example.com"),
            Err(Error::ConfigInvalid { .. })
        ));
        assert!(endpoint_url("not a url").is_err());
    }

    #[test]
    fn test_resolve_precedence() {
        let settings = settings_with_url("http://from-file");

        let cli = resolve_backend_from(Some("http://from-cli"), Some("http://from-env"), &settings)
            .unwrap();
        assert_eq!(cli.endpoint.as_str(), "http://from-cli/bfhl");

        let env = resolve_backend_from(None, Some("http://from-env"), &settings).unwrap();
        assert_eq!(env.endpoint.as_str(), "http://from-env/bfhl");

        let file = resolve_backend_from(None, None, &settings).unwrap();
        assert_eq!(file.endpoint.as_str(), "http://from-file/bfhl");
    }

    #[test]
    fn test_resolve_skips_blank_values() {
        let settings = settings_with_url("http://from-file");
        let config = resolve_backend_from(Some("  "), Some(""), &settings).unwrap();
        assert_eq!(config.endpoint.as_str(), "http://from-file/bfhl");
    }

    #[test]
    fn test_resolve_without_url_is_fatal() {
        let err = resolve_backend_from(None, None, &Settings::default()).unwrap_err();
        assert!(matches!(err, Error::NoBackendUrl));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_resolve_timeout() {
        let mut settings = settings_with_url("http://localhost");
        assert_eq!(
            resolve_backend_from(None, None, &settings).unwrap().timeout,
            None
        );

        settings.backend.request_timeout_ms = Some(1500);
        assert_eq!(
            resolve_backend_from(None, None, &settings).unwrap().timeout,
            Some(Duration::from_millis(1500))
        );
    }

    #[test]
    #[serial]
    fn test_resolve_backend_reads_env() {
        std::env::set_var(BACKEND_URL_ENV, "http://env-host:8080/");
        let config = resolve_backend(None, &settings_with_url("http://from-file")).unwrap();
        std::env::remove_var(BACKEND_URL_ENV);

        assert_eq!(config.endpoint.as_str(), "http://env-host:8080/bfhl");
    }

    #[test]
    #[serial]
    fn test_resolve_backend_without_env_uses_file() {
        std::env::remove_var(BACKEND_URL_ENV);
        let config = resolve_backend(None, &settings_with_url("http://from-file")).unwrap();
        assert_eq!(config.endpoint.as_str(), "http://from-file/bfhl");
    }
}
