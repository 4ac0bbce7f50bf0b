use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
    time::Duration,
};

use serde::{de, Deserialize, Deserializer};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::{
    api::{ApiError, HttpClient},
    auth::{CredentialCheck, SharedSecret, DEFAULT_ADMIN_TOKEN},
    VERSION,
};

pub const CONFIG_FILE_NAME: &str = "kyc.toml";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

fn deserialize_fromstr<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: fmt::Display,
{
    let string = String::deserialize(deserializer)?;
    T::from_str(&string)
        .map_err(|e| de::Error::custom(format!("Error parsing '{}': {}", string, e)))
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = u64::deserialize(deserializer)?;
    Ok(Duration::from_secs(secs))
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_admin_token() -> String {
    DEFAULT_ADMIN_TOKEN.to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_log_level() -> LevelFilter {
    LevelFilter::INFO
}

/// `kyc-gui/<version> (<os>; <arch>)`
pub fn default_user_agent() -> String {
    format!(
        "kyc-gui/{} ({}; {})",
        VERSION,
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// `kyc` directory in the platform data directory.
pub fn default_datadir() -> Option<PathBuf> {
    dirs::data_dir().map(|mut path| {
        path.push("kyc");
        path
    })
}

#[derive(Clone, Deserialize)]
pub struct Config {
    /// Base url of the verification backend.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Secret unlocking the admin console.
    #[serde(default = "default_admin_token")]
    pub admin_token: String,
    /// Seconds before a backend request is abandoned.
    #[serde(
        deserialize_with = "deserialize_duration",
        default = "default_request_timeout"
    )]
    pub request_timeout: Duration,
    /// Replaces the default user agent, also used for device classification.
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(deserialize_with = "deserialize_fromstr", default = "default_log_level")]
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            admin_token: default_admin_token(),
            request_timeout: default_request_timeout(),
            user_agent: None,
            log_level: default_log_level(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("admin_token", &"REDACTED")
            .field("request_timeout", &self.request_timeout)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(String),
    #[error("Failed to parse configuration file: {0}")]
    Parse(String),
    #[error("Invalid backend url '{0}': only http and https are supported")]
    InvalidUrl(String),
    #[error("Request timeout must be at least one second")]
    ZeroTimeout,
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let config = toml::from_slice::<Config>(&std::fs::read(path)?)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Reads `<datadir>/kyc.toml`, falling back to the defaults when the file
    /// does not exist.
    pub fn load(datadir: &Path) -> Result<Config, ConfigError> {
        let path = datadir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::info!("No configuration file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        tracing::info!("Reading configuration file {}", path.display());
        Self::from_file(&path)
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        self.api_url()?;
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// The backend url, which must be an absolute http(s) url.
    pub fn api_url(&self) -> Result<Url, ConfigError> {
        let invalid = || ConfigError::InvalidUrl(self.api_url.clone());
        let url = Url::parse(&self.api_url).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(invalid());
        }
        Ok(url)
    }

    /// Overrides the backend url, as given on the command line.
    pub fn set_api_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.api_url = url.to_string();
        self.check()
    }

    pub fn user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(default_user_agent)
    }

    pub fn credential_check(&self) -> Arc<dyn CredentialCheck> {
        Arc::new(SharedSecret::new(self.admin_token.clone()))
    }

    pub fn http_client(&self) -> Result<HttpClient, ApiError> {
        let url = self
            .api_url()
            .map_err(|_| ApiError::Url(self.api_url.clone()))?;
        HttpClient::new(url, self.request_timeout, self.user_agent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn toml_config() {
        let config: Config = toml::from_str(
            r#"
            api_url = "https://kyc.example.com/backend/"
            admin_token = "s3cret"
            request_timeout = 5
            user_agent = "Mozilla/5.0 (iPhone)"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.api_url().unwrap().as_str(),
            "https://kyc.example.com/backend/"
        );
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent(), "Mozilla/5.0 (iPhone)");
        assert_eq!(config.log_level, LevelFilter::DEBUG);
        assert!(config.credential_check().verify("s3cret"));
        assert!(!config.credential_check().verify("admin123"));
        assert!(!format!("{:?}", config).contains("s3cret"));
        config.check().unwrap();

        // Everything is optional
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api_url().unwrap().as_str(), "http://127.0.0.1:8000/");
        assert_eq!(config.admin_token, "admin123");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.log_level, LevelFilter::INFO);
        assert!(config.user_agent().starts_with("kyc-gui/"));

        let config: Config = toml::from_str(r#"api_url = "not a url""#).unwrap();
        assert!(matches!(config.check(), Err(ConfigError::InvalidUrl(_))));
        assert!(toml::from_str::<Config>(r#"log_level = "loud""#).is_err());
        assert!(toml::from_str::<Config>("request_timeout = -1").is_err());
    }

    #[test]
    fn check_rejects_bad_values() {
        let mut config = Config::default();
        config.api_url = "ftp://example.com/".to_string();
        assert_eq!(
            config.check(),
            Err(ConfigError::InvalidUrl("ftp://example.com/".to_string()))
        );

        let mut config = Config::default();
        config.request_timeout = Duration::ZERO;
        assert_eq!(config.check(), Err(ConfigError::ZeroTimeout));

        let mut config = Config::default();
        assert!(config.set_api_url("https://api.example.com").is_ok());
        assert!(matches!(
            config.set_api_url("localhost"),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(config.set_api_url("mailto:a@b.c").is_err());
    }

    #[test]
    fn load_from_datadir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);

        let mut file = std::fs::File::create(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        writeln!(file, "api_url = \"http://10.0.0.2:9000\"").unwrap();
        writeln!(file, "request_timeout = 12").unwrap();
        drop(file);
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.api_url, "http://10.0.0.2:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(12));
        assert!(config.http_client().is_ok());

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "request_timeout = 0").unwrap();
        assert_eq!(Config::load(dir.path()).unwrap_err(), ConfigError::ZeroTimeout);

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "api_url = [").unwrap();
        assert!(matches!(
            Config::load(dir.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::from_file(&dir.path().join("nope.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
