//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP fetch settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Data and seed file locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolve a load result, warning and using defaults when it failed.
    pub fn or_default(loaded: Result<Self>, path: &Path) -> Self {
        loaded.unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path,
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.scraper.user_agent.trim().is_empty() {
            return Err(AppError::validation("scraper.user_agent is empty"));
        }
        if self.scraper.timeout_secs == 0 {
            return Err(AppError::validation("scraper.timeout_secs must be > 0"));
        }
        if self.paths.raw_data_dir.trim().is_empty() {
            return Err(AppError::validation("paths.raw_data_dir is empty"));
        }
        Ok(())
    }

    /// Directory where scraped documents are written.
    pub fn raw_data_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.paths.raw_data_dir)
    }

    /// All data directories created by `init`.
    pub fn data_dirs(&self, base: &Path) -> Vec<PathBuf> {
        vec![
            base.join(&self.paths.raw_data_dir),
            base.join(&self.paths.processed_data_dir),
            base.join(&self.paths.catalog_dir),
        ]
    }

    /// Full path to the seed configuration file.
    pub fn seed_path(&self, base: &Path) -> PathBuf {
        base.join(&self.paths.seed_config)
    }
}

/// HTTP fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// File path configuration, relative to the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "defaults::raw_data_dir")]
    pub raw_data_dir: String,

    #[serde(default = "defaults::processed_data_dir")]
    pub processed_data_dir: String,

    #[serde(default = "defaults::catalog_dir")]
    pub catalog_dir: String,

    /// Seed configuration used by batch mode
    #[serde(default = "defaults::seed_config")]
    pub seed_config: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw_data_dir: defaults::raw_data_dir(),
            processed_data_dir: defaults::processed_data_dir(),
            catalog_dir: defaults::catalog_dir(),
            seed_config: defaults::seed_config(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    pub fn user_agent() -> String {
        "MongoCoachScraper/0.1".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    pub fn raw_data_dir() -> String {
        "data/raw".into()
    }
    pub fn processed_data_dir() -> String {
        "data/processed".into()
    }
    pub fn catalog_dir() -> String {
        "data/catalog".into()
    }
    pub fn seed_config() -> String {
        "config/sources_seed_associate_python.json".into()
    }

    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.scraper.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.scraper.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scraper]
            user_agent = "TestAgent/1.0"
            "#,
        )
        .unwrap();

        assert_eq!(config.scraper.user_agent, "TestAgent/1.0");
        assert_eq!(config.scraper.timeout_secs, 30);
        assert_eq!(config.paths.raw_data_dir, "data/raw");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = Path::new("/definitely/not/here/config.toml");
        let config = Config::or_default(Config::load(path), path);
        assert_eq!(config.scraper.user_agent, "MongoCoachScraper/0.1");
    }

    /// Keeps warnings emitted through the `log` facade.
    struct CapturingLogger;

    static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());
    static LOGGER: CapturingLogger = CapturingLogger;

    impl log::Log for CapturingLogger {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record<'_>) {
            if self.enabled(record.metadata()) {
                WARNINGS.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    #[test]
    fn malformed_file_falls_back_with_warning() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Warn);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "scraper = [broken").unwrap();

        let loaded = Config::load(&path);
        assert!(matches!(loaded, Err(AppError::Toml(_))));

        let config = Config::or_default(loaded, &path);
        assert_eq!(config.scraper.timeout_secs, 30);

        let warnings = WARNINGS.lock().unwrap();
        assert!(
            warnings
                .iter()
                .any(|w| w.contains("Config load failed") && w.contains("settings.toml"))
        );
    }

    #[test]
    fn data_dirs_are_joined_to_base() {
        let config = Config::default();
        let dirs = config.data_dirs(Path::new("/tmp/base"));
        assert_eq!(dirs[0], PathBuf::from("/tmp/base/data/raw"));
        assert_eq!(dirs.len(), 3);
    }
}
