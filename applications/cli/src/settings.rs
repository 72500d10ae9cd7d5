/// Persisted settings: provider credentials, default paths, filename patterns
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tunesort_core::{PatternSet, Result, TuneError};
use tunesort_discogs::{AccessTokens, DiscogsConfig, DEFAULT_BASE_URL};

/// Environment variable naming the settings file
pub const CONFIG_PATH_ENV: &str = "TUNESORT_CONFIG";

/// Prefix for per-key environment overrides, e.g. `TUNESORT_CONSUMER_KEY`
pub const ENV_PREFIX: &str = "TUNESORT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub user_agent: String,
    pub api_url: String,
    pub consumer_key: String,
    pub consumer_secret: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_secret: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,

    pub and_tags: String,
    pub feature_tags: String,
    pub feature2_tags: String,
    pub invalid_tags: String,
}

impl Default for Settings {
    fn default() -> Self {
        let patterns = PatternSet::default();
        Self {
            user_agent: default_user_agent(),
            api_url: DEFAULT_BASE_URL.to_string(),
            consumer_key: String::new(),
            consumer_secret: String::new(),
            access_token: None,
            access_secret: None,
            source: None,
            destination: None,
            and_tags: patterns.and_tags,
            feature_tags: patterns.feature_tags,
            feature2_tags: patterns.feature2_tags,
            invalid_tags: patterns.invalid_tags,
        }
    }
}

fn default_user_agent() -> String {
    format!("tunesort/{}", env!("CARGO_PKG_VERSION"))
}

impl Settings {
    /// Load settings from `path` and the environment
    ///
    /// A missing file leaves the defaults in place. A file that exists but
    /// cannot be parsed is a configuration error.
    pub fn load(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Json)
                    .required(false),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(false))
            .build()
            .map_err(|e| TuneError::config(format!("{}: {}", path.display(), e)))?;

        settings
            .try_deserialize()
            .map_err(|e| TuneError::config(format!("{}: {}", path.display(), e)))
    }

    /// Write the settings back as pretty JSON, creating the parent folder
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Filename patterns as configured
    pub fn patterns(&self) -> PatternSet {
        PatternSet {
            and_tags: self.and_tags.clone(),
            feature_tags: self.feature_tags.clone(),
            feature2_tags: self.feature2_tags.clone(),
            invalid_tags: self.invalid_tags.clone(),
        }
    }

    /// Stored access tokens, if both halves are present
    pub fn tokens(&self) -> Option<AccessTokens> {
        match (&self.access_token, &self.access_secret) {
            (Some(token), Some(secret)) if !token.is_empty() && !secret.is_empty() => {
                Some(AccessTokens {
                    token: token.clone(),
                    secret: secret.clone(),
                })
            }
            _ => None,
        }
    }

    pub fn set_tokens(&mut self, tokens: AccessTokens) {
        self.access_token = Some(tokens.token);
        self.access_secret = Some(tokens.secret);
    }

    pub fn clear_tokens(&mut self) {
        self.access_token = None;
        self.access_secret = None;
    }

    /// Discogs connection settings, with tokens when stored
    pub fn discogs_config(&self) -> DiscogsConfig {
        let config = DiscogsConfig::new(
            self.user_agent.clone(),
            self.consumer_key.clone(),
            self.consumer_secret.clone(),
        )
        .with_base_url(self.api_url.clone());
        match self.tokens() {
            Some(tokens) => config.with_tokens(tokens),
            None => config,
        }
    }
}

/// Resolve the settings file location
///
/// `--config` wins, then `$TUNESORT_CONFIG`, then the platform config
/// directory (`~/.config/tunesort/config.json` on Linux).
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("tunesort").join("config.json"))
        .ok_or_else(|| TuneError::config("Could not determine config directory"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load(&temp.path().join("absent.json")).unwrap();

        assert_eq!(settings.patterns(), PatternSet::default());
        assert!(settings.user_agent.starts_with("tunesort/"));
        assert!(settings.tokens().is_none());
        assert!(settings.source.is_none());
        assert_eq!(settings.discogs_config().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_api_url_reaches_discogs_config() {
        let settings = Settings {
            api_url: "http://127.0.0.1:9000".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.discogs_config().base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_load_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "consumer_key": "key",
                "consumer_secret": "secret",
                "source": "/music/incoming",
                "feature_tags": "feat\\."
            }"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings.consumer_key, "key");
        assert_eq!(settings.source, Some(PathBuf::from("/music/incoming")));
        assert_eq!(settings.patterns().feature_tags, r"feat\.");
        assert_eq!(settings.and_tags, PatternSet::default().and_tags);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Settings::load(&path), Err(TuneError::Config(_))));
    }

    #[test]
    fn test_token_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.json");

        let mut settings = Settings::default();
        settings.set_tokens(AccessTokens {
            token: "tok".to_string(),
            secret: "sec".to_string(),
        });
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.tokens().unwrap().token, "tok");

        let mut cleared = loaded;
        cleared.clear_tokens();
        cleared.save(&path).unwrap();
        assert!(Settings::load(&path).unwrap().tokens().is_none());
        assert!(!fs::read_to_string(&path).unwrap().contains("access_token"));
    }

    #[test]
    fn test_half_token_pair_is_ignored() {
        let settings = Settings {
            access_token: Some("tok".to_string()),
            ..Settings::default()
        };
        assert!(settings.tokens().is_none());
        assert!(settings.discogs_config().tokens.is_none());
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let path = resolve_config_path(Some(PathBuf::from("/tmp/custom.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }
}
