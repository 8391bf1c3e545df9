//! Configuration management for mdocs.
//!
//! Parses `mdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `content.root` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content root directory.
    pub root: Option<PathBuf>,
    /// Override source display flag.
    pub show_source: Option<bool>,
    /// Override colored output flag.
    pub color: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdocs.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content configuration (root is a relative string from TOML).
    content: ContentConfigRaw,
    /// Rendering configuration.
    pub render: RenderConfig,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw content configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    root: Option<String>,
    exclude: Vec<String>,
    extensions: Vec<String>,
    prune_empty: bool,
}

/// Resolved content configuration with an absolute root.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Content root directory.
    pub root: PathBuf,
    /// Glob patterns of root-relative paths to skip.
    pub exclude: Vec<String>,
    /// File extensions to keep (empty keeps all).
    pub extensions: Vec<String>,
    /// Whether to drop directories without files.
    pub prune_empty: bool,
}

/// Tree rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Show each node's source path.
    pub show_source: bool,
    /// Color node labels by kind.
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_source: false,
            color: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`content.root`").
        field: String,
        /// Error message (e.g., "${`DOCS_ROOT`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(root) = &settings.root {
            self.content_resolved.root.clone_from(root);
        }
        if let Some(show_source) = settings.show_source {
            self.render.show_source = show_source;
        }
        if let Some(color) = settings.color {
            self.render.color = color;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            content: ContentConfigRaw::default(),
            render: RenderConfig::default(),
            content_resolved: ContentConfig {
                root: base.join("docs"),
                ..ContentConfig::default()
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the content root is empty or an
    /// exclude pattern is not a valid glob.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.root.as_deref() == Some("") {
            return Err(ConfigError::Validation(
                "content.root cannot be empty".to_owned(),
            ));
        }
        for pattern in &self.content_resolved.exclude {
            glob::Pattern::new(pattern).map_err(|e| {
                ConfigError::Validation(format!(
                    "content.exclude pattern {pattern:?} is invalid: {e}"
                ))
            })?;
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref root) = self.content.root {
            self.content.root = Some(expand::expand_env(root, "content.root")?);
        }
        Ok(())
    }

    /// Resolve the content root against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let raw = &self.content;
        self.content_resolved = ContentConfig {
            root: config_dir.join(raw.root.as_deref().unwrap_or("docs")),
            exclude: raw.exclude.clone(),
            extensions: raw.extensions.clone(),
            prune_empty: raw.prune_empty,
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.content_resolved.root, PathBuf::from("/test/docs"));
        assert!(config.content_resolved.exclude.is_empty());
        assert!(config.content_resolved.extensions.is_empty());
        assert!(!config.content_resolved.prune_empty);
        assert!(!config.render.show_source);
        assert!(config.render.color);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.content.root.is_none());
        assert!(config.render.color);
    }

    #[test]
    fn test_parse_and_resolve_content() {
        let toml = r#"
[content]
root = "doc/content"
exclude = ["drafts/**", "*.tmp"]
extensions = ["md"]
prune_empty = true

[render]
show_source = true
color = false
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.content_resolved.root,
            PathBuf::from("/project/doc/content")
        );
        assert_eq!(
            config.content_resolved.exclude,
            vec!["drafts/**".to_owned(), "*.tmp".to_owned()]
        );
        assert_eq!(config.content_resolved.extensions, vec!["md".to_owned()]);
        assert!(config.content_resolved.prune_empty);
        assert!(config.render.show_source);
        assert!(!config.render.color);
    }

    #[test]
    fn test_absolute_root_kept() {
        let mut config: Config = toml::from_str("[content]\nroot = \"/srv/docs\"\n").unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(config.content_resolved.root, PathBuf::from("/srv/docs"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            root: Some(PathBuf::from("/custom/docs")),
            show_source: Some(true),
            color: None,
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.content_resolved.root, PathBuf::from("/custom/docs"));
        assert!(config.render.show_source);
        assert!(config.render.color); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.content_resolved.root, PathBuf::from("/test/docs"));
        assert!(!config.render.show_source);
    }

    #[test]
    fn test_validate_empty_root() {
        let config: Config = toml::from_str("[content]\nroot = \"\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("content.root"));
    }

    #[test]
    fn test_validate_invalid_pattern() {
        let mut config: Config =
            toml::from_str("[content]\nexclude = [\"[unclosed\"]\n").unwrap();
        config.resolve_paths(Path::new("/project"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[unclosed"));
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default_with_base(Path::new("/test")).validate().is_ok());
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/mdocs.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[content]\nroot = \"content\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.content_resolved.root, temp_dir.path().join("content"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_from_file_expands_env() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("MDOCS_TEST_LOAD_ROOT", "expanded");
        }
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[content]\nroot = \"${MDOCS_TEST_LOAD_ROOT}/docs\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(
            config.content_resolved.root,
            temp_dir.path().join("expanded/docs")
        );
        unsafe {
            std::env::remove_var("MDOCS_TEST_LOAD_ROOT");
        }
    }

    #[test]
    fn test_load_parse_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[content\nroot = 1").unwrap();

        let result = Config::load(Some(&path), None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
