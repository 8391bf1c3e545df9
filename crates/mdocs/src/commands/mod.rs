//! CLI command implementations.

pub(crate) mod pages;
pub(crate) mod tree;

use std::path::PathBuf;

use clap::Args;
use mdocs_config::{CliSettings, Config};
use mdocs_tree::{PageTree, Scanner};

use crate::error::CliError;

pub(crate) use pages::PagesArgs;
pub(crate) use tree::TreeArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover mdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content root directory (overrides config).
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Load configuration with `settings` plus the shared root override.
    pub(crate) fn load_config(&self, mut settings: CliSettings) -> Result<Config, CliError> {
        settings.root.clone_from(&self.root);
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }
}

/// Scan the configured content root.
pub(crate) fn scan(config: &Config) -> Result<PageTree, CliError> {
    let content = &config.content_resolved;
    tracing::info!(root = %content.root.display(), "Scanning content root");
    let tree = Scanner::new(&content.root)
        .exclude(&content.exclude)?
        .extensions(content.extensions.iter().cloned())
        .prune_empty(content.prune_empty)
        .scan()?;
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_scan_applies_content_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let content = temp_dir.path().join("content");
        fs::create_dir_all(content.join("drafts")).unwrap();
        fs::write(content.join("drafts/wip.md"), "# WIP").unwrap();
        fs::create_dir(content.join("images")).unwrap();
        fs::write(content.join("images/logo.png"), "png").unwrap();
        fs::write(content.join("index.md"), "# Home").unwrap();
        let config_path = temp_dir.path().join("mdocs.toml");
        fs::write(
            &config_path,
            "[content]\nroot = \"content\"\nexclude = [\"drafts/**\"]\nextensions = [\"md\"]\nprune_empty = true\n",
        )
        .unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        let tree = scan(&config).unwrap();

        assert_eq!(tree.len(), 2);
        assert!(tree.find("index.md").is_some());
        assert!(tree.find("drafts").is_none());
        assert!(tree.find("images").is_none());
    }

    #[test]
    fn test_scan_missing_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("mdocs.toml");
        fs::write(&config_path, "[content]\nroot = \"missing\"\n").unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        let result = scan(&config);

        assert!(matches!(
            result,
            Err(CliError::Tree(mdocs_tree::TreeError::RootNotFound(_)))
        ));
    }
}
