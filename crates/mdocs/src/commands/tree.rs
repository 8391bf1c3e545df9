//! `mdocs tree` command implementation.

use clap::Args;
use mdocs_config::{CliSettings, Config};
use mdocs_tree::{PageTree, RenderOptions, Styler, render_text};

use super::{CommonArgs, scan};
use crate::error::CliError;
use crate::output::{Output, paint};

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Show each node's source path.
    #[arg(long)]
    source: bool,

    /// Print the tree as JSON.
    #[arg(long)]
    json: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the content root cannot be
    /// scanned, or stdout cannot be written.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.common.load_config(self.settings())?;
        let tree = scan(&config)?;
        output.line(&self.render(&tree, &config)?)?;
        Ok(())
    }

    /// Config overrides for the flags that were given; absent flags keep
    /// the configured value.
    fn settings(&self) -> CliSettings {
        CliSettings {
            show_source: self.source.then_some(true),
            color: self.no_color.then_some(false),
            ..CliSettings::default()
        }
    }

    fn render(&self, tree: &PageTree, config: &Config) -> Result<String, CliError> {
        if self.json {
            return Ok(serde_json::to_string_pretty(&tree.to_items())?);
        }

        let styler: Styler<'_> = &paint;
        let options = RenderOptions {
            show_source: config.render.show_source,
            styler: config.render.color.then_some(styler),
        };
        let text = render_text(tree, &options);
        Ok(text.trim_end_matches('\n').to_owned())
    }
}
