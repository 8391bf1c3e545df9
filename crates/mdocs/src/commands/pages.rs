//! `mdocs pages` command implementation.

use clap::Args;
use mdocs_config::CliSettings;
use mdocs_tree::{Page, PageTree};

use super::{CommonArgs, scan};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pages command.
#[derive(Args)]
pub(crate) struct PagesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl PagesArgs {
    /// Execute the pages command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the content root cannot be scanned.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.common.load_config(CliSettings::default())?;
        let tree = scan(&config)?;
        for line in page_lines(&tree) {
            output.line(&line)?;
        }
        Ok(())
    }
}

/// One `local -> destination` line per file page, in tree order.
fn page_lines(tree: &PageTree) -> Vec<String> {
    tree.find_all(Page::is_file)
        .into_iter()
        .map(|id| format!("{} -> {}", tree.local_path(id), tree.destination(id)))
        .collect()
}
