//! `semnav tree` command implementation.

use std::path::PathBuf;

use clap::Args;
use semnav_config::Config;
use semnav_tree::{CurrentPath, Navigation};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Navigation name.
    name: String,

    /// Mark the active trail for this page path.
    #[arg(short = 'p', long)]
    current: Option<String>,

    /// Print the tree as JSON.
    #[arg(long)]
    json: bool,

    /// Path to configuration file (default: auto-discover semnav.toml).
    #[arg(short, long, env = "SEMNAV_CONFIG")]
    config: Option<PathBuf>,
}

impl TreeArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let registry = config.registry()?;

        let navigation = match &self.current {
            Some(current) => registry.navigation_for(&self.name, &CurrentPath::new(current))?,
            None => registry.get(&self.name)?.clone(),
        };

        let text = if self.json {
            serde_json::to_string_pretty(&navigation)?
        } else {
            format_tree(&navigation)
        };
        output.result(&text)?;
        Ok(())
    }
}

/// Indented outline, one item per line; active items are starred.
fn format_tree(navigation: &Navigation) -> String {
    let mut lines = vec![navigation.name().to_owned()];
    for node in navigation.iter() {
        let item = node.item();
        let marker = if item.active { "*" } else { "-" };
        lines.push(format!(
            "{}{marker} {} [{}] -> {}",
            "  ".repeat(item.level),
            item.label,
            item.id,
            item.target
        ));
    }
    lines.join("\n")
}
