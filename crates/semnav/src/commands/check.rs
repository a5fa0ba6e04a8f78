//! `semnav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use semnav_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover semnav.toml).
    #[arg(short, long, env = "SEMNAV_CONFIG")]
    config: Option<PathBuf>,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        match &config.config_path {
            Some(path) => output.highlight(&format!("Config: {}", path.display())),
            None => output.highlight("Config: defaults (no semnav.toml found)"),
        }

        let registry = config.registry()?;
        for name in registry.names() {
            let count = registry.get(name)?.iter().count();
            output.info(&format!("  {name}: {count} items"));
        }

        output.success(&format!("{} navigation(s) OK", registry.len()));
        Ok(())
    }
}
