//! `semnav render` command implementation.

use std::path::PathBuf;

use clap::Args;
use semnav_config::{CliSettings, Config};
use semnav_render::{LevelRange, RenderOptions, Style, render};
use semnav_tree::CurrentPath;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Navigation name.
    name: String,

    /// Path of the current page, used to mark the active trail.
    #[arg(short = 'p', long)]
    current: String,

    /// Rendering style: breadcrumb or list (overrides config).
    #[arg(long = "as", value_name = "STYLE")]
    style: Option<Style>,

    /// Render only this level.
    #[arg(long)]
    level: Option<usize>,

    /// Render this inclusive range of levels, e.g. 0..1.
    #[arg(long)]
    levels: Option<LevelRange>,

    /// Skip levels above this one.
    #[arg(long)]
    from_level: Option<usize>,

    /// Stop rendering below this level.
    #[arg(long)]
    until_level: Option<usize>,

    /// Leave out the subtree of this item (repeatable).
    #[arg(long = "except-for", value_name = "ID")]
    except_for: Vec<String>,

    /// Render the last breadcrumb item as a link.
    #[arg(long)]
    last_as_link: bool,

    /// Class of the outer list (overrides config).
    #[arg(long)]
    list_class: Option<String>,

    /// Prefix for relative link targets (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Path to configuration file (default: auto-discover semnav.toml).
    #[arg(short, long, env = "SEMNAV_CONFIG")]
    config: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            style: self.style,
            list_class: self.list_class.clone(),
            base_url: self.base_url.clone(),
            last_as_link: self.last_as_link.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let registry = config.registry()?;

        let navigation = registry.navigation_for(&self.name, &CurrentPath::new(&self.current))?;
        let options = self.options(config.render.options.clone());
        tracing::info!(
            navigation = %self.name,
            current = %self.current,
            style = ?config.render.style,
            "Rendering"
        );

        let html = render(
            &navigation,
            config.render.style,
            &config.markup.html(),
            &options,
        );
        output.result(&html)?;
        Ok(())
    }

    /// Merge command-line level options into the configured defaults.
    fn options(&self, mut options: RenderOptions) -> RenderOptions {
        if let Some(level) = self.level {
            options.level = Some(level);
        }
        if let Some(levels) = self.levels {
            options.levels = Some(levels);
        }
        if let Some(from_level) = self.from_level {
            options.from_level = from_level;
        }
        if let Some(until_level) = self.until_level {
            options.until_level = Some(until_level);
        }
        options.except_for.extend(self.except_for.iter().cloned());
        options
    }
}
