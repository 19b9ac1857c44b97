use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::PathBuf;

use embedkit::settings::AppSettings;
use embedkit_export::Registry;
use embedkit_types::theme::ThemeTokens;
use embedkit_types::widget_configs::{WidgetConfig, WidgetKind};

/// embedkit - configure embeddable widgets and export them as HTML
#[derive(Parser, Debug)]
#[command(name = "embedkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available widget types
    List,
    /// Print the editing schema for a widget as JSON
    Schema {
        /// Widget id (e.g. clock, countdown, button)
        widget: String,
    },
    /// Print the default configuration for a widget as JSON
    Defaults {
        /// Widget id (e.g. clock, countdown, button)
        widget: String,
    },
    /// Export a widget as a self-contained HTML document
    Export {
        /// Widget id (e.g. clock, countdown, button)
        widget: String,

        /// Configuration file (JSON); defaults are used when omitted
        #[arg(short = 'c', long = "config", value_name = "FILE")]
        config: Option<PathBuf>,

        /// Name of a configuration saved in the settings file
        #[arg(short = 's', long = "saved", value_name = "NAME", conflicts_with = "config")]
        saved: Option<String>,

        /// Output file; stdout when omitted
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logger verbosity follows -d/--debug; RUST_LOG still overrides.
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let registry = Registry::with_builtins();

    match cli.command {
        Command::List => {
            for kind in registry.list() {
                let schema = kind.schema();
                println!("{:<14} {}", kind.as_str(), schema.description);
            }
            Ok(())
        }
        Command::Schema { widget } => {
            let kind = registry.kind_for_id(&widget)?;
            let schema = kind.schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
        Command::Defaults { widget } => {
            let kind = registry.kind_for_id(&widget)?;
            let config = WidgetConfig::default_for(kind);
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Command::Export {
            widget,
            config,
            saved,
            output,
        } => {
            let kind = registry.kind_for_id(&widget)?;
            let config = load_config(kind, config.as_deref(), saved.as_deref())?;
            let html = registry.render(&config, &ThemeTokens::jazer_neon())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!("wrote {}", path.display());
                }
                None => print!("{}", html),
            }
            Ok(())
        }
    }
}

/// Resolve the configuration for an export: an explicit file, a saved
/// entry, or the widget's defaults, in that order.
fn load_config(
    kind: WidgetKind,
    config_path: Option<&std::path::Path>,
    saved_name: Option<&str>,
) -> Result<WidgetConfig> {
    let config = if let Some(path) = config_path {
        AppSettings::load_config_from_path(path)
            .with_context(|| format!("reading config {}", path.display()))?
    } else if let Some(name) = saved_name {
        let settings = AppSettings::load()?;
        match settings.saved.get(name) {
            Some(config) => config.clone(),
            None => bail!("no saved configuration named {:?}", name),
        }
    } else {
        WidgetConfig::default_for(kind)
    };

    if config.kind() != kind {
        warn!(
            "config is for {:?}, exporting that instead of {:?}",
            config.kind().as_str(),
            kind.as_str()
        );
    }
    Ok(config)
}
