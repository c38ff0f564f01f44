use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;

use msp_theme::{config, export, logging, preview, ExportFormat, Theme};

/// Inspect and export the MSP painter theme
#[derive(Parser, Debug)]
#[command(name = "msp-theme", version)]
#[command(about = "Inspect and export the MSP painter theme", long_about = None)]
struct Args {
    /// Enable debug logging (MSP_THEME_LOG overrides this)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a colored preview of every token (default)
    Show {
        /// Width of the preview box in terminal cells
        #[arg(long)]
        width: Option<u16>,
    },
    /// Write the theme as TOML, JSON or a QML module
    Export {
        /// toml, json or qml
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Write to this file instead of stdout (`-` forces stdout)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Print every token as `table.key = value`
    List,
    /// Print a single token, e.g. `colors.background`
    Get {
        #[arg(value_name = "TABLE.KEY")]
        path: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(args.verbose);

    // Load configuration
    let config = config::load_config()?;
    let theme = Theme::current();

    match args.command.unwrap_or(Command::Show { width: None }) {
        Command::Show { width } => {
            let width = width.unwrap_or_else(|| config.preview_width());
            preview::print(theme, width)?;
        }
        Command::Export { format, output } => {
            let format = format.unwrap_or_else(|| config.export_format());
            match output.or(config.export.output) {
                Some(path) if !config::is_stdout(&path) => export::write_to(&path, theme, format)?,
                _ => print!("{}", export::render(theme, format)?),
            }
        }
        Command::List => {
            for (path, value) in theme.tokens() {
                println!("{path} = {value}");
            }
        }
        Command::Get { path } => {
            tracing::debug!(%path, "looking up token");
            println!("{}", theme.lookup(&path)?);
        }
    }

    Ok(())
}
