use anyhow::Context;
use clap::{Parser, Subcommand};
use prism::commands;
use prism::config::{self, AppConfig};
use prism::logger::setup_logger;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "prism", version, about = "Resolve design-token themes into stylesheets")]
struct Cli {
    /// Configuration file (defaults to ./prism.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory of <id>.json / <id>.toml theme records
    #[arg(long, global = true)]
    themes_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the themes found in the themes directory
    List,
    /// Validate a theme record and report every repaired field
    Check { record: PathBuf },
    /// Render a theme as a stylesheet
    Apply {
        /// Theme id; the configured default when omitted
        id: Option<String>,
        /// Partial record merged over the theme
        #[arg(long = "override")]
        overrides: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Render the emergency fallback stylesheet
    Emergency {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn build_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = config::load_config(cli.config.as_deref()).into_result()?;
    if let Some(dir) = &cli.themes_dir {
        config = config.with_themes_dir(dir.clone());
    }
    if let Some(level) = &cli.log_level {
        config = config.with_log_level(level);
    }
    Ok(config.into_validated()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    setup_logger(config.logging()).context("Failed to initialize logger")?;

    match &cli.command {
        Command::List => {
            for theme in commands::list_themes(&config).await? {
                let marker = if theme.is_default { "*" } else { " " };
                println!("{marker} {:<24} {} (v{})", theme.id, theme.name, theme.version);
            }
        }
        Command::Check { record } => {
            let outcome = commands::check_record(record).await?;
            if outcome.report.is_clean() {
                println!("'{}' is valid", outcome.theme.id);
            } else {
                for repair in outcome.report.repairs() {
                    println!("{}: {}", repair.path, repair.kind);
                }
                anyhow::bail!(
                    "'{}' needed {} repaired field(s)",
                    record.display(),
                    outcome.report.len()
                );
            }
        }
        Command::Apply {
            id,
            overrides,
            output,
        } => {
            let outcome =
                commands::apply_theme(&config, id.as_deref(), overrides.as_deref()).await?;
            log::info!("Rendered '{}' using the {}", outcome.theme_id, outcome.tier);
            let target = output.as_deref().or(config.output());
            commands::write_output(target, &outcome.stylesheet).await?;
        }
        Command::Emergency { output } => {
            let outcome = commands::emergency_stylesheet();
            let target = output.as_deref().or(config.output());
            commands::write_output(target, &outcome.stylesheet).await?;
        }
    }

    Ok(())
}
