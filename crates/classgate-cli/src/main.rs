use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "classgate")]
#[command(about = "Classgate - review class schedules and record approval decisions", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/classgate/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
pub struct Target {
    /// JSON fixture holding the class snapshots
    #[arg(short, long)]
    fixture: PathBuf,

    /// Class to operate on
    #[arg(short, long = "class")]
    class_id: String,
}

#[derive(Args)]
pub struct WriteBack {
    /// Write the updated snapshot back to the fixture file
    #[arg(long)]
    write: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show readiness, teachers, resources and weeks for a class
    Summary {
        #[command(flatten)]
        target: Target,
        /// Print the review as JSON
        #[arg(long)]
        json: bool,
    },
    /// Approve a pending class
    Approve {
        #[command(flatten)]
        target: Target,
        #[command(flatten)]
        write: WriteBack,
    },
    /// Reject a pending class
    Reject {
        #[command(flatten)]
        target: Target,
        /// Why the schedule is rejected
        #[arg(short, long)]
        reason: String,
        #[command(flatten)]
        write: WriteBack,
    },
    /// Put a rejected class back into review
    Resubmit {
        #[command(flatten)]
        target: Target,
        #[command(flatten)]
        write: WriteBack,
    },
}

/// `RUST_LOG` wins when set and valid; otherwise `info`, or `debug` with `--verbose`.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Summary { target, json } => commands::summary::run(&target, config, json).await?,
        Commands::Approve { target, write } => {
            commands::decide::approve(&target, config, write.write).await?
        }
        Commands::Reject {
            target,
            reason,
            write,
        } => commands::decide::reject(&target, config, &reason, write.write).await?,
        Commands::Resubmit { target, write } => {
            commands::decide::resubmit(&target, config, write.write).await?
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_rust_log_overrides_default_level() {
        let filter = log_filter(Some("warn"), false);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let filter = log_filter(Some("error"), true);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_default_level_without_rust_log() {
        assert_eq!(log_filter(None, false).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(None, true).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("  "), false).max_level_hint(), Some(LevelFilter::INFO));
    }
}
