use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use passbook_finance::{BatchSummary, RecordEmitter};
use passbook_ingest::{check_input, parse_statement_text, require_transactions};
use std::path::PathBuf;
use tracing::debug;

mod config;
mod output;
mod state;

use config::Config;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "passbook", version, about = "Extract transactions from pasted bank statement text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse statement text (file or stdin) into transactions
    Parse {
        /// Text file to read (defaults to stdin)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format (defaults to the config value)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Account label used in record ids
        #[arg(long)]
        account: Option<String>,
    },

    /// Parse statement text and print totals by category
    Summary {
        /// Text file to read (defaults to stdin)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Manage ~/.passbook/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    setup_logging(&cfg);

    match cli.command {
        Command::Parse {
            file,
            format,
            account,
        } => {
            let format = format.unwrap_or(cfg.output.format);
            let account = account.unwrap_or_else(|| cfg.output.account.clone());
            parse(&cfg, file, format, &account)?;
        }

        Command::Summary { file } => {
            summary(&cfg, file)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

/// Install the stderr subscriber. PASSBOOK_LOG wins over the config level.
fn setup_logging(cfg: &Config) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_env("PASSBOOK_LOG")
        .or_else(|_| EnvFilter::try_new(&cfg.log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!(level = %cfg.log.level, "logging initialized");
}

/// Read, pre-check and parse. A batch with nothing in it is an error here.
fn load_batch(cfg: &Config, file: Option<PathBuf>) -> Result<(String, passbook_core::ParseBatch)> {
    let text = state::read_statement(file.as_deref())?;
    check_input(&text, &cfg.parse.limits())?;

    let batch = require_transactions(parse_statement_text(&text)).with_context(|| match &file {
        Some(p) => format!("parsing {}", p.display()),
        None => "parsing stdin".to_string(),
    })?;
    Ok((text, batch))
}

fn parse(cfg: &Config, file: Option<PathBuf>, format: OutputFormat, account: &str) -> Result<()> {
    let (text, batch) = load_batch(cfg, file)?;
    let records = RecordEmitter::to_records(&batch, &text, account);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::print_records(&mut out, &batch, &records, format)
}

fn summary(cfg: &Config, file: Option<PathBuf>) -> Result<()> {
    let (_, batch) = load_batch(cfg, file)?;
    let summary = BatchSummary::from_batch(&batch);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::print_summary(&mut out, &summary)
}
