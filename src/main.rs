use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use renaming_rules_sync::client::ProKnowClient;
use renaming_rules_sync::io::credentials::Credentials;
use renaming_rules_sync::io::excel_read;
use renaming_rules_sync::prompt::{AutoConfirm, Confirm, PromptConfirm};
use renaming_rules_sync::report::Console;
use renaming_rules_sync::sync;
use renaming_rules_sync::{Result, SyncError};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let console = Console::new();

    let outcome = init_logging(cli.verbose).and_then(|()| run(cli, &console));
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            console.failure(&error);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("renaming_rules_sync=debug")
        } else {
            EnvFilter::new("renaming_rules_sync=info")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init()
        .map_err(|error| SyncError::Logging(error.to_string()))
}

fn run(cli: Cli, console: &Console) -> Result<()> {
    if !cli.file.exists() {
        return Err(SyncError::MissingInput(cli.file));
    }
    let credentials = Credentials::load(&cli.credentials)?;
    let client = ProKnowClient::new(&cli.url, credentials)?;

    console.section("Parsing Rules from Workbook...");
    let desired = excel_read::read_rules(&cli.file)?;

    console.section("Querying Rules from ProKnow...");
    let reconciliation = sync::plan(&desired, &client)?;

    console.section("Synchronizing Renaming Rules...");
    let changes = reconciliation.summary();
    if changes.has_changes() {
        console.changes(&changes);
    }
    let mut confirm: Box<dyn Confirm> = if cli.yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(PromptConfirm::stdio())
    };
    let report = sync::apply(reconciliation, &client, confirm.as_mut())?;

    if report.submitted {
        console.success("Renaming rules successfully synchronized");
    } else {
        console.success("All rules exist and are up to date");
    }

    console.unknown_rules(&report.unknown);
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Synchronize ProKnow renaming rules from an Excel workbook."
)]
struct Cli {
    /// Base URL to use when making requests to the ProKnow API.
    #[arg(short, long, env = "PROKNOW_URL")]
    url: String,

    /// Path to the ProKnow API credentials file.
    #[arg(short, long, env = "PROKNOW_CREDENTIALS")]
    credentials: PathBuf,

    /// Path to the Excel workbook containing the desired renaming rules.
    file: PathBuf,

    /// Submit changes without asking for confirmation.
    #[arg(short, long)]
    yes: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}
