// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use email_adder::utils::logging::{format_info, format_success, format_summary};
use email_adder::{
    BatchWorker, Config, DirectoryClient, DirectoryLookup, EmailJob, LookupResult,
    ProgressSink, ProgressTracker, RunState,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "email_adder")]
#[command(version = "0.1.0")]
#[command(about = "Add directory e-mail addresses to a CSV of people", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up every row of INPUT and write the augmented CSV
    Process {
        input: PathBuf,

        /// Defaults to <input-stem>_processed.<ext> next to the input
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Look up a single display name
    Lookup {
        name: String,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct LookupOutput<'a> {
    name: &'a str,
    #[serde(flatten)]
    result: &'a LookupResult,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    email_adder::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using built-in defaults and environment",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Process { input, output } => {
            cmd_process(&config, input, output, cli.color).await?;
        }
        Commands::Lookup { name, json } => {
            cmd_lookup(&config, &name, json).await?;
        }
    }

    Ok(())
}

async fn cmd_process(
    config: &Config,
    input: PathBuf,
    output: Option<PathBuf>,
    color: bool,
) -> Result<()> {
    let job = EmailJob::new(input, output, config).context("Invalid input")?;
    let client = DirectoryClient::new(&config.directory)
        .context("Failed to create directory client")?;

    info!(
        "Processing {} -> {}",
        job.input().display(),
        job.output().display()
    );
    let output_path = job.output().to_path_buf();

    let handle = BatchWorker::start(job, Arc::new(client));

    let token = handle.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after the current row");
            token.cancel();
        }
    });

    let mut progress = handle.progress();
    let renderer = tokio::spawn(async move {
        let tracker = ProgressTracker::with_color(color);
        while progress.changed().await.is_ok() {
            let snapshot = *progress.borrow_and_update();
            tracker.on_progress(snapshot);
        }
        tracker
    });

    let result = handle.wait().await;
    let tracker = renderer.await.context("Progress renderer failed")?;

    match result {
        Ok(summary) => {
            match summary.state {
                RunState::Completed => tracker.finish(),
                _ => tracker.abandon("Stopped"),
            }

            for row in &summary.malformed {
                eprintln!("{}", format_info(&format!("Skipped {}", row)));
            }
            println!("{}", format_summary(&summary));
            println!(
                "{}",
                format_success(&format!("File written: {}", output_path.display()))
            );
            Ok(())
        }
        Err(e) => {
            tracker.abandon("Failed");
            Err(e).context("Batch failed")
        }
    }
}

async fn cmd_lookup(config: &Config, name: &str, json: bool) -> Result<()> {
    let client = DirectoryClient::new(&config.directory)
        .context("Failed to create directory client")?;

    let result = client.lookup(name).await;

    if json {
        let output = LookupOutput {
            name,
            result: &result,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize result")?
        );
    } else if result.is_found() {
        println!("{}", result);
    } else {
        println!("{}", format_info(&result.to_string()));
    }

    Ok(())
}
