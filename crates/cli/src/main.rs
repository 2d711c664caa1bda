// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use dialpad_provision::ActionProcessor;
use dialpad_provision_batch::{BatchSummary, Settings, run_batch_files};
use dialpad_provision_directory::DialpadClient;
use dialpad_provision_notify::SmtpNotifier;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_log::AsTrace;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Dialpad Provision - applies a batch of user actions to Dialpad
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file containing the `useractions` to apply
    #[arg(short, long)]
    file: PathBuf,

    /// CSV report to write, one row per action
    #[arg(short, long)]
    out: PathBuf,

    /// JSON settings file
    #[arg(short, long, default_value = "dialpad_settings.json")]
    config: PathBuf,

    /// File that log output is appended to, in addition to stderr
    #[arg(long, default_value = "dialpad.log")]
    log_file: PathBuf,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

fn init_tracing(level: LevelFilter, log_file: &Path) -> Result<()> {
    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .wrap_err_with(|| format!("Unable to open log file {}", log_file.display()))?;

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .wrap_err("Unable to initialize logging")?;

    Ok(())
}

async fn run(args: &Args) -> Result<BatchSummary> {
    let settings: Settings = Settings::load(&args.config)?;
    info!("loaded settings from {}", args.config.display());

    let directory: DialpadClient = DialpadClient::new(&settings.api_base_url, &settings.client_key)?;
    let notifier: SmtpNotifier = SmtpNotifier::new(
        &settings.notification.mail_server,
        settings.notification.port,
    );
    let processor: ActionProcessor<DialpadClient, SmtpNotifier> =
        ActionProcessor::new(settings.processor_settings(), directory, notifier);

    let summary: BatchSummary = run_batch_files(&processor, &args.file, &args.out).await?;
    Ok(summary)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    init_tracing(args.log_level(), &args.log_file)?;

    info!("starting Dialpad provisioning run");
    match run(&args).await {
        Ok(summary) => {
            info!("run finished: {summary}");
            Ok(())
        }
        Err(err) => {
            error!("run aborted: {err:#}");
            std::process::exit(1);
        }
    }
}
