//! Prints the next QTC block of an ADIF log and advances its cursor.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qtclog::{
    runtime::{open_store, run_batch, BatchConfig, BatchReport, StoreBackend},
    types::DEFAULT_BATCH_SIZE,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendArg {
    File,
    Sqlite,
}

impl From<BackendArg> for StoreBackend {
    fn from(value: BackendArg) -> Self {
        match value {
            BackendArg::File => StoreBackend::File,
            BackendArg::Sqlite => StoreBackend::Sqlite,
        }
    }
}

#[derive(Parser)]
#[command(name = "qtc-batch", version, about = "Split an ADIF log into numbered QTC blocks")]
struct Cli {
    /// Path to the ADIF file
    #[arg(short, long)]
    file: PathBuf,

    /// Number of QSOs per batch
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch: usize,

    /// Directory holding cursor state (defaults to the system temp dir)
    #[arg(long, env = "QTCLOG_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Cursor store backend
    #[arg(long, value_enum, default_value_t = BackendArg::File)]
    store: BackendArg,

    /// Show the next batch without advancing the cursor
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qtclog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = BatchConfig::new(cli.file);
    config.batch_size = cli.batch;
    config.backend = cli.store.into();
    config.dry_run = cli.dry_run;
    if let Some(dir) = cli.state_dir {
        config.state_dir = dir;
    }

    let result = open_store(&config).and_then(|mut store| run_batch(&config, &mut store));
    match result {
        Ok(BatchReport::Sent { block, .. }) => {
            println!("{}", block.render());
            ExitCode::SUCCESS
        }
        Ok(BatchReport::Incomplete { .. }) => {
            println!("Warning: Not enough QSOs remaining for a full batch.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
