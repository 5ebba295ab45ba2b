//! Appends a received QTC block to a Cabrillo log as `QTC:` lines.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qtclog::{
    qtc::MatchPolicy,
    runtime::{run_cabrillo, CabrilloConfig},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    First,
    Second,
    All,
}

impl From<PolicyArg> for MatchPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::First => MatchPolicy::FirstMatch,
            PolicyArg::Second => MatchPolicy::SecondMatch,
            PolicyArg::All => MatchPolicy::AllMatches,
        }
    }
}

#[derive(Parser)]
#[command(name = "qtc-cabrillo", version, about = "Process QTC file and format output")]
struct Cli {
    /// Input file to read from
    #[arg(short = 'f', long = "file")]
    input: PathBuf,

    /// Output file to append to
    #[arg(short, long)]
    output: PathBuf,

    /// Receiver callsign
    #[arg(short, long)]
    receiver: String,

    /// Sender callsign
    #[arg(short, long)]
    sender: String,

    /// Which match to keep when a line holds several QTC entries
    #[arg(long, value_enum, default_value_t = PolicyArg::Second)]
    policy: PolicyArg,
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
    let config = CabrilloConfig {
        input: cli.input,
        output: cli.output,
        sender: cli.sender,
        receiver: cli.receiver,
        policy: cli.policy.into(),
    };

    match run_cabrillo(&config) {
        Ok(report) => {
            for line in &report.lines {
                println!("{line}");
            }
            if report.is_short() {
                eprintln!(
                    "Warning: header declares {} QTC lines, wrote {} ({} skipped)",
                    report.expected,
                    report.written(),
                    report.skipped.len()
                );
            }
            println!("Output successfully written.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
