pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use farescan_core::DuplicateDatePolicy;

#[derive(Debug, Parser)]
#[command(
    name = "farescan",
    about = "Fare aggregation engine CLI",
    long_about = "Run the fare aggregation engine over captured payload JSON files: per-day \
                  summaries, chronological price series, tariff tables, and ranked anywhere \
                  destinations.",
    after_help = "Examples:\n  farescan summary --payload search.json\n  farescan series --payload search.json --duplicates average\n  farescan tariffs --payload search.json --chain 44684148-44684149\n  farescan anywhere --payload anywhere.json --max-price 5000"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Per-day cheapest-fare summaries plus the whole-window aggregate")]
    Summary {
        #[arg(long, help = "Captured route search payload (JSON file)")]
        payload: PathBuf,
    },
    #[command(about = "Date-sorted price series with min/max/mean statistics")]
    Series {
        #[arg(long, help = "Captured route search payload (JSON file)")]
        payload: PathBuf,
        #[arg(long, value_enum, default_value = "last-write-wins",
              help = "How to resolve day records sharing a calendar date")]
        duplicates: DuplicatesArg,
    },
    #[command(about = "Ranked tariff table for one fare chain")]
    Tariffs {
        #[arg(long, help = "Captured route search payload (JSON file)")]
        payload: PathBuf,
        #[arg(long, help = "Fare chain identifier, e.g. 44684148-44684149")]
        chain: String,
    },
    #[command(about = "Ranked destination list for an anywhere-search payload")]
    Anywhere {
        #[arg(long, help = "Captured anywhere-search payload (JSON file)")]
        payload: PathBuf,
        #[arg(long, help = "Drop destinations whose cheapest fare exceeds this amount")]
        max_price: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DuplicatesArg {
    LastWriteWins,
    Average,
    Reject,
}

impl From<DuplicatesArg> for DuplicateDatePolicy {
    fn from(arg: DuplicatesArg) -> Self {
        match arg {
            DuplicatesArg::LastWriteWins => Self::LastWriteWins,
            DuplicatesArg::Average => Self::Average,
            DuplicatesArg::Reject => Self::Reject,
        }
    }
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Summary { payload } => commands::summary::run(&payload),
        Command::Series { payload, duplicates } => {
            commands::series::run(&payload, duplicates.into())
        }
        Command::Tariffs { payload, chain } => commands::tariffs::run(&payload, &chain),
        Command::Anywhere { payload, max_price } => {
            commands::anywhere::run(&payload, max_price.as_deref())
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
