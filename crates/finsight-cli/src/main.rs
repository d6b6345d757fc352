mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "finsight",
    version,
    about = "Financial statement analysis: ratios, health scores, anomalies, insights"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a raw extraction bundle into a canonical statement (without analyzing)
    Normalize {
        /// Path to a JSON bundle produced by upstream document extraction
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the normalized statement to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Run the full analysis pipeline on a raw extraction bundle
    Analyze {
        /// Path to a JSON bundle produced by upstream document extraction
        input_file: PathBuf,

        /// Predefined benchmark profile: general, manufacturing, retail, technology
        #[arg(short, long, default_value = "general")]
        profile: String,

        /// Custom benchmark profile JSON file (overrides --profile)
        #[arg(short, long = "benchmarks", value_name = "FILE")]
        benchmarks: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show all ratios with benchmark interpretations, not just findings
        #[arg(long)]
        show_all: bool,

        /// Show insight impact notes and the normalized statement
        #[arg(long)]
        verbose: bool,
    },
    /// Manage and inspect benchmark profiles
    Benchmarks {
        #[command(subcommand)]
        action: BenchmarksAction,
    },
}

#[derive(Subcommand)]
enum BenchmarksAction {
    /// List predefined benchmark profiles
    List,
    /// Explain a benchmark profile in plain language
    Explain {
        /// Preset name (e.g., "general")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom benchmark profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Normalize {
            input_file,
            output,
            out,
        } => commands::normalize::run(input_file, &output, out),
        Commands::Analyze {
            input_file,
            profile,
            benchmarks,
            output,
            show_all,
            verbose,
        } => commands::analyze::run(input_file, &profile, benchmarks, &output, show_all, verbose),
        Commands::Benchmarks { action } => match action {
            BenchmarksAction::List => commands::benchmarks::list(),
            BenchmarksAction::Explain { preset } => commands::benchmarks::explain(&preset),
            BenchmarksAction::Schema => commands::benchmarks::schema(),
            BenchmarksAction::Validate { file } => commands::benchmarks::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
