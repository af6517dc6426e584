mod commands;
mod input;
mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::analyze::AnalyzeArgs;
use commands::cashflow::CashflowArgs;
use commands::compare::CompareArgs;
use commands::evaluate::EvaluateArgs;
use commands::risk_score::RiskScoreArgs;
use commands::validate::ValidateArgs;

/// Business case cashflow analysis and policy validation
#[derive(Parser)]
#[command(
    name = "bcase",
    version,
    about = "Business case cashflow analysis and policy validation",
    long_about = "Projects monthly cashflows for every option in a business case, \
                  derives ROI, payback, NPV and MIRR with decimal precision, scores \
                  risks against the organizational matrix, and checks the case \
                  against organizational policy."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze every option and populate `_calc`
    Analyze(AnalyzeArgs),
    /// Run the policy checks on the analyzed case
    Validate(ValidateArgs),
    /// Analyze and validate in one pass, with methodology and caveats
    Evaluate(EvaluateArgs),
    /// Monthly cashflow projection for one option
    Cashflow(CashflowArgs),
    /// One formatted row of headline metrics per option
    Compare(CompareArgs),
    /// Score a probability/impact pair against the risk matrix
    RiskScore(RiskScoreArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Analyze(args) => commands::analyze::run_analyze(args),
        Commands::Validate(args) => commands::validate::run_validate(args),
        Commands::Evaluate(args) => commands::evaluate::run_evaluate(args),
        Commands::Cashflow(args) => commands::cashflow::run_cashflow(args),
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::RiskScore(args) => commands::risk_score::run_risk_score(args),
        Commands::Version => {
            println!("bcase {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
