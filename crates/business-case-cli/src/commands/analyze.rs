use clap::Args;
use serde_json::Value;

use business_case_core::analysis::{self, AnalysisOptions};

use super::{load_case, CaseArgs};

/// Arguments for option analysis
#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub case: CaseArgs,

    /// Attach each option's monthly cashflow series to `_calc`
    #[arg(long)]
    pub include_series: bool,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let case = load_case(&args.case)?;
    let opts = AnalysisOptions {
        include_monthly_series: args.include_series,
    };
    let analyzed = analysis::analyze_business_case_with(&case, &opts)?;
    Ok(serde_json::to_value(analyzed)?)
}
