use clap::Args;
use serde_json::Value;

use business_case_core::analysis::AnalysisOptions;
use business_case_core::pipeline;

use super::{load_case, CaseArgs};

/// Arguments for the full analyze-then-validate pipeline
#[derive(Args)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub case: CaseArgs,

    /// Attach each option's monthly cashflow series to `_calc`
    #[arg(long)]
    pub include_series: bool,
}

pub fn run_evaluate(args: EvaluateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let case = load_case(&args.case)?;
    let opts = AnalysisOptions {
        include_monthly_series: args.include_series,
    };
    let output = pipeline::evaluate_business_case(&case, &opts)?;
    Ok(serde_json::to_value(output)?)
}
