use clap::Args;
use serde_json::Value;

use business_case_core::analysis;
use business_case_core::summary;

use super::{load_case, CaseArgs};

/// Arguments for the side-by-side option comparison
#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub case: CaseArgs,

    /// List every computed figure instead of the headline metrics
    #[arg(long)]
    pub detail: bool,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let case = load_case(&args.case)?;
    let analyzed = analysis::analyze_business_case(&case)?;
    let rows = summary::option_summaries(&analyzed, args.detail)?;
    Ok(serde_json::to_value(rows)?)
}
