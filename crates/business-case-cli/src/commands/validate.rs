use clap::Args;
use serde_json::Value;

use business_case_core::validation;

use super::{load_case, CaseArgs};

/// Arguments for policy validation. Structurally broken cases (baseline
/// count, too few options) are reported as findings, not failures.
#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub case: CaseArgs,
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let case = load_case(&args.case)?;
    let result = validation::analyze_and_validate(&case)?;
    Ok(serde_json::to_value(result)?)
}
