use clap::Args;
use serde_json::{json, Value};

use business_case_core::model::RiskLevel5;
use business_case_core::risk::{compute_risk_score, RiskMatrix};

use super::load_org;

/// Arguments for a single probability × impact lookup
#[derive(Args)]
pub struct RiskScoreArgs {
    /// Probability level (e.g. "Medium", "very-high")
    #[arg(long)]
    pub probability: RiskLevel5,

    /// Impact level
    #[arg(long)]
    pub impact: RiskLevel5,

    /// Organizational settings document supplying the risk matrix
    #[arg(long)]
    pub org: Option<String>,
}

pub fn run_risk_score(args: RiskScoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let matrix = match args.org {
        Some(ref path) => load_org(path)?.risk_matrix,
        None => RiskMatrix::default(),
    };
    matrix.validate()?;

    let score = compute_risk_score(args.probability, args.impact, &matrix);
    Ok(json!({
        "probability": args.probability,
        "impact": args.impact,
        "riskScore": score,
    }))
}
