pub mod analyze;
pub mod cashflow;
pub mod compare;
pub mod evaluate;
pub mod risk_score;
pub mod validate;

use clap::{Args, ValueEnum};
use tracing::debug;

use business_case_core::model::{BusinessCase, OrganizationalSettings};
use business_case_core::schema::{self, RateScale};

use crate::input;

/// Scale of every rate field in the input document.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum RateScaleArg {
    /// 8 means 8%
    #[default]
    Percent,
    /// 0.08 means 8%
    Fraction,
}

impl From<RateScaleArg> for RateScale {
    fn from(arg: RateScaleArg) -> Self {
        match arg {
            RateScaleArg::Percent => RateScale::Percent,
            RateScaleArg::Fraction => RateScale::Fraction,
        }
    }
}

/// Where the business case comes from and how to read it.
#[derive(Args, Debug, Clone)]
pub struct CaseArgs {
    /// Path to a business case document (.json, .yaml or .yml); stdin if omitted
    #[arg(long)]
    pub input: Option<String>,

    /// Organizational settings document replacing the case's own block
    #[arg(long)]
    pub org: Option<String>,

    /// Scale used by rate fields in the input
    #[arg(long, value_enum, default_value = "percent")]
    pub rate_scale: RateScaleArg,
}

/// Read, scale, clamp and schema-check the business case.
pub fn load_case(args: &CaseArgs) -> Result<BusinessCase, Box<dyn std::error::Error>> {
    let mut case: BusinessCase = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file> or stdin required for a business case".into());
    };

    if let Some(ref path) = args.org {
        debug!(path = %path, "replacing organizational settings");
        case.organizational = load_org(path)?;
    }

    Ok(schema::prepare(case, args.rate_scale.into())?)
}

pub fn load_org(path: &str) -> Result<OrganizationalSettings, Box<dyn std::error::Error>> {
    input::file::read_document(path)
}
