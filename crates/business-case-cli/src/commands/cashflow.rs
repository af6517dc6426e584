use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use business_case_core::cashflow::generate_monthly_cashflow;

use super::{load_case, CaseArgs};

/// Arguments for the monthly cashflow projection of one option
#[derive(Args)]
pub struct CashflowArgs {
    #[command(flatten)]
    pub case: CaseArgs,

    /// Option id; defaults to the recommended option
    #[arg(long)]
    pub option: Option<String>,
}

pub fn run_cashflow(args: CashflowArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let case = load_case(&args.case)?;
    let option = match args.option {
        Some(ref id) => case
            .option(id)
            .ok_or_else(|| format!("no option with id '{id}'"))?,
        None => case
            .recommended_option()
            .ok_or("business case has no options")?,
    };

    let horizon = case.financial.horizon_months;
    let cf = generate_monthly_cashflow(&option.line_items, horizon, &case.organizational)?;

    let mut cumulative = Decimal::ZERO;
    let rows: Vec<Value> = cf
        .series
        .iter()
        .enumerate()
        .map(|(month, net)| {
            cumulative += net;
            json!({ "month": month, "net": net, "cumulative": cumulative })
        })
        .collect();

    Ok(json!({
        "option": option.id,
        "name": option.name,
        "horizonMonths": horizon,
        "currency": case.financial.currency,
        "totals": cf.totals,
        "metadata": cf.metadata,
        "rows": rows,
    }))
}
