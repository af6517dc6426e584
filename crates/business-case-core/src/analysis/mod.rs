pub mod integrity;
pub mod option_analyzer;

pub use integrity::{check_structure, ensure_analyzed};
pub use option_analyzer::{
    analyze_business_case, analyze_business_case_with, analyze_option, effective_discount_rate_pct,
    AnalysisOptions,
};
