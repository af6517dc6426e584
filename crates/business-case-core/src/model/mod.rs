//! Strongly-typed Business Case record.
//!
//! Field names serialize in camelCase so the record round-trips with the
//! JSON produced by the form-mapping layer.

pub mod business_case;
pub mod line_item;
pub mod option;
pub mod risk;
pub mod settings;
pub mod strategic;

pub use business_case::*;
pub use line_item::*;
pub use option::*;
pub use risk::*;
pub use settings::*;
pub use strategic::*;
