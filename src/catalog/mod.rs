//! Product catalog: select-field code tables and the dependent options resolver

mod codes;
mod options;

pub use codes::{
    payment_mode_options, product_options, term_options, CalculationMode, PaymentMode, Product,
    Term,
};
pub use options::{resolve_options, OptionEntry, OptionSet, ResolvedOptions, SELECT_PLAN_LABEL};
