//! Premium Calculator - agent quoting for insurance premiums
//!
//! This library provides:
//! - Product catalog and the product/term dependent option resolver
//! - Age derivation from a date of birth
//! - Periodic premium calculation from sum insured, year plan and payment mode
//! - The two-step quote wizard and the agent session gate
//! - Quote reports and document renderers (text table, CSV, JSON)
//! - Parallel batch quoting from CSV

pub mod catalog;
pub mod premium;
pub mod form;
pub mod wizard;
pub mod report;
pub mod batch;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use catalog::{resolve_options, OptionSet, ResolvedOptions, Product, PaymentMode};
pub use premium::{age_from_dob, calculate_premium, CalculationResult};
pub use form::{FormField, FormInput, QuoteForm};
pub use wizard::{Session, WizardStep};
pub use report::{QuoteReport, DocumentRenderer, ReportFormat};
pub use batch::QuoteRunner;
pub use config::CalculatorConfig;
pub use error::{QuoteError, QuoteResult, SessionError, WizardError};
