//! Batch quoting: many form inputs against one configuration
//!
//! Each input is quoted independently, the same way a session would on
//! submit, so inputs can be processed in parallel.

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::config::CalculatorConfig;
use crate::form::{FormInput, QuoteForm};
use crate::report::QuoteReport;

/// Quotes form inputs as of a fixed date
///
/// # Example
/// ```ignore
/// let runner = QuoteRunner::new(CalculatorConfig::default(), as_of);
/// let inputs = load_form_inputs("quotes.csv")?;
/// let reports = runner.run_batch(&inputs);
/// ```
#[derive(Debug, Clone)]
pub struct QuoteRunner {
    config: CalculatorConfig,
    as_of: NaiveDate,
}

impl QuoteRunner {
    pub fn new(config: CalculatorConfig, as_of: NaiveDate) -> Self {
        Self { config, as_of }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Quote a single input
    pub fn run(&self, input: &FormInput) -> QuoteReport {
        let form = QuoteForm::from_input(input, self.as_of, &self.config.date_format);
        QuoteReport::build(&form, &self.config)
    }

    /// Quote every input in parallel. Output order matches input order.
    pub fn run_batch(&self, inputs: &[FormInput]) -> Vec<QuoteReport> {
        inputs.par_iter().map(|input| self.run(input)).collect()
    }
}
