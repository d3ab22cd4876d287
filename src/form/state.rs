//! Live form state: raw input plus everything derived from it

use chrono::NaiveDate;
use log::{debug, warn};

use super::data::{FormField, FormInput};
use crate::catalog::{
    payment_mode_options, product_options, resolve_options, term_options, Product,
    ResolvedOptions,
};
use crate::premium::{age_from_dob, parse_dob, CalculationResult, DOB_FORMAT};

/// Form input together with the derived age and dependent option sets.
///
/// Every edit goes through [`QuoteForm::set_field`], which re-derives
/// synchronously:
/// - a DOB edit recomputes the age (an unparseable DOB keeps the prior age)
/// - a product or term edit re-resolves the option sets and clears a year
///   plan or calculation mode that the new sets no longer offer
///
/// Select fields only take a value their dropdown offers (or empty). Anything
/// else is logged and ignored, leaving the prior selection in place.
#[derive(Debug, Clone)]
pub struct QuoteForm {
    input: FormInput,
    age: Option<i32>,
    options: ResolvedOptions,
    /// Date ages are computed against
    as_of: NaiveDate,
    date_format: String,
}

impl QuoteForm {
    pub fn new(as_of: NaiveDate) -> Self {
        Self::with_date_format(as_of, DOB_FORMAT)
    }

    pub fn with_date_format(as_of: NaiveDate, date_format: impl Into<String>) -> Self {
        Self {
            input: FormInput::default(),
            age: None,
            options: ResolvedOptions::default(),
            as_of,
            date_format: date_format.into(),
        }
    }

    /// Build a form by applying every field of `input` in form order
    pub fn from_input(input: &FormInput, as_of: NaiveDate, date_format: &str) -> Self {
        let mut form = Self::with_date_format(as_of, date_format);
        // Product and term go first so the dependent selections survive
        for field in [
            FormField::AgentName,
            FormField::CustomerName,
            FormField::Dob,
            FormField::Product,
            FormField::Term,
            FormField::PaymentMode,
            FormField::CalculationMode,
            FormField::YearPlan,
            FormField::Amount,
        ] {
            form.set_field(field, input.get(field));
        }
        form
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn product(&self) -> Option<Product> {
        Product::from_code(&self.input.product)
    }

    /// Update one field and re-derive whatever depends on it
    pub fn set_field(&mut self, field: FormField, value: &str) {
        if !value.is_empty() && !self.is_offered(field, value) {
            warn!("ignoring {:?} for {:?}, not offered", value, field);
            return;
        }
        let Some(slot) = self.input.slot_mut(field) else {
            warn!("ignoring edit of read-only field {:?}", field);
            return;
        };
        if slot.as_str() == value {
            return;
        }
        *slot = value.to_string();

        match field {
            FormField::Dob => self.refresh_age(),
            FormField::Product | FormField::Term => self.refresh_options(),
            _ => {}
        }
    }

    /// Whether a select field's current dropdown offers `value`
    fn is_offered(&self, field: FormField, value: &str) -> bool {
        match field {
            FormField::Product => product_options().contains(value),
            FormField::Term => term_options().contains(value),
            FormField::PaymentMode => payment_mode_options().contains(value),
            FormField::CalculationMode => self.options.mode_options.contains(value),
            FormField::YearPlan => self.options.plan_options.contains(value),
            _ => true,
        }
    }

    fn refresh_age(&mut self) {
        match parse_dob(&self.input.dob, &self.date_format) {
            Some(dob) => {
                let age = age_from_dob(dob, self.as_of);
                debug!("dob {} gives age {} as of {}", dob, age, self.as_of);
                self.age = Some(age);
            }
            None => debug!("dob {:?} not parseable, keeping age {:?}", self.input.dob, self.age),
        }
    }

    fn refresh_options(&mut self) {
        let term = Some(self.input.term.as_str()).filter(|t| !t.is_empty());
        self.options = resolve_options(&self.input.product, term);

        if !self.options.plan_options.contains(&self.input.year_plan) {
            debug!("clearing year plan {:?}, no longer offered", self.input.year_plan);
            self.input.year_plan.clear();
        }
        if !self.input.calculation_mode.is_empty()
            && !self.options.mode_options.contains(&self.input.calculation_mode)
        {
            debug!(
                "clearing calculation mode {:?}, no longer offered",
                self.input.calculation_mode
            );
            self.input.calculation_mode.clear();
        }
    }

    /// Premium for the current amount, year plan and payment mode
    pub fn calculate(&self) -> CalculationResult {
        CalculationResult::compute(
            &self.input.amount,
            &self.input.year_plan,
            &self.input.payment_mode,
        )
    }
}
