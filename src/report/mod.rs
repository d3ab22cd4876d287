//! Finalized quote record handed to document renderers
//!
//! The report owns the data only: raw inputs, resolved display labels and the
//! computed premium. Layout belongs to the [`DocumentRenderer`]s.

mod render;

pub use render::{
    renderer_for, write_reports_csv, CsvRenderer, DocumentRenderer, JsonRenderer, ReportFormat,
    TextTableRenderer,
};

use serde::Serialize;

use crate::catalog::{PaymentMode, Product, Term};
use crate::config::CalculatorConfig;
use crate::form::{FormInput, QuoteForm};
use crate::premium::CalculationResult;

/// Human-readable labels for the coded selections. Unknown or empty codes
/// resolve to "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLabels {
    pub product: String,
    pub term: String,
    pub payment_mode: String,
    pub calculation_mode: String,
    pub year_plan: String,
}

impl DisplayLabels {
    pub fn resolve(form: &QuoteForm) -> Self {
        let input = form.input();
        let options = form.options();
        Self {
            product: Product::from_code(&input.product)
                .map(|p| p.label().to_string())
                .unwrap_or_default(),
            term: Term::from_code(&input.term)
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
            payment_mode: PaymentMode::from_code(&input.payment_mode)
                .map(|m| m.label().to_string())
                .unwrap_or_default(),
            calculation_mode: options
                .mode_options
                .selected_label(&input.calculation_mode)
                .to_string(),
            year_plan: options.plan_options.selected_label(&input.year_plan).to_string(),
        }
    }
}

/// One header/value cell pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportColumn {
    pub header: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
    pub title: String,
    pub document_file_name: String,
    /// Raw form values, codes included
    pub input: FormInput,
    pub age: Option<i32>,
    pub labels: DisplayLabels,
    pub result: CalculationResult,
    /// Premium as displayed; the placeholder when not computable
    pub calculated_value: String,
    /// Term column only applies to Student Life
    pub show_term: bool,
}

impl QuoteReport {
    /// Finalize the current form into a report
    pub fn build(form: &QuoteForm, config: &CalculatorConfig) -> Self {
        let result = form.calculate();
        Self {
            title: config.report_title.clone(),
            document_file_name: config.document_file_name.clone(),
            input: form.input().clone(),
            age: form.age(),
            labels: DisplayLabels::resolve(form),
            calculated_value: result.display(&config.unavailable_placeholder),
            result,
            show_term: form.product().is_some_and(|p| p.has_term()),
        }
    }

    pub fn age_display(&self) -> String {
        self.age.map(|a| a.to_string()).unwrap_or_default()
    }

    /// Every column, Term included regardless of product
    pub fn all_columns(&self) -> Vec<ReportColumn> {
        let cell = |header: &'static str, value: &str| ReportColumn {
            header,
            value: value.to_string(),
        };
        vec![
            cell("Agent By", &self.input.agent_name),
            cell("Customer Name", &self.input.customer_name),
            cell("DOB", &self.input.dob),
            cell("Age", &self.age_display()),
            cell("Product", &self.labels.product),
            cell("Payment Mode", &self.labels.payment_mode),
            cell("Calculation Mode", &self.labels.calculation_mode),
            cell("Year Plan", &self.labels.year_plan),
            cell("Amount", &self.input.amount),
            cell("Term", &self.labels.term),
            cell("Calculated Value", &self.calculated_value),
        ]
    }

    /// Columns shown for this quote, in display order
    pub fn columns(&self) -> Vec<ReportColumn> {
        let mut columns = self.all_columns();
        if !self.show_term {
            columns.retain(|c| c.header != "Term");
        }
        columns
    }

    pub fn footer(&self) -> String {
        format!("Agent Name: {}", self.input.agent_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;
    use chrono::NaiveDate;

    fn form_with(fields: &[(FormField, &str)]) -> QuoteForm {
        let mut form = QuoteForm::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        for (field, value) in fields {
            form.set_field(*field, value);
        }
        form
    }

    fn headers(columns: &[ReportColumn]) -> Vec<&str> {
        columns.iter().map(|c| c.header).collect()
    }

    #[test]
    fn test_report_labels_and_premium() {
        let form = form_with(&[
            (FormField::AgentName, "Ana"),
            (FormField::CustomerName, "Ben"),
            (FormField::Dob, "1990-05-01"),
            (FormField::Product, "0"),
            (FormField::PaymentMode, "1"),
            (FormField::CalculationMode, "ap"),
            (FormField::YearPlan, "10"),
            (FormField::Amount, "12000"),
        ]);
        let report = QuoteReport::build(&form, &CalculatorConfig::default());

        assert_eq!(report.labels.product, "Double Flexi");
        assert_eq!(report.labels.payment_mode, "Monthly");
        assert_eq!(report.labels.calculation_mode, "AP");
        assert_eq!(report.labels.year_plan, "10");
        assert_eq!(report.age, Some(36));
        assert_eq!(report.result, CalculationResult::Premium(100));
        assert_eq!(report.calculated_value, "100");
        assert_eq!(report.footer(), "Agent Name: Ana");
        assert_eq!(report.title, "Insurance Calculation Report");
        assert!(!report.show_term);
        assert_eq!(
            headers(&report.columns()),
            vec![
                "Agent By",
                "Customer Name",
                "DOB",
                "Age",
                "Product",
                "Payment Mode",
                "Calculation Mode",
                "Year Plan",
                "Amount",
                "Calculated Value",
            ]
        );
    }

    #[test]
    fn test_student_life_shows_term() {
        let form = form_with(&[
            (FormField::Product, "3"),
            (FormField::Term, "0"),
            (FormField::YearPlan, "12"),
        ]);
        let report = QuoteReport::build(&form, &CalculatorConfig::default());
        assert!(report.show_term);
        assert_eq!(report.labels.term, "Premium Term");

        let columns = report.columns();
        let term_idx = columns.iter().position(|c| c.header == "Term").unwrap();
        assert_eq!(columns[term_idx + 1].header, "Calculated Value");
        assert_eq!(columns[term_idx].value, "Premium Term");
    }

    #[test]
    fn test_unavailable_premium_uses_placeholder() {
        let form = form_with(&[(FormField::Product, "1")]);
        let report = QuoteReport::build(&form, &CalculatorConfig::default());
        assert_eq!(report.result, CalculationResult::NotComputable);
        assert_eq!(report.calculated_value, "N/A");

        let config = CalculatorConfig {
            unavailable_placeholder: "--".to_string(),
            ..Default::default()
        };
        assert_eq!(QuoteReport::build(&form, &config).calculated_value, "--");
    }

    #[test]
    fn test_empty_selections_have_blank_labels() {
        let form = form_with(&[]);
        let report = QuoteReport::build(&form, &CalculatorConfig::default());
        assert_eq!(report.labels, DisplayLabels::default());
        assert_eq!(report.age_display(), "");
    }
}
