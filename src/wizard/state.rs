//! Two-step form wizard plus the result view

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::WizardError;
use crate::form::FormField;

/// Where the agent is in the quote flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WizardStep {
    /// Identity and product
    #[default]
    Step1,
    /// Payment and amount
    Step2,
    /// Calculated result, ready for display or export
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardEvent {
    Next,
    Back,
    Submit,
    /// Dismiss the result view
    Close,
}

impl WizardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::Next => "next",
            WizardEvent::Back => "back",
            WizardEvent::Submit => "submit",
            WizardEvent::Close => "close",
        }
    }
}

const STEP1_FIELDS: [FormField; 5] = [
    FormField::AgentName,
    FormField::CustomerName,
    FormField::Dob,
    FormField::Age,
    FormField::Product,
];

const STEP2_FIELDS: [FormField; 4] = [
    FormField::PaymentMode,
    FormField::CalculationMode,
    FormField::YearPlan,
    FormField::Amount,
];

impl WizardStep {
    /// Next step for `event`. No field validation happens on any transition.
    pub fn apply(self, event: WizardEvent) -> Result<WizardStep, WizardError> {
        match (self, event) {
            (WizardStep::Step1, WizardEvent::Next) => Ok(WizardStep::Step2),
            (WizardStep::Step2, WizardEvent::Back) => Ok(WizardStep::Step1),
            (WizardStep::Step2, WizardEvent::Submit) => Ok(WizardStep::Result),
            (WizardStep::Result, WizardEvent::Back | WizardEvent::Close) => Ok(WizardStep::Step2),
            (from, event) => Err(WizardError {
                from,
                event: event.name(),
            }),
        }
    }

    /// Fields shown on this step. Student Life puts Term first on step 2.
    pub fn fields(&self, product: Option<Product>) -> Vec<FormField> {
        match self {
            WizardStep::Step1 => STEP1_FIELDS.to_vec(),
            WizardStep::Step2 => {
                let mut fields = Vec::with_capacity(STEP2_FIELDS.len() + 1);
                if product.is_some_and(|p| p.has_term()) {
                    fields.push(FormField::Term);
                }
                fields.extend(STEP2_FIELDS);
                fields
            }
            WizardStep::Result => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let step = WizardStep::default();
        assert_eq!(step, WizardStep::Step1);
        let step = step.apply(WizardEvent::Next).unwrap();
        assert_eq!(step, WizardStep::Step2);
        let step = step.apply(WizardEvent::Submit).unwrap();
        assert_eq!(step, WizardStep::Result);
    }

    #[test]
    fn test_back_transitions() {
        assert_eq!(WizardStep::Step2.apply(WizardEvent::Back), Ok(WizardStep::Step1));
        assert_eq!(WizardStep::Result.apply(WizardEvent::Back), Ok(WizardStep::Step2));
        assert_eq!(WizardStep::Result.apply(WizardEvent::Close), Ok(WizardStep::Step2));
    }

    #[test]
    fn test_rejected_transitions() {
        let rejected = [
            (WizardStep::Step1, WizardEvent::Back),
            (WizardStep::Step1, WizardEvent::Submit),
            (WizardStep::Step1, WizardEvent::Close),
            (WizardStep::Step2, WizardEvent::Next),
            (WizardStep::Step2, WizardEvent::Close),
            (WizardStep::Result, WizardEvent::Next),
            (WizardStep::Result, WizardEvent::Submit),
        ];
        for (step, event) in rejected {
            let err = step.apply(event).unwrap_err();
            assert_eq!(err.from, step);
            assert_eq!(err.event, event.name());
        }
    }

    #[test]
    fn test_step_fields() {
        let step1 = WizardStep::Step1.fields(None);
        assert_eq!(step1.len(), 5);
        assert_eq!(step1.last(), Some(&FormField::Product));

        let step2 = WizardStep::Step2.fields(Some(Product::DoubleFlexi));
        assert_eq!(step2.first(), Some(&FormField::PaymentMode));
        assert!(!step2.contains(&FormField::Term));

        let student = WizardStep::Step2.fields(Some(Product::StudentLife));
        assert_eq!(student.first(), Some(&FormField::Term));
        assert_eq!(student.len(), 5);

        assert!(WizardStep::Result.fields(None).is_empty());
    }
}
