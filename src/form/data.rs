//! Quote form fields and the raw input record

use serde::{Deserialize, Serialize};

/// How a field is captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Date,
    Number,
    Select,
    /// Derived, shown but never edited
    ReadOnly,
}

/// Every field the quote form can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    AgentName,
    CustomerName,
    Dob,
    Age,
    Product,
    Term,
    PaymentMode,
    CalculationMode,
    YearPlan,
    Amount,
}

impl FormField {
    /// Field name as used in JSON payloads
    pub fn name(&self) -> &'static str {
        match self {
            FormField::AgentName => "agentName",
            FormField::CustomerName => "customerName",
            FormField::Dob => "dob",
            FormField::Age => "age",
            FormField::Product => "product",
            FormField::Term => "term",
            FormField::PaymentMode => "paymentMode",
            FormField::CalculationMode => "calculationMode",
            FormField::YearPlan => "yearPlan",
            FormField::Amount => "amount",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::AgentName => "Agent Name",
            FormField::CustomerName => "Customer Name",
            FormField::Dob => "DOB",
            FormField::Age => "Age",
            FormField::Product => "Product",
            FormField::Term => "Term",
            FormField::PaymentMode => "Payment Mode",
            FormField::CalculationMode => "Calculation Mode",
            FormField::YearPlan => "Year Plan",
            FormField::Amount => "SI Amount",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::AgentName | FormField::CustomerName => FieldKind::Text,
            FormField::Dob => FieldKind::Date,
            FormField::Age => FieldKind::ReadOnly,
            FormField::Amount => FieldKind::Number,
            FormField::Product
            | FormField::Term
            | FormField::PaymentMode
            | FormField::CalculationMode
            | FormField::YearPlan => FieldKind::Select,
        }
    }

    /// Placeholder hint for free-text fields
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            FormField::AgentName | FormField::CustomerName => Some("Type Your Name"),
            _ => None,
        }
    }
}

/// Raw form values exactly as typed or selected. All fields start empty.
///
/// The derived age is not part of the input; see [`super::QuoteForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormInput {
    pub agent_name: String,
    pub customer_name: String,
    /// Date of birth, `YYYY-MM-DD` unless configured otherwise
    pub dob: String,
    /// Product code "0".."3"
    pub product: String,
    /// Student Life term code "0"/"1"
    pub term: String,
    /// Payment mode code "0".."3"
    pub payment_mode: String,
    /// Calculation mode code "sa"/"ap"
    pub calculation_mode: String,
    /// Year plan, in years
    pub year_plan: String,
    /// Sum insured
    pub amount: String,
}

impl FormInput {
    /// Stored value of an input field. The derived age has no stored value.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::AgentName => &self.agent_name,
            FormField::CustomerName => &self.customer_name,
            FormField::Dob => &self.dob,
            FormField::Age => "",
            FormField::Product => &self.product,
            FormField::Term => &self.term,
            FormField::PaymentMode => &self.payment_mode,
            FormField::CalculationMode => &self.calculation_mode,
            FormField::YearPlan => &self.year_plan,
            FormField::Amount => &self.amount,
        }
    }

    /// Mutable slot for an input field, `None` for the derived age
    pub(crate) fn slot_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::AgentName => Some(&mut self.agent_name),
            FormField::CustomerName => Some(&mut self.customer_name),
            FormField::Dob => Some(&mut self.dob),
            FormField::Age => None,
            FormField::Product => Some(&mut self.product),
            FormField::Term => Some(&mut self.term),
            FormField::PaymentMode => Some(&mut self.payment_mode),
            FormField::CalculationMode => Some(&mut self.calculation_mode),
            FormField::YearPlan => Some(&mut self.year_plan),
            FormField::Amount => Some(&mut self.amount),
        }
    }
}
