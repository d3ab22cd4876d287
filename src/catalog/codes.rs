//! Select-field code tables: products, terms, payment modes and calculation modes

use serde::{Deserialize, Serialize};

use super::options::{OptionEntry, OptionSet};

/// Insurance plan type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    DoubleFlexi,
    FlexiHealth,
    /// Short-term endowment
    Ste,
    /// The only product with a selectable term
    StudentLife,
}

impl Product {
    pub const ALL: [Product; 4] = [
        Product::DoubleFlexi,
        Product::FlexiHealth,
        Product::Ste,
        Product::StudentLife,
    ];

    /// Parse a form code ("0".."3"). Anything else is no product.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Product::DoubleFlexi),
            "1" => Some(Product::FlexiHealth),
            "2" => Some(Product::Ste),
            "3" => Some(Product::StudentLife),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Product::DoubleFlexi => "0",
            Product::FlexiHealth => "1",
            Product::Ste => "2",
            Product::StudentLife => "3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Product::DoubleFlexi => "Double Flexi",
            Product::FlexiHealth => "Flexi Health",
            Product::Ste => "STE",
            Product::StudentLife => "Student Life",
        }
    }

    /// Whether the Term field is shown for this product
    pub fn has_term(&self) -> bool {
        matches!(self, Product::StudentLife)
    }
}

/// Student Life term selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    PremiumTerm,
    PolicyTerm,
}

impl Term {
    pub const ALL: [Term; 2] = [Term::PremiumTerm, Term::PolicyTerm];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Term::PremiumTerm),
            "1" => Some(Term::PolicyTerm),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Term::PremiumTerm => "0",
            Term::PolicyTerm => "1",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Term::PremiumTerm => "Premium Term",
            Term::PolicyTerm => "Policy Term",
        }
    }
}

/// Premium payment frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMode {
    Annual,
    Monthly,
    Quarterly,
    SemiAnnual,
}

impl PaymentMode {
    pub const ALL: [PaymentMode; 4] = [
        PaymentMode::Annual,
        PaymentMode::Monthly,
        PaymentMode::Quarterly,
        PaymentMode::SemiAnnual,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(PaymentMode::Annual),
            "1" => Some(PaymentMode::Monthly),
            "2" => Some(PaymentMode::Quarterly),
            "3" => Some(PaymentMode::SemiAnnual),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PaymentMode::Annual => "0",
            PaymentMode::Monthly => "1",
            PaymentMode::Quarterly => "2",
            PaymentMode::SemiAnnual => "3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMode::Annual => "Annual",
            PaymentMode::Monthly => "Monthly",
            PaymentMode::Quarterly => "Quarterly",
            PaymentMode::SemiAnnual => "Semi-Annual",
        }
    }

    /// Divisor applied on top of the plan length.
    ///
    /// Semi-annual divides by 6, as the quoting sheet does; it is not the
    /// number of payments per year.
    pub fn multiplier(&self) -> u32 {
        match self {
            PaymentMode::Annual => 1,
            PaymentMode::Monthly => 12,
            PaymentMode::Quarterly => 4,
            PaymentMode::SemiAnnual => 6,
        }
    }
}

/// SA/AP classifier. Shown on the report, not used by the premium formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationMode {
    /// Sum assured
    Sa,
    /// Annual premium
    Ap,
}

impl CalculationMode {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "sa" => Some(CalculationMode::Sa),
            "ap" => Some(CalculationMode::Ap),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CalculationMode::Sa => "sa",
            CalculationMode::Ap => "ap",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalculationMode::Sa => "SA",
            CalculationMode::Ap => "AP",
        }
    }
}

/// Product dropdown, including the empty placeholder row
pub fn product_options() -> OptionSet {
    let mut entries = vec![OptionEntry::new("", "Select Product")];
    entries.extend(Product::ALL.iter().map(|p| OptionEntry::new(p.code(), p.label())));
    OptionSet::new(entries)
}

/// Term dropdown (Student Life only). No placeholder row.
pub fn term_options() -> OptionSet {
    OptionSet::new(
        Term::ALL
            .iter()
            .map(|t| OptionEntry::new(t.code(), t.label()))
            .collect(),
    )
}

/// Payment mode dropdown, including the empty placeholder row
pub fn payment_mode_options() -> OptionSet {
    let mut entries = vec![OptionEntry::new("", "Select Payment Mode")];
    entries.extend(PaymentMode::ALL.iter().map(|m| OptionEntry::new(m.code(), m.label())));
    OptionSet::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_labels() {
        for product in Product::ALL {
            assert_eq!(Product::from_code(product.code()), Some(product));
        }
        assert_eq!(Product::from_code("4"), None);
        assert_eq!(Product::from_code(""), None);
        assert_eq!(Product::from_code(" 0"), None);
    }

    #[test]
    fn test_only_student_life_has_term() {
        let with_term: Vec<_> = Product::ALL.iter().filter(|p| p.has_term()).collect();
        assert_eq!(with_term, vec![&Product::StudentLife]);
    }

    #[test]
    fn test_payment_mode_multipliers() {
        assert_eq!(PaymentMode::Annual.multiplier(), 1);
        assert_eq!(PaymentMode::Monthly.multiplier(), 12);
        assert_eq!(PaymentMode::Quarterly.multiplier(), 4);
        assert_eq!(PaymentMode::SemiAnnual.multiplier(), 6);
        assert_eq!(PaymentMode::from_code("4"), None);
    }

    #[test]
    fn test_static_dropdowns() {
        let products = product_options();
        assert_eq!(products.len(), 5);
        assert_eq!(products.label_for(""), "Select Product");
        assert_eq!(products.label_for("3"), "Student Life");

        let modes = payment_mode_options();
        assert_eq!(modes.label_for("1"), "Monthly");

        let terms = term_options();
        assert_eq!(terms.codes(), vec!["0", "1"]);
    }
}
