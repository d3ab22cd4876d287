//! Dropdown option sets and the product/term options resolver

use serde::{Deserialize, Serialize};

use super::codes::{CalculationMode, Product, Term};

/// Label of the single row shown before a product is chosen
pub const SELECT_PLAN_LABEL: &str = "Select plan";

/// A single (code, label) dropdown row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub code: String,
    pub label: String,
}

impl OptionEntry {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }

    /// Entry whose code and label are both the number
    fn numeric(value: u32) -> Self {
        let text = value.to_string();
        Self {
            code: text.clone(),
            label: text,
        }
    }
}

/// Ordered dropdown contents. Codes are compared by exact match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet {
    entries: Vec<OptionEntry>,
}

impl OptionSet {
    pub fn new(entries: Vec<OptionEntry>) -> Self {
        Self { entries }
    }

    /// Numeric rows for every value yielded by `values`, in order
    pub fn numeric<I: IntoIterator<Item = u32>>(values: I) -> Self {
        Self {
            entries: values.into_iter().map(OptionEntry::numeric).collect(),
        }
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.code.as_str()).collect()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.code == code)
    }

    /// Label for a code, or "" when the code is not offered
    pub fn label_for(&self, code: &str) -> &str {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.label.as_str())
            .unwrap_or("")
    }

    /// Label of a selected value. An empty selection has no label, even when
    /// the set carries a placeholder row.
    pub fn selected_label(&self, code: &str) -> &str {
        if code.is_empty() {
            ""
        } else {
            self.label_for(code)
        }
    }
}

/// Option sets that depend on the product (and Student Life term)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOptions {
    /// Year plan choices
    pub plan_options: OptionSet,
    /// Calculation mode (SA/AP) choices
    pub mode_options: OptionSet,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        resolve_options("", None)
    }
}

fn sa_ap_options() -> OptionSet {
    OptionSet::new(
        [CalculationMode::Sa, CalculationMode::Ap]
            .iter()
            .map(|m| OptionEntry::new(m.code(), m.label()))
            .collect(),
    )
}

fn sa_only_options() -> OptionSet {
    let sa = CalculationMode::Sa;
    OptionSet::new(vec![OptionEntry::new(sa.code(), sa.label())])
}

/// Resolve the year plan and calculation mode choices for a product code.
///
/// `term` only matters for Student Life: Premium Term ("0") offers 8..=19
/// years, anything else (including no term) offers 5..=16. Unknown product
/// codes get the placeholder plan row and both calculation modes.
pub fn resolve_options(product: &str, term: Option<&str>) -> ResolvedOptions {
    match Product::from_code(product) {
        Some(Product::DoubleFlexi) => ResolvedOptions {
            plan_options: OptionSet::numeric([5, 10, 15]),
            mode_options: sa_ap_options(),
        },
        Some(Product::FlexiHealth) => ResolvedOptions {
            plan_options: OptionSet::numeric(1..=20),
            mode_options: sa_ap_options(),
        },
        Some(Product::Ste) => ResolvedOptions {
            plan_options: OptionSet::numeric([5, 7, 10]),
            mode_options: sa_only_options(),
        },
        Some(Product::StudentLife) => {
            let plan_options = match term.and_then(Term::from_code) {
                Some(Term::PremiumTerm) => OptionSet::numeric(8..=19),
                _ => OptionSet::numeric(5..=16),
            };
            ResolvedOptions {
                plan_options,
                mode_options: sa_only_options(),
            }
        }
        None => ResolvedOptions {
            plan_options: OptionSet::new(vec![OptionEntry::new("", SELECT_PLAN_LABEL)]),
            mode_options: sa_ap_options(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_codes(range: std::ops::RangeInclusive<u32>) -> Vec<String> {
        range.map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_double_flexi() {
        let opts = resolve_options("0", None);
        assert_eq!(opts.plan_options.codes(), vec!["5", "10", "15"]);
        assert_eq!(opts.mode_options.codes(), vec!["sa", "ap"]);
    }

    #[test]
    fn test_flexi_health_has_twenty_plans() {
        let opts = resolve_options("1", None);
        assert_eq!(opts.plan_options.len(), 20);
        assert_eq!(opts.plan_options.codes(), range_codes(1..=20));
        assert_eq!(opts.mode_options.codes(), vec!["sa", "ap"]);
    }

    #[test]
    fn test_ste() {
        let opts = resolve_options("2", None);
        assert_eq!(opts.plan_options.codes(), vec!["5", "7", "10"]);
        assert_eq!(opts.mode_options.codes(), vec!["sa"]);
    }

    #[test]
    fn test_student_life_depends_on_term() {
        let premium_term = resolve_options("3", Some("0"));
        assert_eq!(premium_term.plan_options.len(), 12);
        assert_eq!(premium_term.plan_options.codes(), range_codes(8..=19));

        let policy_term = resolve_options("3", Some("1"));
        assert_eq!(policy_term.plan_options.codes(), range_codes(5..=16));

        // No term selected yet behaves like any non-premium term
        let unset = resolve_options("3", None);
        assert_eq!(unset.plan_options, policy_term.plan_options);
        let blank = resolve_options("3", Some(""));
        assert_eq!(blank.plan_options, policy_term.plan_options);

        assert_eq!(premium_term.mode_options.codes(), vec!["sa"]);
    }

    #[test]
    fn test_term_ignored_for_other_products() {
        assert_eq!(resolve_options("0", Some("0")), resolve_options("0", None));
        assert_eq!(resolve_options("1", Some("1")), resolve_options("1", None));
    }

    #[test]
    fn test_unknown_product_falls_back_to_placeholder() {
        for product in ["", "4", "x", "00"] {
            let opts = resolve_options(product, Some("0"));
            assert_eq!(opts.plan_options.len(), 1);
            assert_eq!(opts.plan_options.entries()[0], OptionEntry::new("", SELECT_PLAN_LABEL));
            assert_eq!(opts.mode_options.codes(), vec!["sa", "ap"]);
        }
        assert_eq!(ResolvedOptions::default(), resolve_options("", None));
    }

    #[test]
    fn test_labels() {
        let opts = resolve_options("1", None);
        assert_eq!(opts.plan_options.label_for("7"), "7");
        assert_eq!(opts.plan_options.label_for("21"), "");
        assert_eq!(opts.mode_options.label_for("ap"), "AP");

        let placeholder = resolve_options("", None);
        assert_eq!(placeholder.plan_options.label_for(""), SELECT_PLAN_LABEL);
        assert_eq!(placeholder.plan_options.selected_label(""), "");
    }
}
