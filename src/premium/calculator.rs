//! Periodic premium from sum insured, year plan and payment mode

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::PaymentMode;

/// Parse the leading integer of a form value.
///
/// Mirrors how browsers read a number field: leading whitespace and a sign are
/// accepted and parsing stops at the first non-digit, so `"12.7"` reads as 12
/// and `"10 years"` as 10. Returns `None` when no digit leads the value.
/// A digit run too long for `i64` saturates at `i64::MAX` (or `-i64::MAX`).
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .as_bytes()
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end]
        .bytes()
        .try_fold(0i64, |acc, b| {
            acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
        })
        .unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Round half up (towards positive infinity on ties)
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Unrounded periodic premium, or `None` when not computable.
///
/// An unrecognized payment mode yields `Some(0.0)`.
pub fn raw_premium(amount: &str, plan_length: &str, payment_mode: &str) -> Option<f64> {
    let amount = parse_leading_int(amount).filter(|&v| v != 0)?;
    let plan = parse_leading_int(plan_length).filter(|&v| v != 0)?;

    let Some(mode) = PaymentMode::from_code(payment_mode) else {
        debug!("unrecognized payment mode {:?}, premium is 0", payment_mode);
        return Some(0.0);
    };

    let divisor = plan as f64 * mode.multiplier() as f64;
    Some(amount as f64 / divisor)
}

/// Rounded periodic premium: `round(amount / (plan_length * multiplier))`.
///
/// Returns `None` when amount or plan length is empty, non-numeric or zero,
/// and `Some(0)` for an unrecognized payment mode. Never fails.
pub fn calculate_premium(amount: &str, plan_length: &str, payment_mode: &str) -> Option<i64> {
    raw_premium(amount, plan_length, payment_mode).map(round_half_up)
}

/// Outcome of a premium calculation as shown to the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "value")]
pub enum CalculationResult {
    Premium(i64),
    NotComputable,
}

impl CalculationResult {
    pub fn compute(amount: &str, plan_length: &str, payment_mode: &str) -> Self {
        calculate_premium(amount, plan_length, payment_mode).into()
    }

    pub fn premium(&self) -> Option<i64> {
        match self {
            CalculationResult::Premium(value) => Some(*value),
            CalculationResult::NotComputable => None,
        }
    }

    /// Display text, substituting `placeholder` when not computable
    pub fn display(&self, placeholder: &str) -> String {
        match self {
            CalculationResult::Premium(value) => value.to_string(),
            CalculationResult::NotComputable => placeholder.to_string(),
        }
    }
}

impl From<Option<i64>> for CalculationResult {
    fn from(value: Option<i64>) -> Self {
        match value {
            Some(premium) => CalculationResult::Premium(premium),
            None => CalculationResult::NotComputable,
        }
    }
}
