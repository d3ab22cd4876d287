//! Error types
//!
//! The quoting rules themselves never fail. Errors only arise at the edges:
//! the session gate, wizard transitions, and reading or writing files.

use thiserror::Error;

use crate::wizard::WizardStep;

/// Session gate failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("agent username and password must both be filled in")]
    MissingCredentials,

    #[error("not logged in")]
    NotLoggedIn,
}

/// Rejected wizard transition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot {event} from {from:?}")]
pub struct WizardError {
    pub from: WizardStep,
    pub event: &'static str,
}

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error("invalid date {value:?}: expected format {format}")]
    InvalidDate { value: String, format: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type QuoteResult<T> = Result<T, QuoteError>;
