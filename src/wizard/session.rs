//! Agent session: the login gate, the live form and the wizard position
//!
//! A session is an explicit value owned by whoever drives the UI. Nothing
//! here is global, and nothing outlives the session.

use chrono::NaiveDate;
use log::{debug, info};

use super::state::{WizardEvent, WizardStep};
use crate::config::CalculatorConfig;
use crate::error::{QuoteResult, SessionError};
use crate::form::{FormField, QuoteForm};
use crate::report::QuoteReport;

#[derive(Debug, Clone)]
pub struct Session {
    config: CalculatorConfig,
    as_of: NaiveDate,
    /// Logged-in agent username; `None` while locked
    agent: Option<String>,
    form: QuoteForm,
    step: WizardStep,
    /// Set while the result view is open
    report: Option<QuoteReport>,
}

impl Session {
    /// New locked session. Ages are computed as of `as_of`.
    pub fn new(config: CalculatorConfig, as_of: NaiveDate) -> Self {
        let form = QuoteForm::with_date_format(as_of, config.date_format.clone());
        Self {
            config,
            as_of,
            agent: None,
            form,
            step: WizardStep::default(),
            report: None,
        }
    }

    /// Unlock with any two non-empty values. No credential check is made;
    /// the username pre-fills the form's agent name.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        if username.is_empty() || password.is_empty() {
            return Err(SessionError::MissingCredentials);
        }
        info!("agent {} logged in", username);
        self.agent = Some(username.to_string());
        self.form.set_field(FormField::AgentName, username);
        Ok(())
    }

    /// Lock the session and discard all form state
    pub fn logout(&mut self) {
        if let Some(agent) = self.agent.take() {
            info!("agent {} logged out", agent);
        }
        self.form = QuoteForm::with_date_format(self.as_of, self.config.date_format.clone());
        self.step = WizardStep::default();
        self.report = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.agent.is_some()
    }

    pub fn agent(&self) -> Option<&str> {
        self.agent.as_deref()
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn form(&self) -> &QuoteForm {
        &self.form
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Report shown in the result view, if it is open
    pub fn report(&self) -> Option<&QuoteReport> {
        self.report.as_ref()
    }

    /// Fields on the current step
    pub fn current_fields(&self) -> Vec<FormField> {
        self.step.fields(self.form.product())
    }

    fn ensure_logged_in(&self) -> Result<(), SessionError> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(SessionError::NotLoggedIn)
        }
    }

    /// Edit a form field. An open result view is rebuilt from the edited form.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), SessionError> {
        self.ensure_logged_in()?;
        self.form.set_field(field, value);
        if self.report.is_some() {
            debug!("rebuilding open report after {:?} edit", field);
            self.report = Some(QuoteReport::build(&self.form, &self.config));
        }
        Ok(())
    }

    fn transition(&mut self, event: WizardEvent) -> QuoteResult<WizardStep> {
        self.ensure_logged_in()?;
        let next = self.step.apply(event)?;
        debug!("wizard {:?} --{}--> {:?}", self.step, event.name(), next);
        self.step = next;
        Ok(next)
    }

    pub fn next(&mut self) -> QuoteResult<()> {
        self.transition(WizardEvent::Next)?;
        Ok(())
    }

    /// Step back. Form data is kept; leaving the result view closes it.
    pub fn back(&mut self) -> QuoteResult<()> {
        self.transition(WizardEvent::Back)?;
        self.report = None;
        Ok(())
    }

    /// Calculate the premium and open the result view
    pub fn submit(&mut self) -> QuoteResult<&QuoteReport> {
        self.transition(WizardEvent::Submit)?;
        let report = QuoteReport::build(&self.form, &self.config);
        info!(
            "quote for {:?}: premium {}",
            report.input.customer_name, report.calculated_value
        );
        Ok(&*self.report.insert(report))
    }

    /// Dismiss the result view, returning to step 2
    pub fn close(&mut self) -> QuoteResult<()> {
        self.transition(WizardEvent::Close)?;
        self.report = None;
        Ok(())
    }
}
