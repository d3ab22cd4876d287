//! AWS Lambda handler for quoting a single customer
//!
//! Accepts the agent credentials and the form values as JSON, drives a
//! session through both wizard steps and returns the resolved options, the
//! derived age, the premium and the rendered report.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

use premium_calculator::form::FormField;
use premium_calculator::premium::parse_as_of;
use premium_calculator::report::{DocumentRenderer, TextTableRenderer};
use premium_calculator::{
    CalculatorConfig, FormInput, QuoteError, QuoteReport, ResolvedOptions, Session,
};

/// Input for one quote
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Agent credentials; missing values are rejected by the login gate
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// Form values; missing fields are empty
    #[serde(default)]
    pub form: FormInput,

    /// Valuation date for the age (default: today)
    #[serde(default)]
    pub as_of: Option<String>,

    /// Report configuration overrides
    #[serde(default)]
    pub config: CalculatorConfig,
}

/// Output for one quote
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub agent: String,
    pub age: Option<i32>,
    pub options: ResolvedOptions,
    pub premium: Option<i64>,
    pub report: QuoteReport,
    /// Plain-text rendering of the report
    pub document: String,
    pub execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(&ErrorBody {
        error: message.to_string(),
    })?;
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body))?)
}

fn json_response(body: &QuoteResponse) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Drive a fresh session through both steps and submit
fn quote(request: QuoteRequest) -> Result<QuoteResponse, QuoteError> {
    let start = std::time::Instant::now();

    let as_of = match &request.as_of {
        Some(value) => parse_as_of(value, &request.config.date_format)?,
        None => chrono::Local::now().date_naive(),
    };

    let mut session = Session::new(request.config, as_of);
    session.login(&request.username, &request.password)?;

    let form = &request.form;
    if !form.agent_name.is_empty() {
        session.set_field(FormField::AgentName, &form.agent_name)?;
    }
    for field in [FormField::CustomerName, FormField::Dob, FormField::Product] {
        session.set_field(field, form.get(field))?;
    }
    session.next()?;
    for field in [
        FormField::Term,
        FormField::PaymentMode,
        FormField::CalculationMode,
        FormField::YearPlan,
        FormField::Amount,
    ] {
        session.set_field(field, form.get(field))?;
    }

    let report = session.submit()?.clone();
    let mut document = Vec::new();
    TextTableRenderer.render(&report, &mut document)?;

    Ok(QuoteResponse {
        agent: request.username,
        age: session.form().age(),
        options: session.form().options().clone(),
        premium: report.result.premium(),
        document: String::from_utf8_lossy(&document).into_owned(),
        report,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: QuoteRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    match quote(request) {
        Ok(response) => json_response(&response),
        Err(QuoteError::Session(e)) => error_response(401, &e.to_string()),
        Err(e @ QuoteError::InvalidDate { .. }) => error_response(400, &e.to_string()),
        Err(e) => {
            log::error!("quote failed: {}", e);
            error_response(500, &e.to_string())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
