//! Load quote inputs from a CSV file for batch quoting

use std::path::Path;

use csv::Reader;

use super::FormInput;
use crate::error::QuoteResult;

/// Raw CSV row. Every column is optional and defaults to empty.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct CsvRow {
    #[serde(rename = "AgentName")]
    agent_name: String,
    #[serde(rename = "CustomerName")]
    customer_name: String,
    #[serde(rename = "DOB")]
    dob: String,
    #[serde(rename = "Product")]
    product: String,
    #[serde(rename = "Term")]
    term: String,
    #[serde(rename = "PaymentMode")]
    payment_mode: String,
    #[serde(rename = "CalculationMode")]
    calculation_mode: String,
    #[serde(rename = "YearPlan")]
    year_plan: String,
    #[serde(rename = "Amount")]
    amount: String,
}

impl From<CsvRow> for FormInput {
    fn from(row: CsvRow) -> Self {
        FormInput {
            agent_name: row.agent_name,
            customer_name: row.customer_name,
            dob: row.dob,
            product: row.product,
            term: row.term,
            payment_mode: row.payment_mode,
            calculation_mode: row.calculation_mode,
            year_plan: row.year_plan,
            amount: row.amount,
        }
    }
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> QuoteResult<Vec<FormInput>> {
    let mut inputs = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        inputs.push(row.into());
    }
    Ok(inputs)
}

/// Load all quote inputs from a CSV file
pub fn load_form_inputs<P: AsRef<Path>>(path: P) -> QuoteResult<Vec<FormInput>> {
    let reader = Reader::from_path(path)?;
    let inputs = read_rows(reader)?;
    log::info!("loaded {} quote inputs", inputs.len());
    Ok(inputs)
}

/// Load quote inputs from any reader (e.g., string buffer, request body)
pub fn load_form_inputs_from_reader<R: std::io::Read>(reader: R) -> QuoteResult<Vec<FormInput>> {
    read_rows(Reader::from_reader(reader))
}
