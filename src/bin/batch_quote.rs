//! Quote every customer in a CSV file
//!
//! Usage: batch_quote <quotes.csv> [output.csv] [as-of date]
//!
//! Input columns: AgentName,CustomerName,DOB,Product,Term,PaymentMode,
//! CalculationMode,YearPlan,Amount. Writes one report row per input.

use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use anyhow::{bail, Context, Result};

use premium_calculator::form::load_form_inputs;
use premium_calculator::premium::parse_as_of;
use premium_calculator::report::write_reports_csv;
use premium_calculator::{CalculationResult, CalculatorConfig, QuoteRunner};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(input_path) = args.next() else {
        bail!("usage: batch_quote <quotes.csv> [output.csv] [as-of date]");
    };
    let output_path = args.next().unwrap_or_else(|| "quote_reports.csv".to_string());

    let config = CalculatorConfig::default();
    let as_of = match args.next() {
        Some(value) => parse_as_of(&value, &config.date_format)?,
        None => chrono::Local::now().date_naive(),
    };

    let start = Instant::now();
    println!("Loading quote inputs from {}...", input_path);
    let inputs = load_form_inputs(&input_path)
        .with_context(|| format!("failed to load {}", input_path))?;
    println!("Loaded {} inputs in {:?}", inputs.len(), start.elapsed());

    let runner = QuoteRunner::new(config, as_of);
    let quote_start = Instant::now();
    let reports = runner.run_batch(&inputs);
    println!("Quoted as of {} in {:?}", as_of, quote_start.elapsed());

    let file = File::create(&output_path)
        .with_context(|| format!("failed to create {}", output_path))?;
    write_reports_csv(&reports, BufWriter::new(file))?;
    println!("Output written to {}", output_path);

    let computable: Vec<i64> = reports.iter().filter_map(|r| r.result.premium()).collect();
    let unavailable = reports
        .iter()
        .filter(|r| r.result == CalculationResult::NotComputable)
        .count();

    println!("\nBatch Summary:");
    println!("  Quotes:          {}", reports.len());
    println!("  Not computable:  {}", unavailable);
    if !computable.is_empty() {
        let total: i64 = computable.iter().sum();
        println!("  Total premium:   {}", total);
        println!("  Mean premium:    {:.2}", total as f64 / computable.len() as f64);
    }
    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
