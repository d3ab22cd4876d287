//! Premium Calculator CLI
//!
//! Drives one agent session from command-line arguments and renders the quote

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use premium_calculator::catalog::{payment_mode_options, product_options, resolve_options, Product};
use premium_calculator::form::FormField;
use premium_calculator::premium::parse_as_of;
use premium_calculator::report::renderer_for;
use premium_calculator::{CalculatorConfig, ReportFormat, Session};

#[derive(Debug, Parser)]
#[command(name = "premium-calc", version, about = "Insurance premium calculator for agents")]
struct Cli {
    /// JSON configuration file (report title, placeholder, date format)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in, fill both form steps, submit and render the quote
    Quote(QuoteArgs),
    /// Show the year plan and calculation mode choices for a product
    Options {
        /// Product code: 0 Double Flexi, 1 Flexi Health, 2 STE, 3 Student Life
        #[arg(long, default_value = "")]
        product: String,
        /// Student Life term code: 0 Premium Term, 1 Policy Term
        #[arg(long)]
        term: Option<String>,
    },
}

#[derive(Debug, Args)]
struct QuoteArgs {
    /// Agent username
    #[arg(long)]
    username: String,
    /// Agent password (not verified)
    #[arg(long)]
    password: String,
    /// Agent name on the report; defaults to the username
    #[arg(long)]
    agent_name: Option<String>,
    #[arg(long, default_value = "")]
    customer: String,
    /// Date of birth in the configured date format
    #[arg(long, default_value = "")]
    dob: String,
    #[arg(long, default_value = "")]
    product: String,
    #[arg(long, default_value = "")]
    term: String,
    /// 0 Annual, 1 Monthly, 2 Quarterly, 3 Semi-Annual
    #[arg(long, default_value = "")]
    payment_mode: String,
    /// sa or ap
    #[arg(long, default_value = "")]
    calculation_mode: String,
    /// Year plan in years
    #[arg(long, default_value = "")]
    year_plan: String,
    /// Sum insured
    #[arg(long, default_value = "")]
    amount: String,
    /// Date ages are computed against; defaults to today
    #[arg(long)]
    as_of: Option<String>,
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    format: ReportFormat,
    /// Write the document here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = CalculatorConfig::load(cli.config.as_deref())
        .context("failed to load calculator config")?;

    match cli.command {
        Command::Quote(args) => run_quote(args, config),
        Command::Options { product, term } => {
            print_options(&product, term.as_deref());
            Ok(())
        }
    }
}

fn run_quote(args: QuoteArgs, config: CalculatorConfig) -> Result<()> {
    let as_of = match &args.as_of {
        Some(value) => parse_as_of(value, &config.date_format)?,
        None => chrono::Local::now().date_naive(),
    };

    let mut session = Session::new(config, as_of);
    session
        .login(&args.username, &args.password)
        .context("login failed")?;

    if let Some(agent_name) = &args.agent_name {
        session.set_field(FormField::AgentName, agent_name)?;
    }
    session.set_field(FormField::CustomerName, &args.customer)?;
    session.set_field(FormField::Dob, &args.dob)?;
    session.set_field(FormField::Product, &args.product)?;
    session.next()?;

    session.set_field(FormField::Term, &args.term)?;
    session.set_field(FormField::PaymentMode, &args.payment_mode)?;
    session.set_field(FormField::CalculationMode, &args.calculation_mode)?;
    session.set_field(FormField::YearPlan, &args.year_plan)?;
    session.set_field(FormField::Amount, &args.amount)?;
    let report = session.submit()?;

    let renderer = renderer_for(args.format);
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("unable to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            renderer.render(report, &mut out)?;
            out.flush()?;
            log::info!("report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            renderer.render(report, &mut out)?;
        }
    }
    Ok(())
}

fn print_options(product: &str, term: Option<&str>) {
    let resolved = resolve_options(product, term);
    let product_label = Product::from_code(product)
        .map(|p| p.label())
        .unwrap_or("(no product)");

    println!("Product: {}", product_label);
    let plans: Vec<&str> = resolved.plan_options.entries().iter().map(|e| e.label.as_str()).collect();
    println!("  Year Plan:        {}", plans.join(", "));
    let modes: Vec<&str> = resolved.mode_options.entries().iter().map(|e| e.label.as_str()).collect();
    println!("  Calculation Mode: {}", modes.join(", "));

    println!();
    println!("Products:");
    for entry in product_options().entries().iter().filter(|e| !e.code.is_empty()) {
        println!("  {:>2}  {}", entry.code, entry.label);
    }
    println!("Payment Modes:");
    for entry in payment_mode_options().entries().iter().filter(|e| !e.code.is_empty()) {
        println!("  {:>2}  {}", entry.code, entry.label);
    }
}
