//! Document renderers for quote reports

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::QuoteReport;
use crate::error::QuoteResult;

/// Turns a finalized report into a document
pub trait DocumentRenderer {
    fn render(&self, report: &QuoteReport, out: &mut dyn Write) -> QuoteResult<()>;
}

/// Output format selectable from the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain-text table with title and footer
    #[default]
    Table,
    /// Header row plus one value row
    Csv,
    /// The full report record
    Json,
}

pub fn renderer_for(format: ReportFormat) -> Box<dyn DocumentRenderer> {
    match format {
        ReportFormat::Table => Box::new(TextTableRenderer),
        ReportFormat::Csv => Box::new(CsvRenderer),
        ReportFormat::Json => Box::new(JsonRenderer { pretty: true }),
    }
}

/// Fixed-width text table, the terminal stand-in for the result modal
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTableRenderer;

impl DocumentRenderer for TextTableRenderer {
    fn render(&self, report: &QuoteReport, out: &mut dyn Write) -> QuoteResult<()> {
        let columns = report.columns();
        let widths: Vec<usize> = columns
            .iter()
            .map(|c| c.header.chars().count().max(c.value.chars().count()))
            .collect();
        let rule_len = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);

        writeln!(out, "{}", report.title)?;
        writeln!(out, "{}", "=".repeat(report.title.chars().count()))?;

        let header: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c.header, width = *w))
            .collect();
        writeln!(out, "{}", header.join(" | "))?;
        writeln!(out, "{}", "-".repeat(rule_len))?;

        let values: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c.value, width = *w))
            .collect();
        writeln!(out, "{}", values.join(" | "))?;

        writeln!(out)?;
        writeln!(out, "{}", report.footer())?;
        Ok(())
    }
}

/// Single-quote CSV: the displayed columns only
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl DocumentRenderer for CsvRenderer {
    fn render(&self, report: &QuoteReport, out: &mut dyn Write) -> QuoteResult<()> {
        let columns = report.columns();
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(columns.iter().map(|c| c.header))?;
        writer.write_record(columns.iter().map(|c| c.value.as_str()))?;
        writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl DocumentRenderer for JsonRenderer {
    fn render(&self, report: &QuoteReport, out: &mut dyn Write) -> QuoteResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, report)?;
        } else {
            serde_json::to_writer(&mut *out, report)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// Write many reports as one CSV. Every row carries the Term column so the
/// rows line up whatever the product.
pub fn write_reports_csv<W: Write>(reports: &[QuoteReport], out: W) -> QuoteResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    let Some(first) = reports.first() else {
        return Ok(());
    };
    writer.write_record(first.all_columns().iter().map(|c| c.header))?;
    for report in reports {
        writer.write_record(report.all_columns().iter().map(|c| c.value.as_str()))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;
    use crate::form::{FormField, QuoteForm};
    use chrono::NaiveDate;

    fn sample_report(product: &str) -> QuoteReport {
        let mut form = QuoteForm::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        form.set_field(FormField::AgentName, "Ana");
        form.set_field(FormField::CustomerName, "Ben");
        form.set_field(FormField::Product, product);
        form.set_field(FormField::PaymentMode, "0");
        form.set_field(FormField::YearPlan, "10");
        form.set_field(FormField::Amount, "12000");
        QuoteReport::build(&form, &CalculatorConfig::default())
    }

    fn render_to_string(renderer: &dyn DocumentRenderer, report: &QuoteReport) -> String {
        let mut buf = Vec::new();
        renderer.render(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_table() {
        let text = render_to_string(&TextTableRenderer, &sample_report("0"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Insurance Calculation Report");
        assert!(lines[2].starts_with("Agent By | Customer Name"));
        assert!(lines[4].starts_with("Ana      | Ben"));
        assert!(lines[4].trim_end().ends_with("1200"));
        assert_eq!(lines.last(), Some(&"Agent Name: Ana"));
    }

    #[test]
    fn test_csv() {
        let text = render_to_string(&CsvRenderer, &sample_report("0"));
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Agent By,Customer Name,DOB,Age,Product,Payment Mode,Calculation Mode,Year Plan,Amount,Calculated Value")
        );
        assert_eq!(lines.next(), Some("Ana,Ben,,,Double Flexi,Annual,,10,12000,1200"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_json() {
        let text = render_to_string(&JsonRenderer { pretty: false }, &sample_report("0"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["calculatedValue"], "1200");
        assert_eq!(value["result"]["status"], "premium");
        assert_eq!(value["result"]["value"], 1200);
        assert_eq!(value["labels"]["product"], "Double Flexi");
        assert_eq!(value["input"]["yearPlan"], "10");
    }

    #[test]
    fn test_batch_csv_always_has_term() {
        let reports = vec![sample_report("0"), sample_report("2")];
        let mut buf = Vec::new();
        write_reports_csv(&reports, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains(",Term,Calculated Value"));
        assert!(lines[2].contains("STE"));
    }

    #[test]
    fn test_batch_csv_empty() {
        let mut buf = Vec::new();
        write_reports_csv(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_renderer_for() {
        let report = sample_report("1");
        let json = render_to_string(renderer_for(ReportFormat::Json).as_ref(), &report);
        assert!(json.contains("\"Flexi Health\""));
    }
}
