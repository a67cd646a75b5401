use std::fmt::Write as _;

use tickerdash_core::{Bar, Envelope};

use crate::cli::OutputFormat;
use crate::commands::ReportData;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<ReportData>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Ndjson => {
            let payload = serde_json::to_string(envelope)?;
            println!("{payload}");
        }
        OutputFormat::Table => print!("{}", render_table(envelope)),
    }

    Ok(())
}

/// Human-readable report: metrics, then the history table, then diagnostics.
pub fn render_table(envelope: &Envelope<ReportData>) -> String {
    let data = &envelope.data;
    let mut out = String::new();

    let _ = writeln!(out, "{}", data.symbol);

    let mut metrics = Vec::new();
    if let Some(quote) = &data.quote {
        metrics.push((String::from("Current Price"), quote.price));
    }
    if let Some(summary) = &data.summary {
        let unit = data.interval.unwrap_or_default().unit_label();
        metrics.push((String::from("Latest Close"), summary.latest_close));
        metrics.push((period_label(summary.count, unit, "High"), summary.period_high));
        metrics.push((period_label(summary.count, unit, "Low"), summary.period_low));
    }
    let label_width = metrics.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in &metrics {
        let _ = writeln!(out, "{label:<label_width$} : {}", money(*value));
    }

    if !data.bars.is_empty() {
        let interval = data.interval.unwrap_or_default();
        let _ = writeln!(out);
        let _ = writeln!(out, "Historical Data ({interval})");
        out.push_str(&bars_table(&data.bars));
    }

    if !envelope.meta.warnings.is_empty() {
        let _ = writeln!(out, "warnings:");
        for warning in &envelope.meta.warnings {
            let _ = writeln!(out, "  - {warning}");
        }
    }

    if !envelope.errors.is_empty() {
        let _ = writeln!(out, "errors:");
        for error in &envelope.errors {
            let _ = writeln!(out, "  - {}: {}", error.code, error.message);
        }
    }

    out
}

fn period_label(count: usize, unit: &str, kind: &str) -> String {
    format!("{count}-{unit} {kind}")
}

fn bars_table(bars: &[Bar]) -> String {
    let header = ["Date", "Open", "High", "Low", "Close", "Volume"];
    let rows: Vec<[String; 6]> = bars
        .iter()
        .map(|bar| {
            [
                bar.date.to_string(),
                money(bar.open),
                money(bar.high),
                money(bar.low),
                money(bar.close),
                grouped(bar.volume),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let header_line = header
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, width))| align(cell, width, column))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{header_line}");
    let rule = widths.map(|width| "-".repeat(width)).join("  ");
    let _ = writeln!(out, "{rule}");

    for row in &rows {
        let line = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(column, (cell, width))| align(cell, width, column))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{line}");
    }
    out
}

// Date is left-aligned, numbers right-aligned.
fn align(cell: &str, width: usize, column: usize) -> String {
    if column == 0 {
        format!("{cell:<width$}")
    } else {
        format!("{cell:>width$}")
    }
}

pub(crate) fn money(value: f64) -> String {
    format!("${value:.2}")
}

pub(crate) fn grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}
