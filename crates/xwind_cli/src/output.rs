//! Table and JSON rendering of command results.

use serde::Serialize;

use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// A box-drawn text table.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given column headers.
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render empty.
    pub fn push(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render with one space of padding around each cell.
    pub fn render(&self) -> String {
        let widths = self.widths();

        let mut out = rule(&widths, "┌", "┬", "┐");
        out.push_str(&line(&widths, self.headers.iter().copied()));
        out.push_str(&rule(&widths, "├", "┼", "┤"));
        for row in &self.rows {
            out.push_str(&line(&widths, row.iter().map(String::as_str)));
        }
        out.push_str(&rule(&widths, "└", "┴", "┘"));
        out
    }
}

fn rule(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(mid), right)
}

fn line<'a>(widths: &[usize], mut cells: impl Iterator<Item = &'a str>) -> String {
    let padded: Vec<String> = widths
        .iter()
        .map(|w| format!(" {:<width$} ", cells.next().unwrap_or(""), width = *w))
        .collect();
    format!("│{}│\n", padded.join("│"))
}

/// Formats numbers and prints results in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    format: OutputFormat,
    precision: usize,
}

impl Output {
    /// Output settings from the resolved configuration.
    pub fn from_config(config: &CliConfig) -> Self {
        Self {
            format: config.format,
            precision: config.precision,
        }
    }

    /// A number with the configured decimal places.
    pub fn number(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }

    /// An optional number, `-` when absent.
    pub fn optional(&self, value: Option<f64>) -> String {
        value.map_or_else(|| "-".to_string(), |v| self.number(v))
    }

    /// Render `value` as JSON or `table` as text.
    pub fn render<T: Serialize>(&self, value: &T, table: &Table) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)? + "\n"),
            OutputFormat::Table => Ok(table.render()),
        }
    }

    /// Print the rendered result to stdout.
    pub fn emit<T: Serialize>(&self, value: &T, table: &Table) -> Result<()> {
        print!("{}", self.render(value, table)?);
        Ok(())
    }
}
