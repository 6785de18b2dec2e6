//! Two-column tables for script output.

use std::fmt::Display;

/// Ordered label/value rows rendered as an aligned table.
#[derive(Debug)]
pub struct Report {
    header: String,
    rows: Vec<(String, String)>,
}

impl Report {
    pub fn new(header: impl Into<String>) -> Self {
        Report { header: header.into(), rows: vec![] }
    }

    /// Appends a row, keeping insertion order.
    pub fn with(mut self, label: impl Into<String>, value: impl Display) -> Self {
        self.rows.push((label.into(), value.to_string()));
        self
    }

    fn label_max_len(&self) -> usize {
        self.rows
            .iter()
            .map(|(label, _)| label.len())
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or_default()
    }

    fn value_max_len(&self) -> usize {
        self.rows
            .iter()
            .map(|(_, value)| value.len())
            .max()
            .unwrap_or_default()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width1 = self.label_max_len();
        let width2 = self.value_max_len();

        writeln!(f, "| {:<width1$} | {:<width2$} |", self.header, "")?;
        writeln!(f, "| {:->width1$} | {:->width2$} |", "", "")?;
        for (label, value) in &self.rows {
            writeln!(f, "| {label:<width1$} | {value:<width2$} |")?;
        }

        Ok(())
    }
}
