//! Summary text and per-year table output.

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::{ProjectionSummary, YearlySnapshot};
use crate::format::{CurrencyFormatter, escape_markup};

pub const TABLE_HEADERS: [&str; 4] = ["Year", "Balance", "Contribution", "Interest"];

/// One table row with its monetary columns already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub year: u32,
    pub balance: String,
    pub contribution: String,
    pub interest: String,
}

impl TableRow {
    pub fn from_snapshot(snapshot: &YearlySnapshot, formatter: &CurrencyFormatter) -> Self {
        Self {
            year: snapshot.year,
            balance: formatter.format(snapshot.balance),
            contribution: formatter.format(snapshot.cumulative_contribution),
            interest: formatter.format(snapshot.interest_earned),
        }
    }
}

/// Receives table rows in year order.
pub trait RowSink {
    fn push_row(&mut self, row: TableRow);
}

impl RowSink for Vec<TableRow> {
    fn push_row(&mut self, row: TableRow) {
        self.push(row);
    }
}

pub fn write_rows<S: RowSink + ?Sized>(
    sink: &mut S,
    snapshots: &[YearlySnapshot],
    formatter: &CurrencyFormatter,
) {
    for snapshot in snapshots {
        sink.push_row(TableRow::from_snapshot(snapshot, formatter));
    }
}

/// `<tr>` rows for a table body.
#[derive(Debug, Default)]
pub struct HtmlTableBody {
    html: String,
}

impl HtmlTableBody {
    pub fn into_html(self) -> String {
        self.html
    }
}

impl RowSink for HtmlTableBody {
    fn push_row(&mut self, row: TableRow) {
        let _ = write!(
            self.html,
            "<tr><td class=\"year\">{}</td><td class=\"money\">{}</td>\
             <td class=\"money\">{}</td><td class=\"money\">{}</td></tr>",
            row.year,
            escape_markup(&row.balance),
            escape_markup(&row.contribution),
            escape_markup(&row.interest)
        );
    }
}

/// Right-aligned plain-text table for terminals.
#[derive(Debug, Default)]
pub struct TextTable {
    rows: Vec<TableRow>,
}

impl RowSink for TextTable {
    fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }
}

impl TextTable {
    pub fn render(&self) -> String {
        let cells: Vec<[String; 4]> = self
            .rows
            .iter()
            .map(|r| {
                [
                    r.year.to_string(),
                    r.balance.clone(),
                    r.contribution.clone(),
                    r.interest.clone(),
                ]
            })
            .collect();

        let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let header = TABLE_HEADERS.map(str::to_string);
        for row in std::iter::once(&header).chain(&cells) {
            let line: Vec<String> = row
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(idx, (cell, width))| {
                    let pad = " ".repeat(width - cell.chars().count());
                    if idx == 0 {
                        format!("{cell}{pad}")
                    } else {
                        format!("{pad}{cell}")
                    }
                })
                .collect();
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        }
        out
    }
}

/// The six summary strings: the headline figures and the chart caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDisplay {
    pub final_balance: String,
    pub total_contribution: String,
    pub total_interest: String,
    pub chart_balance: String,
    pub chart_principal_and_contribution: String,
    pub chart_interest: String,
}

impl SummaryDisplay {
    pub fn new(summary: &ProjectionSummary, formatter: &CurrencyFormatter) -> Self {
        Self {
            final_balance: formatter.format(summary.final_balance),
            total_contribution: formatter.format(summary.total_contribution),
            total_interest: formatter.format(summary.total_interest),
            chart_balance: formatter.format(summary.final_balance),
            chart_principal_and_contribution: formatter
                .format(summary.principal_plus_contribution),
            chart_interest: formatter.format(summary.total_interest),
        }
    }
}
