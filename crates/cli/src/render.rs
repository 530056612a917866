//! Output rendering (text, table, JSON)

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use tabled::{Table, Tabled};

use locus_core::domain::{Report, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<Label>: <value>` lines
    Text,
    /// Pretty-printed JSON object
    Json,
    /// Label/value table
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Field")]
    label: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn text(report: &Report, color: bool) -> String {
    if !color {
        return report.to_string();
    }

    let mut out = String::new();
    for line in report.lines() {
        let label = format!("{}:", line.label);
        out.push_str(&format!("{} {}\n", label.as_str().bold(), line.value));
    }
    out
}

pub fn table(report: &Report) -> String {
    let rows: Vec<Row> = report
        .lines()
        .iter()
        .map(|line| Row {
            label: line.label.clone(),
            value: line.value.clone(),
        })
        .collect();

    format!("{}\n", Table::new(rows))
}

pub fn json(snapshot: &Snapshot) -> Result<String> {
    Ok(format!("{}\n", snapshot.to_json_pretty()?))
}
