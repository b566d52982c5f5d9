use std::collections::HashMap;

use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::table::Table;

/// Display style options for output formatting
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DisplayStyle {
    /// Display data in a formatted table
    Table,
    /// Display data in JSON format
    Json,
    /// Display data in CSV format
    Csv,
}

/// Trait for types that can be displayed in terminal with different formats
pub trait TerminalDisplay {
    fn table_titles() -> Vec<&'static str>;
    fn table_row(self) -> Vec<String>;

    fn csv_titles() -> Vec<&'static str>;
    fn csv_row(self) -> HashMap<&'static str, String>;
}

pub fn display_json<T: Serialize>(o: T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&o)?);
    Ok(())
}

pub fn display_list<T: Serialize + TerminalDisplay>(
    list: Vec<T>,
    style: DisplayStyle,
    headless: bool,
    csv_titles: Option<String>,
) -> Result<()> {
    print!("{}", render_list(list, style, headless, csv_titles)?);
    Ok(())
}

pub fn render_list<T: Serialize + TerminalDisplay>(
    list: Vec<T>,
    style: DisplayStyle,
    headless: bool,
    csv_titles: Option<String>,
) -> Result<String> {
    match style {
        DisplayStyle::Table => {
            if list.is_empty() {
                return Ok(String::from("<empty list>\n"));
            }
            let mut table = Table::with_capacity(list.len(), headless);
            let titles = T::table_titles();
            table.add(titles.iter().map(|s| s.to_string()).collect())?;

            for item in list {
                table.add(item.table_row())?;
            }

            Ok(table.render())
        }
        DisplayStyle::Csv => {
            let mut titles = T::csv_titles();
            if let Some(filter) = csv_titles {
                let filter = filter.split(',').collect::<Vec<_>>();
                titles = titles
                    .iter()
                    .filter(|t| filter.contains(t))
                    .copied()
                    .collect();
            }
            if titles.is_empty() {
                bail!("No csv column to display, available: {:?}", T::csv_titles());
            }

            let mut out = String::new();
            if !headless {
                out.push_str(&titles.join(","));
                out.push('\n');
            }
            for item in list {
                let mut row = item.csv_row();
                let mut values = Vec::with_capacity(titles.len());
                for title in titles.iter() {
                    let value = row.remove(*title).unwrap_or_default();
                    values.push(csv_escape(value));
                }
                out.push_str(&values.join(","));
                out.push('\n');
            }
            Ok(out)
        }
        DisplayStyle::Json => {
            let mut json = serde_json::to_string_pretty(&list)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn csv_escape(value: String) -> String {
    if value.contains([',', '"', '\n']) {
        return format!("\"{}\"", value.replace('"', "\"\""));
    }
    value
}
