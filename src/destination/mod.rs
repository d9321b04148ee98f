use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::table::Table;

/// Column holding the campus name the workbook is stored under.
pub const SITE_COLUMN: &str = "SEDE";

static MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The workbook data cannot name a destination.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    #[error("workbook has no data rows")]
    EmptyTable,
    #[error("first data row has no SEDE value")]
    MissingSite,
}

/// Where one upload lands in remote storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub folder_name: String,
    pub file_name: String,
    pub full_path: String,
}

/// Folder for the upcoming benefit month, `"<MonthName> - <Year>"`.
/// A December date resolves to January with the year unchanged; see
/// DESIGN.md before changing that.
pub fn next_month_folder(today: NaiveDate) -> String {
    let next_month = today.month() % 12 + 1;
    let name = MONTH_NAMES[next_month as usize - 1];
    format!("{} - {}", name, today.year())
}

pub fn workbook_file_name(site: &str) -> String {
    format!("{site}.xlsx")
}

/// Remote paths always use forward slashes, regardless of host OS.
pub fn remote_path(folder_name: &str, file_name: &str) -> String {
    format!("/{folder_name}/{file_name}")
}

/// Derive the destination from today's date and the first data row's
/// SEDE cell.
pub fn resolve(today: NaiveDate, table: &Table) -> Result<Destination, ResolveError> {
    if table.rows.is_empty() {
        return Err(ResolveError::EmptyTable);
    }

    let site = table
        .cell(0, SITE_COLUMN)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ResolveError::MissingSite)?;

    let folder_name = next_month_folder(today);
    let file_name = workbook_file_name(site);
    let full_path = remote_path(&folder_name, &file_name);

    Ok(Destination {
        folder_name,
        file_name,
        full_path,
    })
}
