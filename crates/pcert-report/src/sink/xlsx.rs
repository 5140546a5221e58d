//! Spreadsheet workbook sink

use super::TableSink;
use crate::error::ReportError;
use crate::naming::{sanitize_sheet_name, UniqueNames, MAX_SHEET_NAME_CHARS};
use crate::table::Table;
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};
use tracing::debug;

const FALLBACK_SHEET_NAME: &str = "성명없음";

/// Writes each table to its own worksheet of one workbook
///
/// Sheet names are sanitized and made unique. The workbook is saved by
/// [`TableSink::finish`].
pub struct XlsxSink {
    path: PathBuf,
    workbook: Workbook,
    header_format: Format,
    names: UniqueNames,
}

impl XlsxSink {
    /// Create a sink that saves to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            workbook: Workbook::new(),
            header_format: Format::new().set_bold(),
            names: UniqueNames::default(),
        }
    }

    /// Where the workbook is saved
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSink for XlsxSink {
    fn write_table(&mut self, table: &Table) -> Result<(), ReportError> {
        let base = sanitize_sheet_name(&table.name, FALLBACK_SHEET_NAME);
        let sheet_name = self.names.claim(&base, MAX_SHEET_NAME_CHARS);

        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(&sheet_name)?;

        for (col, header) in table.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &self.header_format)?;
        }
        for (row, cells) in table.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                worksheet.write_string(row as u32 + 1, col as u16, cell)?;
            }
        }
        worksheet.autofit();

        debug!("Sheet '{}': {} row(s)", sheet_name, table.len());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.workbook.save(&self.path)?;
        debug!("Saved workbook {:?}", self.path);
        Ok(())
    }
}
