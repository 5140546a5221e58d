//! Directory-of-CSV-files sink

use super::TableSink;
use crate::error::ReportError;
use crate::naming::{sanitize_file_stem, UniqueNames, MAX_FILE_STEM_CHARS};
use crate::table::Table;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const FALLBACK_FILE_STEM: &str = "성명없음";

/// Writes each table to `<dir>/<name>.csv`
pub struct CsvSink {
    dir: PathBuf,
    bom: bool,
    names: UniqueNames,
    written: Vec<PathBuf>,
}

impl CsvSink {
    /// Create a sink writing into `dir`, created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            bom: false,
            names: UniqueNames::default(),
            written: Vec::new(),
        }
    }

    /// Prefix every file with a UTF-8 byte-order mark
    pub fn with_bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }

    /// Files written so far, in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl TableSink for CsvSink {
    fn write_table(&mut self, table: &Table) -> Result<(), ReportError> {
        fs::create_dir_all(&self.dir)?;

        let base = sanitize_file_stem(&table.name, FALLBACK_FILE_STEM);
        let stem = self.names.claim(&base, MAX_FILE_STEM_CHARS);
        let path = self.dir.join(format!("{}.csv", stem));

        let mut file = File::create(&path)?;
        if self.bom {
            file.write_all(UTF8_BOM)?;
        }

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        debug!("Wrote {:?}: {} row(s)", path, table.len());
        self.written.push(path);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        Ok(())
    }
}
