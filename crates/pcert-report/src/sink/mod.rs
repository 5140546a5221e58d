//! Tabular output sinks
//!
//! A sink receives finished [`Table`]s one by one and persists them. The
//! consolidation step never knows which format it is writing.

mod csv;
mod xlsx;

pub use self::csv::CsvSink;
pub use self::xlsx::XlsxSink;

use crate::error::ReportError;
use crate::table::Table;
use tracing::info;

/// Destination for output tables
pub trait TableSink {
    /// Write one table
    fn write_table(&mut self, table: &Table) -> Result<(), ReportError>;

    /// Flush everything written so far
    fn finish(&mut self) -> Result<(), ReportError>;
}

/// Write every table in order, then finish the sink
pub fn write_report(sink: &mut dyn TableSink, tables: &[Table]) -> Result<(), ReportError> {
    for table in tables {
        sink.write_table(table)?;
    }
    sink.finish()?;

    info!("Wrote {} table(s)", tables.len());
    Ok(())
}
