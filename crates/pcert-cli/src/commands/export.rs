//! Export command implementation.

use crate::cli::ExportArgs;
use crate::commands::consolidate_inputs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use chrono::{Local, NaiveDateTime};
use pcert_report::{output_file_name, write_report, CsvSink, Table, XlsxSink};
use std::fs;
use std::path::{Path, PathBuf};

/// Execute the export command.
pub fn execute_export(args: ExportArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let consolidated = consolidate_inputs(&args.inputs, config, formatter)?;
    let tables = consolidated.tables(&config.report);

    let dir = args
        .output
        .or_else(|| config.settings.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let now = Local::now().naive_local();
    let written = export_tables(&tables, &dir, args.csv, config, now)?;

    match formatter.format() {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "output": written.display().to_string(),
                "tables": tables.len(),
                "people": consolidated.people.len(),
                "projects": consolidated.registry.len(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Table => {
            println!(
                "{}",
                formatter.success(&format!(
                    "Wrote {} table(s) for {} person(s) to {}",
                    tables.len(),
                    consolidated.people.len(),
                    written.display()
                ))
            );
        }
        OutputFormat::Quiet => println!("{}", written.display()),
    }

    Ok(())
}

/// Write tables under `dir` and return the workbook file or CSV directory.
///
/// The output name is derived from the configured prefix and `now`.
pub fn export_tables(
    tables: &[Table],
    dir: &Path,
    csv: bool,
    config: &Config,
    now: NaiveDateTime,
) -> Result<PathBuf> {
    let prefix = &config.report.output_prefix;
    fs::create_dir_all(dir)?;

    if csv {
        let target = dir.join(output_file_name(prefix, now, ""));
        let mut sink = CsvSink::new(&target).with_bom(config.settings.csv_bom);
        write_report(&mut sink, tables)?;
        Ok(target)
    } else {
        let target = dir.join(output_file_name(prefix, now, "xlsx"));
        let mut sink = XlsxSink::new(&target);
        write_report(&mut sink, tables)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(15, 7, 0)
            .unwrap()
    }

    fn tables() -> Vec<Table> {
        let mut table = Table::new("과제정보", &["과제번호"]);
        table.push_row(vec!["P001".to_string()]);
        vec![table]
    }

    #[test]
    fn test_workbook_export_name() {
        let temp = TempDir::new().unwrap();
        let written = export_tables(&tables(), temp.path(), false, &Config::default(), now()).unwrap();

        assert_eq!(written, temp.path().join("연구과제_참여이력_통합_20250304_1507.xlsx"));
        assert!(written.is_file());
    }

    #[test]
    fn test_csv_export_writes_a_directory() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.settings.csv_bom = false;

        let written = export_tables(&tables(), temp.path(), true, &config, now()).unwrap();

        assert!(written.is_dir());
        let content = fs::read_to_string(written.join("과제정보.csv")).unwrap();
        assert_eq!(content, "과제번호\nP001\n");
    }
}
