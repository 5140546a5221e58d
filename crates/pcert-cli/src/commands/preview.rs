//! Preview command implementation.

use crate::cli::{PreviewArgs, ViewArg};
use crate::commands::consolidate_inputs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use pcert_domain::{ParticipationRow, PARTICIPATION_COLUMNS};
use pcert_report::{Consolidated, SheetNaming, Table};
use std::collections::HashSet;

const RESEARCHERS_TITLE: &str = "연구원정보";
const MERGED_TITLE: &str = "연구원정보_기간통합";

/// Execute the preview command.
pub fn execute_preview(args: PreviewArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let consolidated = consolidate_inputs(&args.inputs, config, formatter)?;
    let table = preview_table(&consolidated, args.view, args.person.as_deref(), &config.report)?;

    println!("{}", formatter.format_tables(&[table])?);

    Ok(())
}

/// Build the table shown for a view, optionally narrowed to one person.
///
/// For the project view, a person narrows the registry to the projects they
/// took part in.
pub fn preview_table(
    consolidated: &Consolidated,
    view: ViewArg,
    person: Option<&str>,
    naming: &SheetNaming,
) -> Result<Table> {
    let people = match person {
        Some(name) => {
            let sheets = consolidated
                .person(name)
                .ok_or_else(|| CliError::InvalidInput(format!("No rows for person '{}'", name)))?;
            vec![sheets]
        }
        None => consolidated.people.iter().collect(),
    };

    let table = match view {
        ViewArg::Projects => {
            let mut table = consolidated.registry_table(naming);
            if person.is_some() {
                let ids: HashSet<&str> = people
                    .iter()
                    .flat_map(|p| p.rows.iter())
                    .map(|row| row.record.project_id.as_str())
                    .collect();
                table.rows.retain(|cells| ids.contains(cells[0].as_str()));
            }
            table
        }
        ViewArg::Researchers => {
            participation_table(RESEARCHERS_TITLE, people.iter().flat_map(|p| p.rows.iter()))
        }
        ViewArg::Merged => {
            participation_table(MERGED_TITLE, people.iter().flat_map(|p| p.merged_rows.iter()))
        }
    };

    Ok(table)
}

fn participation_table<'a>(title: &str, rows: impl Iterator<Item = &'a ParticipationRow>) -> Table {
    let mut table = Table::new(title, &PARTICIPATION_COLUMNS);
    for row in rows {
        table.push_row(row.cells());
    }
    table
}
