//! Check command implementation
//!
//! Validates every embedded coefficient table.

use serde::Serialize;
use tracing::{error, info};
use xwind_asce722::tables::check_all;

use super::Context;
use crate::output::Table;
use crate::{CliError, Result};

#[derive(Serialize)]
struct CheckRow {
    table: &'static str,
    cells: usize,
    error: Option<String>,
}

/// Run the check command
pub fn run(ctx: &Context) -> Result<()> {
    info!("Checking embedded tables...");

    let rows: Vec<CheckRow> = check_all()
        .into_iter()
        .map(|check| CheckRow {
            table: check.table,
            cells: check.cells,
            error: check.outcome.err().map(|e| e.to_string()),
        })
        .collect();

    let mut table = Table::new(&["table", "cells", "status"]);
    for row in &rows {
        table.push(vec![
            row.table.to_string(),
            row.cells.to_string(),
            row.error.clone().unwrap_or_else(|| "ok".to_string()),
        ]);
    }
    ctx.output.emit(&rows, &table)?;

    let failed = rows.iter().filter(|row| row.error.is_some()).count();
    if failed > 0 {
        for row in rows.iter().filter(|row| row.error.is_some()) {
            error!(table = row.table, "table failed validation");
        }
        return Err(CliError::TableCheck(failed));
    }

    info!("All {} tables valid", rows.len());
    Ok(())
}
