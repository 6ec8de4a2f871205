use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::build_report;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::status_row::StatusRow;
use crate::utils::colors::{RESET, color_for_note};
use crate::utils::table::{Column, Table};

/// Show the attendance status report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { json, export } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let rows = build_report(&mut pool, cfg)?;

        if let Some(file) = export {
            export_csv(&rows, file)?;
            println!("✅ Report exported to {}", file);
            return Ok(());
        }

        if *json {
            println!("{}", serde_json::to_string_pretty(&rows).map_err(|e| {
                AppError::Export(format!("Failed to serialize report: {}", e))
            })?);
            return Ok(());
        }

        print_table(&rows);
    }

    Ok(())
}

fn print_table(rows: &[StatusRow]) {
    println!("📋 Attendance Status Report\n");

    let mut table = Table::new(vec![
        Column::new("ID", 10),
        Column::new("Name", 24),
        Column::new("Last Action", 26),
        Column::new("Hours Rendered", 14),
        Column::new("8-Hour Status", 14),
    ]);

    for row in rows {
        table.add_row(vec![
            row.faculty_id.clone(),
            row.full_name.clone(),
            row.last_action_str(),
            row.hours_str(),
            format!("{}{}{}", color_for_note(&row.note), row.note, RESET),
        ]);
    }

    println!("{}", table.render());
}

fn export_csv(rows: &[StatusRow], file: &str) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(file)
        .map_err(|e| AppError::Export(format!("Cannot create {}: {}", file, e)))?;

    wtr.write_record(["FacultyID", "FullName", "LastAction", "HoursRendered", "Note"])
        .map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        wtr.write_record([
            row.faculty_id.as_str(),
            row.full_name.as_str(),
            &row.last_action_str(),
            &row.hours_str(),
            row.note.as_str(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
