use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};

fn color_for_operation(op: &str) -> &'static str {
    match op {
        "register" => GREEN,
        "check" => CYAN,
        "init" => YELLOW,
        _ => RESET,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;

        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{} ({})", operation, target)
            };

            println!(
                "{:>4}: {} | {}{:<24}{} => {}",
                id,
                date,
                color_for_operation(&operation),
                op_target,
                RESET,
                message
            );
        }
    }

    Ok(())
}
