use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::register::RegisterLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Register a new faculty member.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register {
        id,
        name,
        department,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let record = RegisterLogic::apply(&mut pool, id, name, department)?;

        success(format!(
            "Faculty {} (ID: {}) added successfully.",
            record.full_name, record.id
        ));
    }

    Ok(())
}
