use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::check::CheckLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_timestamp;

/// Record a Check-In/Check-Out event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { id, action, at } = cmd {
        //
        // 1. Parse action code ("in" / "out")
        //
        let action_final = Action::from_code(action).ok_or_else(|| {
            AppError::InvalidAction(format!(
                "Invalid action '{}'. Use 'in' (Check-In) or 'out' (Check-Out).",
                action
            ))
        })?;

        //
        // 2. Parse timestamp override (optional, test hook)
        //
        let at_parsed = parse_optional_timestamp(at.as_ref())?;

        //
        // 3. Open DB and execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;

        let record = CheckLogic::apply(&mut pool, id, action_final, at_parsed)?;

        success(format!(
            "Attendance for {} has been recorded. Action: {}.",
            record.full_name,
            action_final.to_db_str()
        ));
    }

    Ok(())
}
