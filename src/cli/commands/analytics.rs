use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::build_daily_analytics;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use chrono::{Local, NaiveDate};

/// Show daily attendance analytics.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analytics { date, json } = cmd {
        //
        // 1. Resolve day (default: today)
        //
        let day = match date {
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(s.to_string()))?,
            None => Local::now().date_naive(),
        };

        //
        // 2. Fetch and aggregate
        //
        let mut pool = DbPool::new(&cfg.database)?;

        let stats = match build_daily_analytics(&mut pool, cfg, day)? {
            Some(s) => s,
            None => {
                // no events: placeholder, never zeroed statistics
                info(format!(
                    "No attendance data found for {} to generate analytics.",
                    day
                ));
                return Ok(());
            }
        };

        //
        // 3. Render
        //
        if *json {
            println!("{}", serde_json::to_string_pretty(&stats).map_err(|e| {
                AppError::Export(format!("Failed to serialize analytics: {}", e))
            })?);
            return Ok(());
        }

        println!("📊 Daily Attendance Analytics ({})\n", day);
        println!("Average Check-In Time:    {}", stats.avg_checkin_str());
        println!("Average Check-Out Time:   {}", stats.avg_checkout_str());
        println!();
        println!(
            "Rate of Time In Events:   {:.2}% (check-ins vs. all events)",
            stats.checkin_rate_pct
        );
        println!(
            "Rate of Time Out Events:  {:.2}% (check-outs vs. all events)",
            stats.checkout_rate_pct
        );
        println!();
        println!(
            "Percentage On-Time/Early: {:.2}% (checked in at or before {})",
            stats.on_time_pct, cfg.on_time_limit
        );
    }

    Ok(())
}
