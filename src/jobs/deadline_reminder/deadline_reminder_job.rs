use chrono::Utc;
use std::{sync::Arc, time::Duration};

use super::{
    schedule::DailySchedule,
    scanner::{DeadlineScanner, JobOutcome},
};
use crate::{constants::*, database::DeadlineStore};

/// Runs the deadline scan every day at 09:00 Manila time.
/// Runs happen one after another so two scans never overlap in this process.
pub async fn deadline_reminder_job(store: Arc<dyn DeadlineStore>) {
    tracing::debug!("initializing deadline reminder scheduler job");
    let schedule = DailySchedule::new(
        DEADLINE_JOB_HOUR,
        DEADLINE_JOB_MINUTE,
        DEADLINE_JOB_TIMEZONE,
    );
    let scanner = DeadlineScanner::new(store, DEADLINE_JOB_TIMEZONE);
    loop {
        let now = Utc::now();
        let next_run = match schedule.next_after(&now) {
            Ok(next_run) => next_run,
            Err(err) => {
                tracing::error!("Not able to compute next deadline job run: {:?}", err);
                return;
            }
        };
        let wait = (next_run - now).to_std().unwrap_or(Duration::ZERO);
        tracing::debug!("next deadline reminder run at {next_run}, sleeping {wait:?}");
        tokio::time::sleep(wait).await;
        let outcome = scanner.run(Utc::now()).await;
        log_outcome(&outcome);
    }
}

fn log_outcome(outcome: &JobOutcome) {
    match outcome {
        JobOutcome::Completed(summary) => tracing::info!(
            date = %summary.window.date,
            items_found = summary.items_found,
            items_skipped = summary.items_skipped,
            notifications = summary.notifications_issued,
            "deadline reminder job completed"
        ),
        JobOutcome::Failed(err) => tracing::error!("Error checking deadlines: {:?}", err),
    }
}
