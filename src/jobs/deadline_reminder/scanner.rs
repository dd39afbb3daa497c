use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use futures::future::join_all;
use std::sync::Arc;

use crate::{
    database::DeadlineStore,
    models::{DeadlineWindow, Item, Notification},
};

/// Result of one scan. Failures are data here so the scheduler keeps running.
#[derive(Debug)]
pub enum JobOutcome {
    Completed(ScanSummary),
    Failed(anyhow::Error),
}

impl JobOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub window: DeadlineWindow,
    pub items_found: usize,
    pub items_skipped: usize,
    pub notifications_issued: usize,
}

pub struct DeadlineScanner {
    store: Arc<dyn DeadlineStore>,
    tz: Tz,
}

impl DeadlineScanner {
    pub fn new(store: Arc<dyn DeadlineStore>, tz: Tz) -> Self {
        Self { store, tz }
    }

    /// Scan the deadline window `now` falls in and write reminders.
    /// Never returns an error, every failure ends up in `JobOutcome::Failed`.
    pub async fn run(&self, now: DateTime<Utc>) -> JobOutcome {
        match self.check_borrow_deadlines(&now).await {
            Ok(summary) => JobOutcome::Completed(summary),
            Err(err) => JobOutcome::Failed(err),
        }
    }

    async fn check_borrow_deadlines(&self, now: &DateTime<Utc>) -> anyhow::Result<ScanSummary> {
        let window = DeadlineWindow::for_instant(now, self.tz)?;
        tracing::info!(
            date = %window.date,
            start = %window.start,
            "Checking borrow deadlines for today..."
        );
        let items = self.store.find_due_items(&window).await?;
        tracing::info!("Found {} items with deadline today", items.len());

        let mut items_skipped = 0;
        let mut notifications = Vec::with_capacity(items.len() * 2);
        for item in &items {
            let Some(borrower_id) = item.borrower_id() else {
                items_skipped += 1;
                tracing::warn!(item_id = %item.id, "Item {} has no borrower assigned", item.id);
                continue;
            };
            if item.owner_id().is_none() {
                items_skipped += 1;
                tracing::warn!(item_id = %item.id, "Item {} has no owner assigned", item.id);
                continue;
            }
            notifications.extend(build_reminders(item, borrower_id));
            tracing::info!("Created deadline notifications for: {}", item.title);
        }

        // all writes run to completion, a failing one does not cancel the rest
        let writes = notifications
            .iter()
            .map(|notification| self.store.insert_notification(notification));
        let results = join_all(writes).await;
        let notifications_issued = results.len();
        let failures = results
            .into_iter()
            .filter_map(Result::err)
            .collect::<Vec<_>>();
        let notifications_failed = failures.len();
        if let Some(first) = failures.into_iter().next() {
            return Err(first.context(format!(
                "{notifications_failed} of {notifications_issued} deadline notification writes failed"
            )));
        }

        tracing::info!(
            "Successfully sent {} deadline notifications",
            notifications_issued
        );
        Ok(ScanSummary {
            window,
            items_found: items.len(),
            items_skipped,
            notifications_issued,
        })
    }
}

/// Lender and borrower reminders for one item
fn build_reminders(item: &Item, borrower_id: &str) -> [Notification; 2] {
    [
        Notification::lender_reminder(item, borrower_id),
        Notification::borrower_reminder(item, borrower_id),
    ]
}
