use std::sync::Arc;

use self::deadline_reminder::deadline_reminder_job;
use crate::database::AppDatabase;

pub mod deadline_reminder;

pub fn spawn_all_jobs(db_client: Arc<AppDatabase>) {
    tokio::spawn(async move {
        // spawn job which reminds lenders & borrowers about today's deadlines
        deadline_reminder_job(db_client).await;
    });
}
