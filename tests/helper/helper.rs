use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use mongodb::bson::DateTime as BsonDateTime;
use std::sync::Arc;

use borrow_deadline_jobs::{
    constants::DEADLINE_JOB_TIMEZONE,
    database::InMemoryStore,
    jobs::deadline_reminder::DeadlineScanner,
    models::Item,
};

pub fn build_scanner(items: Vec<Item>) -> (Arc<InMemoryStore>, DeadlineScanner) {
    let store = Arc::new(InMemoryStore::with_items(items));
    let scanner = DeadlineScanner::new(store.clone(), DEADLINE_JOB_TIMEZONE);
    (store, scanner)
}

/// Midnight of the given Manila calendar day as UTC instant
pub fn manila_midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    DEADLINE_JOB_TIMEZONE
        .from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

/// Scheduled trigger instant (09:00 Manila) on the given day
pub fn run_at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    DEADLINE_JOB_TIMEZONE
        .from_local_datetime(&date.and_hms_opt(9, 0, 0).unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

pub fn build_item(
    id: &str,
    is_borrowed: bool,
    deadline: DateTime<Utc>,
    borrower: Option<&str>,
) -> Item {
    Item {
        id: id.to_owned(),
        title: format!("Item {id}"),
        is_borrowed,
        borrow_deadline: Some(BsonDateTime::from_millis(deadline.timestamp_millis())),
        user_id: format!("owner-{id}"),
        completed_with: borrower.map(str::to_owned),
        user_name: None,
    }
}
