use chrono_tz::Tz;

pub const MONGO_MIN_POOL_SIZE: u32 = 5;
pub const MONGO_MAX_POOL_SIZE: u32 = 10;
pub const MONGO_CONN_TIMEOUT: u64 = 10;

pub const DB_NAME: &str = "lendit";

pub const COLL_ITEMS: &str = "items";
pub const COLL_NOTIFICATIONS: &str = "notifications";

// cron equivalent: "0 9 * * *" in Asia/Manila
pub const DEADLINE_JOB_HOUR: u32 = 9;
pub const DEADLINE_JOB_MINUTE: u32 = 0;
pub const DEADLINE_JOB_TIMEZONE: Tz = chrono_tz::Asia::Manila;

pub const DEFAULT_BORROWER_NAME: &str = "Borrower";
pub const LENDER_REMINDER_TITLE: &str = "⏰ Borrow Deadline Today";
pub const BORROWER_REMINDER_TITLE: &str = "⏰ Return Reminder";
