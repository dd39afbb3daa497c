pub mod deadline_reminder_job;
pub mod scanner;
pub mod schedule;

pub use deadline_reminder_job::deadline_reminder_job;
pub use scanner::{DeadlineScanner, JobOutcome, ScanSummary};
pub use schedule::DailySchedule;
