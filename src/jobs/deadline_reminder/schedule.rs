use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Daily trigger at a fixed wall clock time in one timezone
#[derive(Debug, Clone, Copy)]
pub struct DailySchedule {
    pub hour: u32,
    pub minute: u32,
    pub tz: Tz,
}

impl DailySchedule {
    pub fn new(hour: u32, minute: u32, tz: Tz) -> Self {
        Self { hour, minute, tz }
    }

    /// First trigger instant strictly after `now`
    pub fn next_after(&self, now: &DateTime<Utc>) -> anyhow::Result<DateTime<Utc>> {
        let mut date = now.with_timezone(&self.tz).date_naive();
        // a skipped wall clock time (DST gap) moves on to the next day
        for _ in 0..3 {
            if let Some(ts) = self.trigger_on(date)? {
                if ts > *now {
                    return Ok(ts);
                }
            }
            date = date
                .succ_opt()
                .ok_or(anyhow::anyhow!("no calendar day after {date}"))?;
        }
        Err(anyhow::anyhow!(
            "no trigger found after {now} for {:02}:{:02} {}",
            self.hour,
            self.minute,
            self.tz
        ))
    }

    fn trigger_on(&self, date: NaiveDate) -> anyhow::Result<Option<DateTime<Utc>>> {
        let naive = date.and_hms_opt(self.hour, self.minute, 0).ok_or(anyhow::anyhow!(
            "invalid trigger time {:02}:{:02}",
            self.hour,
            self.minute
        ))?;
        let ts = self
            .tz
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc));
        Ok(ts)
    }
}
