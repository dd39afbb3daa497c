use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use mongodb::bson::DateTime as BsonDateTime;

use crate::utils::to_bson_datetime;

/// Half open interval `[start, end)` covering one calendar day in the job timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineWindow {
    pub date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DeadlineWindow {
    /// Window for the calendar day `now` falls on in `tz`
    pub fn for_instant(now: &DateTime<Utc>, tz: Tz) -> anyhow::Result<Self> {
        let date = now.with_timezone(&tz).date_naive();
        Self::for_date(date, tz)
    }

    pub fn for_date(date: NaiveDate, tz: Tz) -> anyhow::Result<Self> {
        let next = date
            .succ_opt()
            .ok_or(anyhow::anyhow!("no calendar day after {date}"))?;
        let start = local_midnight(date, tz)?;
        let end = local_midnight(next, tz)?;
        Ok(Self { date, start, end })
    }

    pub fn contains(&self, ts: &BsonDateTime) -> bool {
        let millis = ts.timestamp_millis();
        self.start.timestamp_millis() <= millis && millis < self.end.timestamp_millis()
    }

    pub fn bson_bounds(&self) -> (BsonDateTime, BsonDateTime) {
        (to_bson_datetime(&self.start), to_bson_datetime(&self.end))
    }
}

fn local_midnight(date: NaiveDate, tz: Tz) -> anyhow::Result<DateTime<Utc>> {
    let naive = date
        .and_hms_opt(0, 0, 0)
        .ok_or(anyhow::anyhow!("invalid midnight for {date}"))?;
    let local = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or(anyhow::anyhow!("midnight of {date} does not exist in {tz}"))?;
    Ok(local.with_timezone(&Utc))
}
