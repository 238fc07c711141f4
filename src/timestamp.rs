use crate::constants::{DATE_FORMAT, DAYS, HOURS, MINUTES, MONTHS, SECONDS, YEARS};
use crate::entropy::Entropy;
use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime};

/// Draws year, month, day, hour, minute and second, in that order.
pub fn random_timestamp(entropy: &mut dyn Entropy) -> Result<NaiveDateTime> {
    let year = entropy.draw(YEARS);
    let month = entropy.draw(MONTHS);
    let day = entropy.draw(DAYS);
    let hour = entropy.draw(HOURS);
    let minute = entropy.draw(MINUTES);
    let second = entropy.draw(SECONDS);
    NaiveDate::from_ymd_opt(year as i32, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .ok_or_else(|| {
            anyhow!(
                "invalid timestamp {year}-{month}-{day} {hour}:{minute}:{second}"
            )
        })
}

/// `2015-03-07_0405_06`
pub fn dir_name(ts: &NaiveDateTime) -> String {
    ts.format(DATE_FORMAT).to_string()
}

/// Inverse of [`dir_name`]; `None` for names that are not timestamps.
pub fn parse_dir_name(name: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(name, DATE_FORMAT).ok()
}
