use crate::common::*;

#[doc = "Parses an RFC3339 timestamp, falling back to the zero time (Unix epoch) on failure"]
/// # Arguments
/// * `time` - timestamp string such as `2024-03-01T10:00:00.000Z`
///
/// # Returns
/// * DateTime<Utc>
pub fn parse_rfc3339_or_zero(time: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(time.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

#[doc = "Function that returns the instant `days` days before `now`"]
/// # Arguments
/// * `now`  - reference time, captured once by the caller
/// * `days` - retention window in days
///
/// # Returns
/// * anyhow::Result<DateTime<Utc>>
pub fn cutoff_before_days(now: DateTime<Utc>, days: i64) -> anyhow::Result<DateTime<Utc>> {
    let window: chrono::Duration = chrono::Duration::try_days(days)
        .ok_or_else(|| anyhow!("[cutoff_before_days] day count out of range: {}", days))?;

    now.checked_sub_signed(window)
        .ok_or_else(|| anyhow!("[cutoff_before_days] cutoff out of range for {} days", days))
}

#[doc = "Standard Function of Datetime"]
pub fn convert_date_to_str_human(time: DateTime<Utc>) -> String {
    time.format("%Y.%m.%d %H:%M:%S").to_string()
}
