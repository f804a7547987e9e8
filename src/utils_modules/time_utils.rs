use crate::common::*;

#[doc = "Epoch used for the numeric date axis (days since 1970-01-01)."]
fn unix_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

#[doc = "Today's date in the local timezone"]
pub fn get_today_local() -> NaiveDate {
    Local::now().date_naive()
}

#[doc = "Date `days` days before `date`, saturating at the earliest representable date"]
pub fn minus_days(date: NaiveDate, days: i64) -> NaiveDate {
    ChronoDuration::try_days(days)
        .and_then(|d| date.checked_sub_signed(d))
        .unwrap_or(NaiveDate::MIN)
}

#[doc = "Parses a `YYYY-MM-DD` string"]
pub fn parse_date_str(date_str: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        anyhow!(
            "[time_utils->parse_date_str] '{}' is not a YYYY-MM-DD date: {:?}",
            date_str,
            e
        )
    })
}

#[doc = "Formats a date as `YYYY-MM-DD`"]
pub fn convert_date_to_str(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[doc = "Abbreviated month + day, e.g. `Jan 08`"]
pub fn convert_date_to_month_day(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

#[doc = "Full month + day, e.g. `January 08`"]
pub fn convert_date_to_full_month_day(date: NaiveDate) -> String {
    date.format("%B %d").to_string()
}

#[doc = "Converts a calendar date into the numeric x-axis value (days since 1970-01-01)"]
pub fn date_to_num(date: NaiveDate) -> f64 {
    date.signed_duration_since(unix_epoch()).num_days() as f64
}

#[doc = r#"
    Inverse of `date_to_num`. The fractional part (time of day) is dropped.
    Returns `None` for non-finite values or values outside chrono's calendar range.
"#]
pub fn num_to_date(days: f64) -> Option<NaiveDate> {
    if !days.is_finite() {
        return None;
    }

    let whole_days: f64 = days.floor();
    if whole_days.abs() > i64::MAX as f64 / 2.0 {
        return None;
    }

    ChronoDuration::try_days(whole_days as i64).and_then(|d| unix_epoch().checked_add_signed(d))
}

#[doc = "`Mon DD` label for a numeric x-axis value"]
pub fn convert_num_to_month_day(days: f64) -> String {
    num_to_date(days)
        .map(convert_date_to_month_day)
        .unwrap_or_default()
}
