//! Earliest feasible pickup date

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use chrono_tz::Tz;

use crate::model::ModeConfig;
use crate::service::holidays::is_public_holiday;

/// Fallback when a country has no canonical zone configured
const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Stockholm;

/// Canonical IANA timezone for a country code
pub fn country_timezone(country_code: &str) -> Tz {
    use chrono_tz::Europe;
    match country_code {
        "SE" => Europe::Stockholm,
        "NO" => Europe::Oslo,
        "DK" => Europe::Copenhagen,
        "FI" => Europe::Helsinki,
        "DE" => Europe::Berlin,
        "NL" => Europe::Amsterdam,
        "BE" => Europe::Brussels,
        "LU" => Europe::Luxembourg,
        "FR" => Europe::Paris,
        "AT" => Europe::Vienna,
        "CH" => Europe::Zurich,
        "IT" => Europe::Rome,
        "ES" => Europe::Madrid,
        "PT" => Europe::Lisbon,
        "PL" => Europe::Warsaw,
        "CZ" => Europe::Prague,
        "SK" => Europe::Bratislava,
        "HU" => Europe::Budapest,
        "EE" => Europe::Tallinn,
        "LV" => Europe::Riga,
        "LT" => Europe::Vilnius,
        "IE" => Europe::Dublin,
        "GB" => Europe::London,
        _ => DEFAULT_TIMEZONE,
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Earliest feasible pickup date for a mode.
///
/// Requests placed before the mode's local cutoff hour get a one
/// business-day lead, later requests two. Weekends and the pickup
/// country's public holidays do not count toward the lead; the mode's
/// `extra_pickup_days` are plain calendar days on top.
pub fn earliest_pickup(
    country_code: &str,
    config: &ModeConfig,
    now_utc: DateTime<Utc>,
) -> NaiveDate {
    let tz = country_timezone(country_code);
    let local = now_utc.with_timezone(&tz);

    let cutoff =
        NaiveTime::from_hms_opt(u32::from(config.cutoff_hour), 0, 0).unwrap_or(NaiveTime::MIN);
    let lead_days = if local.time() < cutoff { 1 } else { 2 };

    let mut date = local.date_naive();
    let mut remaining = lead_days;
    while remaining > 0 {
        date += Duration::days(1);
        if !is_weekend(date) && !is_public_holiday(country_code, date) {
            remaining -= 1;
        }
    }

    date + Duration::days(i64::from(config.extra_pickup_days))
}
