//! Public holiday calendars for pickup planning
//!
//! Fixed-date holidays plus the Easter-derived ones for the countries the
//! tariffs serve. Countries without a calendar here simply have no
//! holidays, which only ever makes a pickup estimate earlier, not later.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Easter Sunday for a Gregorian year (Meeus/Jones/Butcher computus)
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn first_friday_on_or_after(date: NaiveDate) -> NaiveDate {
    let from_monday = date.weekday().num_days_from_monday();
    let offset = (Weekday::Fri.num_days_from_monday() + 7 - from_monday) % 7;
    date + Duration::days(i64::from(offset))
}

/// Whether `date` is a public holiday in `country`
pub fn is_public_holiday(country: &str, date: NaiveDate) -> bool {
    public_holidays(country, date.year()).contains(&date)
}

/// Public holidays for one (country, year)
pub fn public_holidays(country: &str, year: i32) -> Vec<NaiveDate> {
    let fixed = |month: u32, day: u32| NaiveDate::from_ymd_opt(year, month, day);
    let easter = easter_sunday(year);
    let easter_offset = |days: i64| easter.map(|e| e + Duration::days(days));

    let holidays: Vec<Option<NaiveDate>> = match country {
        "SE" => vec![
            fixed(1, 1),
            fixed(1, 6),
            easter_offset(-2), // Good Friday
            easter_offset(1),  // Easter Monday
            fixed(5, 1),
            easter_offset(39), // Ascension
            fixed(6, 6),
            // Midsummer Eve: the Friday between June 19 and 25
            NaiveDate::from_ymd_opt(year, 6, 19).map(first_friday_on_or_after),
            fixed(12, 24),
            fixed(12, 25),
            fixed(12, 26),
            fixed(12, 31),
        ],
        "DE" => vec![
            fixed(1, 1),
            easter_offset(-2),
            easter_offset(1),
            fixed(5, 1),
            easter_offset(39),
            easter_offset(50), // Whit Monday
            fixed(10, 3),
            fixed(12, 25),
            fixed(12, 26),
        ],
        "DK" => vec![
            fixed(1, 1),
            easter_offset(-3), // Maundy Thursday
            easter_offset(-2),
            easter_offset(1),
            easter_offset(39),
            easter_offset(50),
            fixed(12, 25),
            fixed(12, 26),
        ],
        "NO" => vec![
            fixed(1, 1),
            easter_offset(-3),
            easter_offset(-2),
            easter_offset(1),
            fixed(5, 1),
            fixed(5, 17),
            easter_offset(39),
            easter_offset(50),
            fixed(12, 25),
            fixed(12, 26),
        ],
        "FI" => vec![
            fixed(1, 1),
            fixed(1, 6),
            easter_offset(-2),
            easter_offset(1),
            fixed(5, 1),
            easter_offset(39),
            NaiveDate::from_ymd_opt(year, 6, 19).map(first_friday_on_or_after),
            fixed(12, 6),
            fixed(12, 24),
            fixed(12, 25),
            fixed(12, 26),
        ],
        "NL" => vec![
            fixed(1, 1),
            easter_offset(-2),
            easter_offset(1),
            fixed(4, 27),
            easter_offset(39),
            easter_offset(50),
            fixed(12, 25),
            fixed(12, 26),
        ],
        "BE" => vec![
            fixed(1, 1),
            easter_offset(1),
            fixed(5, 1),
            easter_offset(39),
            easter_offset(50),
            fixed(7, 21),
            fixed(11, 1),
            fixed(11, 11),
            fixed(12, 25),
        ],
        "FR" => vec![
            fixed(1, 1),
            easter_offset(1),
            fixed(5, 1),
            fixed(5, 8),
            easter_offset(39),
            easter_offset(50),
            fixed(7, 14),
            fixed(11, 1),
            fixed(11, 11),
            fixed(12, 25),
        ],
        "AT" => vec![
            fixed(1, 1),
            fixed(1, 6),
            easter_offset(1),
            fixed(5, 1),
            easter_offset(39),
            easter_offset(50),
            fixed(8, 15),
            fixed(10, 26),
            fixed(11, 1),
            fixed(12, 8),
            fixed(12, 25),
            fixed(12, 26),
        ],
        "PL" => vec![
            fixed(1, 1),
            fixed(1, 6),
            easter_offset(1),
            fixed(5, 1),
            fixed(5, 3),
            easter_offset(60), // Corpus Christi
            fixed(8, 15),
            fixed(11, 1),
            fixed(11, 11),
            fixed(12, 25),
            fixed(12, 26),
        ],
        _ => vec![],
    };

    holidays.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_easter_sunday_known_years() {
        assert_eq!(easter_sunday(2025), Some(ymd(2025, 4, 20)));
        assert_eq!(easter_sunday(2026), Some(ymd(2026, 4, 5)));
        assert_eq!(easter_sunday(2027), Some(ymd(2027, 3, 28)));
    }

    #[test]
    fn test_swedish_midsummer_eve() {
        // 2026-06-19 is the Friday in the 19..=25 window
        assert!(is_public_holiday("SE", ymd(2026, 6, 19)));
        assert!(!is_public_holiday("SE", ymd(2026, 6, 18)));
        // 2025: June 20 is the Friday
        assert!(is_public_holiday("SE", ymd(2025, 6, 20)));
    }

    #[test]
    fn test_christmas_eve_differs_by_country() {
        assert!(is_public_holiday("SE", ymd(2026, 12, 24)));
        assert!(!is_public_holiday("DE", ymd(2026, 12, 24)));
        assert!(is_public_holiday("DE", ymd(2026, 12, 25)));
    }

    #[test]
    fn test_german_unity_day() {
        assert!(is_public_holiday("DE", ymd(2026, 10, 3)));
    }

    #[test]
    fn test_easter_derived_holidays_2026() {
        // Easter Sunday 2026-04-05
        assert!(is_public_holiday("DE", ymd(2026, 4, 3))); // Good Friday
        assert!(is_public_holiday("DE", ymd(2026, 4, 6))); // Easter Monday
        assert!(is_public_holiday("SE", ymd(2026, 5, 14))); // Ascension
        assert!(is_public_holiday("DE", ymd(2026, 5, 25))); // Whit Monday
        assert!(is_public_holiday("PL", ymd(2026, 6, 4))); // Corpus Christi
    }

    #[test]
    fn test_unknown_country_has_no_holidays() {
        assert!(!is_public_holiday("XX", ymd(2026, 12, 25)));
        assert!(public_holidays("XX", 2026).is_empty());
    }
}
