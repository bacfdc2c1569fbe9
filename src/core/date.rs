//! Date label shown above the board

use chrono::{Datelike, Local, NaiveDate};

/// English ordinal suffix for a day of the month, in upper case.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (1, n) if n != 11 => "ST",
        (2, n) if n != 12 => "ND",
        (3, n) if n != 13 => "RD",
        _ => "TH",
    }
}

/// Formats `date` as `WEEKDAY, DAYSUFFIX MONTH`, e.g. `SUNDAY, 18TH OCTOBER`.
///
/// Each token is rendered on its own, so the suffix only ever lands on the
/// day of the month.
pub fn format_display_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{}, {}{} {}",
        date.format("%A"),
        day,
        ordinal_suffix(day),
        date.format("%B")
    )
    .to_uppercase()
}

pub fn today_label() -> String {
    format_display_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(ordinal_suffix(1), "ST");
        assert_eq!(ordinal_suffix(2), "ND");
        assert_eq!(ordinal_suffix(3), "RD");
        assert_eq!(ordinal_suffix(4), "TH");
        assert_eq!(ordinal_suffix(11), "TH");
        assert_eq!(ordinal_suffix(12), "TH");
        assert_eq!(ordinal_suffix(13), "TH");
        assert_eq!(ordinal_suffix(21), "ST");
        assert_eq!(ordinal_suffix(22), "ND");
        assert_eq!(ordinal_suffix(23), "RD");
        assert_eq!(ordinal_suffix(30), "TH");
        assert_eq!(ordinal_suffix(31), "ST");
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date(date(2026, 10, 18)), "SUNDAY, 18TH OCTOBER");
        assert_eq!(format_display_date(date(2024, 3, 21)), "THURSDAY, 21ST MARCH");
        assert_eq!(format_display_date(date(2024, 3, 22)), "FRIDAY, 22ND MARCH");
        assert_eq!(format_display_date(date(2024, 3, 11)), "MONDAY, 11TH MARCH");
        assert_eq!(format_display_date(date(2024, 3, 13)), "WEDNESDAY, 13TH MARCH");
    }

    #[test]
    fn test_day_number_repeated_elsewhere_is_untouched() {
        // Day 20 of 2020 and day 2 of February: the numeral appears in more
        // than one place once the year is involved.
        assert_eq!(format_display_date(date(2020, 1, 20)), "MONDAY, 20TH JANUARY");
        assert_eq!(format_display_date(date(2022, 2, 2)), "WEDNESDAY, 2ND FEBRUARY");
    }
}
