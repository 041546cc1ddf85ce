use super::AppError;
use chrono::{Datelike, NaiveDate, NaiveTime};
use std::fmt::Display;

/// Abbreviated month names as used by the ru-RU locale when a day precedes the month.
const MONTHS_RU_SHORT: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];

const YEAR_OFFSET: i32 = 2000;

/// A calendar date without time of day or time zone, as found in the ticket feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parses a `DD.MM.YY` date; the year is interpreted as `20YY`.
    pub fn parse(date_str: &str) -> Result<Self, AppError> {
        let parts: Vec<&str> = date_str.split('.').collect();

        if parts.len() != 3 {
            return Err(format!("invalid date '{}': expected DD.MM.YY", date_str).into());
        }

        let day = parse_two_digits(parts[0], date_str)?;
        let month = parse_two_digits(parts[1], date_str)?;
        let year = parse_two_digits(parts[2], date_str)? as i32 + YEAR_OFFSET;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| format!("invalid date '{}': no such calendar day", date_str).into())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Zero-based month index (January is 0).
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn format(&self) -> String {
        format!(
            "{} {} {}",
            self.day(),
            MONTHS_RU_SHORT[self.month0() as usize],
            self.year()
        )
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

fn parse_two_digits(part: &str, date_str: &str) -> Result<u32, AppError> {
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid date '{}': expected DD.MM.YY", date_str).into());
    }

    part.parse::<u32>()
        .map_err(|e| format!("invalid date '{}': {}", date_str, e).into())
}

/// Local time of day in `HH:MM` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn parse(time_str: &str) -> Result<Self, AppError> {
        NaiveTime::parse_from_str(time_str, "%H:%M")
            .map(Self)
            .map_err(|e| format!("invalid time '{}': {}", time_str, e).into())
    }

    pub fn format(&self) -> String {
        self.0.format("%H:%M").to_string()
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_digit_year_with_zero_based_month() {
        let date = CalendarDate::parse("05.03.25").unwrap();

        assert_eq!(date.year(), 2025);
        assert_eq!(date.month0(), 2);
        assert_eq!(date.day(), 5);
    }

    #[test]
    fn formats_with_russian_month_abbreviation() {
        assert_eq!(CalendarDate::parse("05.03.25").unwrap().format(), "5 мар. 2025");
        assert_eq!(CalendarDate::parse("12.05.18").unwrap().format(), "12 мая 2018");
        assert_eq!(CalendarDate::parse("01.09.00").unwrap().to_string(), "1 сент. 2000");
    }

    #[test]
    fn years_cover_two_thousand_to_two_thousand_ninety_nine() {
        assert_eq!(CalendarDate::parse("01.01.00").unwrap().year(), 2000);
        assert_eq!(CalendarDate::parse("31.12.99").unwrap().year(), 2099);
        assert!(CalendarDate::parse("01.01.2025").is_err());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(CalendarDate::parse("").is_err());
        assert!(CalendarDate::parse("5.3.25").is_err());
        assert!(CalendarDate::parse("05-03-25").is_err());
        assert!(CalendarDate::parse("05.03").is_err());
        assert!(CalendarDate::parse("aa.03.25").is_err());
        assert!(CalendarDate::parse("31.02.25").is_err());
        assert!(CalendarDate::parse("01.13.25").is_err());
        assert!(CalendarDate::parse("+1.03.25").is_err());
    }

    #[test]
    fn accepts_leap_day() {
        let date = CalendarDate::parse("29.02.24").unwrap();

        assert_eq!(date.month0(), 1);
        assert_eq!(date.format(), "29 февр. 2024");
    }

    #[test]
    fn parses_and_formats_times() {
        assert_eq!(TimeOfDay::parse("09:25").unwrap().format(), "09:25");
        assert_eq!(TimeOfDay::parse("23:59").unwrap().to_string(), "23:59");
        assert!(TimeOfDay::parse("24:00").is_err());
        assert!(TimeOfDay::parse("12:60").is_err());
        assert!(TimeOfDay::parse("noon").is_err());
    }
}
