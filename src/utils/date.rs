//! Archive date parsing and label formatting.
//!
//! Date archives are labelled with locale-long English forms:
//!
//! | Granularity | Input        | Label            |
//! |-------------|--------------|------------------|
//! | Year        | `2024`       | `2024`           |
//! | Month       | `2024-03`    | `March 2024`     |
//! | Day         | `2024-03-05` | `March 5, 2024`  |

use anyhow::{Result, bail};

/// Calendar date without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl ArchiveDate {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse from "YYYY", "YYYY-MM" or "YYYY-MM-DD" format.
    ///
    /// Omitted components default to 1, so a year archive parses as Jan 1.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        let year = parse_u16(bytes.get(0..4)?)?;

        let month = match bytes.len() {
            4 => 1,
            7 | 10 if bytes[4] == b'-' => parse_u8(&bytes[5..7])?,
            _ => return None,
        };

        let day = match bytes.len() {
            4 | 7 => 1,
            10 if bytes[7] == b'-' => parse_u8(&bytes[8..10])?,
            _ => return None,
        };

        let date = Self::new(year, month, day);
        date.validate().ok()?;
        Some(date)
    }

    pub fn validate(&self) -> Result<()> {
        let Self { year, month, day } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }

        Ok(())
    }

    /// Full English month name ("January".."December").
    pub fn month_name(&self) -> &'static str {
        const MONTHS: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        MONTHS[(self.month - 1) as usize]
    }

    #[inline]
    fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    #[inline]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u16;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_date() {
        assert_eq!(
            ArchiveDate::parse("2024-03-05"),
            Some(ArchiveDate::new(2024, 3, 5))
        );
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!(
            ArchiveDate::parse("2024-03"),
            Some(ArchiveDate::new(2024, 3, 1))
        );
    }

    #[test]
    fn test_parse_year_only() {
        assert_eq!(ArchiveDate::parse("2024"), Some(ArchiveDate::new(2024, 1, 1)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(ArchiveDate::parse(""), None);
        assert_eq!(ArchiveDate::parse("202"), None);
        assert_eq!(ArchiveDate::parse("2024-3"), None);
        assert_eq!(ArchiveDate::parse("2024/03/05"), None);
        assert_eq!(ArchiveDate::parse("2024-03-05T10"), None);
        assert_eq!(ArchiveDate::parse("abcd-ef-gh"), None);
    }

    #[test]
    fn test_parse_rejects_invalid_calendar_dates() {
        // Month 13
        assert_eq!(ArchiveDate::parse("2024-13"), None);
        // Day 31 in a 30-day month
        assert_eq!(ArchiveDate::parse("2024-04-31"), None);
        // Feb 29 outside a leap year
        assert_eq!(ArchiveDate::parse("2023-02-29"), None);
    }

    #[test]
    fn test_parse_leap_year() {
        assert!(ArchiveDate::parse("2024-02-29").is_some());
        assert!(ArchiveDate::parse("2000-02-29").is_some()); // divisible by 400
        assert!(ArchiveDate::parse("1900-02-29").is_none()); // divisible by 100 but not 400
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(ArchiveDate::new(2024, 1, 1).month_name(), "January");
        assert_eq!(ArchiveDate::new(2024, 12, 1).month_name(), "December");
    }

    #[test]
    fn test_validate_rejects_day_zero() {
        assert!(ArchiveDate::new(2024, 6, 0).validate().is_err());
    }
}
