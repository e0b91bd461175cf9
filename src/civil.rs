// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil date-time value types.
//!
//! [`CivilDateTime`] is the *input* of the forward conversion: a calendar
//! date with optionally unspecified time-of-day.  When the time is absent
//! the forward conversion substitutes **noon** (the astronomical convention
//! places the Julian Day boundary at 12:00 UT), zero minutes/seconds, and a
//! zero UTC offset.
//!
//! [`ResolvedDateTime`] is the *output* of the inverse conversion: every
//! field present and normalized into its valid range.

use crate::calendar::Calendar;
use crate::convert;
use crate::error::ValidationError;
use crate::julian_day::JulianDayResult;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A civil calendar date-time, possibly with unspecified time-of-day.
///
/// `month`/`day` are expected in `1..=12` / `1..=31` but are **not**
/// enforced by construction: the conversion algorithms are total and an
/// out-of-range component propagates into a numerically well-defined but
/// calendar-nonsensical Julian Day.  Call [`CivilDateTime::validate`] first
/// when rejecting such inputs is desired.
///
/// # Examples
///
/// ```
/// use scaliger::CivilDateTime;
///
/// // Date only: the forward conversion will assume 12:00:00 UT.
/// let noon = CivilDateTime::from_ymd(2000, 1, 1);
/// assert_eq!(noon.to_julian_day().julian_day_number, 2_451_545);
///
/// // Full time with a UTC offset (local time, UTC+2).
/// let local = CivilDateTime::new(2000, 1, 1, 14, 0, 0).with_offset(2.0);
/// assert_eq!(local.to_julian_day().julian_day.value(), 2_451_545.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDateTime {
    /// Astronomical year numbering: 1 BCE is year 0, 2 BCE is year −1.
    pub year: i32,
    /// Month, `1..=12`.
    pub month: u32,
    /// Day of month, `1..=31`.
    pub day: u32,
    /// Hour `0..=23`; `None` means noon in the forward conversion.
    pub hour: Option<u32>,
    /// Minute `0..=59`; `None` means 0.
    pub minute: Option<u32>,
    /// Second `0..=59`; `None` means 0.
    pub second: Option<u32>,
    /// UTC offset in hours (local = UT + offset); `None` means 0.0.
    pub utc_offset_hours: Option<f64>,
}

impl CivilDateTime {
    /// A date with unspecified time-of-day.
    pub const fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: None,
            minute: None,
            second: None,
            utc_offset_hours: None,
        }
    }

    /// A fully specified date-time (UTC offset 0 unless set afterwards).
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
            utc_offset_hours: None,
        }
    }

    /// Set the UTC offset in hours (e.g. `+5.5` for IST).
    pub const fn with_offset(mut self, hours: f64) -> Self {
        self.utc_offset_hours = Some(hours);
        self
    }

    /// Check every specified field against its documented range.
    ///
    /// The day bound is the actual month length under the regime selected
    /// by [`Calendar::for_date`], so 1900-02-29 is rejected while
    /// 1500-02-29 (Julian) is accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range("month", self.month as i64, 1, 12)?;
        let dim = Calendar::for_date(self.year, self.month, self.day)
            .days_in_month(self.year, self.month);
        check_range("day", self.day as i64, 1, dim as i64)?;
        if let Some(hour) = self.hour {
            check_range("hour", hour as i64, 0, 23)?;
        }
        if let Some(minute) = self.minute {
            check_range("minute", minute as i64, 0, 59)?;
        }
        if let Some(second) = self.second {
            check_range("second", second as i64, 0, 59)?;
        }
        Ok(())
    }

    /// Builder-style validation: returns `self` if every field is in range.
    pub fn checked(self) -> Result<Self, ValidationError> {
        self.validate()?;
        Ok(self)
    }

    /// Forward conversion; see [`gregorian_to_jd`](crate::gregorian_to_jd).
    #[inline]
    pub fn to_julian_day(&self) -> JulianDayResult {
        convert::gregorian_to_jd(self)
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.hour.is_some() || self.minute.is_some() || self.second.is_some() {
            write!(
                f,
                " {:02}:{:02}:{:02}",
                self.hour.unwrap_or(12),
                self.minute.unwrap_or(0),
                self.second.unwrap_or(0)
            )?;
        }
        if let Some(offset) = self.utc_offset_hours {
            write!(f, " UTC{offset:+}")?;
        }
        Ok(())
    }
}

/// A fully resolved civil date-time: the output of the inverse conversion.
///
/// Every field is present and normalized (`month` in `1..=12`, `day` within
/// its month, time components in their clock ranges).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl fmt::Display for ResolvedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_plain_dates() {
        assert!(CivilDateTime::from_ymd(2024, 2, 29).validate().is_ok());
        assert!(CivilDateTime::new(1999, 12, 31, 23, 59, 59).validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_fields() {
        let err = CivilDateTime::from_ymd(2025, 13, 1).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "month",
                value: 13,
                min: 1,
                max: 12
            }
        );

        assert!(CivilDateTime::from_ymd(2025, 2, 29).validate().is_err());
        assert!(CivilDateTime::new(2025, 6, 1, 24, 0, 0).validate().is_err());
        assert!(CivilDateTime::new(2025, 6, 1, 0, 60, 0).validate().is_err());
    }

    #[test]
    fn validate_uses_julian_leap_rule_before_reform() {
        // 1500 is a leap year in the Julian calendar, not the Gregorian one.
        assert!(CivilDateTime::from_ymd(1500, 2, 29).validate().is_ok());
        assert!(CivilDateTime::from_ymd(1900, 2, 29).validate().is_err());
    }

    #[test]
    fn checked_passes_value_through() {
        let dt = CivilDateTime::from_ymd(2000, 1, 1).checked().unwrap();
        assert_eq!(dt, CivilDateTime::from_ymd(2000, 1, 1));
    }

    #[test]
    fn display_forms() {
        assert_eq!(CivilDateTime::from_ymd(2000, 1, 1).to_string(), "2000-01-01");
        assert_eq!(
            CivilDateTime::new(-4712, 1, 1, 12, 0, 0).to_string(),
            "-4712-01-01 12:00:00"
        );
        assert_eq!(
            CivilDateTime::new(2000, 1, 1, 14, 0, 0)
                .with_offset(2.0)
                .to_string(),
            "2000-01-01 14:00:00 UTC+2"
        );

        let resolved = ResolvedDateTime {
            year: 2000,
            month: 1,
            day: 1,
            hour: 12,
            minute: 0,
            second: 0,
        };
        assert_eq!(resolved.to_string(), "2000-01-01 12:00:00");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let dt = CivilDateTime::new(1582, 10, 15, 0, 0, 0);
        let json = serde_json::to_string(&dt).unwrap();
        let back: CivilDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dt);
    }
}
