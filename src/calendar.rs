// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil calendar regimes.
//!
//! The Gregorian reform took effect on **1582-10-15**: dates on or after it
//! follow Gregorian leap-year rules, dates before it follow Julian rules.
//! The ten days 1582-10-05 through 1582-10-14 never existed as civil dates,
//! but the conversion algorithms in [`crate::convert`] still accept them and
//! produce well-defined Julian Day values.

/// Julian Day Number of 1582-10-15, the first Gregorian day.
///
/// The inverse conversion switches to the Gregorian correction for any
/// integer day part `Z >= GREGORIAN_REFORM_JDN`.
pub const GREGORIAN_REFORM_JDN: i64 = 2_299_161;

/// A civil calendar regime: proleptic Julian or Gregorian.
///
/// Selection between the two is a pure function of the civil date via
/// [`Calendar::for_date`]; leap-year and month-length facts then follow
/// from the selected regime.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Calendar {
    /// Julian rules: every fourth year is a leap year.
    Julian,
    /// Gregorian rules: century years must be divisible by 400.
    Gregorian,
}

impl Calendar {
    /// The regime governing a civil date.
    ///
    /// Returns [`Calendar::Gregorian`] iff the date falls on or after
    /// 1582-10-15, by total ordering on `(year, month, day)`.
    #[inline]
    pub const fn for_date(year: i32, month: u32, day: u32) -> Self {
        if year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day > 14))) {
            Calendar::Gregorian
        } else {
            Calendar::Julian
        }
    }

    /// Whether `year` is a leap year under this regime.
    #[inline]
    pub const fn is_leap_year(self, year: i32) -> bool {
        match self {
            Calendar::Gregorian => year % 4 == 0 && (year % 100 != 0 || year % 400 == 0),
            Calendar::Julian => year % 4 == 0,
        }
    }

    /// Length of `month` (1..=12) of `year` in days under this regime.
    #[inline]
    pub const fn days_in_month(self, year: i32, month: u32) -> u32 {
        match month {
            4 | 6 | 9 | 11 => 30,
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            _ => 31,
        }
    }
}
