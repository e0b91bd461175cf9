// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil date-time ↔ Julian Day conversions.
//!
//! Both directions implement the algorithm from *Jean Meeus — Astronomical
//! Algorithms (2nd ed. 1998), ch. 7*, extended with a UT-offset aware day
//! fraction on the forward path and a full carry-normalization cascade on
//! the inverse path.
//!
//! Both functions are **total**: no input is rejected.  An out-of-range
//! month or day flows through the arithmetic into a numerically
//! well-defined but calendar-meaningless result; callers that want to
//! reject such inputs use [`CivilDateTime::validate`] first.
//!
//! # Quick example
//! ```
//! use scaliger::{gregorian_to_jd, jd_to_gregorian, CivilDateTime, JulianDay};
//!
//! let dt = CivilDateTime::new(2000, 1, 1, 12, 0, 0);
//! let result = gregorian_to_jd(&dt);
//! assert_eq!(result.julian_day, JulianDay::J2000);
//!
//! let back = jd_to_gregorian(result.julian_day);
//! assert_eq!(back.to_string(), "2000-01-01 12:00:00");
//! ```

use crate::calendar::{Calendar, GREGORIAN_REFORM_JDN};
use crate::civil::{CivilDateTime, ResolvedDateTime};
use crate::julian_day::{JulianDay, JulianDayResult};

/// Forward conversion: civil date-time → Julian Day and Julian Day Number.
///
/// Unspecified time fields default to **12:00:00** (noon UT, the
/// astronomical day boundary) and an unspecified offset to 0.  A non-zero
/// UTC offset converts local time to UT by subtraction; the resulting day
/// fraction may leave `[0, 1)` for large offsets and is absorbed into the
/// final sum rather than renormalized.
pub fn gregorian_to_jd(dt: &CivilDateTime) -> JulianDayResult {
    let hour = dt.hour.unwrap_or(12);
    let minute = dt.minute.unwrap_or(0);
    let second = dt.second.unwrap_or(0);
    let offset_hours = dt.utc_offset_hours.unwrap_or(0.0);

    let seconds_of_day = f64::from(hour) * 3_600.0 + f64::from(minute) * 60.0
        + f64::from(second)
        - offset_hours * 3_600.0;
    let day_fraction = seconds_of_day / 86_400.0;

    // Jan/Feb count as months 13/14 of the previous year: the polynomial
    // terms below assume a year starting in March.
    let mut y = i64::from(dt.year);
    let mut m = i64::from(dt.month);
    if m <= 2 {
        y -= 1;
        m += 12;
    }

    // Gregorian century correction, decided on the *original* civil date.
    let b = match Calendar::for_date(dt.year, dt.month, dt.day) {
        Calendar::Gregorian => {
            let a = y.div_euclid(100);
            2 - a + a.div_euclid(4)
        }
        Calendar::Julian => 0,
    };

    let jd = (365.25 * (y as f64 + 4716.0)).floor()
        + (30.6001 * (m as f64 + 1.0)).floor()
        + f64::from(dt.day)
        + b as f64
        - 1524.5
        + day_fraction;

    JulianDayResult::new(JulianDay::new(jd))
}

/// Inverse conversion: Julian Day → fully normalized civil date-time.
///
/// The integer day part selects the calendar regime (`Z >=`
/// [`GREGORIAN_REFORM_JDN`] means Gregorian), the fractional part becomes
/// time-of-day with seconds rounded to the nearest integer, and the result
/// is normalized by a carry cascade run strictly in the order
/// second → minute → hour → day → month → year.  The day-overflow loop
/// re-evaluates the calendar regime on every iteration, since stepping
/// across the reform boundary changes the leap-year rule.
pub fn jd_to_gregorian(jd: JulianDay) -> ResolvedDateTime {
    let jd_plus = jd.value() + 0.5;
    let z = jd_plus.floor() as i64;
    let f = jd_plus - z as f64;

    let a = if z >= GREGORIAN_REFORM_JDN {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        z + 1 + alpha - alpha.div_euclid(4)
    } else {
        z
    };

    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day_decimal = (b - d) as f64 - (30.6001 * e as f64).floor() + f;
    let mut day = day_decimal.floor() as i64;
    let mut month = if e < 14 { e - 1 } else { e - 13 };
    let mut year = if month > 2 { c - 4716 } else { c - 4715 };

    // Time-of-day from the fractional day, seconds rounded.
    let day_frac = day_decimal - day as f64;
    let seconds_of_day = day_frac * 86_400.0;
    let mut hour = (seconds_of_day / 3_600.0) as i64;
    let mut minute = ((seconds_of_day - hour as f64 * 3_600.0) / 60.0) as i64;
    let mut second =
        (seconds_of_day - hour as f64 * 3_600.0 - minute as f64 * 60.0).round() as i64;

    // Rounding can push the seconds to 60; each carry feeds the next stage.
    if second >= 60 {
        second -= 60;
        minute += 1;
    }
    if minute >= 60 {
        minute -= 60;
        hour += 1;
    }
    if hour >= 24 {
        hour -= 24;
        day += 1;
    }

    // Day overflow: subtract month lengths until the day fits, wrapping the
    // month and year.  The regime is re-selected per iteration because the
    // cascade can cross the 1582 reform boundary.
    loop {
        let regime = Calendar::for_date(year as i32, month as u32, day.max(1) as u32);
        let dim = i64::from(regime.days_in_month(year as i32, month as u32));
        if day <= dim {
            break;
        }
        day -= dim;
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }

    // Day underflow guard: compounding rounding on extreme inputs could in
    // principle leave a non-positive day; normalize downward as well.
    while day <= 0 {
        month -= 1;
        if month < 1 {
            month = 12;
            year -= 1;
        }
        let regime = Calendar::for_date(year as i32, month as u32, 1);
        day += i64::from(regime.days_in_month(year as i32, month as u32));
    }

    ResolvedDateTime {
        year: year as i32,
        month: month as u32,
        day: day as u32,
        hour: hour as u32,
        minute: minute as u32,
        second: second as u32,
    }
}
