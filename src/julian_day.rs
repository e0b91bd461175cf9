// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The continuous Julian Day scale.
//!
//! [`JulianDay`] stores a single [`Days`] quantity counting days since the
//! start of the Julian Period (−4712-01-01 12:00 UT).  The fractional part
//! encodes time-of-day with the day boundary at **noon** UT; the associated
//! integer index is the Julian Day Number, `floor(jd + 0.5)`.

use chrono::{DateTime, Utc};
use qtty::{Day, Days, Second, Seconds};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::civil::ResolvedDateTime;
use crate::convert;

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

/// A point on the continuous Julian Day scale.
///
/// The struct is `Copy` and layout-identical to `f64` (a single [`Days`]
/// quantity).
///
/// # Examples
///
/// ```
/// use scaliger::JulianDay;
///
/// let jd = JulianDay::J2000;
/// assert_eq!(jd.value(), 2_451_545.0);
/// assert_eq!(jd.day_number(), 2_451_545);
/// assert_eq!(jd.to_civil().to_string(), "2000-01-01 12:00:00");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay {
    quantity: Days,
}

impl JulianDay {
    /// J2000.0 epoch: 2000-01-01T12:00:00 UT (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// First instant of the Gregorian calendar: 1582-10-15T00:00:00 UT.
    pub const GREGORIAN_REFORM: Self = Self::new(2_299_160.5);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar day count.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// The Julian Day Number: `floor(jd + 0.5)`.
    ///
    /// This is the integer day index used by the Solar/Lunar/Indiction
    /// cycle literature; the half-day shift moves the day boundary from
    /// noon to the preceding midnight.
    #[inline]
    pub fn day_number(&self) -> i64 {
        (self.value() + 0.5).floor() as i64
    }

    /// Inverse conversion; see [`jd_to_gregorian`](crate::jd_to_gregorian).
    #[inline]
    pub fn to_civil(&self) -> ResolvedDateTime {
        convert::jd_to_gregorian(*self)
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>` through the Unix epoch.
    ///
    /// The mapping is linear (`(jd − 2 440 587.5) · 86 400` seconds) and
    /// calendar-free, so it agrees with chrono's proleptic Gregorian
    /// calendar for all representable instants.  Returns `None` outside
    /// chrono's range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds_since_epoch = (self.quantity - UNIX_EPOCH_JD).to::<Second>().value();
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Build a Julian Day from a `chrono::DateTime<Utc>`.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        Self::from_days(UNIX_EPOCH_JD + (seconds_since_epoch + nanos).to::<Day>())
    }

    // ── min / max ─────────────────────────────────────────────────────

    /// Element-wise minimum.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::from_days(self.quantity.min_const(other.quantity))
    }

    /// Element-wise maximum.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::from_days(self.quantity.max_const(other.quantity))
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {}", self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDay {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for JulianDay {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl Sub<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for JulianDay {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl Sub for JulianDay {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl From<Days> for JulianDay {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDay> for Days {
    #[inline]
    fn from(jd: JulianDay) -> Self {
        jd.quantity
    }
}

// ── Conversion result ─────────────────────────────────────────────────────

/// Output of the forward conversion: the continuous JD and its JDN.
///
/// Invariant: `julian_day_number == floor(julian_day + 0.5)`, enforced by
/// [`JulianDayResult::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDayResult {
    /// Continuous astronomical day count; fractional part is time-of-day.
    pub julian_day: JulianDay,
    /// Integer day index, `floor(julian_day + 0.5)`.
    pub julian_day_number: i64,
}

impl JulianDayResult {
    /// Bundle a Julian Day with its derived day number.
    #[inline]
    pub fn new(julian_day: JulianDay) -> Self {
        Self {
            julian_day,
            julian_day_number: julian_day.day_number(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_number_rounds_at_noon() {
        assert_eq!(JulianDay::new(2_451_545.0).day_number(), 2_451_545);
        assert_eq!(JulianDay::new(2_451_544.5).day_number(), 2_451_545);
        // Just before the noon boundary the JDN still belongs to the
        // previous day.
        assert_eq!(JulianDay::new(2_451_544.49).day_number(), 2_451_544);
        assert_eq!(JulianDay::new(0.0).day_number(), 0);
        assert_eq!(JulianDay::new(-0.6).day_number(), -1);
    }

    #[test]
    fn result_invariant_holds() {
        for value in [0.0, 0.25, 2_299_160.5, 2_451_545.75, -1.5] {
            let result = JulianDayResult::new(JulianDay::new(value));
            assert_eq!(
                result.julian_day_number,
                (result.julian_day.value() + 0.5).floor() as i64
            );
        }
    }

    #[test]
    fn utc_roundtrip_j2000() {
        // 2000-01-01T12:00:00Z == JD 2451545.0
        let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
        let jd = JulianDay::from_utc(datetime);
        assert!((jd.value() - 2_451_545.0).abs() < 1e-9);

        let back = jd.to_utc().expect("to_utc");
        let delta_ns =
            back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
        assert!(delta_ns.abs() < 1_000, "roundtrip error: {} ns", delta_ns);
    }

    #[test]
    fn arithmetic_and_ordering() {
        let mut jd = JulianDay::J2000;
        jd += Days::new(1.0);
        assert_eq!(jd.quantity(), Days::new(2_451_546.0));
        jd -= Days::new(0.5);
        assert_eq!(jd.quantity(), Days::new(2_451_545.5));

        let diff = jd - JulianDay::J2000;
        assert_eq!(diff, Days::new(0.5));

        assert!(JulianDay::GREGORIAN_REFORM < JulianDay::J2000);
        assert_eq!(JulianDay::J2000.min(jd), JulianDay::J2000);
        assert_eq!(JulianDay::J2000.max(jd), jd);
    }

    #[test]
    fn into_days_roundtrip() {
        let jd = JulianDay::new(2_451_547.5);
        let days: Days = jd.into();
        assert_eq!(days, Days::new(2_451_547.5));
        assert_eq!(JulianDay::from(days), jd);
    }

    #[test]
    fn display_labels_scale() {
        let s = JulianDay::J2000.to_string();
        assert!(s.starts_with("JD "), "unexpected display: {s}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_bare_f64() {
        let jd = JulianDay::J2000;
        let json = serde_json::to_string(&jd).unwrap();
        assert_eq!(json, "2451545.0");
        let back: JulianDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, jd);
    }
}
