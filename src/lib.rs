// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day & Julian Period Module
//!
//! This crate converts between civil calendar date-times (proleptic
//! Julian/Gregorian, with the historical 1582-10-15 reform boundary) and
//! the continuous astronomical Julian Day scale, and locates a year within
//! the classical chronological cycles that make up Scaliger's 7980-year
//! Julian Period.
//!
//! # Core types
//!
//! - [`CivilDateTime`] — a calendar date with optionally unspecified
//!   time-of-day, the input of the forward conversion.
//! - [`JulianDay`] — a point on the continuous Julian Day scale.
//! - [`JulianDayResult`] — forward-conversion output: JD plus its JDN.
//! - [`ResolvedDateTime`] — fully normalized inverse-conversion output.
//! - [`Calendar`] — the Julian/Gregorian regime and its leap-year facts.
//! - [`CyclePosition`] — a year's position in all four cycles.
//!
//! # Conversions
//!
//! | Function | Direction |
//! |----------|-----------|
//! | [`gregorian_to_jd`] | civil date-time → JD / JDN |
//! | [`jd_to_gregorian`] | JD → normalized civil date-time |
//!
//! Both are pure, total, stateless functions: no input is rejected, and
//! out-of-range components produce numerically well-defined (if
//! calendar-meaningless) results.  An optional validation layer
//! ([`CivilDateTime::validate`]) rejects out-of-range fields up front.
//!
//! # Cycle positions
//!
//! | Function | Cycle | Range |
//! |----------|-------|-------|
//! | [`solar_number`] | Solar (28 y) | 1..=28 |
//! | [`lunar_number`] | Metonic / Lunar (19 y) | 1..=19 |
//! | [`indiction_number`] | Indiction (15 y) | 1..=15 |
//! | [`julian_period_year`] | Julian Period (7980 y) | 1..=7980 |
//!
//! All four accept any `i32` year, including zero and negative years
//! (astronomical numbering for BCE).
//!
//! # Quick example
//! ```
//! use scaliger::{CivilDateTime, CyclePosition};
//!
//! let dt = CivilDateTime::from_ymd(2000, 1, 1); // time defaults to noon UT
//! let jd = dt.to_julian_day();
//! assert_eq!(jd.julian_day.value(), 2_451_545.0);
//! assert_eq!(jd.julian_day_number, 2_451_545);
//!
//! let cycles = CyclePosition::of_year(2000);
//! assert_eq!(cycles.julian_period, 6_713);
//! ```

mod calendar;
mod civil;
mod convert;
mod cycles;
mod error;
mod julian_day;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{Calendar, GREGORIAN_REFORM_JDN};
pub use civil::{CivilDateTime, ResolvedDateTime};
pub use convert::{gregorian_to_jd, jd_to_gregorian};
pub use cycles::{
    indiction_number, julian_period_year, lunar_number, solar_number, CyclePosition,
    JULIAN_PERIOD_YEARS,
};
pub use error::ValidationError;
pub use julian_day::{JulianDay, JulianDayResult};
