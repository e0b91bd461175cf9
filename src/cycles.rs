// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Classical chronological cycles.
//!
//! Joseph Scaliger anchored his Julian Period at 4713 BCE (astronomical
//! year −4712) because that is the most recent year in which the three
//! classical cycles all stood at position 1:
//!
//! | Cycle | Length | Function |
//! |-------|--------|----------|
//! | Solar | 28 years | [`solar_number`] |
//! | Metonic (Lunar) | 19 years | [`lunar_number`] |
//! | Indiction | 15 years | [`indiction_number`] |
//! | Julian Period | 15·19·28 = 7980 years | [`julian_period_year`] |
//!
//! All positions are 1-based.  Negative and zero years (BCE, astronomical
//! numbering) are handled by `i64::rem_euclid`, the always-non-negative
//! modulo, so every function is total over `i32`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length of the composite Julian Period in years.
pub const JULIAN_PERIOD_YEARS: i64 = 15 * 19 * 28;

/// Position of a year within the 28-year Solar Cycle (`1..=28`).
///
/// After one Solar Cycle the days of the week fall on the same calendar
/// dates again (in the Julian calendar).
#[inline]
pub fn solar_number(year: i32) -> i32 {
    ((i64::from(year) + 8).rem_euclid(28) + 1) as i32
}

/// Position of a year within the 19-year Metonic (Lunar) cycle (`1..=19`).
///
/// Also known as the *golden number*: after 19 years the phases of the Moon
/// recur on the same calendar dates.
#[inline]
pub fn lunar_number(year: i32) -> i32 {
    (i64::from(year).rem_euclid(19) + 1) as i32
}

/// Position of a year within the 15-year Indiction cycle (`1..=15`).
///
/// The Roman fiscal cycle; it has no astronomical meaning but is one of the
/// three factors of the Julian Period.
#[inline]
pub fn indiction_number(year: i32) -> i32 {
    ((i64::from(year) + 2).rem_euclid(15) + 1) as i32
}

/// Position of a year within the 7980-year Julian Period (`1..=7980`).
///
/// Recombines the three zero-based cycle positions with the classical
/// coefficients (6916, 4200, 4845), each of which is ≡ 1 modulo its own
/// cycle length and ≡ 0 modulo the other two, then reduces modulo 7980.
pub fn julian_period_year(year: i32) -> i32 {
    let ind0 = i64::from(indiction_number(year) - 1); // 0..=14
    let lun0 = i64::from(lunar_number(year) - 1); // 0..=18
    let sol0 = i64::from(solar_number(year) - 1); // 0..=27

    let combined = 6916 * ind0 + 4200 * lun0 + 4845 * sol0;
    (combined.rem_euclid(JULIAN_PERIOD_YEARS) + 1) as i32
}

/// A year's position in all four cycles at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CyclePosition {
    /// Solar Cycle position, `1..=28`.
    pub solar: i32,
    /// Metonic (Lunar) cycle position, `1..=19`.
    pub lunar: i32,
    /// Indiction cycle position, `1..=15`.
    pub indiction: i32,
    /// Julian Period position, `1..=7980`.
    pub julian_period: i32,
}

impl CyclePosition {
    /// Compute all four cycle positions for a year.
    pub fn of_year(year: i32) -> Self {
        Self {
            solar: solar_number(year),
            lunar: lunar_number(year),
            indiction: indiction_number(year),
            julian_period: julian_period_year(year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaliger_epoch_all_ones() {
        assert_eq!(solar_number(-4712), 1);
        assert_eq!(lunar_number(-4712), 1);
        assert_eq!(indiction_number(-4712), 1);
        assert_eq!(julian_period_year(-4712), 1);
    }

    #[test]
    fn next_period_starts_in_ce_3268() {
        let year = -4712 + JULIAN_PERIOD_YEARS as i32;
        assert_eq!(year, 3268);
        assert_eq!(solar_number(year), 1);
        assert_eq!(lunar_number(year), 1);
        assert_eq!(indiction_number(year), 1);
        assert_eq!(julian_period_year(year), 1);
    }

    #[test]
    fn known_years() {
        // 2025: solar 18, golden number 12, indiction 3.
        assert_eq!(solar_number(2025), 18);
        assert_eq!(lunar_number(2025), 12);
        assert_eq!(indiction_number(2025), 3);
        assert_eq!(julian_period_year(2025), 2025 + 4713);

        // 2000: the almanac values.
        assert_eq!(solar_number(2000), 21);
        assert_eq!(lunar_number(2000), 6);
        assert_eq!(indiction_number(2000), 8);
        assert_eq!(julian_period_year(2000), 6713);
    }

    #[test]
    fn periodicity() {
        for year in [-9000, -4712, -1, 0, 1, 1582, 2025, 7000] {
            assert_eq!(solar_number(year), solar_number(year + 28));
            assert_eq!(lunar_number(year), lunar_number(year + 19));
            assert_eq!(indiction_number(year), indiction_number(year + 15));
            assert_eq!(julian_period_year(year), julian_period_year(year + 7980));
        }
    }

    #[test]
    fn bce_years_stay_in_range() {
        for year in [-1, 0, -100, -4712, -7980, i32::MIN / 2] {
            assert!((1..=28).contains(&solar_number(year)));
            assert!((1..=19).contains(&lunar_number(year)));
            assert!((1..=15).contains(&indiction_number(year)));
            assert!((1..=7980).contains(&julian_period_year(year)));
        }
        assert_eq!(solar_number(-1), 8);
        assert_eq!(lunar_number(0), 1);
        assert_eq!(indiction_number(-100), 8);
    }

    #[test]
    fn julian_period_is_a_bijection_over_one_period() {
        // Every year of one full period maps to a distinct position.
        let mut seen = vec![false; JULIAN_PERIOD_YEARS as usize];
        for year in -4712..(-4712 + JULIAN_PERIOD_YEARS as i32) {
            let pos = julian_period_year(year);
            assert!(!seen[(pos - 1) as usize], "duplicate position {pos}");
            seen[(pos - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn of_year_bundles_the_four() {
        let pos = CyclePosition::of_year(2025);
        assert_eq!(
            pos,
            CyclePosition {
                solar: 18,
                lunar: 12,
                indiction: 3,
                julian_period: 6738,
            }
        );
    }
}
