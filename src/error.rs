// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Validation errors for civil date-time inputs.
//!
//! The conversion functions themselves are total and never fail; validation
//! is an optional layer in front of them (see
//! [`CivilDateTime::validate`](crate::CivilDateTime::validate)).

use std::fmt;

/// A civil date-time field outside its documented range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A field holds a value outside `min..=max`.
    OutOfRange {
        /// Name of the offending field (`"month"`, `"day"`, ...).
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} = {value} is outside {min}..={max}"),
        }
    }
}

impl std::error::Error for ValidationError {}
