//! # Constants and type definitions for tlekit
//!
//! This module centralizes the **physical constants**, **unit conversion factors**,
//! the **fixed-column layout** of the TLE format and the type aliases shared by
//! the codec, the record model and the orbital derivation layer.
//!
//! ## Overview
//!
//! - Gravitational parameter and time units used by the Keplerian layer
//! - Unit conversions (rev/day ↔ rad/s, mean motion derivatives)
//! - Column offsets and widths of line 0, line 1 and line 2
//! - Numerical tolerances and iteration caps
//!
//! All values are immutable; nothing in the crate holds global mutable state.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Earth gravitational parameter GM in m³/s²
pub const GM_EARTH: f64 = 3.986004418e14;

/// Revolutions per day → radians per second
pub const REV_PER_DAY_TO_RAD_PER_SEC: f64 = DPI / SECONDS_PER_DAY;

/// Wire value of the first-derivative field (ṅ/2, rev/day²) → ṅ in rad/s²
pub const MEAN_MOTION_DOT_SCALE: f64 = 2.0 * DPI / (SECONDS_PER_DAY * SECONDS_PER_DAY);

/// Wire value of the second-derivative field (n̈/6, rev/day³) → n̈ in rad/s³
pub const MEAN_MOTION_DDOT_SCALE: f64 =
    6.0 * DPI / (SECONDS_PER_DAY * SECONDS_PER_DAY * SECONDS_PER_DAY);

/// Relative change of the eccentric anomaly below which the Kepler iteration stops
pub const KEPLER_RELATIVE_TOLERANCE: f64 = 1e-7;

/// Upper bound on fixed-point iterations for Kepler's equation
pub const MAX_KEPLER_ITERATIONS: usize = 10_000;

// -------------------------------------------------------------------------------------------------
// TLE layout (0-based column offsets, widths in characters)
// -------------------------------------------------------------------------------------------------

/// Width of the name line in three-line sets
pub const NAME_LINE_WIDTH: usize = 24;

/// Column of the checksum digit on lines 1 and 2
pub const CHECKSUM_INDEX: usize = 68;

/// Full length of a data line, checksum included
pub const DATA_LINE_LENGTH: usize = CHECKSUM_INDEX + 1;

/// A fixed-width field: `(offset, width)`.
pub type Column = (usize, usize);

/// Satellite catalogue number, same columns on both data lines
pub const COL_SATELLITE_NUMBER: Column = (2, 5);

// line 1
pub const COL_CLASSIFICATION: usize = 7;
pub const COL_DESIGNATOR: Column = (9, 8);
pub const COL_EPOCH: Column = (18, 14);
pub const COL_MEAN_MOTION_DOT: Column = (33, 10);
pub const COL_MEAN_MOTION_DDOT: Column = (44, 8);
pub const COL_BSTAR: Column = (53, 8);
pub const COL_EPHEMERIS_TYPE: usize = 62;
pub const COL_ELEMENT_NUMBER: Column = (64, 4);

// line 2
pub const COL_INCLINATION: Column = (8, 8);
pub const COL_RIGHT_ASCENSION: Column = (17, 8);
pub const COL_ECCENTRICITY: Column = (26, 7);
pub const COL_ARGUMENT_OF_PERIGEE: Column = (34, 8);
pub const COL_MEAN_ANOMALY: Column = (43, 8);
pub const COL_MEAN_MOTION: Column = (52, 11);
pub const COL_REVOLUTION_NUMBER: Column = (63, 5);

/// Two-digit years at or above this value belong to the 1900s
pub const TLE_CENTURY_PIVOT: i32 = 57;

/// Largest distance in years from 2000 of an epoch that can still be written
pub const MAX_EPOCH_YEAR_OFFSET: i32 = 1_000;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in meters
pub type Meter = f64;
/// Modified Julian Date (days, UTC)
pub type MJD = f64;
