//! # TLE record model
//!
//! [`TleRecord`] owns the raw text of one Two-Line Element set (two data lines and
//! an optional name line) and exposes every field through a lazy accessor and a
//! mutator.
//!
//! ## Lifecycle
//! -----------------
//! * [`TleRecord::parse`] (or [`TleRecord::from_lines`] / [`TleRecord::from_named_lines`])
//!   verifies the checksum of both data lines and rejects the whole record on the
//!   first failure. Nothing else is decoded unless [`ParseMode::Eager`] is requested.
//! * Accessors decode their field on first use and memoize it. The [`FieldMask`]
//!   of the record tells which cached values are authoritative.
//! * Mutators overwrite a field and mark it authoritative: the raw text is no
//!   longer consulted for that field.
//! * [`TleRecord::serialize`] re-encodes every field into fresh lines with fresh
//!   checksums, in the shape selected by [`LineFormat`].
//!
//! ## Error handling
//! -----------------
//! Construction fails fast with [`TleError::TooShortLine`] or
//! [`TleError::ChecksumError`]. A field that does not decode never aborts the
//! record: its accessor returns a zero value, the failure is stored as
//! [`TleRecord::last_error`] and the next read decodes again. Derived orbital
//! quantities return their [`TleError::ConvergenceError`] to the caller.
//!
//! ## Units
//! -----------------
//! Angles are **radians**, the mean motion is **rad/s** (its derivatives rad/s²
//! and rad/s³) and the epoch is **MJD (UTC)**. Angle mutators take **degrees**,
//! matching the text format.
//!
//! ## Concurrency
//! -----------------
//! Memoization mutates interior cells through `&self`, so a record is `Send` but
//! not `Sync`. Each thread owns its own records; `Clone` gives an independent copy
//! including the cache.

pub mod field;
pub mod options;

use std::{
    cell::{Cell, RefCell},
    fmt,
};

use hifitime::Epoch;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    checksum::{compute_checksum, verify_line},
    codec::{
        format_angle, format_char, format_decimal, format_epoch, format_implied_decimal, format_int,
        format_packed_exponent, format_signed_fraction, format_string, parse_char, parse_decimal,
        parse_epoch, parse_implied_decimal, parse_int, parse_packed_exponent, parse_string, Align,
    },
    constants::*,
    kepler::{eccentric_from_true_anomaly, mean_from_eccentric_anomaly, principal_angle},
    keplerian_element::KeplerianElements,
    time::mjd_to_epoch,
    tle_errors::TleError,
};

pub use field::{Field, FieldMask};
pub use options::{LineFormat, ParseMode};

/// Raw text of one TLE, as handed over by whatever reads the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTle<'a> {
    pub name: Option<&'a str>,
    pub line1: &'a str,
    pub line2: &'a str,
}

impl<'a> RawTle<'a> {
    pub fn two_lines(line1: &'a str, line2: &'a str) -> Self {
        RawTle {
            name: None,
            line1,
            line2,
        }
    }

    pub fn three_lines(name: &'a str, line1: &'a str, line2: &'a str) -> Self {
        RawTle {
            name: Some(name),
            line1,
            line2,
        }
    }
}

/// Owned snapshot of every decoded field of a record.
///
/// Units follow [`TleRecord`]: radians, rad/s (and derivatives), MJD (UTC).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TleFields {
    pub satellite_name: String,
    pub satellite_number: String,
    pub classification: char,
    pub designator: String,
    pub epoch: MJD,
    pub mean_motion_dot: f64,
    pub mean_motion_ddot: f64,
    pub bstar: f64,
    pub ephemeris_type: char,
    pub element_number: i32,
    pub inclination: Radian,
    pub right_ascension: Radian,
    pub eccentricity: f64,
    pub argument_of_perigee: Radian,
    pub mean_anomaly: Radian,
    pub mean_motion: f64,
    pub revolution_number: i32,
}

/// Per-field cache. A value is meaningful only when its bit is set in the
/// record's [`FieldMask`].
#[derive(Debug, Clone, Default)]
struct FieldCache {
    satellite_name: RefCell<String>,
    satellite_number: RefCell<String>,
    designator: RefCell<String>,
    classification: Cell<char>,
    epoch: Cell<MJD>,
    mean_motion_dot: Cell<f64>,
    mean_motion_ddot: Cell<f64>,
    bstar: Cell<f64>,
    ephemeris_type: Cell<char>,
    element_number: Cell<i32>,
    inclination: Cell<Radian>,
    right_ascension: Cell<Radian>,
    eccentricity: Cell<f64>,
    argument_of_perigee: Cell<Radian>,
    mean_anomaly: Cell<Radian>,
    mean_motion: Cell<f64>,
    revolution_number: Cell<i32>,
}

type Decoded<T> = Option<Result<T, TleError>>;

/// A Two-Line Element set with lazily decoded, individually overridable fields.
///
/// See the [`record`](crate::record) module for the lifecycle and error model.
#[derive(Debug, Clone, Default)]
pub struct TleRecord {
    name_line: Option<String>,
    line1: Option<String>,
    line2: Option<String>,
    line_format: LineFormat,
    cache: FieldCache,
    cached: FieldMask,
    last_error: RefCell<Option<TleError>>,
}

impl TleRecord {
    /// Empty record, to be filled through mutators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from raw text.
    ///
    /// Both data lines must carry a valid checksum; the name line is not checked.
    /// A three-line input selects [`LineFormat::ThreeLines`] for serialization,
    /// a two-line input [`LineFormat::TwoLines`].
    ///
    /// Arguments
    /// -----------------
    /// * `raw` – the name line (optional), line 1 and line 2.
    /// * `mode` – decode everything now ([`ParseMode::Eager`]) or on demand.
    ///
    /// Return
    /// ----------
    /// * The record, or the first [`TleError::TooShortLine`] / [`TleError::ChecksumError`]
    ///   found on line 1 then line 2. In eager mode field failures do not fail the
    ///   construction; they are available through [`TleRecord::last_error`].
    pub fn parse(raw: RawTle<'_>, mode: ParseMode) -> Result<Self, TleError> {
        for (number, line) in [(1, raw.line1), (2, raw.line2)] {
            if let Err(err) = verify_line(line) {
                warn!(line = number, error = %err, "Rejecting TLE");
                return Err(err);
            }
        }

        let record = TleRecord {
            name_line: raw.name.map(str::to_string),
            line1: Some(raw.line1.to_string()),
            line2: Some(raw.line2.to_string()),
            line_format: if raw.name.is_some() {
                LineFormat::ThreeLines
            } else {
                LineFormat::TwoLines
            },
            ..Default::default()
        };

        if mode == ParseMode::Eager {
            record.parse_all();
        }
        Ok(record)
    }

    pub fn from_lines(line1: &str, line2: &str, mode: ParseMode) -> Result<Self, TleError> {
        Self::parse(RawTle::two_lines(line1, line2), mode)
    }

    pub fn from_named_lines(
        name: &str,
        line1: &str,
        line2: &str,
        mode: ParseMode,
    ) -> Result<Self, TleError> {
        Self::parse(RawTle::three_lines(name, line1, line2), mode)
    }

    /// Replace the content of this record with freshly parsed text.
    ///
    /// On failure the record is reset to an empty one whose last error is the
    /// failure, so no stale field from the previous content survives.
    pub fn assign(&mut self, raw: RawTle<'_>, mode: ParseMode) -> Result<(), TleError> {
        match Self::parse(raw, mode) {
            Ok(record) => {
                *self = record;
                Ok(())
            }
            Err(err) => {
                *self = Self::default();
                *self.last_error.get_mut() = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Build a record from a field snapshot, every field marked authoritative.
    pub fn from_fields(fields: &TleFields, line_format: LineFormat) -> Self {
        let record = TleRecord {
            line_format,
            ..Default::default()
        };
        let cache = &record.cache;
        cache.satellite_name.replace(fields.satellite_name.clone());
        cache
            .satellite_number
            .replace(fields.satellite_number.clone());
        cache.designator.replace(fields.designator.clone());
        cache.classification.set(fields.classification);
        cache.epoch.set(fields.epoch);
        cache.mean_motion_dot.set(fields.mean_motion_dot);
        cache.mean_motion_ddot.set(fields.mean_motion_ddot);
        cache.bstar.set(fields.bstar);
        cache.ephemeris_type.set(fields.ephemeris_type);
        cache.element_number.set(fields.element_number);
        cache.inclination.set(fields.inclination);
        cache.right_ascension.set(fields.right_ascension);
        cache.eccentricity.set(fields.eccentricity);
        cache.argument_of_perigee.set(fields.argument_of_perigee);
        cache.mean_anomaly.set(fields.mean_anomaly);
        cache.mean_motion.set(fields.mean_motion);
        cache.revolution_number.set(fields.revolution_number);
        record.cached.insert_all();
        record
    }

    /// Decode every field now.
    ///
    /// Fields that fail keep their zero value and are marked cached anyway, so
    /// later reads do not retry a decode that already failed. The last failure
    /// stays available through [`TleRecord::last_error`].
    pub fn parse_all(&self) {
        self.fields();
        self.cached.insert_all();
    }

    /// Snapshot of every field, decoding the ones not cached yet.
    pub fn fields(&self) -> TleFields {
        TleFields {
            satellite_name: self.satellite_name(),
            satellite_number: self.satellite_number(),
            classification: self.classification(),
            designator: self.designator(),
            epoch: self.epoch(),
            mean_motion_dot: self.mean_motion_dot(),
            mean_motion_ddot: self.mean_motion_ddot(),
            bstar: self.bstar(),
            ephemeris_type: self.ephemeris_type(),
            element_number: self.element_number(),
            inclination: self.inclination(),
            right_ascension: self.right_ascension(),
            eccentricity: self.eccentricity(),
            argument_of_perigee: self.argument_of_perigee(),
            mean_anomaly: self.mean_anomaly(),
            mean_motion: self.mean_motion(),
            revolution_number: self.revolution_number(),
        }
    }

    /// Most recent field decode failure (or construction failure after [`TleRecord::assign`]).
    pub fn last_error(&self) -> Option<TleError> {
        self.last_error.borrow().clone()
    }

    pub fn clear_error(&self) {
        self.last_error.replace(None);
    }

    /// Whether the cached value of `field` is authoritative.
    pub fn is_cached(&self, field: Field) -> bool {
        self.cached.contains(field)
    }

    pub fn line_format(&self) -> LineFormat {
        self.line_format
    }

    /// Select the serialization shape; decoded data is left untouched.
    pub fn set_line_format(&mut self, format: LineFormat) -> &mut Self {
        self.line_format = format;
        self
    }

    // ---------------------------------------------------------------------------------------------
    // Lazy decoding machinery
    // ---------------------------------------------------------------------------------------------

    fn record_failure(&self, field: Field, err: TleError) {
        debug!(%field, error = %err, "TLE field could not be decoded");
        self.last_error.replace(Some(err));
    }

    fn lazy<T: Copy + Default>(
        &self,
        field: Field,
        slot: &Cell<T>,
        decode: impl FnOnce(&Self) -> Decoded<T>,
    ) -> T {
        if self.cached.contains(field) {
            return slot.get();
        }
        match decode(self) {
            None => slot.get(),
            Some(Ok(value)) => {
                slot.set(value);
                self.cached.insert(field);
                value
            }
            Some(Err(err)) => {
                self.record_failure(field, err);
                slot.set(T::default());
                T::default()
            }
        }
    }

    fn lazy_string(
        &self,
        field: Field,
        slot: &RefCell<String>,
        decode: impl FnOnce(&Self) -> Decoded<String>,
    ) -> String {
        if self.cached.contains(field) {
            return slot.borrow().clone();
        }
        match decode(self) {
            None => slot.borrow().clone(),
            Some(Ok(value)) => {
                slot.replace(value.clone());
                self.cached.insert(field);
                value
            }
            Some(Err(err)) => {
                self.record_failure(field, err);
                slot.borrow_mut().clear();
                String::new()
            }
        }
    }

    fn decode_line1<T>(&self, decode: impl FnOnce(&str) -> Result<T, TleError>) -> Decoded<T> {
        self.line1.as_deref().map(decode)
    }

    fn decode_line2<T>(&self, decode: impl FnOnce(&str) -> Result<T, TleError>) -> Decoded<T> {
        self.line2.as_deref().map(decode)
    }

    fn store<T: Copy>(&self, field: Field, slot: &Cell<T>, value: T) {
        slot.set(value);
        self.cached.insert(field);
    }

    fn store_string(&self, field: Field, slot: &RefCell<String>, value: &str) {
        slot.replace(value.to_string());
        self.cached.insert(field);
    }

    // ---------------------------------------------------------------------------------------------
    // Name line
    // ---------------------------------------------------------------------------------------------

    /// Satellite name from the first 24 columns of the name line, blanks trimmed.
    pub fn satellite_name(&self) -> String {
        self.lazy_string(Field::SatelliteName, &self.cache.satellite_name, |rec| {
            rec.name_line.as_deref().map(|line| {
                let name: String = line.chars().take(NAME_LINE_WIDTH).collect();
                Ok(name.trim().to_string())
            })
        })
    }

    pub fn set_satellite_name(&mut self, name: &str) {
        self.store_string(Field::SatelliteName, &self.cache.satellite_name, name);
    }

    // ---------------------------------------------------------------------------------------------
    // Line 1
    // ---------------------------------------------------------------------------------------------

    /// Satellite catalogue number, read from line 1 and falling back to line 2.
    pub fn satellite_number(&self) -> String {
        self.lazy_string(Field::SatelliteNumber, &self.cache.satellite_number, |rec| {
            match rec.decode_line1(|line| parse_string(line, COL_SATELLITE_NUMBER)) {
                Some(Ok(number)) => Some(Ok(number)),
                Some(Err(err)) => {
                    rec.record_failure(Field::SatelliteNumber, err);
                    rec.decode_line2(|line| parse_string(line, COL_SATELLITE_NUMBER))
                }
                None => rec.decode_line2(|line| parse_string(line, COL_SATELLITE_NUMBER)),
            }
        })
    }

    pub fn set_satellite_number(&mut self, number: &str) {
        self.store_string(Field::SatelliteNumber, &self.cache.satellite_number, number);
    }

    /// Security classification (`U`, `C`, `S`), `'\0'` when blank.
    pub fn classification(&self) -> char {
        self.lazy(Field::Classification, &self.cache.classification, |rec| {
            rec.decode_line1(|line| Ok(parse_char(line, COL_CLASSIFICATION)))
        })
    }

    pub fn set_classification(&mut self, classification: char) {
        self.store(
            Field::Classification,
            &self.cache.classification,
            classification,
        );
    }

    /// International designator (launch year, launch number, piece).
    pub fn designator(&self) -> String {
        self.lazy_string(Field::Designator, &self.cache.designator, |rec| {
            rec.decode_line1(|line| parse_string(line, COL_DESIGNATOR))
        })
    }

    pub fn set_designator(&mut self, designator: &str) {
        self.store_string(Field::Designator, &self.cache.designator, designator);
    }

    /// Epoch of the elements in MJD (UTC).
    pub fn epoch(&self) -> MJD {
        self.lazy(Field::Epoch, &self.cache.epoch, |rec| {
            rec.decode_line1(|line| parse_epoch(line, COL_EPOCH))
        })
    }

    pub fn set_epoch(&mut self, epoch: MJD) {
        self.store(Field::Epoch, &self.cache.epoch, epoch);
    }

    /// Epoch of the elements as a calendar instant.
    pub fn epoch_datetime(&self) -> Epoch {
        mjd_to_epoch(self.epoch())
    }

    /// First time derivative of the mean motion, rad/s².
    pub fn mean_motion_dot(&self) -> f64 {
        self.lazy(Field::MeanMotionDot, &self.cache.mean_motion_dot, |rec| {
            rec.decode_line1(|line| {
                parse_decimal(line, COL_MEAN_MOTION_DOT).map(|v| v * MEAN_MOTION_DOT_SCALE)
            })
        })
    }

    pub fn set_mean_motion_dot(&mut self, value: f64) {
        self.store(Field::MeanMotionDot, &self.cache.mean_motion_dot, value);
    }

    /// Second time derivative of the mean motion, rad/s³.
    pub fn mean_motion_ddot(&self) -> f64 {
        self.lazy(Field::MeanMotionDdot, &self.cache.mean_motion_ddot, |rec| {
            rec.decode_line1(|line| {
                parse_packed_exponent(line, COL_MEAN_MOTION_DDOT).map(|v| v * MEAN_MOTION_DDOT_SCALE)
            })
        })
    }

    pub fn set_mean_motion_ddot(&mut self, value: f64) {
        self.store(Field::MeanMotionDdot, &self.cache.mean_motion_ddot, value);
    }

    /// B* drag term, in inverse earth radii.
    pub fn bstar(&self) -> f64 {
        self.lazy(Field::Bstar, &self.cache.bstar, |rec| {
            rec.decode_line1(|line| parse_packed_exponent(line, COL_BSTAR))
        })
    }

    pub fn set_bstar(&mut self, bstar: f64) {
        self.store(Field::Bstar, &self.cache.bstar, bstar);
    }

    /// Ephemeris type, `'\0'` when blank.
    pub fn ephemeris_type(&self) -> char {
        self.lazy(Field::EphemerisType, &self.cache.ephemeris_type, |rec| {
            rec.decode_line1(|line| Ok(parse_char(line, COL_EPHEMERIS_TYPE)))
        })
    }

    pub fn set_ephemeris_type(&mut self, ephemeris_type: char) {
        self.store(
            Field::EphemerisType,
            &self.cache.ephemeris_type,
            ephemeris_type,
        );
    }

    pub fn element_number(&self) -> i32 {
        self.lazy(Field::ElementNumber, &self.cache.element_number, |rec| {
            rec.decode_line1(|line| parse_int(line, COL_ELEMENT_NUMBER))
        })
    }

    pub fn set_element_number(&mut self, element_number: i32) {
        self.store(
            Field::ElementNumber,
            &self.cache.element_number,
            element_number,
        );
    }

    // ---------------------------------------------------------------------------------------------
    // Line 2
    // ---------------------------------------------------------------------------------------------

    /// Inclination in radians.
    pub fn inclination(&self) -> Radian {
        self.lazy(Field::Inclination, &self.cache.inclination, |rec| {
            rec.decode_line2(|line| parse_decimal(line, COL_INCLINATION).map(f64::to_radians))
        })
    }

    pub fn set_inclination(&mut self, inclination: Degree) {
        self.store(
            Field::Inclination,
            &self.cache.inclination,
            inclination.to_radians(),
        );
    }

    /// Right ascension of the ascending node in radians.
    pub fn right_ascension(&self) -> Radian {
        self.lazy(Field::RightAscension, &self.cache.right_ascension, |rec| {
            rec.decode_line2(|line| parse_decimal(line, COL_RIGHT_ASCENSION).map(f64::to_radians))
        })
    }

    pub fn set_right_ascension(&mut self, right_ascension: Degree) {
        self.store(
            Field::RightAscension,
            &self.cache.right_ascension,
            right_ascension.to_radians(),
        );
    }

    pub fn eccentricity(&self) -> f64 {
        self.lazy(Field::Eccentricity, &self.cache.eccentricity, |rec| {
            rec.decode_line2(|line| parse_implied_decimal(line, COL_ECCENTRICITY))
        })
    }

    pub fn set_eccentricity(&mut self, eccentricity: f64) {
        self.store(Field::Eccentricity, &self.cache.eccentricity, eccentricity);
    }

    /// Argument of perigee in radians.
    pub fn argument_of_perigee(&self) -> Radian {
        self.lazy(
            Field::ArgumentOfPerigee,
            &self.cache.argument_of_perigee,
            |rec| {
                rec.decode_line2(|line| {
                    parse_decimal(line, COL_ARGUMENT_OF_PERIGEE).map(f64::to_radians)
                })
            },
        )
    }

    pub fn set_argument_of_perigee(&mut self, argument_of_perigee: Degree) {
        self.store(
            Field::ArgumentOfPerigee,
            &self.cache.argument_of_perigee,
            argument_of_perigee.to_radians(),
        );
    }

    /// Mean anomaly in radians.
    pub fn mean_anomaly(&self) -> Radian {
        self.lazy(Field::MeanAnomaly, &self.cache.mean_anomaly, |rec| {
            rec.decode_line2(|line| parse_decimal(line, COL_MEAN_ANOMALY).map(f64::to_radians))
        })
    }

    pub fn set_mean_anomaly(&mut self, mean_anomaly: Degree) {
        self.store(
            Field::MeanAnomaly,
            &self.cache.mean_anomaly,
            mean_anomaly.to_radians(),
        );
    }

    /// Mean motion in rad/s.
    pub fn mean_motion(&self) -> f64 {
        self.lazy(Field::MeanMotion, &self.cache.mean_motion, |rec| {
            rec.decode_line2(|line| {
                parse_decimal(line, COL_MEAN_MOTION).map(|v| v * REV_PER_DAY_TO_RAD_PER_SEC)
            })
        })
    }

    /// Set the mean motion, in rad/s.
    pub fn set_mean_motion(&mut self, mean_motion: f64) {
        self.store(Field::MeanMotion, &self.cache.mean_motion, mean_motion);
    }

    /// Revolution number at epoch.
    pub fn revolution_number(&self) -> i32 {
        self.lazy(Field::RevolutionNumber, &self.cache.revolution_number, |rec| {
            rec.decode_line2(|line| parse_int(line, COL_REVOLUTION_NUMBER))
        })
    }

    pub fn set_revolution_number(&mut self, revolution_number: i32) {
        self.store(
            Field::RevolutionNumber,
            &self.cache.revolution_number,
            revolution_number,
        );
    }

    // ---------------------------------------------------------------------------------------------
    // Derived orbital quantities
    // ---------------------------------------------------------------------------------------------

    /// Classical elements feeding the derived quantities below.
    pub fn keplerian_elements(&self) -> KeplerianElements {
        KeplerianElements {
            reference_epoch: self.epoch(),
            eccentricity: self.eccentricity(),
            inclination: self.inclination(),
            ascending_node_longitude: self.right_ascension(),
            periapsis_argument: self.argument_of_perigee(),
            mean_anomaly: self.mean_anomaly(),
            mean_motion: self.mean_motion(),
        }
    }

    pub fn eccentric_anomaly(&self) -> Result<Radian, TleError> {
        self.keplerian_elements().eccentric_anomaly()
    }

    /// Rewrite the mean anomaly so that the eccentric anomaly equals `value` (radians).
    pub fn set_eccentric_anomaly(&mut self, value: Radian) {
        let mean_anomaly = mean_from_eccentric_anomaly(value, self.eccentricity());
        self.store(Field::MeanAnomaly, &self.cache.mean_anomaly, mean_anomaly);
    }

    pub fn true_anomaly(&self) -> Result<Radian, TleError> {
        self.keplerian_elements().true_anomaly()
    }

    /// Rewrite the mean anomaly so that the true anomaly equals `value` (radians).
    pub fn set_true_anomaly(&mut self, value: Radian) {
        let ecc_anomaly = eccentric_from_true_anomaly(value, self.eccentricity());
        self.set_eccentric_anomaly(ecc_anomaly);
    }

    /// Semi-major axis in meters.
    pub fn semi_major_axis(&self) -> Meter {
        self.keplerian_elements().semi_major_axis()
    }

    pub fn semi_latus_rectum(&self) -> Meter {
        self.keplerian_elements().semi_latus_rectum()
    }

    pub fn radius(&self) -> Result<Meter, TleError> {
        self.keplerian_elements().radius()
    }

    /// Inertial position at epoch, meters.
    pub fn position(&self) -> Result<Vector3<f64>, TleError> {
        self.keplerian_elements().position()
    }

    /// Inertial velocity at epoch, m/s.
    pub fn velocity(&self) -> Result<Vector3<f64>, TleError> {
        self.keplerian_elements().velocity()
    }

    // ---------------------------------------------------------------------------------------------
    // Serialization
    // ---------------------------------------------------------------------------------------------

    /// Name line, blank padded to 24 columns.
    pub fn format_name_line(&self) -> String {
        format_string(&self.satellite_name(), NAME_LINE_WIDTH, Align::Left)
    }

    /// Line 1 re-encoded from the current field values, checksum included.
    pub fn format_line1(&self) -> String {
        let mut line = String::with_capacity(DATA_LINE_LENGTH);
        line.push_str("1 ");
        line.push_str(&self.formatted_satellite_number());
        line.push(format_char(self.classification()));
        line.push(' ');
        line.push_str(&format_string(
            &self.designator(),
            COL_DESIGNATOR.1,
            Align::Left,
        ));
        line.push(' ');
        line.push_str(&format_epoch(self.epoch()));
        line.push(' ');
        line.push_str(&format_signed_fraction(
            self.mean_motion_dot() / MEAN_MOTION_DOT_SCALE,
            COL_MEAN_MOTION_DOT.1,
            8,
        ));
        line.push(' ');
        line.push_str(&format_packed_exponent(
            self.mean_motion_ddot() / MEAN_MOTION_DDOT_SCALE,
        ));
        line.push(' ');
        line.push_str(&format_packed_exponent(self.bstar()));
        line.push(' ');
        line.push(format_char(self.ephemeris_type()));
        line.push(' ');
        line.push_str(&format_int(self.element_number(), COL_ELEMENT_NUMBER.1));
        with_checksum(line)
    }

    /// Line 2 re-encoded from the current field values, checksum included.
    pub fn format_line2(&self) -> String {
        let angle = |radians: Radian| {
            format_angle(principal_angle(radians).to_degrees(), COL_INCLINATION.1, 4)
        };

        let mut line = String::with_capacity(DATA_LINE_LENGTH);
        line.push_str("2 ");
        line.push_str(&self.formatted_satellite_number());
        line.push(' ');
        line.push_str(&angle(self.inclination()));
        line.push(' ');
        line.push_str(&angle(self.right_ascension()));
        line.push(' ');
        line.push_str(&format_implied_decimal(
            self.eccentricity(),
            COL_ECCENTRICITY.1,
        ));
        line.push(' ');
        line.push_str(&angle(self.argument_of_perigee()));
        line.push(' ');
        line.push_str(&angle(self.mean_anomaly()));
        line.push(' ');
        line.push_str(&format_decimal(
            self.mean_motion() / REV_PER_DAY_TO_RAD_PER_SEC,
            COL_MEAN_MOTION.1,
            8,
        ));
        line.push_str(&format_int(
            self.revolution_number(),
            COL_REVOLUTION_NUMBER.1,
        ));
        with_checksum(line)
    }

    /// Lines of the record in the current [`LineFormat`], without line terminators.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3);
        if self.line_format == LineFormat::ThreeLines {
            lines.push(self.format_name_line());
        }
        lines.push(self.format_line1());
        lines.push(self.format_line2());
        lines
    }

    /// Text of the record, one `\n`-terminated line per TLE line.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    fn formatted_satellite_number(&self) -> String {
        format_string(
            &self.satellite_number(),
            COL_SATELLITE_NUMBER.1,
            Align::Right,
        )
    }
}

fn with_checksum(mut line: String) -> String {
    let checksum = compute_checksum(&line);
    line.push(char::from(b'0' + checksum));
    line
}

impl fmt::Display for TleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl PartialEq for TleRecord {
    fn eq(&self, other: &Self) -> bool {
        self.line_format == other.line_format && self.fields() == other.fields()
    }
}

impl TryFrom<RawTle<'_>> for TleRecord {
    type Error = TleError;

    fn try_from(raw: RawTle<'_>) -> Result<Self, Self::Error> {
        TleRecord::parse(raw, ParseMode::Lazy)
    }
}
