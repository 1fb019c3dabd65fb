//! # Keplerian orbital elements of a TLE
//!
//! This module defines [`KeplerianElements`], the classical element set read out of
//! a [`TleRecord`](crate::record::TleRecord), and the **derived quantities** of the
//! two-body problem at the record's own epoch:
//!
//! 1. **E** – Eccentric anomaly, from Kepler's equation (see [`solve_kepler_equation`])
//! 2. **ν** – True anomaly
//! 3. **a** – Semi-major axis, from the mean motion through `a³ = GM / n²`
//! 4. **p** – Semi-latus rectum `a (1 − e²)`
//! 5. **r** – Orbital radius `p / (1 + e cos ν)`
//! 6. **x, v** – Cartesian position and velocity, rotated from the orbital plane
//!    into the inertial frame with `(i, Ω, ω)`
//!
//! Nothing is cached: every method recomputes from the stored elements, so a
//! mutated record always yields consistent derived values.
//!
//! ## Units
//!
//! - Angles: **radians**
//! - Mean motion: **rad/s**
//! - Lengths: **meters**, velocities: **m/s**
//! - Epoch: **MJD** (UTC)
//!
//! This is not a propagator: no perturbation is applied and no other epoch than
//! `reference_epoch` can be evaluated.

use std::fmt;

use nalgebra::Vector3;

use crate::{
    constants::{Meter, Radian, GM_EARTH, MJD, SECONDS_PER_DAY},
    kepler::{solve_kepler_equation, true_anomaly_from_eccentric},
    tle_errors::TleError,
};

/// Classical orbital elements of an Earth satellite at a reference epoch.
///
/// Units
/// -----
/// * `reference_epoch`: MJD (UTC).
/// * `eccentricity`: unitless.
/// * `inclination`: radians.
/// * `ascending_node_longitude`: radians (Ω).
/// * `periapsis_argument`: radians (ω).
/// * `mean_anomaly`: radians (M).
/// * `mean_motion`: radians per second (n).
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct KeplerianElements {
    pub reference_epoch: MJD,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub mean_anomaly: Radian,
    pub mean_motion: f64,
}

impl KeplerianElements {
    /// Eccentric anomaly `E` solving `M = E − e sin E`.
    ///
    /// Return
    /// ------
    /// * `E` in radians, or [`TleError::ConvergenceError`] for non-elliptic or
    ///   non-converging inputs.
    pub fn eccentric_anomaly(&self) -> Result<Radian, TleError> {
        solve_kepler_equation(self.mean_anomaly, self.eccentricity)
    }

    /// True anomaly `ν = 2 atan(√((1+e)/(1−e)) tan(E/2))`.
    pub fn true_anomaly(&self) -> Result<Radian, TleError> {
        Ok(true_anomaly_from_eccentric(
            self.eccentric_anomaly()?,
            self.eccentricity,
        ))
    }

    /// Semi-major axis `a = (GM / n²)^(1/3)`.
    pub fn semi_major_axis(&self) -> Meter {
        (GM_EARTH / self.mean_motion.powi(2)).cbrt()
    }

    /// Semi-latus rectum `p = a (1 − e²)`.
    pub fn semi_latus_rectum(&self) -> Meter {
        self.semi_major_axis() * (1.0 - self.eccentricity.powi(2))
    }

    /// Distance to the focus `r = p / (1 + e cos ν)`.
    pub fn radius(&self) -> Result<Meter, TleError> {
        let nu = self.true_anomaly()?;
        Ok(self.radius_at(nu))
    }

    /// Orbital period in days.
    pub fn period(&self) -> f64 {
        std::f64::consts::TAU / self.mean_motion / SECONDS_PER_DAY
    }

    /// Inertial Cartesian position in meters.
    pub fn position(&self) -> Result<Vector3<f64>, TleError> {
        Ok(self.state_vector()?.0)
    }

    /// Inertial Cartesian velocity in m/s.
    pub fn velocity(&self) -> Result<Vector3<f64>, TleError> {
        Ok(self.state_vector()?.1)
    }

    /// Position and velocity at the reference epoch, solving Kepler's equation once.
    ///
    /// The orbital-plane state `(r, ṙ, r ν̇)` is rotated into the inertial frame
    /// with the argument of latitude `u = ω + ν`, the node `Ω` and the inclination `i`.
    ///
    /// Return
    /// ------
    /// * `(position [m], velocity [m/s])`
    pub fn state_vector(&self) -> Result<(Vector3<f64>, Vector3<f64>), TleError> {
        let nu = self.true_anomaly()?;
        let r = self.radius_at(nu);

        let (sin_node, cos_node) = self.ascending_node_longitude.sin_cos();
        let (sin_incl, cos_incl) = self.inclination.sin_cos();
        let (sin_u, cos_u) = (self.periapsis_argument + nu).sin_cos();

        let position = r * Vector3::new(
            cos_node * cos_u - sin_node * sin_u * cos_incl,
            sin_node * cos_u + cos_node * sin_u * cos_incl,
            sin_u * sin_incl,
        );

        let v0 = (GM_EARTH / self.semi_latus_rectum()).sqrt();
        let radial = v0 * self.eccentricity * nu.sin();
        let transverse = v0 * (1.0 + self.eccentricity * nu.cos());

        // components along the node line and its in-plane normal
        let along_node = radial * cos_u - transverse * sin_u;
        let across_node = radial * sin_u + transverse * cos_u;

        let velocity = Vector3::new(
            along_node * cos_node - across_node * sin_node * cos_incl,
            along_node * sin_node + across_node * cos_node * cos_incl,
            across_node * sin_incl,
        );

        Ok((position, velocity))
    }

    fn radius_at(&self, true_anomaly: Radian) -> Meter {
        self.semi_latus_rectum() / (1.0 + self.eccentricity * true_anomaly.cos())
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Keplerian Elements @ epoch (MJD): {:.8}",
            self.reference_epoch
        )?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  n   (mean motion)           = {:.10e} rad/s",
            self.mean_motion
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.7}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.4}°)",
            self.inclination,
            self.inclination.to_degrees()
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6} rad ({:.4}°)",
            self.ascending_node_longitude,
            self.ascending_node_longitude.to_degrees()
        )?;
        writeln!(
            f,
            "  ω   (argument of perigee)   = {:.6} rad ({:.4}°)",
            self.periapsis_argument,
            self.periapsis_argument.to_degrees()
        )?;
        writeln!(
            f,
            "  M   (mean anomaly)          = {:.6} rad ({:.4}°)",
            self.mean_anomaly,
            self.mean_anomaly.to_degrees()
        )
    }
}
