use tracing::trace;

use super::constants::{DPI, KEPLER_RELATIVE_TOLERANCE, MAX_KEPLER_ITERATIONS};
use crate::tle_errors::TleError;

/// Principal value of an angle in radians, in `[0, 2π)`.
pub fn principal_angle(a: f64) -> f64 {
    let r = a.rem_euclid(DPI);
    // rem_euclid may round up to exactly 2π for tiny negative inputs
    if r >= DPI {
        0.0
    } else {
        r
    }
}

/// Solve Kepler's equation `M = E − e·sin(E)` for the eccentric anomaly.
///
/// The solve is the fixed-point iteration `E ← M + e·sin(E)` started at `E = M`.
/// It stops as soon as the relative change of `E` between two steps drops to
/// [`KEPLER_RELATIVE_TOLERANCE`] (or the step is exactly zero).
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` in radians
/// * `eccentricity`: eccentricity `e`, elliptic orbits only (`0 <= e < 1`)
///
/// Return
/// ------
/// * the eccentric anomaly `E` in radians. A circular orbit returns `M` unchanged.
/// * [`TleError::ConvergenceError`] when the inputs are not finite, when `e` lies
///   outside `[0, 1)` or when [`MAX_KEPLER_ITERATIONS`] steps were not enough.
///   The contraction rate of the iteration is `e·cos(E)`, so eccentricities close
///   to one converge slowly near perigee and may reach the cap.
pub fn solve_kepler_equation(mean_anomaly: f64, eccentricity: f64) -> Result<f64, TleError> {
    if !mean_anomaly.is_finite() || !(0.0..1.0).contains(&eccentricity) {
        return Err(TleError::ConvergenceError { iterations: 0 });
    }
    if eccentricity == 0.0 {
        return Ok(mean_anomaly);
    }

    let mut ecc_anomaly = mean_anomaly;
    for iteration in 1..=MAX_KEPLER_ITERATIONS {
        let previous = ecc_anomaly;
        ecc_anomaly = mean_anomaly + eccentricity * previous.sin();

        let step = (ecc_anomaly - previous).abs();
        if step == 0.0 || step <= KEPLER_RELATIVE_TOLERANCE * ecc_anomaly.abs() {
            trace!(iteration, eccentricity, "Kepler equation converged");
            return Ok(ecc_anomaly);
        }
    }

    Err(TleError::ConvergenceError {
        iterations: MAX_KEPLER_ITERATIONS,
    })
}

/// True anomaly from the eccentric anomaly (half-angle tangent formula).
pub fn true_anomaly_from_eccentric(ecc_anomaly: f64, eccentricity: f64) -> f64 {
    2.0 * (((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt() * (ecc_anomaly / 2.0).tan()).atan()
}

/// Eccentric anomaly from the true anomaly, inverse of [`true_anomaly_from_eccentric`].
pub fn eccentric_from_true_anomaly(true_anomaly: f64, eccentricity: f64) -> f64 {
    2.0 * (((1.0 - eccentricity) / (1.0 + eccentricity)).sqrt() * (true_anomaly / 2.0).tan()).atan()
}

/// Mean anomaly reached at a given eccentric anomaly, `M = E − e·sin(E)`.
pub fn mean_from_eccentric_anomaly(ecc_anomaly: f64, eccentricity: f64) -> f64 {
    ecc_anomaly - eccentricity * ecc_anomaly.sin()
}

#[cfg(test)]
mod kepler_test {

    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_principal_angle() {
        assert_eq!(principal_angle(1.0), 1.0);
        assert_relative_eq!(principal_angle(-PI / 2.0), 1.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(principal_angle(5.0 * PI), PI, epsilon = 1e-12);
        assert!(principal_angle(-1e-20) < DPI);
    }

    #[test]
    fn test_circular_orbit_is_identity() {
        for m in [0.0, 0.3, 1.0, PI, 4.5, 6.2] {
            assert_eq!(solve_kepler_equation(m, 0.0), Ok(m));
        }
    }

    #[test]
    fn test_solve_kepler_equation() {
        let e = 0.0006703;
        let m = 325.0288_f64.to_radians();
        let ecc_anomaly = solve_kepler_equation(m, e).unwrap();
        assert_relative_eq!(
            mean_from_eccentric_anomaly(ecc_anomaly, e),
            m,
            max_relative = 1e-7
        );

        let e = 0.7;
        let m = 0.4;
        let ecc_anomaly = solve_kepler_equation(m, e).unwrap();
        assert_relative_eq!(
            ecc_anomaly - e * ecc_anomaly.sin(),
            m,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_zero_mean_anomaly() {
        assert_eq!(solve_kepler_equation(0.0, 0.5), Ok(0.0));
    }

    #[test]
    fn test_near_parabolic_is_bounded() {
        for e in [0.99, 0.999, 0.999999] {
            for m in [1e-4, 0.05, 1.0, 3.0] {
                match solve_kepler_equation(m, e) {
                    Ok(ecc_anomaly) => assert_relative_eq!(
                        mean_from_eccentric_anomaly(ecc_anomaly, e),
                        m,
                        max_relative = 1e-3
                    ),
                    Err(err) => assert_eq!(
                        err,
                        TleError::ConvergenceError {
                            iterations: MAX_KEPLER_ITERATIONS
                        }
                    ),
                }
            }
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            solve_kepler_equation(1.0, 1.0),
            Err(TleError::ConvergenceError { iterations: 0 })
        );
        assert_eq!(
            solve_kepler_equation(1.0, 1.5),
            Err(TleError::ConvergenceError { iterations: 0 })
        );
        assert!(solve_kepler_equation(f64::NAN, 0.1).is_err());
        assert!(solve_kepler_equation(1.0, -0.1).is_err());
    }

    #[test]
    fn test_anomaly_conversions() {
        let e = 0.3;
        for ecc_anomaly in [0.1, 1.0, 2.5, -2.0] {
            let nu = true_anomaly_from_eccentric(ecc_anomaly, e);
            assert_relative_eq!(
                eccentric_from_true_anomaly(nu, e),
                ecc_anomaly,
                epsilon = 1e-12
            );
        }
        assert_eq!(true_anomaly_from_eccentric(0.0, e), 0.0);
    }
}
