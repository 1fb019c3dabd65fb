#![allow(dead_code)]

use approx::assert_relative_eq;
use tlekit::{KeplerianElements, TleFields};

pub fn assert_orbit_close(actual: &KeplerianElements, expected: &KeplerianElements, epsilon: f64) {
    assert_relative_eq!(
        actual.reference_epoch,
        expected.reference_epoch,
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.mean_motion,
        expected.mean_motion,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.eccentricity,
        expected.eccentricity,
        epsilon = epsilon
    );
    assert_relative_eq!(actual.inclination, expected.inclination, epsilon = epsilon);
    assert_relative_eq!(
        actual.ascending_node_longitude,
        expected.ascending_node_longitude,
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.periapsis_argument,
        expected.periapsis_argument,
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.mean_anomaly,
        expected.mean_anomaly,
        epsilon = epsilon
    );
}

/// Compare two field snapshots: text fields exactly, numeric fields within `max_relative`.
pub fn assert_fields_close(actual: &TleFields, expected: &TleFields, max_relative: f64) {
    assert_eq!(actual.satellite_name, expected.satellite_name);
    assert_eq!(actual.satellite_number, expected.satellite_number);
    assert_eq!(actual.classification, expected.classification);
    assert_eq!(actual.designator, expected.designator);
    assert_eq!(actual.ephemeris_type, expected.ephemeris_type);
    assert_eq!(actual.element_number, expected.element_number);
    assert_eq!(actual.revolution_number, expected.revolution_number);

    // the epoch is an absolute date, its column resolves 1e-8 day
    assert_relative_eq!(actual.epoch, expected.epoch, epsilon = 1e-7);

    for (actual, expected) in [
        (actual.mean_motion_dot, expected.mean_motion_dot),
        (actual.mean_motion_ddot, expected.mean_motion_ddot),
        (actual.bstar, expected.bstar),
        (actual.inclination, expected.inclination),
        (actual.right_ascension, expected.right_ascension),
        (actual.eccentricity, expected.eccentricity),
        (actual.argument_of_perigee, expected.argument_of_perigee),
        (actual.mean_anomaly, expected.mean_anomaly),
        (actual.mean_motion, expected.mean_motion),
    ] {
        assert_relative_eq!(actual, expected, epsilon = 1e-12, max_relative = max_relative);
    }
}

/// Split the content of a three-line catalogue into `(name, line1, line2)` triples.
pub fn three_line_sets(text: &str) -> Vec<(&str, &str, &str)> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    lines
        .chunks_exact(3)
        .map(|chunk| (chunk[0], chunk[1], chunk[2]))
        .collect()
}
