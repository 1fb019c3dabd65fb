mod common;

use approx::assert_relative_eq;
use common::{assert_fields_close, assert_orbit_close};
use tlekit::{
    constants::{GM_EARTH, REV_PER_DAY_TO_RAD_PER_SEC},
    Field, KeplerianElements, LineFormat, ParseMode, TleError, TleFields, TleRecord,
};

const LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
const LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

fn iss() -> TleRecord {
    TleRecord::from_lines(LINE1, LINE2, ParseMode::Lazy).unwrap()
}

#[test]
fn test_iss_verbatim_output() {
    let record = iss();
    assert_eq!(record.to_string(), format!("{LINE1}\n{LINE2}\n"));
    assert_eq!(record.lines(), vec![LINE1, LINE2]);
}

#[test]
fn test_iss_keplerian_elements() {
    let expected = KeplerianElements {
        reference_epoch: 54729.51782528,
        eccentricity: 0.0006703,
        inclination: 51.6416_f64.to_radians(),
        ascending_node_longitude: 247.4627_f64.to_radians(),
        periapsis_argument: 130.5360_f64.to_radians(),
        mean_anomaly: 325.0288_f64.to_radians(),
        mean_motion: 15.72125391 * REV_PER_DAY_TO_RAD_PER_SEC,
    };
    assert_orbit_close(&iss().keplerian_elements(), &expected, 1e-9);
}

#[test]
fn test_iss_state_vector() {
    let record = iss();
    let a = record.semi_major_axis();
    assert_relative_eq!(a, 6_730_960.677, max_relative = 1e-6);

    let position = record.position().unwrap();
    let velocity = record.velocity().unwrap();
    let r = position.norm();

    assert_relative_eq!(r, record.radius().unwrap(), max_relative = 1e-12);
    assert_relative_eq!(
        velocity.norm_squared(),
        GM_EARTH * (2.0 / r - 1.0 / a),
        max_relative = 1e-9
    );
    // near-circular orbit: the velocity is almost perpendicular to the radius
    assert!(position.dot(&velocity).abs() / (r * velocity.norm()) < 1e-3);
}

#[test]
fn test_accessors_are_idempotent() {
    let record = iss();
    let first = record.fields();
    let second = record.fields();
    assert_eq!(first, second);
    assert!(Field::ALL
        .iter()
        .filter(|&&f| f != Field::SatelliteName)
        .all(|&f| record.is_cached(f)));
}

#[test]
fn test_edit_and_reserialize() {
    let mut record = iss();
    record.set_satellite_name("ISS (ZARYA)");
    record.set_mean_anomaly(10.0);
    record.set_revolution_number(56354);
    record.set_line_format(LineFormat::ThreeLines);

    let text = record.serialize();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "ISS (ZARYA)             ");
    assert_eq!(lines[1], LINE1);

    let reparsed =
        TleRecord::from_named_lines(lines[0], lines[1], lines[2], ParseMode::Eager).unwrap();
    assert_eq!(reparsed.last_error(), None);
    assert_relative_eq!(
        reparsed.mean_anomaly(),
        10.0_f64.to_radians(),
        max_relative = 1e-9
    );
    assert_eq!(reparsed.revolution_number(), 56354);
    assert_eq!(reparsed, record);
}

#[test]
fn test_minimum_line_length() {
    assert!(TleRecord::from_lines(LINE1, LINE2, ParseMode::Lazy).is_ok());
    assert_eq!(
        TleRecord::from_lines(LINE1, &LINE2[..68], ParseMode::Lazy),
        Err(TleError::TooShortLine {
            required: 69,
            actual: 68
        })
    );
}

#[test]
fn test_fields_snapshot_serde() {
    let fields = iss().fields();
    let json = serde_json::to_string(&fields).unwrap();
    let decoded: TleFields = serde_json::from_str(&json).unwrap();
    assert_fields_close(&decoded, &fields, 1e-12);

    let rebuilt = TleRecord::from_fields(&decoded, LineFormat::TwoLines);
    assert_eq!(rebuilt.serialize(), format!("{LINE1}\n{LINE2}\n"));
}
