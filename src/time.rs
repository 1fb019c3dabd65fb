use hifitime::{Epoch, TimeScale};

use crate::constants::{MAX_EPOCH_YEAR_OFFSET, MJD, TLE_CENTURY_PIVOT};

/// Expand the two-digit year of a TLE epoch to a full year.
///
/// `00..=56` map to 2000–2056 and `57..=99` to 1957–1999.
pub fn tle_year(two_digit_year: i32) -> i32 {
    if two_digit_year < TLE_CENTURY_PIVOT {
        2000 + two_digit_year
    } else {
        1900 + two_digit_year
    }
}

/// Modified julian date of January 1st, 00:00 UTC of the given year.
fn year_start_mjd(year: i32) -> MJD {
    Epoch::from_gregorian(year, 1, 1, 0, 0, 0, 0, TimeScale::UTC).to_mjd_utc_days()
}

/// Transformation from a TLE epoch (two-digit year, fractional day of year) to MJD (UTC)
///
/// Argument
/// --------
/// * `two_digit_year`: year modulo 100, resolved with [`tle_year`]
/// * `day_of_year`: day of year starting at `1.0` for January 1st 00:00
///
/// Return
/// ------
/// * the epoch in modified julian date, UTC time scale
pub fn tle_epoch_to_mjd(two_digit_year: i32, day_of_year: f64) -> MJD {
    year_start_mjd(tle_year(two_digit_year)) + day_of_year - 1.0
}

/// Transformation from MJD (UTC) to a TLE epoch
///
/// Years outside 1957–2056 cannot be told apart in the two-digit format and are
/// folded modulo 100.
///
/// Return
/// ------
/// * `Some((two_digit_year, day_of_year))` with `day_of_year >= 1.0`
/// * `None` when `mjd` is not finite or lies more than [`MAX_EPOCH_YEAR_OFFSET`]
///   years away from 2000
pub fn mjd_to_tle_epoch(mjd: MJD) -> Option<(i32, f64)> {
    // 51544 is 2000-01-01
    let offset = ((mjd - 51544.0) / 365.2425).floor();
    if !offset.is_finite() || offset.abs() > MAX_EPOCH_YEAR_OFFSET as f64 {
        return None;
    }

    let mut year = 2000i32.checked_add(offset as i32)?;
    while year_start_mjd(year) > mjd {
        year = year.checked_sub(1)?;
    }
    while year_start_mjd(year.checked_add(1)?) <= mjd {
        year += 1;
    }
    Some((year.rem_euclid(100), mjd - year_start_mjd(year) + 1.0))
}

/// Calendar representation of a MJD (UTC) epoch.
pub fn mjd_to_epoch(mjd: MJD) -> Epoch {
    Epoch::from_mjd_utc(mjd)
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_relative_eq;
    use hifitime::Duration;

    #[test]
    fn test_tle_year() {
        assert_eq!(tle_year(0), 2000);
        assert_eq!(tle_year(8), 2008);
        assert_eq!(tle_year(56), 2056);
        assert_eq!(tle_year(57), 1957);
        assert_eq!(tle_year(99), 1999);
    }

    #[test]
    fn test_year_start_mjd() {
        assert_eq!(year_start_mjd(2000), 51544.0);
        assert_eq!(year_start_mjd(2008), 54466.0);
        assert_eq!(year_start_mjd(2021), 59215.0);
    }

    #[test]
    fn test_tle_epoch_to_mjd() {
        assert_relative_eq!(
            tle_epoch_to_mjd(8, 264.51782528),
            54729.51782528,
            epsilon = 1e-9
        );
        assert_eq!(tle_epoch_to_mjd(21, 1.0), 59215.0);
        assert_eq!(tle_epoch_to_mjd(99, 1.0), 51179.0);
    }

    #[test]
    fn test_mjd_to_tle_epoch() {
        let (yy, doy) = mjd_to_tle_epoch(54729.51782528).unwrap();
        assert_eq!(yy, 8);
        assert_relative_eq!(doy, 264.51782528, epsilon = 1e-9);

        // last instant of a leap year stays in that year
        let (yy, doy) = mjd_to_tle_epoch(54466.0 + 365.75).unwrap();
        assert_eq!(yy, 8);
        assert_relative_eq!(doy, 366.75, epsilon = 1e-9);

        assert_eq!(mjd_to_tle_epoch(51544.0), Some((0, 1.0)));
        assert_eq!(mjd_to_tle_epoch(51543.5), Some((99, 365.5)));
    }

    #[test]
    fn test_unrepresentable_mjd() {
        assert_eq!(mjd_to_tle_epoch(f64::INFINITY), None);
        assert_eq!(mjd_to_tle_epoch(f64::NEG_INFINITY), None);
        assert_eq!(mjd_to_tle_epoch(f64::NAN), None);
        assert_eq!(mjd_to_tle_epoch(1e12), None);
        assert_eq!(mjd_to_tle_epoch(-1e12), None);

        // far but representable dates still fold into two digits
        let year_2500 = tle_epoch_to_mjd(0, 1.0) + 365.2425 * 500.0 + 10.0;
        let (yy, doy) = mjd_to_tle_epoch(year_2500).unwrap();
        assert_eq!(yy, 0);
        assert!((10.0..12.0).contains(&doy));
    }

    #[test]
    fn test_mjd_to_epoch() {
        let epoch = mjd_to_epoch(59215.5);
        let noon = Epoch::from_gregorian(2021, 1, 1, 12, 0, 0, 0, TimeScale::UTC);
        assert!((epoch - noon).abs() < Duration::from_seconds(1e-6));
    }
}
