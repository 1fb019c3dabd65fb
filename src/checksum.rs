//! # TLE line checksum
//!
//! Each data line of a TLE ends with a single digit at column 68: the sum of
//! every digit on columns `0..68`, counting a minus sign as `1` and any other
//! character as `0`, modulo 10.
//!
//! [`compute_checksum`] produces that digit for outgoing lines, while
//! [`verify_line`] validates an incoming line before the record model accepts it.

use crate::{
    constants::{CHECKSUM_INDEX, DATA_LINE_LENGTH},
    tle_errors::TleError,
};

/// Compute the mod-10 checksum of a text fragment.
///
/// Arguments
/// ---------
/// * `text`: the characters to sum, usually columns `0..68` of a data line
///
/// Return
/// ------
/// * the checksum digit in `0..=9`
pub fn compute_checksum(text: &str) -> u8 {
    let sum: u32 = text
        .chars()
        .map(|c| match c {
            '-' => 1,
            c => c.to_digit(10).unwrap_or(0),
        })
        .sum();
    (sum % 10) as u8
}

/// Check that a data line carries a correct checksum digit at column 68.
///
/// Return
/// ------
/// * `Ok(())` when the embedded digit matches the computed one
/// * [`TleError::TooShortLine`] when the line has fewer than 69 characters
/// * [`TleError::ChecksumError`] when the digits differ or column 68 is not a digit
pub fn verify_line(line: &str) -> Result<(), TleError> {
    let (body, rest) = match (line.get(..CHECKSUM_INDEX), line.get(CHECKSUM_INDEX..)) {
        (Some(body), Some(rest)) if line.len() >= DATA_LINE_LENGTH => (body, rest),
        _ => {
            return Err(TleError::TooShortLine {
                required: DATA_LINE_LENGTH,
                actual: line.len(),
            })
        }
    };

    let expected = compute_checksum(body);
    let found = rest.chars().next().unwrap_or('\0');
    if found.to_digit(10) != Some(expected as u32) {
        return Err(TleError::ChecksumError { expected, found });
    }
    Ok(())
}

#[cfg(test)]
mod checksum_test {
    use super::*;

    const ISS_LINE1: &str =
        "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const ISS_LINE2: &str =
        "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn test_compute_checksum() {
        assert_eq!(compute_checksum(&ISS_LINE1[..68]), 7);
        assert_eq!(compute_checksum(&ISS_LINE2[..68]), 7);
        assert_eq!(compute_checksum(""), 0);
        assert_eq!(compute_checksum("---"), 3);
        assert_eq!(compute_checksum("A+. 9"), 9);
    }

    #[test]
    fn test_verify_line() {
        assert_eq!(verify_line(ISS_LINE1), Ok(()));
        assert_eq!(verify_line(ISS_LINE2), Ok(()));

        let mut corrupted = ISS_LINE2.to_string();
        corrupted.replace_range(68..69, "3");
        assert_eq!(
            verify_line(&corrupted),
            Err(TleError::ChecksumError {
                expected: 7,
                found: '3'
            })
        );
    }

    #[test]
    fn test_verify_line_length_boundary() {
        // trailing text after the checksum column is ignored
        assert_eq!(verify_line(&format!("{ISS_LINE1}   ")), Ok(()));

        assert_eq!(
            verify_line(&ISS_LINE1[..68]),
            Err(TleError::TooShortLine {
                required: 69,
                actual: 68
            })
        );
    }

    #[test]
    fn test_verify_line_non_digit_checksum() {
        let line = format!("{}X", &ISS_LINE1[..68]);
        assert!(matches!(
            verify_line(&line),
            Err(TleError::ChecksumError { found: 'X', .. })
        ));
    }
}
