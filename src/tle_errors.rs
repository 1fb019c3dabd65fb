use thiserror::Error;

/// Errors raised while decoding, validating or deriving quantities from a TLE.
///
/// Variants
/// -----------------
/// * `TooShortLine` – The line ends before the column a field or the checksum needs.
/// * `ChecksumError` – The embedded checksum digit differs from the computed one.
/// * `FieldFormatError` – A numeric field holds non-numeric or non-finite content.
/// * `ConvergenceError` – Kepler's equation could not be solved within the iteration cap.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TleError {
    #[error("Line is too short: {required} characters required, got {actual}")]
    TooShortLine { required: usize, actual: usize },

    #[error("Checksum mismatch: computed {expected}, line carries {found:?}")]
    ChecksumError { expected: u8, found: char },

    #[error("Invalid field {text:?}: expected {expected}")]
    FieldFormatError { expected: &'static str, text: String },

    #[error("Kepler equation did not converge after {iterations} iterations")]
    ConvergenceError { iterations: usize },
}

impl TleError {
    pub(crate) fn field_format(expected: &'static str, text: &str) -> Self {
        TleError::FieldFormatError {
            expected,
            text: text.to_string(),
        }
    }
}
