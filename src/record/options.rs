use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// When the fields of a record are decoded.
///
/// * `Lazy` – each field is decoded on its first read.
/// * `Eager` – every field is decoded during construction; failures are kept
///   as the record's last error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    #[default]
    Lazy,
    Eager,
}

/// Shape of the serialized record.
///
/// * `TwoLines` – line 1 and line 2 only.
/// * `ThreeLines` – a 24-column name line followed by line 1 and line 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineFormat {
    #[default]
    #[serde(rename = "2le")]
    TwoLines,
    #[serde(rename = "3le")]
    ThreeLines,
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lazy" => Ok(ParseMode::Lazy),
            "eager" => Ok(ParseMode::Eager),
            other => Err(format!("Unknown parse mode: {other}")),
        }
    }
}

impl FromStr for LineFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "2le" | "tle" | "two_lines" => Ok(LineFormat::TwoLines),
            "3le" | "three_lines" => Ok(LineFormat::ThreeLines),
            other => Err(format!("Unknown line format: {other}")),
        }
    }
}

impl fmt::Display for LineFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineFormat::TwoLines => write!(f, "2le"),
            LineFormat::ThreeLines => write!(f, "3le"),
        }
    }
}
