use std::{cell::Cell, fmt};

/// Identity of every decodable field of a TLE record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SatelliteName,
    SatelliteNumber,
    Classification,
    Designator,
    Epoch,
    MeanMotionDot,
    MeanMotionDdot,
    Bstar,
    EphemerisType,
    ElementNumber,
    Inclination,
    RightAscension,
    Eccentricity,
    ArgumentOfPerigee,
    MeanAnomaly,
    MeanMotion,
    RevolutionNumber,
}

impl Field {
    pub const ALL: [Field; 17] = [
        Field::SatelliteName,
        Field::SatelliteNumber,
        Field::Classification,
        Field::Designator,
        Field::Epoch,
        Field::MeanMotionDot,
        Field::MeanMotionDdot,
        Field::Bstar,
        Field::EphemerisType,
        Field::ElementNumber,
        Field::Inclination,
        Field::RightAscension,
        Field::Eccentricity,
        Field::ArgumentOfPerigee,
        Field::MeanAnomaly,
        Field::MeanMotion,
        Field::RevolutionNumber,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::SatelliteName => "satellite name",
            Field::SatelliteNumber => "satellite number",
            Field::Classification => "classification",
            Field::Designator => "international designator",
            Field::Epoch => "epoch",
            Field::MeanMotionDot => "first derivative of mean motion",
            Field::MeanMotionDdot => "second derivative of mean motion",
            Field::Bstar => "B* drag term",
            Field::EphemerisType => "ephemeris type",
            Field::ElementNumber => "element set number",
            Field::Inclination => "inclination",
            Field::RightAscension => "right ascension of the ascending node",
            Field::Eccentricity => "eccentricity",
            Field::ArgumentOfPerigee => "argument of perigee",
            Field::MeanAnomaly => "mean anomaly",
            Field::MeanMotion => "mean motion",
            Field::RevolutionNumber => "revolution number",
        }
    }

    fn bit(self) -> u32 {
        1 << self as u32
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of fields whose cached value is authoritative.
///
/// A bit is set once a field was decoded successfully or written through a
/// mutator; an unset bit means the next read decodes the raw text again.
/// Updates go through a [`Cell`] so that read accessors taking `&self` can
/// memoize their result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMask(Cell<u32>);

impl FieldMask {
    pub fn contains(&self, field: Field) -> bool {
        self.0.get() & field.bit() != 0
    }

    pub fn insert(&self, field: Field) {
        self.0.set(self.0.get() | field.bit());
    }

    pub fn insert_all(&self) {
        let all = Field::ALL.iter().fold(0, |acc, f| acc | f.bit());
        self.0.set(all);
    }

    pub fn is_empty(&self) -> bool {
        self.0.get() == 0
    }

    pub fn len(&self) -> usize {
        self.0.get().count_ones() as usize
    }
}

#[cfg(test)]
mod field_test {
    use super::*;

    #[test]
    fn test_field_bits_are_distinct() {
        let union = Field::ALL.iter().fold(0u32, |acc, f| {
            assert_eq!(acc & f.bit(), 0, "{f} shares a bit");
            acc | f.bit()
        });
        assert_eq!(union.count_ones() as usize, Field::ALL.len());
    }

    #[test]
    fn test_field_mask() {
        let mask = FieldMask::default();
        assert!(mask.is_empty());

        mask.insert(Field::Inclination);
        mask.insert(Field::Inclination);
        assert!(mask.contains(Field::Inclination));
        assert!(!mask.contains(Field::MeanAnomaly));
        assert_eq!(mask.len(), 1);

        let copy = mask.clone();
        copy.insert(Field::Bstar);
        assert!(!mask.contains(Field::Bstar));

        mask.insert_all();
        assert_eq!(mask.len(), Field::ALL.len());
        assert!(Field::ALL.iter().all(|&f| mask.contains(f)));
    }
}
