//! # tlekit
//!
//! Reading, editing and writing of NORAD Two-Line Element sets.
//!
//! ```no_run
//! use tlekit::{ParseMode, TleRecord};
//!
//! let record = TleRecord::from_lines(
//!     "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927",
//!     "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537",
//!     ParseMode::Lazy,
//! )?;
//! println!("{} km", record.semi_major_axis() / 1e3);
//! print!("{record}");
//! # Ok::<(), tlekit::TleError>(())
//! ```

pub mod checksum;
pub mod codec;
pub mod constants;
pub mod kepler;
pub mod keplerian_element;
pub mod record;
pub mod time;
pub mod tle_errors;

pub use keplerian_element::KeplerianElements;
pub use record::{Field, LineFormat, ParseMode, RawTle, TleFields, TleRecord};
pub use tle_errors::TleError;
