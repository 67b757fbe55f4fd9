//! Typed duration values as written in MPX project files.
//!
//! A [`Duration`] pairs a magnitude with a [`TimeUnit`]. Durations are read from and written
//! to text like `3.5h` or `2ed` using a [`NumberFormat`] and a [`Locale`] suffix table, and can
//! be re-expressed in another unit with an approximate, calendar-free conversion.
//!
//! ```
//! use mpx_duration::{Duration, TimeUnit};
//!
//! let duration = Duration::parse_default("1440m").unwrap();
//! let hours = duration.convert_to(TimeUnit::Hours);
//! assert_eq!(hours.to_string(), "24h");
//!
//! // Without a suffix, MPX 3 files count in days
//! assert_eq!(Duration::parse_default("5").unwrap().unit(), TimeUnit::Days);
//! ```
pub use duration::Duration;
pub use error::{Error, ParseError, ParseResult, Result};
pub use number_format::NumberFormat;
pub use row::{MapRow, Row, RowComparator};
pub use settings::{FileSettings, FormatContext};
pub use unit::{DayClass, Locale, TimeUnit, UNIT_COUNT};

pub mod duration;
pub mod error;
pub mod number_format;
pub mod row;
pub mod settings;
pub mod unit;
