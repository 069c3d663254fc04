//! Temporal targets
//!
//! Time (`chrono::DateTime<FixedOffset>`) and duration (`chrono::TimeDelta`)
//! coercions with their text parsers.

/// Duration literals and the duration target
pub mod duration;
/// Layout-based time parsing and the time target
pub mod time;

pub use duration::{format_duration, parse_duration};
pub use time::{Time, parse_time, parse_time_with_layout, to_time_with_layout_e};
