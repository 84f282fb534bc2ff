//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that renders it in UTC as
/// `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Reports use UTC rather than the system timezone so that rendering a plan
/// depends on nothing but the plan itself.
pub struct UtcDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for UtcDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::UTC)
                .strftime("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}
