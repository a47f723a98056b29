use std::fmt::Display;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

/// Digits and the unit markers `d`, `h`, `m`, e.g. `1d3h25m`.
///
/// Only the characters are checked; `hhh` or `d9` pass as well.
static WORK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9dhm]+$").expect("valid regex"));

/// Check whether a work time string is made up solely of digits, `d`, `h` and
/// `m`. An absent or empty value is invalid.
pub fn is_valid_work_time(work_time: Option<&str>) -> bool {
    debug!("is_valid_work_time {:?}", work_time);
    work_time.is_some_and(|work_time| WORK_TIME.is_match(work_time))
}

/// A work time that passed [`is_valid_work_time`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkDuration(String);

impl WorkDuration {
    pub fn parse(work_time: &str) -> Option<Self> {
        is_valid_work_time(Some(work_time)).then(|| Self(work_time.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for WorkDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
