//! Version numbers reported by CPython.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

/// A `major.minor.micro` interpreter version.
///
/// Ordering is component-wise, so `3.8.0 < 3.11.5` compares numerically
/// rather than lexically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PyVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl PyVersion {
    /// Pull the first dotted version out of arbitrary text.
    ///
    /// Accepts bare triples ("3.11.5"), `--version` banners
    /// ("Python 3.11.5"), and two-part versions ("3.8", micro defaults
    /// to 0). Suffixes like "3.13.0rc1" keep the numeric triple.
    pub fn extract(text: &str) -> Option<Self> {
        let caps = VERSION_PATTERN.captures(text)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let micro = match caps.get(3) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        Some(Self {
            major,
            minor,
            micro,
        })
    }
}

impl fmt::Display for PyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}
