/// ID types for directory entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier
///
/// Ids are positive integers handed out by the store's counter and never
/// reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Create a user ID from a raw value
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parse an id taken from a URL path segment.
    ///
    /// Leading whitespace and a sign are accepted, then as many digits as
    /// are present; anything after the digits is ignored, so `"3abc"` is
    /// id 3. A `0x`/`0X` prefix switches to hexadecimal digits (`"0x1f"` is
    /// id 31). Returns `None` when no digits lead the input or the number
    /// is not a positive id, which callers treat as "matches nothing".
    pub fn parse_path(raw: &str) -> Option<Self> {
        let s = raw.trim_start();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (radix, s) = match s.get(..2) {
            Some("0x" | "0X") => (16, &s[2..]),
            _ => (10, s),
        };

        let end = s
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(s.len());
        let digits = &s[..end];
        if digits.is_empty() || negative {
            return None;
        }

        match u64::from_str_radix(digits, radix) {
            Ok(0) | Err(_) => None,
            Ok(id) => Some(Self(id)),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
