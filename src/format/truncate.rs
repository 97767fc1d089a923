//! Branch name truncation.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Side of a string that gets cut when it's too long.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TrimDirection {
    /// Keep the end of the string
    Left,
    /// Keep the start of the string
    #[default]
    Right,
    /// Keep both ends, cut the middle
    Center,
}

impl TrimDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrimDirection::Left => "left",
            TrimDirection::Right => "right",
            TrimDirection::Center => "center",
        }
    }
}

impl fmt::Display for TrimDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TrimDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TrimDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        match value.as_str() {
            "left" => Ok(TrimDirection::Left),
            "right" => Ok(TrimDirection::Right),
            "center" => Ok(TrimDirection::Center),
            _ => Err(de::Error::custom(format!(
                "branch_trim: unexpected value {value:?}, expected one of \"left\", \"right\" or \"center\""
            ))),
        }
    }
}

/// Truncate `s` so that it is no more than `max` chars long.
///
/// The removed part is replaced with `ellipsis`, on the side given by `dir`.
/// Lengths count chars (Unicode scalar values), not bytes.
///
/// If `max` is zero, negative, or at least the length of `s`, `s` is returned
/// unchanged. If `max` is smaller than the ellipsis itself, the ellipsis is
/// dropped and `s` is simply cut down to `max` chars.
pub fn truncate(s: &str, ellipsis: &str, max: i32, dir: TrimDirection) -> String {
    let len = s.chars().count();
    let max = match usize::try_from(max) {
        Ok(max) if max > 0 && len > max => max,
        _ => return s.to_string(),
    };

    let chars: Vec<char> = s.chars().collect();
    let ell_len = ellipsis.chars().count();
    let (ellipsis, budget) = if max < ell_len {
        ("", max)
    } else {
        (ellipsis, max - ell_len)
    };

    let head = |n: usize| chars[..n].iter().collect::<String>();
    let tail = |n: usize| chars[len - n..].iter().collect::<String>();

    match dir {
        TrimDirection::Right => head(budget) + ellipsis,
        TrimDirection::Left => ellipsis.to_string() + &tail(budget),
        TrimDirection::Center => {
            let left = budget / 2;
            head(left) + ellipsis + &tail(budget - left)
        }
    }
}
