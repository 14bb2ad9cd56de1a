//! Data structures representing HSK vocabulary components

use std::fmt;

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::error::{HskError, Result};

/// An HSK proficiency level.
///
/// Levels 1-6 each have their own word list. `Advanced` is the combined
/// 7-9 band, which ships as a single list and is reported as level 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HskLevel {
    L1 = 1,
    L2 = 2,
    L3 = 3,
    L4 = 4,
    L5 = 5,
    L6 = 6,
    /// The combined 7-9 advanced band.
    Advanced = 7,
}

impl HskLevel {
    /// Every level in word-list processing order: 1 through 6, then the
    /// 7-9 band. A word appearing at several levels keeps the assignment
    /// from the last list processed, so this order is load-bearing.
    pub const ALL: [HskLevel; 7] = [
        HskLevel::L1,
        HskLevel::L2,
        HskLevel::L3,
        HskLevel::L4,
        HskLevel::L5,
        HskLevel::L6,
        HskLevel::Advanced,
    ];

    /// The numeric value written to the output document (1-7).
    pub fn value(self) -> u8 {
        self as u8
    }

    /// File name of this level's word list in the New HSK (2025) release.
    pub fn word_list_name(self) -> String {
        match self {
            HskLevel::Advanced => "HSK_Level_7-9_words.txt".to_string(),
            _ => format!("HSK_Level_{}_words.txt", self.value()),
        }
    }
}

impl fmt::Display for HskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HskLevel::Advanced => write!(f, "7-9"),
            _ => write!(f, "{}", self.value()),
        }
    }
}

impl TryFrom<u8> for HskLevel {
    type Error = HskError;
    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::L1),
            2 => Ok(Self::L2),
            3 => Ok(Self::L3),
            4 => Ok(Self::L4),
            5 => Ok(Self::L5),
            6 => Ok(Self::L6),
            7 => Ok(Self::Advanced),
            _ => Err(HskError::InvalidLevel(value)),
        }
    }
}

// Levels travel as bare integers in vocabulary documents ("本": 7), so
// the serde representation is the numeric value, validated on the way in.
impl Serialize for HskLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

impl<'de> Deserialize<'de> for HskLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        HskLevel::try_from(value).map_err(D::Error::custom)
    }
}
