//! Phonetic key triples and precision levels.
//!
//! A word encodes to three keys of decreasing precision. Callers pick one
//! key with [`KeyLevel`] and compare words at that level to decide whether
//! they sound alike.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Precision level of a phonetic key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyLevel {
    /// key0: only the long-vowel marker digit survives.
    Coarse,
    /// key1: consonant-variant and long-vowel digits survive.
    #[default]
    Medium,
    /// key2: every modifier digit survives.
    Fine,
}

impl KeyLevel {
    /// All levels, coarsest first.
    pub const ALL: [KeyLevel; 3] = [KeyLevel::Coarse, KeyLevel::Medium, KeyLevel::Fine];
}

impl fmt::Display for KeyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyLevel::Coarse => "coarse",
            KeyLevel::Medium => "medium",
            KeyLevel::Fine => "fine",
        };
        f.write_str(name)
    }
}

impl FromStr for KeyLevel {
    type Err = String;

    /// Accepts `0`/`1`/`2`, `key0`/`key1`/`key2` and the level names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "key0" | "coarse" => Ok(KeyLevel::Coarse),
            "1" | "key1" | "medium" => Ok(KeyLevel::Medium),
            "2" | "key2" | "fine" => Ok(KeyLevel::Fine),
            other => Err(format!("unknown key level '{}' (expected 0, 1 or 2)", other)),
        }
    }
}

/// The three keys produced for one word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PhoneticKeys {
    pub key0: String,
    pub key1: String,
    pub key2: String,
}

impl PhoneticKeys {
    pub fn new<T: Into<String>>(key0: T, key1: T, key2: T) -> Self {
        Self {
            key0: key0.into(),
            key1: key1.into(),
            key2: key2.into(),
        }
    }

    /// The key at the requested precision.
    pub fn get(&self, level: KeyLevel) -> &str {
        match level {
            KeyLevel::Coarse => &self.key0,
            KeyLevel::Medium => &self.key1,
            KeyLevel::Fine => &self.key2,
        }
    }

    /// Whether two words sound alike at `level`.
    ///
    /// Empty keys never match, so words without Tamil content are not
    /// grouped with each other.
    ///
    /// # Example
    /// ```
    /// use tmphone_core::{KeyLevel, PhoneticKeys};
    ///
    /// let a = PhoneticKeys::new("VRN", "VRN1", "V4RN1");
    /// let b = PhoneticKeys::new("VRN", "VRN", "VRN");
    /// assert!(a.matches(&b, KeyLevel::Coarse));
    /// assert!(!a.matches(&b, KeyLevel::Medium));
    /// ```
    pub fn matches(&self, other: &PhoneticKeys, level: KeyLevel) -> bool {
        let a = self.get(level);
        !a.is_empty() && a == other.get(level)
    }

    /// The finest level at which both words agree, if any.
    pub fn match_level(&self, other: &PhoneticKeys) -> Option<KeyLevel> {
        KeyLevel::ALL
            .iter()
            .rev()
            .copied()
            .find(|&level| self.matches(other, level))
    }

    /// Consume into the `(key0, key1, key2)` triple.
    pub fn into_tuple(self) -> (String, String, String) {
        (self.key0, self.key1, self.key2)
    }
}

impl From<(String, String, String)> for PhoneticKeys {
    fn from((key0, key1, key2): (String, String, String)) -> Self {
        Self { key0, key1, key2 }
    }
}

impl fmt::Display for PhoneticKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.key0, self.key1, self.key2)
    }
}
