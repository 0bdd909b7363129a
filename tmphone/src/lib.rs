//! # tmphone
//!
//! Phonetic keys for Tamil words. A word encodes to three Roman keys of
//! decreasing precision (key2, key1, key0) so that spellings which sound
//! alike can be grouped for fuzzy matching and deduplication.
//!
//! Public API exported here:
//! - `TMphone` and `Token` from `encoder`
//! - `derive_keys` from `deriver`
//! - `GlyphCategory` from `glyphs`
//! - `PhoneticKeys`, `KeyLevel` and `Config` from `tmphone-core`

pub mod deriver;
pub mod encoder;
pub mod glyphs;
pub mod pattern;

use once_cell::sync::Lazy;

pub use deriver::derive_keys;
pub use encoder::{TMphone, Token};
pub use glyphs::GlyphCategory;
pub use pattern::GlyphMatchers;
pub use tmphone_core::{Config, KeyLevel, OutputFormat, PhoneticKeys};

static SHARED: Lazy<TMphone> = Lazy::new(TMphone::new);

/// Encode one word with a process-wide encoder.
///
/// # Example
/// ```
/// let keys = tmphone::encode("பஞ்சவர்ணம்");
/// assert_eq!(keys.key0, "PNCVRNM");
/// assert_eq!(keys.key1, "PNCVRN1M");
/// ```
pub fn encode(word: &str) -> PhoneticKeys {
    SHARED.encode(word)
}

/// Whether two words sound alike at `level`.
pub fn sounds_like(a: &str, b: &str, level: KeyLevel) -> bool {
    encode(a).matches(&encode(b), level)
}
