//! Coarser keys from the finest one.
//!
//! Digit classes in key2:
//! - `1` consonant variant (ண/ன, ள, ஷ)
//! - `2` geminate or hardened cluster
//! - `3` long "a" sign
//! - `4`-`9` dependent vowel quality

use tmphone_core::PhoneticKeys;

/// Digits removed from key2 to get key1.
pub const KEY1_DROPPED: &[char] = &['2', '4', '5', '6', '7', '8', '9'];

/// Digits removed from key2 to get key0.
pub const KEY0_DROPPED: &[char] = &['1', '2', '4', '5', '6', '7', '8', '9'];

/// Derive all three keys from key2.
pub fn derive_keys(key2: &str) -> PhoneticKeys {
    PhoneticKeys {
        key0: strip(key2, KEY0_DROPPED),
        key1: strip(key2, KEY1_DROPPED),
        key2: key2.to_string(),
    }
}

fn strip(key: &str, dropped: &[char]) -> String {
    key.chars().filter(|c| !dropped.contains(c)).collect()
}
