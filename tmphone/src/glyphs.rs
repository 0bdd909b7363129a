//! Tamil glyph tables.
//!
//! Each table maps a Tamil grapheme (one or more code points) to a Roman code
//! fragment. Long and short vowel pairs collapse to one code. Consonants that
//! are orthographically distinct but sound close share a code with a trailing
//! `1`. Dependent vowel signs map to the digits `3`-`9`, and the virama maps
//! to nothing. Geminate clusters carry a trailing `2`.

use phf::phf_map;
use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

/// The Tamil Unicode block.
pub const TAMIL_BLOCK: RangeInclusive<char> = '\u{0B80}'..='\u{0BFF}';

/// Vowel-killing mark.
pub const VIRAMA: &str = "\u{0BCD}";

/// Which table a glyph belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphCategory {
    Compound,
    Consonant,
    Vowel,
    Modifier,
}

impl GlyphCategory {
    /// Tables that can carry a trailing modifier, in substitution priority.
    pub const BASES: [GlyphCategory; 3] = [
        GlyphCategory::Compound,
        GlyphCategory::Consonant,
        GlyphCategory::Vowel,
    ];

    /// The table backing this category.
    pub fn table(self) -> &'static phf::Map<&'static str, &'static str> {
        match self {
            GlyphCategory::Compound => &COMPOUNDS,
            GlyphCategory::Consonant => &CONSONANTS,
            GlyphCategory::Vowel => &VOWELS,
            GlyphCategory::Modifier => &MODIFIERS,
        }
    }

    /// Table keys ordered longest first, ties broken lexically.
    pub fn sorted_keys(self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.table().keys().copied().collect();
        keys.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        keys
    }
}

impl fmt::Display for GlyphCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GlyphCategory::Compound => "compound",
            GlyphCategory::Consonant => "consonant",
            GlyphCategory::Vowel => "vowel",
            GlyphCategory::Modifier => "modifier",
        };
        f.write_str(name)
    }
}

pub static VOWELS: phf::Map<&'static str, &'static str> = phf_map! {
    "அ" => "A",
    "ஆ" => "A",
    "இ" => "I",
    "ஈ" => "I",
    "உ" => "U",
    "ஊ" => "U",
    "எ" => "E",
    "ஏ" => "E",
    "ஐ" => "AI",
    "ஒ" => "O",
    "ஓ" => "O",
    "ஔ" => "AU",
};

pub static CONSONANTS: phf::Map<&'static str, &'static str> = phf_map! {
    "க" => "K",
    "ச" => "C",
    "ட" => "T",
    "த" => "D",
    "ப" => "P",
    "ற" => "TR",
    "ங" => "NG",
    "ஞ" => "NJ",
    "ண" => "N1",
    "ந" => "N",
    "ம" => "M",
    "ன" => "N1",
    "ய" => "Y",
    "ர" => "R",
    "ல" => "L",
    "வ" => "V",
    "ழ" => "ZH",
    "ள" => "L1",
    // aytham
    "ஃ" => "",
    "ஷ" => "S1",
    "ஸ" => "S",
    "ஹ" => "H",
    "ஜ" => "J",
};

pub static MODIFIERS: phf::Map<&'static str, &'static str> = phf_map! {
    // Long "a" sign keeps its own digit even though the vowel class is unchanged.
    "ா" => "3",
    "ி" => "4",
    "ீ" => "4",
    "ு" => "5",
    "ூ" => "5",
    "ெ" => "6",
    "ே" => "6",
    "ை" => "7",
    "ொ" => "8",
    "ோ" => "8",
    "ௌ" => "9",
    "்" => "",
};

pub static COMPOUNDS: phf::Map<&'static str, &'static str> = phf_map! {
    // Geminates.
    "க்க" => "K2",
    "ச்ச" => "C2",
    "த்த" => "D2",
    "ப்ப" => "P2",
    "ல்ல" => "L2",
    "வ்வ" => "V2",
    "ண்ண" => "N2",
    "ம்ம" => "M2",
    "ற்ற" => "TR2",
    "ட்ட" => "T2",
    "ஞ்ஞ" => "NJ2",

    // Heterorganic clusters.
    "ன்ற" => "NR",
    "ண்ட" => "NT",
    "ங்க" => "NK",
    "ஞ்ச" => "NC",
    "ந்த" => "ND",
    "ம்ப" => "MP",
    "ந்ன" => "NN",
    "ற்க" => "RK",
    "ர்ப்" => "RP",
    "க்த" => "KT",
};

/// Whether `ch` lies in the Tamil block.
pub fn is_tamil(ch: char) -> bool {
    TAMIL_BLOCK.contains(&ch)
}

/// Code for `glyph` in one table.
pub fn lookup(category: GlyphCategory, glyph: &str) -> Option<&'static str> {
    category.table().get(glyph).copied()
}
