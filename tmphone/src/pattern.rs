//! Compiled "base glyph followed by a modifier" matchers.
//!
//! One matcher is built per base table (compounds, consonants, vowels). Each
//! is `(base alternation)(?:modifier alternation)` with the base captured in
//! group 1. Alternatives are sorted longest first because the regex engine
//! picks the leftmost-first alternative, not the longest one.

use regex::Regex;

use crate::glyphs::{self, GlyphCategory};

/// A base glyph found immediately before a modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifiedBase {
    /// Char index of the first char of the base glyph.
    pub start: usize,
    /// Exclusive char index after the base glyph; the modifier starts here.
    pub end: usize,
    pub code: &'static str,
}

#[derive(Debug, Clone)]
pub struct GlyphMatchers {
    compounds: Regex,
    consonants: Regex,
    vowels: Regex,
}

impl GlyphMatchers {
    /// Build the three matchers from the glyph tables.
    pub fn compile() -> Result<Self, regex::Error> {
        let matchers = Self {
            compounds: build(GlyphCategory::Compound)?,
            consonants: build(GlyphCategory::Consonant)?,
            vowels: build(GlyphCategory::Vowel)?,
        };
        tracing::debug!(
            compounds = glyphs::COMPOUNDS.len(),
            consonants = glyphs::CONSONANTS.len(),
            vowels = glyphs::VOWELS.len(),
            modifiers = glyphs::MODIFIERS.len(),
            "compiled glyph matchers"
        );
        Ok(matchers)
    }

    /// The matcher for a base category. Modifiers have none.
    pub fn matcher(&self, category: GlyphCategory) -> Option<&Regex> {
        match category {
            GlyphCategory::Compound => Some(&self.compounds),
            GlyphCategory::Consonant => Some(&self.consonants),
            GlyphCategory::Vowel => Some(&self.vowels),
            GlyphCategory::Modifier => None,
        }
    }

    /// Every base glyph of `category` in `text` that carries a modifier.
    ///
    /// Spans are char indices into `text`, in ascending order and
    /// non-overlapping.
    pub fn modified_bases(&self, category: GlyphCategory, text: &str) -> Vec<ModifiedBase> {
        let Some(re) = self.matcher(category) else {
            return Vec::new();
        };
        let offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let char_index = |byte: usize| match offsets.binary_search(&byte) {
            Ok(i) | Err(i) => i,
        };

        re.captures_iter(text)
            .filter_map(|caps| {
                let base = caps.get(1)?;
                let code = glyphs::lookup(category, base.as_str())?;
                Some(ModifiedBase {
                    start: char_index(base.start()),
                    end: char_index(base.end()),
                    code,
                })
            })
            .collect()
    }
}

fn alternation(category: GlyphCategory) -> String {
    category
        .sorted_keys()
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|")
}

fn build(category: GlyphCategory) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        "({})(?:{})",
        alternation(category),
        alternation(GlyphCategory::Modifier)
    ))
}
