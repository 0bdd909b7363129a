//! The TMphone encoder.
//!
//! Encoding runs in two phases. The compiled matchers first locate every base
//! glyph that carries a dependent modifier. A claim scan then walks the word
//! once per pass, and each pass consumes the chars no earlier pass took:
//!
//! 1. compounds carrying a modifier
//! 2. remaining compounds, longest match first
//! 3. consonants carrying a modifier, then vowels carrying a modifier
//! 4. remaining consonants, then remaining vowels
//! 5. modifiers (the virama contributes no code)
//!
//! Chars of the Tamil block that no table knows (digits, ௐ, ...) are dropped.
//! The finest key is the concatenation of the claimed codes in source order.

use serde::Serialize;
use tmphone_core::{utils, PhoneticKeys, TrieNode};

use crate::deriver::derive_keys;
use crate::glyphs::{self, GlyphCategory};
use crate::pattern::GlyphMatchers;

/// One consumed source glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The Tamil text this token consumed.
    pub glyph: String,
    /// Roman code fragment, possibly empty.
    pub code: &'static str,
    pub category: GlyphCategory,
    /// Whether the glyph was followed by a dependent modifier.
    pub modified: bool,
    /// Char index of the glyph in the filtered word.
    pub start: usize,
    /// Exclusive end char index.
    pub end: usize,
}

#[derive(Debug, Clone)]
struct GlyphTries {
    compounds: TrieNode<&'static str>,
    consonants: TrieNode<&'static str>,
    vowels: TrieNode<&'static str>,
    modifiers: TrieNode<&'static str>,
}

impl GlyphTries {
    fn build() -> Self {
        let from_table = |category: GlyphCategory| {
            let mut trie = TrieNode::new();
            for (glyph, code) in category.table().entries() {
                trie.insert(glyph, *code);
            }
            trie
        };
        Self {
            compounds: from_table(GlyphCategory::Compound),
            consonants: from_table(GlyphCategory::Consonant),
            vowels: from_table(GlyphCategory::Vowel),
            modifiers: from_table(GlyphCategory::Modifier),
        }
    }

    fn get(&self, category: GlyphCategory) -> &TrieNode<&'static str> {
        match category {
            GlyphCategory::Compound => &self.compounds,
            GlyphCategory::Consonant => &self.consonants,
            GlyphCategory::Vowel => &self.vowels,
            GlyphCategory::Modifier => &self.modifiers,
        }
    }
}

/// Tracks which chars of the word have been consumed by a token.
struct ClaimScan<'a> {
    chars: &'a [char],
    claimed: Vec<bool>,
    tokens: Vec<Token>,
}

impl<'a> ClaimScan<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            claimed: vec![false; chars.len()],
            tokens: Vec::new(),
        }
    }

    fn is_free(&self, start: usize, end: usize) -> bool {
        end <= self.chars.len() && self.claimed[start..end].iter().all(|c| !c)
    }

    fn claim(
        &mut self,
        start: usize,
        end: usize,
        category: GlyphCategory,
        code: &'static str,
        modified: bool,
    ) -> bool {
        if start >= end || !self.is_free(start, end) {
            return false;
        }
        self.claimed[start..end].iter_mut().for_each(|c| *c = true);
        self.tokens.push(Token {
            glyph: self.chars[start..end].iter().collect(),
            code,
            category,
            modified,
            start,
            end,
        });
        true
    }

    /// Claim every free occurrence of the trie's entries, scanning left to
    /// right and taking the longest entry that fits at each position.
    fn claim_literals(&mut self, trie: &TrieNode<&'static str>, category: GlyphCategory) {
        let mut pos = 0;
        while pos < self.chars.len() {
            if self.claimed[pos] {
                pos += 1;
                continue;
            }
            let hit = trie
                .walk_prefixes(self.chars, pos)
                .into_iter()
                .rev()
                .find(|(end, _)| self.is_free(pos, *end))
                .map(|(end, code)| (end, *code));
            match hit {
                Some((end, code)) => {
                    self.claim(pos, end, category, code, false);
                    pos = end;
                }
                None => pos += 1,
            }
        }
    }

    fn into_tokens(mut self) -> Vec<Token> {
        self.tokens.sort_by_key(|t| t.start);
        self.tokens
    }
}

/// TMphone is the Tamil phonetic key encoder.
///
/// Tables, tries and matchers are built once in [`TMphone::new`] and never
/// mutated, so one instance can be shared across threads.
///
/// # Example
/// ```
/// use tmphone::TMphone;
///
/// let tm = TMphone::new();
/// let keys = tm.encode("மோர்");
/// assert_eq!(keys.into_tuple(), ("MR".into(), "MR".into(), "M8R".into()));
/// ```
#[derive(Debug, Clone)]
pub struct TMphone {
    matchers: GlyphMatchers,
    tries: GlyphTries,
}

impl Default for TMphone {
    fn default() -> Self {
        Self::new()
    }
}

impl TMphone {
    /// Build an encoder.
    ///
    /// # Panics
    /// If a glyph matcher fails to compile. The patterns come from the static
    /// tables, so this only happens when a table itself is broken.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(tm) => tm,
            Err(e) => panic!("tmphone glyph tables produced an invalid matcher: {}", e),
        }
    }

    /// Build an encoder, reporting matcher compilation failures.
    pub fn try_new() -> Result<Self, regex::Error> {
        Ok(Self {
            matchers: GlyphMatchers::compile()?,
            tries: GlyphTries::build(),
        })
    }

    /// Encode a word to its three phonetic keys.
    ///
    /// Words should be encoded one at a time, not as phrases or sentences.
    /// Never fails: input without Tamil content yields empty keys.
    pub fn encode(&self, input: &str) -> PhoneticKeys {
        derive_keys(&self.process(input))
    }

    /// The finest key (key2) for `input`.
    pub fn process(&self, input: &str) -> String {
        let tokens = self.tokenize(input);
        let key2: String = tokens.iter().map(|t| t.code).collect();
        tracing::trace!(input, key2 = %key2, tokens = tokens.len(), "encoded word");
        key2
    }

    /// Split `input` into the tagged tokens its finest key is built from.
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let text: String = utils::normalize(input)
            .chars()
            .filter(|&c| glyphs::is_tamil(c))
            .collect();
        let chars: Vec<char> = text.chars().collect();
        let mut scan = ClaimScan::new(&chars);

        self.claim_modified(&mut scan, &text, GlyphCategory::Compound);
        scan.claim_literals(self.tries.get(GlyphCategory::Compound), GlyphCategory::Compound);

        self.claim_modified(&mut scan, &text, GlyphCategory::Consonant);
        self.claim_modified(&mut scan, &text, GlyphCategory::Vowel);

        for category in [
            GlyphCategory::Consonant,
            GlyphCategory::Vowel,
            GlyphCategory::Modifier,
        ] {
            scan.claim_literals(self.tries.get(category), category);
        }

        scan.into_tokens()
    }

    fn claim_modified(&self, scan: &mut ClaimScan<'_>, text: &str, category: GlyphCategory) {
        for base in self.matchers.modified_bases(category, text) {
            scan.claim(base.start, base.end, category, base.code, true);
        }
    }
}
