use std::fmt;

use fxhash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::constants::{has_inherent_vowel, strip_inherent_vowel, MAX_KEY_LEN};
use crate::script::ScriptId;

/// Inclusive range of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRange {
    pub start: char,
    pub end: char,
}

impl CodeRange {
    pub const fn new(start: char, end: char) -> Self {
        CodeRange { start, end }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        c >= self.start && c <= self.end
    }

    pub fn overlaps(&self, other: &CodeRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn is_within(&self, outer: &CodeRange) -> bool {
        outer.contains(self.start) && outer.contains(self.end)
    }
}

impl fmt::Display for CodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}..U+{:04X}", self.start as u32, self.end as u32)
    }
}

/// What a table entry stands for. Drives both validation and the scan rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Vowel,
    /// A consonant or conjunct; output carries the inherent vowel marker.
    Consonant,
    /// Dependent vowel sign (matra).
    VowelSign,
    /// Virama / halant.
    Virama,
    /// Anusvara, visarga, candrabindu.
    Mark,
    Digit,
    Punctuation,
}

impl EntryKind {
    /// Kinds that attach to the preceding consonant.
    pub fn is_sign(self) -> bool {
        matches!(self, EntryKind::VowelSign | EntryKind::Virama)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub key: &'static str,
    pub output: &'static str,
    pub kind: EntryKind,
}

impl Entry {
    pub const fn new(key: &'static str, output: &'static str, kind: EntryKind) -> Self {
        Entry { key, output, kind }
    }

    pub const fn vowel(key: &'static str, output: &'static str) -> Self {
        Entry::new(key, output, EntryKind::Vowel)
    }

    pub const fn consonant(key: &'static str, output: &'static str) -> Self {
        Entry::new(key, output, EntryKind::Consonant)
    }

    pub const fn vowel_sign(key: &'static str, output: &'static str) -> Self {
        Entry::new(key, output, EntryKind::VowelSign)
    }

    pub const fn virama(key: &'static str) -> Self {
        Entry::new(key, "", EntryKind::Virama)
    }

    pub const fn mark(key: &'static str, output: &'static str) -> Self {
        Entry::new(key, output, EntryKind::Mark)
    }

    pub const fn digit(key: &'static str, output: &'static str) -> Self {
        Entry::new(key, output, EntryKind::Digit)
    }

    pub const fn punctuation(key: &'static str, output: &'static str) -> Self {
        Entry::new(key, output, EntryKind::Punctuation)
    }
}

/// Static description of a script, turned into a [`ScriptTable`] by validation.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub id: ScriptId,
    pub block: CodeRange,
    /// The first range is the primary matra + virama range.
    pub modifiers: &'static [CodeRange],
    pub nukta: Option<char>,
    pub entries: &'static [Entry],
    /// Consonant output -> nukta form, in marker-suffixed and bare spellings.
    pub nukta_substitutions: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("{script}: empty key")]
    EmptyKey { script: ScriptId },
    #[error("{script}: key {key:?} exceeds the maximum key length")]
    KeyTooLong { script: ScriptId, key: String },
    #[error("{script}: key {key:?} contains U+{code:04X}, outside block {block}")]
    KeyOutsideBlock {
        script: ScriptId,
        key: String,
        code: u32,
        block: CodeRange,
    },
    #[error("{script}: duplicate key {key:?}")]
    DuplicateKey { script: ScriptId, key: String },
    #[error("{script}: multi-code-point key {key:?} must be a consonant conjunct")]
    CompoundNonConsonant { script: ScriptId, key: String },
    #[error("{script}: consonant {key:?} must end with the inherent vowel marker after a stem")]
    MissingInherentVowel { script: ScriptId, key: String },
    #[error("{script}: non-consonant {key:?} must not end with the inherent vowel marker")]
    UnexpectedInherentVowel { script: ScriptId, key: String },
    #[error("{script}: {key:?} maps to empty output")]
    EmptyOutput { script: ScriptId, key: String },
    #[error("{script}: virama {key:?} must map to empty output")]
    ViramaWithOutput { script: ScriptId, key: String },
    #[error("{script}: sign {key:?} lies outside the modifier ranges")]
    SignOutsideModifiers { script: ScriptId, key: String },
    #[error("{script}: {key:?} lies inside a modifier range but is not a sign")]
    LetterInsideModifiers { script: ScriptId, key: String },
    #[error("{script}: modifier range {range} lies outside block {block}")]
    ModifierOutsideBlock {
        script: ScriptId,
        range: CodeRange,
        block: CodeRange,
    },
    #[error("{script}: nukta U+{nukta:04X} lies outside block {block}")]
    NuktaOutsideBlock {
        script: ScriptId,
        nukta: u32,
        block: CodeRange,
    },
    #[error("{script}: nukta U+{nukta:04X} overlaps modifier range {range}")]
    NuktaInsideModifiers {
        script: ScriptId,
        nukta: u32,
        range: CodeRange,
    },
    #[error("{script}: nukta U+{nukta:04X} must not have its own mapping")]
    NuktaIsMapped { script: ScriptId, nukta: u32 },
    #[error("{script}: nukta substitutions given but the script has no nukta")]
    SubstitutionsWithoutNukta { script: ScriptId },
    #[error("{script}: nukta substitution {from:?} -> {to:?} is malformed")]
    MalformedSubstitution {
        script: ScriptId,
        from: String,
        to: String,
    },
    #[error("script {0} registered twice")]
    DuplicateScript(ScriptId),
    #[error("blocks of {first} and {second} overlap")]
    OverlappingBlocks { first: ScriptId, second: ScriptId },
    #[error("{script}: output for {key:?} contains {owner} text")]
    OutputInScriptBlock {
        script: ScriptId,
        key: String,
        owner: ScriptId,
    },
}

#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<char, Box<TrieNode>>,
    entry: Option<Entry>,
}

impl TrieNode {
    #[inline]
    fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c).map(|b| b.as_ref())
    }

    fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(|| Box::new(TrieNode::default()))
    }
}

/// Immutable, validated mapping for one script.
#[derive(Debug)]
pub struct ScriptTable {
    id: ScriptId,
    block: CodeRange,
    modifiers: Vec<CodeRange>,
    nukta: Option<char>,
    entries: &'static [Entry],
    trie: TrieNode,
    nukta_substitutions: FxHashMap<&'static str, &'static str>,
}

impl ScriptTable {
    pub fn new(spec: &TableSpec) -> Result<Self, TableError> {
        let script = spec.id;

        for range in spec.modifiers {
            if !range.is_within(&spec.block) {
                return Err(TableError::ModifierOutsideBlock {
                    script,
                    range: *range,
                    block: spec.block,
                });
            }
        }
        let in_modifiers = |c: char| spec.modifiers.iter().any(|r| r.contains(c));

        if let Some(nukta) = spec.nukta {
            if !spec.block.contains(nukta) {
                return Err(TableError::NuktaOutsideBlock {
                    script,
                    nukta: nukta as u32,
                    block: spec.block,
                });
            }
            if let Some(range) = spec.modifiers.iter().find(|r| r.contains(nukta)) {
                return Err(TableError::NuktaInsideModifiers {
                    script,
                    nukta: nukta as u32,
                    range: *range,
                });
            }
        }

        let mut trie = TrieNode::default();
        let mut seen: FxHashSet<&str> =
            FxHashSet::with_capacity_and_hasher(spec.entries.len(), Default::default());

        for entry in spec.entries {
            let key = entry.key;
            let cps: Vec<char> = key.chars().collect();
            let owned = || key.to_string();

            if cps.is_empty() {
                return Err(TableError::EmptyKey { script });
            }
            if cps.len() > MAX_KEY_LEN {
                return Err(TableError::KeyTooLong { script, key: owned() });
            }
            if let Some(&c) = cps.iter().find(|&&c| !spec.block.contains(c)) {
                return Err(TableError::KeyOutsideBlock {
                    script,
                    key: owned(),
                    code: c as u32,
                    block: spec.block,
                });
            }
            if !seen.insert(key) {
                return Err(TableError::DuplicateKey { script, key: owned() });
            }
            if cps.len() > 1 && entry.kind != EntryKind::Consonant {
                return Err(TableError::CompoundNonConsonant { script, key: owned() });
            }
            if spec.nukta == Some(cps[0]) && cps.len() == 1 {
                return Err(TableError::NuktaIsMapped {
                    script,
                    nukta: cps[0] as u32,
                });
            }

            match entry.kind {
                EntryKind::Consonant => {
                    if !has_inherent_vowel(entry.output) || strip_inherent_vowel(entry.output).is_empty() {
                        return Err(TableError::MissingInherentVowel { script, key: owned() });
                    }
                }
                EntryKind::Virama => {
                    if !entry.output.is_empty() {
                        return Err(TableError::ViramaWithOutput { script, key: owned() });
                    }
                }
                _ => {
                    if entry.output.is_empty() {
                        return Err(TableError::EmptyOutput { script, key: owned() });
                    }
                    if has_inherent_vowel(entry.output) {
                        return Err(TableError::UnexpectedInherentVowel { script, key: owned() });
                    }
                }
            }

            // Conjunct keys start with a consonant, so only the head is checked.
            let head_is_modifier = in_modifiers(cps[0]);
            if entry.kind.is_sign() && !head_is_modifier {
                return Err(TableError::SignOutsideModifiers { script, key: owned() });
            }
            if !entry.kind.is_sign() && head_is_modifier {
                return Err(TableError::LetterInsideModifiers { script, key: owned() });
            }

            let mut node = &mut trie;
            for &c in &cps {
                node = node.get_or_create_child(c);
            }
            node.entry = Some(*entry);
        }

        if spec.nukta.is_none() && !spec.nukta_substitutions.is_empty() {
            return Err(TableError::SubstitutionsWithoutNukta { script });
        }

        let mut nukta_substitutions = FxHashMap::default();
        for &(from, to) in spec.nukta_substitutions {
            let malformed = strip_inherent_vowel(from).is_empty()
                || strip_inherent_vowel(to).is_empty()
                || has_inherent_vowel(from) != has_inherent_vowel(to)
                || nukta_substitutions.insert(from, to).is_some();
            if malformed {
                return Err(TableError::MalformedSubstitution {
                    script,
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
        }

        Ok(ScriptTable {
            id: script,
            block: spec.block,
            modifiers: spec.modifiers.to_vec(),
            nukta: spec.nukta,
            entries: spec.entries,
            trie,
            nukta_substitutions,
        })
    }

    pub fn id(&self) -> ScriptId {
        self.id
    }

    pub fn block(&self) -> CodeRange {
        self.block
    }

    pub fn nukta(&self) -> Option<char> {
        self.nukta
    }

    #[inline]
    pub fn is_in_block(&self, c: char) -> bool {
        self.block.contains(c)
    }

    /// Matra and virama membership test.
    #[inline]
    pub fn is_modifier(&self, c: char) -> bool {
        self.modifiers.iter().any(|r| r.contains(c))
    }

    #[inline]
    pub fn is_nukta(&self, c: char) -> bool {
        self.nukta == Some(c)
    }

    /// Single code point lookup.
    #[inline]
    pub fn lookup(&self, c: char) -> Option<&Entry> {
        self.trie.get_child(c).and_then(|n| n.entry.as_ref())
    }

    /// Exact lookup of a whole key.
    pub fn map(&self, key: &[char]) -> Option<&Entry> {
        let mut node = &self.trie;
        for &c in key {
            node = node.get_child(c)?;
        }
        node.entry.as_ref()
    }

    /// Longest key starting at `start`, with its length in code points.
    #[inline]
    pub fn longest_match(&self, cps: &[char], start: usize) -> Option<(usize, &Entry)> {
        let mut node = &self.trie;
        let mut best = None;
        for (offset, &c) in cps.get(start..).unwrap_or(&[]).iter().take(MAX_KEY_LEN).enumerate() {
            match node.get_child(c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(entry) = node.entry.as_ref() {
                best = Some((offset + 1, entry));
            }
        }
        best
    }

    pub fn nukta_substitution(&self, output: &str) -> Option<&'static str> {
        self.nukta_substitutions.get(output).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: CodeRange = CodeRange::new('\u{0900}', '\u{097F}');
    const MODIFIERS: &[CodeRange] = &[CodeRange::new('\u{093E}', '\u{094F}')];
    const NUKTA: char = '\u{093C}';

    const ENTRIES: &[Entry] = &[
        Entry::vowel("\u{0905}", "a"),
        Entry::consonant("\u{0915}", "k\u{2090}"),
        Entry::consonant("\u{0937}", "Sh\u{2090}"),
        Entry::consonant("\u{0915}\u{094D}\u{0937}", "ksh\u{2090}"),
        Entry::vowel_sign("\u{093F}", "i"),
        Entry::virama("\u{094D}"),
        Entry::digit("\u{0967}", "1"),
    ];
    const SUBSTITUTIONS: &[(&str, &str)] = &[("k\u{2090}", "q\u{2090}"), ("k", "q")];

    fn spec(entries: &'static [Entry]) -> TableSpec {
        TableSpec {
            id: ScriptId::Devanagari,
            block: BLOCK,
            modifiers: MODIFIERS,
            nukta: Some(NUKTA),
            entries,
            nukta_substitutions: SUBSTITUTIONS,
        }
    }

    #[test]
    fn consonant_carries_inherent_vowel() {
        let table = ScriptTable::new(&spec(ENTRIES)).unwrap();
        let entry = table.lookup('\u{0915}').unwrap();
        assert_eq!(entry.kind, EntryKind::Consonant);
        assert!(has_inherent_vowel(entry.output));
        assert_eq!(strip_inherent_vowel(entry.output), "k");
    }

    #[test]
    fn membership() {
        let table = ScriptTable::new(&spec(ENTRIES)).unwrap();
        assert!(table.is_in_block('\u{0915}'));
        assert!(!table.is_in_block('k'));
        assert!(table.is_modifier('\u{093F}'));
        assert!(table.is_modifier('\u{094D}'));
        assert!(!table.is_modifier('\u{0915}'));
        assert!(table.is_nukta(NUKTA));
        assert_eq!(table.len(), ENTRIES.len());
    }

    #[test]
    fn longest_match_prefers_conjunct() {
        let table = ScriptTable::new(&spec(ENTRIES)).unwrap();
        let cps: Vec<char> = "\u{0915}\u{094D}\u{0937}\u{093F}".chars().collect();
        let (len, entry) = table.longest_match(&cps, 0).unwrap();
        assert_eq!(len, 3);
        assert_eq!(entry.output, "ksh\u{2090}");

        // ka + virama + ka is not a conjunct; fall back to the single consonant.
        let cps: Vec<char> = "\u{0915}\u{094D}\u{0915}".chars().collect();
        let (len, entry) = table.longest_match(&cps, 0).unwrap();
        assert_eq!(len, 1);
        assert_eq!(entry.output, "k\u{2090}");

        assert!(table.longest_match(&cps, 10).is_none());
        assert!(table.map(&['\u{0915}', '\u{094D}']).is_none());
    }

    #[test]
    fn nukta_substitution_lookup() {
        let table = ScriptTable::new(&spec(ENTRIES)).unwrap();
        assert_eq!(table.nukta_substitution("k\u{2090}"), Some("q\u{2090}"));
        assert_eq!(table.nukta_substitution("k"), Some("q"));
        assert_eq!(table.nukta_substitution("g\u{2090}"), None);
    }

    #[test]
    fn error_consonant_without_marker() {
        const BAD: &[Entry] = &[Entry::consonant("\u{0915}", "ka")];
        let err = ScriptTable::new(&spec(BAD)).unwrap_err();
        assert!(matches!(err, TableError::MissingInherentVowel { .. }));
    }

    #[test]
    fn error_vowel_with_marker() {
        const BAD: &[Entry] = &[Entry::vowel("\u{0905}", "a\u{2090}")];
        let err = ScriptTable::new(&spec(BAD)).unwrap_err();
        assert!(matches!(err, TableError::UnexpectedInherentVowel { .. }));
    }

    #[test]
    fn error_empty_output() {
        const BAD: &[Entry] = &[Entry::vowel_sign("\u{093F}", "")];
        let err = ScriptTable::new(&spec(BAD)).unwrap_err();
        assert!(matches!(err, TableError::EmptyOutput { .. }));
    }

    #[test]
    fn error_key_outside_block() {
        const BAD: &[Entry] = &[Entry::consonant("\u{0C95}", "k\u{2090}")];
        let err = ScriptTable::new(&spec(BAD)).unwrap_err();
        assert!(matches!(err, TableError::KeyOutsideBlock { code: 0x0C95, .. }));
    }

    #[test]
    fn error_duplicate_key() {
        const BAD: &[Entry] = &[
            Entry::consonant("\u{0915}", "k\u{2090}"),
            Entry::consonant("\u{0915}", "q\u{2090}"),
        ];
        let err = ScriptTable::new(&spec(BAD)).unwrap_err();
        assert!(matches!(err, TableError::DuplicateKey { .. }));
    }

    #[test]
    fn error_sign_outside_modifiers() {
        const BAD: &[Entry] = &[Entry::vowel_sign("\u{0915}", "i")];
        let err = ScriptTable::new(&spec(BAD)).unwrap_err();
        assert!(matches!(err, TableError::SignOutsideModifiers { .. }));
    }

    #[test]
    fn error_letter_inside_modifiers() {
        const BAD: &[Entry] = &[Entry::vowel("\u{093F}", "i")];
        let err = ScriptTable::new(&spec(BAD)).unwrap_err();
        assert!(matches!(err, TableError::LetterInsideModifiers { .. }));
    }

    #[test]
    fn error_compound_vowel() {
        const BAD: &[Entry] = &[Entry::vowel("\u{0905}\u{0905}", "aa")];
        let err = ScriptTable::new(&spec(BAD)).unwrap_err();
        assert!(matches!(err, TableError::CompoundNonConsonant { .. }));
    }

    #[test]
    fn error_key_too_long() {
        const BAD: &[Entry] = &[Entry::consonant("\u{0915}\u{094D}\u{0937}\u{094D}", "ksh\u{2090}")];
        let err = ScriptTable::new(&spec(BAD)).unwrap_err();
        assert!(matches!(err, TableError::KeyTooLong { .. }));
    }

    #[test]
    fn error_nukta_overlaps_modifiers() {
        let mut bad = spec(ENTRIES);
        bad.nukta = Some('\u{093F}');
        let err = ScriptTable::new(&bad).unwrap_err();
        assert!(matches!(err, TableError::NuktaInsideModifiers { .. }));
    }

    #[test]
    fn error_nukta_outside_block() {
        let mut bad = spec(ENTRIES);
        bad.nukta = Some('\u{0CBC}');
        let err = ScriptTable::new(&bad).unwrap_err();
        assert!(matches!(err, TableError::NuktaOutsideBlock { .. }));
    }

    #[test]
    fn error_substitutions_without_nukta() {
        let mut bad = spec(ENTRIES);
        bad.nukta = None;
        let err = ScriptTable::new(&bad).unwrap_err();
        assert_eq!(err, TableError::SubstitutionsWithoutNukta { script: ScriptId::Devanagari });
    }

    #[test]
    fn error_substitution_drops_marker() {
        const BAD: &[(&str, &str)] = &[("k\u{2090}", "q")];
        let mut bad = spec(ENTRIES);
        bad.nukta_substitutions = BAD;
        let err = ScriptTable::new(&bad).unwrap_err();
        assert!(matches!(err, TableError::MalformedSubstitution { .. }));
    }

    #[test]
    fn error_modifier_outside_block() {
        const BAD: &[CodeRange] = &[CodeRange::new('\u{0970}', '\u{0990}')];
        let mut bad = spec(ENTRIES);
        bad.modifiers = BAD;
        let err = ScriptTable::new(&bad).unwrap_err();
        assert!(matches!(err, TableError::ModifierOutsideBlock { .. }));
    }

    #[test]
    fn code_range_display_and_overlap() {
        let a = CodeRange::new('\u{0900}', '\u{097F}');
        let b = CodeRange::new('\u{0950}', '\u{0A00}');
        let c = CodeRange::new('\u{0C00}', '\u{0C7F}');
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert_eq!(a.to_string(), "U+0900..U+097F");
    }
}
