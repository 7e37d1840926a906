use crate::constants::*;
use crate::script::ScriptId;
use crate::table::{CodeRange, Entry, TableSpec};

const ENTRIES: &[Entry] = &[
    // Vowels
    Entry::vowel("\u{0C85}", "a"),
    Entry::vowel("\u{0C86}", "aa"),
    Entry::vowel("\u{0C87}", "i"),
    Entry::vowel("\u{0C88}", "ii"),
    Entry::vowel("\u{0C89}", "u"),
    Entry::vowel("\u{0C8A}", "uu"),
    Entry::vowel("\u{0C8B}", "RRi"),
    Entry::vowel("\u{0CE0}", "RRI"),
    Entry::vowel("\u{0C8C}", "LLi"),
    Entry::vowel("\u{0CE1}", "LLI"),
    Entry::vowel("\u{0C8E}", "e"),
    Entry::vowel("\u{0C8F}", "ee"),
    Entry::vowel("\u{0C90}", "ai"),
    Entry::vowel("\u{0C92}", "o"),
    Entry::vowel("\u{0C93}", "oo"),
    Entry::vowel("\u{0C94}", "au"),
    // Consonants
    Entry::consonant("\u{0C95}", "k\u{2090}"),
    Entry::consonant("\u{0C96}", "kh\u{2090}"),
    Entry::consonant("\u{0C97}", "g\u{2090}"),
    Entry::consonant("\u{0C98}", "gh\u{2090}"),
    Entry::consonant("\u{0C99}", "gn\u{2090}"),
    Entry::consonant("\u{0C9A}", "ch\u{2090}"),
    Entry::consonant("\u{0C9B}", "Ch\u{2090}"),
    Entry::consonant("\u{0C9C}", "j\u{2090}"),
    Entry::consonant("\u{0C9D}", "jh\u{2090}"),
    Entry::consonant("\u{0C9E}", "jn\u{2090}"),
    Entry::consonant("\u{0C9F}", "T\u{2090}"),
    Entry::consonant("\u{0CA0}", "Th\u{2090}"),
    Entry::consonant("\u{0CA1}", "D\u{2090}"),
    Entry::consonant("\u{0CA2}", "Dh\u{2090}"),
    Entry::consonant("\u{0CA3}", "N\u{2090}"),
    Entry::consonant("\u{0CA4}", "t\u{2090}"),
    Entry::consonant("\u{0CA5}", "th\u{2090}"),
    Entry::consonant("\u{0CA6}", "d\u{2090}"),
    Entry::consonant("\u{0CA7}", "dh\u{2090}"),
    Entry::consonant("\u{0CA8}", "n\u{2090}"),
    Entry::consonant("\u{0CAA}", "p\u{2090}"),
    Entry::consonant("\u{0CAB}", "ph\u{2090}"),
    Entry::consonant("\u{0CAC}", "b\u{2090}"),
    Entry::consonant("\u{0CAD}", "bh\u{2090}"),
    Entry::consonant("\u{0CAE}", "m\u{2090}"),
    Entry::consonant("\u{0CAF}", "y\u{2090}"),
    Entry::consonant("\u{0CB0}", "r\u{2090}"),
    Entry::consonant("\u{0CB1}", "R\u{2090}"),
    Entry::consonant("\u{0CB2}", "l\u{2090}"),
    Entry::consonant("\u{0CB3}", "L\u{2090}"),
    Entry::consonant("\u{0CB5}", "v\u{2090}"),
    Entry::consonant("\u{0CB6}", "sh\u{2090}"),
    Entry::consonant("\u{0CB7}", "Sh\u{2090}"),
    Entry::consonant("\u{0CB8}", "s\u{2090}"),
    Entry::consonant("\u{0CB9}", "h\u{2090}"),
    Entry::consonant("\u{0CDE}", "LL\u{2090}"),
    // Conjuncts
    Entry::consonant("\u{0C95}\u{0CCD}\u{0CB7}", "ksh\u{2090}"),
    Entry::consonant("\u{0C9C}\u{0CCD}\u{0C9E}", "gy\u{2090}"),
    // Matras
    Entry::vowel_sign("\u{0CBE}", "aa"),
    Entry::vowel_sign("\u{0CBF}", "i"),
    Entry::vowel_sign("\u{0CC0}", "ii"),
    Entry::vowel_sign("\u{0CC1}", "u"),
    Entry::vowel_sign("\u{0CC2}", "uu"),
    Entry::vowel_sign("\u{0CC3}", "ru"),
    Entry::vowel_sign("\u{0CC4}", "RRI"),
    Entry::vowel_sign("\u{0CC6}", "e"),
    Entry::vowel_sign("\u{0CC7}", "ee"),
    Entry::vowel_sign("\u{0CC8}", "ai"),
    Entry::vowel_sign("\u{0CCA}", "o"),
    Entry::vowel_sign("\u{0CCB}", "oo"),
    Entry::vowel_sign("\u{0CCC}", "au"),
    Entry::vowel_sign("\u{0CE2}", "LLi"),
    Entry::vowel_sign("\u{0CE3}", "LLI"),
    Entry::virama("\u{0CCD}"),
    // Candrabindu, anusvara, visarga
    Entry::mark("\u{0C81}", "\u{207F}"),
    Entry::mark("\u{0C82}", "\u{207F}"),
    Entry::mark("\u{0C83}", "H"),
    // Numerals
    Entry::digit("\u{0CE6}", "0"),
    Entry::digit("\u{0CE7}", "1"),
    Entry::digit("\u{0CE8}", "2"),
    Entry::digit("\u{0CE9}", "3"),
    Entry::digit("\u{0CEA}", "4"),
    Entry::digit("\u{0CEB}", "5"),
    Entry::digit("\u{0CEC}", "6"),
    Entry::digit("\u{0CED}", "7"),
    Entry::digit("\u{0CEE}", "8"),
    Entry::digit("\u{0CEF}", "9"),
];

const NUKTA_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("k\u{2090}", "q\u{2090}"),
    ("kh\u{2090}", "qh\u{2090}"),
    ("j\u{2090}", "z\u{2090}"),
    ("ph\u{2090}", "f\u{2090}"),
    ("k", "q"),
    ("kh", "qh"),
    ("j", "z"),
    ("ph", "f"),
];

const MODIFIERS: &[CodeRange] = &[
    CodeRange::new(KANNADA_MODIFIER_START, KANNADA_MODIFIER_END),
    CodeRange::new(KANNADA_VOCALIC_SIGN_START, KANNADA_VOCALIC_SIGN_END),
];

pub const SPEC: TableSpec = TableSpec {
    id: ScriptId::Kannada,
    block: CodeRange::new(KANNADA_START, KANNADA_END),
    modifiers: MODIFIERS,
    nukta: Some(KANNADA_NUKTA),
    entries: ENTRIES,
    nukta_substitutions: NUKTA_SUBSTITUTIONS,
};
