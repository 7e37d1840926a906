use crate::constants::*;
use crate::script::ScriptId;
use crate::table::{CodeRange, Entry, TableSpec};

// Om (U+0950) is deliberately unmapped: it is a symbol, not part of a word.
const ENTRIES: &[Entry] = &[
    // Vowels
    Entry::vowel("\u{0905}", "a"),
    Entry::vowel("\u{0906}", "aa"),
    Entry::vowel("\u{0907}", "i"),
    Entry::vowel("\u{0908}", "ii"),
    Entry::vowel("\u{0909}", "u"),
    Entry::vowel("\u{090A}", "uu"),
    Entry::vowel("\u{090B}", "RRi"),
    Entry::vowel("\u{0960}", "RRI"),
    Entry::vowel("\u{090C}", "LLi"),
    Entry::vowel("\u{0961}", "LLI"),
    Entry::vowel("\u{090F}", "e"),
    Entry::vowel("\u{0910}", "ai"),
    Entry::vowel("\u{0911}", "o"),
    Entry::vowel("\u{0913}", "o"),
    Entry::vowel("\u{0914}", "au"),
    // Consonants
    Entry::consonant("\u{0915}", "k\u{2090}"),
    Entry::consonant("\u{0916}", "kh\u{2090}"),
    Entry::consonant("\u{0917}", "g\u{2090}"),
    Entry::consonant("\u{0918}", "gh\u{2090}"),
    Entry::consonant("\u{0919}", "gn\u{2090}"),
    Entry::consonant("\u{091A}", "ch\u{2090}"),
    Entry::consonant("\u{091B}", "Ch\u{2090}"),
    Entry::consonant("\u{091C}", "j\u{2090}"),
    Entry::consonant("\u{091D}", "jh\u{2090}"),
    Entry::consonant("\u{091E}", "jn\u{2090}"),
    Entry::consonant("\u{091F}", "T\u{2090}"),
    Entry::consonant("\u{0920}", "Th\u{2090}"),
    Entry::consonant("\u{0921}", "D\u{2090}"),
    Entry::consonant("\u{0922}", "Dh\u{2090}"),
    Entry::consonant("\u{0923}", "N\u{2090}"),
    Entry::consonant("\u{0924}", "t\u{2090}"),
    Entry::consonant("\u{0925}", "th\u{2090}"),
    Entry::consonant("\u{0926}", "d\u{2090}"),
    Entry::consonant("\u{0927}", "dh\u{2090}"),
    Entry::consonant("\u{0928}", "n\u{2090}"),
    Entry::consonant("\u{092A}", "p\u{2090}"),
    Entry::consonant("\u{092B}", "ph\u{2090}"),
    Entry::consonant("\u{092C}", "b\u{2090}"),
    Entry::consonant("\u{092D}", "bh\u{2090}"),
    Entry::consonant("\u{092E}", "m\u{2090}"),
    Entry::consonant("\u{092F}", "y\u{2090}"),
    Entry::consonant("\u{0930}", "r\u{2090}"),
    Entry::consonant("\u{0932}", "l\u{2090}"),
    Entry::consonant("\u{0933}", "L\u{2090}"),
    Entry::consonant("\u{0935}", "v\u{2090}"),
    Entry::consonant("\u{0936}", "sh\u{2090}"),
    Entry::consonant("\u{0937}", "Sh\u{2090}"),
    Entry::consonant("\u{0938}", "s\u{2090}"),
    Entry::consonant("\u{0939}", "h\u{2090}"),
    // Precomposed nukta consonants; must agree with NUKTA_SUBSTITUTIONS.
    // U+0929, U+0931 and U+0934 survive NFC, so web text carries them as is.
    Entry::consonant("\u{0929}", "n\u{2090}"),
    Entry::consonant("\u{0931}", "r\u{2090}"),
    Entry::consonant("\u{0934}", "L\u{2090}"),
    Entry::consonant("\u{0958}", "q\u{2090}"),
    Entry::consonant("\u{0959}", "qh\u{2090}"),
    Entry::consonant("\u{095A}", "g\u{2090}"),
    Entry::consonant("\u{095B}", "z\u{2090}"),
    Entry::consonant("\u{095C}", "r\u{2090}"),
    Entry::consonant("\u{095D}", "rh\u{2090}"),
    Entry::consonant("\u{095E}", "f\u{2090}"),
    Entry::consonant("\u{095F}", "yy\u{2090}"),
    // Conjuncts
    Entry::consonant("\u{0915}\u{094D}\u{0937}", "ksh\u{2090}"),
    Entry::consonant("\u{091C}\u{094D}\u{091E}", "gy\u{2090}"),
    // Matras
    Entry::vowel_sign("\u{093E}", "aa"),
    Entry::vowel_sign("\u{093F}", "i"),
    Entry::vowel_sign("\u{0940}", "ii"),
    Entry::vowel_sign("\u{0941}", "u"),
    Entry::vowel_sign("\u{0942}", "uu"),
    Entry::vowel_sign("\u{0943}", "ri"),
    Entry::vowel_sign("\u{0944}", "RRI"),
    Entry::vowel_sign("\u{0945}", "e"),
    Entry::vowel_sign("\u{0947}", "e"),
    Entry::vowel_sign("\u{0948}", "ai"),
    Entry::vowel_sign("\u{0949}", "o"),
    Entry::vowel_sign("\u{094B}", "o"),
    Entry::vowel_sign("\u{094C}", "au"),
    Entry::vowel_sign("\u{0962}", "LLi"),
    Entry::vowel_sign("\u{0963}", "LLI"),
    Entry::virama("\u{094D}"),
    // Candrabindu, anusvara, visarga
    Entry::mark("\u{0901}", "\u{207F}"),
    Entry::mark("\u{0902}", "\u{207F}"),
    Entry::mark("\u{0903}", "H"),
    // Numerals
    Entry::digit("\u{0966}", "0"),
    Entry::digit("\u{0967}", "1"),
    Entry::digit("\u{0968}", "2"),
    Entry::digit("\u{0969}", "3"),
    Entry::digit("\u{096A}", "4"),
    Entry::digit("\u{096B}", "5"),
    Entry::digit("\u{096C}", "6"),
    Entry::digit("\u{096D}", "7"),
    Entry::digit("\u{096E}", "8"),
    Entry::digit("\u{096F}", "9"),
    // Danda, double danda
    Entry::punctuation("\u{0964}", ". "),
    Entry::punctuation("\u{0965}", ". "),
];

// Ga + nukta is left alone on purpose: it is commonly pronounced as plain ga.
const NUKTA_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("k\u{2090}", "q\u{2090}"),
    ("kh\u{2090}", "qh\u{2090}"),
    ("j\u{2090}", "z\u{2090}"),
    ("ph\u{2090}", "f\u{2090}"),
    ("D\u{2090}", "r\u{2090}"),
    ("Dh\u{2090}", "rh\u{2090}"),
    ("y\u{2090}", "yy\u{2090}"),
    ("k", "q"),
    ("kh", "qh"),
    ("j", "z"),
    ("ph", "f"),
    ("D", "r"),
    ("Dh", "rh"),
    ("y", "yy"),
];

const MODIFIERS: &[CodeRange] = &[
    CodeRange::new(DEVANAGARI_MODIFIER_START, DEVANAGARI_MODIFIER_END),
    CodeRange::new(DEVANAGARI_VOCALIC_SIGN_START, DEVANAGARI_VOCALIC_SIGN_END),
];

pub const SPEC: TableSpec = TableSpec {
    id: ScriptId::Devanagari,
    block: CodeRange::new(DEVANAGARI_START, DEVANAGARI_END),
    modifiers: MODIFIERS,
    nukta: Some(DEVANAGARI_NUKTA),
    entries: ENTRIES,
    nukta_substitutions: NUKTA_SUBSTITUTIONS,
};
