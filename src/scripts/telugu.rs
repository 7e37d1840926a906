use crate::constants::*;
use crate::script::ScriptId;
use crate::table::{CodeRange, Entry, TableSpec};

const ENTRIES: &[Entry] = &[
    // Vowels
    Entry::vowel("\u{0C05}", "a"),
    Entry::vowel("\u{0C06}", "aa"),
    Entry::vowel("\u{0C07}", "i"),
    Entry::vowel("\u{0C08}", "ii"),
    Entry::vowel("\u{0C09}", "u"),
    Entry::vowel("\u{0C0A}", "uu"),
    Entry::vowel("\u{0C0B}", "RRi"),
    Entry::vowel("\u{0C60}", "RRI"),
    Entry::vowel("\u{0C0C}", "LLi"),
    Entry::vowel("\u{0C61}", "LLI"),
    Entry::vowel("\u{0C0E}", "e"),
    Entry::vowel("\u{0C0F}", "ee"),
    Entry::vowel("\u{0C10}", "ai"),
    Entry::vowel("\u{0C12}", "o"),
    Entry::vowel("\u{0C13}", "oo"),
    Entry::vowel("\u{0C14}", "au"),
    // Consonants
    Entry::consonant("\u{0C15}", "k\u{2090}"),
    Entry::consonant("\u{0C16}", "kh\u{2090}"),
    Entry::consonant("\u{0C17}", "g\u{2090}"),
    Entry::consonant("\u{0C18}", "gh\u{2090}"),
    Entry::consonant("\u{0C19}", "gn\u{2090}"),
    Entry::consonant("\u{0C1A}", "ch\u{2090}"),
    Entry::consonant("\u{0C1B}", "Ch\u{2090}"),
    Entry::consonant("\u{0C1C}", "j\u{2090}"),
    Entry::consonant("\u{0C1D}", "jh\u{2090}"),
    Entry::consonant("\u{0C1E}", "jn\u{2090}"),
    Entry::consonant("\u{0C1F}", "T\u{2090}"),
    Entry::consonant("\u{0C20}", "Th\u{2090}"),
    Entry::consonant("\u{0C21}", "D\u{2090}"),
    Entry::consonant("\u{0C22}", "Dh\u{2090}"),
    Entry::consonant("\u{0C23}", "N\u{2090}"),
    Entry::consonant("\u{0C24}", "t\u{2090}"),
    Entry::consonant("\u{0C25}", "th\u{2090}"),
    Entry::consonant("\u{0C26}", "d\u{2090}"),
    Entry::consonant("\u{0C27}", "dh\u{2090}"),
    Entry::consonant("\u{0C28}", "n\u{2090}"),
    Entry::consonant("\u{0C2A}", "p\u{2090}"),
    Entry::consonant("\u{0C2B}", "ph\u{2090}"),
    Entry::consonant("\u{0C2C}", "b\u{2090}"),
    Entry::consonant("\u{0C2D}", "bh\u{2090}"),
    Entry::consonant("\u{0C2E}", "m\u{2090}"),
    Entry::consonant("\u{0C2F}", "y\u{2090}"),
    Entry::consonant("\u{0C30}", "r\u{2090}"),
    Entry::consonant("\u{0C31}", "R\u{2090}"),
    Entry::consonant("\u{0C32}", "l\u{2090}"),
    Entry::consonant("\u{0C33}", "L\u{2090}"),
    Entry::consonant("\u{0C35}", "v\u{2090}"),
    Entry::consonant("\u{0C36}", "sh\u{2090}"),
    Entry::consonant("\u{0C37}", "Sh\u{2090}"),
    Entry::consonant("\u{0C38}", "s\u{2090}"),
    Entry::consonant("\u{0C39}", "h\u{2090}"),
    // Conjuncts
    Entry::consonant("\u{0C15}\u{0C4D}\u{0C37}", "ksh\u{2090}"),
    // Matras
    Entry::vowel_sign("\u{0C3E}", "aa"),
    Entry::vowel_sign("\u{0C3F}", "i"),
    Entry::vowel_sign("\u{0C40}", "ii"),
    Entry::vowel_sign("\u{0C41}", "u"),
    Entry::vowel_sign("\u{0C42}", "uu"),
    Entry::vowel_sign("\u{0C43}", "RRi"),
    Entry::vowel_sign("\u{0C44}", "RRI"),
    Entry::vowel_sign("\u{0C46}", "e"),
    Entry::vowel_sign("\u{0C47}", "ee"),
    Entry::vowel_sign("\u{0C48}", "ai"),
    Entry::vowel_sign("\u{0C4A}", "o"),
    Entry::vowel_sign("\u{0C4B}", "oo"),
    Entry::vowel_sign("\u{0C4C}", "au"),
    Entry::vowel_sign("\u{0C62}", "LLi"),
    Entry::vowel_sign("\u{0C63}", "LLI"),
    Entry::virama("\u{0C4D}"),
    // Candrabindu, anusvara, visarga
    Entry::mark("\u{0C01}", "\u{207F}"),
    Entry::mark("\u{0C02}", "\u{207F}"),
    Entry::mark("\u{0C03}", "H"),
    // Numerals
    Entry::digit("\u{0C66}", "0"),
    Entry::digit("\u{0C67}", "1"),
    Entry::digit("\u{0C68}", "2"),
    Entry::digit("\u{0C69}", "3"),
    Entry::digit("\u{0C6A}", "4"),
    Entry::digit("\u{0C6B}", "5"),
    Entry::digit("\u{0C6C}", "6"),
    Entry::digit("\u{0C6D}", "7"),
    Entry::digit("\u{0C6E}", "8"),
    Entry::digit("\u{0C6F}", "9"),
];

const MODIFIERS: &[CodeRange] = &[
    CodeRange::new(TELUGU_MODIFIER_START, TELUGU_MODIFIER_END),
    CodeRange::new(TELUGU_VOCALIC_SIGN_START, TELUGU_VOCALIC_SIGN_END),
];

pub const SPEC: TableSpec = TableSpec {
    id: ScriptId::Telugu,
    block: CodeRange::new(TELUGU_START, TELUGU_END),
    modifiers: MODIFIERS,
    nukta: None,
    entries: ENTRIES,
    nukta_substitutions: &[],
};
