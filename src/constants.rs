// Inherent vowel marker appended to every consonant output (U+2090).
pub const INHERENT_VOWEL_MARKER: char = '\u{2090}';
// What a surviving marker renders as under `MarkerStyle::Plain`.
pub const PLAIN_INHERENT_VOWEL: char = 'a';

// Longest table key, in code points (e.g. ka + virama + ssa).
pub const MAX_KEY_LEN: usize = 3;

// Devanagari Unicode Ranges
pub const DEVANAGARI_START: char = '\u{0900}';
pub const DEVANAGARI_END: char = '\u{097F}';
pub const DEVANAGARI_MODIFIER_START: char = '\u{093E}';
pub const DEVANAGARI_MODIFIER_END: char = '\u{094F}';
pub const DEVANAGARI_VOCALIC_SIGN_START: char = '\u{0962}';
pub const DEVANAGARI_VOCALIC_SIGN_END: char = '\u{0963}';
pub const DEVANAGARI_NUKTA: char = '\u{093C}';

// Telugu Unicode Ranges (no nukta)
pub const TELUGU_START: char = '\u{0C00}';
pub const TELUGU_END: char = '\u{0C7F}';
pub const TELUGU_MODIFIER_START: char = '\u{0C3E}';
pub const TELUGU_MODIFIER_END: char = '\u{0C4D}';
pub const TELUGU_VOCALIC_SIGN_START: char = '\u{0C62}';
pub const TELUGU_VOCALIC_SIGN_END: char = '\u{0C63}';

// Kannada Unicode Ranges
pub const KANNADA_START: char = '\u{0C80}';
pub const KANNADA_END: char = '\u{0CFF}';
pub const KANNADA_MODIFIER_START: char = '\u{0CBE}';
pub const KANNADA_MODIFIER_END: char = '\u{0CCD}';
pub const KANNADA_VOCALIC_SIGN_START: char = '\u{0CE2}';
pub const KANNADA_VOCALIC_SIGN_END: char = '\u{0CE3}';
pub const KANNADA_NUKTA: char = '\u{0CBC}';

/// True if `s` ends with the inherent vowel marker.
#[inline]
pub fn has_inherent_vowel(s: &str) -> bool {
    s.ends_with(INHERENT_VOWEL_MARKER)
}

/// Drop a trailing inherent vowel marker, if any.
#[inline]
pub fn strip_inherent_vowel(s: &str) -> &str {
    s.strip_suffix(INHERENT_VOWEL_MARKER).unwrap_or(s)
}
