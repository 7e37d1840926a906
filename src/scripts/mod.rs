//! Built-in script tables.

mod devanagari;
mod kannada;
mod telugu;

use crate::table::TableSpec;

/// Built-in table specs, in classification priority order.
pub const BUILTIN_SPECS: [TableSpec; 3] = [devanagari::SPEC, kannada::SPEC, telugu::SPEC];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{has_inherent_vowel, INHERENT_VOWEL_MARKER};
    use crate::script::ScriptId;
    use crate::table::{EntryKind, ScriptTable};

    #[test]
    fn builtin_specs_follow_priority_order() {
        let ids: Vec<ScriptId> = BUILTIN_SPECS.iter().map(|s| s.id).collect();
        assert_eq!(ids, ScriptId::ALL.to_vec());
    }

    #[test]
    fn builtin_tables_validate() {
        for spec in &BUILTIN_SPECS {
            if let Err(e) = ScriptTable::new(spec) {
                panic!("{} table rejected: {}", spec.id, e);
            }
        }
    }

    #[test]
    fn every_consonant_ends_with_marker() {
        for spec in &BUILTIN_SPECS {
            for entry in spec.entries {
                assert_eq!(
                    entry.kind == EntryKind::Consonant,
                    has_inherent_vowel(entry.output),
                    "{} entry {:?}",
                    spec.id,
                    entry.key
                );
            }
        }
    }

    #[test]
    fn digits_are_ascii_and_ordered() {
        for spec in &BUILTIN_SPECS {
            let digits: String = spec
                .entries
                .iter()
                .filter(|e| e.kind == EntryKind::Digit)
                .map(|e| e.output)
                .collect();
            assert_eq!(digits, "0123456789", "{}", spec.id);
        }
    }

    #[test]
    fn nukta_forms_agree_with_precomposed_letters() {
        let table = ScriptTable::new(&BUILTIN_SPECS[0]).unwrap();
        for (precomposed, base) in [
            ('\u{0929}', '\u{0928}'),
            ('\u{0931}', '\u{0930}'),
            ('\u{0934}', '\u{0933}'),
            ('\u{0958}', '\u{0915}'),
            ('\u{0959}', '\u{0916}'),
            ('\u{095A}', '\u{0917}'),
            ('\u{095B}', '\u{091C}'),
            ('\u{095C}', '\u{0921}'),
            ('\u{095D}', '\u{0922}'),
            ('\u{095E}', '\u{092B}'),
            ('\u{095F}', '\u{092F}'),
        ] {
            let base_out = table.lookup(base).unwrap().output;
            let expected = table.nukta_substitution(base_out).unwrap_or(base_out);
            assert_eq!(table.lookup(precomposed).unwrap().output, expected);
        }
    }

    #[test]
    fn telugu_has_no_nukta() {
        let table = ScriptTable::new(&BUILTIN_SPECS[2]).unwrap();
        assert_eq!(table.nukta(), None);
        assert!(!table.is_nukta('\u{0C3C}'));
        assert!(table.lookup('\u{0C15}').unwrap().output.ends_with(INHERENT_VOWEL_MARKER));
    }
}
