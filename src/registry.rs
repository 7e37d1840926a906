use std::sync::OnceLock;

use tracing::debug;

use crate::config::EngineConfig;
use crate::script::ScriptId;
use crate::scripts::BUILTIN_SPECS;
use crate::table::{ScriptTable, TableError};

/// The known script tables, in classification priority order.
#[derive(Debug)]
pub struct ScriptRegistry {
    tables: Vec<ScriptTable>,
    lowest: char,
}

impl ScriptRegistry {
    pub fn new(tables: Vec<ScriptTable>) -> Result<Self, TableError> {
        for (i, table) in tables.iter().enumerate() {
            for other in &tables[..i] {
                if other.id() == table.id() {
                    return Err(TableError::DuplicateScript(table.id()));
                }
                if other.block().overlaps(&table.block()) {
                    return Err(TableError::OverlappingBlocks {
                        first: other.id(),
                        second: table.id(),
                    });
                }
            }
        }

        // Output must never contain script text, otherwise a second pass
        // would not be a no-op.
        for table in &tables {
            for entry in table.entries() {
                let owner = entry
                    .output
                    .chars()
                    .find_map(|c| tables.iter().find(|t| t.is_in_block(c)));
                if let Some(owner) = owner {
                    return Err(TableError::OutputInScriptBlock {
                        script: table.id(),
                        key: entry.key.to_string(),
                        owner: owner.id(),
                    });
                }
            }
        }

        let lowest = tables
            .iter()
            .map(|t| t.block().start)
            .min()
            .unwrap_or(char::MAX);

        debug!(
            scripts = tables.len(),
            entries = tables.iter().map(ScriptTable::len).sum::<usize>(),
            "script registry built"
        );

        Ok(ScriptRegistry { tables, lowest })
    }

    /// Builds the registry from the built-in Devanagari, Kannada and Telugu tables.
    pub fn with_builtin_scripts() -> Result<Self, TableError> {
        let tables = BUILTIN_SPECS
            .iter()
            .map(ScriptTable::new)
            .collect::<Result<Vec<_>, _>>()?;
        ScriptRegistry::new(tables)
    }

    /// Shared built-in registry, built on first use.
    pub fn builtin() -> &'static ScriptRegistry {
        static INSTANCE: OnceLock<ScriptRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            ScriptRegistry::with_builtin_scripts().expect("built-in script tables must be valid")
        })
    }

    /// The table whose block contains `c`; first match wins.
    #[inline]
    pub fn owner(&self, c: char) -> Option<&ScriptTable> {
        if c < self.lowest {
            return None;
        }
        self.tables.iter().find(|t| t.is_in_block(c))
    }

    /// Like [`owner`](Self::owner), but only for scripts enabled in `config`.
    #[inline]
    pub fn enabled_owner(&self, c: char, config: &EngineConfig) -> Option<&ScriptTable> {
        self.owner(c).filter(|t| config.is_enabled(t.id()))
    }

    pub fn get(&self, id: ScriptId) -> Option<&ScriptTable> {
        self.tables.iter().find(|t| t.id() == id)
    }

    pub fn tables(&self) -> &[ScriptTable] {
        &self.tables
    }

    /// True if `text` holds at least one code point of an enabled script.
    pub fn contains_script_text(&self, text: &str, config: &EngineConfig) -> bool {
        !config.all_disabled() && text.chars().any(|c| self.enabled_owner(c, config).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CodeRange, Entry, TableSpec};

    #[test]
    fn builtin_owner_lookup() {
        let registry = ScriptRegistry::builtin();
        assert_eq!(registry.owner('\u{0915}').map(|t| t.id()), Some(ScriptId::Devanagari));
        assert_eq!(registry.owner('\u{0C95}').map(|t| t.id()), Some(ScriptId::Kannada));
        assert_eq!(registry.owner('\u{0C15}').map(|t| t.id()), Some(ScriptId::Telugu));
        assert!(registry.owner('k').is_none());
        assert!(registry.owner('\u{0B95}').is_none());
        assert_eq!(registry.tables().len(), 3);
    }

    #[test]
    fn enabled_owner_respects_config() {
        let registry = ScriptRegistry::builtin();
        let mut config = EngineConfig::default();
        config.set_enabled(ScriptId::Kannada, false);
        assert!(registry.enabled_owner('\u{0C95}', &config).is_none());
        assert!(registry.enabled_owner('\u{0915}', &config).is_some());
        assert!(!registry.contains_script_text("\u{0C95}\u{0CBF} abc", &config));
        assert!(registry.contains_script_text("abc \u{0915}", &config));
    }

    #[test]
    fn error_duplicate_script() {
        let a = ScriptTable::new(&BUILTIN_SPECS[0]).unwrap();
        let b = ScriptTable::new(&BUILTIN_SPECS[0]).unwrap();
        let err = ScriptRegistry::new(vec![a, b]).unwrap_err();
        assert_eq!(err, TableError::DuplicateScript(ScriptId::Devanagari));
    }

    #[test]
    fn error_overlapping_blocks() {
        const ENTRIES: &[Entry] = &[Entry::vowel("\u{0C05}", "a")];
        // A Kannada table that claims the Telugu block as well.
        let wide = TableSpec {
            id: ScriptId::Kannada,
            block: CodeRange::new('\u{0C00}', '\u{0CFF}'),
            modifiers: &[],
            nukta: None,
            entries: ENTRIES,
            nukta_substitutions: &[],
        };
        let telugu = ScriptTable::new(&BUILTIN_SPECS[2]).unwrap();
        let wide = ScriptTable::new(&wide).unwrap();
        let err = ScriptRegistry::new(vec![telugu, wide]).unwrap_err();
        assert_eq!(
            err,
            TableError::OverlappingBlocks {
                first: ScriptId::Telugu,
                second: ScriptId::Kannada,
            }
        );
    }

    #[test]
    fn error_output_in_script_block() {
        const ENTRIES: &[Entry] = &[Entry::vowel("\u{0C85}", "\u{0905}")];
        let bad = TableSpec {
            id: ScriptId::Kannada,
            block: CodeRange::new('\u{0C80}', '\u{0CFF}'),
            modifiers: &[],
            nukta: None,
            entries: ENTRIES,
            nukta_substitutions: &[],
        };
        let devanagari = ScriptTable::new(&BUILTIN_SPECS[0]).unwrap();
        let bad = ScriptTable::new(&bad).unwrap();
        let err = ScriptRegistry::new(vec![devanagari, bad]).unwrap_err();
        assert!(matches!(
            err,
            TableError::OutputInScriptBlock {
                script: ScriptId::Kannada,
                owner: ScriptId::Devanagari,
                ..
            }
        ));
    }
}
