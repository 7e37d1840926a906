use std::borrow::Cow;
use std::cell::RefCell;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::{EngineConfig, MarkerStyle, OutputMode};
use crate::constants::{has_inherent_vowel, strip_inherent_vowel, PLAIN_INHERENT_VOWEL};
use crate::registry::ScriptRegistry;
use crate::script::ScriptId;
use crate::table::{Entry, EntryKind, ScriptTable};

thread_local! {
    static CODEPOINTS: RefCell<Vec<char>> = RefCell::new(Vec::with_capacity(4096));
}

/// A run of output produced from input of a single script, or from
/// untransliterated text when `script` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub script: Option<ScriptId>,
    pub text: String,
}

impl Segment {
    pub fn new(script: Option<ScriptId>, text: impl Into<String>) -> Self {
        Segment {
            script,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output<'t> {
    Flat(Cow<'t, str>),
    Segmented(Vec<Segment>),
}

impl Output<'_> {
    /// The transliterated text, whatever the mode.
    pub fn into_string(self) -> String {
        match self {
            Output::Flat(text) => text.into_owned(),
            Output::Segmented(segments) => segments.into_iter().map(|s| s.text).collect(),
        }
    }
}

/// The one fragment a later code point may still rewrite: a consonant,
/// whose inherent vowel a sign can kill or whose sound a nukta can change.
#[derive(Debug, Clone, Copy)]
struct PendingConsonant {
    script: ScriptId,
    text: &'static str,
}

/// Per-call accumulator. Everything except the pending consonant is final.
struct ScanState {
    segments: Vec<Segment>,
    by_script: bool,
    marker_style: MarkerStyle,
    capacity: usize,
    pending: Option<PendingConsonant>,
}

impl ScanState {
    fn new(by_script: bool, marker_style: MarkerStyle, capacity: usize) -> Self {
        ScanState {
            segments: Vec::new(),
            by_script,
            marker_style,
            capacity,
            pending: None,
        }
    }

    /// Text of the open segment for `script`, opening a new one if needed.
    fn open(&mut self, script: Option<ScriptId>) -> &mut String {
        let tag = if self.by_script { script } else { None };
        let reuse = matches!(self.segments.last(), Some(last) if last.script == tag);
        if !reuse {
            let capacity = if self.by_script { 16 } else { self.capacity };
            self.segments.push(Segment::new(tag, String::with_capacity(capacity)));
        }
        let last = self.segments.len() - 1;
        &mut self.segments[last].text
    }

    fn flush_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            let style = self.marker_style;
            let out = self.open(Some(pending.script));
            match style {
                MarkerStyle::Plain if has_inherent_vowel(pending.text) => {
                    out.push_str(strip_inherent_vowel(pending.text));
                    out.push(PLAIN_INHERENT_VOWEL);
                }
                _ => out.push_str(pending.text),
            }
        }
    }

    fn push_char(&mut self, script: Option<ScriptId>, c: char) {
        self.flush_pending();
        self.open(script).push(c);
    }

    fn push_str(&mut self, script: ScriptId, s: &str) {
        if s.is_empty() {
            return;
        }
        self.flush_pending();
        self.open(Some(script)).push_str(s);
    }

    fn push_entry(&mut self, script: ScriptId, entry: &Entry) {
        if entry.kind == EntryKind::Consonant {
            self.flush_pending();
            self.pending = Some(PendingConsonant {
                script,
                text: entry.output,
            });
        } else {
            self.push_str(script, entry.output);
        }
    }

    /// Rewrites the immediately preceding fragment if it is a consonant of
    /// `script` and `rewrite` yields a replacement.
    fn replace_last<F>(&mut self, script: ScriptId, rewrite: F)
    where
        F: FnOnce(&'static str) -> Option<&'static str>,
    {
        if let Some(pending) = self.pending.as_mut().filter(|p| p.script == script) {
            if let Some(text) = rewrite(pending.text) {
                pending.text = text;
            }
        }
    }

    fn kill_inherent_vowel(&mut self, script: ScriptId) {
        self.replace_last(script, |text| {
            has_inherent_vowel(text).then(|| strip_inherent_vowel(text))
        });
    }

    fn apply_nukta(&mut self, table: &ScriptTable) {
        self.replace_last(table.id(), |text| table.nukta_substitution(text));
    }

    fn finish(mut self) -> Vec<Segment> {
        self.flush_pending();
        self.segments
    }
}

/// Transliterates Brahmic script text into ITRANS-style Latin text.
///
/// Holds no state between calls; a single instance can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'r> {
    registry: &'r ScriptRegistry,
}

impl Transliterator<'static> {
    /// Uses the built-in Devanagari, Kannada and Telugu tables.
    pub fn builtin() -> Self {
        Transliterator::new(ScriptRegistry::builtin())
    }
}

impl Default for Transliterator<'static> {
    fn default() -> Self {
        Transliterator::builtin()
    }
}

impl<'r> Transliterator<'r> {
    pub fn new(registry: &'r ScriptRegistry) -> Self {
        Transliterator { registry }
    }

    pub fn registry(&self) -> &'r ScriptRegistry {
        self.registry
    }

    /// Flat transliteration. Text with no enabled-script code point is
    /// returned borrowed and byte-identical.
    pub fn transliterate<'t>(&self, text: &'t str, config: &EngineConfig) -> Cow<'t, str> {
        if !self.registry.contains_script_text(text, config) {
            return Cow::Borrowed(text);
        }
        let text = self
            .scan(text, config, false)
            .pop()
            .map(|segment| segment.text)
            .unwrap_or_default();
        Cow::Owned(text)
    }

    /// Transliteration split into runs tagged by source script. Disabled
    /// scripts and foreign text are tagged `None`.
    pub fn transliterate_segments(&self, text: &str, config: &EngineConfig) -> Vec<Segment> {
        if text.is_empty() {
            return Vec::new();
        }
        if !self.registry.contains_script_text(text, config) {
            return vec![Segment::new(None, text)];
        }
        self.scan(text, config, true)
    }

    pub fn run<'t>(&self, text: &'t str, config: &EngineConfig, mode: OutputMode) -> Output<'t> {
        match mode {
            OutputMode::Flat => Output::Flat(self.transliterate(text, config)),
            OutputMode::Segmented => Output::Segmented(self.transliterate_segments(text, config)),
        }
    }

    /// Transliterates independent chunks in parallel.
    pub fn transliterate_batch<S>(&self, texts: &[S], config: &EngineConfig) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.transliterate(text.as_ref(), config).into_owned())
            .collect()
    }

    fn scan(&self, text: &str, config: &EngineConfig, by_script: bool) -> Vec<Segment> {
        CODEPOINTS.with(|buf| {
            let mut cps = buf.borrow_mut();
            cps.clear();
            cps.extend(text.chars());
            self.scan_codepoints(&cps, config, by_script, text.len())
        })
    }

    fn scan_codepoints(
        &self,
        cps: &[char],
        config: &EngineConfig,
        by_script: bool,
        capacity: usize,
    ) -> Vec<Segment> {
        let mut state = ScanState::new(by_script, config.marker_style(), capacity);
        let n = cps.len();
        let mut i = 0;

        while i < n {
            let c = cps[i];

            let Some(table) = self.registry.enabled_owner(c, config) else {
                state.push_char(None, c);
                i += 1;
                continue;
            };
            let script = table.id();

            // 1. Conjuncts, longest first
            if let Some((len, entry)) = table.longest_match(cps, i) {
                if len > 1 {
                    state.push_entry(script, entry);
                    i += len;
                    continue;
                }
            }

            // 2. Matra / virama, then nukta, then everything else
            if table.is_modifier(c) {
                match table.lookup(c) {
                    Some(entry) => {
                        state.kill_inherent_vowel(script);
                        state.push_entry(script, entry);
                    }
                    None => state.push_char(Some(script), c),
                }
            } else if table.is_nukta(c) {
                state.apply_nukta(table);
            } else {
                match table.lookup(c) {
                    Some(entry) => state.push_entry(script, entry),
                    None => state.push_char(Some(script), c),
                }
            }
            i += 1;
        }

        let segments = state.finish();
        trace!(chars = n, segments = segments.len(), "transliterated chunk");
        segments
    }
}
