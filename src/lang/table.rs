//! lang/table.rs – **Ordered Latin ↔ script mapping tables**
//! * One entry = one `(latin, script)` pair, both sides 1+ characters
//! * Forward = Latin → script, Reverse = script → Latin
//! * First declared match wins; authors list digraphs before their prefixes
//! * Reverse overrides are consulted before table entries in Reverse mode
//! * Zero-copy when the input contains nothing the table can rewrite
//!
//! Round trips are **lossy by construction**: several spellings may share one
//! counterpart (Russian `c` and `ts` both give `ц`), so `reverse(forward(x))`
//! only reproduces `x` when `x` never used a collapsed spelling.
use crate::unicode::compose_nfc;
use smallvec::SmallVec;
use std::{borrow::Cow, collections::HashMap};

/// Which way a table is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Latin → script.
    #[default]
    Forward,
    /// Script → Latin.
    Reverse,
}

impl Direction {
    #[inline(always)]
    pub const fn from_reversed(reversed: bool) -> Self {
        if reversed {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }

    #[inline(always)]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Reverse)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MappingEntry {
    pub latin: String,
    pub script: String,
}

/// Literal substitution applied before the main scan, in one direction only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreProcessRule {
    pub direction: Direction,
    pub pattern: String,
    pub replacement: String,
}

/// Compiled rules for a single direction.
///
/// `by_first` buckets rule indices by their first character, in declaration
/// order.
#[derive(Debug, Clone, Default)]
struct DirectionIndex {
    rules: Vec<(String, String)>,
    by_first: HashMap<char, SmallVec<[usize; 4]>>,
}

impl DirectionIndex {
    fn build(rules: Vec<(String, String)>) -> Self {
        let mut by_first: HashMap<char, SmallVec<[usize; 4]>> = HashMap::new();
        for (i, (from, _)) in rules.iter().enumerate() {
            if let Some(c) = from.chars().next() {
                by_first.entry(c).or_default().push(i);
            }
        }
        Self { rules, by_first }
    }

    #[inline(always)]
    fn touches(&self, text: &str) -> bool {
        text.chars().any(|c| self.by_first.contains_key(&c))
    }

    /// Returns `(bytes consumed, replacement)` for the first declared rule
    /// matching the head of `rest`.
    #[inline]
    fn first_match(&self, head: char, rest: &str) -> Option<(usize, &str)> {
        self.by_first
            .get(&head)?
            .iter()
            .map(|&i| &self.rules[i])
            .find(|(from, _)| rest.starts_with(from.as_str()))
            .map(|(from, to)| (from.len(), to.as_str()))
    }

    fn exact(&self, unit: &str) -> Option<&str> {
        let head = unit.chars().next()?;
        self.by_first
            .get(&head)?
            .iter()
            .map(|&i| &self.rules[i])
            .find(|(from, _)| from == unit)
            .map(|(_, to)| to.as_str())
    }

    fn scan<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.touches(&text) {
            return text;
        }

        let mut out = String::with_capacity(text.len() * 2);
        let mut rest: &str = &text;
        while let Some(c) = rest.chars().next() {
            match self.first_match(c, rest) {
                Some((consumed, to)) => {
                    out.push_str(to);
                    rest = &rest[consumed..];
                }
                None => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
        Cow::Owned(out)
    }
}

/// Immutable, validated mapping data for one language pack.
///
/// Built through [`LanguagePackBuilder`](crate::lang::LanguagePackBuilder),
/// which rejects malformed input before a table can exist.
#[derive(Debug, Clone)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
    pre_rules: Vec<PreProcessRule>,
    reverse_overrides: Vec<MappingEntry>,
    compose: bool,
    forward: DirectionIndex,
    reverse: DirectionIndex,
    alphabet: Vec<char>,
}

impl MappingTable {
    pub(crate) fn compile(
        entries: Vec<MappingEntry>,
        pre_rules: Vec<PreProcessRule>,
        reverse_overrides: Vec<MappingEntry>,
        compose: bool,
    ) -> Self {
        let forward = DirectionIndex::build(
            entries
                .iter()
                .map(|e| (e.latin.clone(), e.script.clone()))
                .collect(),
        );
        let reverse = DirectionIndex::build(
            reverse_overrides
                .iter()
                .chain(entries.iter())
                .map(|e| (e.script.clone(), e.latin.clone()))
                .collect(),
        );

        let mut alphabet: Vec<char> = entries
            .iter()
            .chain(reverse_overrides.iter())
            .flat_map(|e| e.script.chars())
            .collect();
        alphabet.sort_unstable();
        alphabet.dedup();

        Self {
            entries,
            pre_rules,
            reverse_overrides,
            compose,
            forward,
            reverse,
            alphabet,
        }
    }

    #[inline(always)]
    fn index(&self, direction: Direction) -> &DirectionIndex {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        }
    }

    #[inline(always)]
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    #[inline(always)]
    pub fn pre_rules(&self) -> &[PreProcessRule] {
        &self.pre_rules
    }

    #[inline(always)]
    pub fn reverse_overrides(&self) -> &[MappingEntry] {
        &self.reverse_overrides
    }

    #[inline(always)]
    pub fn composes(&self) -> bool {
        self.compose
    }

    /// Sorted, distinct characters used on the script side.
    #[inline(always)]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Exact lookup of a single unit; `None` when the table has no such unit.
    pub fn lookup(&self, unit: &str, direction: Direction) -> Option<&str> {
        self.index(direction).exact(unit)
    }

    /// Composition → pre-process rules → first-match scan.
    pub fn translate<'a>(&self, text: &'a str, direction: Direction) -> Cow<'a, str> {
        let mut text = Cow::Borrowed(text);
        if self.compose {
            text = compose_nfc(text);
        }
        for rule in self.pre_rules.iter().filter(|r| r.direction == direction) {
            if text.contains(rule.pattern.as_str()) {
                text = Cow::Owned(text.replace(rule.pattern.as_str(), &rule.replacement));
            }
        }
        self.index(direction).scan(text)
    }
}
