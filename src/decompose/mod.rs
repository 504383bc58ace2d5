//! # Name decomposition
//!
//! Segments compound identifiers (data-object names such as `TotVAr`) into
//! the model's known abbreviated terms, reporting unknown residue instead of
//! failing. A non-match is a valid, reportable outcome.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::debug;

/// One segment of a decomposed identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedTerm {
    /// The matched text, at its original position in the identifier
    pub text: SmolStr,
    /// `None` for residue the term table does not know
    pub description: Option<SmolStr>,
}

impl DecomposedTerm {
    pub fn description_or_unknown(&self) -> &str {
        self.description.as_deref().unwrap_or("unknown")
    }

    pub fn is_unknown(&self) -> bool {
        self.description.is_none()
    }
}

/// The decomposition of one identifier: segments in left-to-right input
/// order, plus whether the whole identifier was covered by known terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDecomposition {
    complete: bool,
    terms: Vec<DecomposedTerm>,
}

impl NameDecomposition {
    /// True when known terms cover the identifier without residue.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn terms(&self) -> &[DecomposedTerm] {
        &self.terms
    }
}

/// Erased positions in the working copy; never a valid identifier byte.
const FILLER: u8 = 0;

/// Greedy longest-match segmentation of identifiers into known abbreviated
/// terms.
///
/// Terms are tried longest-first; ties between equal-length terms follow the
/// table's insertion order, so segmentation is deterministic for a given
/// table. Results are memoized per identifier.
#[derive(Debug, Default)]
pub struct NameDecomposer {
    /// Term -> description, sorted by strictly decreasing term length
    terms: IndexMap<SmolStr, SmolStr>,
    cache: FxHashMap<SmolStr, NameDecomposition>,
}

impl NameDecomposer {
    /// Build a decomposer from a term table. The table is re-sorted by
    /// decreasing term length here; among equal lengths the given order is
    /// kept.
    pub fn new<I, S, D>(terms: I) -> Self
    where
        I: IntoIterator<Item = (S, D)>,
        S: AsRef<str>,
        D: AsRef<str>,
    {
        let mut terms: Vec<(SmolStr, SmolStr)> = terms
            .into_iter()
            .map(|(t, d)| (SmolStr::new(t.as_ref()), SmolStr::new(d.as_ref())))
            .collect();
        terms.sort_by_key(|(t, _)| std::cmp::Reverse(t.len()));
        Self {
            terms: terms.into_iter().collect(),
            cache: FxHashMap::default(),
        }
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Decompose one identifier. Memoized: repeated queries for the same
    /// identifier return the cached result.
    pub fn decompose(&mut self, name: &str) -> &NameDecomposition {
        if !self.cache.contains_key(name) {
            let result = self.segment(name);
            if !result.is_complete() {
                debug!("[DECOMPOSE] '{}' not fully covered by known terms", name);
            }
            self.cache.insert(SmolStr::new(name), result);
        }
        &self.cache[name]
    }

    /// One segmentation pass, pure.
    fn segment(&self, name: &str) -> NameDecomposition {
        let mut working = name.as_bytes().to_vec();
        let mut matched: Vec<(usize, DecomposedTerm)> = Vec::new();

        // one pass over the candidates, longest first; erase each match so
        // later (shorter) candidates cannot overlap it
        for (term, description) in &self.terms {
            if let Some(start) = find_span(&working, term.as_bytes()) {
                working[start..start + term.len()].fill(FILLER);
                matched.push((
                    start,
                    DecomposedTerm {
                        text: term.clone(),
                        description: Some(description.clone()),
                    },
                ));
            }
        }

        // residue: every maximal non-filler run is an unknown term
        let complete = working.iter().all(|&b| b == FILLER);
        if !complete {
            for (start, run) in residue_runs(&working) {
                matched.push((
                    start,
                    DecomposedTerm {
                        text: SmolStr::new(String::from_utf8_lossy(run)),
                        description: None,
                    },
                ));
            }
        }

        matched.sort_by_key(|(start, _)| *start);
        NameDecomposition {
            complete,
            terms: matched.into_iter().map(|(_, term)| term).collect(),
        }
    }
}

/// First occurrence of `term` in `working`, skipping erased spans.
fn find_span(working: &[u8], term: &[u8]) -> Option<usize> {
    if term.is_empty() || term.len() > working.len() {
        return None;
    }
    working.windows(term.len()).position(|w| w == term)
}

/// Maximal non-filler runs of the working copy, with their start offsets.
fn residue_runs(working: &[u8]) -> Vec<(usize, &[u8])> {
    let mut runs = Vec::new();
    let mut start = None;
    for (i, &b) in working.iter().enumerate() {
        match (b == FILLER, start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                runs.push((s, &working[s..i]));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s, &working[s..]));
    }
    runs
}
