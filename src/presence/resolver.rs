//! Resolution of raw class constraints into presence conditions.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{debug, warn};

use crate::base::{AttributeId, ClassId, Multiplicity};
use crate::model::ModelGraph;
use crate::model::tokens;

use super::condition::PresenceCondition;

/// Resolves a constraint's raw name against the known presence-condition
/// literals of the model.
///
/// The literal table preserves model declaration order; tie-breaks between
/// equally plausible candidates pick the first declared one. Resolution never
/// fails: the worst case is a warned fallback carrying the raw name.
#[derive(Debug, Default)]
pub struct PresenceConditionResolver {
    literals: IndexMap<SmolStr, Option<AttributeId>>,
}

impl PresenceConditionResolver {
    /// Build the literal table from the designated presence-condition
    /// enumeration of the model.
    pub fn from_enumeration(graph: &ModelGraph, enumeration: ClassId) -> Self {
        let class = graph.class(enumeration);
        if !class.kind().is_enumerated() {
            warn!(
                "[PRESENCE] literal source '{}' is not an enumerated class ({})",
                class.name(),
                class.kind().label()
            );
        }
        let literals = class
            .attributes()
            .iter()
            .map(|&id| (SmolStr::new(graph.attribute(id).name()), Some(id)))
            .collect();
        Self { literals }
    }

    /// Build the literal table from bare names; literal back-references stay
    /// empty.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            literals: names
                .into_iter()
                .map(|n| (SmolStr::new(n.as_ref()), None))
                .collect(),
        }
    }

    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }

    /// Resolve one constraint. `raw_name` is the constraint's name as
    /// authored; `text` is its free-text condition, carried through verbatim.
    pub fn resolve(&self, raw_name: &str, text: &str) -> PresenceCondition {
        let raw = raw_name.trim();

        let parenthesized = raw.contains('(') && raw.ends_with(')');
        if !parenthesized {
            if let Some(&literal) = self.literals.get(raw) {
                return PresenceCondition::bound(raw, "", text, literal);
            }
            return self.unmatched(raw, text);
        }

        let Some(open) = raw.find('(') else {
            return self.unmatched(raw, text);
        };
        let stem = &raw[..open];
        let args = &raw[open + 1..raw.len() - 1];

        // a constraint naming a literal verbatim, placeholder included, is a
        // likely authoring mistake but still unambiguous
        if let Some(&literal) = self.literals.get(raw) {
            warn!(
                "[PRESENCE] constraint '{}' repeats the literal's placeholder verbatim",
                raw
            );
            return PresenceCondition::bound(stem, args, text, literal);
        }

        self.resolve_candidates(raw, stem, args, text)
    }

    /// Pick among the parenthesized literals sharing the stem.
    fn resolve_candidates(
        &self,
        raw: &str,
        stem: &str,
        args: &str,
        text: &str,
    ) -> PresenceCondition {
        let candidates: Vec<(&str, Option<AttributeId>)> = self
            .literals
            .iter()
            .filter_map(|(name, &literal)| {
                name.strip_prefix(stem)
                    .and_then(|rest| rest.strip_prefix('('))
                    .and_then(|rest| rest.strip_suffix(')'))
                    .map(|placeholder| (placeholder, literal))
            })
            .collect();
        if candidates.is_empty() {
            return self.unmatched(raw, text);
        }

        // `(sibling)` literals name another attribute; they only apply when
        // the args text cannot be a numeric bound
        if !is_valid_bound(args) {
            if let Some(&(_, literal)) = candidates
                .iter()
                .find(|(placeholder, _)| *placeholder == tokens::SIBLING_PLACEHOLDER)
            {
                return PresenceCondition::bound(stem, args, text, literal);
            }
        }

        let remaining: Vec<&(&str, Option<AttributeId>)> = candidates
            .iter()
            .filter(|(placeholder, _)| *placeholder != tokens::SIBLING_PLACEHOLDER)
            .collect();
        match remaining.first() {
            Some(&&(placeholder, literal)) => {
                if remaining.len() > 1 {
                    warn!(
                        "[PRESENCE] constraint '{}' matches {} literals for stem '{}' - using '{}({})'",
                        raw,
                        remaining.len(),
                        stem,
                        stem,
                        placeholder
                    );
                }
                PresenceCondition::bound(stem, args, text, literal)
            }
            None => self.unmatched(raw, text),
        }
    }

    fn unmatched(&self, raw: &str, text: &str) -> PresenceCondition {
        warn!(
            "[PRESENCE] constraint '{}' matches no known presence-condition literal",
            raw
        );
        PresenceCondition::fallback(raw, text)
    }
}

/// A string is a valid bound when it is a comma-separated pair or parses as
/// an integer.
fn is_valid_bound(args: &str) -> bool {
    args.contains(',') || args.trim().parse::<i64>().is_ok()
}

/// Per-attribute presence conditions, memoized on first access.
///
/// Attributes covered by class constraints get the resolved conditions; all
/// others fall back to plain optionality derived from their multiplicity.
#[derive(Debug)]
pub struct PresenceIndex<'g> {
    graph: &'g ModelGraph,
    resolver: PresenceConditionResolver,
    cache: FxHashMap<AttributeId, Vec<PresenceCondition>>,
}

impl<'g> PresenceIndex<'g> {
    pub fn new(graph: &'g ModelGraph, resolver: PresenceConditionResolver) -> Self {
        Self {
            graph,
            resolver,
            cache: FxHashMap::default(),
        }
    }

    pub fn resolver(&self) -> &PresenceConditionResolver {
        &self.resolver
    }

    /// The presence conditions governing one attribute. Computed on first
    /// access, cached afterwards.
    pub fn conditions(&mut self, attribute: AttributeId) -> &[PresenceCondition] {
        if !self.cache.contains_key(&attribute) {
            let computed = self.compute(attribute);
            self.cache.insert(attribute, computed);
        }
        &self.cache[&attribute]
    }

    fn compute(&self, attribute: AttributeId) -> Vec<PresenceCondition> {
        let attr = self.graph.attribute(attribute);
        let class = self.graph.class(attr.owner());
        let resolved: Vec<PresenceCondition> = class
            .constraints()
            .iter()
            .filter(|c| c.covers(attr.name()))
            .map(|c| self.resolver.resolve(c.name(), c.text()))
            .collect();
        if !resolved.is_empty() {
            debug!(
                "[PRESENCE] '{}.{}' -> {} condition(s)",
                class.name(),
                attr.name(),
                resolved.len()
            );
            return resolved;
        }
        vec![optionality(attr.multiplicity())]
    }
}

/// Plain optionality for attributes without presence constraints.
fn optionality(multiplicity: Multiplicity) -> PresenceCondition {
    if multiplicity.is_optional() {
        PresenceCondition::OPTIONAL
    } else {
        PresenceCondition::MANDATORY
    }
}
