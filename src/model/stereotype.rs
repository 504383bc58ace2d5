//! Stereotype token sets.

use indexmap::IndexSet;
use smol_str::SmolStr;

use super::tokens;

/// The set of free-text stereotype tokens attached to a modeled entity.
///
/// Order-preserving: iteration yields tokens in the order the modeling tool
/// listed them. Comparison is exact; the ingestion step is expected to have
/// lower-cased tokens already.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stereotypes {
    tokens: IndexSet<SmolStr>,
}

impl Stereotypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens.into_iter().map(|t| SmolStr::new(t.as_ref())).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(SmolStr::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when at least one token is a domain token, i.e. not one of the
    /// documentation-status tokens (informative, deprecated, admin,
    /// statistics).
    pub fn has_domain_token(&self) -> bool {
        self.iter().any(|t| !tokens::NON_DOMAIN_TOKENS.contains(&t))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Stereotypes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}
