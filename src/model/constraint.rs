//! Constraints attached to classes and attributes.

use smol_str::SmolStr;
use tracing::warn;

use super::tokens;

/// A raw class constraint: the attribute names it covers plus free text.
///
/// Class constraints are the raw input to
/// [`crate::presence::PresenceConditionResolver`]; this type performs no
/// interpretation of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassConstraint {
    pub(super) name: SmolStr,
    pub(super) attribute_names: Vec<SmolStr>,
    pub(super) text: SmolStr,
}

impl ClassConstraint {
    pub fn new(
        name: impl AsRef<str>,
        attribute_names: impl IntoIterator<Item = impl AsRef<str>>,
        text: impl AsRef<str>,
    ) -> Self {
        Self {
            name: SmolStr::new(name.as_ref()),
            attribute_names: attribute_names
                .into_iter()
                .map(|n| SmolStr::new(n.as_ref()))
                .collect(),
            text: SmolStr::new(text.as_ref()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute_names(&self) -> &[SmolStr] {
        &self.attribute_names
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn covers(&self, attribute_name: &str) -> bool {
        self.attribute_names.iter().any(|n| n == attribute_name)
    }
}

/// Numeric bounds collected from attribute constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ValueBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValueBounds {
    /// Fold one raw attribute constraint into the bounds. Unknown constraint
    /// names and malformed numbers are data-quality anomalies: logged and
    /// skipped, never fatal.
    pub(super) fn apply(&mut self, owner: &str, name: &str, text: &str) {
        let parsed = match text.trim().parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "[MODEL] malformed numeric bound '{}' in constraint '{}' on '{}'",
                    text, name, owner
                );
                return;
            }
        };
        match name {
            tokens::MIN_VALUE_CONSTRAINT => self.min = Some(parsed),
            tokens::MAX_VALUE_CONSTRAINT => self.max = Some(parsed),
            _ => {
                warn!(
                    "[MODEL] unknown attribute constraint '{}' on '{}' - skipped",
                    name, owner
                );
            }
        }
    }
}
