//! Normalized presence conditions.

use smol_str::SmolStr;

use crate::base::AttributeId;
use crate::model::tokens;

/// A normalized rule describing when an attribute or data object must be
/// present: a stem, optional arguments, descriptive text, and an optional
/// back-reference to the enumeration literal defining the condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceCondition {
    stem: SmolStr,
    /// Empty when the condition takes no arguments
    args: SmolStr,
    text: SmolStr,
    literal: Option<AttributeId>,
}

impl PresenceCondition {
    /// Unconditionally present.
    pub const MANDATORY: PresenceCondition = PresenceCondition {
        stem: SmolStr::new_inline("M"),
        args: SmolStr::new_inline(""),
        text: SmolStr::new_inline("shall be present"),
        literal: None,
    };

    /// Freely omittable.
    pub const OPTIONAL: PresenceCondition = PresenceCondition {
        stem: SmolStr::new_inline("O"),
        args: SmolStr::new_inline(""),
        text: SmolStr::new_inline("may be present"),
        literal: None,
    };

    /// Not applicable in the given context.
    pub const NOT_APPLICABLE: PresenceCondition = PresenceCondition {
        stem: SmolStr::new_inline("na"),
        args: SmolStr::new_inline(""),
        text: SmolStr::new_inline("not applicable"),
        literal: None,
    };

    /// Must be absent.
    pub const FORBIDDEN: PresenceCondition = PresenceCondition {
        stem: SmolStr::new_inline("F"),
        args: SmolStr::new_inline(""),
        text: SmolStr::new_inline("shall not be present"),
        literal: None,
    };

    /// A condition bound to a known literal.
    pub fn bound(
        stem: &str,
        args: &str,
        text: &str,
        literal: Option<AttributeId>,
    ) -> Self {
        Self {
            stem: SmolStr::new(stem),
            args: SmolStr::new(args),
            text: SmolStr::new(text),
            literal,
        }
    }

    /// The fallback for a constraint matching no known literal: the full raw
    /// name becomes the stem, with no args and no literal reference.
    pub fn fallback(raw_name: &str, text: &str) -> Self {
        Self::bound(raw_name, "", text, None)
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn args(&self) -> Option<&str> {
        if self.args.is_empty() { None } else { Some(&self.args) }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The enumeration literal defining this condition, when one exists.
    pub fn literal(&self) -> Option<AttributeId> {
        self.literal
    }

    /// `stem(args)`, or just the stem when there are no args.
    pub fn stem_and_args(&self) -> String {
        match self.args() {
            Some(args) => format!("{}({})", self.stem, args),
            None => self.stem.to_string(),
        }
    }

    /// True when the stem marks a free-form condition identifier argument,
    /// which no machine processing can interpret further.
    pub fn is_with_cond_id(&self) -> bool {
        self.stem.ends_with(tokens::COND_ID_SUFFIX)
    }
}
