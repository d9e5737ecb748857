//! Prefix modifiers recognized on query units.
//!
//! A unit may start with an inclusion (`+`), exclusion (`-`), inverted
//! inclusion (`+-`) or wildcard (`*`) marker. The marker is removed before the
//! unit is looked up in the tag dictionary and put back when the winning
//! grouping is reassembled.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A prefix modifier attached to a query unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// No modifier.
    #[default]
    None,
    /// `+-`
    PlusMinus,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
}

impl Modifier {
    /// Modifiers in detection order.
    pub const DETECTION_ORDER: [Modifier; 4] = [
        Modifier::PlusMinus,
        Modifier::Plus,
        Modifier::Minus,
        Modifier::Star,
    ];

    /// The literal prefix for this modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::None => "",
            Modifier::PlusMinus => "+-",
            Modifier::Plus => "+",
            Modifier::Minus => "-",
            Modifier::Star => "*",
        }
    }

    /// Whether this is [`Modifier::None`].
    pub fn is_none(self) -> bool {
        self == Modifier::None
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How modifier prefixes are detected on a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierMode {
    /// Every prefix check runs in order against the progressively stripped
    /// text; each match strips again and replaces the recorded modifier.
    /// `"+-+tag"` strips to `"tag"` with modifier `+`.
    #[default]
    Sequential,
    /// Stop after the first matching prefix. `"+-+tag"` strips to `"+tag"`
    /// with modifier `+-`.
    FirstMatch,
}

/// Split a unit into its modifier and the text used for dictionary lookup.
pub fn strip_modifier(unit: &str, mode: ModifierMode) -> (Modifier, &str) {
    let mut modifier = Modifier::None;
    let mut rest = unit;

    for candidate in Modifier::DETECTION_ORDER {
        if let Some(stripped) = rest.strip_prefix(candidate.as_str()) {
            modifier = candidate;
            rest = stripped;
            if mode == ModifierMode::FirstMatch {
                break;
            }
        }
    }

    (modifier, rest)
}
