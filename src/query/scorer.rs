//! Scoring candidate groupings against a tag dictionary.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

use crate::dictionary::TagLookup;
use crate::query::modifier::{Modifier, ModifierMode, strip_modifier};
use crate::query::segmenter::Grouping;

/// A unit after modifier stripping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    /// Modifier found at the front of the unit.
    pub modifier: Modifier,
    /// Unit text with the modifier removed; this is the dictionary lookup key.
    pub text: String,
}

impl Unit {
    /// Strip the modifier from a raw unit.
    pub fn parse(raw: &str, mode: ModifierMode) -> Self {
        let (modifier, text) = strip_modifier(raw, mode);
        Unit {
            modifier,
            text: text.to_string(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.modifier, self.text)
    }
}

/// A grouping together with its dictionary match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    /// Units in query order.
    pub units: Vec<Unit>,
    /// Token index range covered by each unit.
    pub spans: Vec<Range<usize>>,
    /// Number of key matches plus alias matches.
    pub score: usize,
}

impl ScoredCandidate {
    /// Reassemble the candidate into a query string, modifiers restored.
    pub fn render(&self) -> String {
        self.units
            .iter()
            .map(Unit::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Scores groupings by counting exact key and alias matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchCountScorer {
    mode: ModifierMode,
}

impl MatchCountScorer {
    /// Create a scorer using the given modifier detection mode.
    pub fn new(mode: ModifierMode) -> Self {
        MatchCountScorer { mode }
    }

    /// Score a single unit: one point for a key match plus one per entry
    /// listing the unit as an alias.
    pub fn score_unit<L: TagLookup + ?Sized>(&self, unit: &Unit, lookup: &L) -> usize {
        usize::from(lookup.contains_key(&unit.text)) + lookup.alias_match_count(&unit.text)
    }

    /// Strip modifiers from every unit of `grouping` and score the result.
    pub fn score<L: TagLookup + ?Sized>(&self, grouping: Grouping, lookup: &L) -> ScoredCandidate {
        let spans = grouping.spans().to_vec();
        let units: Vec<Unit> = grouping
            .into_units()
            .iter()
            .map(|raw| Unit::parse(raw, self.mode))
            .collect();
        let score = units.iter().map(|unit| self.score_unit(unit, lookup)).sum();

        ScoredCandidate {
            units,
            spans,
            score,
        }
    }
}

/// Index of the first candidate with the highest score, if that score is
/// positive.
pub fn select_best(candidates: &[ScoredCandidate]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        match best {
            Some((_, score)) if candidate.score <= score => {}
            _ => best = Some((index, candidate.score)),
        }
    }

    best.filter(|&(_, score)| score > 0).map(|(index, _)| index)
}
