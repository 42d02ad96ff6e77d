//! Archetype classification — a first-match-wins rule cascade over trait ratings.
//!
//! Rules live in `ARCHETYPE_RULES`, evaluated top to bottom. The first rule whose
//! thresholds are all met decides the label, even if a later rule also matches.
//! Nothing matching falls through to `Archetype::VersatileProspect`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Rating used for any trait the report does not mention.
pub const MISSING_RATING: i64 = 0;

/// Trait name → rating (conventionally 0 – 10). Open vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitRatings(BTreeMap<String, i64>);

impl TraitRatings {
    /// Rating for `name`, or `MISSING_RATING` when the trait is absent.
    pub fn rating(&self, name: &str) -> i64 {
        self.0.get(name).copied().unwrap_or(MISSING_RATING)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ratings in trait-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(name, rating)| (name.as_str(), *rating))
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for TraitRatings {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Stylistic player profile derived from trait ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    ThreeAndDWing,
    PlaymakingGuard,
    AthleticSlasher,
    PostSpecialist,
    TwoWayForward,
    DefensiveAnchor,
    VersatileProspect,
}

impl Archetype {
    pub fn label(self) -> &'static str {
        match self {
            Archetype::ThreeAndDWing => "3&D Wing",
            Archetype::PlaymakingGuard => "Playmaking Guard",
            Archetype::AthleticSlasher => "Athletic Slasher",
            Archetype::PostSpecialist => "Post Specialist",
            Archetype::TwoWayForward => "Two-Way Forward",
            Archetype::DefensiveAnchor => "Defensive Anchor",
            Archetype::VersatileProspect => "Versatile Prospect",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A minimum rating for one trait.
#[derive(Debug, Clone, Copy)]
pub struct Threshold {
    pub trait_name: &'static str,
    pub min: i64,
}

const fn at_least(trait_name: &'static str, min: i64) -> Threshold {
    Threshold { trait_name, min }
}

/// One row of the cascade: every threshold must hold.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeRule {
    pub archetype: Archetype,
    pub thresholds: &'static [Threshold],
}

impl ArchetypeRule {
    pub fn matches(&self, ratings: &TraitRatings) -> bool {
        self.thresholds
            .iter()
            .all(|t| ratings.rating(t.trait_name) >= t.min)
    }
}

/// Priority order matters: first match wins.
pub const ARCHETYPE_RULES: &[ArchetypeRule] = &[
    ArchetypeRule {
        archetype: Archetype::ThreeAndDWing,
        thresholds: &[
            at_least("Shooting", 7),
            at_least("Perimeter Defense", 7),
            at_least("Motor", 7),
        ],
    },
    ArchetypeRule {
        archetype: Archetype::PlaymakingGuard,
        thresholds: &[
            at_least("Playmaking", 8),
            at_least("Ball Handling", 7),
            at_least("Shooting", 6),
        ],
    },
    ArchetypeRule {
        archetype: Archetype::AthleticSlasher,
        thresholds: &[
            at_least("Finishing", 8),
            at_least("Athleticism", 8),
            at_least("Ball Handling", 6),
        ],
    },
    ArchetypeRule {
        archetype: Archetype::PostSpecialist,
        thresholds: &[
            at_least("Post Defense", 8),
            at_least("Rebounding", 8),
            at_least("Finishing", 7),
        ],
    },
    ArchetypeRule {
        archetype: Archetype::TwoWayForward,
        thresholds: &[
            at_least("Help Defense", 7),
            at_least("IQ", 7),
            at_least("Finishing", 7),
            at_least("Motor", 7),
        ],
    },
    ArchetypeRule {
        archetype: Archetype::DefensiveAnchor,
        thresholds: &[
            at_least("Post Defense", 8),
            at_least("Help Defense", 8),
            at_least("Rebounding", 8),
        ],
    },
];

/// Label used when no rule in `ARCHETYPE_RULES` matches.
pub const DEFAULT_ARCHETYPE: Archetype = Archetype::VersatileProspect;

/// Classifies a set of ratings. Total and pure: same ratings, same archetype.
pub fn determine_archetype(ratings: &TraitRatings) -> Archetype {
    ARCHETYPE_RULES
        .iter()
        .find(|rule| rule.matches(ratings))
        .map(|rule| rule.archetype)
        .unwrap_or(DEFAULT_ARCHETYPE)
}
