//! Ability taxonomy — the fixed 15-axis profile space shared by user profiles
//! and career requirement vectors.
//!
//! Every vector in the system carries exactly [`DIMENSION_COUNT`] components,
//! each clipped to the `[0, 10]` scale. The fixed-size array type makes the
//! dimensionality invariant structural: once an [`AbilityVector`] exists it
//! cannot have the wrong length, so the runtime check lives at the catalog
//! and extraction boundaries where raw data enters.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Number of ability axes. Fixed at catalog-build time.
pub const DIMENSION_COUNT: usize = 15;

/// Minimum and maximum value of a single ability component.
pub const ABILITY_MIN: f64 = 0.0;
pub const ABILITY_MAX: f64 = 10.0;

/// One named axis of the ability taxonomy, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityDimension {
    LogicalThinking,
    Mathematical,
    Creativity,
    Communication,
    Leadership,
    Management,
    Technical,
    AttentionToDetail,
    Research,
    Interpersonal,
    Resilience,
    Learning,
    DomainKnowledge,
    HandsOn,
    BusinessAcumen,
}

impl AbilityDimension {
    /// All dimensions in canonical (vector index) order.
    pub const ALL: [AbilityDimension; DIMENSION_COUNT] = [
        AbilityDimension::LogicalThinking,
        AbilityDimension::Mathematical,
        AbilityDimension::Creativity,
        AbilityDimension::Communication,
        AbilityDimension::Leadership,
        AbilityDimension::Management,
        AbilityDimension::Technical,
        AbilityDimension::AttentionToDetail,
        AbilityDimension::Research,
        AbilityDimension::Interpersonal,
        AbilityDimension::Resilience,
        AbilityDimension::Learning,
        AbilityDimension::DomainKnowledge,
        AbilityDimension::HandsOn,
        AbilityDimension::BusinessAcumen,
    ];

    /// Position of this dimension in every ability vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name, as shown in recommendation explanations.
    pub fn name(self) -> &'static str {
        match self {
            AbilityDimension::LogicalThinking => "Logical Thinking",
            AbilityDimension::Mathematical => "Mathematical",
            AbilityDimension::Creativity => "Creativity",
            AbilityDimension::Communication => "Communication",
            AbilityDimension::Leadership => "Leadership",
            AbilityDimension::Management => "Management",
            AbilityDimension::Technical => "Technical",
            AbilityDimension::AttentionToDetail => "Attention to Detail",
            AbilityDimension::Research => "Research",
            AbilityDimension::Interpersonal => "Interpersonal",
            AbilityDimension::Resilience => "Resilience",
            AbilityDimension::Learning => "Learning",
            AbilityDimension::DomainKnowledge => "Domain Knowledge",
            AbilityDimension::HandsOn => "Hands-on",
            AbilityDimension::BusinessAcumen => "Business Acumen",
        }
    }
}

/// Immutable ability profile over all [`DIMENSION_COUNT`] axes.
///
/// Represents either a user's inferred abilities or a career's requirements.
/// Components are clipped to `[0, 10]` on construction and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityVector([f64; DIMENSION_COUNT]);

impl AbilityVector {
    /// Builds a vector from exactly [`DIMENSION_COUNT`] components,
    /// clipping each into `[0, 10]`. Non-finite components become 0.0.
    pub fn new(components: [f64; DIMENSION_COUNT]) -> Self {
        Self(components.map(clip))
    }

    /// Builds a vector from a runtime-sized slice, as handed over by the
    /// catalog import. Wrong lengths and non-finite contents are rejected;
    /// in-range clipping is applied as in [`AbilityVector::new`].
    pub fn from_components(components: &[f64]) -> Result<Self, EngineError> {
        if components.len() != DIMENSION_COUNT {
            return Err(EngineError::DimensionMismatch {
                got: components.len(),
            });
        }
        if components.iter().any(|c| !c.is_finite()) {
            return Err(EngineError::InvalidComponent);
        }
        let mut values = [0.0; DIMENSION_COUNT];
        for (slot, component) in values.iter_mut().zip(components) {
            *slot = clip(*component);
        }
        Ok(Self(values))
    }

    /// Uniform neutral profile: 5.0 in every dimension.
    ///
    /// Returned when extraction sees no usable answers, so that missing data
    /// scores as "average" rather than as genuine zero ability.
    pub fn neutral() -> Self {
        Self([5.0; DIMENSION_COUNT])
    }

    /// Value at the given dimension.
    pub fn get(&self, dimension: AbilityDimension) -> f64 {
        self.0[dimension.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// True when every component is exactly zero. All-zero requirement
    /// vectors mark careers the import job never profiled; they are skipped
    /// by the recommender rather than scored.
    pub fn is_all_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0.0)
    }

    /// Cosine similarity with another vector, in `[-1, 1]`.
    /// Returns 0.0 when either vector has zero magnitude.
    pub fn cosine_similarity(&self, other: &AbilityVector) -> f64 {
        let dot: f64 = self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum();
        let norm_a: f64 = self.0.iter().map(|a| a * a).sum::<f64>().sqrt();
        let norm_b: f64 = other.0.iter().map(|b| b * b).sum::<f64>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot / (norm_a * norm_b)
    }
}

fn clip(component: f64) -> f64 {
    if !component.is_finite() {
        return 0.0;
    }
    component.clamp(ABILITY_MIN, ABILITY_MAX)
}
