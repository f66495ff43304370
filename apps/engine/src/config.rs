use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::matching::scorer::{
    AbilityMatchStrategy, EmbeddingSimilarityStrategy, HybridStrategy, MatchStrategy,
};

/// Tuning constants of the ability matcher.
///
/// The strength boost and the coverage/missing thresholds are inherited
/// production values with no documented derivation; they are kept as named,
/// overridable fields rather than re-derived so behaviour stays comparable
/// across deployments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTuning {
    /// Multiplier applied to an already-strong match score.
    pub strength_boost: f64,
    /// Match score above which the boost kicks in and the recommendation is
    /// flagged as a strength match.
    pub strength_threshold: f64,
    /// Score assigned when a career has no positive requirement at all.
    pub neutral_score: f64,
    /// A requirement counts as covered when the user reaches this fraction
    /// of it.
    pub coverage_ratio: f64,
    /// Requirement level above which a dimension qualifies as a top ability.
    pub top_requirement_floor: f64,
    /// Requirement level above which a shortfall counts as a missing ability.
    pub missing_requirement_floor: f64,
    /// A heavy requirement is missing when the user is below this fraction
    /// of it.
    pub missing_ratio: f64,
}

impl Default for MatchTuning {
    fn default() -> Self {
        Self {
            strength_boost: 1.1,
            strength_threshold: 0.75,
            neutral_score: 0.5,
            coverage_ratio: 0.8,
            top_requirement_floor: 5.0,
            missing_requirement_floor: 7.0,
            missing_ratio: 0.7,
        }
    }
}

/// Which rank-score strategy the serving layer wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerBackend {
    Ability,
    Embedding,
    Hybrid,
}

impl ScorerBackend {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "ability" => Some(ScorerBackend::Ability),
            "embedding" => Some(ScorerBackend::Embedding),
            "hybrid" => Some(ScorerBackend::Hybrid),
            _ => None,
        }
    }
}

/// Engine configuration loaded from environment variables.
/// Every variable has a default; a present-but-unparsable one fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub scorer_backend: ScorerBackend,
    /// Weight of the embedding similarity in the hybrid score.
    pub hybrid_alpha: f64,
    pub tuning: MatchTuning,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = MatchTuning::default();
        let backend_label =
            std::env::var("SCORER_BACKEND").unwrap_or_else(|_| "ability".to_string());
        let scorer_backend = ScorerBackend::from_label(&backend_label).with_context(|| {
            format!("SCORER_BACKEND must be one of ability|embedding|hybrid, got '{backend_label}'")
        })?;

        Ok(Config {
            scorer_backend,
            hybrid_alpha: env_f64("HYBRID_ALPHA", 0.7)?,
            tuning: MatchTuning {
                strength_boost: env_f64("STRENGTH_BOOST", defaults.strength_boost)?,
                strength_threshold: env_f64("STRENGTH_THRESHOLD", defaults.strength_threshold)?,
                neutral_score: env_f64("NEUTRAL_SCORE", defaults.neutral_score)?,
                coverage_ratio: env_f64("COVERAGE_RATIO", defaults.coverage_ratio)?,
                top_requirement_floor: env_f64(
                    "TOP_REQUIREMENT_FLOOR",
                    defaults.top_requirement_floor,
                )?,
                missing_requirement_floor: env_f64(
                    "MISSING_REQUIREMENT_FLOOR",
                    defaults.missing_requirement_floor,
                )?,
                missing_ratio: env_f64("MISSING_RATIO", defaults.missing_ratio)?,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Constructs the configured strategy once, for the serving layer to
    /// hold and pass into each request context.
    pub fn build_strategy(&self) -> Arc<dyn MatchStrategy> {
        match self.scorer_backend {
            ScorerBackend::Ability => Arc::new(AbilityMatchStrategy::new(self.tuning.clone())),
            ScorerBackend::Embedding => Arc::new(EmbeddingSimilarityStrategy),
            ScorerBackend::Hybrid => Arc::new(HybridStrategy::new(self.hybrid_alpha)),
        }
    }
}

fn env_f64(key: &str, default: f64) -> Result<f64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("{key} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_matches_production_values() {
        let tuning = MatchTuning::default();
        assert_eq!(tuning.strength_boost, 1.1);
        assert_eq!(tuning.strength_threshold, 0.75);
        assert_eq!(tuning.neutral_score, 0.5);
        assert_eq!(tuning.coverage_ratio, 0.8);
        assert_eq!(tuning.top_requirement_floor, 5.0);
        assert_eq!(tuning.missing_requirement_floor, 7.0);
        assert_eq!(tuning.missing_ratio, 0.7);
    }

    #[test]
    fn test_backend_labels_parse() {
        assert_eq!(
            ScorerBackend::from_label("ability"),
            Some(ScorerBackend::Ability)
        );
        assert_eq!(
            ScorerBackend::from_label("embedding"),
            Some(ScorerBackend::Embedding)
        );
        assert_eq!(
            ScorerBackend::from_label("hybrid"),
            Some(ScorerBackend::Hybrid)
        );
        assert_eq!(ScorerBackend::from_label("random_forest"), None);
    }

    #[test]
    fn test_build_strategy_honours_backend() {
        let config = Config {
            scorer_backend: ScorerBackend::Hybrid,
            hybrid_alpha: 0.5,
            tuning: MatchTuning::default(),
            rust_log: "info".to_string(),
        };
        assert_eq!(config.build_strategy().backend(), "hybrid");
    }
}
