//! Rank-score strategies — pluggable backends that turn a user/career pair
//! into the score recommendations are ranked by.
//!
//! The serving layer constructs exactly one strategy at startup (see
//! [`Config::build_strategy`](crate::config::Config::build_strategy)) and
//! passes it into each request context. There is no lazy global selection
//! and no silent fallback between backends: a strategy that cannot score a
//! career says so by returning `None`, and that career is skipped.

use crate::abilities::AbilityVector;
use crate::catalog::Career;
use crate::config::MatchTuning;
use crate::matching::ability::AbilityMatch;

/// A user's extracted profile, as seen by the strategies.
///
/// The embedding is optional: it is supplied by an external embedder
/// collaborator when the serving layer runs an embedding-aware backend, and
/// absent otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub abilities: AbilityVector,
    pub embedding: Option<Vec<f32>>,
}

impl UserProfile {
    pub fn from_abilities(abilities: AbilityVector) -> Self {
        Self {
            abilities,
            embedding: None,
        }
    }
}

/// Rank-score backend. Implementations must be `Send + Sync` so one strategy
/// instance can serve concurrent recommendation calls.
///
/// `rank_score` returns a value in `[0, 1]`, or `None` when this strategy
/// cannot score the career (e.g. no cached embedding); the caller skips such
/// careers rather than scoring them as zero.
pub trait MatchStrategy: Send + Sync {
    fn rank_score(
        &self,
        user: &UserProfile,
        career: &Career,
        ability: &AbilityMatch,
    ) -> Option<f64>;

    /// Short backend label, surfaced in logs for transparency.
    fn backend(&self) -> &'static str;
}

/// Default backend: the pure ability-vector match, with the strength boost.
///
/// A match that is already strong (above `strength_threshold`) is inflated
/// by `strength_boost` and capped at 1.0. Inherited production behaviour;
/// see [`MatchTuning`].
pub struct AbilityMatchStrategy {
    tuning: MatchTuning,
}

impl AbilityMatchStrategy {
    pub fn new(tuning: MatchTuning) -> Self {
        Self { tuning }
    }

    /// Whether a raw ability score qualifies as a strength match.
    pub fn is_strength(&self, score: f64) -> bool {
        score > self.tuning.strength_threshold
    }
}

impl MatchStrategy for AbilityMatchStrategy {
    fn rank_score(
        &self,
        _user: &UserProfile,
        _career: &Career,
        ability: &AbilityMatch,
    ) -> Option<f64> {
        let score = if self.is_strength(ability.score) {
            (ability.score * self.tuning.strength_boost).min(1.0)
        } else {
            ability.score
        };
        Some(score)
    }

    fn backend(&self) -> &'static str {
        "ability"
    }
}

/// Pure semantic backend: cosine similarity between the user's embedding and
/// the career's cached embedding, clamped to `[0, 1]`.
///
/// Careers without a cached embedding are skipped; the offline embedding job
/// fills them in over time.
pub struct EmbeddingSimilarityStrategy;

impl MatchStrategy for EmbeddingSimilarityStrategy {
    fn rank_score(
        &self,
        user: &UserProfile,
        career: &Career,
        _ability: &AbilityMatch,
    ) -> Option<f64> {
        let user_emb = user.embedding.as_deref()?;
        let career_emb = career.embedding.as_deref()?;
        let similarity = cosine(user_emb, career_emb)?;
        Some(similarity.clamp(0.0, 1.0))
    }

    fn backend(&self) -> &'static str {
        "embedding"
    }
}

/// Weighted blend of embedding similarity and ability-vector cosine.
///
/// `alpha` is the embedding weight: 0.7 means 70% semantic, 30% numeric.
pub struct HybridStrategy {
    alpha: f64,
}

impl HybridStrategy {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

impl MatchStrategy for HybridStrategy {
    fn rank_score(
        &self,
        user: &UserProfile,
        career: &Career,
        _ability: &AbilityMatch,
    ) -> Option<f64> {
        let user_emb = user.embedding.as_deref()?;
        let career_emb = career.embedding.as_deref()?;
        let emb_similarity = cosine(user_emb, career_emb)?.clamp(0.0, 1.0);
        let ability_similarity = user
            .abilities
            .cosine_similarity(&career.requirements)
            .clamp(0.0, 1.0);
        Some(self.alpha * emb_similarity + (1.0 - self.alpha) * ability_similarity)
    }

    fn backend(&self) -> &'static str {
        "hybrid"
    }
}

/// Cosine similarity over raw embedding slices. `None` on a length mismatch
/// (a data-integrity problem upstream) so the caller can skip the career.
/// Zero-magnitude inputs yield 0.0.
fn cosine(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }
    let dot: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum();
    let norm_a: f64 = a.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|y| f64::from(*y).powi(2)).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Some(0.0);
    }
    Some(dot / (norm_a * norm_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::DIMENSION_COUNT;

    fn career(embedding: Option<Vec<f32>>) -> Career {
        Career {
            name: "Sample".to_string(),
            description: "A role.".to_string(),
            cluster: "Technology".to_string(),
            requirements: AbilityVector::new([6.0; DIMENSION_COUNT]),
            required_skills: vec![],
            salary_range: String::new(),
            job_growth: String::new(),
            required_education: String::new(),
            embedding,
        }
    }

    fn breakdown(score: f64) -> AbilityMatch {
        AbilityMatch {
            score,
            coverage: 1.0,
            top_abilities: vec![],
            missing_abilities: vec![],
        }
    }

    fn profile(embedding: Option<Vec<f32>>) -> UserProfile {
        UserProfile {
            abilities: AbilityVector::new([6.0; DIMENSION_COUNT]),
            embedding,
        }
    }

    #[test]
    fn test_strength_boost_applies_above_threshold() {
        let strategy = AbilityMatchStrategy::new(MatchTuning::default());
        let score = strategy
            .rank_score(&profile(None), &career(None), &breakdown(0.8))
            .unwrap();
        assert!((score - 0.88).abs() < 1e-9);
    }

    #[test]
    fn test_strength_boost_caps_at_one() {
        let strategy = AbilityMatchStrategy::new(MatchTuning::default());
        let score = strategy
            .rank_score(&profile(None), &career(None), &breakdown(0.99))
            .unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_no_boost_at_or_below_threshold() {
        let strategy = AbilityMatchStrategy::new(MatchTuning::default());
        let score = strategy
            .rank_score(&profile(None), &career(None), &breakdown(0.75))
            .unwrap();
        assert_eq!(score, 0.75);
    }

    #[test]
    fn test_embedding_strategy_skips_unembedded_career() {
        let strategy = EmbeddingSimilarityStrategy;
        let user = profile(Some(vec![1.0, 0.0]));
        assert!(strategy
            .rank_score(&user, &career(None), &breakdown(0.5))
            .is_none());
    }

    #[test]
    fn test_embedding_strategy_skips_without_user_embedding() {
        let strategy = EmbeddingSimilarityStrategy;
        assert!(strategy
            .rank_score(
                &profile(None),
                &career(Some(vec![1.0, 0.0])),
                &breakdown(0.5)
            )
            .is_none());
    }

    #[test]
    fn test_embedding_strategy_identical_vectors_score_one() {
        let strategy = EmbeddingSimilarityStrategy;
        let user = profile(Some(vec![0.6, 0.8]));
        let score = strategy
            .rank_score(&user, &career(Some(vec![0.6, 0.8])), &breakdown(0.0))
            .unwrap();
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_embedding_strategy_clamps_negative_similarity() {
        let strategy = EmbeddingSimilarityStrategy;
        let user = profile(Some(vec![1.0, 0.0]));
        let score = strategy
            .rank_score(&user, &career(Some(vec![-1.0, 0.0])), &breakdown(0.0))
            .unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_embedding_length_mismatch_skips_career() {
        let strategy = EmbeddingSimilarityStrategy;
        let user = profile(Some(vec![1.0, 0.0, 0.0]));
        assert!(strategy
            .rank_score(&user, &career(Some(vec![1.0, 0.0])), &breakdown(0.0))
            .is_none());
    }

    #[test]
    fn test_hybrid_blends_embedding_and_ability_cosine() {
        let strategy = HybridStrategy::new(0.7);
        // Identical embeddings (similarity 1.0) and identical ability
        // vectors (cosine 1.0): blend must be 1.0.
        let user = profile(Some(vec![1.0, 0.0]));
        let score = strategy
            .rank_score(&user, &career(Some(vec![1.0, 0.0])), &breakdown(0.0))
            .unwrap();
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_hybrid_alpha_weighting() {
        let strategy = HybridStrategy::new(0.7);
        // Orthogonal embeddings (similarity 0) and identical ability
        // vectors (cosine 1): expect 0.7*0 + 0.3*1 = 0.3.
        let user = profile(Some(vec![1.0, 0.0]));
        let score = strategy
            .rank_score(&user, &career(Some(vec![0.0, 1.0])), &breakdown(0.0))
            .unwrap();
        assert!((score - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_backend_labels() {
        assert_eq!(
            AbilityMatchStrategy::new(MatchTuning::default()).backend(),
            "ability"
        );
        assert_eq!(EmbeddingSimilarityStrategy.backend(), "embedding");
        assert_eq!(HybridStrategy::new(0.7).backend(), "hybrid");
    }
}
