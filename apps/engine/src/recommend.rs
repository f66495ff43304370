//! Recommendation assembly — the engine's two entry points.
//!
//! `extract_user_abilities` converts raw quiz answers into an ability
//! profile; `recommend` scores that profile against every career in the
//! catalog snapshot, ranks, diversifies, and explains. A single call is a
//! pure, synchronous computation over the snapshot: no shared mutable state,
//! no I/O, safe to run concurrently across threads.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::abilities::{AbilityDimension, AbilityVector};
use crate::catalog::{Career, CareerCatalog};
use crate::config::MatchTuning;
use crate::matching::ability::ability_match;
use crate::matching::alignment::{classify_alignment, DimensionAlignment};
use crate::matching::diversity::diversify;
use crate::matching::scorer::{MatchStrategy, UserProfile};
use crate::quiz::{extract_abilities, QuestionResolver};

/// A single ranked career recommendation, ready for the serving layer to
/// serialize. Created fresh per call; never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityRecommendation {
    pub career: String,
    pub description: String,
    pub cluster: String,
    /// Overall match score in `[0, 1]` under the configured strategy.
    pub match_score: f64,
    /// Fraction of the career's requirements the user covers, in `[0, 1]`.
    pub coverage_score: f64,
    pub is_strength_match: bool,
    pub top_matching_abilities: Vec<String>,
    pub missing_abilities: Vec<String>,
    pub alignment: Vec<DimensionAlignment>,
    pub required_skills: Vec<String>,
    pub salary_range: String,
    pub job_growth: String,
    pub required_education: String,
    pub explanation: String,
}

/// The recommendation engine: a catalog snapshot plus the collaborators the
/// serving layer selected at startup.
pub struct Recommender {
    catalog: CareerCatalog,
    questions: Arc<dyn QuestionResolver>,
    strategy: Arc<dyn MatchStrategy>,
    tuning: MatchTuning,
}

impl Recommender {
    pub fn new(
        catalog: CareerCatalog,
        questions: Arc<dyn QuestionResolver>,
        strategy: Arc<dyn MatchStrategy>,
        tuning: MatchTuning,
    ) -> Self {
        Self {
            catalog,
            questions,
            strategy,
            tuning,
        }
    }

    /// Converts raw quiz answers into the user's ability profile.
    pub fn extract_user_abilities(&self, answers: &HashMap<String, Value>) -> AbilityVector {
        extract_abilities(answers, self.questions.as_ref())
    }

    /// Generates up to `top_n` ranked recommendations for the given answers.
    ///
    /// With `diversity` enabled, at most one career per cluster is returned,
    /// which may yield fewer than `top_n` results. An empty catalog produces
    /// an empty list, never an error.
    pub fn recommend(
        &self,
        answers: &HashMap<String, Value>,
        top_n: usize,
        diversity: bool,
    ) -> Vec<AbilityRecommendation> {
        let profile = UserProfile::from_abilities(self.extract_user_abilities(answers));
        self.recommend_for_profile(&profile, top_n, diversity)
    }

    /// As [`Recommender::recommend`], but for a profile the serving layer
    /// has already built — the path used when an external embedder attaches
    /// a user embedding for the embedding-aware strategies.
    pub fn recommend_for_profile(
        &self,
        profile: &UserProfile,
        top_n: usize,
        diversity: bool,
    ) -> Vec<AbilityRecommendation> {
        let mut scored = Vec::new();

        for career in self.catalog.iter() {
            // Never profiled by the import job: skip, don't score as zero.
            if career.requirements.is_all_zero() {
                debug!("skipping career '{}': empty requirement vector", career.name);
                continue;
            }

            let ability = ability_match(&profile.abilities, &career.requirements, &self.tuning);
            let Some(match_score) = self.strategy.rank_score(profile, career, &ability) else {
                debug!(
                    "skipping career '{}': not scorable by {} backend",
                    career.name,
                    self.strategy.backend()
                );
                continue;
            };

            scored.push(AbilityRecommendation {
                career: career.name.clone(),
                description: career.description.clone(),
                cluster: career.cluster.clone(),
                match_score,
                coverage_score: ability.coverage,
                is_strength_match: ability.score > self.tuning.strength_threshold,
                top_matching_abilities: ability.top_abilities,
                missing_abilities: ability.missing_abilities,
                alignment: classify_alignment(&profile.abilities, &career.requirements),
                required_skills: career.required_skills.clone(),
                salary_range: career.salary_range.clone(),
                job_growth: career.job_growth.clone(),
                required_education: career.required_education.clone(),
                explanation: build_explanation(career),
            });
        }

        // Stable sort: equal scores keep catalog order, the documented
        // tie-break.
        scored.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if diversity {
            diversify(scored, top_n, |rec| rec.cluster.as_str())
        } else {
            scored.truncate(top_n);
            scored
        }
    }
}

/// Number of leading dimensions examined for the explanation's "requires
/// strong skills in" phrase.
const PRIMARY_DIMENSION_WINDOW: usize = 10;

/// Requirement level above which a dimension is called out as a primary
/// skill in the explanation.
const PRIMARY_REQUIREMENT_FLOOR: f64 = 7.0;

/// Builds the human-readable explanation for a career.
fn build_explanation(career: &Career) -> String {
    let primary: Vec<&str> = AbilityDimension::ALL
        .iter()
        .take(PRIMARY_DIMENSION_WINDOW)
        .filter(|&&dim| career.requirements.get(dim) > PRIMARY_REQUIREMENT_FLOOR)
        .map(|&dim| dim.name())
        .collect();

    let lead = if primary.is_empty() {
        format!("{} is a {} role. ", career.name, career.cluster.to_lowercase())
    } else {
        format!(
            "This career requires strong skills in {}. ",
            primary[..primary.len().min(2)].join(", ")
        )
    };

    let description = if career.description.is_empty() {
        "Dynamic role with growth potential."
    } else {
        career.description.as_str()
    };

    format!("{lead}{description}")
}
