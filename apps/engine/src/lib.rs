//! Ability-based career recommendation engine.
//!
//! Matches a user's quiz-derived ability profile against a catalog of career
//! requirement profiles and returns a ranked, cluster-diverse, explained
//! top-N. The serving layer (HTTP, persistence, admin tooling) lives
//! elsewhere and consumes exactly two entry points:
//! [`Recommender::extract_user_abilities`] and [`Recommender::recommend`].

pub mod abilities;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod matching;
pub mod quiz;
pub mod recommend;

pub use abilities::{AbilityDimension, AbilityVector, DIMENSION_COUNT};
pub use catalog::{Career, CareerCatalog, CareerRecord};
pub use config::{Config, MatchTuning, ScorerBackend};
pub use errors::EngineError;
pub use matching::scorer::{MatchStrategy, UserProfile};
pub use quiz::{QuestionBank, QuestionCategory, QuestionResolver};
pub use recommend::{AbilityRecommendation, Recommender};
