//! Ability matching — per-dimension comparison of a user profile against a
//! career's requirement vector.
//!
//! Only dimensions the career actually requires participate: a career that
//! does not need an ability must neither penalise nor reward the user for it.

use crate::abilities::{AbilityDimension, AbilityVector};
use crate::config::MatchTuning;

/// Breakdown of one user-vs-career comparison, before any strength boost.
#[derive(Debug, Clone, PartialEq)]
pub struct AbilityMatch {
    /// Mean per-dimension fulfilment ratio, in `[0, 1]`.
    pub score: f64,
    /// Fraction of required dimensions the user covers, in `[0, 1]`.
    pub coverage: f64,
    /// Up to 3 required abilities the user meets or exceeds, in dimension order.
    pub top_abilities: Vec<String>,
    /// Up to 3 heavily-required abilities the user falls short on, in
    /// dimension order.
    pub missing_abilities: Vec<String>,
}

/// Scores `user` against `requirement`.
///
/// Per required dimension the fulfilment ratio is
/// `min(1, user / max(1, requirement))`; the match score is the mean of
/// those ratios, defaulting to the neutral score when the career has no
/// positive requirement at all. Coverage counts dimensions where the user
/// reaches `coverage_ratio` of the requirement.
pub fn ability_match(
    user: &AbilityVector,
    requirement: &AbilityVector,
    tuning: &MatchTuning,
) -> AbilityMatch {
    let mut ratios = Vec::new();
    let mut required = 0_u32;
    let mut covered = 0_u32;
    let mut top_abilities = Vec::new();
    let mut missing_abilities = Vec::new();

    for dimension in AbilityDimension::ALL {
        let need = requirement.get(dimension);
        let have = user.get(dimension);

        if need > 0.0 {
            // Denominator floor of 1 keeps fractional requirements from
            // inflating the ratio.
            ratios.push((have / need.max(1.0)).clamp(0.0, 1.0));
            required += 1;
            if have >= need * tuning.coverage_ratio {
                covered += 1;
            }
        }

        if need > tuning.top_requirement_floor
            && have >= need
            && top_abilities.len() < 3
        {
            top_abilities.push(dimension.name().to_string());
        }

        if need > tuning.missing_requirement_floor
            && have < need * tuning.missing_ratio
            && missing_abilities.len() < 3
        {
            missing_abilities.push(dimension.name().to_string());
        }
    }

    let score = if ratios.is_empty() {
        tuning.neutral_score
    } else {
        ratios.iter().sum::<f64>() / ratios.len() as f64
    };
    let coverage = f64::from(covered) / f64::from(required.max(1));

    AbilityMatch {
        score,
        coverage,
        top_abilities,
        missing_abilities,
    }
}
