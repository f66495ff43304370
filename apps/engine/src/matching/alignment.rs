//! Per-dimension alignment bands — classifies how the user sits against each
//! requirement, for the profile-comparison view in the client.

use serde::{Deserialize, Serialize};

use crate::abilities::{AbilityDimension, AbilityVector};

/// How far the user's value sits from the career's requirement on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentBand {
    /// User exceeds the requirement by 1.5 or more.
    HighExceed,
    /// User exceeds by at least 0.5.
    GoodExceed,
    /// Within 0.5 either way.
    GoodMatch,
    /// Below the requirement by more than 0.5.
    LowMatch,
    /// Below by more than 1.5.
    CriticalGap,
}

/// One classified dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionAlignment {
    pub ability: String,
    pub band: AlignmentBand,
}

/// Classifies every dimension of `user` against `requirement`, in canonical
/// dimension order.
pub fn classify_alignment(
    user: &AbilityVector,
    requirement: &AbilityVector,
) -> Vec<DimensionAlignment> {
    AbilityDimension::ALL
        .iter()
        .map(|&dimension| {
            let diff = user.get(dimension) - requirement.get(dimension);
            let band = if diff >= 1.5 {
                AlignmentBand::HighExceed
            } else if diff >= 0.5 {
                AlignmentBand::GoodExceed
            } else if diff >= -0.5 {
                AlignmentBand::GoodMatch
            } else if diff >= -1.5 {
                AlignmentBand::LowMatch
            } else {
                AlignmentBand::CriticalGap
            };
            DimensionAlignment {
                ability: dimension.name().to_string(),
                band,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::DIMENSION_COUNT;

    fn classify_single(user: f64, need: f64) -> AlignmentBand {
        let mut u = [5.0; DIMENSION_COUNT];
        let mut r = [5.0; DIMENSION_COUNT];
        u[0] = user;
        r[0] = need;
        classify_alignment(&AbilityVector::new(u), &AbilityVector::new(r))[0].band
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify_single(8.5, 7.0), AlignmentBand::HighExceed);
        assert_eq!(classify_single(7.5, 7.0), AlignmentBand::GoodExceed);
        assert_eq!(classify_single(7.0, 7.0), AlignmentBand::GoodMatch);
        assert_eq!(classify_single(6.5, 7.0), AlignmentBand::GoodMatch);
        assert_eq!(classify_single(6.0, 7.0), AlignmentBand::LowMatch);
        assert_eq!(classify_single(5.0, 7.0), AlignmentBand::CriticalGap);
    }

    #[test]
    fn test_covers_every_dimension_in_order() {
        let alignment =
            classify_alignment(&AbilityVector::neutral(), &AbilityVector::neutral());
        assert_eq!(alignment.len(), DIMENSION_COUNT);
        assert_eq!(alignment[0].ability, "Logical Thinking");
        assert_eq!(alignment[14].ability, "Business Acumen");
        assert!(alignment.iter().all(|a| a.band == AlignmentBand::GoodMatch));
    }

    #[test]
    fn test_band_serialises_snake_case() {
        let json = serde_json::to_string(&AlignmentBand::CriticalGap).unwrap();
        assert_eq!(json, r#""critical_gap""#);
    }
}
