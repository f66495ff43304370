//! Career catalog — a validated, read-only snapshot of career profiles.
//!
//! The catalog is populated by an offline import job (static dataset or
//! k-means clustering over embeddings). The only contract this module holds
//! that job to is the shape contract: 15 finite components in `[0, 10]` per
//! requirement vector and a non-empty cluster label. Records that break it
//! are skipped with a warning, never fatal — partial catalogs still serve.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::abilities::AbilityVector;
use crate::errors::EngineError;

/// Raw catalog record as produced by the offline import/clustering job.
///
/// `ability_vector` is runtime-sized here on purpose: length validation
/// happens when the record is promoted to a [`Career`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecord {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub ability_vector: Vec<f64>,
    pub cluster: String,
    #[serde(default)]
    pub average_salary_range: String,
    #[serde(default)]
    pub job_growth: String,
    #[serde(default)]
    pub required_education: String,
    /// Cached text embedding filled in by the offline embedding job.
    /// Absent until that job has run for this career.
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

/// A career profile, read-only for the lifetime of a catalog snapshot.
///
/// `name` doubles as the stable identity; the import job guarantees
/// uniqueness and the catalog loader enforces it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Career {
    pub name: String,
    pub description: String,
    /// Categorical group used solely as the diversity partition key.
    pub cluster: String,
    pub requirements: AbilityVector,
    pub required_skills: Vec<String>,
    pub salary_range: String,
    pub job_growth: String,
    pub required_education: String,
    pub embedding: Option<Vec<f32>>,
}

/// Ordered, validated set of careers. Iteration order is load order and is
/// the tie-break order when match scores are equal.
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    careers: Vec<Career>,
}

impl CareerCatalog {
    /// Builds a catalog from raw import records.
    ///
    /// Records with a wrong-length or non-finite ability vector are skipped
    /// and logged. Duplicate names are a data-integrity failure of the
    /// import job itself and abort the load.
    pub fn from_records(records: Vec<CareerRecord>) -> Result<Self, EngineError> {
        let mut careers = Vec::with_capacity(records.len());
        let mut seen = HashSet::new();

        for record in records {
            let requirements = match AbilityVector::from_components(&record.ability_vector) {
                Ok(vector) => vector,
                Err(err) => {
                    warn!("skipping career '{}': {err}", record.name);
                    continue;
                }
            };
            if !seen.insert(record.name.clone()) {
                return Err(EngineError::DuplicateCareer(record.name));
            }
            careers.push(Career {
                name: record.name,
                description: record.description,
                cluster: record.cluster,
                requirements,
                required_skills: record.required_skills,
                salary_range: record.average_salary_range,
                job_growth: record.job_growth,
                required_education: record.required_education,
                embedding: record.embedding,
            });
        }

        Ok(Self { careers })
    }

    /// Parses a catalog from its JSON import format.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let records: Vec<CareerRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Loads the built-in production dataset: 79 careers across 7 clusters,
    /// sourced from Bureau of Labor Statistics and industry demand data.
    pub fn builtin() -> Result<Self, EngineError> {
        Self::from_json_str(include_str!("../data/careers.json"))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Career> {
        self.careers.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Career> {
        self.careers.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    /// Distinct cluster labels, in first-seen order.
    pub fn clusters(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.careers
            .iter()
            .map(|c| c.cluster.as_str())
            .filter(|cluster| seen.insert(*cluster))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::{ABILITY_MAX, ABILITY_MIN, DIMENSION_COUNT};

    fn record(name: &str, vector: Vec<f64>) -> CareerRecord {
        CareerRecord {
            name: name.to_string(),
            description: "A role.".to_string(),
            required_skills: vec![],
            ability_vector: vector,
            cluster: "Technology".to_string(),
            average_salary_range: String::new(),
            job_growth: String::new(),
            required_education: String::new(),
            embedding: None,
        }
    }

    #[test]
    fn test_builtin_catalog_loads_all_records() {
        let catalog = CareerCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), 79);
        assert_eq!(catalog.clusters().len(), 7);
    }

    #[test]
    fn test_builtin_catalog_vectors_satisfy_shape_contract() {
        let catalog = CareerCatalog::builtin().unwrap();
        for career in catalog.iter() {
            let components = career.requirements.as_slice();
            assert_eq!(components.len(), DIMENSION_COUNT);
            assert!(components
                .iter()
                .all(|&c| (ABILITY_MIN..=ABILITY_MAX).contains(&c)));
            assert!(!career.cluster.is_empty());
        }
    }

    #[test]
    fn test_wrong_dimensionality_record_is_skipped() {
        let records = vec![
            record("Good", vec![5.0; DIMENSION_COUNT]),
            record("Short", vec![5.0; 3]),
        ];
        let catalog = CareerCatalog::from_records(records).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Short").is_none());
    }

    #[test]
    fn test_non_finite_record_is_skipped() {
        let mut bad = vec![5.0; DIMENSION_COUNT];
        bad[2] = f64::NAN;
        let records = vec![record("Bad", bad), record("Good", vec![5.0; DIMENSION_COUNT])];
        let catalog = CareerCatalog::from_records(records).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.iter().next().unwrap().name, "Good");
    }

    #[test]
    fn test_duplicate_name_aborts_load() {
        let records = vec![
            record("Twin", vec![5.0; DIMENSION_COUNT]),
            record("Twin", vec![6.0; DIMENSION_COUNT]),
        ];
        assert!(matches!(
            CareerCatalog::from_records(records),
            Err(EngineError::DuplicateCareer(name)) if name == "Twin"
        ));
    }

    #[test]
    fn test_iteration_preserves_load_order() {
        let records = vec![
            record("First", vec![5.0; DIMENSION_COUNT]),
            record("Second", vec![5.0; DIMENSION_COUNT]),
        ];
        let catalog = CareerCatalog::from_records(records).unwrap();
        let names: Vec<_> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
