//! Quiz extraction — turns raw quiz answers into an ability profile.
//!
//! Answers arrive as a loose `question_id -> JSON value` mapping because the
//! upstream quiz client has shipped several shapes over time: a bare number,
//! `{"value": 7}`, the legacy `{"score": 7}`, and optionally an embedded
//! `"category"`. Extraction is lenient per entry: a malformed answer is
//! skipped, never aborts the whole call.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::abilities::{AbilityDimension, AbilityVector, DIMENSION_COUNT};

/// Skill category a quiz question assesses. Matches the upstream quiz schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Logic,
    Creativity,
    Communication,
    Academic,
    Interests,
    WorkStyle,
}

impl QuestionCategory {
    /// Parses the category label used in answer payloads and question
    /// metadata. Unknown labels return `None` and fall back to
    /// [`FALLBACK_DIMENSIONS`].
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "logic" => Some(QuestionCategory::Logic),
            "creativity" => Some(QuestionCategory::Creativity),
            "communication" => Some(QuestionCategory::Communication),
            "academic" => Some(QuestionCategory::Academic),
            "interests" => Some(QuestionCategory::Interests),
            "work_style" => Some(QuestionCategory::WorkStyle),
            _ => None,
        }
    }
}

/// Ability dimensions an answer in each category contributes to.
///
/// Declarative counterpart of the ad hoc per-category mappings in earlier
/// revisions: the table is typed over [`AbilityDimension`], so an index can
/// never drift out of range when the taxonomy changes.
pub fn dimensions_for(category: QuestionCategory) -> &'static [AbilityDimension] {
    use AbilityDimension::*;
    match category {
        QuestionCategory::Logic => &[LogicalThinking],
        QuestionCategory::Creativity => &[Creativity],
        QuestionCategory::Communication => &[Communication, Interpersonal],
        QuestionCategory::Academic => &[LogicalThinking, Mathematical],
        QuestionCategory::Interests => &[Creativity, Technical, DomainKnowledge],
        QuestionCategory::WorkStyle => &[Leadership, Management, Resilience],
    }
}

/// Dimension pair credited when an answer carries a category label the
/// engine does not recognise.
pub const FALLBACK_DIMENSIONS: [AbilityDimension; 2] =
    [AbilityDimension::Creativity, AbilityDimension::Technical];

/// External question-metadata collaborator: resolves a question id to the
/// category it assesses when the answer payload does not embed one.
pub trait QuestionResolver: Send + Sync {
    fn category_of(&self, question_id: &str) -> Option<QuestionCategory>;
}

/// A quiz question as served to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub text: String,
    pub category: QuestionCategory,
}

/// In-memory question bank, the default [`QuestionResolver`].
///
/// Production keeps questions in the quiz service's database; this bank is
/// the snapshot handed to the engine at startup.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
    categories: HashMap<String, QuestionCategory>,
}

impl QuestionBank {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let categories = questions
            .iter()
            .map(|q| (q.id.clone(), q.category))
            .collect();
        Self {
            questions,
            categories,
        }
    }

    /// The 19 seeded quiz questions, ids "1" through "19".
    pub fn builtin() -> Self {
        let questions = SEED_QUESTIONS
            .iter()
            .enumerate()
            .map(|(i, (category, text))| QuizQuestion {
                id: (i + 1).to_string(),
                text: (*text).to_string(),
                category: *category,
            })
            .collect();
        Self::new(questions)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }
}

impl QuestionResolver for QuestionBank {
    fn category_of(&self, question_id: &str) -> Option<QuestionCategory> {
        self.categories.get(question_id).copied()
    }
}

const SEED_QUESTIONS: &[(QuestionCategory, &str)] = &[
    (
        QuestionCategory::Logic,
        "How would you rate your logical thinking abilities?",
    ),
    (
        QuestionCategory::Logic,
        "How comfortable are you solving complex problems step-by-step?",
    ),
    (
        QuestionCategory::Logic,
        "Do you enjoy debugging and troubleshooting technical issues?",
    ),
    (
        QuestionCategory::Creativity,
        "How creative would you consider yourself?",
    ),
    (
        QuestionCategory::Creativity,
        "How often do you come up with original ideas and solutions?",
    ),
    (
        QuestionCategory::Creativity,
        "Do you enjoy artistic or design-related activities?",
    ),
    (
        QuestionCategory::Communication,
        "How strong are your communication and presentation skills?",
    ),
    (
        QuestionCategory::Communication,
        "Are you comfortable working with and leading people?",
    ),
    (
        QuestionCategory::Communication,
        "How well do you express your ideas to others?",
    ),
    (
        QuestionCategory::Academic,
        "How would you rate your performance in Mathematics?",
    ),
    (
        QuestionCategory::Academic,
        "How would you rate your performance in Science subjects?",
    ),
    (
        QuestionCategory::Academic,
        "How would you rate your performance in Language/English?",
    ),
    (
        QuestionCategory::Academic,
        "How would you rate your performance in Art/Creative subjects?",
    ),
    (
        QuestionCategory::Interests,
        "How interested are you in Technology and Programming?",
    ),
    (
        QuestionCategory::Interests,
        "How interested are you in Business and Management?",
    ),
    (
        QuestionCategory::Interests,
        "How interested are you in Creative fields (Design, Arts)?",
    ),
    (
        QuestionCategory::Interests,
        "How interested are you in Social and People-related work?",
    ),
    (
        QuestionCategory::WorkStyle,
        "Do you prefer working independently?",
    ),
    (
        QuestionCategory::WorkStyle,
        "Do you prefer working in teams and collaboratively?",
    ),
];

/// Converts raw quiz answers into an [`AbilityVector`].
///
/// For each answer, its value is credited to every dimension its category
/// maps to; a dimension's final value is the mean of its contributions.
/// Dimensions with no contributions default to 5.0, so an empty or fully
/// malformed answer set yields the uniform neutral profile rather than a
/// degenerate zero vector.
pub fn extract_abilities(
    answers: &HashMap<String, Value>,
    resolver: &dyn QuestionResolver,
) -> AbilityVector {
    let mut sums = [0.0_f64; DIMENSION_COUNT];
    let mut counts = [0_u32; DIMENSION_COUNT];

    // Accumulation must not depend on the map's iteration order: float sums
    // are order-sensitive, and the same answers must always produce the same
    // profile.
    let mut entries: Vec<(&String, &Value)> = answers.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (question_id, raw) in entries {
        let Some(answer) = parse_answer(raw) else {
            debug!("skipping malformed answer for question {question_id}");
            continue;
        };

        let dimensions = match answer.category {
            Some(label) => match QuestionCategory::from_label(&label) {
                Some(category) => dimensions_for(category),
                None => &FALLBACK_DIMENSIONS[..],
            },
            None => match resolver.category_of(question_id) {
                Some(category) => dimensions_for(category),
                None => {
                    debug!("skipping answer for unresolvable question {question_id}");
                    continue;
                }
            },
        };

        for dimension in dimensions {
            sums[dimension.index()] += answer.value;
            counts[dimension.index()] += 1;
        }
    }

    let mut components = [0.0_f64; DIMENSION_COUNT];
    for i in 0..DIMENSION_COUNT {
        components[i] = if counts[i] > 0 {
            sums[i] / f64::from(counts[i])
        } else {
            5.0
        };
    }

    AbilityVector::new(components)
}

struct ParsedAnswer {
    value: f64,
    category: Option<String>,
}

/// Lenient per-entry parse. Accepts a bare number, a numeric string, or an
/// object with `value`/`score` and an optional `category`. An object missing
/// both numeric keys scores a neutral 5.0, matching the quiz client's
/// historical behaviour; anything non-numeric is malformed.
fn parse_answer(raw: &Value) -> Option<ParsedAnswer> {
    match raw {
        Value::Object(fields) => {
            let value = match fields.get("value").or_else(|| fields.get("score")) {
                Some(v) => numeric(v)?,
                None => 5.0,
            };
            let category = fields
                .get("category")
                .and_then(Value::as_str)
                .map(str::to_string);
            Some(ParsedAnswer { value, category })
        }
        other => numeric(other).map(|value| ParsedAnswer {
            value,
            category: None,
        }),
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
