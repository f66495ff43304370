//! Runs the full recommendation pipeline over the built-in catalog for a
//! sample tech-oriented quiz and prints the ranked result as JSON.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use engine::{CareerCatalog, Config, QuestionBank, Recommender};

fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = CareerCatalog::builtin()?;
    info!(
        "Loaded {} careers across {} clusters",
        catalog.len(),
        catalog.clusters().len()
    );

    let strategy = config.build_strategy();
    info!("Scorer backend: {}", strategy.backend());

    let recommender = Recommender::new(
        catalog,
        Arc::new(QuestionBank::builtin()),
        strategy,
        config.tuning.clone(),
    );

    let answers = sample_answers();
    let abilities = recommender.extract_user_abilities(&answers);
    info!("Extracted user abilities: {:?}", abilities.as_slice());

    let recommendations = recommender.recommend(&answers, 5, true);
    info!("Generated {} recommendations", recommendations.len());

    println!("{}", serde_json::to_string_pretty(&recommendations)?);

    Ok(())
}

/// A tech-oriented student: strong logic, low creativity, moderate
/// communication, tech-focused interests. Keys are the seed question ids.
fn sample_answers() -> HashMap<String, Value> {
    let values: [(u32, i64); 19] = [
        (1, 9),
        (2, 8),
        (3, 9),
        (4, 5),
        (5, 4),
        (6, 4),
        (7, 6),
        (8, 7),
        (9, 6),
        (10, 8),
        (11, 6),
        (12, 8),
        (13, 4),
        (14, 10),
        (15, 5),
        (16, 3),
        (17, 4),
        (18, 8),
        (19, 6),
    ];
    values
        .into_iter()
        .map(|(id, v)| (id.to_string(), json!(v)))
        .collect()
}
