// Matching core: per-dimension ability comparison, rank-score strategies,
// alignment classification, and cluster diversity.

pub mod ability;
pub mod alignment;
pub mod diversity;
pub mod scorer;
