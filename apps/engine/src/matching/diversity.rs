//! Cluster diversity — caps the result set at one career per cluster.

use std::collections::HashSet;

/// Walks `ranked` in order, keeping each element whose cluster has not been
/// seen yet, until `top_n` elements are selected or the candidates run out.
///
/// When fewer than `top_n` distinct clusters exist the result is simply
/// shorter than `top_n`; that is accepted behaviour, not an error.
pub fn diversify<T>(ranked: Vec<T>, top_n: usize, cluster_of: impl Fn(&T) -> &str) -> Vec<T> {
    let mut selected = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for item in ranked {
        if selected.len() >= top_n {
            break;
        }
        let cluster = cluster_of(&item);
        if seen.insert(cluster.to_string()) {
            selected.push(item);
        }
    }

    selected
}
