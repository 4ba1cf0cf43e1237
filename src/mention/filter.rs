//! Candidate filtering for the mention dropdown

use super::entity::Entity;

/// Entities whose display name contains `query`, case-insensitively.
///
/// List order is preserved. The empty query matches every entity.
pub fn filter_candidates<'a>(entities: &'a [Entity], query: &str) -> Vec<&'a Entity> {
    if query.is_empty() {
        return entities.iter().collect();
    }
    let needle = query.to_lowercase();
    entities
        .iter()
        .filter(|e| e.display_name.to_lowercase().contains(&needle))
        .collect()
}

/// Like [`filter_candidates`], keeping at most `limit` results
pub fn filter_limited<'a>(
    entities: &'a [Entity],
    query: &str,
    limit: Option<usize>,
) -> Vec<&'a Entity> {
    let mut found = filter_candidates(entities, query);
    if let Some(max) = limit {
        found.truncate(max);
    }
    found
}
