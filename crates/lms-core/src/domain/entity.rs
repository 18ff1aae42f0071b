//! Domain Layer - Core Entity Trait
//!
//! Stored records that carry their own identifier.

/// Core trait for stored entities with a string identifier
pub trait Entity: Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Remove every entity with the given id, returning how many were dropped
pub fn remove_by_id<T: Entity>(list: &mut Vec<T>, id: &str) -> usize {
    let before = list.len();
    list.retain(|entity| entity.id() != id);
    before - list.len()
}

/// `<prefix>_<millis>`, suffixed `_<n>` when the id is already taken
pub fn next_time_id<T: Entity>(prefix: &str, existing: &[T], millis: i64) -> String {
    let base = format!("{}_{}", prefix, millis);
    let taken = |candidate: &str| existing.iter().any(|e| e.id() == candidate);
    if !taken(&base) {
        return base;
    }
    (1u32..)
        .map(|n| format!("{}_{}", base, n))
        .find(|candidate| !taken(candidate))
        .unwrap_or(base)
}
