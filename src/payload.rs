use serde_json::Value;

/// Finds the first value bound to `key` anywhere in a nested JSON object.
///
/// The current level is checked before descending, so a shallow binding wins
/// over a deeper one. Sibling subtrees are visited in the map's natural
/// iteration order; when two siblings both contain `key`, which one wins is
/// first-match and not otherwise specified. Arrays and scalars are leaves;
/// objects inside arrays are not searched (best-effort extraction).
///
/// Returns `None` for non-object input (including `null`) and when the key
/// exists nowhere in the tree.
pub fn find_first<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    let map = payload.as_object()?;
    if let Some(value) = map.get(key) {
        return Some(value);
    }
    map.values().find_map(|child| find_first(child, key))
}
