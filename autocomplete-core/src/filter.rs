//! Case-insensitive substring filtering over the option list.

/// Returns the options whose lowercase form contains the lowercase query,
/// preserving the original order. An empty query matches everything.
pub fn filter_options(options: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return options.to_vec();
    }
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Finds the first candidate that equals the query ignoring case.
pub fn exact_match<'a>(candidates: &'a [String], query: &str) -> Option<&'a String> {
    let needle = query.to_lowercase();
    candidates
        .iter()
        .find(|candidate| candidate.to_lowercase() == needle)
}
