pub const MAX_SUGGESTIONS: usize = 8;

/// Case-insensitive substring match over `names`, in list order, capped at
/// [`MAX_SUGGESTIONS`]. A blank query matches nothing.
#[must_use]
pub fn filter(query: &str, names: &[String]) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}
