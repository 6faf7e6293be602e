//! Category list editing shared by both forms.

/// Appends `candidate` as typed when it is non-empty after trimming.
/// Duplicates are kept. Returns whether the list changed.
pub fn add(list: &mut Vec<String>, candidate: &str) -> bool {
    if candidate.trim().is_empty() {
        return false;
    }
    list.push(candidate.to_string());
    true
}

/// Removes the category at `index`.
///
/// NOTE: this truncates the list to its first `index` elements, dropping every category
/// from `index` onward, not only the one at `index`. The pages have always behaved this way
/// and callers rely on the same result, so it is kept. An out-of-range index is a no-op.
pub fn remove_at(list: &mut Vec<String>, index: usize) {
    list.truncate(index);
}
