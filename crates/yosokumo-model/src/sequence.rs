//! Append/trim helpers shared by specimens and blocks.

/// Appends every item; true if at least one was added.
pub(crate) fn extend_counting<T>(items: &mut Vec<T>, new: impl IntoIterator<Item = T>) -> bool {
    let before = items.len();
    items.extend(new);
    items.len() != before
}

/// Removes up to `n` items from the end.
///
/// Returns false when `n` is zero or there is nothing to remove. A count at
/// or beyond the length clears the sequence.
pub(crate) fn remove_from_end<T>(items: &mut Vec<T>, n: usize) -> bool {
    if n == 0 || items.is_empty() {
        return false;
    }
    let keep = items.len().saturating_sub(n);
    items.truncate(keep);
    true
}
