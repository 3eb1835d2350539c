/// Compute effective limit with precedence: local arg -> global flag -> configured default.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> usize {
    usize::try_from(local.or(global).unwrap_or(fallback)).unwrap_or(usize::MAX)
}

/// Keep the first `limit` items.
#[must_use]
pub fn take<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}
