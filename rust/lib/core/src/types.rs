use serde::Serialize;

/// Result wrapper for list operations.
#[derive(Debug, Clone, Serialize)]
pub struct ListResult<T: Serialize> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T: Serialize> ListResult<T> {
    /// Wrap a complete, unpaginated list.
    pub fn all(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}
