//! Skip/take paging window for list operations.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of records to skip (0-based).
    pub skip: usize,
    /// Maximum number of records to return. Zero yields an empty page.
    pub take: usize,
}

impl Page {
    pub fn new(skip: usize, take: usize) -> Self {
        Self { skip, take }
    }

    /// A window covering every record.
    pub fn all() -> Self {
        Self {
            skip: 0,
            take: usize::MAX,
        }
    }

    pub fn apply<T>(self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items.into_iter().skip(self.skip).take(self.take).collect()
    }
}
