use serde::Deserialize;

use katla_core::Page;

/// `?skip=&take=` on list endpoints. Missing `take` means "everything".
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub skip: Option<usize>,
    pub take: Option<usize>,
}

impl From<ListQuery> for Page {
    fn from(q: ListQuery) -> Self {
        Page::new(q.skip.unwrap_or(0), q.take.unwrap_or(usize::MAX))
    }
}
