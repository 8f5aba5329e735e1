//! Who created/last touched a record, and when.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::UserId;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audit {
    pub created_by: UserId,
    pub created: DateTime<Utc>,
    pub last_updated_by: UserId,
    pub last_updated: DateTime<Utc>,
}

impl Audit {
    /// Stamp for a freshly created record.
    pub fn new(user: UserId, at: DateTime<Utc>) -> Self {
        Self {
            created_by: user,
            created: at,
            last_updated_by: user,
            last_updated: at,
        }
    }

    /// Record a mutation. Creation fields are left untouched.
    pub fn touch(&mut self, user: UserId, at: DateTime<Utc>) {
        self.last_updated_by = user;
        self.last_updated = at;
    }
}
