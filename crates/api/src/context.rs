use katla_core::UserId;
use katla_services::UserContext;
use uuid::Uuid;

/// Acting user for a request.
///
/// Inserted by the request middleware; present for all `/api` routes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestUser {
    user_id: UserId,
}

impl RequestUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

impl UserContext for RequestUser {
    fn user_id(&self) -> UserId {
        self.user_id
    }
}

/// Correlation id of a request (UUIDv7, time-ordered).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}
