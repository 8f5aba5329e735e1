//! Identity of the caller, used for audit stamps.

use katla_core::UserId;

pub trait UserContext: Send + Sync {
    fn user_id(&self) -> UserId;
}

/// A user context that always reports the same user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedUserContext(pub UserId);

impl UserContext for FixedUserContext {
    fn user_id(&self) -> UserId {
        self.0
    }
}
