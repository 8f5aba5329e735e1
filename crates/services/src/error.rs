use thiserror::Error;

use katla_core::DomainError;
use katla_infra::StoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The referenced resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Duplicate code or an illegal lifecycle transition.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("validation error: {0}")]
    Validation(String),

    /// A required collaborator was not supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn not_found(what: impl core::fmt::Display) -> Self {
        Self::NotFound(format!("{what} not found"))
    }

    pub fn invalid_argument(name: &str) -> Self {
        Self::InvalidArgument(format!("{name} is required"))
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::InvalidId(msg) => Self::Validation(msg),
            DomainError::NotFound(what) => Self::NotFound(what),
            DomainError::Conflict(msg) => Self::Conflict(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_kind() {
        let cases = [
            (DomainError::validation("blank code"), "validation"),
            (DomainError::invalid_id("HiveId: bad"), "validation"),
            (DomainError::not_found("hive 3 not found"), "not_found"),
            (DomainError::conflict("duplicate code"), "conflict"),
        ];
        for (err, kind) in cases {
            let mapped = ServiceError::from(err);
            let actual = match &mapped {
                ServiceError::Validation(_) => "validation",
                ServiceError::NotFound(_) => "not_found",
                ServiceError::Conflict(_) => "conflict",
                _ => "other",
            };
            assert_eq!(actual, kind, "{mapped}");
        }
    }

    #[test]
    fn not_found_message_names_the_record() {
        let err = ServiceError::from(DomainError::not_found("hive 3 not found"));
        let ServiceError::NotFound(msg) = &err else {
            panic!("expected NotFound, got {err:?}");
        };
        assert_eq!(msg, "hive 3 not found");
    }
}
