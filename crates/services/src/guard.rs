//! Existence, uniqueness and lifecycle checks shared by every service.

use katla_core::{Coded, DomainError, Entity, SoftDelete};
use katla_infra::EntitySet;

use crate::error::{ServiceError, ServiceResult};

/// Load a record or fail with `NotFound`.
pub(crate) async fn require<E: Entity>(
    set: &dyn EntitySet<E>,
    id: E::Id,
    what: &str,
) -> ServiceResult<E> {
    let record = set
        .find(id)
        .await?
        .ok_or_else(|| DomainError::not_found(format!("{what} {id} not found")))?;
    Ok(record)
}

/// Fail with `Conflict` if another record already uses `code`.
///
/// `owner` is the record being updated, whose own code never conflicts.
pub(crate) async fn ensure_code_free<E: Entity + Coded>(
    set: &dyn EntitySet<E>,
    code: &str,
    owner: Option<E::Id>,
    what: &str,
) -> ServiceResult<()> {
    let taken = set
        .list()
        .await?
        .iter()
        .any(|r| r.code() == code && Some(r.id()) != owner);
    if taken {
        tracing::warn!(code, what, "code_already_in_use");
        let msg = format!("{what} with code '{code}' already exists");
        return Err(DomainError::conflict(msg).into());
    }
    Ok(())
}

/// Only soft-deleted records may be purged.
pub(crate) fn ensure_purgeable<E>(record: &E, what: &str) -> ServiceResult<()>
where
    E: Entity + SoftDelete,
{
    if !record.is_deleted() {
        tracing::warn!(id = %record.id(), what, "purge_rejected_not_soft_deleted");
        return Err(DomainError::conflict(format!(
            "{what} {} must be marked deleted before it can be purged",
            record.id()
        ))
        .into());
    }
    Ok(())
}

/// Write back an updated record; a record that vanished in the meantime is `NotFound`.
pub(crate) async fn store<E: Entity>(
    set: &dyn EntitySet<E>,
    record: E,
    what: &str,
) -> ServiceResult<E> {
    let id = record.id();
    if set.update(record.clone()).await? {
        Ok(record)
    } else {
        Err(ServiceError::not_found(format!("{what} {id}")))
    }
}
