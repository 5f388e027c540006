//! The storage contract the API layer depends on.

use crate::Result as DbErrorResult;

use cm_core::{User, UserFields};

use async_trait::async_trait;
use uuid::Uuid;

/// A persistent collection of users addressable by id.
///
/// Absence is never an error: lookups and updates return `None` and
/// deletes return `false` when no record has the given id. `Err` is
/// reserved for the store itself failing.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Assign a new id, persist, and return the stored record
    async fn insert(&self, fields: UserFields) -> DbErrorResult<User>;

    /// Every stored record, in insertion order
    async fn list_all(&self) -> DbErrorResult<Vec<User>>;

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>>;

    /// Merge the provided fields into the stored record and return the
    /// post-merge record
    async fn update_by_id(&self, id: Uuid, fields: UserFields) -> DbErrorResult<Option<User>>;

    /// Remove the record; `true` if something was removed
    async fn delete_by_id(&self, id: Uuid) -> DbErrorResult<bool>;

    /// Cheap round-trip used by readiness probes
    async fn ping(&self) -> DbErrorResult<()>;
}
