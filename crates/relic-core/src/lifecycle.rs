//! Module: lifecycle
//! Responsibility: audit/soft-status state and the only legal writes to it.
//! Does not own: field merging, link reconciliation, or persistence.
//! Boundary: `created_by`, `created_at`, and `status` change here or nowhere.

use crate::{
    traits::Entity,
    types::{ActorId, CompanyId, RecordId, Timestamp},
};
use serde::{Deserialize, Serialize};

///
/// Audit
///
/// The lifecycle block every entity embeds: tenant partition key, soft-delete
/// status, and the two actor/time stamp pairs. Entities are never physically
/// deleted; `status` is flipped instead.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Audit {
    pub company_id: CompanyId,
    pub status: bool,
    pub created_by: ActorId,
    pub created_at: Timestamp,
    pub updated_by: ActorId,
    pub updated_at: Timestamp,
}

impl Audit {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status
    }
}

impl Default for Audit {
    fn default() -> Self {
        Self {
            company_id: CompanyId::NIL,
            status: true,
            created_by: ActorId::NIL,
            created_at: Timestamp::EPOCH,
            updated_by: ActorId::NIL,
            updated_at: Timestamp::EPOCH,
        }
    }
}

///
/// Stamp
///
/// Explicit actor/tenant/time context for one mutating call. Built by the
/// caller from request authentication; nothing in the engine reads ambient
/// state.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Stamp {
    pub actor: ActorId,
    pub company: CompanyId,
    pub at: Timestamp,
}

impl Stamp {
    /// Context stamped with the current wall-clock time.
    #[must_use]
    pub fn new(actor: ActorId, company: CompanyId) -> Self {
        Self::at(actor, company, Timestamp::now())
    }

    /// Context with an explicit time, for callers that pin the clock per
    /// request (and for tests).
    #[must_use]
    pub const fn at(actor: ActorId, company: CompanyId, at: Timestamp) -> Self {
        Self { actor, company, at }
    }
}

/// Initialize lifecycle state on a freshly built entity.
///
/// Assigns a surrogate id when the caller left it nil, pins the tenant, and
/// sets both stamp pairs to the same actor/instant so the
/// `created_at <= updated_at` invariant holds from the first write. Entities
/// start active; a resource with a different default flips it before the
/// first persist.
pub fn create<T: Entity>(mut entity: T, stamp: &Stamp) -> T {
    if entity.id().is_nil() {
        entity.set_id(RecordId::generate());
    }

    let audit = entity.audit_mut();
    audit.company_id = stamp.company;
    audit.status = true;
    audit.created_by = stamp.actor;
    audit.created_at = stamp.at;
    audit.updated_by = stamp.actor;
    audit.updated_at = stamp.at;

    entity
}

/// Flip the soft-delete flag and stamp the mutation.
///
/// Intentionally not idempotent: the same operation both deactivates and
/// restores, so calling it twice returns to the original state.
pub fn toggle_status<T: Entity>(entity: &mut T, stamp: &Stamp) {
    let audit = entity.audit_mut();
    audit.status = !audit.status;
    audit.updated_by = stamp.actor;
    audit.updated_at = stamp.at;

    tracing::debug!(
        entity = T::model().entity,
        id = %entity.id(),
        status = entity.audit().status,
        "status toggled"
    );
}

/// Stamp `updated_by`/`updated_at` after a content mutation.
pub fn touch<T: Entity>(entity: &mut T, stamp: &Stamp) {
    let audit = entity.audit_mut();
    audit.updated_by = stamp.actor;
    audit.updated_at = stamp.at;
}
