//! Module: ops
//! Responsibility: the load/transform/persist choreography every per-resource
//! service repeats.
//! Does not own: the transformations themselves (lifecycle, merge, reconcile)
//! or the store implementation.
//! Boundary: one logical operation per call, one commit per persist call.

use crate::{
    lifecycle::{self, Stamp},
    merge::{self, EntityPatch, MergeError},
    reconcile::{self, IncompleteLinkPolicy, ReconcileError, ReconcileOutcome},
    store::{Store, StoreError},
    traits::{AssociationLink, Entity},
    types::RecordId,
};
use thiserror::Error as ThisError;

///
/// Error
///
/// The union of engine-level failures an operation can surface. All are
/// local value/contract violations, reported synchronously; nothing here is
/// transient or retried.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

/// Create: lifecycle-stamp a freshly built entity and persist it.
pub fn create<T, S>(store: &mut S, entity: T, stamp: &Stamp) -> Result<T, Error>
where
    T: Entity,
    S: Store<T>,
{
    let entity = lifecycle::create(entity, stamp);

    tracing::debug!(entity = T::model().entity, id = %entity.id(), "created");

    Ok(store.persist(entity)?)
}

/// Update: load, apply an explicit patch, stamp, persist.
pub fn update<T, S>(store: &mut S, id: RecordId, patch: &EntityPatch, stamp: &Stamp) -> Result<T, Error>
where
    T: Entity,
    S: Store<T>,
{
    let mut entity = store.load(id)?;

    merge::apply_patch(&mut entity, patch)?;
    lifecycle::touch(&mut entity, stamp);

    tracing::debug!(entity = T::model().entity, %id, fields = patch.len(), "patched");

    Ok(store.persist(entity)?)
}

/// Update: load, differential-merge a full incoming entity, stamp, persist.
///
/// The legacy path for callers whose payloads are flat entities rather than
/// explicit patches; zero-valued incoming fields are treated as omitted.
pub fn update_merged<T, S>(store: &mut S, id: RecordId, incoming: &T, stamp: &Stamp) -> Result<T, Error>
where
    T: Entity,
    S: Store<T>,
{
    let stored = store.load(id)?;

    let mut merged = merge::merge(&stored, incoming);
    lifecycle::touch(&mut merged, stamp);

    Ok(store.persist(merged)?)
}

/// Toggle: load, flip the soft-delete flag, persist. The same operation
/// deactivates and restores.
pub fn toggle<T, S>(store: &mut S, id: RecordId, stamp: &Stamp) -> Result<T, Error>
where
    T: Entity,
    S: Store<T>,
{
    let mut entity = store.load(id)?;

    lifecycle::toggle_status(&mut entity, stamp);

    Ok(store.persist(entity)?)
}

/// Replace an owner's link set: reconcile, then persist all three write sets
/// in one `persist_many` commit. Returns the outcome so callers can report
/// what changed.
pub fn replace_links<L, S>(
    store: &mut S,
    existing: &[L],
    incoming: &[L],
    owner: RecordId,
    stamp: &Stamp,
    policy: IncompleteLinkPolicy,
) -> Result<ReconcileOutcome<L>, Error>
where
    L: AssociationLink,
    S: Store<L>,
{
    let outcome = reconcile::reconcile(existing, incoming, owner, stamp, policy)?;

    if !outcome.is_noop() {
        store.persist_many(outcome.clone().into_writes())?;
    }

    Ok(outcome)
}
