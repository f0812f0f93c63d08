//! Module: reconcile
//! Responsibility: diff a submitted link set against persisted links.
//! Does not own: persistence of the outcome (ops) or link field semantics.
//! Boundary: replaces delete-then-reinsert with a status-preserving upsert.

use crate::{
    lifecycle::Stamp,
    traits::AssociationLink,
    types::RecordId,
};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error as ThisError;

///
/// ReconcileError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ReconcileError {
    #[error("incomplete link for owner {owner}: missing identifying fields")]
    IncompleteLink { owner: RecordId },
}

///
/// IncompleteLinkPolicy
///
/// What to do with a submitted link that lacks the identifying fields needed
/// to insert it. `Reject` surfaces the malformed payload; `Skip` preserves
/// the silent-drop behavior of backends that treat such rows as no-op
/// submissions.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum IncompleteLinkPolicy {
    #[default]
    Reject,
    Skip,
}

///
/// LinkKey
///
/// Reconciliation identity of a link: the `(owner, target)` pair. Surrogate
/// ids are useless here because a reactivated link may live in a brand-new
/// row.
///

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct LinkKey {
    pub owner: RecordId,
    pub target: RecordId,
}

///
/// ReconcileOutcome
///
/// The three disjoint write sets a reconciliation produces. The caller
/// persists all three inside one unit-of-work commit so a crash cannot leave
/// the link set partially applied.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReconcileOutcome<L> {
    pub to_activate: Vec<L>,
    pub to_deactivate: Vec<L>,
    pub to_insert: Vec<L>,
}

impl<L> ReconcileOutcome<L> {
    const fn empty() -> Self {
        Self {
            to_activate: Vec::new(),
            to_deactivate: Vec::new(),
            to_insert: Vec::new(),
        }
    }

    /// True when resubmission produced no writes at all.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.to_activate.is_empty() && self.to_deactivate.is_empty() && self.to_insert.is_empty()
    }

    #[must_use]
    pub fn write_count(&self) -> usize {
        self.to_activate.len() + self.to_deactivate.len() + self.to_insert.len()
    }

    /// Flatten the three sets into one batch for a single bulk persist.
    #[must_use]
    pub fn into_writes(self) -> Vec<L> {
        let mut writes = self.to_activate;
        writes.extend(self.to_deactivate);
        writes.extend(self.to_insert);
        writes
    }
}

/// Diff `incoming` against `existing` for one owner and tenant.
///
/// - A persisted inactive match is reactivated (stamped, classification
///   absorbed from the submission).
/// - A persisted active match is a no-op; its timestamps stay untouched,
///   which is what makes resubmission idempotent.
/// - An unmatched complete submission becomes a new active link owned by
///   `owner` and stamped with the caller's actor/tenant.
/// - An unmatched incomplete submission is handled per `policy`.
/// - Every persisted active link absent from the submission is deactivated.
///
/// Duplicate `(owner, target)` pairs in the submission collapse to one.
pub fn reconcile<L: AssociationLink>(
    existing: &[L],
    incoming: &[L],
    owner: RecordId,
    stamp: &Stamp,
    policy: IncompleteLinkPolicy,
) -> Result<ReconcileOutcome<L>, ReconcileError> {
    let mut outcome = ReconcileOutcome::empty();

    // Phase 1: index persisted links for this owner and tenant.
    let mut persisted: BTreeMap<LinkKey, &L> = BTreeMap::new();
    for link in existing {
        if link.owner_id() == owner && link.audit().company_id == stamp.company {
            let key = LinkKey {
                owner,
                target: link.target_id(),
            };
            persisted.entry(key).or_insert(link);
        }
    }

    // Phase 2: walk the submission.
    let mut seen: BTreeSet<LinkKey> = BTreeSet::new();
    for link in incoming {
        if !link.is_insertable() {
            match policy {
                IncompleteLinkPolicy::Reject => {
                    return Err(ReconcileError::IncompleteLink { owner });
                }
                IncompleteLinkPolicy::Skip => {
                    tracing::debug!(%owner, "skipping incomplete link submission");
                    continue;
                }
            }
        }

        let key = LinkKey {
            owner,
            target: link.target_id(),
        };
        if !seen.insert(key) {
            continue;
        }

        match persisted.get(&key) {
            // Already active: no write, timestamps untouched.
            Some(current) if current.audit().is_active() => {}

            // Inactive row exists: reactivate in place.
            Some(current) => {
                let mut next = (*current).clone();
                next.absorb(link);

                let audit = next.audit_mut();
                audit.status = true;
                audit.company_id = stamp.company;
                audit.updated_by = stamp.actor;
                audit.updated_at = stamp.at;

                outcome.to_activate.push(next);
            }

            // No row for this pair: insert a fresh active link.
            None => {
                let mut next = link.clone();
                next.set_owner_id(owner);

                let audit = next.audit_mut();
                audit.company_id = stamp.company;
                audit.status = true;
                audit.created_by = stamp.actor;
                audit.created_at = stamp.at;
                audit.updated_by = stamp.actor;
                audit.updated_at = stamp.at;

                outcome.to_insert.push(next);
            }
        }
    }

    // Phase 3: deactivate persisted active links the submission dropped.
    for (key, current) in persisted {
        if current.audit().is_active() && !seen.contains(&key) {
            let mut next = current.clone();

            let audit = next.audit_mut();
            audit.status = false;
            audit.updated_by = stamp.actor;
            audit.updated_at = stamp.at;

            outcome.to_deactivate.push(next);
        }
    }

    tracing::debug!(
        %owner,
        activate = outcome.to_activate.len(),
        deactivate = outcome.to_deactivate.len(),
        insert = outcome.to_insert.len(),
        "link set reconciled"
    );

    Ok(outcome)
}
