//! Core engine for Relic: the entity lifecycle, differential merge,
//! association reconciliation, and predicate/sort building shared by every
//! resource service of a multi-tenant administrative backend.
//!
//! All four engines are pure transformations over in-memory values; I/O
//! happens in the caller (or in `ops` through the `store::Store` contract)
//! before and after. Each logical operation runs inside one request scope;
//! there is no cross-request shared mutable state here, and no field-level
//! optimistic concurrency: two concurrent updates to the same entity race
//! last-write-wins by commit order. That limitation is documented, not
//! silently fixed.

// public exports are one module level down
pub mod filter;
pub mod lifecycle;
pub mod merge;
pub mod model;
pub mod ops;
pub mod reconcile;
pub mod store;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors, the store contract, and the ops helpers are imported explicitly.
///

pub mod prelude {
    pub use crate::{
        filter::{FilterSpec, OrderDirection},
        lifecycle::{Audit, Stamp},
        merge::EntityPatch,
        model::{EntityModel, FieldModel},
        reconcile::{IncompleteLinkPolicy, ReconcileOutcome},
        traits::{AssociationLink, Entity, Identified},
        types::{ActorId, CompanyId, RecordId, Timestamp},
        value::{Value, ValueKind},
    };
}
