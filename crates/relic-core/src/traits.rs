use crate::{lifecycle::Audit, model::EntityModel, types::RecordId, value::Value};

///
/// Identified
///
/// Anything addressable by a surrogate id: entities and association links
/// alike. The id is nil until assigned at insert and immutable afterwards.
///

pub trait Identified: Clone {
    /// Surrogate identifier; nil until assigned at insert.
    fn id(&self) -> RecordId;

    /// Assign the surrogate identifier, once, at insert.
    fn set_id(&mut self, id: RecordId);
}

///
/// Entity
///
/// Contract every persisted, tenant-scoped record implements. Field access
/// goes through the static descriptor list in `model()`, which is what lets
/// merge and the filter builder stay generic without reflection. Lifecycle
/// state is reached only through the `Audit` block, keeping it structurally
/// out of reach of descriptor-driven writes.
///

pub trait Entity: Identified {
    /// Static field descriptors for this type.
    fn model() -> &'static EntityModel;

    fn audit(&self) -> &Audit;

    fn audit_mut(&mut self) -> &mut Audit;

    /// Read a descriptor field; `None` for names outside the descriptor list.
    fn field(&self, name: &str) -> Option<Value>;

    /// Write a descriptor field, returning whether the name was recognized.
    ///
    /// Callers validate name and kind against `model()` first; a `Null`
    /// value resets the field to its natural empty state.
    fn set_field(&mut self, name: &str, value: Value) -> bool;
}

///
/// AssociationLink
///
/// A many-to-many join row between an owner and a target entity, lifecycle-
/// managed like any other record. For reconciliation a link is identified by
/// its `(owner, target)` pair, never by surrogate id: a logically identical
/// link may be re-created as a new row after deactivation.
///

pub trait AssociationLink: Identified {
    fn owner_id(&self) -> RecordId;

    /// Assign the owner; reconciliation stamps it on inserted links built
    /// from request payloads that carry only the target side.
    fn set_owner_id(&mut self, id: RecordId);

    fn target_id(&self) -> RecordId;

    fn audit(&self) -> &Audit;

    fn audit_mut(&mut self) -> &mut Audit;

    /// Whether the submitted link carries every identifying field required
    /// to insert it as a new row. The owner side is supplied by the
    /// reconciler, so the default only requires a target.
    fn is_insertable(&self) -> bool {
        !self.target_id().is_nil()
    }

    /// Carry over the extra classification field(s) from a resubmitted link.
    /// Default: links with no classification absorb nothing.
    fn absorb(&mut self, _incoming: &Self) {}
}
