//! Module: merge
//! Responsibility: compute the entity to persist for a partial update.
//! Does not own: audit stamping (lifecycle) or persistence (store/ops).
//! Boundary: walks descriptor fields only; id and audit state are untouchable.

use crate::{
    traits::Entity,
    value::{Value, ValueKind},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// MergeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MergeError {
    #[error("unknown field: {field}")]
    UnknownField { field: String },

    #[error("kind mismatch on {field}: expected {expected}, found {actual}")]
    KindMismatch {
        field: String,
        expected: ValueKind,
        actual: ValueKind,
    },
}

///
/// EntityPatch
///
/// Explicit partial-update payload: field name to value, where *present*
/// means overwrite (including present-and-zero) and *absent* means retain.
/// This is the shape that removes the null-vs-zero ambiguity of flat partial
/// DTOs; the legacy ambiguity survives only in [`merge`].
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EntityPatch {
    fields: BTreeMap<String, Value>,
}

impl EntityPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an overwrite for one field.
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Stage a reset of one field to its natural empty state.
    #[must_use]
    pub fn clear(mut self, field: impl Into<String>) -> Self {
        self.fields.insert(field.into(), Value::Null);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Apply an explicit patch to a stored entity.
///
/// Validates the whole patch against the descriptor list before writing
/// anything, so a bad patch leaves the entity unchanged.
pub fn apply_patch<T: Entity>(entity: &mut T, patch: &EntityPatch) -> Result<(), MergeError> {
    let model = T::model();

    // Phase 1: reject unknown names and kind mismatches up front.
    for (name, value) in patch.iter() {
        let Some(field) = model.field(name) else {
            return Err(MergeError::UnknownField {
                field: name.to_string(),
            });
        };

        if let Some(kind) = value.kind()
            && kind != field.kind
        {
            return Err(MergeError::KindMismatch {
                field: name.to_string(),
                expected: field.kind,
                actual: kind,
            });
        }
    }

    // Phase 2: apply. Present always wins, zero or not.
    for (name, value) in patch.iter() {
        entity.set_field(name, value.clone());
    }

    Ok(())
}

/// Differential merge of a full incoming entity over a stored one.
///
/// For every descriptor field: overwrite when the incoming value is non-null,
/// non-zero for its kind, and differs from the stored value; otherwise
/// retain. The zero-skip rule exists because a flat partial payload cannot
/// distinguish "cleared to zero" from "omitted"; callers that need to clear
/// fields use [`apply_patch`] instead.
///
/// Id and audit state never move: they are not descriptor fields, so the
/// field pass cannot reach them. The caller stamps `updated_by`/`updated_at`
/// (via `lifecycle::touch`) afterwards.
#[must_use]
pub fn merge<T: Entity>(stored: &T, incoming: &T) -> T {
    let mut merged = stored.clone();

    for field in T::model().fields {
        let Some(next) = incoming.field(field.name) else {
            continue;
        };
        if next.is_zero() {
            continue;
        }

        let current = merged.field(field.name).unwrap_or(Value::Null);
        if next != current {
            merged.set_field(field.name, next);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        lifecycle,
        test_fixtures::{product, stamp_at},
        traits::Identified,
        types::RecordId,
    };
    use proptest::prelude::*;

    #[test]
    fn merge_overwrites_differing_non_zero_fields() {
        let stored = lifecycle::create(product("Camera"), &stamp_at(100));
        let mut incoming = product("Camcorder");
        incoming.stock = 5;

        let merged = merge(&stored, &incoming);

        assert_eq!(merged.name, "Camcorder");
        assert_eq!(merged.stock, 5);
        assert_eq!(merged.code, stored.code);
    }

    #[test]
    fn merge_skips_zero_values() {
        let mut stored = lifecycle::create(product("Camera"), &stamp_at(100));
        stored.stock = 9;
        stored.brand = RecordId::generate();

        let incoming = product(""); // every field at its zero value
        let merged = merge(&stored, &incoming);

        assert_eq!(merged.name, stored.name);
        assert_eq!(merged.stock, 9);
        assert_eq!(merged.brand, stored.brand);
    }

    #[test]
    fn merge_never_touches_protected_state() {
        let stored = lifecycle::create(product("Camera"), &stamp_at(100));

        let mut incoming = product("Camcorder");
        incoming.audit.status = false;
        incoming.audit.created_at = crate::types::Timestamp::from_seconds(999);
        incoming.set_id(RecordId::generate());

        let merged = merge(&stored, &incoming);

        assert_eq!(merged.id(), stored.id());
        assert_eq!(merged.audit().status, stored.audit().status);
        assert_eq!(merged.audit().created_by, stored.audit().created_by);
        assert_eq!(merged.audit().created_at, stored.audit().created_at);
        assert_eq!(merged.audit().company_id, stored.audit().company_id);
    }

    #[test]
    fn patch_overwrites_present_zero_values() {
        let mut entity = lifecycle::create(product("Camera"), &stamp_at(100));
        entity.stock = 9;

        let patch = EntityPatch::new().set("stock", 0u64).clear("code");
        apply_patch(&mut entity, &patch).expect("patch applies");

        assert_eq!(entity.stock, 0);
        assert_eq!(entity.code, "");
        assert_eq!(entity.name, "Camera");
    }

    #[test]
    fn patch_rejects_unknown_fields() {
        let mut entity = product("Camera");
        let patch = EntityPatch::new().set("secret_internal_field", 1u64);

        let err = apply_patch(&mut entity, &patch).unwrap_err();
        assert_eq!(
            err,
            MergeError::UnknownField {
                field: "secret_internal_field".to_string()
            }
        );
    }

    #[test]
    fn patch_rejects_kind_mismatch_without_partial_writes() {
        let mut entity = product("Camera");
        let patch = EntityPatch::new()
            .set("name", "Camcorder")
            .set("stock", "not a number");

        let err = apply_patch(&mut entity, &patch).unwrap_err();
        assert!(matches!(err, MergeError::KindMismatch { ref field, .. } if field == "stock"));

        // Validation happens before any write.
        assert_eq!(entity.name, "Camera");
    }

    proptest! {
        // Merge(Merge(e, u), u) == Merge(e, u)
        #[test]
        fn merge_is_idempotent_on_resubmission(
            stored_name in ".{0,12}",
            incoming_name in ".{0,12}",
            stored_stock in 0u64..100,
            incoming_stock in 0u64..100,
        ) {
            let mut stored = lifecycle::create(product(&stored_name), &stamp_at(100));
            stored.stock = stored_stock;

            let mut incoming = product(&incoming_name);
            incoming.stock = incoming_stock;

            let once = merge(&stored, &incoming);
            let twice = merge(&once, &incoming);

            prop_assert_eq!(once, twice);
        }
    }
}
