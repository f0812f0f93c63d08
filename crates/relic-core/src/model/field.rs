use crate::value::ValueKind;

///
/// FieldModel
///
/// Static descriptor for one mutable scalar or foreign-key field of an
/// entity. The descriptor list is the explicit replacement for runtime
/// property reflection: merge walks it, and the filter builder treats it as
/// the allow-list. Lifecycle and audit state is deliberately not describable
/// here, so no descriptor-driven code path can ever write it.
///

#[derive(Clone, Copy, Debug)]
pub struct FieldModel {
    /// Field name as used in patches, filter specs, and sort keys.
    pub name: &'static str,
    /// Declared scalar kind; validated before any write or comparison.
    pub kind: ValueKind,
    /// Whether the field may appear in a filter constraint.
    pub filterable: bool,
    /// Whether the field may be named as a sort key.
    pub sortable: bool,
}

impl FieldModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            filterable: false,
            sortable: false,
        }
    }

    #[must_use]
    pub const fn bool(name: &'static str) -> Self {
        Self::new(name, ValueKind::Bool)
    }

    #[must_use]
    pub const fn int(name: &'static str) -> Self {
        Self::new(name, ValueKind::Int)
    }

    #[must_use]
    pub const fn uint(name: &'static str) -> Self {
        Self::new(name, ValueKind::Uint)
    }

    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self::new(name, ValueKind::Text)
    }

    #[must_use]
    pub const fn timestamp(name: &'static str) -> Self {
        Self::new(name, ValueKind::Timestamp)
    }

    #[must_use]
    pub const fn reference(name: &'static str) -> Self {
        Self::new(name, ValueKind::Ref)
    }

    /// Admit this field into the filter allow-list.
    #[must_use]
    pub const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Admit this field as a sort key.
    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}
