use crate::model::field::FieldModel;

///
/// EntityModel
///
/// Runtime metadata for one entity type: its name (for diagnostics) and the
/// ordered descriptor list of its mutable fields. Declared once per resource
/// as a `static` and returned by `Entity::model`.
///

#[derive(Clone, Copy, Debug)]
pub struct EntityModel {
    pub entity: &'static str,
    pub fields: &'static [FieldModel],
}

impl EntityModel {
    /// Look up a descriptor by field name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Whether `name` is an allow-listed filter field.
    #[must_use]
    pub fn is_filterable(&self, name: &str) -> bool {
        self.field(name).is_some_and(|field| field.filterable)
    }

    /// Whether `name` is an allow-listed sort key.
    #[must_use]
    pub fn is_sortable(&self, name: &str) -> bool {
        self.field(name).is_some_and(|field| field.sortable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    static MODEL: EntityModel = EntityModel {
        entity: "widget",
        fields: &[
            FieldModel::text("name").filterable().sortable(),
            FieldModel::uint("stock").filterable(),
            FieldModel::reference("brand"),
        ],
    };

    #[test]
    fn lookup_by_name() {
        let field = MODEL.field("stock").expect("descriptor");

        assert_eq!(field.kind, ValueKind::Uint);
        assert!(MODEL.field("missing").is_none());
    }

    #[test]
    fn allow_list_flags_are_per_field() {
        assert!(MODEL.is_filterable("name"));
        assert!(MODEL.is_sortable("name"));
        assert!(MODEL.is_filterable("stock"));
        assert!(!MODEL.is_sortable("stock"));
        assert!(!MODEL.is_filterable("brand"));
        assert!(!MODEL.is_filterable("missing"));
    }
}
