//! Shared fixtures: one product-shaped entity and one group-membership link,
//! mirroring the kind of resources the engine serves in production.

use crate::{
    lifecycle::{Audit, Stamp},
    model::{EntityModel, FieldModel},
    traits::{AssociationLink, Entity, Identified},
    types::{ActorId, CompanyId, RecordId, Timestamp},
    value::Value,
};

pub(crate) fn actor() -> ActorId {
    ActorId::from_bytes([0xA1; 16])
}

pub(crate) fn company() -> CompanyId {
    CompanyId::from_bytes([0xC0; 16])
}

pub(crate) fn stamp() -> Stamp {
    stamp_at(1_000)
}

pub(crate) fn stamp_at(secs: u64) -> Stamp {
    Stamp::at(actor(), company(), Timestamp::from_seconds(secs))
}

///
/// Product
///
/// `brand` is the raw foreign key (not filterable); `brand_name` is the
/// resolved display name the service denormalizes onto the row, which is
/// what list-valued filters run against.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Product {
    pub id: RecordId,
    pub audit: Audit,
    pub name: String,
    pub code: String,
    pub brand: RecordId,
    pub brand_name: String,
    pub stock: u64,
}

static PRODUCT_MODEL: EntityModel = EntityModel {
    entity: "product",
    fields: &[
        FieldModel::text("name").filterable().sortable(),
        FieldModel::text("code").filterable(),
        FieldModel::reference("brand"),
        FieldModel::text("brand_name").filterable().sortable(),
        FieldModel::uint("stock").filterable().sortable(),
    ],
};

pub(crate) fn product(name: &str) -> Product {
    Product {
        id: RecordId::NIL,
        audit: Audit::default(),
        name: name.to_string(),
        code: String::new(),
        brand: RecordId::NIL,
        brand_name: String::new(),
        stock: 0,
    }
}

pub(crate) fn product_with_brand(name: &str, brand_name: &str) -> Product {
    let mut product = product(name);
    product.brand = RecordId::generate();
    product.brand_name = brand_name.to_string();
    product
}

impl Identified for Product {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl Entity for Product {
    fn model() -> &'static EntityModel {
        &PRODUCT_MODEL
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(Value::Text(self.name.clone())),
            "code" => Some(Value::Text(self.code.clone())),
            "brand" => Some(Value::Ref(self.brand)),
            "brand_name" => Some(Value::Text(self.brand_name.clone())),
            "stock" => Some(Value::Uint(self.stock)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: Value) -> bool {
        match (name, value) {
            ("name", Value::Text(v)) => self.name = v,
            ("name", Value::Null) => self.name.clear(),
            ("code", Value::Text(v)) => self.code = v,
            ("code", Value::Null) => self.code.clear(),
            ("brand", Value::Ref(v)) => self.brand = v,
            ("brand", Value::Null) => self.brand = RecordId::NIL,
            ("brand_name", Value::Text(v)) => self.brand_name = v,
            ("brand_name", Value::Null) => self.brand_name.clear(),
            ("stock", Value::Uint(v)) => self.stock = v,
            ("stock", Value::Null) => self.stock = 0,
            _ => return false,
        }

        true
    }
}

///
/// GroupLink
///
/// Product-to-group membership with an extra classification foreign key, the
/// shape reconciliation absorbs on activation and insertion.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GroupLink {
    pub id: RecordId,
    pub audit: Audit,
    pub owner: RecordId,
    pub target: RecordId,
    pub class: RecordId,
}

/// A persisted link row for `owner`/`target`, stamped from `stamp`.
pub(crate) fn group_link(owner: RecordId, target: RecordId, active: bool, stamp: &Stamp) -> GroupLink {
    GroupLink {
        id: RecordId::generate(),
        audit: Audit {
            company_id: stamp.company,
            status: active,
            created_by: stamp.actor,
            created_at: stamp.at,
            updated_by: stamp.actor,
            updated_at: stamp.at,
        },
        owner,
        target,
        class: RecordId::NIL,
    }
}

/// A request-shaped submission: target only, everything else unassigned.
pub(crate) fn incoming_link(target: RecordId) -> GroupLink {
    GroupLink {
        id: RecordId::NIL,
        audit: Audit::default(),
        owner: RecordId::NIL,
        target,
        class: RecordId::NIL,
    }
}

impl Identified for GroupLink {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl AssociationLink for GroupLink {
    fn owner_id(&self) -> RecordId {
        self.owner
    }

    fn set_owner_id(&mut self, id: RecordId) {
        self.owner = id;
    }

    fn target_id(&self) -> RecordId {
        self.target
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }

    fn absorb(&mut self, incoming: &Self) {
        if !incoming.class.is_nil() {
            self.class = incoming.class;
        }
    }
}
