use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Constraint
///
/// One named field constraint. Constraints are unordered and independent;
/// the compiled predicate ANDs them. There is deliberately no OR or grouping
/// support.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Constraint {
    /// Exact equality on the field value.
    Eq(Value),
    /// Case-insensitive substring containment; text fields only.
    Contains(String),
    /// Set membership, typically against a resolved display name.
    OneOf(Vec<Value>),
}

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

///
/// OrderSpec
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrderSpec {
    pub field: String,
    pub direction: OrderDirection,
}

///
/// FilterSpec
///
/// Sparse request-shaped filter input: field name to constraint, plus an
/// optional sort key. Unset fields are omitted, never null. Tenant
/// partitioning is not expressed here; the caller's store scope owns it.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FilterSpec {
    constraints: BTreeMap<String, Constraint>,
    order: Option<OrderSpec>,
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain a field to exact equality.
    #[must_use]
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.constraints.insert(field.into(), Constraint::Eq(value.into()));
        self
    }

    /// Constrain a text field to case-insensitive substring containment.
    #[must_use]
    pub fn contains(mut self, field: impl Into<String>, needle: impl Into<String>) -> Self {
        self.constraints
            .insert(field.into(), Constraint::Contains(needle.into()));
        self
    }

    /// Constrain a field to membership in a value set.
    #[must_use]
    pub fn one_of<V: Into<Value>>(
        mut self,
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.constraints.insert(
            field.into(),
            Constraint::OneOf(values.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Name the sort key and direction.
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.order = Some(OrderSpec {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn constraints(&self) -> impl Iterator<Item = (&str, &Constraint)> {
        self.constraints
            .iter()
            .map(|(field, constraint)| (field.as_str(), constraint))
    }

    #[must_use]
    pub const fn order(&self) -> Option<&OrderSpec> {
        self.order.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty() && self.order.is_none()
    }
}
