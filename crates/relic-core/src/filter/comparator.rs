use crate::{
    filter::{
        FilterError,
        spec::{FilterSpec, OrderDirection},
    },
    traits::Entity,
    value::Value,
};
use std::{cmp::Ordering, marker::PhantomData};

///
/// Comparator
///
/// The compiled sort half of a filter spec. A spec without an `order_by`
/// compiles to the identity comparator, which preserves input order. Sorting
/// is stable, so equal keys keep their relative positions.
///

#[derive(Clone, Debug)]
pub struct Comparator<T: Entity> {
    order: Option<(&'static str, OrderDirection)>,
    marker: PhantomData<fn(&T)>,
}

impl<T: Entity> Comparator<T> {
    /// Validate the sort key against the sortable allow-list.
    ///
    /// Unknown and non-sortable names both reject with `UnknownSortField`.
    pub fn compile(spec: &FilterSpec) -> Result<Self, FilterError> {
        let order = match spec.order() {
            None => None,
            Some(order) => {
                let field = T::model()
                    .field(&order.field)
                    .filter(|field| field.sortable)
                    .ok_or_else(|| FilterError::UnknownSortField {
                        field: order.field.clone(),
                    })?;

                Some((field.name, order.direction))
            }
        };

        Ok(Self {
            order,
            marker: PhantomData,
        })
    }

    /// Compare two rows under the compiled order.
    #[must_use]
    pub fn cmp(&self, a: &T, b: &T) -> Ordering {
        let Some((field, direction)) = self.order else {
            return Ordering::Equal;
        };

        let left = a.field(field).unwrap_or(Value::Null);
        let right = b.field(field).unwrap_or(Value::Null);

        match direction {
            OrderDirection::Asc => left.sort_cmp(&right),
            OrderDirection::Desc => right.sort_cmp(&left),
        }
    }

    /// Stable in-place sort; a no-op for the identity comparator.
    pub fn sort(&self, rows: &mut [T]) {
        if self.order.is_some() {
            rows.sort_by(|a, b| self.cmp(a, b));
        }
    }

    #[must_use]
    pub const fn is_identity(&self) -> bool {
        self.order.is_none()
    }
}
