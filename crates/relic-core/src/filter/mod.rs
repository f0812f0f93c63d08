//! Module: filter
//! Responsibility: translate a sparse filter/sort spec into constraints.
//! Does not own: query execution against a real store; callers evaluate the
//! compiled predicate/comparator over materialized rows or adapt it to their
//! provider.
//! Boundary: every field name is checked against the entity's allow-list
//! before anything is evaluated.

mod comparator;
mod predicate;
mod spec;


pub use comparator::Comparator;
pub use predicate::Predicate;
pub use spec::{Constraint, FilterSpec, OrderDirection, OrderSpec};

use crate::{traits::Entity, value::ValueKind};
use thiserror::Error as ThisError;

///
/// FilterError
///
/// Allow-list rejections are deliberate: naming a field outside the
/// filterable/sortable set is an error, not a silent no-op, so internal
/// fields never leak through the filter surface.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FilterError {
    #[error("unknown filter field: {field}")]
    UnknownFilterField { field: String },

    #[error("unknown sort field: {field}")]
    UnknownSortField { field: String },

    #[error("kind mismatch on {field}: expected {expected}, found {actual}")]
    KindMismatch {
        field: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("null constraint value on {field}")]
    NullConstraint { field: String },
}

/// Filter and sort a materialized row set in one pass.
///
/// Compiles both halves of the spec first, so an invalid spec rejects before
/// any row is inspected.
pub fn apply<T: Entity>(spec: &FilterSpec, rows: Vec<T>) -> Result<Vec<T>, FilterError> {
    let predicate = Predicate::compile(spec)?;
    let comparator = Comparator::compile(spec)?;

    let mut rows: Vec<T> = rows.into_iter().filter(|row| predicate.matches(row)).collect();
    comparator.sort(&mut rows);

    Ok(rows)
}
