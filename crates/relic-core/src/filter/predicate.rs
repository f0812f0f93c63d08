use crate::{
    filter::{
        FilterError,
        spec::{Constraint, FilterSpec},
    },
    traits::Entity,
    value::{Value, ValueKind},
};
use std::marker::PhantomData;

///
/// Predicate
///
/// The compiled, validated half of a filter spec: an AND of per-field checks
/// over `T`'s allow-listed descriptor fields. Compilation is the validation
/// boundary; once a `Predicate<T>` exists, evaluation cannot fail.
///

#[derive(Clone, Debug)]
pub struct Predicate<T: Entity> {
    checks: Vec<Check>,
    marker: PhantomData<fn(&T)>,
}

#[derive(Clone, Debug)]
struct Check {
    field: &'static str,
    constraint: Constraint,
}

impl<T: Entity> Predicate<T> {
    /// Validate every constraint against the descriptor allow-list and
    /// produce the composed matcher.
    ///
    /// Non-filterable fields are rejected with the same error as unknown
    /// ones so the filter surface does not reveal which internal fields
    /// exist.
    pub fn compile(spec: &FilterSpec) -> Result<Self, FilterError> {
        let model = T::model();
        let mut checks = Vec::new();

        for (name, constraint) in spec.constraints() {
            let field = model.field(name).filter(|field| field.filterable).ok_or_else(|| {
                FilterError::UnknownFilterField {
                    field: name.to_string(),
                }
            })?;

            match constraint {
                Constraint::Eq(value) => check_kind(field.name, field.kind, value)?,
                Constraint::Contains(_) => {
                    if field.kind != ValueKind::Text {
                        return Err(FilterError::KindMismatch {
                            field: field.name.to_string(),
                            expected: ValueKind::Text,
                            actual: field.kind,
                        });
                    }
                }
                Constraint::OneOf(values) => {
                    for value in values {
                        check_kind(field.name, field.kind, value)?;
                    }
                }
            }

            checks.push(Check {
                field: field.name,
                constraint: constraint.clone(),
            });
        }

        Ok(Self {
            checks,
            marker: PhantomData,
        })
    }

    /// Evaluate the AND of all compiled checks against one row.
    #[must_use]
    pub fn matches(&self, entity: &T) -> bool {
        self.checks.iter().all(|check| {
            let value = entity.field(check.field).unwrap_or(Value::Null);

            match &check.constraint {
                Constraint::Eq(expected) => &value == expected,
                Constraint::Contains(needle) => value.contains_ci(needle),
                Constraint::OneOf(values) => values.contains(&value),
            }
        })
    }

    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.checks.is_empty()
    }
}

// A Null constraint value would match nothing; reject the shape instead of
// letting it fail silently at evaluation.
fn check_kind(field: &str, expected: ValueKind, value: &Value) -> Result<(), FilterError> {
    match value.kind() {
        Some(kind) if kind == expected => Ok(()),
        Some(kind) => Err(FilterError::KindMismatch {
            field: field.to_string(),
            expected,
            actual: kind,
        }),
        None => Err(FilterError::NullConstraint {
            field: field.to_string(),
        }),
    }
}
