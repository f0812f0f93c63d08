//! Relic: entity lifecycle, differential merge, association reconciliation,
//! and predicate/sort building for multi-tenant CRUD backends.
//!
//! This is the public meta-crate. Downstream services depend on **relic**
//! only; the engine itself lives in `relic-core`.

pub use relic_core as core;

pub use relic_core::{filter, lifecycle, merge, model, ops, reconcile, store, traits, types, value};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use relic_core::prelude::*;
}
