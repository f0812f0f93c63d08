//! Module: store
//! Responsibility: the persistence contract the engine consumes.
//! Does not own: query planning, transactions, or any real database driver.
//! Boundary: each `persist`/`persist_many` call is one logical commit.

pub mod memory;

pub use memory::MemoryStore;

use crate::{traits::Identified, types::RecordId};
use thiserror::Error as ThisError;

///
/// StoreError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("entity not found: {id}")]
    NotFound { id: RecordId },
}

///
/// Store
///
/// The narrow surface a backing store must offer: load one row by id,
/// persist one, or persist a batch within a single commit. ORM adapters
/// implement this against their unit of work; `MemoryStore` implements it
/// over an ordered map for tests and in-process callers.
///

pub trait Store<T: Identified> {
    /// Load by surrogate id; `NotFound` surfaces to the caller unretried.
    fn load(&self, id: RecordId) -> Result<T, StoreError>;

    /// Insert or update one row, returning the persisted form.
    fn persist(&mut self, entity: T) -> Result<T, StoreError>;

    /// Persist a batch inside one commit. Used for the reconciliation
    /// outcome so the three write sets cannot be torn apart by a crash.
    fn persist_many(&mut self, entities: Vec<T>) -> Result<(), StoreError>;
}
