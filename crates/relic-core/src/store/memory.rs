use crate::{
    store::{Store, StoreError},
    traits::Identified,
    types::RecordId,
};
use std::collections::BTreeMap;

///
/// MemoryStore
///
/// Ordered-map store for tests and in-process callers. Insert semantics
/// match the contract: a nil id gets its surrogate assigned here, at insert.
/// `persist_many` is all-or-nothing by construction since nothing in it can
/// fail after the first write.
///

#[derive(Clone, Debug, Default)]
pub struct MemoryStore<T> {
    rows: BTreeMap<RecordId, T>,
}

impl<T: Identified> MemoryStore<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn rows(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Materialize every row, the shape the filter engine consumes.
    #[must_use]
    pub fn materialize(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

impl<T: Identified> Store<T> for MemoryStore<T> {
    fn load(&self, id: RecordId) -> Result<T, StoreError> {
        self.rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn persist(&mut self, mut entity: T) -> Result<T, StoreError> {
        if entity.id().is_nil() {
            entity.set_id(RecordId::generate());
        }

        self.rows.insert(entity.id(), entity.clone());

        Ok(entity)
    }

    fn persist_many(&mut self, entities: Vec<T>) -> Result<(), StoreError> {
        for entity in entities {
            self.persist(entity)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::product;

    #[test]
    fn load_of_a_missing_id_is_not_found() {
        let store: MemoryStore<crate::test_fixtures::Product> = MemoryStore::new();
        let id = RecordId::generate();

        assert_eq!(store.load(id), Err(StoreError::NotFound { id }));
    }

    #[test]
    fn persist_assigns_an_id_at_insert() {
        let mut store = MemoryStore::new();
        let persisted = store.persist(product("Camera")).expect("persists");

        assert!(!persisted.id().is_nil());
        assert_eq!(store.load(persisted.id()), Ok(persisted));
    }

    #[test]
    fn persist_many_upserts_every_row() {
        let mut store = MemoryStore::new();
        store
            .persist_many(vec![product("Camera"), product("Table")])
            .expect("persists");

        assert_eq!(store.len(), 2);
    }
}
