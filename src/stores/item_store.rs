use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::errors::ItemStoreError;
use crate::types::dto::CreateItemDto;
use crate::types::internal::ItemRecord;

pub const SAMPLE_ITEM_NAME: &str = "Sample Item";
pub const SAMPLE_ITEM_DESCRIPTION: &str = "This is a sample item for demonstration";

/// Collection guarded by the store lock
#[derive(Debug)]
struct ItemCollection {
    /// Items in insertion order
    items: Vec<ItemRecord>,
    /// Next id to hand out; never reused after a delete
    next_id: u64,
}

impl ItemCollection {
    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn name_taken(&self, name: &str, except_id: Option<&str>) -> bool {
        self.items
            .iter()
            .any(|item| item.name == name && Some(item.id.as_str()) != except_id)
    }

    fn allocate_id(&mut self) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        id
    }
}

/// ItemStore owns the in-memory item collection
///
/// Every operation runs under a single lock acquisition, so the validation checks and
/// the mutation that follows them are atomic with respect to other callers. Callers
/// only ever receive clones of stored records.
#[derive(Debug)]
pub struct ItemStore {
    state: RwLock<ItemCollection>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ItemCollection {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    // Mutations validate fully before touching the collection and then apply a single
    // push/assign/remove, so a poisoned lock cannot hide a half-written state.
    fn read(&self) -> RwLockReadGuard<'_, ItemCollection> {
        self.state.read().unwrap_or_else(|poisoned: PoisonError<_>| {
            tracing::error!("Item store lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, ItemCollection> {
        self.state.write().unwrap_or_else(|poisoned: PoisonError<_>| {
            tracing::error!("Item store lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn validate(dto: &CreateItemDto) -> Result<(), ItemStoreError> {
        if dto.name.is_empty() || dto.description.is_empty() {
            return Err(ItemStoreError::Validation);
        }
        Ok(())
    }

    /// Insert the demo record the template ships with
    ///
    /// Goes through the regular create path, so on a fresh store it receives id `"1"`.
    pub fn seed_sample_item(&self) -> Result<ItemRecord, ItemStoreError> {
        self.create(&CreateItemDto::new(SAMPLE_ITEM_NAME, SAMPLE_ITEM_DESCRIPTION))
    }

    /// All items in insertion order
    pub fn list(&self) -> Vec<ItemRecord> {
        self.read().items.clone()
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create a new item
    ///
    /// # Returns
    /// * `Ok(ItemRecord)` - The stored item with its assigned id and creation time
    /// * `Err(ItemStoreError::Validation)` - Name or description is empty
    /// * `Err(ItemStoreError::ItemExists)` - Another item already has this name
    pub fn create(&self, dto: &CreateItemDto) -> Result<ItemRecord, ItemStoreError> {
        Self::validate(dto)?;

        let mut state = self.write();

        if state.name_taken(&dto.name, None) {
            tracing::debug!("Rejected create: name '{}' already in use", dto.name);
            return Err(ItemStoreError::item_exists(&dto.name));
        }

        let id = state.allocate_id();
        if state.position(&id).is_some() {
            tracing::error!("Allocated item id {} is already in use", id);
            return Err(ItemStoreError::InvariantViolation(format!(
                "allocated id {} already present",
                id
            )));
        }

        let record = ItemRecord {
            id,
            name: dto.name.clone(),
            description: dto.description.clone(),
            created_at: Utc::now(),
        };
        state.items.push(record.clone());

        tracing::info!(item_id = %record.id, "Item created");
        Ok(record)
    }

    /// Look up one item by id
    pub fn get_by_id(&self, id: &str) -> Result<ItemRecord, ItemStoreError> {
        self.read()
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| ItemStoreError::item_not_found(id))
    }

    /// Replace the name and description of an existing item
    ///
    /// `id`, `created_at` and the item's position in the list stay unchanged. Keeping
    /// the item's own current name is allowed.
    ///
    /// # Returns
    /// * `Ok(ItemRecord)` - The updated item
    /// * `Err(ItemStoreError::Validation)` - Name or description is empty
    /// * `Err(ItemStoreError::ItemNotFound)` - No item has this id
    /// * `Err(ItemStoreError::ItemExists)` - A different item already has this name
    pub fn update(&self, id: &str, dto: &CreateItemDto) -> Result<ItemRecord, ItemStoreError> {
        Self::validate(dto)?;

        let mut state = self.write();

        let index = state
            .position(id)
            .ok_or_else(|| ItemStoreError::item_not_found(id))?;

        if state.name_taken(&dto.name, Some(id)) {
            tracing::debug!("Rejected update of {}: name '{}' already in use", id, dto.name);
            return Err(ItemStoreError::item_exists(&dto.name));
        }

        let item = &mut state.items[index];
        item.name = dto.name.clone();
        item.description = dto.description.clone();
        let record = item.clone();

        tracing::info!(item_id = %record.id, "Item updated");
        Ok(record)
    }

    /// Permanently remove an item
    ///
    /// Returns the removed record.
    pub fn delete(&self, id: &str) -> Result<ItemRecord, ItemStoreError> {
        let mut state = self.write();

        let index = state
            .position(id)
            .ok_or_else(|| ItemStoreError::item_not_found(id))?;
        let removed = state.items.remove(index);

        tracing::info!(item_id = %removed.id, "Item deleted");
        Ok(removed)
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn dto(name: &str, description: &str) -> CreateItemDto {
        CreateItemDto::new(name, description)
    }

    #[test]
    fn test_create_returns_item_with_id_and_timestamp() {
        let store = ItemStore::new();

        let item = store.create(&dto("A", "d1")).unwrap();

        assert_eq!(item.name, "A");
        assert_eq!(item.description, "d1");
        assert!(!item.id.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&item.created_at_iso()).is_ok());
    }

    #[test]
    fn test_create_duplicate_name_fails_and_keeps_original() {
        let store = ItemStore::new();
        store.create(&dto("A", "d1")).unwrap();

        let result = store.create(&dto("A", "d2"));

        assert_eq!(result, Err(ItemStoreError::item_exists("A")));
        let items = store.list();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "d1");
    }

    #[test]
    fn test_name_uniqueness_is_case_sensitive() {
        let store = ItemStore::new();
        store.create(&dto("Widget", "d")).unwrap();

        assert!(store.create(&dto("widget", "d")).is_ok());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_with_empty_name_fails_validation() {
        let store = ItemStore::new();

        let result = store.create(&dto("", "d"));

        assert_eq!(result, Err(ItemStoreError::Validation));
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_with_empty_description_fails_validation() {
        let store = ItemStore::new();

        assert_eq!(store.create(&dto("A", "")), Err(ItemStoreError::Validation));
        assert!(store.is_empty());
    }

    #[test]
    fn test_whitespace_only_values_are_stored_verbatim() {
        let store = ItemStore::new();

        let item = store.create(&dto("  ", "d")).unwrap();

        assert_eq!(item.name, "  ");
        assert_eq!(store.get_by_id(&item.id).unwrap().name, "  ");
        assert_eq!(store.create(&dto("  ", "d2")), Err(ItemStoreError::item_exists("  ")));
    }

    #[test]
    fn test_validation_is_checked_before_uniqueness() {
        let store = ItemStore::new();
        store.create(&dto("A", "d")).unwrap();

        assert_eq!(store.create(&dto("A", "")), Err(ItemStoreError::Validation));
    }

    #[test]
    fn test_ids_are_unique_across_deletes() {
        let store = ItemStore::new();
        let a = store.create(&dto("A", "d")).unwrap();
        let b = store.create(&dto("B", "d")).unwrap();
        store.delete(&a.id).unwrap();
        let c = store.create(&dto("C", "d")).unwrap();
        store.delete(&b.id).unwrap();
        let d = store.create(&dto("D", "d")).unwrap();

        let ids: HashSet<String> = [a.id, b.id, c.id, d.id].into_iter().collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let store = ItemStore::new();

        let first = store.create(&dto("A", "d")).unwrap();
        let second = store.create(&dto("B", "d")).unwrap();

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
    }

    #[test]
    fn test_list_preserves_creation_order() {
        let store = ItemStore::new();
        let names = ["first", "second", "third", "fourth"];
        for name in names {
            store.create(&dto(name, "d")).unwrap();
        }

        let listed: Vec<String> = store.list().into_iter().map(|item| item.name).collect();

        assert_eq!(listed, names);
    }

    #[test]
    fn test_get_by_id_is_stable_without_mutation() {
        let store = ItemStore::new();
        let created = store.create(&dto("A", "d")).unwrap();

        let first = store.get_by_id(&created.id).unwrap();
        let second = store.get_by_id(&created.id).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, created);
    }

    #[test]
    fn test_get_by_unknown_id_fails() {
        let store = ItemStore::new();

        assert_eq!(
            store.get_by_id("missing"),
            Err(ItemStoreError::item_not_found("missing"))
        );
    }

    #[test]
    fn test_update_unknown_id_fails_not_found() {
        let store = ItemStore::new();

        let result = store.update("404", &dto("B", "d"));

        assert_eq!(result, Err(ItemStoreError::item_not_found("404")));
    }

    #[test]
    fn test_update_validation_precedes_lookup() {
        let store = ItemStore::new();

        assert_eq!(
            store.update("404", &dto("", "d")),
            Err(ItemStoreError::Validation)
        );
    }

    #[test]
    fn test_update_keeping_own_name_succeeds() {
        let store = ItemStore::new();
        let created = store.create(&dto("X", "old")).unwrap();

        let updated = store.update(&created.id, &dto("X", "new")).unwrap();

        assert_eq!(updated.description, "new");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn test_update_to_another_items_name_fails() {
        let store = ItemStore::new();
        store.create(&dto("A", "d")).unwrap();
        let b = store.create(&dto("B", "d")).unwrap();

        let result = store.update(&b.id, &dto("A", "changed"));

        assert_eq!(result, Err(ItemStoreError::item_exists("A")));
        let unchanged = store.get_by_id(&b.id).unwrap();
        assert_eq!(unchanged.name, "B");
        assert_eq!(unchanged.description, "d");
    }

    #[test]
    fn test_update_keeps_position_and_immutable_fields() {
        let store = ItemStore::new();
        store.create(&dto("A", "d")).unwrap();
        let b = store.create(&dto("B", "d")).unwrap();
        store.create(&dto("C", "d")).unwrap();

        store.update(&b.id, &dto("B2", "d2")).unwrap();

        let items = store.list();
        assert_eq!(items[1].id, b.id);
        assert_eq!(items[1].name, "B2");
        assert_eq!(items[1].created_at, b.created_at);
    }

    #[test]
    fn test_delete_then_list_returns_remaining_in_order() {
        let store = ItemStore::new();
        let b = store.create(&dto("B", "d")).unwrap();
        store.create(&dto("C", "d")).unwrap();

        store.delete(&b.id).unwrap();

        let names: Vec<String> = store.list().into_iter().map(|item| item.name).collect();
        assert_eq!(names, vec!["C".to_string()]);
    }

    #[test]
    fn test_deleted_item_is_gone_for_get_and_update() {
        let store = ItemStore::new();
        let item = store.create(&dto("A", "d")).unwrap();

        let removed = store.delete(&item.id).unwrap();
        assert_eq!(removed, item);

        assert_eq!(
            store.get_by_id(&item.id),
            Err(ItemStoreError::item_not_found(&item.id))
        );
        assert_eq!(
            store.update(&item.id, &dto("A", "d")),
            Err(ItemStoreError::item_not_found(&item.id))
        );
        assert_eq!(
            store.delete(&item.id),
            Err(ItemStoreError::item_not_found(&item.id))
        );
    }

    #[test]
    fn test_deleted_name_can_be_reused() {
        let store = ItemStore::new();
        let item = store.create(&dto("A", "d")).unwrap();
        store.delete(&item.id).unwrap();

        let again = store.create(&dto("A", "d")).unwrap();

        assert_ne!(again.id, item.id);
    }

    #[test]
    fn test_returned_records_are_copies() {
        let store = ItemStore::new();
        let mut item = store.create(&dto("A", "d")).unwrap();

        item.name = "mutated".to_string();

        assert_eq!(store.get_by_id(&item.id).unwrap().name, "A");
    }

    #[test]
    fn test_seed_sample_item_gets_first_id() {
        let store = ItemStore::new();

        let sample = store.seed_sample_item().unwrap();

        assert_eq!(sample.id, "1");
        assert_eq!(sample.name, SAMPLE_ITEM_NAME);
        assert_eq!(sample.description, SAMPLE_ITEM_DESCRIPTION);
        assert!(store.seed_sample_item().is_err());
    }

    #[test]
    fn test_concurrent_creates_with_same_name_admit_one() {
        let store = Arc::new(ItemStore::new());

        let results: Vec<Result<ItemRecord, ItemStoreError>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let store = Arc::clone(&store);
                    scope.spawn(move || store.create(&dto("shared", "d")))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_distinct_creates_get_distinct_ids() {
        let store = Arc::new(ItemStore::new());

        std::thread::scope(|scope| {
            for i in 0..16 {
                let store = Arc::clone(&store);
                scope.spawn(move || {
                    store.create(&dto(&format!("item-{}", i), "d")).unwrap();
                });
            }
        });

        let ids: HashSet<String> = store.list().into_iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), 16);
    }
}
