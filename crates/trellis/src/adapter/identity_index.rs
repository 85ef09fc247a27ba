//! Reverse lookup from item to position.

use std::fmt;
use std::hash::{BuildHasher, Hasher};

use hashbrown::DefaultHashBuilder;
use hashbrown::hash_table::{Entry, HashTable};

use super::collection::ItemCollection;
use super::item::{AdapterItem, same_item};

/// Maps each item of a collection to its position.
///
/// The table stores positions only. Item equality is checked against the
/// collection the index was built from, so that same collection must be
/// passed to [`position`](Self::position).
///
/// When a collection holds equal items more than once, the last position
/// wins and the earlier ones are counted in [`duplicates`](Self::duplicates).
pub(crate) struct IdentityIndex {
    table: HashTable<usize>,
    hash_builder: DefaultHashBuilder,
    duplicates: usize,
}

impl IdentityIndex {
    /// Creates an empty index.
    pub(crate) fn new() -> Self {
        Self {
            table: HashTable::new(),
            hash_builder: DefaultHashBuilder::default(),
            duplicates: 0,
        }
    }

    /// Builds a fresh index over `items` in a single pass.
    pub(crate) fn build(items: &dyn ItemCollection) -> Self {
        let hash_builder = DefaultHashBuilder::default();
        let entries: Vec<&dyn AdapterItem> = (0..items.len())
            .map_while(|position| items.get(position))
            .collect();

        let mut table = HashTable::with_capacity(entries.len());
        let mut duplicates = 0;

        for (position, &item) in entries.iter().enumerate() {
            let hash = hash_item(&hash_builder, item);
            let entry = table.entry(
                hash,
                |&stored: &usize| same_item(entries[stored], item),
                |&stored: &usize| hash_item(&hash_builder, entries[stored]),
            );
            match entry {
                Entry::Occupied(mut occupied) => {
                    *occupied.get_mut() = position;
                    duplicates += 1;
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(position);
                }
            }
        }

        Self {
            table,
            hash_builder,
            duplicates,
        }
    }

    /// Returns the position of `probe` in `items`, if present.
    pub(crate) fn position(
        &self,
        items: &dyn ItemCollection,
        probe: &dyn AdapterItem,
    ) -> Option<usize> {
        let hash = hash_item(&self.hash_builder, probe);
        self.table
            .find(hash, |&stored| {
                items.get(stored).is_some_and(|item| same_item(item, probe))
            })
            .copied()
    }

    /// Number of distinct items in the index.
    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }

    /// Number of positions shadowed by a later equal item.
    pub(crate) fn duplicates(&self) -> usize {
        self.duplicates
    }
}

impl fmt::Debug for IdentityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityIndex")
            .field("len", &self.len())
            .field("duplicates", &self.duplicates)
            .finish()
    }
}

fn hash_item(hash_builder: &DefaultHashBuilder, item: &dyn AdapterItem) -> u64 {
    let mut hasher = hash_builder.build_hasher();
    item.identity_hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_position_resolves() {
        let items = vec![10_u32, 20, 30, 40];
        let index = IdentityIndex::build(&items);

        assert_eq!(index.len(), 4);
        for (position, item) in items.iter().enumerate() {
            assert_eq!(index.position(&items, item), Some(position));
        }
    }

    #[test]
    fn test_duplicates_resolve_to_last_position() {
        let items = vec!["a", "b", "a", "c", "a"];
        let index = IdentityIndex::build(&items);

        assert_eq!(index.position(&items, &"a"), Some(4));
        assert_eq!(index.position(&items, &"b"), Some(1));
        assert_eq!(index.len(), 3);
        assert_eq!(index.duplicates(), 2);
    }

    #[test]
    fn test_missing_items() {
        let items = vec![1_i32, 2, 3];
        let index = IdentityIndex::build(&items);

        assert_eq!(index.position(&items, &4_i32), None);
        // Same value, different type.
        assert_eq!(index.position(&items, &1_i64), None);
    }

    #[test]
    fn test_empty_index() {
        let items: Vec<String> = Vec::new();
        let index = IdentityIndex::build(&items);
        assert_eq!(index.len(), 0);
        assert_eq!(index.position(&items, &"x".to_string()), None);

        let fresh = IdentityIndex::new();
        assert_eq!(fresh.position(&items, &"x".to_string()), None);
        assert_eq!(fresh.duplicates(), 0);
    }
}
