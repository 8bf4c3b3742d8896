//! Generic single-pass group-and-reduce. Best times, competition stats and
//! the records view are all the same fold with different key and merge
//! functions, so the loop lives here once.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Folds `items` into per-key accumulators. `init` builds the accumulator
/// from the first item seen for a key; `merge` is then applied to every item
/// of that key, the first one included.
pub fn group_reduce<I, K, V, KeyFn, InitFn, MergeFn>(
    items: I,
    mut key_of: KeyFn,
    mut init: InitFn,
    mut merge: MergeFn,
) -> HashMap<K, V>
where
    I: IntoIterator,
    K: Eq + Hash,
    KeyFn: FnMut(&I::Item) -> K,
    InitFn: FnMut(&I::Item) -> V,
    MergeFn: FnMut(&mut V, I::Item),
{
    let mut groups = HashMap::new();
    for item in items {
        let slot = match groups.entry(key_of(&item)) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(init(&item)),
        };
        merge(slot, item);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_by_key_and_merges_in_order() {
        let items = vec![("a", 1), ("b", 10), ("a", 2), ("a", 3)];
        let sums = group_reduce(
            items,
            |&(key, _)| key,
            |_| 0,
            |sum, (_, value)| *sum += value,
        );
        assert_eq!(sums[&"a"], 6);
        assert_eq!(sums[&"b"], 10);
    }

    #[test]
    fn test_init_sees_first_item_of_each_key() {
        let items = vec![("x", 5), ("x", 9)];
        let firsts = group_reduce(items, |&(key, _)| key, |&(_, first)| first, |_, _| {});
        assert_eq!(firsts[&"x"], 5);
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let groups: HashMap<&str, i32> =
            group_reduce(Vec::<(&str, i32)>::new(), |&(key, _)| key, |_| 0, |_, _| {});
        assert!(groups.is_empty());
    }
}
