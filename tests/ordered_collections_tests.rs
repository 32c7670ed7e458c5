//! Integration tests for OrderedSet, OrderedMultiSet and OrderedMap.

use ordtree::collections::{OrderedMap, OrderedMultiSet, OrderedSet};
use ordtree::error::OutOfRangeError;
use ordtree::tree::ReverseOrder;
use rstest::rstest;

// =============================================================================
// OrderedSet
// =============================================================================

#[rstest]
fn test_set_default_and_new_are_empty() {
    let set: OrderedSet<i32> = OrderedSet::default();
    assert!(set.is_empty());
    assert_eq!(set, OrderedSet::new());
}

#[rstest]
fn test_set_insert_many_reports_each_outcome() {
    let mut set = OrderedSet::new();
    let outcomes = set.insert_many([
        534_789, 2_479_056, 987_654, 110_101_024, 62_348_710, 1, 35_674, 1,
    ]);

    assert_eq!(outcomes.len(), 8);
    assert!(outcomes[..7].iter().all(|(_, inserted)| *inserted));
    assert!(!outcomes[7].1);
    assert_eq!(set.get(outcomes[7].0), Some(&1));
    assert_eq!(
        set.iter().copied().collect::<Vec<_>>(),
        vec![
            1, 35_674, 534_789, 987_654, 2_479_056, 62_348_710, 110_101_024
        ]
    );
}

#[rstest]
fn test_set_merge_matches_union() {
    let mut target: OrderedSet<i32> = [1, 2, 3, 4, 5].into_iter().collect();
    let mut source: OrderedSet<i32> = [1, 2, 3, 4, 56, 76, 123, 53, 78, 43, 21, 100]
        .into_iter()
        .collect();

    target.merge(&mut source);

    assert_eq!(target.len(), 13);
    assert_eq!(source.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_set_clone_is_deep() {
    let original: OrderedSet<String> = ["b", "a", "c"].iter().map(ToString::to_string).collect();
    let mut copy = original.clone();
    copy.remove(&"a".to_string());
    copy.insert("d".to_string());

    assert_eq!(original.len(), 3);
    assert!(original.contains(&"a".to_string()));
    assert_ne!(original, copy);
}

#[rstest]
fn test_set_with_reverse_order() {
    let set: OrderedSet<i32, ReverseOrder> = (1..=5).collect();
    assert_eq!(set.first(), Some(&5));
    assert_eq!(set.last(), Some(&1));
}

#[rstest]
fn test_set_extend_and_into_iter() {
    let mut set: OrderedSet<i32> = OrderedSet::new();
    set.extend([3, 1, 3, 2]);
    let owned: Vec<i32> = set.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3]);
}

#[rstest]
fn test_set_borrowed_iteration() {
    let set: OrderedSet<i32> = [2, 1].into_iter().collect();
    let mut total = 0;
    for value in &set {
        total += value;
    }
    assert_eq!(total, 3);
}

#[rstest]
fn test_set_erase_by_position() {
    let mut set: OrderedSet<i32> = [4, 2, 9].into_iter().collect();
    let position = set.find(&4);

    assert_eq!(set.erase(position), Some(4));
    assert_eq!(set.erase(position), None);
    assert_eq!(set.erase(set.begin()), Some(2));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![9]);
}

// =============================================================================
// OrderedMultiSet
// =============================================================================

#[rstest]
fn test_multiset_bounds_scenario() {
    let multiset: OrderedMultiSet<i32> = [1, 3, 4, 2, 2].into_iter().collect();

    assert_eq!(multiset.get(multiset.lower_bound(&2)), Some(&2));
    assert_eq!(multiset.get(multiset.upper_bound(&2)), Some(&3));
    let (lower, upper) = multiset.equal_range(&2);
    assert_eq!(multiset.get(lower), Some(&2));
    assert_eq!(multiset.get(upper), Some(&3));
}

#[rstest]
#[case(&[], 0)]
#[case(&[7], 1)]
#[case(&[7, 7, 7, 1], 3)]
fn test_multiset_remove_all(#[case] values: &[i32], #[case] removed: usize) {
    let mut multiset: OrderedMultiSet<i32> = values.iter().copied().collect();
    assert_eq!(multiset.remove_all(&7), removed);
    assert_eq!(multiset.count(&7), 0);
    assert_eq!(multiset.len(), values.len() - removed);
}

#[rstest]
fn test_multiset_merge_and_swap() {
    let mut first: OrderedMultiSet<i32> = [1, 1].into_iter().collect();
    let mut second: OrderedMultiSet<i32> = [1, 2].into_iter().collect();

    first.merge(&mut second);
    assert_eq!(first.count(&1), 3);
    assert!(second.is_empty());

    first.swap(&mut second);
    assert!(first.is_empty());
    assert_eq!(second.len(), 4);
}

#[rstest]
fn test_multiset_positions_walk_duplicates() {
    let mut multiset = OrderedMultiSet::new();
    let first = multiset.insert(5);
    let second = multiset.insert(5);
    assert_eq!(multiset.next(first), second);
    assert_eq!(multiset.erase(first), Some(5));
    assert_eq!(multiset.begin(), second);
}

// =============================================================================
// OrderedMap
// =============================================================================

#[rstest]
fn test_map_subscript_style_access() {
    let mut map: OrderedMap<&str, i32> = OrderedMap::new();
    *map.get_or_insert_default("apples") += 3;
    *map.get_or_insert_default("apples") += 2;
    *map.get_or_insert_default("pears") += 1;

    assert_eq!(map.at(&"apples"), Ok(&5));
    assert_eq!(map.at(&"pears"), Ok(&1));
    assert_eq!(
        map.at(&"plums"),
        Err(OutOfRangeError {
            accessor: "OrderedMap::at"
        })
    );
}

#[rstest]
fn test_map_insert_many_and_keys() {
    let mut map = OrderedMap::new();
    let outcomes = map.insert_many([(3, 'c'), (1, 'a'), (3, 'z'), (2, 'b')]);
    let inserted: Vec<bool> = outcomes.iter().map(|(_, inserted)| *inserted).collect();

    assert_eq!(inserted, vec![true, true, false, true]);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(map.values().copied().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
}

#[rstest]
fn test_map_insert_or_assign_reports_insertion() {
    let mut map: OrderedMap<i32, &str> = OrderedMap::new();
    assert!(map.insert_or_assign(1, "one").1);
    assert!(!map.insert_or_assign(1, "uno").1);
    assert_eq!(map.get(&1), Some(&"uno"));
}

#[rstest]
fn test_map_merge() {
    let mut target: OrderedMap<i32, i32> = [(1, 10), (2, 20)].into_iter().collect();
    let mut source: OrderedMap<i32, i32> = [(2, 200), (3, 300)].into_iter().collect();

    target.merge(&mut source);

    let merged: Vec<(i32, i32)> = target.iter().map(|(key, value)| (*key, *value)).collect();
    let left: Vec<(i32, i32)> = source.iter().map(|(key, value)| (*key, *value)).collect();
    assert_eq!(merged, vec![(1, 10), (2, 20), (3, 300)]);
    assert_eq!(left, vec![(2, 200)]);
}

#[rstest]
fn test_map_equality_and_clone() {
    let map: OrderedMap<i32, String> = [(1, "a".to_string())].into_iter().collect();
    let mut copy = map.clone();
    assert_eq!(map, copy);
    if let Some(value) = copy.get_mut(&1) {
        value.push('!');
    }
    assert_ne!(map, copy);
    assert_eq!(map.get(&1), Some(&"a".to_string()));
}

#[rstest]
fn test_map_values_mut_and_remove() {
    let mut map: OrderedMap<i32, i32> = (0..5).map(|key| (key, key)).collect();
    for value in map.values_mut() {
        *value *= 2;
    }
    assert_eq!(map.remove(&4), Some(8));
    assert_eq!(map.values().sum::<i32>(), 12);
    assert!(!map.contains_key(&4));
}

#[rstest]
fn test_map_erase_by_position() {
    let mut map: OrderedMap<i32, char> = [(2, 'b'), (1, 'a')].into_iter().collect();

    assert_eq!(map.erase(map.find(&2)), Some((2, 'b')));
    assert_eq!(map.erase(map.find(&2)), None);
    assert_eq!(map.erase(map.begin()), Some((1, 'a')));
    assert!(map.is_empty());
}
