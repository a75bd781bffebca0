//! Upsert/delete must report exactly what they displaced.

use crate::{Pair, SortedArray};

// ---------------------------------------------------------------------------
// upsert must return the previous element when replacing
// ---------------------------------------------------------------------------

#[test]
fn upsert_new_returns_none() {
    let arr = SortedArray::new();
    let (_, prev) = arr.upsert(Pair::new("key", 42));
    assert_eq!(prev, None, "inserting a new key should report no previous element");
}

#[test]
fn upsert_chain_reports_each_predecessor() {
    let v0 = SortedArray::new();
    let (v1, p1) = v0.upsert(Pair::new("k", 10));
    let (v2, p2) = v1.upsert(Pair::new("k", 20));
    let (v3, p3) = v2.upsert(Pair::new("k", 30));
    assert_eq!(p1, None);
    assert_eq!(p2, Some(&Pair::new("k", 10)));
    assert_eq!(p3, Some(&Pair::new("k", 20)));
    assert_eq!(v3.get(&"k").map(|p| p.value), Some(30));
}

#[test]
fn upsert_twice_is_idempotent() {
    let base: SortedArray<u32> = [1, 4].into_iter().collect();
    let (once, _) = base.upsert(2);
    let (twice, prev) = once.upsert(2);
    assert_eq!(prev, Some(&2));
    assert_eq!(once, twice);
}

// ---------------------------------------------------------------------------
// delete must return the removed element
// ---------------------------------------------------------------------------

#[test]
fn delete_returns_removed() {
    let (arr, _) = SortedArray::new().upsert(Pair::new("a", 100));
    let (_, removed) = arr.delete(&"a");
    assert_eq!(removed, Some(&Pair::new("a", 100)));
}

#[test]
fn delete_returns_correct_element_among_many() {
    let arr: SortedArray<(u32, u32)> = (0..100).map(|i| (i, i * 10)).collect();
    let (next, removed) = arr.delete(&50);
    assert_eq!(removed, Some(&(50, 500)));
    assert_eq!(next.len(), 99);
    assert_eq!(next.delete(&50).1, None);
}

// ---------------------------------------------------------------------------
// conditional delete, getsert, get_any
// ---------------------------------------------------------------------------

#[test]
fn delete_if_respects_predicate() {
    let arr: SortedArray<(u32, bool)> = [(1, true), (2, false)].into_iter().collect();

    let (kept, removed) = arr.delete_if(&2, |&(_, empty)| empty);
    assert_eq!(removed, None);
    assert!(kept.ptr_eq(&arr));

    let (pruned, removed) = arr.delete_if(&1, |&(_, empty)| empty);
    assert_eq!(removed, Some(&(1, true)));
    assert_eq!(pruned.as_slice(), &[(2, false)]);
}

#[test]
fn delete_if_missing_key_skips_predicate() {
    let arr: SortedArray<u32> = [1].into_iter().collect();
    let (_, removed) = arr.delete_if(&9, |_| panic!("predicate must not run"));
    assert_eq!(removed, None);
}

#[test]
fn get_or_insert_with_inserts_once() {
    let arr: SortedArray<Pair<u32, &str>> = SortedArray::new();
    let (a, inserted) = arr.get_or_insert_with(&3, || Pair::new(3, "made"));
    assert!(inserted);
    assert_eq!(a.get(&3).map(|p| p.value), Some("made"));

    let (b, inserted) = a.get_or_insert_with(&3, || panic!("must not rebuild"));
    assert!(!inserted);
    assert!(b.ptr_eq(&a));
}

#[test]
fn get_any_returns_first_present_candidate() {
    let arr: SortedArray<(u32, char)> = [(2, 'b'), (4, 'd'), (6, 'f')].into_iter().collect();
    assert_eq!(arr.get_any(&[1_u32, 4, 6]), Some(&(4, 'd')));
    assert_eq!(arr.get_any(&[6_u32, 2]), Some(&(6, 'f')));
    assert_eq!(arr.get_any(&[1_u32, 3, 5]), None);
    assert_eq!(arr.get_any(std::iter::empty::<&u32>()), None);
}

#[test]
fn get_or_insert_with_places_by_built_key() {
    let arr: SortedArray<u32> = [1, 5, 9].into_iter().collect();
    let (a, inserted) = arr.get_or_insert_with(&2, || 7);
    assert!(inserted);
    assert_eq!(a.as_slice(), &[1, 5, 7, 9]);

    let (b, inserted) = arr.get_or_insert_with(&2, || 9);
    assert!(inserted);
    assert_eq!(b.as_slice(), &[1, 5, 9]);
    assert_eq!(arr.as_slice(), &[1, 5, 9]);
}

#[test]
fn get_or_insert_any_returns_first_hit() {
    let arr: SortedArray<(u32, char)> = [(2, 'b'), (4, 'd')].into_iter().collect();
    let (a, hit) = arr.get_or_insert_any(&[3_u32, 4, 2], || panic!("must not build"));
    assert_eq!(hit, Some(&(4, 'd')));
    assert!(a.ptr_eq(&arr));
}

#[test]
fn get_or_insert_any_inserts_on_miss() {
    let arr: SortedArray<(u32, char)> = [(2, 'b'), (4, 'd')].into_iter().collect();
    let (a, hit) = arr.get_or_insert_any(&[1_u32, 3], || (3, 'c'));
    assert_eq!(hit, None);
    assert_eq!(a.as_slice(), &[(2, 'b'), (3, 'c'), (4, 'd')]);
    assert_eq!(arr.len(), 2);

    let empty: SortedArray<(u32, char)> = SortedArray::new();
    let (b, hit) = empty.get_or_insert_any(std::iter::empty::<&u32>(), || (8, 'h'));
    assert_eq!(hit, None);
    assert_eq!(b.as_slice(), &[(8, 'h')]);
}
