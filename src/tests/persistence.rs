//! Older versions must never observe later ones.

use crate::{Pair, SortedArray};

fn keys(arr: &SortedArray<Pair<u32, u32>>) -> Vec<u32> {
    arr.iter().map(|p| p.key).collect()
}

/// Upsert leaves the receiver exactly as it was.
#[test]
fn upsert_does_not_touch_predecessor() {
    let base: SortedArray<Pair<u32, u32>> = [Pair::new(1, 10), Pair::new(3, 30)].into_iter().collect();
    let before = keys(&base);

    let (inserted, _) = base.upsert(Pair::new(2, 20));
    let (replaced, _) = base.upsert(Pair::new(3, 99));

    assert_eq!(base.len(), 2);
    assert!(!base.has(&2));
    assert_eq!(base.get(&3).map(|p| p.value), Some(30));
    assert_eq!(keys(&base), before);

    assert_eq!(keys(&inserted), vec![1, 2, 3]);
    assert_eq!(replaced.get(&3).map(|p| p.value), Some(99));
}

/// Delete leaves the receiver exactly as it was.
#[test]
fn delete_does_not_touch_predecessor() {
    let base: SortedArray<Pair<u32, u32>> = (0..5).map(|i| Pair::new(i, i)).collect();
    let (next, _) = base.delete(&2);
    assert_eq!(keys(&base), vec![0, 1, 2, 3, 4]);
    assert_eq!(keys(&next), vec![0, 1, 3, 4]);
}

/// Branching: two successors of one base stay independent.
#[test]
fn branches_are_independent() {
    let base: SortedArray<u32> = [10, 20].into_iter().collect();
    let (left, _) = base.upsert(15);
    let (right, _) = base.delete(&10);
    assert_eq!(left.as_slice(), &[10, 15, 20]);
    assert_eq!(right.as_slice(), &[20]);
    assert_eq!(base.as_slice(), &[10, 20]);
}

/// Clones share storage until one of them is updated.
#[test]
fn clone_shares_until_update() {
    let base: SortedArray<u32> = [1, 2].into_iter().collect();
    let copy = base.clone();
    assert!(copy.ptr_eq(&base));

    let (next, _) = copy.upsert(3);
    assert!(!next.ptr_eq(&base));
    assert_eq!(base.len(), 2);
}

/// Insert then delete of a fresh key restores the original contents.
#[test]
fn insert_delete_inverse() {
    let base: SortedArray<u32> = [2, 4, 6].into_iter().collect();
    let (with, _) = base.upsert(5);
    let (without, removed) = with.delete(&5);
    assert_eq!(removed, Some(&5));
    assert_eq!(without, base);
}
