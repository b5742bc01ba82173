/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::HashSet;
use std::ops::ControlFlow;

use anyhow::Result;
use lazyseq::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_intersect_and_difference() -> Result<()> {
    let a = vec![1, 3, 5, 7, 9];
    let b = vec![0, 3, 4, 7, 10];
    assert_eq!(to_vec(&intersect(&a, &b, |x, y| x.cmp(y))), vec![3, 7]);
    assert_eq!(to_vec(&difference(&a, &b, |x, y| x.cmp(y))), vec![1, 5, 9]);
    Ok(())
}

#[test]
fn test_intersect_difference_partition() -> Result<()> {
    let a = vec![2, 4, 6, 8, 10, 12];
    let b = vec![4, 5, 10, 11];
    let inter = to_vec(&intersect(&a, &b, |x, y| x.cmp(y)));
    let diff = to_vec(&difference(&a, &b, |x, y| x.cmp(y)));
    // Intersection and difference partition the first input; both keep
    // its order, so re-merging them must reproduce it exactly.
    let mut merged = [inter, diff].concat();
    merged.sort_unstable();
    assert_eq!(merged, a);
    Ok(())
}

#[test]
fn test_merge_empty_inputs() -> Result<()> {
    let empty: Vec<i32> = vec![];
    let some = vec![1, 2, 3];
    assert_eq!(to_vec(&intersect(&empty, &some, |x, y| x.cmp(y))), vec![]);
    assert_eq!(to_vec(&intersect(&some, &empty, |x, y| x.cmp(y))), vec![]);
    assert_eq!(to_vec(&difference(&some, &empty, |x, y| x.cmp(y))), some);
    assert_eq!(to_vec(&difference(&empty, &some, |x, y| x.cmp(y))), vec![]);
    Ok(())
}

#[test]
fn test_subset_variants() -> Result<()> {
    let a = vec![1, 2, 3, 4, 5];
    let b = vec![2, 4];
    assert_eq!(to_vec(&subset_intersect(&a, &b, |x, y| x.cmp(y))), b);
    assert_eq!(
        to_vec(&subset_difference(&a, &b, |x, y| x.cmp(y))),
        vec![1, 3, 5]
    );
    Ok(())
}

#[test]
#[should_panic(expected = "missing from the first")]
fn test_subset_violation_panics() {
    let a = vec![1, 3];
    let b = vec![2];
    to_vec(&subset_intersect(&a, &b, |x: &i32, y: &i32| x.cmp(y)));
}

#[test]
fn test_interleave_classification() -> Result<()> {
    let a = vec![1, 2, 4];
    let b = vec![2, 3];
    let mut steps = Vec::new();
    let flow = interleave(
        &a,
        &b,
        &|x: &i32, y: &i32| x.cmp(y),
        &mut |item: MergeItem<i32, i32>| -> ControlFlow<()> {
            steps.push(item);
            ControlFlow::Continue(())
        },
    );
    assert!(flow.is_continue());
    assert_eq!(
        steps,
        vec![
            MergeItem::First(1),
            MergeItem::Both(2, 2),
            MergeItem::Second(3),
            MergeItem::First(4),
        ]
    );
    Ok(())
}

#[test]
fn test_interleave_early_break() -> Result<()> {
    let a = vec![1, 2, 3];
    let b = vec![2];
    let mut seen = 0;
    let flow = interleave(
        &a,
        &b,
        &|x: &i32, y: &i32| x.cmp(y),
        &mut |item: MergeItem<i32, i32>| {
            seen += 1;
            match item {
                MergeItem::Both(..) => ControlFlow::Break(()),
                _ => ControlFlow::Continue(()),
            }
        },
    );
    assert_eq!(flow, ControlFlow::Break(()));
    assert_eq!(seen, 2);
    Ok(())
}

#[test]
fn test_hash_membership_filters() -> Result<()> {
    let seq = vec![5, 1, 4, 1, 2];
    let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
    // Unsorted inputs, duplicates preserved, order of the sequence kept.
    assert_eq!(to_vec(&set_intersect(&seq, &set)), vec![1, 1, 2]);
    assert_eq!(to_vec(&set_difference(&seq, &set)), vec![5, 4]);
    // The set may be moved in instead of borrowed.
    assert_eq!(to_vec(&set_intersect(&seq, set)), vec![1, 1, 2]);
    Ok(())
}

#[test]
fn test_merge_against_binary_search() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..100 {
        let mut a: Vec<u32> = (0..rng.random_range(0..50))
            .map(|_| rng.random_range(0..100))
            .collect();
        a.sort_unstable();
        a.dedup();
        let mut b: Vec<u32> = (0..rng.random_range(0..50))
            .map(|_| rng.random_range(0..100))
            .collect();
        b.sort_unstable();
        b.dedup();

        let expected_inter: Vec<u32> = a
            .iter()
            .copied()
            .filter(|x| b.binary_search(x).is_ok())
            .collect();
        let expected_diff: Vec<u32> = a
            .iter()
            .copied()
            .filter(|x| b.binary_search(x).is_err())
            .collect();
        assert_eq!(to_vec(&intersect(&a, &b, |x, y| x.cmp(y))), expected_inter);
        assert_eq!(to_vec(&difference(&a, &b, |x, y| x.cmp(y))), expected_diff);

        let set: HashSet<u32> = b.iter().copied().collect();
        assert_eq!(to_vec(&set_intersect(&a, &set)), expected_inter);
        assert_eq!(to_vec(&set_difference(&a, &set)), expected_diff);
    }
    Ok(())
}
