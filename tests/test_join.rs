/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use lazyseq::prelude::*;

fn static_len<S: StaticLen>(_: &S) -> usize {
    S::LEN
}

#[test]
fn test_join_flattens() -> Result<()> {
    let nested = vec![vec![1, 2], vec![], vec![3], vec![], vec![4, 5, 6]];
    assert_eq!(to_vec(&join(&nested)), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(join(&nested).len_linear(), 6);
    Ok(())
}

#[test]
fn test_join_empty_cases() -> Result<()> {
    let empty_outer: Vec<Vec<i32>> = vec![];
    assert_eq!(to_vec(&join(&empty_outer)), vec![]);
    assert_eq!(join(&empty_outer).len_linear(), 0);

    let all_empty: Vec<Vec<i32>> = vec![vec![], vec![], vec![]];
    assert_eq!(to_vec(&join(&all_empty)), vec![]);
    let joined = join(&all_empty);
    assert!(joined.is_at_end(&joined.begin()));
    Ok(())
}

#[test]
fn test_join_early_break() -> Result<()> {
    let nested = vec![vec![1, 2], vec![3, 4], vec![5]];
    assert_eq!(find(&join(&nested), |&x| x > 2), Some(3));
    assert_eq!(find(&join(&nested), |&x| x > 100), None);
    Ok(())
}

#[test]
fn test_join_static_len() -> Result<()> {
    let grid = [[1, 2, 3], [4, 5, 6]];
    let joined = join(&grid);
    assert_eq!(joined.len(), 6);
    assert_eq!(static_len(&joined), 6);
    assert_eq!(to_vec(&joined), vec![1, 2, 3, 4, 5, 6]);
    Ok(())
}

#[test]
fn test_join_cursor_walk() -> Result<()> {
    let nested = vec![vec![], vec![1, 2], vec![], vec![3], vec![]];
    let joined = join(&nested);

    let mut forward = Vec::new();
    let mut cursor = joined.begin();
    while !joined.is_at_end(&cursor) {
        forward.push(joined.get(&cursor));
        joined.increment(&mut cursor);
    }
    assert_eq!(forward, vec![1, 2, 3]);
    assert_eq!(cursor, joined.end());

    let mut backward = Vec::new();
    let begin = joined.begin();
    while cursor != begin {
        joined.decrement(&mut cursor);
        backward.push(joined.get(&cursor));
    }
    assert_eq!(backward, vec![3, 2, 1]);
    Ok(())
}

#[test]
fn test_join_reverse_traversal() -> Result<()> {
    let nested = vec![vec![1, 2], vec![], vec![3, 4, 5]];
    let joined = join(&nested);
    let mut reversed = Vec::new();
    let flow = joined.rev_for_each_until(&mut |x: i32| {
        reversed.push(x);
        std::ops::ControlFlow::<()>::Continue(())
    });
    assert!(flow.is_continue());
    assert_eq!(reversed, vec![5, 4, 3, 2, 1]);
    Ok(())
}

#[test]
fn test_join_composes_with_zip() -> Result<()> {
    let nested = vec![vec!['a'], vec!['b', 'c'], vec!['d']];
    let flat = join(&nested);
    let labels = vec![10, 20, 30, 40];
    assert_eq!(
        to_vec(&zip((&flat, &labels))),
        vec![('a', 10), ('b', 20), ('c', 30), ('d', 40)]
    );
    assert_eq!(
        to_vec(&enumerate(&flat)),
        vec![(0, 'a'), (1, 'b'), (2, 'c'), (3, 'd')]
    );
    Ok(())
}
