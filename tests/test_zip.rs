/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::cell::Cell;
use std::ops::ControlFlow;

use anyhow::Result;
use itertools::izip;
use lazyseq::prelude::*;

/// A sequence with no cursor: elements can only be pushed, and every
/// production is counted so tests can check how far a traversal ran.
struct Generator<'a> {
    items: Vec<u32>,
    produced: &'a Cell<usize>,
}

impl Sequence for Generator<'_> {
    type Item = u32;

    fn for_each_until<B, K: Sink<u32, B> + ?Sized>(&self, sink: &mut K) -> ControlFlow<B> {
        for &item in &self.items {
            self.produced.set(self.produced.get() + 1);
            sink.emit(item)?;
        }
        ControlFlow::Continue(())
    }
}

#[test]
fn test_zip_pairs() -> Result<()> {
    let a = vec![1, 2, 3];
    let b = vec!["a", "b", "c"];
    let pairs = to_vec(&zip((&a, &b)));
    let expected: Vec<_> = izip!(a.iter().copied(), b.iter().copied()).collect();
    assert_eq!(pairs, expected);
    Ok(())
}

#[test]
fn test_zip_three_and_four() -> Result<()> {
    let a = vec![1u32, 2, 3, 4];
    let b = vec![10u32, 20, 30, 40];
    let c = vec![100u32, 200, 300, 400];
    let d = vec![0.5f64, 1.5, 2.5, 3.5];

    let triples = to_vec(&zip((&a, &b, &c)));
    let expected: Vec<_> = izip!(
        a.iter().copied(),
        b.iter().copied(),
        c.iter().copied()
    )
    .collect();
    assert_eq!(triples, expected);

    let quads = to_vec(&zip((&a, &b, &c, &d)));
    let expected: Vec<_> = izip!(
        a.iter().copied(),
        b.iter().copied(),
        c.iter().copied(),
        d.iter().copied()
    )
    .collect();
    assert_eq!(quads, expected);
    Ok(())
}

#[test]
fn test_zip_truncates_at_shortest() -> Result<()> {
    let long = vec![1, 2, 3, 4, 5];
    let short = vec!['x', 'y', 'z'];
    assert_eq!(
        to_vec(&zip((&long, &short))),
        vec![(1, 'x'), (2, 'y'), (3, 'z')]
    );
    assert_eq!(
        to_vec(&zip((&short, &long))),
        vec![('x', 1), ('y', 2), ('z', 3)]
    );
    assert_eq!(zip((&long, &short)).len(), 3);
    assert_eq!(zip((&long, &short)).len_hint(), Some(3));
    Ok(())
}

#[test]
fn test_zip_generator_first_component() -> Result<()> {
    let produced = Cell::new(0);
    let generator = Generator {
        items: vec![0, 1, 2, 3, 4],
        produced: &produced,
    };
    let short = vec!['x', 'y', 'z'];
    let pairs = to_vec(&zip((generator, &short)));
    assert_eq!(pairs, vec![(0, 'x'), (1, 'y'), (2, 'z')]);
    // The fourth element was produced, found no partner and was dropped;
    // the fifth was never produced.
    assert_eq!(produced.get(), 4);
    Ok(())
}

#[test]
fn test_zip_early_break_stops_production() -> Result<()> {
    let produced = Cell::new(0);
    let generator = Generator {
        items: vec![10, 20, 30, 40, 50],
        produced: &produced,
    };
    let other = vec![0i32; 5];
    let mut taken = Vec::new();
    let flow = zip((generator, &other)).for_each_until(&mut |pair: (u32, i32)| {
        taken.push(pair);
        if taken.len() == 2 {
            ControlFlow::Break("enough")
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(flow, ControlFlow::Break("enough"));
    assert_eq!(taken, vec![(10, 0), (20, 0)]);
    assert_eq!(produced.get(), 2);
    Ok(())
}

#[test]
fn test_zip_unzip_returns_inputs() -> Result<()> {
    let a = vec![1, 2];
    let b = vec![3, 4];
    let (ra, rb) = zip((&a, &b)).unzip();
    assert!(std::ptr::eq(ra, &a));
    assert!(std::ptr::eq(rb, &b));

    let (va, vb) = zip((a.clone(), b.clone())).unzip();
    assert_eq!(va, a);
    assert_eq!(vb, b);
    Ok(())
}

#[test]
fn test_zip_verify() -> Result<()> {
    env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init()?;
    let a = vec![1, 2, 3];
    let b = vec![4, 5, 6];
    let c = vec![7, 8];
    assert!(zip((&a, &b)).verify());
    assert!(!zip((&a, &c)).verify());
    assert!(!zip((&a, &b, &c)).verify());
    Ok(())
}

#[test]
fn test_zip_any_pads_with_none() -> Result<()> {
    let long = vec![1, 2, 3];
    let short = vec!["a"];
    assert_eq!(
        to_vec(&zip_any(&long, &short)),
        vec![(Some(1), Some("a")), (Some(2), None), (Some(3), None)]
    );
    assert_eq!(
        to_vec(&zip_any(&short, &long)),
        vec![(Some("a"), Some(1)), (None, Some(2)), (None, Some(3))]
    );
    assert_eq!(zip_any(&long, &short).len_hint(), Some(3));

    let empty: Vec<i32> = vec![];
    assert_eq!(to_vec(&zip_any(&empty, &empty)), vec![]);
    Ok(())
}
