/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::traits::{Indexed, Sequence, Sink};

/// One step of an ordered two-sequence merge, as classified by
/// [`interleave`]: an element present only in the first sequence, only in
/// the second, or a matching pair present in both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MergeItem<A, B> {
    /// An element of the first sequence with no match in the second.
    First(A),
    /// An element of the second sequence with no match in the first.
    Second(B),
    /// A matching pair, one element from each sequence.
    Both(A, B),
}

/// Merges two sequences sorted under `comp`, delivering every element to
/// `sink` tagged with the sequence(s) it came from.
///
/// Both inputs must be sorted and free of duplicates under `comp`;
/// elements comparing equal across the two inputs are delivered once, as
/// [`MergeItem::Both`]. The merge is a single linear pass with one cursor
/// per input, and stops early if the sink breaks.
pub fn interleave<A, B, Brk, C, K>(
    first: &A,
    second: &B,
    comp: &C,
    sink: &mut K,
) -> ControlFlow<Brk>
where
    A: Indexed,
    B: Indexed,
    C: Fn(&A::Item, &B::Item) -> Ordering,
    K: Sink<MergeItem<A::Item, B::Item>, Brk> + ?Sized,
{
    let mut ca = first.begin();
    let mut cb = second.begin();
    loop {
        match (first.is_at_end(&ca), second.is_at_end(&cb)) {
            (true, true) => return ControlFlow::Continue(()),
            (false, true) => {
                sink.emit(MergeItem::First(first.get(&ca)))?;
                first.increment(&mut ca);
            }
            (true, false) => {
                sink.emit(MergeItem::Second(second.get(&cb)))?;
                second.increment(&mut cb);
            }
            (false, false) => {
                let a = first.get(&ca);
                let b = second.get(&cb);
                match comp(&a, &b) {
                    Ordering::Less => {
                        sink.emit(MergeItem::First(a))?;
                        first.increment(&mut ca);
                    }
                    Ordering::Greater => {
                        sink.emit(MergeItem::Second(b))?;
                        second.increment(&mut cb);
                    }
                    Ordering::Equal => {
                        sink.emit(MergeItem::Both(a, b))?;
                        first.increment(&mut ca);
                        second.increment(&mut cb);
                    }
                }
            }
        }
    }
}

/// Set intersection or difference of two sorted sequences, selected at
/// compile time.
///
/// Yields the elements of the first sequence that are (`INTERSECTION`) or
/// are not (`!INTERSECTION`) matched in the second, in the first
/// sequence's order, via a linear [`interleave`] pass. With `SUBSET` the
/// second sequence is declared to be a subset of the first: an unmatched
/// element of the second is then a contract violation, checked by
/// `debug_assert!` in debug builds.
///
/// Built by [`intersect`], [`difference`], [`subset_intersect`] and
/// [`subset_difference`].
#[derive(Clone, Debug)]
pub struct MergeSetOp<const INTERSECTION: bool, const SUBSET: bool, A, B, C> {
    first: A,
    second: B,
    comp: C,
}

macro_rules! merge_set_op_ctor {
    ($(#[$meta:meta])* $name:ident, $intersection:literal, $subset:literal) => {
        $(#[$meta])*
        pub fn $name<A, B, C>(
            first: A,
            second: B,
            comp: C,
        ) -> MergeSetOp<$intersection, $subset, A, B, C>
        where
            A: Indexed,
            B: Indexed,
            C: Fn(&A::Item, &B::Item) -> Ordering,
        {
            MergeSetOp {
                first,
                second,
                comp,
            }
        }
    };
}

merge_set_op_ctor!(
    /// The elements of `first` that are matched in `second`, in `first`'s
    /// order. Both inputs must be sorted and duplicate-free under `comp`.
    ///
    /// ```
    /// use lazyseq::prelude::*;
    ///
    /// let a = vec![1, 3, 5, 7];
    /// let b = vec![3, 4, 7];
    /// assert_eq!(to_vec(&intersect(&a, &b, |x, y| x.cmp(y))), vec![3, 7]);
    /// ```
    intersect,
    true,
    false
);

merge_set_op_ctor!(
    /// The elements of `first` that are not matched in `second`, in
    /// `first`'s order. Both inputs must be sorted and duplicate-free
    /// under `comp`.
    ///
    /// ```
    /// use lazyseq::prelude::*;
    ///
    /// let a = vec![1, 3, 5, 7];
    /// let b = vec![3, 4, 7];
    /// assert_eq!(to_vec(&difference(&a, &b, |x, y| x.cmp(y))), vec![1, 5]);
    /// ```
    difference,
    false,
    false
);

merge_set_op_ctor!(
    /// Like [`intersect`], additionally declaring that `second` is a
    /// subset of `first`; the result is then `second` itself, re-ordered
    /// to `first`'s order. Checked by `debug_assert!`.
    subset_intersect,
    true,
    true
);

merge_set_op_ctor!(
    /// Like [`difference`], additionally declaring that `second` is a
    /// subset of `first`. Checked by `debug_assert!`.
    subset_difference,
    false,
    true
);

impl<const INTERSECTION: bool, const SUBSET: bool, A, B, C> Sequence
    for MergeSetOp<INTERSECTION, SUBSET, A, B, C>
where
    A: Indexed,
    B: Indexed,
    C: Fn(&A::Item, &B::Item) -> Ordering,
{
    type Item = A::Item;

    fn for_each_until<Brk, K: Sink<Self::Item, Brk> + ?Sized>(
        &self,
        sink: &mut K,
    ) -> ControlFlow<Brk> {
        interleave(
            &self.first,
            &self.second,
            &self.comp,
            &mut |item: MergeItem<A::Item, B::Item>| -> ControlFlow<Brk> {
                match item {
                    MergeItem::First(a) => {
                        if INTERSECTION {
                            ControlFlow::Continue(())
                        } else {
                            sink.emit(a)
                        }
                    }
                    MergeItem::Second(_) => {
                        debug_assert!(
                            !SUBSET,
                            "element of the second sequence missing from the first"
                        );
                        ControlFlow::Continue(())
                    }
                    MergeItem::Both(a, _) => {
                        if INTERSECTION {
                            sink.emit(a)
                        } else {
                            ControlFlow::Continue(())
                        }
                    }
                }
            },
        )
    }
}

/// Filters a sequence by membership in a hash set, keeping (`KEEP`) or
/// dropping (`!KEEP`) the members.
///
/// The unsorted counterpart of [`MergeSetOp`]: no ordering is required of
/// either side, at the cost of hashing every element. The set may be held
/// by value or by reference. Built by [`set_intersect`] and
/// [`set_difference`].
#[derive(Clone, Debug)]
pub struct MembershipFilter<const KEEP: bool, A, S> {
    seq: A,
    set: S,
}

/// The elements of `seq` that are members of `set`, in `seq`'s order.
///
/// ```
/// use std::collections::HashSet;
/// use lazyseq::prelude::*;
///
/// let seq = vec![5, 1, 4, 1];
/// let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(to_vec(&set_intersect(&seq, &set)), vec![1, 1]);
/// ```
pub fn set_intersect<A, S>(seq: A, set: S) -> MembershipFilter<true, A, S>
where
    A: Sequence,
    A::Item: Eq + Hash,
    S: Borrow<HashSet<A::Item>>,
{
    MembershipFilter { seq, set }
}

/// The elements of `seq` that are not members of `set`, in `seq`'s order.
pub fn set_difference<A, S>(seq: A, set: S) -> MembershipFilter<false, A, S>
where
    A: Sequence,
    A::Item: Eq + Hash,
    S: Borrow<HashSet<A::Item>>,
{
    MembershipFilter { seq, set }
}

impl<const KEEP: bool, A, S> Sequence for MembershipFilter<KEEP, A, S>
where
    A: Sequence,
    A::Item: Eq + Hash,
    S: Borrow<HashSet<A::Item>>,
{
    type Item = A::Item;

    fn for_each_until<B, K: Sink<Self::Item, B> + ?Sized>(&self, sink: &mut K) -> ControlFlow<B> {
        let set = self.set.borrow();
        self.seq.for_each_until(&mut |item: A::Item| -> ControlFlow<B> {
            if set.contains(&item) == KEEP {
                sink.emit(item)
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}
