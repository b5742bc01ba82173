/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Sinks and helpers for driving traversals.

*/

use no_break::Unbreakable;
use std::ops::ControlFlow;

use no_break::NoBreak;

use crate::traits::{Indexed, Sequence, Sink};

/// A sink that collects every delivered element into a [`Vec`].
///
/// Its [`chunk`](Sink::chunk) implementation reserves capacity upfront
/// when the subsequence advertises a length, so adaptors that forward
/// whole subsequences ([`join`](crate::adaptors::join) in particular)
/// collect without reallocation churn.
#[derive(Clone, Debug)]
pub struct Collect<T> {
    items: Vec<T>,
}

impl<T> Collect<T> {
    pub fn new() -> Self {
        Collect { items: Vec::new() }
    }

    /// Returns the collected elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Collect<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> Sink<T, B> for Collect<T> {
    #[inline(always)]
    fn emit(&mut self, item: T) -> ControlFlow<B> {
        self.items.push(item);
        ControlFlow::Continue(())
    }

    fn chunk<S>(&mut self, seq: &S) -> ControlFlow<B>
    where
        S: Sequence<Item = T> + ?Sized,
    {
        if let Some(len) = seq.len_hint() {
            self.items.reserve(len);
        }
        seq.for_each_until(self)
    }
}

/// Collects a whole sequence into a [`Vec`].
pub fn to_vec<S: Sequence + ?Sized>(seq: &S) -> Vec<S::Item> {
    let mut collect = Collect::new();
    seq.for_each_until::<Unbreakable, _>(&mut collect)
        .continue_value_no_break();
    collect.into_vec()
}

/// Returns whether two sequences have equal elements in equal order.
///
/// The first sequence drives the traversal, so it may be generator-only;
/// the second is walked with a cursor.
pub fn eq_seq<A, B>(first: &A, second: &B) -> bool
where
    A: Sequence + ?Sized,
    B: Indexed + ?Sized,
    A::Item: PartialEq<B::Item>,
{
    let mut cursor = second.begin();
    let matched = first.for_each_until(&mut |item: A::Item| -> ControlFlow<()> {
        if second.is_at_end(&cursor) || item != second.get(&cursor) {
            return ControlFlow::Break(());
        }
        second.increment(&mut cursor);
        ControlFlow::Continue(())
    });
    matched.is_continue() && second.is_at_end(&cursor)
}

/// Returns the first element satisfying `pred`, carried out of the
/// traversal as the break value.
pub fn find<S, P>(seq: &S, mut pred: P) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    seq.for_each_until(&mut |item: S::Item| -> ControlFlow<S::Item> {
        if pred(&item) {
            ControlFlow::Break(item)
        } else {
            ControlFlow::Continue(())
        }
    })
    .break_value()
}
