/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use no_break::Unbreakable;
use std::ops::ControlFlow;

use no_break::NoBreak;

use crate::traits::{
    Bidirectional, ExactSize, Indexed, Sequence, Sink, StableCursor, StaticLen,
};

/// Flattens a sequence of sequences into one.
///
/// The push form delegates whole inner sequences to the sink via
/// [`Sink::chunk`], so a sink that can consume subsequences wholesale gets
/// its fast path; any [`Sequence`] of sequences qualifies. The cursor form
/// needs more: the outer sequence must be [`Indexed`] and its cursors must
/// be [stable](StableCursor), because the composed cursor stashes a copy
/// of the outer cursor and re-derives the current inner sequence from it
/// on every operation. Empty inner sequences are skipped transparently in
/// both directions.
///
/// A constant-time length is available only when every inner sequence has
/// the same statically known size ([`StaticLen`]); otherwise
/// [`len_linear`](Sequence::len_linear) sums the inner lengths.
#[derive(Clone, Debug)]
pub struct Join<O>(O);

/// Creates a [`Join`] over a sequence of sequences.
///
/// ```
/// use lazyseq::prelude::*;
///
/// let nested = vec![vec![1, 2], vec![], vec![3]];
/// assert_eq!(to_vec(&join(&nested)), vec![1, 2, 3]);
/// ```
pub fn join<O>(outer: O) -> Join<O>
where
    Join<O>: Sequence,
{
    Join(outer)
}

impl<O: Sequence> Sequence for Join<O>
where
    O::Item: Sequence,
{
    type Item = <O::Item as Sequence>::Item;

    fn for_each_until<B, K: Sink<Self::Item, B> + ?Sized>(&self, sink: &mut K) -> ControlFlow<B> {
        self.0
            .for_each_until(&mut |inner: O::Item| -> ControlFlow<B> { sink.chunk(&inner) })
    }

    fn len_linear(&self) -> usize {
        let mut total = 0;
        self.0
            .for_each_until(&mut |inner: O::Item| -> ControlFlow<Unbreakable> {
                total += inner.len_linear();
                ControlFlow::Continue(())
            })
            .continue_value_no_break();
        total
    }
}

impl<O: ExactSize> ExactSize for Join<O>
where
    O::Item: StaticLen,
{
    #[inline(always)]
    fn len(&self) -> usize {
        self.0.len() * <O::Item as StaticLen>::LEN
    }
}

impl<O: StaticLen> StaticLen for Join<O>
where
    O::Item: StaticLen,
{
    const LEN: usize = O::LEN * <O::Item as StaticLen>::LEN;
}

/// The composed cursor of a [`Join`]: a stashed copy of the outer cursor
/// plus a cursor into the inner sequence it denotes. The inner cursor is
/// `None` exactly at the end.
#[derive(Clone, Debug, PartialEq)]
pub struct JoinCursor<OC, IC> {
    outer: OC,
    inner: Option<IC>,
}

impl<O> Join<O>
where
    O: Indexed + StableCursor,
    O::Item: Indexed,
{
    /// Advances `outer` past empty inner sequences, returning a begin
    /// cursor into the first non-empty one, or `None` if the outer
    /// sequence is exhausted.
    fn find_valid(&self, outer: &mut O::Cursor) -> Option<<O::Item as Indexed>::Cursor> {
        while !self.0.is_at_end(outer) {
            let seq = self.0.get(outer);
            let inner = seq.begin();
            if !seq.is_at_end(&inner) {
                return Some(inner);
            }
            self.0.increment(outer);
        }
        None
    }
}

impl<O> Indexed for Join<O>
where
    O: Indexed + StableCursor,
    O::Item: Indexed,
{
    type Cursor = JoinCursor<O::Cursor, <O::Item as Indexed>::Cursor>;

    fn begin(&self) -> Self::Cursor {
        let mut outer = self.0.begin();
        let inner = self.find_valid(&mut outer);
        JoinCursor { outer, inner }
    }

    fn end(&self) -> Self::Cursor {
        JoinCursor {
            outer: self.0.end(),
            inner: None,
        }
    }

    #[inline(always)]
    fn is_at_end(&self, cursor: &Self::Cursor) -> bool {
        debug_assert_eq!(cursor.inner.is_none(), self.0.is_at_end(&cursor.outer));
        cursor.inner.is_none()
    }

    fn increment(&self, cursor: &mut Self::Cursor) {
        debug_assert!(cursor.inner.is_some(), "increment past the end");
        if let Some(inner) = cursor.inner.as_mut() {
            let seq = self.0.get(&cursor.outer);
            seq.increment(inner);
            if seq.is_at_end(inner) {
                self.0.increment(&mut cursor.outer);
                cursor.inner = self.find_valid(&mut cursor.outer);
            }
        }
    }

    fn get(&self, cursor: &Self::Cursor) -> Self::Item {
        let seq = self.0.get(&cursor.outer);
        match &cursor.inner {
            Some(inner) => seq.get(inner),
            None => panic!("dereferencing the end cursor"),
        }
    }
}

impl<O> Bidirectional for Join<O>
where
    O: Bidirectional + StableCursor,
    O::Item: Bidirectional,
{
    fn decrement(&self, cursor: &mut Self::Cursor) {
        if let Some(inner) = cursor.inner.as_mut() {
            let seq = self.0.get(&cursor.outer);
            if *inner != seq.begin() {
                seq.decrement(inner);
                return;
            }
        }
        // At the first element of an inner sequence (or at the end): step
        // the outer cursor back over empty inners to the last element of
        // the previous non-empty one.
        loop {
            debug_assert!(
                cursor.outer != self.0.begin(),
                "decrement past the beginning"
            );
            self.0.decrement(&mut cursor.outer);
            let seq = self.0.get(&cursor.outer);
            let mut inner = seq.end();
            if inner != seq.begin() {
                seq.decrement(&mut inner);
                cursor.inner = Some(inner);
                return;
            }
        }
    }

    fn rev_for_each_until<B, K: Sink<Self::Item, B> + ?Sized>(
        &self,
        sink: &mut K,
    ) -> ControlFlow<B> {
        self.0
            .rev_for_each_until(&mut |inner: O::Item| -> ControlFlow<B> {
                inner.rev_for_each_until(&mut *sink)
            })
    }
}

unsafe impl<O> StableCursor for Join<O>
where
    O: StableCursor,
    O::Item: StableCursor,
{
}
