/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::ops::ControlFlow;

use crate::traits::{
    Bidirectional, ExactSize, Indexed, RandomAccess, Sequence, Sink, StableCursor,
};

/// Pairs every element of a sequence with its position.
///
/// Transforms `[x, y, z]` into `[(0, x), (1, y), (2, z)]`. The push form
/// works for any [`Sequence`], including generator-only ones, by keeping
/// a counter alongside the traversal; when the input is [`Indexed`] and
/// [`ExactSize`] the adaptor has a full cursor form as well, equivalent
/// to zipping the input with `0..len`.
#[derive(Clone, Debug)]
pub struct Enumerate<S>(S);

/// Creates an [`Enumerate`] over a sequence.
///
/// ```
/// use lazyseq::prelude::*;
///
/// let indexed = to_vec(&enumerate(vec!["x", "y", "z"]));
/// assert_eq!(indexed, vec![(0, "x"), (1, "y"), (2, "z")]);
/// ```
pub fn enumerate<S: Sequence>(seq: S) -> Enumerate<S> {
    Enumerate(seq)
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);

    fn for_each_until<B, K: Sink<Self::Item, B> + ?Sized>(&self, sink: &mut K) -> ControlFlow<B> {
        let mut pos = 0;
        self.0.for_each_until(&mut |item: S::Item| -> ControlFlow<B> {
            let flow = sink.emit((pos, item));
            if flow.is_continue() {
                pos += 1;
            }
            flow
        })
    }

    #[inline(always)]
    fn len_hint(&self) -> Option<usize> {
        self.0.len_hint()
    }
}

impl<S: ExactSize> ExactSize for Enumerate<S> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// The composed cursor of an [`Enumerate`]: the position plus the inner
/// cursor. Equality compares the position only, in lock-step with the
/// inner cursor by construction.
#[derive(Clone, Debug)]
pub struct EnumerateCursor<C> {
    pos: usize,
    inner: C,
}

impl<C> PartialEq for EnumerateCursor<C> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

// The end cursor must carry the final position so that decrementing from
// the end is well defined, hence the ExactSize bound.
impl<S: Indexed + ExactSize> Indexed for Enumerate<S> {
    type Cursor = EnumerateCursor<S::Cursor>;

    fn begin(&self) -> Self::Cursor {
        EnumerateCursor {
            pos: 0,
            inner: self.0.begin(),
        }
    }

    fn end(&self) -> Self::Cursor {
        EnumerateCursor {
            pos: self.0.len(),
            inner: self.0.end(),
        }
    }

    fn is_at_end(&self, cursor: &Self::Cursor) -> bool {
        let at_end = self.0.is_at_end(&cursor.inner);
        debug_assert_eq!(cursor.pos == self.0.len(), at_end);
        at_end
    }

    fn increment(&self, cursor: &mut Self::Cursor) {
        cursor.pos += 1;
        self.0.increment(&mut cursor.inner);
    }

    fn get(&self, cursor: &Self::Cursor) -> Self::Item {
        (cursor.pos, self.0.get(&cursor.inner))
    }
}

impl<S: Bidirectional + ExactSize> Bidirectional for Enumerate<S> {
    fn decrement(&self, cursor: &mut Self::Cursor) {
        debug_assert!(cursor.pos > 0);
        cursor.pos -= 1;
        self.0.decrement(&mut cursor.inner);
    }
}

impl<S: RandomAccess + ExactSize> RandomAccess for Enumerate<S> {
    fn advance(&self, cursor: &mut Self::Cursor, n: isize) {
        cursor.pos = (cursor.pos as isize + n) as usize;
        self.0.advance(&mut cursor.inner, n);
    }

    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        to.pos as isize - from.pos as isize
    }
}

unsafe impl<S: StableCursor + ExactSize> StableCursor for Enumerate<S> {}
