/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::ops::{ControlFlow, Range};

use crate::traits::{
    Bidirectional, ExactSize, Indexed, RandomAccess, Sequence, Sink, StableCursor,
};

/// `Range<usize>` is the ascending-integer sequence: `0..n` paired with
/// another sequence via [`zip`](crate::adaptors::zip) is the classic way
/// to build a counted traversal over a sized input.
impl Sequence for Range<usize> {
    type Item = usize;

    fn for_each_until<B, K: Sink<usize, B> + ?Sized>(&self, sink: &mut K) -> ControlFlow<B> {
        for i in self.start..self.end {
            sink.emit(i)?;
        }
        ControlFlow::Continue(())
    }

    #[inline(always)]
    fn len_hint(&self) -> Option<usize> {
        Some(self.end.saturating_sub(self.start))
    }
}

impl ExactSize for Range<usize> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl Indexed for Range<usize> {
    type Cursor = usize;

    #[inline(always)]
    fn begin(&self) -> usize {
        self.start
    }

    #[inline(always)]
    fn end(&self) -> usize {
        self.end.max(self.start)
    }

    #[inline(always)]
    fn is_at_end(&self, cursor: &usize) -> bool {
        *cursor >= self.end
    }

    #[inline(always)]
    fn increment(&self, cursor: &mut usize) {
        debug_assert!(*cursor < self.end);
        *cursor += 1;
    }

    #[inline(always)]
    fn get(&self, cursor: &usize) -> usize {
        debug_assert!(self.start <= *cursor && *cursor < self.end);
        *cursor
    }
}

impl Bidirectional for Range<usize> {
    #[inline(always)]
    fn decrement(&self, cursor: &mut usize) {
        debug_assert!(*cursor > self.start);
        *cursor -= 1;
    }
}

impl RandomAccess for Range<usize> {
    #[inline(always)]
    fn advance(&self, cursor: &mut usize, n: isize) {
        let target = *cursor as isize + n;
        debug_assert!(self.start as isize <= target && target <= Indexed::end(self) as isize);
        *cursor = target as usize;
    }

    #[inline(always)]
    fn distance(&self, from: &usize, to: &usize) -> isize {
        *to as isize - *from as isize
    }
}

unsafe impl StableCursor for Range<usize> {}
