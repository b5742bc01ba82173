/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::ops::ControlFlow;

use crate::traits::{
    Bidirectional, ExactSize, Indexed, RandomAccess, Sequence, Sink, StableCursor, StaticLen,
};

impl<T: Clone> Sequence for [T] {
    type Item = T;

    fn for_each_until<B, K: Sink<T, B> + ?Sized>(&self, sink: &mut K) -> ControlFlow<B> {
        for item in self {
            sink.emit(item.clone())?;
        }
        ControlFlow::Continue(())
    }

    #[inline(always)]
    fn len_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T: Clone> ExactSize for [T] {
    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T: Clone> Indexed for [T] {
    type Cursor = usize;

    #[inline(always)]
    fn begin(&self) -> usize {
        0
    }

    #[inline(always)]
    fn end(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn is_at_end(&self, cursor: &usize) -> bool {
        *cursor == self.len()
    }

    #[inline(always)]
    fn increment(&self, cursor: &mut usize) {
        debug_assert!(*cursor < self.len());
        *cursor += 1;
    }

    #[inline(always)]
    fn get(&self, cursor: &usize) -> T {
        self[*cursor].clone()
    }
}

impl<T: Clone> Bidirectional for [T] {
    #[inline(always)]
    fn decrement(&self, cursor: &mut usize) {
        debug_assert!(*cursor > 0);
        *cursor -= 1;
    }
}

impl<T: Clone> RandomAccess for [T] {
    #[inline(always)]
    fn advance(&self, cursor: &mut usize, n: isize) {
        let target = *cursor as isize + n;
        debug_assert!(0 <= target && target <= self.len() as isize);
        *cursor = target as usize;
    }

    #[inline(always)]
    fn distance(&self, from: &usize, to: &usize) -> isize {
        *to as isize - *from as isize
    }
}

unsafe impl<T: Clone> StableCursor for [T] {}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    fn for_each_until<B, K: Sink<T, B> + ?Sized>(&self, sink: &mut K) -> ControlFlow<B> {
        self.as_slice().for_each_until(sink)
    }

    #[inline(always)]
    fn len_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T: Clone> ExactSize for Vec<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T: Clone> Indexed for Vec<T> {
    type Cursor = usize;

    #[inline(always)]
    fn begin(&self) -> usize {
        0
    }

    #[inline(always)]
    fn end(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn is_at_end(&self, cursor: &usize) -> bool {
        self.as_slice().is_at_end(cursor)
    }

    #[inline(always)]
    fn increment(&self, cursor: &mut usize) {
        self.as_slice().increment(cursor)
    }

    #[inline(always)]
    fn get(&self, cursor: &usize) -> T {
        <[T] as Indexed>::get(self.as_slice(), cursor)
    }
}

impl<T: Clone> Bidirectional for Vec<T> {
    #[inline(always)]
    fn decrement(&self, cursor: &mut usize) {
        self.as_slice().decrement(cursor)
    }
}

impl<T: Clone> RandomAccess for Vec<T> {
    #[inline(always)]
    fn advance(&self, cursor: &mut usize, n: isize) {
        self.as_slice().advance(cursor, n)
    }

    #[inline(always)]
    fn distance(&self, from: &usize, to: &usize) -> isize {
        self.as_slice().distance(from, to)
    }
}

unsafe impl<T: Clone> StableCursor for Vec<T> {}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn for_each_until<B, K: Sink<T, B> + ?Sized>(&self, sink: &mut K) -> ControlFlow<B> {
        self.as_slice().for_each_until(sink)
    }

    #[inline(always)]
    fn len_hint(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T: Clone, const N: usize> ExactSize for [T; N] {
    #[inline(always)]
    fn len(&self) -> usize {
        N
    }
}

impl<T: Clone, const N: usize> StaticLen for [T; N] {
    const LEN: usize = N;
}

impl<T: Clone, const N: usize> Indexed for [T; N] {
    type Cursor = usize;

    #[inline(always)]
    fn begin(&self) -> usize {
        0
    }

    #[inline(always)]
    fn end(&self) -> usize {
        N
    }

    #[inline(always)]
    fn is_at_end(&self, cursor: &usize) -> bool {
        self.as_slice().is_at_end(cursor)
    }

    #[inline(always)]
    fn increment(&self, cursor: &mut usize) {
        self.as_slice().increment(cursor)
    }

    #[inline(always)]
    fn get(&self, cursor: &usize) -> T {
        <[T] as Indexed>::get(self.as_slice(), cursor)
    }
}

impl<T: Clone, const N: usize> Bidirectional for [T; N] {
    #[inline(always)]
    fn decrement(&self, cursor: &mut usize) {
        self.as_slice().decrement(cursor)
    }
}

impl<T: Clone, const N: usize> RandomAccess for [T; N] {
    #[inline(always)]
    fn advance(&self, cursor: &mut usize, n: isize) {
        self.as_slice().advance(cursor, n)
    }

    #[inline(always)]
    fn distance(&self, from: &usize, to: &usize) -> isize {
        self.as_slice().distance(from, to)
    }
}

unsafe impl<T: Clone, const N: usize> StableCursor for [T; N] {}
