/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::ops::ControlFlow;

use impl_tools::autoimpl;

use super::{Sequence, Sink};

/// A sequence with a reusable cursor.
///
/// A cursor is a plain value denoting a position; two cursors obtained
/// from the same sequence value are comparable for equality, and the
/// [`end`](Indexed::end) cursor is reachable from [`begin`](Indexed::begin)
/// by repeated [`increment`](Indexed::increment) for any finite sequence.
///
/// All operations other than [`is_at_end`](Indexed::is_at_end) and
/// equality are undefined on an end cursor: callers must check
/// `is_at_end` first. Crossing the end via `increment` is a contract
/// violation, checked by `debug_assert!` in debug builds and unchecked in
/// release builds.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S)]
pub trait Indexed: Sequence {
    /// The cursor type.
    type Cursor: Clone + PartialEq;

    /// Returns a cursor at the first element.
    fn begin(&self) -> Self::Cursor;

    /// Returns the end cursor, one past the last element.
    fn end(&self) -> Self::Cursor;

    /// Returns whether `cursor` is at the end.
    fn is_at_end(&self, cursor: &Self::Cursor) -> bool;

    /// Moves `cursor` to the next position.
    fn increment(&self, cursor: &mut Self::Cursor);

    /// Returns the element at `cursor`.
    fn get(&self, cursor: &Self::Cursor) -> Self::Item;
}

/// A sequence whose cursors can also move backward.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S)]
pub trait Bidirectional: Indexed {
    /// Moves `cursor` to the previous position.
    ///
    /// Undefined if `cursor` is at [`begin`](Indexed::begin).
    fn decrement(&self, cursor: &mut Self::Cursor);

    /// Delivers every element to `sink` in reverse order, stopping early
    /// if the sink breaks.
    fn rev_for_each_until<B, K: Sink<Self::Item, B> + ?Sized>(
        &self,
        sink: &mut K,
    ) -> ControlFlow<B> {
        let begin = self.begin();
        let mut cursor = self.end();
        while cursor != begin {
            self.decrement(&mut cursor);
            sink.emit(self.get(&cursor))?;
        }
        ControlFlow::Continue(())
    }
}

/// A sequence whose cursors can move by arbitrary offsets.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S)]
pub trait RandomAccess: Bidirectional {
    /// Moves `cursor` by `n` positions, backward if `n` is negative.
    ///
    /// The resulting position must lie in `[begin, end]`.
    fn advance(&self, cursor: &mut Self::Cursor, n: isize);

    /// Returns the signed offset from `from` to `to`.
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize;
}

/// Marker trait for sequences whose cursors are safe to copy.
///
/// A *stashing* cursor is one whose dereferenced value is owned by the
/// cursor itself rather than by the underlying sequence; copying such a
/// cursor silently duplicates that state, and a composed cursor holding
/// the copy would not observe the same inner sequence instance. Adaptors
/// that store copies of inner cursors — the cursor form of
/// [`Join`](crate::adaptors::Join) stores a copy of the outer cursor —
/// require this marker, so composing over a stashing sequence is rejected
/// at compile time rather than checked at run time.
///
/// # Safety
///
/// [`get`](Indexed::get) must be deterministic: repeated calls with equal
/// cursors on the same sequence value must return equal elements, and the
/// cursors of the returned elements (when the elements are themselves
/// sequences) must be interchangeable between those calls.
pub unsafe trait StableCursor: Indexed {}

unsafe impl<S: StableCursor + ?Sized> StableCursor for &S {}
unsafe impl<S: StableCursor + ?Sized> StableCursor for &mut S {}
