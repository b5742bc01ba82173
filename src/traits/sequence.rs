/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use no_break::Unbreakable;
use std::ops::ControlFlow;

use impl_tools::autoimpl;
use no_break::NoBreak;

use super::Sink;

/// Push-style traversal, the minimum capability of every sequence.
///
/// A sequence delivers its elements, in order, to a [`Sink`]; the sink
/// answers each element with a [`ControlFlow`] signal, and the sequence
/// must stop on [`Break`](ControlFlow::Break) and return the break value
/// unchanged. This is the substrate every adaptor is built on when at
/// least one input has no reusable cursor.
///
/// Elements are delivered by value; container sequences require their
/// element type to be [`Clone`]. Adaptors implementing this trait hold
/// their inputs either by value or by reference (the trait is implemented
/// for `&S`), a choice made once at construction and encoded in the
/// adaptor's type.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S)]
pub trait Sequence {
    /// The element type.
    type Item;

    /// Delivers every element to `sink`, stopping early if the sink
    /// breaks.
    ///
    /// Returns the sink's break value, or `Continue(())` if the whole
    /// sequence was delivered.
    fn for_each_until<B, K: Sink<Self::Item, B> + ?Sized>(&self, sink: &mut K)
        -> ControlFlow<B>;

    /// Returns the number of elements, if it is known in constant time.
    fn len_hint(&self) -> Option<usize> {
        None
    }

    /// Returns the number of elements, possibly by a full traversal.
    ///
    /// Always computable; O(n) in the worst case.
    fn len_linear(&self) -> usize {
        match self.len_hint() {
            Some(len) => len,
            None => {
                let mut count = 0;
                self.for_each_until(&mut |_: Self::Item| -> ControlFlow<Unbreakable> {
                    count += 1;
                    ControlFlow::Continue(())
                })
                .continue_value_no_break();
                count
            }
        }
    }
}

/// A sequence whose element count is known in constant time.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S)]
pub trait ExactSize: Sequence {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A sequence whose element count is known at compile time.
///
/// Arrays are the canonical case. [`Join`](crate::adaptors::Join) offers
/// a constant-time [`len`](ExactSize::len) only when every inner sequence
/// has the same statically known size, which is expressed by requiring
/// this trait of the outer sequence's elements.
pub trait StaticLen: ExactSize {
    /// The number of elements.
    const LEN: usize;
}

impl<S: StaticLen + ?Sized> StaticLen for &S {
    const LEN: usize = S::LEN;
}

impl<S: StaticLen + ?Sized> StaticLen for &mut S {
    const LEN: usize = S::LEN;
}
