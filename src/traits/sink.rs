/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::ops::ControlFlow;

use super::Sequence;

/// A consumer of sequence elements.
///
/// A sink is invoked once per delivered element and answers with a
/// [`ControlFlow`] signal: [`Continue`](ControlFlow::Continue) to request
/// more elements, [`Break`](ControlFlow::Break) to stop the traversal.
/// Producers must check the signal after every element and propagate a
/// `Break` upward without visiting further elements.
///
/// Any `FnMut(T) -> ControlFlow<B>` is a sink. Implementing the trait
/// directly is useful to override [`chunk`](Sink::chunk), the bulk
/// delivery fast path: adaptors that forward whole subsequences (such as
/// [`join`](crate::adaptors::join)) call `chunk` instead of delivering
/// element by element, so a sink that can consume a subsequence wholesale
/// (e.g., by reserving capacity upfront) gets a chance to do so.
pub trait Sink<T, B = ()> {
    /// Consumes one element, answering whether the traversal should go on.
    fn emit(&mut self, item: T) -> ControlFlow<B>;

    /// Consumes a whole subsequence.
    ///
    /// The default implementation delivers element by element via
    /// [`emit`](Sink::emit).
    fn chunk<S>(&mut self, seq: &S) -> ControlFlow<B>
    where
        S: Sequence<Item = T> + ?Sized,
    {
        seq.for_each_until(self)
    }
}

impl<T, B, F: FnMut(T) -> ControlFlow<B>> Sink<T, B> for F {
    #[inline(always)]
    fn emit(&mut self, item: T) -> ControlFlow<B> {
        self(item)
    }
}
