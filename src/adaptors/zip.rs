/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::ops::ControlFlow;

use crate::traits::{
    Bidirectional, ExactSize, Indexed, RandomAccess, Sequence, Sink, StableCursor,
};

/// Zips together a tuple of sequences.
///
/// A wrapper tuple struct that pairs up the elements of its component
/// sequences positionally, providing in return a sequence of tuples that
/// stops at the shortest component. Implemented for tuples of two, three
/// and four sequences.
///
/// The first component drives the traversal, so it is the only one that
/// may be a generator-only sequence (one implementing [`Sequence`] but
/// not [`Indexed`]); all other components need a cursor. When every
/// component has a cursor, the zip itself is [`Indexed`] — and
/// [`Bidirectional`] or [`RandomAccess`] when all components are — with a
/// composed cursor holding one component cursor per input.
///
/// Component cursors move in lock-step, so the composed cursor compares
/// equal by its first component alone, and [`is_at_end`](Indexed::is_at_end)
/// checks the first component, with a `debug_assert!` that the others
/// agree. In the cursor form the components are assumed to have the same
/// length; use [`Zip::verify`] to check with a complete scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Zip<T>(T);

/// Creates a [`Zip`] over a tuple of sequences.
///
/// ```
/// use lazyseq::prelude::*;
///
/// let pairs = to_vec(&zip((vec![1, 2], vec!["a", "b"])));
/// assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
/// ```
pub fn zip<T>(seqs: T) -> Zip<T>
where
    Zip<T>: Sequence,
{
    Zip(seqs)
}

impl<T> Zip<T> {
    /// Returns the component sequences, exactly as they were passed to
    /// [`zip`] (references in, references out).
    pub fn unzip(self) -> T {
        self.0
    }
}

/// The composed cursor of a [`Zip`]: a tuple of component cursors.
///
/// Equality compares the first component only; components are assumed to
/// stay in lock-step.
#[derive(Clone, Debug)]
pub struct ZipCursor<T>(T);

macro_rules! impl_zip {
    ($S0:ident $idx0:tt; $( $S:ident $c:ident $idx:tt );+) => {
        impl<$S0: Sequence, $($S: Indexed),+> Sequence for Zip<($S0, $($S,)+)> {
            type Item = ($S0::Item, $($S::Item,)+);

            fn for_each_until<Brk, K: Sink<Self::Item, Brk> + ?Sized>(
                &self,
                sink: &mut K,
            ) -> ControlFlow<Brk> {
                let seqs = &self.0;
                $( let mut $c = seqs.$idx.begin(); )+
                // Dereference all, deliver, and advance only on continue:
                // no cursor may move past an element that was never
                // delivered to the sink.
                let result = seqs.$idx0.for_each_until(
                    &mut |item: $S0::Item| -> ControlFlow<Option<Brk>> {
                        if $( seqs.$idx.is_at_end(&$c) )||+ {
                            return ControlFlow::Break(None);
                        }
                        match sink.emit((item, $( seqs.$idx.get(&$c), )+)) {
                            ControlFlow::Continue(()) => {
                                $( seqs.$idx.increment(&mut $c); )+
                                ControlFlow::Continue(())
                            }
                            ControlFlow::Break(b) => ControlFlow::Break(Some(b)),
                        }
                    },
                );
                match result {
                    ControlFlow::Break(Some(b)) => ControlFlow::Break(b),
                    // Break(None) is the zip itself truncating at the
                    // shortest component, not a break of the caller's.
                    _ => ControlFlow::Continue(()),
                }
            }

            fn len_hint(&self) -> Option<usize> {
                let seqs = &self.0;
                let mut len = seqs.$idx0.len_hint()?;
                $( len = len.min(seqs.$idx.len_hint()?); )+
                Some(len)
            }
        }

        impl<$S0: Sequence, $($S: Indexed),+> Zip<($S0, $($S,)+)> {
            /// Performs a complete scan of the component sequences,
            /// returning true if they are compatible, that is, they all
            /// have the same number of elements.
            pub fn verify(&self) -> bool {
                let seqs = &self.0;
                let lens = [seqs.$idx0.len_linear(), $( seqs.$idx.len_linear(), )+];
                if lens.windows(2).all(|w| w[0] == w[1]) {
                    true
                } else {
                    log::debug!("zip components disagree on length: {:?}", lens);
                    false
                }
            }
        }

        impl<$S0: ExactSize, $($S: ExactSize + Indexed),+> ExactSize for Zip<($S0, $($S,)+)> {
            fn len(&self) -> usize {
                let seqs = &self.0;
                let mut len = seqs.$idx0.len();
                $( len = len.min(seqs.$idx.len()); )+
                len
            }
        }

        impl<$S0: PartialEq, $($S,)+> PartialEq for ZipCursor<($S0, $($S,)+)> {
            #[inline(always)]
            fn eq(&self, other: &Self) -> bool {
                let a = &self.0;
                let b = &other.0;
                a.$idx0 == b.$idx0
            }
        }

        impl<$S0: Indexed, $($S: Indexed),+> Indexed for Zip<($S0, $($S,)+)> {
            type Cursor = ZipCursor<($S0::Cursor, $($S::Cursor,)+)>;

            fn begin(&self) -> Self::Cursor {
                let seqs = &self.0;
                ZipCursor((seqs.$idx0.begin(), $( seqs.$idx.begin(), )+))
            }

            fn end(&self) -> Self::Cursor {
                let seqs = &self.0;
                ZipCursor((seqs.$idx0.end(), $( seqs.$idx.end(), )+))
            }

            fn is_at_end(&self, cursor: &Self::Cursor) -> bool {
                let seqs = &self.0;
                let cur = &cursor.0;
                let at_end = seqs.$idx0.is_at_end(&cur.$idx0);
                $(
                    debug_assert_eq!(
                        seqs.$idx.is_at_end(&cur.$idx),
                        at_end,
                        "zip components out of lock-step"
                    );
                )+
                at_end
            }

            fn increment(&self, cursor: &mut Self::Cursor) {
                let seqs = &self.0;
                let cur = &mut cursor.0;
                seqs.$idx0.increment(&mut cur.$idx0);
                $( seqs.$idx.increment(&mut cur.$idx); )+
            }

            fn get(&self, cursor: &Self::Cursor) -> Self::Item {
                let seqs = &self.0;
                let cur = &cursor.0;
                (seqs.$idx0.get(&cur.$idx0), $( seqs.$idx.get(&cur.$idx), )+)
            }
        }

        impl<$S0: Bidirectional, $($S: Bidirectional),+> Bidirectional for Zip<($S0, $($S,)+)> {
            fn decrement(&self, cursor: &mut Self::Cursor) {
                let seqs = &self.0;
                let cur = &mut cursor.0;
                seqs.$idx0.decrement(&mut cur.$idx0);
                $( seqs.$idx.decrement(&mut cur.$idx); )+
            }
        }

        impl<$S0: RandomAccess, $($S: RandomAccess),+> RandomAccess for Zip<($S0, $($S,)+)> {
            fn advance(&self, cursor: &mut Self::Cursor, n: isize) {
                let seqs = &self.0;
                let cur = &mut cursor.0;
                seqs.$idx0.advance(&mut cur.$idx0, n);
                $( seqs.$idx.advance(&mut cur.$idx, n); )+
            }

            // All components move in lock-step, so the first component's
            // distance is the distance of the composed cursor.
            fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
                let seqs = &self.0;
                let a = &from.0;
                let b = &to.0;
                seqs.$idx0.distance(&a.$idx0, &b.$idx0)
            }
        }

        unsafe impl<$S0: StableCursor, $($S: StableCursor),+> StableCursor
            for Zip<($S0, $($S,)+)>
        {
        }
    };
}

impl_zip!(S0 0; S1 c1 1);
impl_zip!(S0 0; S1 c1 1; S2 c2 2);
impl_zip!(S0 0; S1 c1 1; S2 c2 2; S3 c3 3);

/// Zips two sequences without truncating: once one side runs out, the
/// remaining elements of the other are paired with `None`.
#[derive(Clone, Debug)]
pub struct ZipAny<A, B> {
    first: A,
    second: B,
}

/// Creates a [`ZipAny`] over two sequences.
///
/// ```
/// use lazyseq::prelude::*;
///
/// let pairs = to_vec(&zip_any(vec![1, 2, 3], vec!["a"]));
/// assert_eq!(
///     pairs,
///     vec![(Some(1), Some("a")), (Some(2), None), (Some(3), None)]
/// );
/// ```
pub fn zip_any<A: Indexed, B: Indexed>(first: A, second: B) -> ZipAny<A, B> {
    ZipAny { first, second }
}

impl<A: Indexed, B: Indexed> Sequence for ZipAny<A, B> {
    type Item = (Option<A::Item>, Option<B::Item>);

    fn for_each_until<Brk, K: Sink<Self::Item, Brk> + ?Sized>(
        &self,
        sink: &mut K,
    ) -> ControlFlow<Brk> {
        let mut ca = self.first.begin();
        let mut cb = self.second.begin();
        loop {
            match (self.first.is_at_end(&ca), self.second.is_at_end(&cb)) {
                (true, true) => return ControlFlow::Continue(()),
                (false, true) => {
                    sink.emit((Some(self.first.get(&ca)), None))?;
                    self.first.increment(&mut ca);
                }
                (true, false) => {
                    sink.emit((None, Some(self.second.get(&cb))))?;
                    self.second.increment(&mut cb);
                }
                (false, false) => {
                    sink.emit((Some(self.first.get(&ca)), Some(self.second.get(&cb))))?;
                    self.first.increment(&mut ca);
                    self.second.increment(&mut cb);
                }
            }
        }
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.first.len_hint()?.max(self.second.len_hint()?))
    }
}
