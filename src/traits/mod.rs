/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Capability traits for sequences, cursors and sinks.

A [`Sequence`] is anything that can deliver its elements in order to a
[`Sink`] (*push traversal*); the sink's [`ControlFlow`](std::ops::ControlFlow)
answer is the only cancellation mechanism, and producers propagate a
`Break` without visiting further elements. A sequence may additionally
expose a reusable cursor ([`Indexed`]), backward movement
([`Bidirectional`]), offset arithmetic ([`RandomAccess`]), a
constant-time ([`ExactSize`]) or compile-time ([`StaticLen`]) element
count, and the [`StableCursor`] marker.

Capabilities are resolved at compile time: adaptors select their
algorithms through trait bounds, so requesting an operation an input
cannot support is a type error, never a runtime failure.

*/

pub mod cursor;
pub mod sequence;
pub mod sink;

pub use cursor::*;
pub use sequence::*;
pub use sink::*;
