/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Sequence implementations for standard containers.

Slices, arrays, [`Vec`] and [`Range<usize>`](std::ops::Range) implement
the full capability set (cursor, decrement, random access, constant-time
size) with a `usize` cursor; arrays additionally expose their
compile-time size through [`StaticLen`](crate::traits::StaticLen).
Elements are delivered as clones, so these implementations require
`T: Clone`; for cheap traversal over expensive-to-clone payloads, use a
slice of references.

*/

mod range;
mod slice;
