/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Lazy sequence adaptors.

An adaptor wraps one or more input sequences and is itself a sequence;
nothing is computed until a traversal is driven. Each input is held
either by value or by reference, a choice made at the call site (every
capability trait is implemented for `&S`), and each adaptor implements
exactly the capability traits its inputs allow, so composition never
loses more capability than it must.

  - [`zip`] pairs up the elements of a tuple of sequences.
  - [`zip_any`] pairs two sequences of different lengths, padding the
    shorter side with `None`.
  - [`join`] flattens a sequence of sequences.
  - [`enumerate`] pairs every element with its position.
  - [`intersect`] / [`difference`] (and their `subset_` variants) merge
    two sorted sequences into their set intersection or difference;
    [`set_intersect`] / [`set_difference`] are the hash-based
    counterparts for unsorted inputs.

*/

pub mod enumerate;
pub mod join;
pub mod merge;
pub mod zip;

pub use enumerate::{enumerate, Enumerate, EnumerateCursor};
pub use join::{join, Join, JoinCursor};
pub use merge::{
    difference, interleave, intersect, set_difference, set_intersect, subset_difference,
    subset_intersect, MembershipFilter, MergeItem, MergeSetOp,
};
pub use zip::{zip, zip_any, Zip, ZipAny, ZipCursor};
