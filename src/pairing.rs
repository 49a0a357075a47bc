// src/pairing.rs
//! Positional pairing of two axis sequences.
//!
//! Coordinates are paired index by index. Once the shorter sequence is
//! exhausted, the remaining coordinates of the longer one are paired with
//! nothing, and any combination involving a missing side is undefined.

use crate::error::{GeometryError, Result};
use std::iter::FusedIterator;

/// One position of a pairing between two axis sequences.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Paired<T> {
    /// Both sequences have a coordinate at this index.
    Both(T, T),
    /// Only the left sequence reaches this index.
    Left(T),
    /// Only the right sequence reaches this index.
    Right(T),
}

impl<T> Paired<T> {
    /// Combine both sides with `f`, or `None` if either side is missing.
    #[inline]
    pub fn combine<F>(self, f: F) -> Option<T>
    where
        F: FnOnce(T, T) -> T,
    {
        match self {
            Paired::Both(a, b) => Some(f(a, b)),
            Paired::Left(_) | Paired::Right(_) => None,
        }
    }

    /// True when both sides are present.
    #[inline]
    pub fn is_both(&self) -> bool {
        matches!(self, Paired::Both(..))
    }
}

/// Iterator returned by [`pair_axes`].
#[derive(Clone, Debug)]
pub struct PairAxes<'a, T> {
    left: &'a [T],
    right: &'a [T],
    index: usize,
}

/// Pair two axis sequences positionally over the union of their lengths.
pub fn pair_axes<'a, T: Copy>(left: &'a [T], right: &'a [T]) -> PairAxes<'a, T> {
    PairAxes { left, right, index: 0 }
}

impl<'a, T: Copy> Iterator for PairAxes<'a, T> {
    type Item = Paired<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.index;
        let item = match (self.left.get(i), self.right.get(i)) {
            (Some(&a), Some(&b)) => Paired::Both(a, b),
            (Some(&a), None) => Paired::Left(a),
            (None, Some(&b)) => Paired::Right(b),
            (None, None) => return None,
        };
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.left.len().max(self.right.len()) - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, T: Copy> ExactSizeIterator for PairAxes<'a, T> {}
impl<'a, T: Copy> FusedIterator for PairAxes<'a, T> {}

/// Combine two axis sequences coordinate-wise, rejecting unequal lengths.
pub fn combine_axes<T, F>(left: &[T], right: &[T], mut f: F) -> Result<Box<[T]>>
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    if left.len() != right.len() {
        tracing::debug!(
            left = left.len(),
            right = right.len(),
            "rejecting coordinate-wise operation on mismatched dimensions"
        );
        return Err(GeometryError::DimensionMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(left
        .iter()
        .zip(right)
        .map(|(&a, &b)| f(a, b))
        .collect())
}

/// Combine two axis sequences coordinate-wise over the union of their lengths.
///
/// Positions past the end of the shorter sequence come back as `None`
/// instead of being padded with zero.
pub fn combine_axes_padded<T, F>(left: &[T], right: &[T], mut f: F) -> Vec<Option<T>>
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    if left.len() != right.len() {
        tracing::trace!(
            left = left.len(),
            right = right.len(),
            "padded operation leaves trailing axes undefined"
        );
    }
    pair_axes(left, right)
        .map(|pair| pair.combine(&mut f))
        .collect()
}
