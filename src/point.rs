// src/point.rs
//! An absolute position in n-dimensional space.

use crate::error::Result;
use crate::pairing::{combine_axes, combine_axes_padded};
use crate::types::Scalar;
use crate::vector::Vector;
use num_traits::{Float, Zero};
use std::ops::{Add, Index, Sub};

/// An n-dimensional position.
///
/// `Point` and [`Vector`] share a representation but are distinct types:
/// positions translate by offsets, and the difference of two positions is an
/// offset. Axes are fixed at construction and never mutated.
///
/// ```
/// use ndpoint::{Point, Vector};
///
/// let p = Point::from([0, 0]);
/// let q = &p + &Vector::from([1, 1]);
/// assert_eq!(q, Point::from([1, 1]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point<T = Scalar> {
    axes: Box<[T]>,
}

impl<T> Point<T> {
    /// Build a point by eagerly collecting `axes`.
    #[inline]
    pub fn new<I>(axes: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            axes: axes.into_iter().collect(),
        }
    }

    /// The stored coordinates.
    #[inline(always)]
    pub fn axes(&self) -> &[T] {
        &self.axes
    }

    /// Number of axes.
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.axes.len()
    }

    /// Coordinate at `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.axes.get(index)
    }

    /// Give up the point and return its coordinates.
    pub fn into_axes(self) -> Vec<T> {
        self.axes.into_vec()
    }
}

impl<T: Zero + Clone> Point<T> {
    /// The origin of a `dim`-dimensional space.
    pub fn origin(dim: usize) -> Self {
        Self {
            axes: vec![T::zero(); dim].into_boxed_slice(),
        }
    }
}

impl<T> Point<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T>,
{
    /// Translate by `offset`, or an error if the dimensions differ.
    pub fn try_add(&self, offset: &Vector<T>) -> Result<Self> {
        combine_axes(&self.axes, offset.axes(), |p, v| p + v).map(|axes| Self { axes })
    }

    /// The offset `self - other`, or an error if the dimensions differ.
    pub fn try_sub(&self, other: &Self) -> Result<Vector<T>> {
        combine_axes(&self.axes, &other.axes, |a, b| a - b).map(Vector::from_axes)
    }

    /// The offset that takes `self` to `other`, i.e. `other - self`.
    ///
    /// ```
    /// use ndpoint::{Point, Vector};
    ///
    /// let d = Point::from([1, 2, 3]).displacement_to(&Point::from([4, 5, 6])).unwrap();
    /// assert_eq!(d, Vector::from([3, 3, 3]));
    /// ```
    pub fn displacement_to(&self, other: &Self) -> Result<Vector<T>> {
        other.try_sub(self)
    }

    /// Translate by `offset` over the union of both dimensions.
    ///
    /// Axes only one operand has come back as `None` rather than being
    /// padded with zero, so a mismatched translation is visibly incomplete.
    pub fn add_padded(&self, offset: &Vector<T>) -> Vec<Option<T>> {
        combine_axes_padded(&self.axes, offset.axes(), |p, v| p + v)
    }

    /// Coordinate-wise `self - other` over the union of both dimensions.
    pub fn sub_padded(&self, other: &Self) -> Vec<Option<T>> {
        combine_axes_padded(&self.axes, &other.axes, |a, b| a - b)
    }
}

impl<T: Float> Point<T> {
    /// Point halfway between `self` and `other`.
    pub fn midpoint(&self, other: &Self) -> Result<Self> {
        let half = T::one() / (T::one() + T::one());
        let d = self.displacement_to(other)?;
        self.try_add(&d.scale(half))
    }
}

impl<T> FromIterator<T> for Point<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T, const N: usize> From<[T; N]> for Point<T> {
    fn from(arr: [T; N]) -> Self {
        Self::new(arr)
    }
}

impl<T> From<Vec<T>> for Point<T> {
    fn from(axes: Vec<T>) -> Self {
        Self {
            axes: axes.into_boxed_slice(),
        }
    }
}

impl<T> From<Point<T>> for Vec<T> {
    fn from(p: Point<T>) -> Vec<T> {
        p.into_axes()
    }
}

impl<T> Index<usize> for Point<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.axes[index]
    }
}

impl<T> AsRef<[T]> for Point<T> {
    fn as_ref(&self) -> &[T] {
        &self.axes
    }
}

// Point + Vector -> Point
impl<'a, T> Add<&'a Vector<T>> for &'a Point<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Point<T>;

    /// # Panics
    /// If the operands have a different number of axes.
    fn add(self, rhs: &'a Vector<T>) -> Point<T> {
        match combine_axes(&self.axes, rhs.axes(), |p, v| p + v) {
            Ok(axes) => Point { axes },
            Err(err) => panic!("cannot translate point: {err}"),
        }
    }
}

impl<T> Add<Vector<T>> for Point<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Point<T>;
    #[inline]
    fn add(self, rhs: Vector<T>) -> Point<T> {
        &self + &rhs
    }
}

// Point - Vector -> Point
impl<'a, T> Sub<&'a Vector<T>> for &'a Point<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Point<T>;

    /// # Panics
    /// If the operands have a different number of axes.
    fn sub(self, rhs: &'a Vector<T>) -> Point<T> {
        match combine_axes(&self.axes, rhs.axes(), |p, v| p - v) {
            Ok(axes) => Point { axes },
            Err(err) => panic!("cannot translate point: {err}"),
        }
    }
}

impl<T> Sub<Vector<T>> for Point<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Point<T>;
    #[inline]
    fn sub(self, rhs: Vector<T>) -> Point<T> {
        &self - &rhs
    }
}

// Point - Point -> Vector
impl<'a, T> Sub<&'a Point<T>> for &'a Point<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Vector<T>;

    /// # Panics
    /// If the operands have a different number of axes.
    fn sub(self, rhs: &'a Point<T>) -> Vector<T> {
        match combine_axes(&self.axes, &rhs.axes, |a, b| a - b) {
            Ok(axes) => Vector::from_axes(axes),
            Err(err) => panic!("cannot subtract points: {err}"),
        }
    }
}

impl<T> Sub for Point<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Vector<T>;
    #[inline]
    fn sub(self, rhs: Point<T>) -> Vector<T> {
        &self - &rhs
    }
}
