// src/vector.rs
//! A displacement in n-dimensional space.

use crate::error::Result;
use crate::pairing::{combine_axes, combine_axes_padded};
use crate::types::Scalar;
use num_traits::{Float, Zero};
use std::ops::{Add, Index, Mul, Neg, Sub};

/// An n-dimensional displacement (offset between two positions).
///
/// Axes are fixed at construction and never mutated; every operation returns
/// a fresh `Vector`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T = Scalar> {
    axes: Box<[T]>,
}

impl<T> Vector<T> {
    /// Build a vector by eagerly collecting `axes`.
    #[inline]
    pub fn new<I>(axes: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            axes: axes.into_iter().collect(),
        }
    }

    #[inline(always)]
    pub(crate) fn from_axes(axes: Box<[T]>) -> Self {
        Self { axes }
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

    /// Give up the vector and return its coordinates.
    pub fn into_axes(self) -> Vec<T> {
        self.axes.into_vec()
    }
}

impl<T: Zero + Clone> Vector<T> {
    /// The zero vector with `dim` axes.
    pub fn zeros(dim: usize) -> Self {
        Self {
            axes: vec![T::zero(); dim].into_boxed_slice(),
        }
    }
}

impl<T> Vector<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T>,
{
    /// Coordinate-wise sum, or an error if the dimensions differ.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        combine_axes(&self.axes, &other.axes, |a, b| a + b).map(|axes| Self { axes })
    }

    /// Coordinate-wise `self - other`, or an error if the dimensions differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        combine_axes(&self.axes, &other.axes, |a, b| a - b).map(|axes| Self { axes })
    }

    /// Coordinate-wise `other - self`: the offset that takes `self` to `other`.
    pub fn displacement_to(&self, other: &Self) -> Result<Self> {
        other.try_sub(self)
    }

    /// Coordinate-wise sum over the union of both dimensions.
    ///
    /// Axes only one operand has come back as `None`.
    pub fn add_padded(&self, other: &Self) -> Vec<Option<T>> {
        combine_axes_padded(&self.axes, &other.axes, |a, b| a + b)
    }

    /// Coordinate-wise `self - other` over the union of both dimensions.
    pub fn sub_padded(&self, other: &Self) -> Vec<Option<T>> {
        combine_axes_padded(&self.axes, &other.axes, |a, b| a - b)
    }
}

impl<T> Vector<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T> + Zero,
{
    /// Scale every coordinate by `s`.
    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Self::new(self.axes.iter().map(|&x| x * s))
    }

    /// Dot product, or an error if the dimensions differ.
    pub fn dot(&self, other: &Self) -> Result<T> {
        let products = combine_axes(&self.axes, &other.axes, |a, b| a * b)?;
        Ok(products.iter().fold(T::zero(), |acc, &x| acc + x))
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.axes.iter().fold(T::zero(), |acc, &x| acc + x * x)
    }
}

impl<T: Float> Vector<T> {
    /// Euclidean norm (length).
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(arr: [T; N]) -> Self {
        Self::new(arr)
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(axes: Vec<T>) -> Self {
        Self {
            axes: axes.into_boxed_slice(),
        }
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Vec<T> {
        v.into_axes()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.axes[index]
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.axes
    }
}

// Arithmetic operators. Mismatched dimensions panic; use the `try_*` methods
// to get an error instead.

impl<'a, T> Add<&'a Vector<T>> for &'a Vector<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Vector<T>;

    /// # Panics
    /// If the operands have a different number of axes.
    fn add(self, rhs: &'a Vector<T>) -> Vector<T> {
        match combine_axes(&self.axes, &rhs.axes, |a, b| a + b) {
            Ok(axes) => Vector { axes },
            Err(err) => panic!("cannot add vectors: {err}"),
        }
    }
}

impl<T> Add for Vector<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Vector<T>;
    #[inline]
    fn add(self, rhs: Vector<T>) -> Vector<T> {
        &self + &rhs
    }
}

impl<'a, T> Sub<&'a Vector<T>> for &'a Vector<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Vector<T>;

    /// # Panics
    /// If the operands have a different number of axes.
    fn sub(self, rhs: &'a Vector<T>) -> Vector<T> {
        match combine_axes(&self.axes, &rhs.axes, |a, b| a - b) {
            Ok(axes) => Vector { axes },
            Err(err) => panic!("cannot subtract vectors: {err}"),
        }
    }
}

impl<T> Sub for Vector<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Vector<T>;
    #[inline]
    fn sub(self, rhs: Vector<T>) -> Vector<T> {
        &self - &rhs
    }
}

impl<T> Mul<T> for Vector<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Vector<T>;
    #[inline]
    fn mul(self, rhs: T) -> Vector<T> {
        Vector::new(self.axes.iter().map(|&x| x * rhs))
    }
}

impl<T> Neg for Vector<T>
where
    T: Copy + Neg<Output = T>,
{
    type Output = Vector<T>;
    #[inline]
    fn neg(self) -> Vector<T> {
        Vector::new(self.axes.iter().map(|&x| -x))
    }
}

impl<'a, T> Neg for &'a Vector<T>
where
    T: Copy + Neg<Output = T>,
{
    type Output = Vector<T>;
    #[inline]
    fn neg(self) -> Vector<T> {
        Vector::new(self.axes.iter().map(|&x| -x))
    }
}
