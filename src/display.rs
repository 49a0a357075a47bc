// src/display.rs
//! Formatting for points and vectors.

use crate::point::Point;
use crate::vector::Vector;
use std::fmt;

fn write_axes<T: fmt::Display>(
    f: &mut fmt::Formatter,
    axes: &[T],
    decimals: Option<usize>,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, x) in axes.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match decimals {
            Some(dec) => write!(f, "{x:.dec$}")?,
            None => write!(f, "{x}")?,
        }
    }
    f.write_str(")")
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Point")?;
        write_axes(f, self.axes(), None)
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Vector")?;
        write_axes(f, self.axes(), None)
    }
}

/// A tiny wrapper for printing axes rounded to `decimals` places.
pub struct Rounded<'a, T>(pub &'a [T], pub usize);

impl<'a, T: fmt::Display> fmt::Display for Rounded<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(axes, dec) = *self;
        write_axes(f, axes, Some(dec))
    }
}

impl<'a, T> Rounded<'a, T> {
    /// Wrap the axes of a `Point`, `Vector` or slice for printing with
    /// `decimals` digits.
    #[inline(always)]
    pub fn new<A: AsRef<[T]> + ?Sized>(axes: &'a A, decimals: usize) -> Self {
        Rounded(axes.as_ref(), decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_type_name() {
        assert_eq!(Point::from([1, 2, 3]).to_string(), "Point(1, 2, 3)");
        assert_eq!(Vector::from([-1.5]).to_string(), "Vector(-1.5)");
        assert_eq!(Point::<i32>::new([]).to_string(), "Point()");
    }

    #[test]
    fn rounded_axes() {
        let v = Vector::from([1.23456789, -2.3456789]);
        assert_eq!(Rounded::new(&v, 3).to_string(), "(1.235, -2.346)");
    }
}
