//! # ndpoint Quickstart
//!
//! ```rust
//! use ndpoint::prelude::*;
//!
//! // Offset from (1,2,3) to (4,5,6)
//! let a = Point::new([1.0, 2.0, 3.0]);
//! let b = Point::new([4.0, 5.0, 6.0]);
//! let d = a.displacement_to(&b).unwrap();
//! assert_eq!(d, Vector::from([3.0, 3.0, 3.0]));
//!
//! // Translating by that offset lands on b
//! assert_eq!(&a + &d, b);
//!
//! // Mismatched dimensions are an error, not a silent zero-pad
//! let short = Vector::from([1.0]);
//! assert!(a.try_add(&short).is_err());
//! assert_eq!(a.add_padded(&short), vec![Some(2.0), None, None]);
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod display;
pub mod error;
pub mod pairing; // positional pairing of axis sequences
pub mod point;
pub mod prelude;
pub mod types;
pub mod vector;

// --- Public API exports ---

pub use display::Rounded;
pub use error::{GeometryError, Result};
pub use pairing::{pair_axes, Paired};
pub use point::Point;
pub use types::Scalar;
pub use vector::Vector;
