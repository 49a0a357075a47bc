// src/prelude.rs
//! The “everything” import for ndpoint.
//!
//! ```rust
//! use ndpoint::prelude::*;
//! ```

// core data types
pub use crate::point::Point;
pub use crate::vector::Vector;
pub use crate::display::Rounded;

// errors
pub use crate::error::GeometryError;
