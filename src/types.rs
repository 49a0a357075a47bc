// src/types.rs
//! Default coordinate type.

#[cfg(feature = "f32")]
pub type Scalar = f32;
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;

// dimension is a runtime property of each value, so there is no DIM here
