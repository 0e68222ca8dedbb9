//! Pure domain types with minimal dependencies
//!
//! This module contains the math and scene types used throughout the application.
//! Types here have no rendering dependencies (tiny-skia, image).

pub mod algebra;
pub mod geometry;
pub mod scene;
pub mod shape;

pub use algebra::*;
pub use geometry::*;
pub use scene::*;
pub use shape::*;
