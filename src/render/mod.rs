//! Scene rendering module
//!
//! This module contains:
//! - Geometry calculations shared by the shape painters (sampling, ticks, labels)
//! - Shape rasterization using tiny-skia
//! - Bitmap text for tick labels
//! - The renderer owning the surface and camera

pub mod geometry;
pub mod image;
pub mod surface;
pub mod text;
