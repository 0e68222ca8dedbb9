//! Small fixed-size linear algebra for the 2D plot
//!
//! Matrices are column-major: `Mat2::cols[c][r]` is column `c`, row `r`.

use std::ops::{Add, Mul, Sub};

/// A 2D vector (world, normalized or pixel coordinates depending on context)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    /// Center of the normalized [0,1]² viewport
    pub const HALF: Vec2 = Vec2 { x: 0.5, y: 0.5 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component by axis index (0 = x, 1 = y)
    pub fn get(self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            _ => self.y,
        }
    }

    /// Copy with the component at `axis` replaced
    pub fn with(mut self, axis: usize, value: f64) -> Self {
        match axis {
            0 => self.x = value,
            _ => self.y = value,
        }
        self
    }

    /// Component-wise minimum
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    fn scaled(self, s: f64) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vec2::new(x, y)
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        vec_add(self, rhs)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        vec_sub(self, rhs)
    }
}

/// A 2×2 matrix stored as two column vectors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat2 {
    pub cols: [Vec2; 2],
}

impl Mat2 {
    pub const fn from_cols(x_axis: Vec2, y_axis: Vec2) -> Self {
        Self {
            cols: [x_axis, y_axis],
        }
    }

    /// Diagonal scale matrix
    pub const fn from_scale(sx: f64, sy: f64) -> Self {
        Self::from_cols(Vec2::new(sx, 0.0), Vec2::new(0.0, sy))
    }

    /// Element at column `c`, row `r`
    pub fn at(&self, c: usize, r: usize) -> f64 {
        self.cols[c].get(r)
    }

    pub fn determinant(&self) -> f64 {
        self.at(0, 0) * self.at(1, 1) - self.at(1, 0) * self.at(0, 1)
    }

    /// Exact inverse, see [`mat_inv_2d`]
    pub fn inverse(&self) -> Mat2 {
        mat_inv_2d(self)
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    fn mul(self, v: Vec2) -> Vec2 {
        self.cols[0].scaled(v.x) + self.cols[1].scaled(v.y)
    }
}

/// Multiply every column in `columns` by `a`
///
/// Each output column is `a · column`. An empty input gives an empty output.
pub fn mat_mul(a: &Mat2, columns: &[Vec2]) -> Vec<Vec2> {
    columns.iter().map(|&col| *a * col).collect()
}

/// Invert a 2×2 matrix through its determinant
///
/// `b[i][j] = (-1)^(i+j) · a[1-j][1-i] / det(a)`. A singular input yields
/// non-finite entries; callers only pass known-invertible matrices.
pub fn mat_inv_2d(a: &Mat2) -> Mat2 {
    let inv_det = 1.0 / a.determinant();
    let entry = |i: usize, j: usize| {
        let sign = if (i + j) & 1 == 1 { -1.0 } else { 1.0 };
        sign * a.at(1 - j, 1 - i) * inv_det
    };
    Mat2::from_cols(
        Vec2::new(entry(0, 0), entry(0, 1)),
        Vec2::new(entry(1, 0), entry(1, 1)),
    )
}

/// Element-wise sum
pub fn vec_add(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x + b.x, a.y + b.y)
}

/// Element-wise difference
pub fn vec_sub(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x - b.x, a.y - b.y)
}
