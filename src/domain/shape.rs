//! Shape types placed in the plot scene
//!
//! All shape types store their parameters in world coordinates.

use super::algebra::Vec2;

/// Coefficients of `y = a·x² + b·x + c`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub const NAMES: [&'static str; 3] = ["a", "b", "c"];

    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluate the polynomial at `x`
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }
}

/// Clicked point marker
#[derive(Clone, Debug, PartialEq)]
pub struct PointShape {
    pub pos: Vec2,
}

/// Parabola plotted across the visible x-range
#[derive(Clone, Debug, PartialEq)]
pub struct ParabolaShape {
    pub coefs: Coefficients,
}

/// Grid lines every `cell_size` world units, with axes and tick labels
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateGridShape {
    pub cell_size: f64,
}

/// Unified shape type, drawn in scene order
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Point(PointShape),
    Parabola(ParabolaShape),
    CoordinateGrid(CoordinateGridShape),
}

impl Shape {
    pub fn point(pos: Vec2) -> Self {
        Shape::Point(PointShape { pos })
    }

    pub fn parabola(coefs: Coefficients) -> Self {
        Shape::Parabola(ParabolaShape { coefs })
    }

    pub fn grid(cell_size: f64) -> Self {
        Shape::CoordinateGrid(CoordinateGridShape { cell_size })
    }

    /// Short name used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Point(_) => "point",
            Shape::Parabola(_) => "parabola",
            Shape::CoordinateGrid(_) => "grid",
        }
    }
}
