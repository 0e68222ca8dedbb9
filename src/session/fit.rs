//! Three-point parabola fit and the click-collecting model

use thiserror::Error;

use crate::domain::{Coefficients, Scene, Shape, Vec2};

/// Number of clicks that make up a fit
pub const FIT_POINTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// Two points share an x-coordinate, so no function parabola passes through all three
    #[error("cannot fit a parabola: points share an x-coordinate ({0:?}, {1:?}, {2:?})")]
    DegeneratePoints(Vec2, Vec2, Vec2),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplyError {
    #[error("no parabola has been fitted yet")]
    NoParabola,
}

/// Closed-form coefficients of the parabola through three points
///
/// Requires pairwise distinct x-coordinates; otherwise returns
/// [`FitError::DegeneratePoints`] instead of non-finite coefficients.
pub fn calculate_coefficients(p1: Vec2, p2: Vec2, p3: Vec2) -> Result<Coefficients, FitError> {
    let degenerate = || FitError::DegeneratePoints(p1, p2, p3);
    if p1.x == p2.x || p1.x == p3.x || p2.x == p3.x {
        return Err(degenerate());
    }

    let (x1, y1, x2, y2, x3, y3) = (p1.x, p1.y, p2.x, p2.y, p3.x, p3.y);
    let a = (y3 - (x3 * (y2 - y1) + x2 * y1 - x1 * y2) / (x2 - x1))
        / (x3 * (x3 - x2 - x1) + x1 * x2);
    let b = (y2 - y1) / (x2 - x1) - a * (x1 + x2);
    let c = (x2 * y1 - x1 * y2) / (x2 - x1) + a * x1 * x2;

    let coefs = Coefficients::new(a, b, c);
    if !coefs.is_finite() {
        return Err(degenerate());
    }
    Ok(coefs)
}

/// What a click did to the model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// All points were already collected
    Ignored,
    /// Point stored; holds the number of points collected so far
    Collected(usize),
    /// Third point stored and a parabola added to the scene
    Fitted(Coefficients),
}

/// Collects up to three points and owns the fitted parabola
#[derive(Debug, Clone, Default)]
pub struct FitModel {
    points: Vec<Vec2>,
    coefs: Option<Coefficients>,
    /// Scene index of the live parabola shape
    parabola: Option<usize>,
}

impl FitModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn coefficients(&self) -> Option<Coefficients> {
        self.coefs
    }

    pub fn is_complete(&self) -> bool {
        self.points.len() >= FIT_POINTS
    }

    /// Record a click in world coordinates
    ///
    /// Adds a point marker to the scene right away. The third point triggers
    /// the fit; a degenerate fit keeps the point but adds no parabola.
    pub fn handle_click(&mut self, pos: Vec2, scene: &mut Scene) -> Result<ClickOutcome, FitError> {
        if self.is_complete() {
            log::debug!("Ignoring click at {:?}: all points collected", pos);
            return Ok(ClickOutcome::Ignored);
        }

        self.points.push(pos);
        scene.push(Shape::point(pos));

        if self.points.len() < FIT_POINTS {
            return Ok(ClickOutcome::Collected(self.points.len()));
        }

        let coefs = calculate_coefficients(self.points[0], self.points[1], self.points[2])?;
        log::info!(
            "Fitted y = {}·x² + {}·x + {}",
            coefs.a,
            coefs.b,
            coefs.c
        );
        self.coefs = Some(coefs);
        self.parabola = Some(scene.push(Shape::parabola(coefs)));
        Ok(ClickOutcome::Fitted(coefs))
    }

    /// Overwrite the live parabola's coefficients in place
    pub fn apply_coefficients(
        &mut self,
        coefs: Coefficients,
        scene: &mut Scene,
    ) -> Result<(), ApplyError> {
        let shape = self
            .parabola
            .and_then(|index| scene.get_mut(index))
            .ok_or(ApplyError::NoParabola)?;
        let Shape::Parabola(parabola) = shape else {
            return Err(ApplyError::NoParabola);
        };
        parabola.coefs = coefs;
        self.coefs = Some(coefs);
        Ok(())
    }
}
