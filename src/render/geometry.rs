//! Shared geometry calculations for shape rendering
//!
//! Everything here works in world coordinates and is independent of the
//! raster backend, so sampling can be checked without drawing.

use crate::domain::{Bounds, Coefficients, Vec2};

/// Point marker constants
pub mod point {
    /// Marker radius as a multiple of the style line width
    pub const RADIUS_FACTOR: f32 = 2.5;
}

/// Curve sampling constants
pub mod curve {
    /// Margin, in resolution steps, added around the visible range
    pub const MARGIN_STEPS: f64 = 10.0;
    /// Upper bound on samples per curve
    pub const MAX_STEPS: f64 = 1_048_576.0;
}

/// Grid constants
pub mod grid {
    /// Grid line width as a multiple of the style line width
    pub const LINE_FACTOR: f32 = 0.5;
    /// Axis line width as a multiple of the style line width
    pub const AXIS_FACTOR: f32 = 1.5;
    /// Label offset to the left of the tick, in world units
    pub const LABEL_OFFSET_X: f64 = 0.05;
    /// Label offset below the tick, in world units
    pub const LABEL_OFFSET_Y: f64 = 0.075;
    /// Upper bound on grid lines per axis
    pub const MAX_TICKS: f64 = 65_536.0;
}

/// World-space samples of a parabola across the visible x-range
///
/// The first sample starts `MARGIN_STEPS` to the left of the view and is always
/// kept; its y is the value at the left edge. Following samples sit at
/// `start + k·resolution` up to the first one past `bounds.max.x`, and are kept
/// only when y lies within the vertical range widened by the same margin.
/// Dropped samples do not split the polyline.
pub fn parabola_samples(coefs: &Coefficients, bounds: &Bounds, resolution: f64) -> Vec<Vec2> {
    let margin = resolution * curve::MARGIN_STEPS;
    let start = bounds.min.x - margin;
    let mut samples = vec![Vec2::new(start, coefs.eval(bounds.min.x))];

    if resolution <= 0.0 || !resolution.is_finite() {
        return samples;
    }
    let steps = ((bounds.max.x - start) / resolution).floor();
    if !steps.is_finite() || steps > curve::MAX_STEPS {
        log::warn!("Skipping parabola: {} samples needed at resolution {}", steps, resolution);
        return samples;
    }

    let low = bounds.min.y - margin;
    let high = bounds.max.y + margin;
    // indexed steps: repeated `x += resolution` stalls once it drops below one ulp of x
    for k in 1..=(steps.max(0.0) as u64 + 1) {
        let x = start + k as f64 * resolution;
        let y = coefs.eval(x);
        if y >= low && y <= high {
            samples.push(Vec2::new(x, y));
        }
    }
    samples
}

/// First multiple of `cell` at or below `value`
#[inline]
pub fn first_line(value: f64, cell: f64) -> f64 {
    (value / cell).floor() * cell
}

/// Multiples of `cell` from `first_line(min)` up to `max` inclusive
///
/// Ticks are computed as `first + k·cell` so labels do not accumulate error.
/// A cell too small for the range yields no ticks at all.
pub fn grid_ticks(min: f64, max: f64, cell: f64) -> Vec<f64> {
    if cell <= 0.0 || !cell.is_finite() || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let first = first_line(min, cell);
    let count = ((max - first) / cell).floor() + 1.0;
    if count > grid::MAX_TICKS {
        log::warn!("Skipping grid: cell {} gives {} lines over [{}, {}]", cell, count, min, max);
        return Vec::new();
    }
    (0u64..)
        .map(|k| first + k as f64 * cell)
        .take_while(|&t| t <= max)
        .take(count as usize + 1)
        .collect()
}

/// Label text for a tick value: no trailing zeros, no negative zero
pub fn format_tick(value: f64) -> String {
    // trims representation noise such as 0.30000000000000004
    let rounded = (value * 1e9).round() / 1e9;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Anchor for the labels of `axis`: the origin clamped into view, with the
/// `axis` component replaced by the tick value
pub fn label_anchor(bounds: &Bounds, axis: usize, tick: f64) -> Vec2 {
    bounds.clamp_point(Vec2::ZERO).with(axis, tick)
}
