//! Shape rasterization using tiny-skia
//!
//! Shapes are drawn in surface pixels through a projector supplied by the
//! renderer, so this module never sees the camera.

use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::geometry::{self, grid, point};
use super::text;
use crate::config::{ShapeColor, Style};
use crate::domain::{
    Bounds, CoordinateGridShape, ParabolaShape, PointShape, Shape, Vec2,
};

/// Per-pass drawing context shared by every shape
pub struct ViewContext<'a> {
    /// Visible world-space box
    pub bounds: Bounds,
    /// World units per surface pixel
    pub resolution: f64,
    /// World → surface pixel transform
    pub projector: &'a dyn Fn(Vec2) -> Vec2,
}

impl ViewContext<'_> {
    fn project(&self, world: Vec2) -> (f32, f32) {
        let p = (self.projector)(world);
        (p.x as f32, p.y as f32)
    }
}

fn solid_paint(color: ShapeColor) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

fn line_stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Butt,
        line_join: LineJoin::Round,
        ..Default::default()
    }
}

/// Draw a single shape, dispatching on its variant
pub fn draw_shape(pixmap: &mut Pixmap, shape: &Shape, view: &ViewContext, style: &Style) {
    match shape {
        Shape::Point(p) => draw_point(pixmap, p, view, style),
        Shape::Parabola(p) => draw_parabola(pixmap, p, view, style),
        Shape::CoordinateGrid(g) => draw_grid(pixmap, g, view, style),
    }
}

/// Filled circle of `RADIUS_FACTOR · line_width` pixels
fn draw_point(pixmap: &mut Pixmap, shape: &PointShape, view: &ViewContext, style: &Style) {
    let (cx, cy) = view.project(shape.pos);
    let radius = style.line_width * point::RADIUS_FACTOR;
    let Some(path) = PathBuilder::from_circle(cx, cy, radius) else {
        return;
    };
    pixmap.fill_path(
        &path,
        &solid_paint(style.point_color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

/// Polyline through the visible samples of the curve
fn draw_parabola(pixmap: &mut Pixmap, shape: &ParabolaShape, view: &ViewContext, style: &Style) {
    let samples = geometry::parabola_samples(&shape.coefs, &view.bounds, view.resolution);
    let mut pb = PathBuilder::new();
    let mut points = samples.into_iter().map(|s| view.project(s));
    let Some((x0, y0)) = points.next() else {
        return;
    };
    pb.move_to(x0, y0);
    for (x, y) in points {
        pb.line_to(x, y);
    }
    let Some(path) = pb.finish() else {
        return;
    };
    pixmap.stroke_path(
        &path,
        &solid_paint(style.plot_color),
        &line_stroke(style.line_width),
        Transform::identity(),
        None,
    );
}

/// Grid lines, then both axes on top, then tick labels
fn draw_grid(pixmap: &mut Pixmap, shape: &CoordinateGridShape, view: &ViewContext, style: &Style) {
    let bounds = view.bounds;
    let ticks = [
        geometry::grid_ticks(bounds.min.x, bounds.max.x, shape.cell_size),
        geometry::grid_ticks(bounds.min.y, bounds.max.y, shape.cell_size),
    ];

    // Grid lines: for each axis, a line per tick spanning the other axis
    let mut pb = PathBuilder::new();
    for (axis, axis_ticks) in ticks.iter().enumerate() {
        for &t in axis_ticks {
            let (x1, y1) = view.project(bounds.min.with(axis, t));
            let (x2, y2) = view.project(bounds.max.with(axis, t));
            pb.move_to(x1, y1);
            pb.line_to(x2, y2);
        }
    }
    if let Some(path) = pb.finish() {
        pixmap.stroke_path(
            &path,
            &solid_paint(style.grid_color),
            &line_stroke(style.line_width * grid::LINE_FACTOR),
            Transform::identity(),
            None,
        );
    }

    // Axes at x = 0 and y = 0
    let mut pb = PathBuilder::new();
    for axis in 0..2 {
        let (x1, y1) = view.project(bounds.min.with(axis, 0.0));
        let (x2, y2) = view.project(bounds.max.with(axis, 0.0));
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
    }
    if let Some(path) = pb.finish() {
        pixmap.stroke_path(
            &path,
            &solid_paint(style.axis_color),
            &line_stroke(style.line_width * grid::AXIS_FACTOR),
            Transform::identity(),
            None,
        );
    }

    // Labels, anchored to the origin clamped into view
    let dx = (grid::LABEL_OFFSET_X / view.resolution) as f32;
    let dy = (grid::LABEL_OFFSET_Y / view.resolution) as f32;
    for (axis, axis_ticks) in ticks.iter().enumerate() {
        for &t in axis_ticks {
            let (x, y) = view.project(geometry::label_anchor(&bounds, axis, t));
            text::draw_text_right_top(
                pixmap,
                x - dx,
                y + dy,
                &geometry::format_tick(t),
                style.grid_coordinate_color,
                &style.font,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coefficients;

    // 100×100 pixels over world [-10, 10]², Y up
    fn project(p: Vec2) -> Vec2 {
        Vec2::new((p.x + 10.0) * 5.0, (10.0 - p.y) * 5.0)
    }

    fn view(projector: &dyn Fn(Vec2) -> Vec2) -> ViewContext<'_> {
        ViewContext {
            bounds: Bounds::from_corners(Vec2::new(-10.0, -10.0), Vec2::new(10.0, 10.0)),
            resolution: 0.2,
            projector,
        }
    }

    fn alpha_at(pixmap: &Pixmap, x: u32, y: u32) -> u8 {
        pixmap.pixel(x, y).map(|p| p.alpha()).unwrap_or(0)
    }

    #[test]
    fn test_point_fills_projected_position() {
        let mut pixmap = Pixmap::new(100, 100).unwrap();
        let style = Style::default();
        let shape = Shape::point(Vec2::new(2.0, 2.0));
        draw_shape(&mut pixmap, &shape, &view(&project), &style);
        // (2, 2) → (60, 40)
        let px = pixmap.pixel(60, 40).unwrap();
        assert_eq!(px.alpha(), 255);
        assert_eq!((px.red(), px.green(), px.blue()), (0, 0, 0));
        assert_eq!(alpha_at(&pixmap, 10, 90), 0);
    }

    #[test]
    fn test_parabola_passes_through_vertex() {
        let mut pixmap = Pixmap::new(100, 100).unwrap();
        let style = Style::default();
        let shape = Shape::parabola(Coefficients::new(1.0, 0.0, 0.0));
        draw_shape(&mut pixmap, &shape, &view(&project), &style);
        // vertex (0, 0) → (50, 50)
        let px = pixmap.pixel(50, 50).unwrap();
        assert!(px.alpha() > 0);
        assert!(px.blue() > 0);
        // far below the curve stays empty
        assert_eq!(alpha_at(&pixmap, 50, 95), 0);
    }

    #[test]
    fn test_grid_draws_axes_in_axis_color() {
        let mut pixmap = Pixmap::new(100, 100).unwrap();
        let mut style = Style::default();
        style.font.size_px = 1.0;
        let shape = Shape::grid(5.0);
        draw_shape(&mut pixmap, &shape, &view(&project), &style);
        // y-axis at x = 50, sampled away from labels
        let px = pixmap.pixel(50, 10).unwrap();
        assert_eq!(px.alpha(), 255);
        assert_eq!(px.green(), 150);
        // a grid line at x = 5 → pixel column 75
        assert!(alpha_at(&pixmap, 75, 10) > 0);
        // middle of a cell stays empty
        assert_eq!(alpha_at(&pixmap, 62, 12), 0);
    }
}
