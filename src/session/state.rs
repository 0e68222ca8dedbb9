//! Application context for a plotting session
//!
//! One `AppState` is created at startup and passed by `&mut` to every handler.

use crate::config::{DisplayRect, PlotConfig, Style};
use crate::core::camera::Camera;
use crate::domain::{Scene, Shape, Vec2};
use crate::render::surface::Renderer;
use crate::session::edit::CoefficientForm;
use crate::session::fit::FitModel;

pub struct AppState {
    pub style: Style,
    pub display: DisplayRect,
    pub renderer: Renderer,
    pub scene: Scene,
    pub model: FitModel,
    /// Present once a parabola has been fitted
    pub form: Option<CoefficientForm>,
}

impl AppState {
    /// Build the session from configuration: camera, surface and a scene
    /// holding the coordinate grid
    pub fn new(config: &PlotConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let camera = Camera::with_scale(Vec2::from(config.camera_origin), config.camera_scale);
        let renderer = Renderer::new(camera, config.canvas_size, config.canvas_size)?;
        let mut scene = Scene::new();
        scene.push(Shape::grid(config.grid_cell_size));

        Ok(Self {
            style: config.style.clone(),
            display: config.display_rect(),
            renderer,
            scene,
            model: FitModel::new(),
            form: None,
        })
    }

    /// Client coordinates → surface pixels
    pub fn client_to_canvas(&self, client_x: f64, client_y: f64) -> Vec2 {
        let scale = self.renderer.width() as f64 / self.display.width;
        Vec2::new(
            (client_x - self.display.left) * scale,
            (client_y - self.display.top) * scale,
        )
    }

    /// Full repaint of the scene
    pub fn repaint(&mut self) {
        self.renderer.draw_scene(&self.scene, &self.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_scene_starts_with_grid() {
        let state = AppState::new(&PlotConfig::default()).unwrap();
        assert_eq!(state.scene.len(), 1);
        assert!(matches!(state.scene.shapes()[0], Shape::CoordinateGrid(_)));
        assert_eq!(state.renderer.width(), 1080);
    }

    #[test]
    fn test_new_rejects_far_origin() {
        let config = PlotConfig {
            camera_origin: [1e17, 0.0],
            ..PlotConfig::default()
        };
        assert!(AppState::new(&config).is_err());
    }

    #[test]
    fn test_client_to_canvas_scales_display() {
        let config = PlotConfig {
            canvas_size: 480,
            display: Some(DisplayRect {
                left: 10.0,
                top: 20.0,
                width: 240.0,
            }),
            ..PlotConfig::default()
        };
        let state = AppState::new(&config).unwrap();
        let p = state.client_to_canvas(130.0, 140.0);
        assert_relative_eq!(p.x, 240.0);
        assert_relative_eq!(p.y, 240.0);
    }
}
