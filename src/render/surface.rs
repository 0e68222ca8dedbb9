//! Raster surface and full-scene repaint

use anyhow::Context;
use image::RgbaImage;
use tiny_skia::Pixmap;

use super::image::{ViewContext, draw_shape};
use crate::config::Style;
use crate::core::camera::Camera;
use crate::domain::{Bounds, Scene, Shape, Vec2};

/// Owns the pixel surface and the camera that maps the world onto it
pub struct Renderer {
    camera: Camera,
    pixmap: Pixmap,
}

impl Renderer {
    /// Allocate a transparent `width`×`height` surface
    pub fn new(camera: Camera, width: u32, height: u32) -> anyhow::Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .with_context(|| format!("cannot allocate a {}x{} surface", width, height))?;
        Ok(Self { camera, pixmap })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// World → surface pixels
    pub fn project(&self, world: Vec2) -> Vec2 {
        project_with(&self.camera, self.size(), world)
    }

    /// Surface pixels → world
    pub fn unproject(&self, pixel: Vec2) -> Vec2 {
        let (w, h) = self.size();
        self.camera.unproject(Vec2::new(pixel.x / w, pixel.y / h))
    }

    /// Visible world box and world units per pixel
    pub fn view(&self) -> (Bounds, f64) {
        let bounds = self
            .camera
            .scene_bounds(Vec2::ZERO, Vec2::new(1.0, 1.0));
        let (w, h) = self.size();
        let resolution = bounds.width().min(bounds.height()) / w.max(h);
        (bounds, resolution)
    }

    /// Clear, fill the background and draw every shape in scene order
    pub fn draw_scene(&mut self, scene: &Scene, style: &Style) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
        self.pixmap.fill(style.bg_color.to_skia());

        let (bounds, resolution) = self.view();
        let camera = &self.camera;
        let size = self.size();
        let projector = move |world: Vec2| project_with(camera, size, world);
        let view = ViewContext {
            bounds,
            resolution,
            projector: &projector,
        };
        for shape in scene.shapes() {
            draw_shape(&mut self.pixmap, shape, &view, style);
        }
        log::debug!(
            "Repainted {} shapes, bounds {:?}..{:?}, resolution {}",
            scene.len(),
            bounds.min,
            bounds.max,
            resolution
        );
    }

    /// Draw one shape over the current surface contents
    pub fn draw_shape(&mut self, shape: &Shape, style: &Style) {
        let (bounds, resolution) = self.view();
        let camera = &self.camera;
        let size = self.size();
        let projector = move |world: Vec2| project_with(camera, size, world);
        let view = ViewContext {
            bounds,
            resolution,
            projector: &projector,
        };
        draw_shape(&mut self.pixmap, shape, &view, style);
    }

    /// Copy the surface into an unpremultiplied RGBA image
    pub fn to_image(&self) -> anyhow::Result<RgbaImage> {
        let mut data = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        RgbaImage::from_raw(self.width(), self.height(), data)
            .context("surface size does not match its pixel buffer")
    }

    fn size(&self) -> (f64, f64) {
        (self.pixmap.width() as f64, self.pixmap.height() as f64)
    }
}

fn project_with(camera: &Camera, (w, h): (f64, f64), world: Vec2) -> Vec2 {
    let n = camera.project(world);
    Vec2::new(n.x * w, n.y * h)
}
