//! Configuration for the plot surface, camera and drawing style

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Serializable color: RGB channels 0-255 plus alpha 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl ShapeColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Convert to RGBA bytes (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            self.r,
            self.g,
            self.b,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        let [r, g, b, a] = self.to_rgba_u8();
        tiny_skia::Color::from_rgba8(r, g, b, a)
    }
}

/// Font descriptor for tick labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Glyph cell height in pixels
    pub size_px: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self { size_px: 24.0 }
    }
}

/// Colors and stroke widths used for one render pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub line_width: f32,
    pub bg_color: ShapeColor,
    pub point_color: ShapeColor,
    pub plot_color: ShapeColor,
    pub axis_color: ShapeColor,
    pub grid_color: ShapeColor,
    pub grid_coordinate_color: ShapeColor,
    pub font: FontSpec,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            bg_color: ShapeColor::rgb(255, 255, 255),
            point_color: ShapeColor::rgb(0, 0, 0),
            plot_color: ShapeColor::rgb(0, 0, 255),
            axis_color: ShapeColor::rgb(0, 150, 50),
            grid_color: ShapeColor::rgb(120, 120, 120),
            grid_coordinate_color: ShapeColor::rgb(0, 50, 0),
            font: FontSpec::default(),
        }
    }
}

/// Where the surface is displayed, in client coordinates
///
/// Clicks arrive in client coordinates and are scaled by
/// `canvas_size / width` into surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Edge length of the square surface in pixels
    pub canvas_size: u32,
    /// Displayed rectangle; `None` means displayed 1:1 at the client origin
    pub display: Option<DisplayRect>,
    /// Spacing of the coordinate grid in world units
    pub grid_cell_size: f64,
    /// World point shown at the surface center
    pub camera_origin: [f64; 2],
    /// Normalized units per world unit
    pub camera_scale: f64,
    pub style: Style,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            canvas_size: 1080,
            display: None,
            grid_cell_size: 1.0,
            camera_origin: [0.0, 0.0],
            camera_scale: 0.05,
            style: Style::default(),
        }
    }
}

impl PlotConfig {
    /// Environment variable overriding the config file location
    pub const PATH_ENV: &'static str = "PARAFIT_CONFIG";

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(Self::PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("parafit").join("config.json"))
    }

    /// Display rectangle, falling back to an unscaled display at the origin
    pub fn display_rect(&self) -> DisplayRect {
        self.display.unwrap_or(DisplayRect {
            left: 0.0,
            top: 0.0,
            width: self.canvas_size as f64,
        })
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from `path`; a missing file silently gives defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::read(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:#}", err);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the renderer cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.canvas_size > 0, "canvas_size must be positive");
        anyhow::ensure!(
            self.grid_cell_size.is_finite() && self.grid_cell_size > 0.0,
            "grid_cell_size must be a positive number"
        );
        anyhow::ensure!(
            self.camera_scale.is_finite() && self.camera_scale != 0.0,
            "camera_scale must be a nonzero number"
        );
        if let Some(display) = self.display {
            anyhow::ensure!(display.width > 0.0, "display width must be positive");
        }

        let resolution = self.resolution();
        anyhow::ensure!(
            self.grid_cell_size >= resolution,
            "grid_cell_size {} is finer than one pixel ({} world units)",
            self.grid_cell_size,
            resolution
        );
        for value in self.camera_origin {
            // one ulp of the origin must stay below a pixel or sampling stalls
            anyhow::ensure!(
                value.is_finite() && value.abs() * f64::EPSILON < resolution,
                "camera_origin {:?} is too far from zero for a {} world unit pixel",
                self.camera_origin,
                resolution
            );
        }
        Ok(())
    }

    /// World units covered by one surface pixel
    pub fn resolution(&self) -> f64 {
        1.0 / (self.camera_scale.abs() * self.canvas_size as f64)
    }

    /// Save configuration to `path` as pretty JSON
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
