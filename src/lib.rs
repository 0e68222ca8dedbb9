//! parafit: click three points, get the parabola through them.
//!
//! Core functionality exported as a library for tests and reuse:
//! camera transforms, shape rasterization and the three-point fit.

pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod session;

pub use crate::config::{DisplayRect, FontSpec, PlotConfig, ShapeColor, Style};
pub use crate::core::camera::Camera;
pub use crate::domain::{Bounds, Coefficients, Mat2, Scene, Shape, Vec2};
pub use crate::render::surface::Renderer;
pub use crate::session::fit::{FitError, FitModel, calculate_coefficients};
pub use crate::session::handlers::{SessionError, handle_msg};
pub use crate::session::messages::{Effect, Msg};
pub use crate::session::state::AppState;
