//! Core application module
//!
//! This module contains:
//! - Application entry point and event loop
//! - Camera transform between world and viewport coordinates
//! - Text control interface feeding events into the session

pub mod app;
pub mod camera;
pub mod control;
