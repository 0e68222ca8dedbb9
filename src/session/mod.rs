//! Plotting session module
//!
//! This module contains:
//! - The application context (`AppState`)
//! - The three-point fit model
//! - The coefficient edit form
//! - Message types and their handlers

pub mod edit;
pub mod fit;
pub mod handlers;
pub mod messages;
pub mod state;
