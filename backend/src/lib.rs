//! # Schedule Gen
//!
//! Weekly class-schedule calendar generator.
//!
//! This crate reads a description of weekly course meetings and produces a
//! static calendar page: an HTML document plus a stylesheet that places every
//! meeting on a CSS grid, one column per weekday and one row per time slot.
//!
//! ## Features
//!
//! - **Data Loading**: Parse course schedules from JSON
//! - **Time Handling**: Wall-clock times with validated parsing and raw arithmetic
//! - **Layout**: Minimal time axis and grid coordinates for every meeting
//! - **Rendering**: HTML markup and generated stylesheet rules
//!
//! ## Architecture
//!
//! - [`models`]: Times, weekdays, courses and the JSON loader
//! - [`services`]: Layout engine, colour assignment and the page pipeline
//! - [`routes`]: Layout DTOs handed to the renderers
//! - [`render`]: Markup and stylesheet generation
//! - [`config`]: TOML configuration
//! - [`error`]: Error types

pub mod api;

pub mod config;
pub mod error;
pub mod models;

pub mod render;
pub mod routes;

pub mod services;

pub use error::{ScheduleError, ScheduleResult};
