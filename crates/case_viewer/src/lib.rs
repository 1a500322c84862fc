// src/lib.rs
//! Case-count point cloud viewer library.
//!
//! Turns the latest England new-cases figure into a 3D scene description (a
//! shell of markers joined by a polyline) and a fixed overlay panel. Drawing
//! is left to the WebGL front end that consumes the output.

pub mod app;
pub mod camera;
pub mod config;
pub mod overlay;
pub mod scene;
