// src/scene/mod.rs
//! Scene context for the case viewer.
//!
//! This module provides:
//! - The plain-data scene description handed to the WebGL consumer.
//! - The [`RenderSurface`] seam the point cloud is placed through.
//! - Generation of the case-count point cloud.

pub mod point_cloud;
pub mod types;

// Re-export commonly used types for convenience.
pub use self::point_cloud::{generate, PointCloud};
pub use self::types::{LineMaterial, PointLight, PointMarker, Polyline, PostSettings};

use crate::camera::{Camera, INITIAL_DISTANCE};
use glam::Vec3;
use serde::Serialize;

/// Background colour behind the scene.
pub const CLEAR_COLOR: u32 = 0x3d3b33;

/// The operations the point cloud needs from the rendering side.
pub trait RenderSurface {
    fn add_marker(&mut self, marker: &PointMarker);
    fn add_polyline(&mut self, points: &[Vec3]);
    fn set_camera_distance(&mut self, distance: f32);
}

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub points: Vec<Vec3>,
    pub material: LineMaterial,
}

/// Everything the external renderer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    pub camera: Camera,
    pub lights: Vec<PointLight>,
    pub clear_color: u32,
    pub post: PostSettings,
    pub line_material: LineMaterial,
    pub markers: Vec<PointMarker>,
    pub lines: Vec<Line>,
}

impl SceneGraph {
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Camera::new(1.0);
        camera.set_viewport(width, height);

        Self {
            camera,
            lights: vec![
                PointLight::white(Vec3::new(20.0, 20.0, 20.0)),
                PointLight::white(Vec3::new(-20.0, -20.0, 20.0)),
            ],
            clear_color: CLEAR_COLOR,
            post: PostSettings::default(),
            line_material: LineMaterial::default(),
            markers: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Drops generated geometry and returns the camera to its starting
    /// distance so the next cloud starts from scratch.
    pub fn clear_cloud(&mut self) {
        self.markers.clear();
        self.lines.clear();
        self.camera.set_distance(INITIAL_DISTANCE);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&SceneExport::from(self))
    }
}

impl RenderSurface for SceneGraph {
    fn add_marker(&mut self, marker: &PointMarker) {
        self.markers.push(*marker);
    }

    fn add_polyline(&mut self, points: &[Vec3]) {
        self.lines.push(Line {
            points: points.to_vec(),
            material: self.line_material,
        });
    }

    fn set_camera_distance(&mut self, distance: f32) {
        tracing::debug!(distance, "Pulling camera back");
        self.camera.set_distance(distance);
    }
}

#[derive(Serialize)]
struct CameraExport<'a> {
    #[serde(flatten)]
    camera: &'a Camera,
    position: Vec3,
    view_proj: [[f32; 4]; 4],
}

#[derive(Serialize)]
struct SceneExport<'a> {
    camera: CameraExport<'a>,
    lights: &'a [PointLight],
    clear_color: String,
    post: PostSettings,
    markers: &'a [PointMarker],
    lines: &'a [Line],
}

impl<'a> From<&'a SceneGraph> for SceneExport<'a> {
    fn from(scene: &'a SceneGraph) -> Self {
        Self {
            camera: CameraExport {
                camera: &scene.camera,
                position: scene.camera.position(),
                view_proj: scene.camera.view_proj().to_cols_array_2d(),
            },
            lights: &scene.lights,
            clear_color: format!("#{:06x}", scene.clear_color),
            post: scene.post,
            markers: &scene.markers,
            lines: &scene.lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn default_scene_setup() {
        let scene = SceneGraph::new(1280, 720);
        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.lights[1].position, Vec3::new(-20.0, -20.0, 20.0));
        assert_eq!(scene.clear_color, 0x3d3b33);
        assert!(scene.post.use_composer && scene.post.smaa && scene.post.bloom);
        assert!((scene.camera.aspect - 1280.0 / 720.0).abs() < 1e-6);
        assert!(scene.markers.is_empty() && scene.lines.is_empty());
    }

    #[test]
    fn cloud_fits_inside_far_plane() {
        let mut scene = SceneGraph::new(1280, 720);
        generate(10_000, &mut StdRng::seed_from_u64(5)).place(&mut scene);

        assert_eq!(scene.markers.len(), 100);
        assert_eq!(scene.lines.len(), 1);
        assert_eq!(scene.lines[0].points.len(), 100);
        let eye = scene.camera.position();
        assert!((eye.length() - 500.0).abs() < 1e-3);
        for m in &scene.markers {
            assert!(eye.distance(m.position) < scene.camera.far);
        }
    }

    #[test]
    fn clear_cloud_keeps_setup() {
        let mut scene = SceneGraph::new(800, 600);
        generate(500, &mut StdRng::seed_from_u64(2)).place(&mut scene);
        assert!((scene.camera.radius - 500.0).abs() < 1e-3);

        scene.clear_cloud();
        assert!(scene.markers.is_empty() && scene.lines.is_empty());
        assert!((scene.camera.radius - INITIAL_DISTANCE).abs() < 1e-6);
        assert_eq!(scene.lights.len(), 2);
    }

    #[test]
    fn exports_json() {
        let mut scene = SceneGraph::new(1280, 720);
        generate(200, &mut StdRng::seed_from_u64(8)).place(&mut scene);

        let json: serde_json::Value = serde_json::from_str(&scene.to_json().unwrap()).unwrap();
        assert_eq!(json["clear_color"], "#3d3b33");
        assert_eq!(json["markers"].as_array().unwrap().len(), 2);
        assert_eq!(json["lines"][0]["points"].as_array().unwrap().len(), 2);
        assert_eq!(json["camera"]["radius"], 500.0);
        assert_eq!(json["camera"]["fov_y_deg"], 50.0);
        assert_eq!(json["camera"]["view_proj"].as_array().unwrap().len(), 4);
        assert_eq!(json["post"]["use_composer"], true);
    }
}
