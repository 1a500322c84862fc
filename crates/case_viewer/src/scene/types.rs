//! Plain-data scene elements handed to the rendering collaborator.

use glam::Vec3;
use serde::Serialize;

/// Uniform scale applied to every marker sprite.
pub const MARKER_SCALE: f32 = 5.0;

/// A single point-shaped sprite placed in 3D space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointMarker {
    /// World-space position in scene units.
    pub position: Vec3,
    /// Sprite scale; fixed for every marker.
    pub scale: Vec3,
}

impl PointMarker {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            scale: Vec3::splat(MARKER_SCALE),
        }
    }
}

/// Marker positions joined in generation order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<Vec3>,
}

impl Polyline {
    pub fn from_markers(markers: &[PointMarker]) -> Self {
        Self {
            points: markers.iter().map(|m| m.position).collect(),
        }
    }

    /// Number of line segments; zero for fewer than two points.
    pub fn segments(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// A line needs at least two points to produce any geometry.
    pub fn is_renderable(&self) -> bool {
        self.segments() > 0
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Basic line material (colour as 0xRRGGBB).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineMaterial {
    pub color: u32,
    pub opacity: f32,
}

impl Default for LineMaterial {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            opacity: 0.8,
        }
    }
}

/// Omnidirectional light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointLight {
    pub color: u32,
    pub intensity: f32,
    pub position: Vec3,
}

impl PointLight {
    pub fn white(position: Vec3) -> Self {
        Self {
            color: 0xffffff,
            intensity: 1.0,
            position,
        }
    }
}

/// Post-processing chain: a scene render pass followed by one effect pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PostSettings {
    /// When false the scene is drawn straight to the screen.
    pub use_composer: bool,
    pub smaa: bool,
    pub bloom: bool,
}

impl Default for PostSettings {
    fn default() -> Self {
        Self {
            use_composer: true,
            smaa: true,
            bloom: true,
        }
    }
}
