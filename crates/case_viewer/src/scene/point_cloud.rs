//! Case-count driven point cloud: one marker per hundred cases, scattered on a
//! thin spherical shell and joined by a polyline in generation order.

use crate::scene::{
    types::{PointMarker, Polyline},
    RenderSurface,
};
use glam::Vec3;
use rand::Rng;

/// Cases represented by a single marker.
pub const CASES_PER_MARKER: u64 = 100;
/// Inner radius of the shell the markers are placed on.
pub const SHELL_RADIUS_MIN: f32 = 250.0;
/// Radial thickness of the shell.
pub const SHELL_THICKNESS: f32 = 20.0;
/// Camera distance that frames the whole shell.
pub const CLOUD_CAMERA_DISTANCE: f32 = 500.0;
/// Largest cloud accepted from the feed; 10^8 cases is beyond any real day.
pub const MAX_MARKERS: u64 = 1_000_000;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    pub markers: Vec<PointMarker>,
    pub polyline: Polyline,
    /// Where the camera should be pulled back to; `None` for an empty cloud.
    pub camera_distance: Option<f32>,
}

/// Builds the cloud for `count` cases.
pub fn generate<R: Rng>(count: u64, rng: &mut R) -> PointCloud {
    let n = count / CASES_PER_MARKER;

    let markers: Vec<PointMarker> = (0..n)
        .map(|_| {
            let radius = rng.gen::<f32>() * SHELL_THICKNESS + SHELL_RADIUS_MIN;
            PointMarker::at(random_direction(rng) * radius)
        })
        .collect();

    let polyline = Polyline::from_markers(&markers);
    let camera_distance = (!markers.is_empty()).then_some(CLOUD_CAMERA_DISTANCE);

    tracing::debug!(
        count,
        markers = markers.len(),
        segments = polyline.segments(),
        "Generated point cloud"
    );

    PointCloud {
        markers,
        polyline,
        camera_distance,
    }
}

/// Normalized vector from three independent draws in [-1, 1].
///
/// This is not uniform on the sphere (directions towards the cube corners
/// are favoured); the resulting pattern is the intended look.
fn random_direction<R: Rng>(rng: &mut R) -> Vec3 {
    direction_from(|| rng.gen_range(-1.0..=1.0))
}

/// Normalizes x, y, z pulled from `draw`, pulling a fresh triple whenever
/// the previous one has no direction.
fn direction_from(mut draw: impl FnMut() -> f32) -> Vec3 {
    loop {
        let x = draw();
        let y = draw();
        let z = draw();
        if let Some(dir) = Vec3::new(x, y, z).try_normalize() {
            return dir;
        }
    }
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Hands the cloud to the render surface: markers, then the connecting
    /// line (only when it has at least one segment), then the camera signal.
    pub fn place<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        for marker in &self.markers {
            surface.add_marker(marker);
        }
        if self.polyline.is_renderable() {
            surface.add_polyline(&self.polyline.points);
        }
        if let Some(distance) = self.camera_distance {
            surface.set_camera_distance(distance);
        }
    }
}
