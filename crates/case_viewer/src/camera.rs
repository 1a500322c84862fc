use glam::{Mat4, Vec3};
use serde::Serialize;

/// Vertical field of view in degrees.
pub const FOV_Y_DEG: f32 = 50.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 1000.0;
/// Starting distance from the orbit target, looking down -Z.
pub const INITIAL_DISTANCE: f32 = 10.0;

#[derive(Debug, Clone, Serialize)]
pub struct Camera {
    // --- Orbital Parameters (Primary State) ---
    /// The world-space point the camera orbits around.
    pub target: Vec3,
    /// Distance from the camera to the target.
    pub radius: f32,
    /// Azimuth angle around +Y, measured from +Z (radians).
    pub azimuth_rad: f32,
    /// Elevation angle above the XZ plane (radians).
    pub elevation_rad: f32,

    // --- Projection ---
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    // --- Derived (updated by `update()`) ---
    #[serde(skip)]
    position: Vec3,
}

impl Camera {
    /// Creates a camera orbiting the origin at [`INITIAL_DISTANCE`].
    pub fn new(aspect: f32) -> Self {
        let mut camera = Self {
            target: Vec3::ZERO,
            radius: INITIAL_DISTANCE,
            azimuth_rad: 0.0,
            elevation_rad: 0.0,
            fov_y_deg: FOV_Y_DEG,
            aspect,
            near: NEAR,
            far: FAR,
            position: Vec3::ZERO, // placeholder
        };

        camera.update();
        camera
    }

    /// Recalculates the camera position from its orbital parameters. This
    /// must be called after any orbital parameter changes.
    pub fn update(&mut self) {
        let (sin_az, cos_az) = self.azimuth_rad.sin_cos();
        let (sin_el, cos_el) = self.elevation_rad.sin_cos();
        let offset = Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az) * self.radius;
        self.position = self.target + offset;
    }

    /// Moves the camera along its current orbit direction to `distance` from
    /// the target.
    pub fn set_distance(&mut self, distance: f32) {
        self.radius = distance.max(self.near);
        self.update();
    }

    /// Updates the aspect ratio after a viewport resize.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Right-handed view matrix, +Y up.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Perspective projection with GL clip-space depth in [-1, 1].
    pub fn proj(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.proj() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_positive_z() {
        let camera = Camera::new(16.0 / 9.0);
        assert!((camera.position() - Vec3::new(0.0, 0.0, INITIAL_DISTANCE)).length() < 1e-5);
        assert_eq!(camera.fov_y_deg, 50.0);
        assert_eq!(camera.far, 1000.0);
    }

    #[test]
    fn set_distance_keeps_direction() {
        let mut camera = Camera::new(1.0);
        camera.azimuth_rad = 0.3;
        camera.elevation_rad = 0.2;
        camera.update();
        let dir = camera.position().normalize();

        camera.set_distance(500.0);
        assert!((camera.position().length() - 500.0).abs() < 1e-3);
        assert!(camera.position().normalize().dot(dir) > 0.9999);
    }

    #[test]
    fn target_projects_to_screen_centre() {
        let mut camera = Camera::new(1280.0 / 720.0);
        camera.set_distance(500.0);
        let clip = camera.view_proj() * camera.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut camera = Camera::new(1.0);
        camera.set_viewport(1920, 1080);
        assert!((camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        camera.set_viewport(0, 1080);
        assert!((camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }
}
