use render_core::math::{shared_matrix, Matrix4x4, MatrixError, SharedMatrix};
use vek::Vec3;

use crate::viewer_config::ViewerConfig;

/// Circles around a target, easing its transform toward the ideal pose every
/// tick. The camera-to-world transform is shared, so other systems can read
/// where the camera is.
pub struct OrbitCamera {
    transform: SharedMatrix,
    projection: Matrix4x4,
    target: Vec3<f32>,
    angle: f32,

    radius: f32,
    height: f32,
    speed: f32,
    smoothing: f32,

    fov: f32,
    z_near: f32,
    z_far: f32,
}

impl OrbitCamera {
    pub fn new(config: &ViewerConfig, target: Vec3<f32>) -> Result<Self, MatrixError> {
        let mut camera = Self {
            transform: shared_matrix(Matrix4x4::new()),
            projection: Matrix4x4::new(),
            target,
            angle: 0.0,

            radius: config.orbit_radius,
            height: config.orbit_height,
            speed: config.orbit_speed,
            smoothing: config.smoothing,

            fov: config.fov,
            z_near: config.z_near,
            z_far: config.z_far,
        };

        camera.resize(config.window_width, config.window_height);

        let pose = camera.pose_at(0.0)?;
        camera.transform.write().copy_from(&pose);

        Ok(camera)
    }

    pub fn transform(&self) -> &SharedMatrix {
        &self.transform
    }

    pub fn projection_matrix(&self) -> &Matrix4x4 {
        &self.projection
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let aspect_ratio = width as f32 / height.max(1) as f32;
        self.projection
            .perspective_fov(self.fov, aspect_ratio, self.z_near, self.z_far);
    }

    pub fn tick(&mut self, delta_time_in_secs: f32) -> Result<(), MatrixError> {
        self.angle += self.speed * delta_time_in_secs;

        let pose = self.pose_at(self.angle)?;
        let ratio = (self.smoothing * delta_time_in_secs).clamp(0.0, 1.0);

        self.transform.write().lerp(&pose, ratio);

        Ok(())
    }

    pub fn view_matrix(&self) -> Result<Matrix4x4, MatrixError> {
        let mut view = *self.transform.read();
        view.invert()?;

        Ok(view)
    }

    fn pose_at(&self, angle: f32) -> Result<Matrix4x4, MatrixError> {
        let position = self.target
            + Vec3::new(
                self.radius * angle.sin(),
                self.height,
                self.radius * angle.cos(),
            );

        let mut pose = Matrix4x4::new();
        pose.look_at(self.target, Some(position), None)?;

        Ok(pose)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_abs_diff_eq;
    use render_core::math::{Matrix4x4, MatrixError};
    use vek::Vec3;

    use crate::viewer_config::ViewerConfig;

    use super::OrbitCamera;

    fn assert_vec3_eq(a: Vec3<f32>, b: Vec3<f32>) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-4);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-4);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-4);
    }

    fn config() -> ViewerConfig {
        ViewerConfig {
            orbit_radius: 4.0,
            orbit_height: 1.0,
            orbit_speed: 1.0,
            smoothing: 1000.0,
            ..ViewerConfig::default()
        }
    }

    #[test]
    fn starts_on_the_orbit_facing_the_target() {
        let camera = OrbitCamera::new(&config(), Vec3::zero()).unwrap();

        assert_vec3_eq(
            camera.transform().read().translation(),
            Vec3::new(0.0, 1.0, 4.0),
        );

        let view = camera.view_matrix().unwrap();
        let target_in_view = view.transform_point(Vec3::zero());
        assert_abs_diff_eq!(target_in_view.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(target_in_view.y, 0.0, epsilon = 1e-4);
        assert!(target_in_view.z < 0.0);
    }

    #[test]
    fn snaps_to_pose_when_smoothing_saturates() {
        let mut camera = OrbitCamera::new(&config(), Vec3::new(1.0, 0.0, 0.0)).unwrap();

        camera.tick(std::f32::consts::FRAC_PI_2).unwrap();

        assert_vec3_eq(
            camera.transform().read().translation(),
            Vec3::new(5.0, 1.0, 0.0),
        );
    }

    #[test]
    fn eases_toward_pose() {
        let config = ViewerConfig {
            smoothing: 0.5,
            ..config()
        };
        let mut camera = OrbitCamera::new(&config, Vec3::zero()).unwrap();

        // a quarter turn, only part of which is caught up with
        camera.tick(std::f32::consts::FRAC_PI_2).unwrap();

        let ratio = 0.5 * std::f32::consts::FRAC_PI_2;
        let expected = Vec3::new(0.0, 1.0, 4.0) * (1.0 - ratio) + Vec3::new(4.0, 1.0, 0.0) * ratio;
        assert_vec3_eq(camera.transform().read().translation(), expected);
    }

    #[test]
    fn transform_is_shared() {
        let mut camera = OrbitCamera::new(&config(), Vec3::zero()).unwrap();
        let holder = Arc::clone(camera.transform());

        camera.tick(0.25).unwrap();

        assert_eq!(*holder.read(), *camera.transform().read());
    }

    #[test]
    fn view_is_inverse_of_transform() {
        let mut camera = OrbitCamera::new(&config(), Vec3::zero()).unwrap();
        camera.tick(0.7).unwrap();

        let view = camera.view_matrix().unwrap();
        let product = view * *camera.transform().read();

        for (a, b) in product.values().iter().zip(Matrix4x4::new().values()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-4);
        }
    }

    #[test]
    fn degenerate_transform_fails_view_until_next_tick() {
        let mut camera = OrbitCamera::new(&config(), Vec3::zero()).unwrap();
        camera.transform().write().copy_from(&Matrix4x4::zero());

        assert_eq!(
            camera.view_matrix().unwrap_err(),
            MatrixError::SingularMatrix
        );

        // saturated smoothing snaps back onto the orbit
        camera.tick(0.1).unwrap();
        assert!(camera.view_matrix().is_ok());
    }

    #[test]
    fn projection_follows_window_size() {
        let mut camera = OrbitCamera::new(&config(), Vec3::zero()).unwrap();

        camera.resize(1000, 500);
        let projection = camera.projection_matrix().values();

        assert_abs_diff_eq!(projection[5] / projection[0], 2.0, epsilon = 1e-5);
    }
}
