use std::ops::Mul;

use vek::{Quaternion, Vec3, Vec4};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("the matrix is not invertible, its determinant is zero")]
    SingularMatrix,
    #[error("the eye direction (look at - eye position) and the up vector appear to be the same")]
    AmbiguousOrientation,
}

/// 4x4 transform stored row-major, `m[4 * row + col]`.
///
/// Vectors are columns multiplied on the right (`v' = M * v`), so the
/// translation lives in `m[3]`, `m[7]` and `m[11]`. The builders overwrite the
/// stored values in place and hand back `&mut Self` for chaining.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4x4 {
    m: [f32; 16],
}

const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::new()
    }
}

impl Matrix4x4 {
    pub fn new() -> Self {
        Self { m: IDENTITY }
    }

    pub fn zero() -> Self {
        Self { m: [0.0; 16] }
    }

    pub fn from_row_array(values: [f32; 16]) -> Self {
        Self { m: values }
    }

    pub fn values(&self) -> &[f32; 16] {
        &self.m
    }

    pub fn initialize(&mut self, values: [f32; 16]) -> &mut Self {
        self.m = values;
        self
    }

    pub fn identity(&mut self) -> &mut Self {
        self.initialize(IDENTITY)
    }

    pub fn copy_from(&mut self, source: &Matrix4x4) -> &mut Self {
        self.m = source.m;
        self
    }

    pub fn set_translation(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.initialize(translation_values(x, y, z))
    }

    pub fn rotation_x(&mut self, radians: f32) -> &mut Self {
        let (sin, cos) = radians.sin_cos();

        #[rustfmt::skip]
        let values = [
            1.0, 0.0, 0.0,  0.0,
            0.0, cos, -sin, 0.0,
            0.0, sin, cos,  0.0,
            0.0, 0.0, 0.0,  1.0,
        ];

        self.initialize(values)
    }

    pub fn rotation_y(&mut self, radians: f32) -> &mut Self {
        let (sin, cos) = radians.sin_cos();

        #[rustfmt::skip]
        let values = [
            cos,  0.0, sin, 0.0,
            0.0,  1.0, 0.0, 0.0,
            -sin, 0.0, cos, 0.0,
            0.0,  0.0, 0.0, 1.0,
        ];

        self.initialize(values)
    }

    pub fn rotation_z(&mut self, radians: f32) -> &mut Self {
        let (sin, cos) = radians.sin_cos();

        #[rustfmt::skip]
        let values = [
            cos, -sin, 0.0, 0.0,
            sin, cos,  0.0, 0.0,
            0.0, 0.0,  1.0, 0.0,
            0.0, 0.0,  0.0, 1.0,
        ];

        self.initialize(values)
    }

    /// `self = self * other`
    pub fn append(&mut self, other: &Matrix4x4) -> &mut Self {
        self.append_values(other.m)
    }

    pub fn append_values(&mut self, other: [f32; 16]) -> &mut Self {
        self.m = multiply(&self.m, &other);
        self
    }

    /// `self = other * self`
    pub fn prepend(&mut self, other: &Matrix4x4) -> &mut Self {
        self.prepend_values(other.m)
    }

    pub fn prepend_values(&mut self, other: [f32; 16]) -> &mut Self {
        self.m = multiply(&other, &self.m);
        self
    }

    pub fn append_translation(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.append_values(translation_values(x, y, z))
    }

    pub fn prepend_translation(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.prepend_values(translation_values(x, y, z))
    }

    /// The axis does not have to be normalized but must not be zero.
    pub fn append_rotation(&mut self, radians: f32, axis: Vec3<f32>) -> &mut Self {
        self.append_values(rotation_values(axis_angle_to_quaternion(radians, axis)))
    }

    pub fn prepend_rotation(&mut self, radians: f32, axis: Vec3<f32>) -> &mut Self {
        self.prepend_values(rotation_values(axis_angle_to_quaternion(radians, axis)))
    }

    pub fn append_quaternion_rotation(&mut self, quaternion: Quaternion<f32>) -> &mut Self {
        self.append_values(rotation_values(quaternion))
    }

    pub fn prepend_quaternion_rotation(&mut self, quaternion: Quaternion<f32>) -> &mut Self {
        self.prepend_values(rotation_values(quaternion))
    }

    pub fn determinant(&self) -> f32 {
        Minors::new(&self.m).determinant()
    }

    /// Inverts in place with the adjugate method. A matrix whose determinant is
    /// exactly zero is left untouched.
    pub fn invert(&mut self) -> Result<&mut Self, MatrixError> {
        let m = &self.m;
        let minors = Minors::new(m);
        let det = minors.determinant();

        if det == 0.0 {
            return Err(MatrixError::SingularMatrix);
        }

        let inv_det = 1.0 / det;
        let Minors { s, c } = minors;

        let inverted = [
            (m[5] * c[5] - m[6] * c[4] + m[7] * c[3]) * inv_det,
            (-m[1] * c[5] + m[2] * c[4] - m[3] * c[3]) * inv_det,
            (m[13] * s[5] - m[14] * s[4] + m[15] * s[3]) * inv_det,
            (-m[9] * s[5] + m[10] * s[4] - m[11] * s[3]) * inv_det,
            //
            (-m[4] * c[5] + m[6] * c[2] - m[7] * c[1]) * inv_det,
            (m[0] * c[5] - m[2] * c[2] + m[3] * c[1]) * inv_det,
            (-m[12] * s[5] + m[14] * s[2] - m[15] * s[1]) * inv_det,
            (m[8] * s[5] - m[10] * s[2] + m[11] * s[1]) * inv_det,
            //
            (m[4] * c[4] - m[5] * c[2] + m[7] * c[0]) * inv_det,
            (-m[0] * c[4] + m[1] * c[2] - m[3] * c[0]) * inv_det,
            (m[12] * s[4] - m[13] * s[2] + m[15] * s[0]) * inv_det,
            (-m[8] * s[4] + m[9] * s[2] - m[11] * s[0]) * inv_det,
            //
            (-m[4] * c[3] + m[5] * c[1] - m[6] * c[0]) * inv_det,
            (m[0] * c[3] - m[1] * c[1] + m[2] * c[0]) * inv_det,
            (-m[12] * s[3] + m[13] * s[1] - m[14] * s[0]) * inv_det,
            (m[8] * s[3] - m[9] * s[1] + m[10] * s[0]) * inv_det,
        ];

        Ok(self.initialize(inverted))
    }

    /// Right-handed projection with the camera looking down `-Z`; view depth
    /// `z_near..z_far` lands in `0..1` after the perspective divide.
    pub fn perspective_fov(
        &mut self,
        fov: f32,
        aspect_ratio: f32,
        z_near: f32,
        z_far: f32,
    ) -> &mut Self {
        let fd = 1.0 / (fov * 0.5).tan();
        let depth = z_near - z_far;

        #[rustfmt::skip]
        let values = [
            fd / aspect_ratio, 0.0, 0.0,           0.0,
            0.0,               fd,  0.0,           0.0,
            0.0,               0.0, z_far / depth, z_near * z_far / depth,
            0.0,               0.0, -1.0,          0.0,
        ];

        self.initialize(values)
    }

    /// Builds a right-handed world-to-camera matrix.
    ///
    /// Without an explicit `up_axis` the world Y axis is used, except when
    /// looking straight along Y where the X axis takes its place.
    pub fn view(
        &mut self,
        eye: Vec3<f32>,
        look_at: Vec3<f32>,
        up_axis: Option<Vec3<f32>>,
    ) -> Result<&mut Self, MatrixError> {
        let direction = look_at - eye;
        if direction.magnitude_squared() == 0.0 {
            return Err(MatrixError::AmbiguousOrientation);
        }

        let up_axis = up_axis.unwrap_or_else(|| {
            if direction.x == 0.0 && direction.y != 0.0 && direction.z == 0.0 {
                log::trace!("view direction is parallel to the Y axis, using X as up");
                Vec3::unit_x()
            } else {
                Vec3::unit_y()
            }
        });

        let z_axis = (-direction).normalized();

        let x_axis = up_axis.cross(z_axis);
        if x_axis.magnitude_squared() == 0.0 {
            return Err(MatrixError::AmbiguousOrientation);
        }
        let x_axis = x_axis.normalized();

        let y_axis = z_axis.cross(x_axis);
        if y_axis.magnitude_squared() == 0.0 {
            return Err(MatrixError::AmbiguousOrientation);
        }
        let y_axis = y_axis.normalized();

        #[rustfmt::skip]
        let values = [
            x_axis.x, x_axis.y, x_axis.z, -x_axis.dot(eye),
            y_axis.x, y_axis.y, y_axis.z, -y_axis.dot(eye),
            z_axis.x, z_axis.y, z_axis.z, -z_axis.dot(eye),
            0.0,      0.0,      0.0,      1.0,
        ];

        Ok(self.initialize(values))
    }

    /// Places a camera at `position` (or at the current translation) facing
    /// `target`; this is the inverse of [`Matrix4x4::view`].
    pub fn look_at(
        &mut self,
        target: Vec3<f32>,
        position: Option<Vec3<f32>>,
        up: Option<Vec3<f32>>,
    ) -> Result<&mut Self, MatrixError> {
        let position = position.unwrap_or_else(|| self.translation());

        self.view(position, target, up)?.invert()
    }

    /// Per-component interpolation. Rotations are not slerped, so blending two
    /// different orientations shears and scales the intermediate results.
    pub fn lerp(&mut self, target: &Matrix4x4, ratio: f32) -> &mut Self {
        for (value, target_value) in self.m.iter_mut().zip(target.m.iter()) {
            *value += (target_value - *value) * ratio;
        }

        self
    }

    pub fn translation(&self) -> Vec3<f32> {
        Vec3::new(self.m[3], self.m[7], self.m[11])
    }

    pub fn translation_into<'a>(&self, output: &'a mut Vec3<f32>) -> &'a mut Vec3<f32> {
        *output = self.translation();
        output
    }

    pub fn transform_vec4(&self, v: Vec4<f32>) -> Vec4<f32> {
        let m = &self.m;
        Vec4::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z + m[3] * v.w,
            m[4] * v.x + m[5] * v.y + m[6] * v.z + m[7] * v.w,
            m[8] * v.x + m[9] * v.y + m[10] * v.z + m[11] * v.w,
            m[12] * v.x + m[13] * v.y + m[14] * v.z + m[15] * v.w,
        )
    }

    /// Transforms a position (`w = 1`) and divides by the resulting `w`.
    pub fn transform_point(&self, point: Vec3<f32>) -> Vec3<f32> {
        let v = self.transform_vec4(Vec4::new(point.x, point.y, point.z, 1.0));
        Vec3::new(v.x / v.w, v.y / v.w, v.z / v.w)
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(mut self, rhs: Matrix4x4) -> Self::Output {
        self.append(&rhs);
        self
    }
}

/// 2x2 minors of the upper (`s`) and lower (`c`) row pairs.
struct Minors {
    s: [f32; 6],
    c: [f32; 6],
}

impl Minors {
    fn new(m: &[f32; 16]) -> Self {
        Self {
            s: [
                m[0] * m[5] - m[4] * m[1],
                m[0] * m[6] - m[4] * m[2],
                m[0] * m[7] - m[4] * m[3],
                m[1] * m[6] - m[5] * m[2],
                m[1] * m[7] - m[5] * m[3],
                m[2] * m[7] - m[6] * m[3],
            ],
            c: [
                m[8] * m[13] - m[12] * m[9],
                m[8] * m[14] - m[12] * m[10],
                m[8] * m[15] - m[12] * m[11],
                m[9] * m[14] - m[13] * m[10],
                m[9] * m[15] - m[13] * m[11],
                m[10] * m[15] - m[14] * m[11],
            ],
        }
    }

    fn determinant(&self) -> f32 {
        let Self { s, c } = self;
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}

fn multiply(a: &[f32; 16], b: &[f32; 16]) -> [f32; 16] {
    let mut result = [0.0; 16];
    for row in 0..4 {
        for col in 0..4 {
            result[4 * row + col] = a[4 * row] * b[col]
                + a[4 * row + 1] * b[4 + col]
                + a[4 * row + 2] * b[8 + col]
                + a[4 * row + 3] * b[12 + col];
        }
    }

    result
}

#[rustfmt::skip]
fn translation_values(x: f32, y: f32, z: f32) -> [f32; 16] {
    [
        1.0, 0.0, 0.0, x,
        0.0, 1.0, 0.0, y,
        0.0, 0.0, 1.0, z,
        0.0, 0.0, 0.0, 1.0,
    ]
}

fn axis_angle_to_quaternion(radians: f32, axis: Vec3<f32>) -> Quaternion<f32> {
    let axis = axis.normalized();
    let (sin, cos) = (radians * 0.5).sin_cos();

    Quaternion {
        x: axis.x * sin,
        y: axis.y * sin,
        z: axis.z * sin,
        w: cos,
    }
}

// homogeneous form, a non-unit quaternion also scales by its squared length
fn rotation_values(q: Quaternion<f32>) -> [f32; 16] {
    let xy2 = 2.0 * q.x * q.y;
    let xz2 = 2.0 * q.x * q.z;
    let xw2 = 2.0 * q.x * q.w;
    let yz2 = 2.0 * q.y * q.z;
    let yw2 = 2.0 * q.y * q.w;
    let zw2 = 2.0 * q.z * q.w;
    let xx = q.x * q.x;
    let yy = q.y * q.y;
    let zz = q.z * q.z;
    let ww = q.w * q.w;

    #[rustfmt::skip]
    let values = [
        xx - yy - zz + ww, xy2 - zw2,          xz2 + yw2,          0.0,
        xy2 + zw2,         -xx + yy - zz + ww, yz2 - xw2,          0.0,
        xz2 - yw2,         yz2 + xw2,          -xx - yy + zz + ww, 0.0,
        0.0,               0.0,                0.0,                1.0,
    ];

    values
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

    use approx::assert_abs_diff_eq;
    use vek::{Quaternion, Vec3, Vec4};

    use super::{Matrix4x4, MatrixError};

    const EPSILON: f32 = 1e-5;

    fn assert_matrix_eq(a: &Matrix4x4, b: &Matrix4x4) {
        for (x, y) in a.values().iter().zip(b.values().iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = EPSILON);
        }
    }

    fn assert_vec3_eq(a: Vec3<f32>, b: Vec3<f32>) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = EPSILON);
        assert_abs_diff_eq!(a.y, b.y, epsilon = EPSILON);
        assert_abs_diff_eq!(a.z, b.z, epsilon = EPSILON);
    }

    fn sample_matrix() -> Matrix4x4 {
        let mut matrix = Matrix4x4::new();
        matrix
            .rotation_y(0.7)
            .append_translation(1.0, -2.0, 3.0)
            .append_rotation(0.3, Vec3::new(1.0, 1.0, 0.0))
            .prepend_values([
                2.0, 0.0, 0.0, 0.0, //
                0.0, 0.5, 0.0, 0.0, //
                0.0, 0.0, 1.5, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ]);
        matrix
    }

    #[test]
    fn identity_append_yields_other() {
        let other = sample_matrix();

        let mut matrix = Matrix4x4::zero();
        matrix.identity().append(&other);

        assert_matrix_eq(&matrix, &other);
    }

    #[test]
    fn append_and_prepend_differ_in_general() {
        let mut rotation = Matrix4x4::new();
        rotation.rotation_z(FRAC_PI_4);

        let mut appended = Matrix4x4::new();
        appended.set_translation(1.0, 0.0, 0.0).append(&rotation);

        let mut prepended = Matrix4x4::new();
        prepended.set_translation(1.0, 0.0, 0.0).prepend(&rotation);

        assert_ne!(appended, prepended);

        // translation applied after the rotation in the prepended case
        assert_vec3_eq(appended.translation(), Vec3::new(1.0, 0.0, 0.0));
        assert_vec3_eq(
            prepended.translation(),
            Vec3::new(FRAC_PI_4.cos(), FRAC_PI_4.sin(), 0.0),
        );
    }

    #[test]
    fn append_and_prepend_agree_on_commuting_matrices() {
        let scale_a = Matrix4x4::from_row_array([
            2.0, 0.0, 0.0, 0.0, //
            0.0, 3.0, 0.0, 0.0, //
            0.0, 0.0, 4.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        let scale_b = Matrix4x4::from_row_array([
            5.0, 0.0, 0.0, 0.0, //
            0.0, 0.5, 0.0, 0.0, //
            0.0, 0.0, 0.25, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);

        let mut appended = scale_a;
        appended.append(&scale_b);
        let mut prepended = scale_a;
        prepended.prepend(&scale_b);

        assert_matrix_eq(&appended, &prepended);
    }

    #[test]
    fn mul_matches_append() {
        let a = sample_matrix();
        let mut b = Matrix4x4::new();
        b.rotation_x(0.4).append_translation(0.0, 1.0, 0.0);

        let mut appended = a;
        appended.append(&b);

        assert_matrix_eq(&(a * b), &appended);
    }

    #[test]
    fn translation_round_trips() {
        let mut matrix = Matrix4x4::new();
        matrix.set_translation(1.5, -2.0, 7.25);

        assert_eq!(matrix.translation(), Vec3::new(1.5, -2.0, 7.25));

        let mut output = Vec3::zero();
        matrix.translation_into(&mut output);
        assert_eq!(output, Vec3::new(1.5, -2.0, 7.25));
    }

    #[test]
    fn prepend_translation_moves_in_parent_space() {
        let mut rotation = Matrix4x4::new();
        rotation.rotation_z(FRAC_PI_2);

        let mut prepended = rotation;
        prepended.prepend_translation(1.0, 2.0, 3.0);
        assert_vec3_eq(prepended.translation(), Vec3::new(1.0, 2.0, 3.0));

        for row in 0..3 {
            for col in 0..3 {
                let index = 4 * row + col;
                assert_abs_diff_eq!(
                    prepended.values()[index],
                    rotation.values()[index],
                    epsilon = EPSILON
                );
            }
        }

        // appending moves along the rotated axes instead
        let mut appended = rotation;
        appended.append_translation(1.0, 2.0, 3.0);
        assert_vec3_eq(appended.translation(), Vec3::new(-2.0, 1.0, 3.0));
        assert_ne!(prepended, appended);
    }

    #[test]
    fn translation_moves_points() {
        let mut matrix = Matrix4x4::new();
        matrix.set_translation(1.0, 2.0, 3.0);

        assert_vec3_eq(
            matrix.transform_point(Vec3::new(1.0, 1.0, 1.0)),
            Vec3::new(2.0, 3.0, 4.0),
        );
    }

    #[test]
    fn canonical_rotations_are_right_handed() {
        let mut matrix = Matrix4x4::new();

        matrix.rotation_x(FRAC_PI_2);
        assert_vec3_eq(matrix.transform_point(Vec3::unit_y()), Vec3::unit_z());

        matrix.rotation_y(FRAC_PI_2);
        assert_vec3_eq(matrix.transform_point(Vec3::unit_z()), Vec3::unit_x());

        matrix.rotation_z(FRAC_PI_2);
        assert_vec3_eq(matrix.transform_point(Vec3::unit_x()), Vec3::unit_y());
    }

    #[test]
    fn axis_angle_rotation_agrees_with_canonical_rotations() {
        let angle = FRAC_PI_3;

        let mut expected = Matrix4x4::new();
        let mut rotation = Matrix4x4::new();

        expected.rotation_x(angle);
        rotation.identity().append_rotation(angle, Vec3::unit_x());
        assert_matrix_eq(&rotation, &expected);

        expected.rotation_y(angle);
        rotation.identity().prepend_rotation(angle, Vec3::new(0.0, 3.0, 0.0));
        assert_matrix_eq(&rotation, &expected);

        expected.rotation_z(angle);
        rotation.identity().append_rotation(angle, Vec3::unit_z());
        assert_matrix_eq(&rotation, &expected);
    }

    #[test]
    fn quaternion_rotation_agrees_with_axis_angle() {
        let angle = 1.1f32;
        let axis = Vec3::new(1.0, 2.0, -0.5).normalized();
        let (sin, cos) = (angle * 0.5).sin_cos();
        let quaternion = Quaternion {
            x: axis.x * sin,
            y: axis.y * sin,
            z: axis.z * sin,
            w: cos,
        };

        let mut from_quaternion = sample_matrix();
        from_quaternion.append_quaternion_rotation(quaternion);
        let mut from_axis_angle = sample_matrix();
        from_axis_angle.append_rotation(angle, axis);
        assert_matrix_eq(&from_quaternion, &from_axis_angle);

        let mut from_quaternion = sample_matrix();
        from_quaternion.prepend_quaternion_rotation(quaternion);
        let mut from_axis_angle = sample_matrix();
        from_axis_angle.prepend_rotation(angle, axis);
        assert_matrix_eq(&from_quaternion, &from_axis_angle);
    }

    #[test]
    fn determinant_of_known_matrices() {
        assert_abs_diff_eq!(Matrix4x4::new().determinant(), 1.0, epsilon = EPSILON);

        let scale = Matrix4x4::from_row_array([
            2.0, 0.0, 0.0, 0.0, //
            0.0, 3.0, 0.0, 0.0, //
            0.0, 0.0, 4.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        assert_abs_diff_eq!(scale.determinant(), 24.0, epsilon = EPSILON);

        let mut rotation = Matrix4x4::new();
        rotation.rotation_z(0.8).append_translation(4.0, 5.0, 6.0);
        assert_abs_diff_eq!(rotation.determinant(), 1.0, epsilon = EPSILON);

        // swapping two rows flips the sign
        let swapped = Matrix4x4::from_row_array([
            0.0, 1.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        assert_abs_diff_eq!(swapped.determinant(), -1.0, epsilon = EPSILON);
    }

    #[test]
    fn invert_twice_restores_matrix() {
        let original = sample_matrix();

        let mut matrix = original;
        matrix.invert().unwrap().invert().unwrap();

        assert_matrix_eq(&matrix, &original);
    }

    #[test]
    fn matrix_times_inverse_is_identity() {
        let original = sample_matrix();

        let mut inverse = original;
        inverse.invert().unwrap();

        assert_matrix_eq(&(original * inverse), &Matrix4x4::new());
        assert_matrix_eq(&(inverse * original), &Matrix4x4::new());
    }

    #[test]
    fn invert_singular_matrix_fails() {
        let values = [
            1.0, 2.0, 3.0, 4.0, //
            0.0, 0.0, 0.0, 0.0, //
            5.0, 6.0, 7.0, 8.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        let mut matrix = Matrix4x4::from_row_array(values);

        assert_eq!(matrix.determinant(), 0.0);
        assert_eq!(matrix.invert().unwrap_err(), MatrixError::SingularMatrix);
        assert_eq!(matrix.values(), &values);
    }

    #[test]
    fn lerp_endpoints() {
        let start = sample_matrix();
        let mut target = Matrix4x4::new();
        target.rotation_x(1.0).append_translation(3.0, 2.0, 1.0);

        let mut matrix = start;
        matrix.lerp(&target, 0.0);
        assert_matrix_eq(&matrix, &start);

        matrix.lerp(&target, 1.0);
        assert_matrix_eq(&matrix, &target);
    }

    #[test]
    fn lerp_is_per_component() {
        let mut matrix = Matrix4x4::zero();
        let target = Matrix4x4::from_row_array([4.0; 16]);

        matrix.lerp(&target, 0.25);

        assert_eq!(matrix.values(), &[1.0; 16]);
    }

    #[test]
    fn copy_from_is_deep() {
        let source = sample_matrix();

        let mut matrix = Matrix4x4::zero();
        matrix.copy_from(&source).append_translation(1.0, 1.0, 1.0);

        assert_ne!(matrix, source);
        assert_matrix_eq(&source, &sample_matrix());
    }

    #[test]
    fn perspective_maps_clip_planes_to_unit_depth() {
        let mut projection = Matrix4x4::new();
        projection.perspective_fov(FRAC_PI_2, 16.0 / 9.0, 0.1, 100.0);

        let near = projection.transform_point(Vec3::new(0.0, 0.0, -0.1));
        let far = projection.transform_point(Vec3::new(0.0, 0.0, -100.0));
        assert_abs_diff_eq!(near.z, 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(far.z, 1.0, epsilon = 1e-4);

        // with a 90 degree vertical fov the frustum edge sits at y == -z
        let top = projection.transform_point(Vec3::new(0.0, 10.0, -10.0));
        assert_abs_diff_eq!(top.y, 1.0, epsilon = EPSILON);

        let right = projection.transform_point(Vec3::new(16.0 / 9.0 * 10.0, 0.0, -10.0));
        assert_abs_diff_eq!(right.x, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn view_puts_target_in_front_of_camera() {
        let eye = Vec3::new(3.0, 4.0, 5.0);
        let target = Vec3::new(-1.0, 0.5, 2.0);

        let mut view = Matrix4x4::new();
        view.view(eye, target, None).unwrap();

        assert_vec3_eq(view.transform_point(eye), Vec3::zero());

        let distance = (target - eye).magnitude();
        assert_vec3_eq(view.transform_point(target), Vec3::new(0.0, 0.0, -distance));

        // orthonormal basis
        assert_abs_diff_eq!(view.determinant(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn view_keeps_up_axis_upwards() {
        let mut view = Matrix4x4::new();
        view.view(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::zero(),
            Some(Vec3::unit_y()),
        )
        .unwrap();

        let up = view.transform_vec4(Vec4::new(0.0, 1.0, 0.0, 0.0));
        assert_abs_diff_eq!(up.y, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn view_along_y_substitutes_up_axis() {
        let mut view = Matrix4x4::new();
        view.view(Vec3::zero(), Vec3::new(0.0, 1.0, 0.0), None)
            .unwrap();

        let values = view.values();
        for row in 0..3 {
            let basis = Vec3::new(values[4 * row], values[4 * row + 1], values[4 * row + 2]);
            assert_abs_diff_eq!(basis.magnitude(), 1.0, epsilon = EPSILON);
        }

        assert_vec3_eq(
            view.transform_point(Vec3::new(0.0, 2.0, 0.0)),
            Vec3::new(0.0, 0.0, -2.0),
        );
    }

    #[test]
    fn view_straight_down_substitutes_up_axis() {
        let mut view = Matrix4x4::new();
        view.view(Vec3::zero(), Vec3::new(0.0, -1.0, 0.0), None)
            .unwrap();

        let values = view.values();
        let x_axis = Vec3::new(values[0], values[1], values[2]);
        let y_axis = Vec3::new(values[4], values[5], values[6]);
        let z_axis = Vec3::new(values[8], values[9], values[10]);
        assert_vec3_eq(x_axis, Vec3::new(0.0, 0.0, 1.0));
        assert_vec3_eq(y_axis, Vec3::new(1.0, 0.0, 0.0));
        assert_vec3_eq(z_axis, Vec3::new(0.0, 1.0, 0.0));

        assert_vec3_eq(
            view.transform_point(Vec3::new(0.0, -3.0, 0.0)),
            Vec3::new(0.0, 0.0, -3.0),
        );
    }

    #[test]
    fn view_with_colinear_up_fails() {
        let mut view = Matrix4x4::new();

        let result = view.view(
            Vec3::zero(),
            Vec3::new(0.0, 0.0, -1.0),
            Some(Vec3::new(0.0, 0.0, 2.0)),
        );
        assert_eq!(result.unwrap_err(), MatrixError::AmbiguousOrientation);

        let result = view.view(Vec3::one(), Vec3::one(), None);
        assert_eq!(result.unwrap_err(), MatrixError::AmbiguousOrientation);

        assert_eq!(view, Matrix4x4::new());
    }

    #[test]
    fn look_at_is_inverse_of_view() {
        let eye = Vec3::new(2.0, 3.0, -4.0);
        let target = Vec3::new(0.0, 1.0, 0.0);

        let mut view = Matrix4x4::new();
        view.view(eye, target, None).unwrap();

        let mut camera = Matrix4x4::new();
        camera.look_at(target, Some(eye), None).unwrap();

        assert_matrix_eq(&(view * camera), &Matrix4x4::new());
        assert_vec3_eq(camera.translation(), eye);

        // the camera looks down its local -Z
        let forward = camera.transform_vec4(Vec4::new(0.0, 0.0, -1.0, 0.0));
        let expected = (target - eye).normalized();
        assert_vec3_eq(Vec3::new(forward.x, forward.y, forward.z), expected);
    }

    #[test]
    fn look_at_without_position_keeps_translation() {
        let mut camera = Matrix4x4::new();
        camera.set_translation(5.0, 1.0, 5.0);

        camera.look_at(Vec3::zero(), None, None).unwrap();
        assert_vec3_eq(camera.translation(), Vec3::new(5.0, 1.0, 5.0));

        camera.look_at(Vec3::new(0.0, 10.0, 0.0), None, None).unwrap();
        assert_vec3_eq(camera.translation(), Vec3::new(5.0, 1.0, 5.0));
    }

    #[test]
    fn look_at_own_position_fails() {
        let mut camera = Matrix4x4::new();
        camera.set_translation(1.0, 2.0, 3.0);

        let result = camera.look_at(Vec3::new(1.0, 2.0, 3.0), None, None);
        assert_eq!(result.unwrap_err(), MatrixError::AmbiguousOrientation);
    }
}
