//! 4x4 transform matrix
//!
//! Row-major with the row-vector convention: points are rows, transformed by
//! right-multiplication (`p' = p * m`), so products read left to right in
//! application order (`m1 * m2` applies `m1` first). Row 3 holds the
//! translation of an affine transform.
//!
//! Nothing enforces invertibility. [`inverse`](Mat4::inverse) divides by the
//! determinant unconditionally and hands back non-finite lanes for singular
//! input together with the determinant for the caller to check;
//! [`decompose`](Mat4::decompose) is the one operation with an explicit
//! failure return.

use crate::plane::Plane;
use crate::quaternion::Quat;
use crate::scalar;
use crate::vector::{Vec2, Vec3, Vec4};
use core::ops::{Add, Div, Mul, MulAssign, Neg, Sub};

const DECOMPOSE_EPSILON: f32 = 1e-4;

/// 4x4 row-major matrix
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C, align(16))]
pub struct Mat4 {
    pub rows: [Vec4; 4],
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        rows: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    pub const ZERO: Self = Self {
        rows: [Vec4::ZERO, Vec4::ZERO, Vec4::ZERO, Vec4::ZERO],
    };

    #[inline]
    pub const fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self { rows: [r0, r1, r2, r3] }
    }

    #[inline]
    pub const fn from_rows_array(m: [[f32; 4]; 4]) -> Self {
        Self::from_rows(
            Vec4::from_array(m[0]),
            Vec4::from_array(m[1]),
            Vec4::from_array(m[2]),
            Vec4::from_array(m[3]),
        )
    }

    #[inline]
    pub fn to_rows_array(&self) -> [[f32; 4]; 4] {
        [
            self.rows[0].to_array(),
            self.rows[1].to_array(),
            self.rows[2].to_array(),
            self.rows[3].to_array(),
        ]
    }

    #[inline]
    pub fn row(&self, index: usize) -> Vec4 {
        self.rows[index]
    }

    #[inline]
    pub fn col(&self, index: usize) -> Vec4 {
        Vec4::new(
            self.rows[0].lane(index),
            self.rows[1].lane(index),
            self.rows[2].lane(index),
            self.rows[3].lane(index),
        )
    }

    /// Translation row of an affine matrix.
    #[inline]
    pub fn get_translation(&self) -> Vec3 {
        self.rows[3].truncate()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.rows[0].all_eq(Vec4::X)
            && self.rows[1].all_eq(Vec4::Y)
            && self.rows[2].all_eq(Vec4::Z)
            && self.rows[3].all_eq(Vec4::W)
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.rows.iter().any(|r| r.is_nan())
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.rows.iter().any(|r| r.is_infinite())
    }

    // --- algebra ------------------------------------------------------------

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.col(0), self.col(1), self.col(2), self.col(3))
    }

    /// `transpose(m1 * m2)` in one pass: row j of the result is column j of
    /// the product.
    pub fn multiply_transpose(m1: Self, m2: Self) -> Self {
        let mut rows = [Vec4::ZERO; 4];
        for (j, row) in rows.iter_mut().enumerate() {
            let c = m2.col(j);
            *row = Vec4::new(
                m1.rows[0].dot(c).x,
                m1.rows[1].dot(c).x,
                m1.rows[2].dot(c).x,
                m1.rows[3].dot(c).x,
            );
        }
        Self { rows }
    }

    /// Determinant by Laplace expansion over 2x2 minors, splatted into all
    /// four lanes.
    pub fn determinant(&self) -> Vec4 {
        let (s, c) = self.split_minors();
        Vec4::splat(
            s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0],
        )
    }

    // 2x2 minors of the top row pair (s) and bottom row pair (c); the
    // adjugate and the determinant both expand over these.
    #[inline]
    fn split_minors(&self) -> ([f32; 6], [f32; 6]) {
        let a = self.rows[0];
        let b = self.rows[1];
        let c = self.rows[2];
        let d = self.rows[3];

        let s = [
            a.x * b.y - b.x * a.y,
            a.x * b.z - b.x * a.z,
            a.x * b.w - b.x * a.w,
            a.y * b.z - b.y * a.z,
            a.y * b.w - b.y * a.w,
            a.z * b.w - b.z * a.w,
        ];
        let m = [
            c.x * d.y - d.x * c.y,
            c.x * d.z - d.x * c.z,
            c.x * d.w - d.x * c.w,
            c.y * d.z - d.y * c.z,
            c.y * d.w - d.y * c.w,
            c.z * d.w - d.z * c.w,
        ];
        (s, m)
    }

    /// Adjugate over the determinant, plus the determinant splatted for the
    /// caller to inspect.
    ///
    /// A zero determinant is NOT special-cased: the division simply floods
    /// the result with infinities or NaNs. Check the returned determinant
    /// before trusting the matrix.
    pub fn inverse(&self) -> (Self, Vec4) {
        let a = self.rows[0];
        let b = self.rows[1];
        let c = self.rows[2];
        let d = self.rows[3];

        let (s, m) = self.split_minors();
        let (s0, s1, s2, s3, s4, s5) = (s[0], s[1], s[2], s[3], s[4], s[5]);
        let (c0, c1, c2, c3, c4, c5) = (m[0], m[1], m[2], m[3], m[4], m[5]);

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        let inv_det = 1.0 / det;

        let inverse = Self::from_rows(
            Vec4::new(
                (b.y * c5 - b.z * c4 + b.w * c3) * inv_det,
                (-a.y * c5 + a.z * c4 - a.w * c3) * inv_det,
                (d.y * s5 - d.z * s4 + d.w * s3) * inv_det,
                (-c.y * s5 + c.z * s4 - c.w * s3) * inv_det,
            ),
            Vec4::new(
                (-b.x * c5 + b.z * c2 - b.w * c1) * inv_det,
                (a.x * c5 - a.z * c2 + a.w * c1) * inv_det,
                (-d.x * s5 + d.z * s2 - d.w * s1) * inv_det,
                (c.x * s5 - c.z * s2 + c.w * s1) * inv_det,
            ),
            Vec4::new(
                (b.x * c4 - b.y * c2 + b.w * c0) * inv_det,
                (-a.x * c4 + a.y * c2 - a.w * c0) * inv_det,
                (d.x * s4 - d.y * s2 + d.w * s0) * inv_det,
                (-c.x * s4 + c.y * s2 - c.w * s0) * inv_det,
            ),
            Vec4::new(
                (-b.x * c3 + b.y * c1 - b.z * c0) * inv_det,
                (a.x * c3 - a.y * c1 + a.z * c0) * inv_det,
                (-d.x * s3 + d.y * s1 - d.z * s0) * inv_det,
                (c.x * s3 - c.y * s1 + c.z * s0) * inv_det,
            ),
        );
        (inverse, Vec4::splat(det))
    }

    /// Splits an affine transform into per-axis scale, rotation and
    /// translation.
    ///
    /// Axes whose scale drops below the decompose epsilon are rebuilt from
    /// the canonical basis and cross products, largest surviving axis first.
    /// A reflection is corrected by negating the smallest-scale axis. Returns
    /// `None` when what remains after correction is not a clean rotation.
    pub fn decompose(&self) -> Option<(Vec3, Quat, Vec3)> {
        const CANONICAL: [Vec3; 3] = [Vec3::X, Vec3::Y, Vec3::Z];

        let translation = self.rows[3].truncate();

        let mut basis = [
            self.rows[0].truncate(),
            self.rows[1].truncate(),
            self.rows[2].truncate(),
        ];
        let mut scale = [basis[0].length(), basis[1].length(), basis[2].length()];

        let (a, b, c) = rank_scales(scale[0], scale[1], scale[2]);

        if scale[a] < DECOMPOSE_EPSILON {
            basis[a] = CANONICAL[a];
        }
        basis[a] = basis[a].normalize();

        if scale[b] < DECOMPOSE_EPSILON {
            let abs = basis[a].abs();
            let (_, _, cc) = rank_scales(abs.x, abs.y, abs.z);
            basis[b] = basis[a].cross(CANONICAL[cc]);
        }
        basis[b] = basis[b].normalize();

        if scale[c] < DECOMPOSE_EPSILON {
            basis[c] = basis[a].cross(basis[b]);
        }
        basis[c] = basis[c].normalize();

        let mut rotation = Self::from_rows(
            basis[0].extend(0.0),
            basis[1].extend(0.0),
            basis[2].extend(0.0),
            Vec4::W,
        );
        let mut det = rotation.determinant().x;

        // Improper rotation: flip the weakest axis to restore orientation.
        if det < 0.0 {
            scale[a] = -scale[a];
            basis[a] = -basis[a];
            rotation.rows[a] = basis[a].extend(0.0);
            det = -det;
        }

        det -= 1.0;
        det *= det;
        if det > DECOMPOSE_EPSILON {
            return None;
        }

        let q = Quat::from_rotation_matrix(&rotation);
        Some((Vec3::new(scale[0], scale[1], scale[2]), q, translation))
    }

    // --- constructors -------------------------------------------------------

    #[inline]
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::from_rows(Vec4::X, Vec4::Y, Vec4::Z, Vec4::new(x, y, z, 1.0))
    }

    #[inline]
    pub fn translation_vec3(offset: Vec3) -> Self {
        Self::translation(offset.x, offset.y, offset.z)
    }

    #[inline]
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Self::from_rows(
            Vec4::new(x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, z, 0.0),
            Vec4::W,
        )
    }

    #[inline]
    pub fn scaling_vec3(scale: Vec3) -> Self {
        Self::scaling(scale.x, scale.y, scale.z)
    }

    pub fn rotation_x(angle: f32) -> Self {
        let (sin, cos) = scalar::sin_cos(angle);
        Self::from_rows(
            Vec4::X,
            Vec4::new(0.0, cos, sin, 0.0),
            Vec4::new(0.0, -sin, cos, 0.0),
            Vec4::W,
        )
    }

    pub fn rotation_y(angle: f32) -> Self {
        let (sin, cos) = scalar::sin_cos(angle);
        Self::from_rows(
            Vec4::new(cos, 0.0, -sin, 0.0),
            Vec4::Y,
            Vec4::new(sin, 0.0, cos, 0.0),
            Vec4::W,
        )
    }

    pub fn rotation_z(angle: f32) -> Self {
        let (sin, cos) = scalar::sin_cos(angle);
        Self::from_rows(
            Vec4::new(cos, sin, 0.0, 0.0),
            Vec4::new(-sin, cos, 0.0, 0.0),
            Vec4::Z,
            Vec4::W,
        )
    }

    /// Rotation about an arbitrary axis of any length; the axis must not be
    /// zero.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        debug_assert!(axis.length_squared() > 0.0, "rotation axis must not be zero");
        debug_assert!(!axis.is_infinite());
        Self::from_normal_angle(axis.normalize(), angle)
    }

    /// Rodrigues rotation about a unit-length axis.
    pub fn from_normal_angle(normal: Vec3, angle: f32) -> Self {
        let (s, c) = scalar::sin_cos(angle);
        let t = 1.0 - c;
        let (x, y, z) = (normal.x, normal.y, normal.z);

        Self::from_rows(
            Vec4::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0),
            Vec4::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0),
            Vec4::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0),
            Vec4::W,
        )
    }

    /// Rotation matrix of a unit quaternion.
    pub fn from_quat(q: Quat) -> Self {
        let x2 = q.x + q.x;
        let y2 = q.y + q.y;
        let z2 = q.z + q.z;

        let xx = q.x * x2;
        let xy = q.x * y2;
        let xz = q.x * z2;
        let yy = q.y * y2;
        let yz = q.y * z2;
        let zz = q.z * z2;
        let wx = q.w * x2;
        let wy = q.w * y2;
        let wz = q.w * z2;

        Self::from_rows(
            Vec4::new(1.0 - (yy + zz), xy + wz, xz - wy, 0.0),
            Vec4::new(xy - wz, 1.0 - (xx + zz), yz + wx, 0.0),
            Vec4::new(xz + wy, yz - wx, 1.0 - (xx + yy), 0.0),
            Vec4::W,
        )
    }

    /// Applies roll (about z), then pitch (about x), then yaw (about y).
    #[inline]
    pub fn from_roll_pitch_yaw(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self::rotation_z(roll) * Self::rotation_x(pitch) * Self::rotation_y(yaw)
    }

    /// Angles packed as `(pitch, yaw, roll)` in x, y, z.
    #[inline]
    pub fn from_roll_pitch_yaw_vec3(angles: Vec3) -> Self {
        Self::from_roll_pitch_yaw(angles.x, angles.y, angles.z)
    }

    /// Full 2D SRT composition lifted into the xy-plane.
    pub fn transformation_2d(
        scaling_origin: Vec2,
        scaling_orientation: f32,
        scaling: Vec2,
        rotation_origin: Vec2,
        rotation: f32,
        translation: Vec2,
    ) -> Self {
        let v_scaling_origin = Vec4::new(scaling_origin.x, scaling_origin.y, 0.0, 0.0);
        let v_rotation_origin = Vec4::new(rotation_origin.x, rotation_origin.y, 0.0, 0.0);
        let v_translation = Vec4::new(translation.x, translation.y, 0.0, 0.0);

        let m_scaling_orientation = Self::rotation_z(scaling_orientation);

        let mut m = Self::translation(-scaling_origin.x, -scaling_origin.y, 0.0)
            * m_scaling_orientation.transpose();
        m = m * Self::scaling(scaling.x, scaling.y, 1.0);
        m = m * m_scaling_orientation;
        m.rows[3] = m.rows[3] + v_scaling_origin - v_rotation_origin;
        m = m * Self::rotation_z(rotation);
        m.rows[3] = m.rows[3] + v_rotation_origin + v_translation;
        m
    }

    /// 2D scale, rotation about a point, then translation.
    pub fn affine_transformation_2d(
        scaling: Vec2,
        rotation_origin: Vec2,
        rotation: f32,
        translation: Vec2,
    ) -> Self {
        let v_rotation_origin = Vec4::new(rotation_origin.x, rotation_origin.y, 0.0, 0.0);
        let v_translation = Vec4::new(translation.x, translation.y, 0.0, 0.0);

        let mut m = Self::scaling(scaling.x, scaling.y, 1.0);
        m.rows[3] = m.rows[3] - v_rotation_origin;
        m = m * Self::rotation_z(rotation);
        m.rows[3] = m.rows[3] + v_rotation_origin + v_translation;
        m
    }

    /// Full decomposed-transform composition:
    /// `T(-so) * R(soq)^T * S * R(soq) * T(so - ro) * R(rq) * T(ro + t)`.
    pub fn transformation(
        scaling_origin: Vec3,
        scaling_orientation: Quat,
        scaling: Vec3,
        rotation_origin: Vec3,
        rotation: Quat,
        translation: Vec3,
    ) -> Self {
        let v_scaling_origin = scaling_origin.extend(0.0);
        let v_rotation_origin = rotation_origin.extend(0.0);
        let v_translation = translation.extend(0.0);

        let m_scaling_orientation = Self::from_quat(scaling_orientation);

        let mut m = Self::translation_vec3(-scaling_origin) * m_scaling_orientation.transpose();
        m = m * Self::scaling_vec3(scaling);
        m = m * m_scaling_orientation;
        m.rows[3] = m.rows[3] + v_scaling_origin - v_rotation_origin;
        m = m * Self::from_quat(rotation);
        m.rows[3] = m.rows[3] + v_rotation_origin + v_translation;
        m
    }

    /// Scale, rotation about a point, then translation.
    pub fn affine_transformation(
        scaling: Vec3,
        rotation_origin: Vec3,
        rotation: Quat,
        translation: Vec3,
    ) -> Self {
        let v_rotation_origin = rotation_origin.extend(0.0);
        let v_translation = translation.extend(0.0);

        let mut m = Self::scaling_vec3(scaling);
        m.rows[3] = m.rows[3] - v_rotation_origin;
        m = m * Self::from_quat(rotation);
        m.rows[3] = m.rows[3] + v_rotation_origin + v_translation;
        m
    }

    /// Mirrors geometry about a plane. The plane must have a usable normal.
    pub fn reflect(reflection_plane: Plane) -> Self {
        debug_assert!(
            reflection_plane.normal().length_squared() > 0.0,
            "reflection plane normal must not be zero"
        );
        debug_assert!(!reflection_plane.is_infinite());

        let p = reflection_plane.normalize().to_vec4();
        let s = Vec4::new(-2.0 * p.x, -2.0 * p.y, -2.0 * p.z, 0.0);

        Self::from_rows(
            Vec4::splat(p.x).mul_add(s, Vec4::X),
            Vec4::splat(p.y).mul_add(s, Vec4::Y),
            Vec4::splat(p.z).mul_add(s, Vec4::Z),
            Vec4::splat(p.w).mul_add(s, Vec4::W),
        )
    }

    /// Flattens geometry onto a plane as seen from `light_position`
    /// (w = 0 for directional lights, 1 for point lights).
    pub fn shadow(shadow_plane: Plane, light_position: Vec4) -> Self {
        debug_assert!(
            shadow_plane.normal().length_squared() > 0.0,
            "shadow plane normal must not be zero"
        );
        debug_assert!(!shadow_plane.is_infinite());

        let p = shadow_plane.normalize();
        let dot = p.dot(light_position);
        let np = [-p.a, -p.b, -p.c, -p.d];

        let mut rows = [Vec4::ZERO; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            *row = light_position * np[i];
            *row = row.with_lane(i, row.lane(i) + dot);
        }
        Self { rows }
    }

    /// Left-handed view matrix looking from `eye_position` toward
    /// `focus_position`.
    #[inline]
    pub fn look_at_lh(eye_position: Vec3, focus_position: Vec3, up_direction: Vec3) -> Self {
        Self::look_to_lh(eye_position, focus_position - eye_position, up_direction)
    }

    /// Right-handed counterpart of [`look_at_lh`](Self::look_at_lh).
    #[inline]
    pub fn look_at_rh(eye_position: Vec3, focus_position: Vec3, up_direction: Vec3) -> Self {
        Self::look_to_rh(eye_position, focus_position - eye_position, up_direction)
    }

    /// Left-handed view matrix looking along `eye_direction`.
    pub fn look_to_lh(eye_position: Vec3, eye_direction: Vec3, up_direction: Vec3) -> Self {
        debug_assert!(
            eye_direction.length_squared() > 0.0,
            "view direction must not be zero"
        );
        debug_assert!(!eye_direction.is_infinite());
        debug_assert!(
            up_direction.length_squared() > 0.0,
            "up direction must not be zero"
        );
        debug_assert!(!up_direction.is_infinite());

        let r2 = eye_direction.normalize();
        let r0 = up_direction.cross(r2).normalize();
        let r1 = r2.cross(r0);

        let neg_eye = -eye_position;
        let d0 = r0.dot(neg_eye);
        let d1 = r1.dot(neg_eye);
        let d2 = r2.dot(neg_eye);

        Self::from_rows(r0.extend(d0), r1.extend(d1), r2.extend(d2), Vec4::W).transpose()
    }

    /// Right-handed view: the left-handed build with the direction negated.
    #[inline]
    pub fn look_to_rh(eye_position: Vec3, eye_direction: Vec3, up_direction: Vec3) -> Self {
        Self::look_to_lh(eye_position, -eye_direction, up_direction)
    }

    // --- projections (D3D-style [0, 1] depth range) -------------------------

    pub fn perspective_lh(width: f32, height: f32, z_near: f32, z_far: f32) -> Self {
        debug_assert!(z_near > 0.0 && z_far > 0.0);
        debug_assert!(width.abs() > 1e-5 && height.abs() > 1e-5);
        debug_assert!((z_far - z_near).abs() > 1e-5);

        let two_near = z_near + z_near;
        let range = z_far / (z_far - z_near);

        Self::from_rows(
            Vec4::new(two_near / width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, two_near / height, 0.0, 0.0),
            Vec4::new(0.0, 0.0, range, 1.0),
            Vec4::new(0.0, 0.0, -range * z_near, 0.0),
        )
    }

    pub fn perspective_rh(width: f32, height: f32, z_near: f32, z_far: f32) -> Self {
        debug_assert!(z_near > 0.0 && z_far > 0.0);
        debug_assert!(width.abs() > 1e-5 && height.abs() > 1e-5);
        debug_assert!((z_far - z_near).abs() > 1e-5);

        let two_near = z_near + z_near;
        let range = z_far / (z_near - z_far);

        Self::from_rows(
            Vec4::new(two_near / width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, two_near / height, 0.0, 0.0),
            Vec4::new(0.0, 0.0, range, -1.0),
            Vec4::new(0.0, 0.0, range * z_near, 0.0),
        )
    }

    pub fn perspective_fov_lh(fov_angle_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        debug_assert!(z_near > 0.0 && z_far > 0.0);
        debug_assert!(fov_angle_y.abs() > 2e-5);
        debug_assert!(aspect_ratio.abs() > 1e-5);
        debug_assert!((z_far - z_near).abs() > 1e-5);

        let (sin_fov, cos_fov) = scalar::sin_cos(fov_angle_y * 0.5);
        let height = cos_fov / sin_fov;
        let width = height / aspect_ratio;
        let range = z_far / (z_far - z_near);

        Self::from_rows(
            Vec4::new(width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, height, 0.0, 0.0),
            Vec4::new(0.0, 0.0, range, 1.0),
            Vec4::new(0.0, 0.0, -range * z_near, 0.0),
        )
    }

    pub fn perspective_fov_rh(fov_angle_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        debug_assert!(z_near > 0.0 && z_far > 0.0);
        debug_assert!(fov_angle_y.abs() > 2e-5);
        debug_assert!(aspect_ratio.abs() > 1e-5);
        debug_assert!((z_far - z_near).abs() > 1e-5);

        let (sin_fov, cos_fov) = scalar::sin_cos(fov_angle_y * 0.5);
        let height = cos_fov / sin_fov;
        let width = height / aspect_ratio;
        let range = z_far / (z_near - z_far);

        Self::from_rows(
            Vec4::new(width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, height, 0.0, 0.0),
            Vec4::new(0.0, 0.0, range, -1.0),
            Vec4::new(0.0, 0.0, range * z_near, 0.0),
        )
    }

    pub fn perspective_off_center_lh(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        debug_assert!(z_near > 0.0 && z_far > 0.0);
        debug_assert!((right - left).abs() > 1e-5);
        debug_assert!((top - bottom).abs() > 1e-5);
        debug_assert!((z_far - z_near).abs() > 1e-5);

        let two_near = z_near + z_near;
        let rcp_width = 1.0 / (right - left);
        let rcp_height = 1.0 / (top - bottom);
        let range = z_far / (z_far - z_near);

        Self::from_rows(
            Vec4::new(two_near * rcp_width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, two_near * rcp_height, 0.0, 0.0),
            Vec4::new(
                -(left + right) * rcp_width,
                -(top + bottom) * rcp_height,
                range,
                1.0,
            ),
            Vec4::new(0.0, 0.0, -range * z_near, 0.0),
        )
    }

    pub fn perspective_off_center_rh(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        debug_assert!(z_near > 0.0 && z_far > 0.0);
        debug_assert!((right - left).abs() > 1e-5);
        debug_assert!((top - bottom).abs() > 1e-5);
        debug_assert!((z_far - z_near).abs() > 1e-5);

        let two_near = z_near + z_near;
        let rcp_width = 1.0 / (right - left);
        let rcp_height = 1.0 / (top - bottom);
        let range = z_far / (z_near - z_far);

        Self::from_rows(
            Vec4::new(two_near * rcp_width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, two_near * rcp_height, 0.0, 0.0),
            Vec4::new(
                (left + right) * rcp_width,
                (top + bottom) * rcp_height,
                range,
                -1.0,
            ),
            Vec4::new(0.0, 0.0, range * z_near, 0.0),
        )
    }

    pub fn orthographic_lh(width: f32, height: f32, z_near: f32, z_far: f32) -> Self {
        debug_assert!(width.abs() > 1e-5 && height.abs() > 1e-5);
        debug_assert!((z_far - z_near).abs() > 1e-5);

        let range = 1.0 / (z_far - z_near);

        Self::from_rows(
            Vec4::new(2.0 / width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / height, 0.0, 0.0),
            Vec4::new(0.0, 0.0, range, 0.0),
            Vec4::new(0.0, 0.0, -range * z_near, 1.0),
        )
    }

    pub fn orthographic_rh(width: f32, height: f32, z_near: f32, z_far: f32) -> Self {
        debug_assert!(width.abs() > 1e-5 && height.abs() > 1e-5);
        debug_assert!((z_far - z_near).abs() > 1e-5);

        let range = 1.0 / (z_near - z_far);

        Self::from_rows(
            Vec4::new(2.0 / width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / height, 0.0, 0.0),
            Vec4::new(0.0, 0.0, range, 0.0),
            Vec4::new(0.0, 0.0, range * z_near, 1.0),
        )
    }

    pub fn orthographic_off_center_lh(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        debug_assert!((right - left).abs() > 1e-5);
        debug_assert!((top - bottom).abs() > 1e-5);
        debug_assert!((z_far - z_near).abs() > 1e-5);

        let rcp_width = 1.0 / (right - left);
        let rcp_height = 1.0 / (top - bottom);
        let range = 1.0 / (z_far - z_near);

        Self::from_rows(
            Vec4::new(rcp_width + rcp_width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, rcp_height + rcp_height, 0.0, 0.0),
            Vec4::new(0.0, 0.0, range, 0.0),
            Vec4::new(
                -(left + right) * rcp_width,
                -(top + bottom) * rcp_height,
                -range * z_near,
                1.0,
            ),
        )
    }

    pub fn orthographic_off_center_rh(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        debug_assert!((right - left).abs() > 1e-5);
        debug_assert!((top - bottom).abs() > 1e-5);
        debug_assert!((z_far - z_near).abs() > 1e-5);

        let rcp_width = 1.0 / (right - left);
        let rcp_height = 1.0 / (top - bottom);
        let range = 1.0 / (z_near - z_far);

        Self::from_rows(
            Vec4::new(rcp_width + rcp_width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, rcp_height + rcp_height, 0.0, 0.0),
            Vec4::new(0.0, 0.0, range, 0.0),
            Vec4::new(
                -(left + right) * rcp_width,
                -(top + bottom) * rcp_height,
                range * z_near,
                1.0,
            ),
        )
    }

    // --- transform application ----------------------------------------------

    /// Transforms a point (w = 1) and divides by the resulting w.
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let v = point.extend(1.0) * *self;
        (v / v.w).truncate()
    }

    /// Transforms a direction (w = 0); translation does not apply.
    #[inline]
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        (vector.extend(0.0) * *self).truncate()
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Self;

    /// Row-major product: `result.row[i] = sum_k self[i][k] * rhs.row[k]`.
    fn mul(self, rhs: Self) -> Self {
        let mut rows = [Vec4::ZERO; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            let r = self.rows[i];
            *row = rhs.rows[0] * r.x + rhs.rows[1] * r.y + rhs.rows[2] * r.z + rhs.rows[3] * r.w;
        }
        Self { rows }
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Row vector times matrix: the transform operation of the library.
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, m: Mat4) -> Vec4 {
        m.rows[0] * self.x + m.rows[1] * self.y + m.rows[2] * self.z + m.rows[3] * self.w
    }
}

impl Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_rows(
            self.rows[0] + rhs.rows[0],
            self.rows[1] + rhs.rows[1],
            self.rows[2] + rhs.rows[2],
            self.rows[3] + rhs.rows[3],
        )
    }
}

impl Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_rows(
            self.rows[0] - rhs.rows[0],
            self.rows[1] - rhs.rows[1],
            self.rows[2] - rhs.rows[2],
            self.rows[3] - rhs.rows[3],
        )
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::from_rows(
            self.rows[0] * rhs,
            self.rows[1] * rhs,
            self.rows[2] * rhs,
            self.rows[3] * rhs,
        )
    }
}

impl Div<f32> for Mat4 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::from_rows(
            self.rows[0] / rhs,
            self.rows[1] / rhs,
            self.rows[2] / rhs,
            self.rows[3] / rhs,
        )
    }
}

impl Neg for Mat4 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_rows(-self.rows[0], -self.rows[1], -self.rows[2], -self.rows[3])
    }
}

// Scale ranking for decompose: indices of the three magnitudes ordered
// largest to smallest, with ties resolved toward the lower index.
fn rank_scales(x: f32, y: f32, z: f32) -> (usize, usize, usize) {
    if x < y {
        if y < z {
            (2, 1, 0)
        } else if x < z {
            (1, 2, 0)
        } else {
            (1, 0, 2)
        }
    } else if x < z {
        (2, 0, 1)
    } else if y < z {
        (0, 2, 1)
    } else {
        (0, 1, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn assert_mat_near(a: &Mat4, b: &Mat4, eps: f32) {
        for i in 0..4 {
            for j in 0..4 {
                let (x, y) = (a.rows[i].lane(j), b.rows[i].lane(j));
                assert!((x - y).abs() <= eps, "[{i}][{j}]: {x} vs {y}\n{a:?}\n{b:?}");
            }
        }
    }

    fn random_matrix(rng: &mut ChaCha8Rng) -> Mat4 {
        let mut m = [[0.0f32; 4]; 4];
        for row in &mut m {
            for v in row.iter_mut() {
                *v = rng.gen_range(-2.0..2.0);
            }
        }
        Mat4::from_rows_array(m)
    }

    fn naive_multiply(a: &Mat4, b: &Mat4) -> Mat4 {
        let (a, b) = (a.to_rows_array(), b.to_rows_array());
        let mut out = [[0.0f32; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                for (k, bk) in b.iter().enumerate() {
                    out[i][j] += a[i][k] * bk[j];
                }
            }
        }
        Mat4::from_rows_array(out)
    }

    #[test]
    fn translation_moves_a_row_vector_point() {
        let m = Mat4::translation(1.0, 2.0, 3.0);
        let p = Vec4::new(3.0, 2.0, 1.0, 1.0) * m;
        assert_eq!(p.to_array(), [4.0, 4.0, 4.0, 1.0]);

        // Directions (w = 0) ignore translation.
        let d = Vec4::new(3.0, 2.0, 1.0, 0.0) * m;
        assert_eq!(d.to_array(), [3.0, 2.0, 1.0, 0.0]);

        assert_eq!(m.transform_point(Vec3::ZERO).to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(m.transform_vector(Vec3::X).to_array(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn identity_laws() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..16 {
            let m = random_matrix(&mut rng);
            assert_mat_near(&(m * Mat4::IDENTITY), &m, 0.0);
            assert_mat_near(&(Mat4::IDENTITY * m), &m, 0.0);
        }
        assert!(Mat4::IDENTITY.is_identity());
        assert!(!Mat4::translation(1.0, 0.0, 0.0).is_identity());
    }

    #[test]
    fn multiply_matches_naive_triple_loop() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..32 {
            let a = random_matrix(&mut rng);
            let b = random_matrix(&mut rng);
            assert_mat_near(&(a * b), &naive_multiply(&a, &b), 1e-4);
        }
    }

    #[test]
    fn multiply_transpose_is_transposed_product() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        for _ in 0..16 {
            let a = random_matrix(&mut rng);
            let b = random_matrix(&mut rng);
            assert_mat_near(&Mat4::multiply_transpose(a, b), &(a * b).transpose(), 1e-4);
        }
    }

    #[test]
    fn transpose_involution_is_bit_exact() {
        let m = Mat4::from_rows_array([
            [0.0, 1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0, 7.0],
            [8.0, 9.0, 10.0, 11.0],
            [12.0, 13.0, 14.0, 15.0],
        ]);
        let t = m.transpose();
        assert_eq!(t.rows[0].to_array(), [0.0, 4.0, 8.0, 12.0]);
        assert_eq!(t.rows[3].to_array(), [3.0, 7.0, 11.0, 15.0]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn inverse_of_known_permutation_matrix() {
        // Swaps y/z and translates: determinant is exactly -1.
        let m = Mat4::from_rows_array([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [4.0, 3.0, 2.0, 1.0],
        ]);

        let (inv, det) = m.inverse();
        assert_eq!(det.to_array(), [-1.0, -1.0, -1.0, -1.0]);
        assert_eq!(m.determinant().to_array(), [-1.0, -1.0, -1.0, -1.0]);

        let expected = Mat4::from_rows_array([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-4.0, -2.0, -3.0, 1.0],
        ]);
        assert_mat_near(&inv, &expected, 1e-6);
        assert_mat_near(&(m * inv), &Mat4::IDENTITY, 1e-6);
    }

    #[test]
    fn inverse_law_on_random_well_conditioned_matrices() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut checked = 0;
        while checked < 16 {
            let m = random_matrix(&mut rng);
            let det = m.determinant().x;
            if det.abs() < 0.5 {
                continue;
            }
            let (inv, inv_det) = m.inverse();
            assert_eq!(inv_det.x, det);
            assert_mat_near(&(m * inv), &Mat4::IDENTITY, 1e-3);
            checked += 1;
        }
    }

    #[test]
    fn singular_inverse_floods_non_finite_lanes() {
        let m = Mat4::from_rows_array([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0], // 2x row 0
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let (inv, det) = m.inverse();
        assert_eq!(det.x, 0.0);
        assert!(inv.is_nan() || inv.is_infinite());
    }

    #[test]
    fn determinant_is_multiplicative() {
        let mut rng = ChaCha8Rng::seed_from_u64(19);
        for _ in 0..16 {
            let a = random_matrix(&mut rng);
            let b = random_matrix(&mut rng);
            let lhs = (a * b).determinant().x;
            let rhs = a.determinant().x * b.determinant().x;
            assert!(
                (lhs - rhs).abs() <= rhs.abs().max(1.0) * 1e-3,
                "{lhs} vs {rhs}"
            );
        }
    }

    #[test]
    fn rotation_constructors_agree() {
        for angle in [-2.5f32, -0.5, 0.0, 0.7, 1.9] {
            assert_mat_near(
                &Mat4::rotation_x(angle),
                &Mat4::from_normal_angle(Vec3::X, angle),
                1e-6,
            );
            assert_mat_near(
                &Mat4::rotation_y(angle),
                &Mat4::from_normal_angle(Vec3::Y, angle),
                1e-6,
            );
            assert_mat_near(
                &Mat4::rotation_z(angle),
                &Mat4::from_normal_angle(Vec3::Z, angle),
                1e-6,
            );
        }
    }

    #[test]
    fn quaternion_and_axis_angle_rotations_agree() {
        for (axis, angle) in [
            (Vec3::new(1.0, 2.0, 3.0), 0.9),
            (Vec3::new(-1.0, 0.5, 0.25), -1.7),
            (Vec3::Z, consts::HALF_PI),
        ] {
            let ma = Mat4::from_axis_angle(axis, angle);
            let mq = Mat4::from_quat(Quat::from_axis_angle(axis, angle));
            let p = Vec4::new(0.3, -1.2, 2.5, 1.0);
            let (pa, pq) = (p * ma, p * mq);
            assert!((pa - pq).abs().sum().x < 1e-4);
            assert_mat_near(&ma, &mq, 1e-5);
        }
    }

    #[test]
    fn rotation_z_turns_x_into_y() {
        let m = Mat4::rotation_z(consts::HALF_PI);
        let p = Vec4::X * m;
        assert!((p - Vec4::Y).abs().sum().x < 1e-6);
    }

    #[test]
    fn roll_pitch_yaw_matches_quaternion_form() {
        let angles = Vec3::new(0.3, -1.1, 2.0);
        let mm = Mat4::from_roll_pitch_yaw_vec3(angles);
        let mq = Mat4::from_quat(Quat::from_roll_pitch_yaw_vec3(angles));
        assert_mat_near(&mm, &mq, 1e-5);
    }

    #[test]
    fn look_to_lh_maps_eye_to_origin_and_direction_to_z() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let m = Mat4::look_to_lh(eye, Vec3::Z, Vec3::Y);
        assert!((m.transform_point(eye)).length() < 1e-5);
        let ahead = m.transform_point(eye + Vec3::Z * 5.0);
        assert!((ahead - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);

        // RH looks down -z instead.
        let m = Mat4::look_to_rh(eye, Vec3::Z, Vec3::Y);
        let ahead = m.transform_point(eye + Vec3::Z * 5.0);
        assert!((ahead - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-5);
    }

    #[test]
    fn look_at_rh_negates_the_view_direction() {
        let eye = Vec3::new(0.0, 0.0, -4.0);
        let target = Vec3::ZERO;
        let lh = Mat4::look_at_lh(eye, target, Vec3::Y);
        let rh = Mat4::look_at_rh(eye, target, Vec3::Y);
        let p = Vec3::new(0.5, 0.25, 2.0);
        let (pl, pr) = (lh.transform_point(p), rh.transform_point(p));
        assert!((pl.z - 6.0).abs() < 1e-5);
        assert!((pr.z + 6.0).abs() < 1e-5);
        // x flips with the handedness as well.
        assert!((pl.x + pr.x).abs() < 1e-5);
    }

    #[test]
    fn perspective_fov_lh_coefficients() {
        let (zn, zf) = (0.5, 100.0);
        let fov = consts::HALF_PI;
        let aspect = 16.0 / 9.0;
        let m = Mat4::perspective_fov_lh(fov, aspect, zn, zf);

        let height = (fov * 0.5).cos() / (fov * 0.5).sin();
        let range = zf / (zf - zn);
        assert!((m.rows[0].x - height / aspect).abs() < 1e-5);
        assert!((m.rows[1].y - height).abs() < 1e-5);
        assert!((m.rows[2].z - range).abs() < 1e-5);
        assert_eq!(m.rows[2].w, 1.0);
        assert!((m.rows[3].z - -(range * zn)).abs() < 1e-4);
        assert_eq!(m.rows[3].w, 0.0);

        // Near plane lands on depth 0, far plane on depth 1.
        let near = Vec4::new(0.0, 0.0, zn, 1.0) * m;
        assert!((near.z / near.w).abs() < 1e-6);
        let far = Vec4::new(0.0, 0.0, zf, 1.0) * m;
        assert!((far.z / far.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn perspective_fov_rh_flips_depth_direction() {
        let (zn, zf) = (0.5, 100.0);
        let m = Mat4::perspective_fov_rh(1.0, 1.0, zn, zf);
        assert_eq!(m.rows[2].w, -1.0);
        assert_eq!(m.rows[3].x, 0.0);
        // RH cameras look down -z.
        let near = Vec4::new(0.0, 0.0, -zn, 1.0) * m;
        assert!((near.z / near.w).abs() < 1e-6);
        let far = Vec4::new(0.0, 0.0, -zf, 1.0) * m;
        assert!((far.z / far.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn perspective_pair_lh_rh() {
        let (zn, zf) = (1.0, 10.0);
        let lh = Mat4::perspective_lh(2.0, 1.0, zn, zf);
        assert!((lh.rows[0].x - 1.0).abs() < 1e-6); // 2n/w = 2/2
        assert!((lh.rows[1].y - 2.0).abs() < 1e-6);
        let far = Vec4::new(0.0, 0.0, zf, 1.0) * lh;
        assert!((far.z / far.w - 1.0).abs() < 1e-6);

        let rh = Mat4::perspective_rh(2.0, 1.0, zn, zf);
        let far = Vec4::new(0.0, 0.0, -zf, 1.0) * rh;
        assert!((far.z / far.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn perspective_off_center_reduces_to_centered() {
        let (zn, zf) = (1.0, 50.0);
        let centered = Mat4::perspective_lh(2.0, 2.0, zn, zf);
        let off = Mat4::perspective_off_center_lh(-1.0, 1.0, -1.0, 1.0, zn, zf);
        assert_mat_near(&centered, &off, 1e-5);

        let centered = Mat4::perspective_rh(2.0, 2.0, zn, zf);
        let off = Mat4::perspective_off_center_rh(-1.0, 1.0, -1.0, 1.0, zn, zf);
        assert_mat_near(&centered, &off, 1e-5);
    }

    #[test]
    fn orthographic_depth_range() {
        let (zn, zf) = (2.0, 12.0);
        let lh = Mat4::orthographic_lh(4.0, 2.0, zn, zf);
        assert!((lh.rows[0].x - 0.5).abs() < 1e-6);
        assert!((lh.rows[1].y - 1.0).abs() < 1e-6);
        let near = Vec4::new(0.0, 0.0, zn, 1.0) * lh;
        let far = Vec4::new(0.0, 0.0, zf, 1.0) * lh;
        assert!(near.z.abs() < 1e-6 && (far.z - 1.0).abs() < 1e-6);

        let rh = Mat4::orthographic_rh(4.0, 2.0, zn, zf);
        let near = Vec4::new(0.0, 0.0, -zn, 1.0) * rh;
        let far = Vec4::new(0.0, 0.0, -zf, 1.0) * rh;
        assert!(near.z.abs() < 1e-6 && (far.z - 1.0).abs() < 1e-6);

        let off = Mat4::orthographic_off_center_lh(-2.0, 2.0, -1.0, 1.0, zn, zf);
        assert_mat_near(&lh, &off, 1e-6);
        let off = Mat4::orthographic_off_center_rh(-2.0, 2.0, -1.0, 1.0, zn, zf);
        assert_mat_near(&rh, &off, 1e-6);
    }

    #[test]
    fn reflect_mirrors_across_plane() {
        // Mirror across the y = 1 plane.
        let plane = Plane::from_point_normal(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        let m = Mat4::reflect(plane);
        let p = m.transform_point(Vec3::new(2.0, 3.0, -1.0));
        assert!((p - Vec3::new(2.0, -1.0, -1.0)).length() < 1e-5);
        // Points on the plane stay put.
        let on = m.transform_point(Vec3::new(5.0, 1.0, 4.0));
        assert!((on - Vec3::new(5.0, 1.0, 4.0)).length() < 1e-5);
    }

    #[test]
    fn shadow_projects_onto_plane() {
        // Ground plane y = 0, point light straight up at (0, 10, 0).
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Y);
        let light = Vec4::new(0.0, 10.0, 0.0, 1.0);
        let m = Mat4::shadow(plane, light);
        let p = m.transform_point(Vec3::new(1.0, 5.0, 2.0));
        assert!(p.y.abs() < 1e-5, "{p:?}");
        // The shadow of a point halfway up the light axis scales outward.
        assert!((p.x - 2.0).abs() < 1e-4);
        assert!((p.z - 4.0).abs() < 1e-4);
    }

    #[test]
    fn transformation_matches_manual_composition() {
        let q = Quat::from_rotation_z(0.6);
        let m = Mat4::affine_transformation(
            Vec3::new(2.0, 2.0, 2.0),
            Vec3::ZERO,
            q,
            Vec3::new(1.0, -2.0, 3.0),
        );
        let manual =
            Mat4::scaling(2.0, 2.0, 2.0) * Mat4::from_quat(q) * Mat4::translation(1.0, -2.0, 3.0);
        assert_mat_near(&m, &manual, 1e-5);

        let full = Mat4::transformation(Vec3::ZERO, Quat::IDENTITY, Vec3::new(2.0, 2.0, 2.0),
            Vec3::ZERO, q, Vec3::new(1.0, -2.0, 3.0));
        assert_mat_near(&full, &manual, 1e-5);
    }

    #[test]
    fn transformation_2d_rotates_about_origin_point() {
        // Quarter turn about the pivot (1, 0): the origin swings to (1, -1).
        let m = Mat4::affine_transformation_2d(
            Vec2::ONE,
            Vec2::new(1.0, 0.0),
            consts::HALF_PI,
            Vec2::ZERO,
        );
        let p = m.transform_point(Vec3::ZERO);
        assert!((p - Vec3::new(1.0, -1.0, 0.0)).length() < 1e-5);

        let full = Mat4::transformation_2d(
            Vec2::ZERO,
            0.0,
            Vec2::ONE,
            Vec2::new(1.0, 0.0),
            consts::HALF_PI,
            Vec2::ZERO,
        );
        assert_mat_near(&m, &full, 1e-5);
    }

    #[test]
    fn decompose_recovers_srt() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        for _ in 0..16 {
            let scale = Vec3::new(
                rng.gen_range(0.01..3.0),
                rng.gen_range(0.01..3.0),
                rng.gen_range(0.01..3.0),
            );
            let axis = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if axis.length_squared() < 1e-3 {
                continue;
            }
            let rotation = Quat::from_axis_angle(axis, rng.gen_range(-3.0..3.0));
            let translation = Vec3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );

            let m = Mat4::affine_transformation(scale, Vec3::ZERO, rotation, translation);
            let (dscale, drotation, dtranslation) =
                m.decompose().expect("non-degenerate transform must decompose");

            assert!((dscale - scale).length() < 1e-3, "{dscale:?} vs {scale:?}");
            assert!((dtranslation - translation).length() < 1e-3);
            assert!(drotation.dot(rotation).abs() > 1.0 - 1e-3);
        }
    }

    #[test]
    fn decompose_rebuilds_degenerate_axes() {
        let m = Mat4::scaling(2.0, 0.0, 3.0);
        let (scale, rotation, translation) = m.decompose().expect("degenerate axis is rebuildable");
        assert!((scale - Vec3::new(2.0, 0.0, 3.0)).length() < 1e-4);
        assert!(rotation.dot(Quat::IDENTITY).abs() > 1.0 - 1e-4);
        assert_eq!(translation.to_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn decompose_corrects_reflections() {
        let m = Mat4::scaling(-1.5, 2.0, 1.0);
        let (scale, _, _) = m.decompose().expect("reflection decomposes after correction");
        // One axis carries the sign; magnitudes survive.
        assert!((scale.x.abs() - 1.5).abs() < 1e-4);
        assert!((scale.y.abs() - 2.0).abs() < 1e-4);
        assert!((scale.z.abs() - 1.0).abs() < 1e-4);
        assert!(scale.x < 0.0 || scale.y < 0.0 || scale.z < 0.0);
    }

    #[test]
    fn decompose_rejects_shear() {
        let m = Mat4::from_rows_array([
            [1.0, 0.5, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert!(m.decompose().is_none());
    }

    #[test]
    fn elementwise_algebra() {
        let m = Mat4::IDENTITY;
        assert_mat_near(&(m + m), &(m * 2.0), 0.0);
        assert_mat_near(&(m - m), &Mat4::ZERO, 0.0);
        assert_mat_near(&(-m), &(m * -1.0), 0.0);
        assert_mat_near(&((m * 4.0) / 2.0), &(m * 2.0), 0.0);
        assert!(!(m.is_nan() || m.is_infinite()));
        let bad = Mat4::from_rows(Vec4::splat(f32::NAN), Vec4::X, Vec4::Y, Vec4::Z);
        assert!(bad.is_nan());
    }
}
