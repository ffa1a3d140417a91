//! Camera rig for the 3-D canvas transitions.
//!
//! The canvas is a textured quad seen through a left-handed perspective
//! projection. Rotations happen around a pivot slightly behind the canvas
//! plane so that quarter turns look like a cube being spun.

use crate::constants::{EYE_DISTANCE, FOV_Y_DEGREES, FULL_TURN, ROTATION_PIVOT_Z, Z_FAR, Z_NEAR};
use glam::{Mat4, Vec3};

/// Perspective parameters shared by the 3-D and background passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy_degrees: FOV_Y_DEGREES,
            znear: Z_NEAR,
            zfar: Z_FAR,
        }
    }
}

impl Projection {
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_lh(self.fovy_degrees.to_radians(), aspect, self.znear, self.zfar)
    }
}

/// Snapshot of the animated camera state plus the user's eye offset.
#[derive(Clone, Debug)]
pub struct CameraRig {
    /// Rotation angles in degrees.
    pub angles: Vec3,
    pub shift: Vec3,
    pub eye: Vec3,
    pub aspect: f32,
    pub projection: Projection,
}

impl CameraRig {
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix(self.aspect)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    /// Eye translation, x rotation about the pivot, then y and z rotation.
    pub fn model_matrix(&self) -> Mat4 {
        let ax = (-self.angles.x).to_radians();
        let ay = self.angles.y.to_radians();
        let az = self.angles.z.to_radians();

        let sx = -self.shift.x - self.eye.x;
        let sy = -self.shift.y - self.eye.y;
        let sz = self.shift.z + self.eye.z;

        let trans_eye =
            Mat4::from_translation(Vec3::new(sx, sy, sz + EYE_DISTANCE - ROTATION_PIVOT_Z));
        let trans_pivot = Mat4::from_translation(Vec3::new(0.0, 0.0, ROTATION_PIVOT_Z));

        trans_eye
            * Mat4::from_rotation_x(ax)
            * trans_pivot
            * Mat4::from_rotation_y(ay)
            * Mat4::from_rotation_z(az)
    }

    pub fn mvp(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix() * self.model_matrix()
    }
}

/// Flat presentation uses no transformation at all.
pub fn flat_mvp() -> Mat4 {
    Mat4::IDENTITY
}

/// The background is drawn with the projection only.
pub fn background_mvp(projection: &Projection, aspect: f32) -> Mat4 {
    projection.matrix(aspect)
}

/// Maps an angle in degrees into (-180, 180]. Whole turns become exactly 0.
pub fn wrap_degrees(angle: f32) -> f32 {
    let r = angle.rem_euclid(FULL_TURN);
    if r > FULL_TURN / 2.0 {
        r - FULL_TURN
    } else {
        r
    }
}
