//! Per-frame snapshot types consumed by the render surface.
//!
//! These types intentionally avoid referencing platform-specific APIs. The
//! front-end consumes them to build camera matrices and to lay out the
//! preview instances; it never reaches back into the store mid-frame.

use crate::constants::*;
use crate::params::{MirrorKind, ParamStore, SceneObject};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Place the eye from the integer offsets, looking at the origin.
    pub fn from_offset(offset: [i32; 3], aspect: f32) -> Self {
        let eye = Vec3::from(CAMERA_BASE_EYE)
            + Vec3::new(offset[0] as f32, offset[1] as f32, offset[2] as f32) * CAMERA_WORLD_STEP;
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Read-only snapshot of the store, consumed once per frame.
///
/// Built whole between frames and replaced atomically; a paint callback never
/// observes a half-updated set of values.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    /// Committed tint channels, normalized to 0..1.
    pub cube_rgb: [f32; 3],
    pub tetrahedron_rgb: [f32; 3],
    /// Committed integer camera offsets, for diagnostics and presets.
    pub camera_offset: [i32; 3],
    /// World-space eye derived from the offsets.
    pub camera_eye: Vec3,
    pub big_mirrors: u32,
    pub small_mirrors: u32,
}

impl RenderState {
    pub fn from_store(store: &ParamStore) -> Self {
        let offset = store.camera_offset();
        Self {
            cube_rgb: normalize_tint(store.tint(SceneObject::Cube)),
            tetrahedron_rgb: normalize_tint(store.tint(SceneObject::Tetrahedron)),
            camera_offset: offset,
            camera_eye: Camera::from_offset(offset, 1.0).eye,
            big_mirrors: store.mirror_level(MirrorKind::Big) as u32,
            small_mirrors: store.mirror_level(MirrorKind::Small) as u32,
        }
    }

    /// Camera for this snapshot at the surface's aspect ratio.
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::from_offset(self.camera_offset, aspect)
    }
}

#[inline]
fn normalize_tint(tint: [i32; 3]) -> [f32; 3] {
    [
        tint[0] as f32 / COLOR_CHANNEL_MAX as f32,
        tint[1] as f32 / COLOR_CHANNEL_MAX as f32,
        tint[2] as f32 / COLOR_CHANNEL_MAX as f32,
    ]
}
