//! Current values of every tunable driving the preview.
//!
//! The store is pure data with validated mutation: it knows each parameter's
//! legal interval and either rejects or clamps a write, nothing more. All
//! access happens on the single UI/render thread, so no interior locking.

use crate::constants::*;
use crate::state::RenderState;
use thiserror::Error;

/// The two tinted solids in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneObject {
    Cube,
    Tetrahedron,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    R,
    G,
    B,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MirrorKind {
    Big,
    Small,
}

/// Identifies one tunable in the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamId {
    Tint(SceneObject, Channel),
    Camera(Axis),
    Mirror(MirrorKind),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("{id:?} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        id: ParamId,
        value: i32,
        min: i32,
        max: i32,
    },
}

/// In-memory holder of the current tunable values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamStore {
    tints: [[i32; 3]; 2],
    camera: [i32; 3],
    mirrors: [i32; 2],
}

impl Default for ParamStore {
    fn default() -> Self {
        Self {
            tints: [DEFAULT_TINT, DEFAULT_TINT],
            camera: DEFAULT_CAMERA_OFFSET,
            mirrors: DEFAULT_MIRROR_LEVELS,
        }
    }
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The declared legal interval of a parameter.
    pub fn bounds(id: ParamId) -> (i32, i32) {
        match id {
            ParamId::Tint(..) => (COLOR_CHANNEL_MIN, COLOR_CHANNEL_MAX),
            ParamId::Camera(_) => (CAMERA_OFFSET_MIN, CAMERA_OFFSET_MAX),
            ParamId::Mirror(_) => (MIRROR_LEVEL_MIN, MIRROR_LEVEL_MAX),
        }
    }

    /// Current value, no side effects.
    pub fn get(&self, id: ParamId) -> i32 {
        *self.slot(id)
    }

    /// Commit `value` exactly, rejecting a write outside the bound.
    pub fn set(&mut self, id: ParamId, value: i32) -> Result<(), ParamError> {
        let (min, max) = Self::bounds(id);
        if value < min || value > max {
            return Err(ParamError::OutOfRange {
                id,
                value,
                min,
                max,
            });
        }
        *self.slot_mut(id) = value;
        Ok(())
    }

    /// Force `value` into bound and commit; returns the committed value.
    pub fn set_clamped(&mut self, id: ParamId, value: i32) -> i32 {
        let (min, max) = Self::bounds(id);
        let committed = value.clamp(min, max);
        *self.slot_mut(id) = committed;
        committed
    }

    /// Restore every parameter to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the whole per-frame snapshot in one step.
    pub fn snapshot(&self) -> RenderState {
        RenderState::from_store(self)
    }

    fn slot(&self, id: ParamId) -> &i32 {
        match id {
            ParamId::Tint(obj, ch) => &self.tints[obj_index(obj)][channel_index(ch)],
            ParamId::Camera(axis) => &self.camera[axis_index(axis)],
            ParamId::Mirror(kind) => &self.mirrors[mirror_index(kind)],
        }
    }

    fn slot_mut(&mut self, id: ParamId) -> &mut i32 {
        match id {
            ParamId::Tint(obj, ch) => &mut self.tints[obj_index(obj)][channel_index(ch)],
            ParamId::Camera(axis) => &mut self.camera[axis_index(axis)],
            ParamId::Mirror(kind) => &mut self.mirrors[mirror_index(kind)],
        }
    }

    pub fn tint(&self, obj: SceneObject) -> [i32; 3] {
        self.tints[obj_index(obj)]
    }

    pub fn camera_offset(&self) -> [i32; 3] {
        self.camera
    }

    pub fn mirror_level(&self, kind: MirrorKind) -> i32 {
        self.mirrors[mirror_index(kind)]
    }
}

#[inline]
fn obj_index(obj: SceneObject) -> usize {
    match obj {
        SceneObject::Cube => 0,
        SceneObject::Tetrahedron => 1,
    }
}

#[inline]
fn channel_index(ch: Channel) -> usize {
    match ch {
        Channel::R => 0,
        Channel::G => 1,
        Channel::B => 2,
    }
}

#[inline]
fn axis_index(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
        Axis::Z => 2,
    }
}

#[inline]
fn mirror_index(kind: MirrorKind) -> usize {
    match kind {
        MirrorKind::Big => 0,
        MirrorKind::Small => 1,
    }
}

/// All parameter ids in a stable order (store iteration for presets and
/// diagnostics).
pub const ALL_PARAMS: [ParamId; 11] = [
    ParamId::Tint(SceneObject::Cube, Channel::R),
    ParamId::Tint(SceneObject::Cube, Channel::G),
    ParamId::Tint(SceneObject::Cube, Channel::B),
    ParamId::Tint(SceneObject::Tetrahedron, Channel::R),
    ParamId::Tint(SceneObject::Tetrahedron, Channel::G),
    ParamId::Tint(SceneObject::Tetrahedron, Channel::B),
    ParamId::Camera(Axis::X),
    ParamId::Camera(Axis::Y),
    ParamId::Camera(Axis::Z),
    ParamId::Mirror(MirrorKind::Big),
    ParamId::Mirror(MirrorKind::Small),
];
