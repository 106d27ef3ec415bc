//! Preset files: the full parameter set as JSON.
//!
//! Presets go through the clamped commit path on apply, so a hand-edited
//! file can never push the store outside its bounds; every adjusted field is
//! reported back to the caller.

use crate::constants::*;
use crate::params::{Axis, Channel, MirrorKind, ParamId, ParamStore, SceneObject};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub cube: [i32; 3],
    pub tetrahedron: [i32; 3],
    pub camera: [i32; 3],
    pub big_mirrors: i32,
    pub small_mirrors: i32,
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            cube: DEFAULT_TINT,
            tetrahedron: DEFAULT_TINT,
            camera: DEFAULT_CAMERA_OFFSET,
            big_mirrors: DEFAULT_MIRROR_LEVELS[0],
            small_mirrors: DEFAULT_MIRROR_LEVELS[1],
        }
    }
}

/// One field the clamped commit path had to adjust on apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub id: ParamId,
    pub requested: i32,
    pub committed: i32,
}

impl Preset {
    pub fn from_store(store: &ParamStore) -> Self {
        Self {
            cube: store.tint(SceneObject::Cube),
            tetrahedron: store.tint(SceneObject::Tetrahedron),
            camera: store.camera_offset(),
            big_mirrors: store.mirror_level(MirrorKind::Big),
            small_mirrors: store.mirror_level(MirrorKind::Small),
        }
    }

    /// Commit every field through the clamped path. Returns the fields that
    /// did not fit their bound as written.
    pub fn apply(&self, store: &mut ParamStore) -> SmallVec<[Adjustment; 4]> {
        let entries = [
            (ParamId::Tint(SceneObject::Cube, Channel::R), self.cube[0]),
            (ParamId::Tint(SceneObject::Cube, Channel::G), self.cube[1]),
            (ParamId::Tint(SceneObject::Cube, Channel::B), self.cube[2]),
            (
                ParamId::Tint(SceneObject::Tetrahedron, Channel::R),
                self.tetrahedron[0],
            ),
            (
                ParamId::Tint(SceneObject::Tetrahedron, Channel::G),
                self.tetrahedron[1],
            ),
            (
                ParamId::Tint(SceneObject::Tetrahedron, Channel::B),
                self.tetrahedron[2],
            ),
            (ParamId::Camera(Axis::X), self.camera[0]),
            (ParamId::Camera(Axis::Y), self.camera[1]),
            (ParamId::Camera(Axis::Z), self.camera[2]),
            (ParamId::Mirror(MirrorKind::Big), self.big_mirrors),
            (ParamId::Mirror(MirrorKind::Small), self.small_mirrors),
        ];

        let mut adjusted = SmallVec::new();
        for (id, requested) in entries {
            let committed = store.set_clamped(id, requested);
            if committed != requested {
                log::warn!("preset value {id:?} = {requested} clamped to {committed}");
                adjusted.push(Adjustment {
                    id,
                    requested,
                    committed,
                });
            }
        }
        adjusted
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading preset {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing preset {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("serializing preset")?;
        fs::write(path, text).with_context(|| format!("writing preset {}", path.display()))
    }
}
