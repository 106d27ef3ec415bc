//! Preview layout: where the solids and mirror rings sit in world space.
//!
//! The raytracer proper is not part of this crate; the layout is plain data
//! the surface can upload as instances. Mirror placement is scattered with
//! per-ring seeded RNGs so a given (big, small) pair always reproduces the
//! same arrangement.

use crate::constants::*;
use crate::state::RenderState;
use glam::Vec3;
use rand::prelude::*;

/// One drawable instance: position, uniform scale, premixed RGBA.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instance {
    pub position: Vec3,
    pub scale: f32,
    pub color: [f32; 4],
}

/// Build the instance list for one snapshot: the two tinted solids followed
/// by the big and small mirror rings. Deterministic for a fixed seed.
pub fn scene_instances(frame: &RenderState, seed: u64) -> Vec<Instance> {
    let mut instances =
        Vec::with_capacity(2 + frame.big_mirrors as usize + frame.small_mirrors as usize);

    instances.push(Instance {
        position: Vec3::from(CUBE_ANCHOR),
        scale: SOLID_SCALE,
        color: rgba(frame.cube_rgb, 1.0),
    });
    instances.push(Instance {
        position: Vec3::from(TETRAHEDRON_ANCHOR),
        scale: SOLID_SCALE,
        color: rgba(frame.tetrahedron_rgb, 1.0),
    });

    scatter_ring(
        &mut instances,
        frame.big_mirrors,
        BIG_MIRROR_RING_RADIUS,
        BIG_MIRROR_SCALE,
        derive_seed(seed, 0),
    );
    scatter_ring(
        &mut instances,
        frame.small_mirrors,
        SMALL_MIRROR_RING_RADIUS,
        SMALL_MIRROR_SCALE,
        derive_seed(seed, 1),
    );

    instances
}

/// Evenly space `count` mirrors on a ring, with jitter from the ring's RNG.
fn scatter_ring(out: &mut Vec<Instance>, count: u32, radius: f32, scale: f32, seed: u64) {
    if count == 0 {
        return;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let step = std::f32::consts::TAU / count as f32;
    for i in 0..count {
        let angle = i as f32 * step + rng.gen_range(-MIRROR_ANGLE_JITTER..=MIRROR_ANGLE_JITTER);
        let r = radius + rng.gen_range(-MIRROR_RADIUS_JITTER..=MIRROR_RADIUS_JITTER);
        out.push(Instance {
            position: Vec3::new(angle.cos() * r, angle.sin() * r, 0.0),
            scale,
            color: rgba(MIRROR_TINT, 0.95),
        });
    }
}

// Derive per-ring RNGs from the base seed so each ring scatters
// independently of the other's count.
#[inline]
fn derive_seed(seed: u64, ring: u64) -> u64 {
    seed ^ ring.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[inline]
fn rgba(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], alpha]
}
