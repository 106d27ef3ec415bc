use preview_core::constants::*;
use preview_core::params::*;
use preview_core::scene::scene_instances;

fn snapshot_with(big: i32, small: i32) -> preview_core::RenderState {
    let mut store = ParamStore::new();
    store.set(ParamId::Mirror(MirrorKind::Big), big).unwrap();
    store.set(ParamId::Mirror(MirrorKind::Small), small).unwrap();
    store
        .set(ParamId::Tint(SceneObject::Cube, Channel::R), 255)
        .unwrap();
    store
        .set(ParamId::Tint(SceneObject::Tetrahedron, Channel::G), 255)
        .unwrap();
    store.snapshot()
}

#[test]
fn instance_count_tracks_solids_plus_mirrors() {
    for (big, small) in [(0, 0), (1, 1), (3, 5), (8, 8)] {
        let frame = snapshot_with(big, small);
        let instances = scene_instances(&frame, DEFAULT_LAYOUT_SEED);
        assert_eq!(
            instances.len(),
            2 + (big + small) as usize,
            "big={big} small={small}"
        );
    }
}

#[test]
fn solids_come_first_and_carry_their_tints() {
    let frame = snapshot_with(2, 2);
    let instances = scene_instances(&frame, DEFAULT_LAYOUT_SEED);
    assert_eq!(instances[0].position.to_array(), CUBE_ANCHOR);
    assert_eq!(instances[0].color, [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(instances[1].position.to_array(), TETRAHEDRON_ANCHOR);
    assert_eq!(instances[1].color, [0.0, 1.0, 0.0, 1.0]);
}

#[test]
fn layout_is_deterministic_for_a_fixed_seed() {
    let frame = snapshot_with(4, 6);
    let a = scene_instances(&frame, 7);
    let b = scene_instances(&frame, 7);
    assert_eq!(a, b, "same seed and counts must reproduce the layout");
}

#[test]
fn different_seeds_scatter_differently() {
    let frame = snapshot_with(4, 4);
    let a = scene_instances(&frame, 1);
    let b = scene_instances(&frame, 2);
    assert_ne!(a, b);
}

#[test]
fn ring_scatter_is_independent_of_the_other_ring() {
    // changing the small count must not move the big mirrors
    let a = scene_instances(&snapshot_with(3, 1), DEFAULT_LAYOUT_SEED);
    let b = scene_instances(&snapshot_with(3, 7), DEFAULT_LAYOUT_SEED);
    assert_eq!(&a[2..5], &b[2..5], "big ring unchanged by small count");
}

#[test]
fn mirrors_sit_near_their_ring_radius() {
    let frame = snapshot_with(8, 8);
    let instances = scene_instances(&frame, DEFAULT_LAYOUT_SEED);
    for inst in &instances[2..10] {
        let r = (inst.position.x * inst.position.x + inst.position.y * inst.position.y).sqrt();
        assert!(
            (r - BIG_MIRROR_RING_RADIUS).abs() <= MIRROR_RADIUS_JITTER + 1e-4,
            "big mirror at radius {r}"
        );
        assert_eq!(inst.scale, BIG_MIRROR_SCALE);
    }
    for inst in &instances[10..18] {
        let r = (inst.position.x * inst.position.x + inst.position.y * inst.position.y).sqrt();
        assert!(
            (r - SMALL_MIRROR_RING_RADIUS).abs() <= MIRROR_RADIUS_JITTER + 1e-4,
            "small mirror at radius {r}"
        );
        assert_eq!(inst.scale, SMALL_MIRROR_SCALE);
    }
}
