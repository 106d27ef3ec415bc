use preview_core::params::*;
use preview_core::preset::Preset;

#[test]
fn default_preset_matches_default_store() {
    let mut store = ParamStore::new();
    let adjusted = Preset::default().apply(&mut store);
    assert!(adjusted.is_empty(), "defaults are always in bound");
    assert_eq!(store, ParamStore::default());
}

#[test]
fn from_store_round_trips_through_apply() {
    let mut store = ParamStore::new();
    store.set(ParamId::Tint(SceneObject::Cube, Channel::R), 200).unwrap();
    store
        .set(ParamId::Tint(SceneObject::Tetrahedron, Channel::B), 30)
        .unwrap();
    store.set(ParamId::Camera(Axis::Y), -7).unwrap();
    store.set(ParamId::Mirror(MirrorKind::Small), 4).unwrap();

    let preset = Preset::from_store(&store);
    let mut restored = ParamStore::new();
    let adjusted = preset.apply(&mut restored);
    assert!(adjusted.is_empty());
    assert_eq!(restored, store);
}

#[test]
fn out_of_range_fields_are_clamped_and_reported() {
    let preset = Preset {
        cube: [300, -5, 128],
        tetrahedron: [0, 0, 0],
        camera: [0, 0, -15],
        big_mirrors: 99,
        small_mirrors: 1,
    };
    let mut store = ParamStore::new();
    let adjusted = preset.apply(&mut store);

    assert_eq!(store.get(ParamId::Tint(SceneObject::Cube, Channel::R)), 255);
    assert_eq!(store.get(ParamId::Tint(SceneObject::Cube, Channel::G)), 0);
    assert_eq!(store.get(ParamId::Tint(SceneObject::Cube, Channel::B)), 128);
    assert_eq!(store.get(ParamId::Camera(Axis::Z)), -10);
    assert_eq!(store.get(ParamId::Mirror(MirrorKind::Big)), 8);

    assert_eq!(adjusted.len(), 4, "one report per clamped field");
    assert!(adjusted
        .iter()
        .any(|a| a.id == ParamId::Camera(Axis::Z) && a.requested == -15 && a.committed == -10));
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("preset.json");

    let preset = Preset {
        cube: [10, 20, 30],
        tetrahedron: [40, 50, 60],
        camera: [1, -2, 3],
        big_mirrors: 2,
        small_mirrors: 7,
    };
    preset.save(&path).expect("save");
    let loaded = Preset::load(&path).expect("load");
    assert_eq!(loaded, preset);
}

#[test]
fn load_reports_missing_file_with_context() {
    let err = Preset::load(std::path::Path::new("/nonexistent/preset.json")).unwrap_err();
    let text = format!("{err:#}");
    assert!(text.contains("preset"), "context names the file: {text}");
}
