//! Maps widget gestures to clamped store mutations.
//!
//! Each bounded input registers a mutation closure against the parameter
//! store, which keeps UI-toolkit specifics out of the parameter model. A
//! gesture triggers exactly one synchronous mutation before dispatch
//! returns; there is no debouncing and no coalescing of rapid events.

use crate::params::{ParamId, ParamStore};
use fnv::FnvHashMap;

/// Identifies one widget on the control surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ControlId(pub u16);

/// The canonical control surface: nine sliders and two steppers.
pub mod controls {
    use super::ControlId;

    pub const CUBE_R: ControlId = ControlId(1);
    pub const CUBE_G: ControlId = ControlId(2);
    pub const CUBE_B: ControlId = ControlId(3);
    pub const TETRAHEDRON_R: ControlId = ControlId(4);
    pub const TETRAHEDRON_G: ControlId = ControlId(5);
    pub const TETRAHEDRON_B: ControlId = ControlId(6);
    pub const CAMERA_X: ControlId = ControlId(7);
    pub const CAMERA_Y: ControlId = ControlId(8);
    pub const CAMERA_Z: ControlId = ControlId(9);
    pub const MIRROR_BIG: ControlId = ControlId(10);
    pub const MIRROR_SMALL: ControlId = ControlId(11);
}

/// One UI input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// A drag on a bounded slider; carries the widget's current value.
    Slide { value: i32 },
    /// A scroll step on an incrementer; carries the step delta.
    Scroll { delta: i32 },
}

type Mutator = Box<dyn Fn(&mut ParamStore, Gesture) -> i32>;

struct BoundControl {
    param: ParamId,
    mutate: Mutator,
}

/// Registry of mutation closures, one per bound control.
#[derive(Default)]
pub struct ControlBindings {
    bindings: FnvHashMap<ControlId, BoundControl>,
}

impl ControlBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a slider with its own widget interval. A slide commits the
    /// widget value after a defensive clamp to the domain bound (the two
    /// bounds may differ); a scroll steps from the current value.
    pub fn bind_slider(
        &mut self,
        control: ControlId,
        widget_min: i32,
        widget_max: i32,
        param: ParamId,
    ) {
        let mutate: Mutator =
            Box::new(move |store: &mut ParamStore, gesture: Gesture| match gesture {
                Gesture::Slide { value } => {
                    store.set_clamped(param, value.clamp(widget_min, widget_max))
                }
                Gesture::Scroll { delta } => store.set_clamped(param, store.get(param).saturating_add(delta)),
            });
        self.bindings.insert(control, BoundControl { param, mutate });
    }

    /// Bind an incrementer. A scroll applies the delta to the current value;
    /// a slide commits the carried value directly. Both paths clamp.
    pub fn bind_stepper(&mut self, control: ControlId, param: ParamId) {
        let mutate: Mutator =
            Box::new(move |store: &mut ParamStore, gesture: Gesture| match gesture {
                Gesture::Slide { value } => store.set_clamped(param, value),
                Gesture::Scroll { delta } => store.set_clamped(param, store.get(param).saturating_add(delta)),
            });
        self.bindings.insert(control, BoundControl { param, mutate });
    }

    /// Apply one gesture: exactly one store mutation, synchronously.
    /// Returns the committed value, or `None` for an unbound control.
    pub fn dispatch(
        &mut self,
        store: &mut ParamStore,
        control: ControlId,
        gesture: Gesture,
    ) -> Option<i32> {
        let bound = self.bindings.get(&control)?;
        let committed = (bound.mutate)(store, gesture);
        log::debug!("{:?} -> {:?} = {}", control, bound.param, committed);
        Some(committed)
    }

    pub fn is_bound(&self, control: ControlId) -> bool {
        self.bindings.contains_key(&control)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// The canonical preview control surface: tint sliders over
/// [0, 255], camera sliders over [-10, 10], and the two mirror steppers.
pub fn default_bindings() -> ControlBindings {
    use crate::constants::*;
    use crate::params::{Axis, Channel, MirrorKind, SceneObject};

    let mut b = ControlBindings::new();
    for (control, obj, ch) in [
        (controls::CUBE_R, SceneObject::Cube, Channel::R),
        (controls::CUBE_G, SceneObject::Cube, Channel::G),
        (controls::CUBE_B, SceneObject::Cube, Channel::B),
        (controls::TETRAHEDRON_R, SceneObject::Tetrahedron, Channel::R),
        (controls::TETRAHEDRON_G, SceneObject::Tetrahedron, Channel::G),
        (controls::TETRAHEDRON_B, SceneObject::Tetrahedron, Channel::B),
    ] {
        b.bind_slider(
            control,
            COLOR_CHANNEL_MIN,
            COLOR_CHANNEL_MAX,
            ParamId::Tint(obj, ch),
        );
    }
    for (control, axis) in [
        (controls::CAMERA_X, Axis::X),
        (controls::CAMERA_Y, Axis::Y),
        (controls::CAMERA_Z, Axis::Z),
    ] {
        b.bind_slider(
            control,
            CAMERA_OFFSET_MIN,
            CAMERA_OFFSET_MAX,
            ParamId::Camera(axis),
        );
    }
    b.bind_stepper(controls::MIRROR_BIG, ParamId::Mirror(MirrorKind::Big));
    b.bind_stepper(controls::MIRROR_SMALL, ParamId::Mirror(MirrorKind::Small));
    b
}
