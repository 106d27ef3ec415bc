// Keyboard stand-ins for the slider/scrollbar surface.
//
// Pure key-to-message mapping, independent of the window toolkit. Lowercase
// steps a value up, the shifted (uppercase) variant steps it down; digits
// pick which solid the tint keys edit.

use preview_core::binding::{controls, ControlId, Gesture};
use preview_core::params::{Channel, SceneObject};

/// One keypress moves a tint channel this far along its 0..255 range.
pub const COLOR_KEY_STEP: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMsg {
    Select(SceneObject),
    Gesture { control: ControlId, gesture: Gesture },
    ToggleTimer,
    Reset,
    Quit,
}

/// Map a character key to a control message.
///
/// - `1` / `2` select the cube / tetrahedron for tint editing
/// - `r` `g` `b` raise the selected tint channel, `R` `G` `B` lower it
/// - `x` `y` `z` raise a camera axis, `X` `Y` `Z` lower it
/// - `+`/`-` step the big mirror count, `]`/`[` the small one
/// - `0` resets every parameter, `q` quits
pub fn message_for_key(key: &str, selected: SceneObject) -> Option<ControlMsg> {
    match key {
        "1" => Some(ControlMsg::Select(SceneObject::Cube)),
        "2" => Some(ControlMsg::Select(SceneObject::Tetrahedron)),
        "r" => Some(tint_step(selected, Channel::R, COLOR_KEY_STEP)),
        "R" => Some(tint_step(selected, Channel::R, -COLOR_KEY_STEP)),
        "g" => Some(tint_step(selected, Channel::G, COLOR_KEY_STEP)),
        "G" => Some(tint_step(selected, Channel::G, -COLOR_KEY_STEP)),
        "b" => Some(tint_step(selected, Channel::B, COLOR_KEY_STEP)),
        "B" => Some(tint_step(selected, Channel::B, -COLOR_KEY_STEP)),
        "x" => Some(scroll(controls::CAMERA_X, 1)),
        "X" => Some(scroll(controls::CAMERA_X, -1)),
        "y" => Some(scroll(controls::CAMERA_Y, 1)),
        "Y" => Some(scroll(controls::CAMERA_Y, -1)),
        "z" => Some(scroll(controls::CAMERA_Z, 1)),
        "Z" => Some(scroll(controls::CAMERA_Z, -1)),
        "+" | "=" => Some(scroll(controls::MIRROR_BIG, 1)),
        "-" | "_" => Some(scroll(controls::MIRROR_BIG, -1)),
        "]" => Some(scroll(controls::MIRROR_SMALL, 1)),
        "[" => Some(scroll(controls::MIRROR_SMALL, -1)),
        " " => Some(ControlMsg::ToggleTimer),
        "0" => Some(ControlMsg::Reset),
        "q" | "Q" => Some(ControlMsg::Quit),
        _ => None,
    }
}

#[inline]
fn tint_step(obj: SceneObject, ch: Channel, delta: i32) -> ControlMsg {
    ControlMsg::Gesture {
        control: tint_control(obj, ch),
        gesture: Gesture::Scroll { delta },
    }
}

#[inline]
fn scroll(control: ControlId, delta: i32) -> ControlMsg {
    ControlMsg::Gesture {
        control,
        gesture: Gesture::Scroll { delta },
    }
}

#[inline]
pub fn tint_control(obj: SceneObject, ch: Channel) -> ControlId {
    match (obj, ch) {
        (SceneObject::Cube, Channel::R) => controls::CUBE_R,
        (SceneObject::Cube, Channel::G) => controls::CUBE_G,
        (SceneObject::Cube, Channel::B) => controls::CUBE_B,
        (SceneObject::Tetrahedron, Channel::R) => controls::TETRAHEDRON_R,
        (SceneObject::Tetrahedron, Channel::G) => controls::TETRAHEDRON_G,
        (SceneObject::Tetrahedron, Channel::B) => controls::TETRAHEDRON_B,
    }
}
