use gravfield_common::InputState;

/// Physical keys the demo reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    ShiftLeft,
    Other,
}

impl Key {
    /// Parse a DOM-style key code such as `"KeyW"` or `"ShiftLeft"`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "KeyW" => Self::KeyW,
            "KeyA" => Self::KeyA,
            "KeyS" => Self::KeyS,
            "KeyD" => Self::KeyD,
            "Space" => Self::Space,
            "ShiftLeft" => Self::ShiftLeft,
            _ => Self::Other,
        }
    }

    /// The movement flag this key drives, if any.
    pub(crate) fn flag(self, state: &mut InputState) -> Option<&mut bool> {
        match self {
            Self::KeyW => Some(&mut state.move_forward),
            Self::KeyA => Some(&mut state.move_left),
            Self::KeyS => Some(&mut state.move_backward),
            Self::KeyD => Some(&mut state.move_right),
            Self::Space => Some(&mut state.move_up),
            Self::ShiftLeft => Some(&mut state.move_down),
            Self::Other => None,
        }
    }
}

/// Mouse buttons in DOM numbering (0 left, 1 middle, 2 right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u16),
}

impl MouseButton {
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            n => Self::Other(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes() {
        assert_eq!(Key::from_code("KeyW"), Key::KeyW);
        assert_eq!(Key::from_code("ShiftLeft"), Key::ShiftLeft);
        assert_eq!(Key::from_code("Space"), Key::Space);
        assert_eq!(Key::from_code("ShiftRight"), Key::Other);
        assert_eq!(Key::from_code("keyw"), Key::Other);
    }

    #[test]
    fn each_movement_key_drives_one_flag() {
        let keys = [
            Key::KeyW,
            Key::KeyA,
            Key::KeyS,
            Key::KeyD,
            Key::Space,
            Key::ShiftLeft,
        ];
        for key in keys {
            let mut state = InputState::default();
            *key.flag(&mut state).unwrap() = true;
            assert!(state.any_movement(), "{key:?}");
            assert_eq!(state.intent().abs().element_sum(), 1.0, "{key:?}");
        }
        let mut state = InputState::default();
        assert!(Key::Other.flag(&mut state).is_none());
    }

    #[test]
    fn button_indices() {
        assert_eq!(MouseButton::from_index(0), MouseButton::Left);
        assert_eq!(MouseButton::from_index(2), MouseButton::Right);
        assert_eq!(MouseButton::from_index(4), MouseButton::Other(4));
    }
}
