/// Platform-agnostic input handling system
use std::collections::HashSet;

/// Platform-independent input events
#[derive(Debug, Clone)]
pub enum InputEvent {
    // Keyboard events
    KeyDown(String),
    KeyUp(String),

    // Pointer events
    PointerDown { button: MouseButton, x: f32, y: f32 },

    // Window events
    FocusLost,
    VisibilityChanged { visible: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub fn from_web_button(button: i16) -> Self {
        match button {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            _ => MouseButton::Left,
        }
    }
}

/// Directional input, sampled once per tick.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Keys currently held, fed by platform events.
#[derive(Default, Debug, Clone)]
pub struct KeyboardState {
    pub pressed_keys: HashSet<String>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process an input event and update state.
    ///
    /// Returns true for a pointer-down, which callers dispatch to the active scene.
    pub fn process_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::KeyDown(key) => {
                self.pressed_keys.insert(key.clone());
            }
            InputEvent::KeyUp(key) => {
                self.pressed_keys.remove(key.as_str());
            }
            InputEvent::PointerDown { .. } => return true,
            InputEvent::FocusLost => self.clear_keys(),
            InputEvent::VisibilityChanged { visible } => {
                if !visible {
                    self.clear_keys();
                }
            }
        }
        false
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(key)
    }

    pub fn clear_keys(&mut self) {
        self.pressed_keys.clear();
    }
}

/// Key mapping configuration. Arrow keys always steer; these are the extras.
#[derive(Clone)]
pub struct KeyBindings {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: "w".to_string(),
            down: "s".to_string(),
            left: "a".to_string(),
            right: "d".to_string(),
        }
    }
}

/// Turns held keys into the four directional flags.
#[derive(Clone, Default)]
pub struct InputProcessor {
    bindings: KeyBindings,
}

impl InputProcessor {
    fn held(&self, keys: &KeyboardState, arrow: &str, bound: &str) -> bool {
        keys.is_key_pressed(arrow)
            || keys.is_key_pressed(bound)
            || keys.is_key_pressed(&bound.to_ascii_uppercase())
    }

    pub fn sample(&self, keys: &KeyboardState) -> InputState {
        InputState {
            up: self.held(keys, "ArrowUp", &self.bindings.up),
            down: self.held(keys, "ArrowDown", &self.bindings.down),
            left: self.held(keys, "ArrowLeft", &self.bindings.left),
            right: self.held(keys, "ArrowRight", &self.bindings.right),
        }
    }

    /// Keys whose browser default (page scrolling) should be suppressed.
    pub fn is_steering_key(&self, key: &str) -> bool {
        matches!(key, "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight")
            || [&self.bindings.up, &self.bindings.down, &self.bindings.left, &self.bindings.right]
                .iter()
                .any(|b| key.eq_ignore_ascii_case(b))
    }
}

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use super::*;
    use web_sys::{KeyboardEvent, MouseEvent};

    pub fn keyboard_event_to_input(e: &KeyboardEvent, is_down: bool) -> InputEvent {
        let key = e.key();
        if is_down {
            InputEvent::KeyDown(key)
        } else {
            InputEvent::KeyUp(key)
        }
    }

    pub fn pointer_down_to_input(e: &MouseEvent) -> InputEvent {
        InputEvent::PointerDown {
            button: MouseButton::from_web_button(e.button()),
            x: e.offset_x() as f32,
            y: e.offset_y() as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(pressed: &[&str]) -> KeyboardState {
        let mut k = KeyboardState::new();
        for p in pressed {
            k.process_event(&InputEvent::KeyDown(p.to_string()));
        }
        k
    }

    #[test]
    fn arrows_and_bindings_both_steer() {
        let p = InputProcessor::default();
        assert_eq!(p.sample(&keys(&["ArrowUp", "d"])), InputState { up: true, right: true, ..Default::default() });
        assert_eq!(p.sample(&keys(&["S", "ArrowLeft"])), InputState { down: true, left: true, ..Default::default() });
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut k = keys(&["ArrowUp", "ArrowLeft"]);
        k.process_event(&InputEvent::FocusLost);
        assert_eq!(InputProcessor::default().sample(&k), InputState::default());
    }

    #[test]
    fn key_up_releases_one_key() {
        let mut k = keys(&["ArrowUp", "ArrowLeft"]);
        k.process_event(&InputEvent::KeyUp("ArrowUp".into()));
        assert_eq!(InputProcessor::default().sample(&k), InputState { left: true, ..Default::default() });
    }

    #[test]
    fn pointer_down_is_reported() {
        let mut k = KeyboardState::new();
        assert!(k.process_event(&InputEvent::PointerDown { button: MouseButton::Left, x: 1.0, y: 2.0 }));
        assert!(!k.process_event(&InputEvent::KeyDown("x".into())));
    }
}
