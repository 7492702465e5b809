//! Held-key table
//!
//! The platform layer records key presses/releases by key code; the
//! simulation only asks whether a logical key is currently held.

/// Size of the key table (covers every GLFW key code)
pub const KEY_COUNT: usize = 1024;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Releases the ball from the paddle
    Launch,
}

impl Key {
    /// Key code in the table (GLFW numbering)
    pub const fn code(self) -> usize {
        match self {
            Key::Left => 263,
            Key::Right => 262,
            Key::Launch => 32,
        }
    }
}

/// Boolean table of currently held keys, indexed by key code
#[derive(Clone)]
pub struct Keys {
    held: [bool; KEY_COUNT],
}

impl Default for Keys {
    fn default() -> Self {
        Self {
            held: [false; KEY_COUNT],
        }
    }
}

impl std::fmt::Debug for Keys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let held: Vec<usize> = (0..KEY_COUNT).filter(|&code| self.held[code]).collect();
        f.debug_struct("Keys").field("held", &held).finish()
    }
}

impl Keys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event. Codes outside the table are ignored.
    pub fn set(&mut self, code: usize, pressed: bool) {
        match self.held.get_mut(code) {
            Some(slot) => *slot = pressed,
            None => log::warn!("Ignoring out-of-range key code {}", code),
        }
    }

    pub fn press(&mut self, key: Key) {
        self.set(key.code(), true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key.code(), false);
    }

    pub fn is_code_held(&self, code: usize) -> bool {
        self.held.get(code).copied().unwrap_or(false)
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.is_code_held(key.code())
    }

    pub fn release_all(&mut self) {
        self.held = [false; KEY_COUNT];
    }
}
