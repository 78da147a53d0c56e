use std::collections::HashMap;

/// Currently held keys, keyed by the host's key identifier
///
/// Last write wins; unknown keys read as released. Keys the game does not
/// bind are still recorded.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key(&mut self, id: &str, pressed: bool) {
        if let Some(state) = self.keys.get_mut(id) {
            *state = pressed;
        } else {
            self.keys.insert(id.to_owned(), pressed);
        }
    }

    pub fn key_down(&mut self, id: &str) {
        self.set_key(id, true);
    }

    pub fn key_up(&mut self, id: &str) {
        self.set_key(id, false);
    }

    pub fn is_pressed(&self, id: &str) -> bool {
        self.keys.get(id).copied().unwrap_or(false)
    }

    /// Release every key (e.g. when the page loses focus)
    pub fn release_all(&mut self) {
        for state in self.keys.values_mut() {
            *state = false;
        }
    }
}
