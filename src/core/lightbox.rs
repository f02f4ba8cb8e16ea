#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open,
}

/// Zoom state of a single figure. Each figure owns its own instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lightbox {
    state: LightboxState,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> LightboxState {
        self.state
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == LightboxState::Open
    }

    /// Returns true if the state changed.
    pub fn open(&mut self) -> bool {
        self.set(LightboxState::Open)
    }

    /// Returns true if the state changed.
    pub fn close(&mut self) -> bool {
        self.set(LightboxState::Closed)
    }

    fn set(&mut self, next: LightboxState) -> bool {
        let changed = self.state != next;
        self.state = next;
        changed
    }
}
