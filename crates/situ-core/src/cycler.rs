// crates/situ-core/src/cycler.rs
// Hover-driven image cycling for product cards

/// Image index state for one product card
///
/// Auto-advance runs only while the pointer is over the image region and the
/// card has more than one image. The index survives hover cycles; manual
/// navigation restarts the interval phase without turning auto-advance off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCycler {
    len: usize,
    index: usize,
    interval_ms: u32,
    elapsed_ms: u32,
    hovered: bool,
}

impl ImageCycler {
    pub fn new(len: usize, interval_ms: u32) -> Self {
        Self {
            len,
            index: 0,
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            hovered: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_multiple(&self) -> bool {
        self.len > 1
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// True while ticks can move the index
    pub fn is_cycling(&self) -> bool {
        self.hovered && self.has_multiple()
    }

    pub fn pointer_enter(&mut self) {
        if !self.hovered {
            self.hovered = true;
            self.elapsed_ms = 0;
        }
    }

    /// Stop auto-advance; the current index is kept
    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.elapsed_ms = 0;
    }

    /// Feed elapsed time; returns true when at least one interval elapsed
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        if !self.is_cycling() {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        let steps = self.elapsed_ms / self.interval_ms;
        if steps == 0 {
            return false;
        }
        self.elapsed_ms %= self.interval_ms;
        self.index = (self.index + steps as usize) % self.len;
        true
    }

    pub fn next(&mut self) {
        if self.has_multiple() {
            self.index = (self.index + 1) % self.len;
        }
        self.elapsed_ms = 0;
    }

    pub fn previous(&mut self) {
        if self.has_multiple() {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.elapsed_ms = 0;
    }

    /// Jump to `index` (dot navigation); out-of-range values are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
            self.elapsed_ms = 0;
        }
    }
}
