// crates/situ-core/src/scroller.rs
// Horizontal scroller math for the projects row

/// Distance moved by the previous/next buttons
pub const SCROLL_STEP_PX: f64 = 300.0;
/// Gap between cards in the row
pub const CARD_GAP_PX: f64 = 16.0;
/// Viewports narrower than this use the compact card width
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const COMPACT_CARD_WIDTH_PX: f64 = 230.0;
pub const WIDE_CARD_WIDTH_PX: f64 = 384.0;

/// Snapshot of the scroll container's geometry
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

/// Which arrow buttons are enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAvailability {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl Default for ScrollAvailability {
    /// Before the first measurement the row sits at its start
    fn default() -> Self {
        Self {
            can_scroll_left: false,
            can_scroll_right: true,
        }
    }
}

impl ScrollMetrics {
    pub fn availability(&self) -> ScrollAvailability {
        ScrollAvailability {
            can_scroll_left: self.scroll_left > 0.0,
            can_scroll_right: self.scroll_left < self.scroll_width - self.client_width,
        }
    }
}

/// Card width for a viewport of `viewport_width`
pub fn card_width(viewport_width: f64) -> f64 {
    if viewport_width < MOBILE_BREAKPOINT_PX {
        COMPACT_CARD_WIDTH_PX
    } else {
        WIDE_CARD_WIDTH_PX
    }
}

/// Scroll offset that brings card `index` to the row's left edge
pub fn card_scroll_position(index: usize, viewport_width: f64) -> f64 {
    (card_width(viewport_width) + CARD_GAP_PX) * index as f64
}

/// Which project card, if any, is expanded into the overlay
///
/// The page body stays scroll-locked exactly while a card is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpandedCard {
    open: Option<usize>,
}

impl ExpandedCard {
    pub fn open(&mut self, index: usize) {
        self.open = Some(index);
    }

    pub fn current(&self) -> Option<usize> {
        self.open
    }

    pub fn locks_body(&self) -> bool {
        self.open.is_some()
    }

    /// Close the overlay (close button, Escape or a click outside the panel)
    ///
    /// Returns the scroll offset that brings the closed card back into view;
    /// `None` when nothing was open, so stray key presses and clicks are no-ops.
    pub fn close(&mut self, viewport_width: f64) -> Option<f64> {
        self.open
            .take()
            .map(|index| card_scroll_position(index, viewport_width))
    }
}
