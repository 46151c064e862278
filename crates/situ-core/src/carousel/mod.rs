// crates/situ-core/src/carousel/mod.rs
// Seamless infinite carousel: duplication, measurement and loop state machine

mod animation;

pub use animation::LoopAnimation;

use log::{debug, info};
use situ_types::CarouselItem;

use crate::error::{Result, SituError};

// ═══════════════════════════════════════
// OPTIONS
// ═══════════════════════════════════════

/// Scroll direction of the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Content travels right-to-left (forward)
    #[default]
    Left,
    /// Content travels left-to-right (reverse)
    Right,
}

/// Speed tier; one logical copy scrolls by in this many seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    #[default]
    Fast,
    Normal,
    Slow,
}

impl Speed {
    pub fn duration_secs(self) -> f64 {
        match self {
            Speed::Fast => 20.0,
            Speed::Normal => 40.0,
            Speed::Slow => 80.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    pub direction: Direction,
    pub speed: Speed,
    pub pause_on_hover: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            direction: Direction::Left,
            speed: Speed::Fast,
            pause_on_hover: true,
        }
    }
}

// ═══════════════════════════════════════
// CONTENT & TRACK
// ═══════════════════════════════════════

/// Content the carousel can duplicate
pub trait LoopContent: Clone {
    /// Copy used in the second half of the row; must drop anything that has
    /// to stay unique in the surrounding document (DOM ids, keys)
    fn clone_for_loop(&self) -> Self;
    /// Render key; originals and clones never share one
    fn loop_key(&self) -> &str;
}

impl LoopContent for CarouselItem {
    fn loop_key(&self) -> &str {
        &self.key
    }

    fn clone_for_loop(&self) -> Self {
        CarouselItem {
            key: format!("{}-clone", self.key),
            dom_id: None,
            ..self.clone()
        }
    }
}

/// One rendered slot of the row
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceEntry<T> {
    pub item: T,
    /// Set on the duplicate half
    pub cloned: bool,
}

/// The rendered row the carousel owns
///
/// In the browser this is the scrolling `<ul>`; tests use an in-memory row
/// with fixed item widths.
pub trait Track<T> {
    /// Drop every clone-marked node, keeping originals
    fn remove_clones(&mut self);
    /// Render exactly `sequence`
    fn mount(&mut self, sequence: &[SequenceEntry<T>]);
    /// Total rendered content width; zero or NaN until laid out
    fn measure(&self) -> f64;
    /// Translate the row horizontally
    fn set_offset(&mut self, offset: f64);
}

// ═══════════════════════════════════════
// LAYOUT
// ═══════════════════════════════════════

/// Identity of a rendered row: slot count plus first and last keys
///
/// A row of the same length but different content has a different signature,
/// so a width read from stale nodes is never taken for the new sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowSignature {
    pub len: usize,
    pub first: Option<String>,
    pub last: Option<String>,
}

impl RowSignature {
    pub fn of<T: LoopContent>(sequence: &[SequenceEntry<T>]) -> Self {
        Self {
            len: sequence.len(),
            first: sequence.first().map(|e| e.item.loop_key().to_string()),
            last: sequence.last().map(|e| e.item.loop_key().to_string()),
        }
    }
}

/// Layout box of one rendered slot, in the row's coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotBox {
    pub left: f64,
    pub width: f64,
    pub margin_right: f64,
}

/// Width spanned by the slots themselves, trailing margin included
///
/// Unlike the container's scroll width this does not grow when the row is
/// stretched wider than its content.
pub fn content_extent(slots: &[SlotBox]) -> f64 {
    let Some(start) = slots.iter().map(|s| s.left).reduce(f64::min) else {
        return 0.0;
    };
    let end = slots
        .iter()
        .map(|s| s.left + s.width + s.margin_right)
        .fold(f64::NEG_INFINITY, f64::max);
    end - start
}

// ═══════════════════════════════════════
// GEOMETRY
// ═══════════════════════════════════════

/// Loop endpoints derived from a measured row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopGeometry {
    pub total_width: f64,
    /// Width of one logical copy
    pub segment_width: f64,
    pub start_offset: f64,
    pub end_offset: f64,
}

impl LoopGeometry {
    /// Refuses degenerate measurements instead of animating against them
    pub fn from_measured(total_width: f64, direction: Direction) -> Result<Self> {
        let segment_width = total_width / 2.0;
        if !segment_width.is_finite() || segment_width <= 0.0 {
            return Err(SituError::RenderDegenerate(total_width));
        }
        let (start_offset, end_offset) = match direction {
            Direction::Left => (0.0, -segment_width),
            Direction::Right => (-segment_width, 0.0),
        };
        Ok(Self {
            total_width,
            segment_width,
            start_offset,
            end_offset,
        })
    }
}

/// Originals followed by one full duplicate
pub fn build_sequence<T: LoopContent>(items: &[T]) -> Vec<SequenceEntry<T>> {
    let originals = items.iter().map(|item| SequenceEntry {
        item: item.clone(),
        cloned: false,
    });
    let clones = items.iter().map(|item| SequenceEntry {
        item: item.clone_for_loop(),
        cloned: true,
    });
    originals.chain(clones).collect()
}

// ═══════════════════════════════════════
// STATE MACHINE
// ═══════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    /// No items; nothing rendered
    Uninitialized,
    /// Row duplicated, waiting for a usable measurement
    Building,
    Animating,
    Paused,
}

/// Infinite carousel renderer state
///
/// Owns the loop animation; replacing or stopping it goes through this type
/// only, so two animations never drive the same row.
#[derive(Debug)]
pub struct InfiniteCarousel<T> {
    options: CarouselOptions,
    phase: CarouselPhase,
    sequence: Vec<SequenceEntry<T>>,
    geometry: Option<LoopGeometry>,
    animation: Option<LoopAnimation>,
    hovered: bool,
}

impl<T: LoopContent> InfiniteCarousel<T> {
    pub fn new(options: CarouselOptions) -> Self {
        Self {
            options,
            phase: CarouselPhase::Uninitialized,
            sequence: Vec::new(),
            geometry: None,
            animation: None,
            hovered: false,
        }
    }

    pub fn options(&self) -> CarouselOptions {
        self.options
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    /// Rendered row (2N entries while items are present)
    pub fn sequence(&self) -> &[SequenceEntry<T>] {
        &self.sequence
    }

    pub fn clone_count(&self) -> usize {
        self.sequence.iter().filter(|e| e.cloned).count()
    }

    pub fn geometry(&self) -> Option<LoopGeometry> {
        self.geometry
    }

    pub fn animation(&self) -> Option<&LoopAnimation> {
        self.animation.as_ref()
    }

    /// Current translation, if a loop has been started
    pub fn offset(&self) -> Option<f64> {
        self.animation.as_ref().map(LoopAnimation::offset)
    }

    /// Replace the item list; always a full rebuild
    pub fn set_items(&mut self, items: &[T], track: &mut impl Track<T>) {
        self.reset(track);

        if items.is_empty() {
            track.mount(&[]);
            debug!("Carousel emptied");
            return;
        }

        self.sequence = build_sequence(items);
        track.mount(&self.sequence);
        self.phase = CarouselPhase::Building;
        debug!("Carousel rebuilt with {} items ({} rendered)", items.len(), self.sequence.len());

        // Content may already be laid out; otherwise the next frame retries
        let _ = self.on_layout(track);
    }

    /// Apply new options; direction or speed changes restart the loop
    pub fn set_options(&mut self, options: CarouselOptions, track: &mut impl Track<T>) {
        let previous = self.options;
        self.options = options;

        let restart = previous.direction != options.direction || previous.speed != options.speed;
        if restart && matches!(self.phase, CarouselPhase::Animating | CarouselPhase::Paused) {
            self.animation = None;
            self.geometry = None;
            self.phase = CarouselPhase::Building;
            let _ = self.on_layout(track);
        } else if !options.pause_on_hover && self.phase == CarouselPhase::Paused {
            self.resume();
        }
    }

    /// Layout pass: start the loop once the row has a usable width
    ///
    /// Returns [`SituError::RenderDegenerate`] (and stays in `Building`) when
    /// the measurement is zero or NaN.
    pub fn on_layout(&mut self, track: &mut impl Track<T>) -> Result<()> {
        if self.phase != CarouselPhase::Building {
            return Ok(());
        }

        let geometry = match LoopGeometry::from_measured(track.measure(), self.options.direction) {
            Ok(geometry) => geometry,
            Err(err) => {
                debug!("Carousel not ready: {}", err);
                return Err(err);
            }
        };

        track.set_offset(geometry.start_offset);
        let mut animation = LoopAnimation::start(
            geometry.start_offset,
            geometry.end_offset,
            self.options.speed.duration_secs(),
        );

        self.geometry = Some(geometry);
        if self.hovered && self.options.pause_on_hover {
            animation.pause();
            self.phase = CarouselPhase::Paused;
        } else {
            self.phase = CarouselPhase::Animating;
        }
        self.animation = Some(animation);

        info!(
            "Carousel loop started: segment {:.1}px over {}s ({:?})",
            geometry.segment_width,
            self.options.speed.duration_secs(),
            self.options.direction
        );
        Ok(())
    }

    /// Per-frame step: retries layout while building, moves the row while animating
    pub fn advance(&mut self, dt_secs: f64, track: &mut impl Track<T>) {
        match self.phase {
            CarouselPhase::Building => {
                let _ = self.on_layout(track);
            }
            CarouselPhase::Animating => {
                if let Some(animation) = self.animation.as_mut() {
                    animation.advance(dt_secs);
                    track.set_offset(animation.offset());
                }
            }
            CarouselPhase::Uninitialized | CarouselPhase::Paused => {}
        }
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        if self.options.pause_on_hover && self.phase == CarouselPhase::Animating {
            if let Some(animation) = self.animation.as_mut() {
                animation.pause();
            }
            self.phase = CarouselPhase::Paused;
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        if self.phase == CarouselPhase::Paused {
            self.resume();
        }
    }

    /// Stop everything and remove clones; the carousel renders nothing afterwards
    pub fn teardown(&mut self, track: &mut impl Track<T>) {
        self.reset(track);
        track.mount(&[]);
    }

    fn resume(&mut self) {
        if let Some(animation) = self.animation.as_mut() {
            animation.play();
        }
        self.phase = CarouselPhase::Animating;
    }

    fn reset(&mut self, track: &mut impl Track<T>) {
        track.remove_clones();
        self.animation = None;
        self.geometry = None;
        self.sequence.clear();
        self.phase = CarouselPhase::Uninitialized;
    }
}
