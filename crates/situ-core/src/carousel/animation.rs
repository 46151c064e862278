// crates/situ-core/src/carousel/animation.rs
// Linear, endlessly repeating position animation

/// Owned handle for the carousel's loop animation
///
/// Position moves linearly from `from` to `to` over `duration_secs`, then
/// starts over. `elapsed` is kept wrapped to one period, so after exactly one
/// cycle the position is back at `from`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopAnimation {
    from: f64,
    to: f64,
    duration_secs: f64,
    elapsed_secs: f64,
    running: bool,
}

impl LoopAnimation {
    /// Start a running animation at `from`
    pub fn start(from: f64, to: f64, duration_secs: f64) -> Self {
        Self {
            from,
            to,
            duration_secs: duration_secs.max(f64::EPSILON),
            elapsed_secs: 0.0,
            running: true,
        }
    }

    /// Move the clock forward; ignored while paused or for non-positive steps
    pub fn advance(&mut self, dt_secs: f64) {
        if !self.running || !dt_secs.is_finite() || dt_secs <= 0.0 {
            return;
        }
        self.elapsed_secs = (self.elapsed_secs + dt_secs) % self.duration_secs;
    }

    /// Current position
    pub fn offset(&self) -> f64 {
        self.from + (self.to - self.from) * self.progress()
    }

    /// Fraction of the current cycle in `[0, 1)`
    pub fn progress(&self) -> f64 {
        self.elapsed_secs / self.duration_secs
    }

    /// Freeze at the current position
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Continue from the frozen position
    pub fn play(&mut self) {
        self.running = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_linear_progress() {
        let mut anim = LoopAnimation::start(0.0, -400.0, 20.0);
        assert_eq!(anim.offset(), 0.0);
        anim.advance(5.0);
        assert!(approx(anim.offset(), -100.0));
        anim.advance(5.0);
        assert!(approx(anim.offset(), -200.0));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut anim = LoopAnimation::start(-400.0, 0.0, 40.0);
        anim.advance(40.0);
        assert!(approx(anim.offset(), -400.0));
        assert!(approx(anim.progress(), 0.0));
    }

    #[test]
    fn test_wraps_across_cycles() {
        let mut anim = LoopAnimation::start(0.0, -100.0, 10.0);
        anim.advance(25.0);
        assert!(approx(anim.offset(), -50.0));
        assert!(approx(anim.progress(), 0.5));
    }

    #[test]
    fn test_pause_holds_position() {
        let mut anim = LoopAnimation::start(0.0, -100.0, 10.0);
        anim.advance(3.0);
        anim.pause();
        let held = anim.offset();
        anim.advance(4.0);
        assert_eq!(anim.offset(), held);
        anim.play();
        anim.advance(1.0);
        assert!(approx(anim.offset(), -40.0));
    }

    #[test]
    fn test_ignores_bad_steps() {
        let mut anim = LoopAnimation::start(0.0, -100.0, 10.0);
        anim.advance(-1.0);
        anim.advance(f64::NAN);
        anim.advance(0.0);
        assert_eq!(anim.offset(), 0.0);
    }
}
