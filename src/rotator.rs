//! The decorative backdrop rotator.
//!
//! Functionally independent of the roster data: a fixed set of scene names,
//! shuffled once per session, advanced on a fixed cadence while the viewport
//! is wide enough. Reduced-motion requests disable it outright. The struct
//! here is a plain state machine; `watch` drives it from a timer.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

/// The fixed backdrop set, shuffled once per session.
pub const BACKDROPS: [&str; 6] = [
    "Mars",
    "Moon",
    "Moon Astronaut",
    "Spacewalk",
    "Rocket",
    "Stars",
];

/// Cadence of the automatic rotation.
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(6);

/// Minimum viewport width, in layout units, for rotation to run.
pub const MIN_VIEWPORT_WIDTH: u32 = 520;

#[derive(Debug)]
pub struct Rotator {
    backdrops: Vec<&'static str>,
    current: usize,
    running: bool,
    paused: bool,
    disabled: bool,
}

impl Rotator {
    /// A rotator with a freshly shuffled backdrop order. When reduced motion
    /// is requested the rotator exists but never shows or advances anything.
    pub fn new(reduced_motion: bool) -> Self {
        Self::with_order(shuffled_backdrops(&mut rand::rng()), reduced_motion)
    }

    pub fn with_order(backdrops: Vec<&'static str>, reduced_motion: bool) -> Self {
        let disabled = reduced_motion || backdrops.is_empty();
        Self {
            backdrops,
            current: 0,
            running: false,
            paused: false,
            disabled,
        }
    }

    /// The backdrop to show, or `None` when rotation is disabled.
    pub fn current(&self) -> Option<&'static str> {
        if self.disabled {
            None
        } else {
            Some(self.backdrops[self.current])
        }
    }

    /// Start or stop automatic rotation based on viewport width.
    pub fn update_auto(&mut self, viewport_width: u32) {
        if self.disabled {
            return;
        }
        self.running = viewport_width >= MIN_VIEWPORT_WIDTH;
    }

    /// Hover analogue: hold the current backdrop.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_running(&self) -> bool {
        self.running && !self.paused && !self.disabled
    }

    /// Advance to the next backdrop if rotation is live. Returns whether the
    /// backdrop changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.current = (self.current + 1) % self.backdrops.len();
        true
    }
}

/// Fisher–Yates shuffle of the backdrop set; every permutation is equally
/// likely.
fn shuffled_backdrops(rng: &mut impl Rng) -> Vec<&'static str> {
    let mut backdrops = BACKDROPS.to_vec();
    backdrops.shuffle(rng);
    backdrops
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffle_preserves_the_backdrop_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut shuffled = shuffled_backdrops(&mut rng);
        shuffled.sort_unstable();
        let mut expected = BACKDROPS.to_vec();
        expected.sort_unstable();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn different_seeds_produce_different_orders() {
        let a = shuffled_backdrops(&mut StdRng::seed_from_u64(1));
        let b = shuffled_backdrops(&mut StdRng::seed_from_u64(2));
        // Not a uniformity proof, just a sanity check that shuffling happens.
        assert!(a != b || a != BACKDROPS.to_vec());
    }

    #[test]
    fn advances_and_wraps_when_running() {
        let mut rotator = Rotator::with_order(vec!["a", "b", "c"], false);
        rotator.update_auto(MIN_VIEWPORT_WIDTH);
        assert_eq!(rotator.current(), Some("a"));
        assert!(rotator.tick());
        assert_eq!(rotator.current(), Some("b"));
        assert!(rotator.tick());
        assert!(rotator.tick());
        assert_eq!(rotator.current(), Some("a"));
    }

    #[test]
    fn narrow_viewports_stop_rotation() {
        let mut rotator = Rotator::with_order(vec!["a", "b"], false);
        rotator.update_auto(MIN_VIEWPORT_WIDTH - 1);
        assert!(!rotator.is_running());
        assert!(!rotator.tick());
        assert_eq!(rotator.current(), Some("a"));

        rotator.update_auto(MIN_VIEWPORT_WIDTH);
        assert!(rotator.is_running());
        assert!(rotator.tick());
    }

    #[test]
    fn pause_holds_and_resume_releases() {
        let mut rotator = Rotator::with_order(vec!["a", "b"], false);
        rotator.update_auto(MIN_VIEWPORT_WIDTH);
        rotator.pause();
        assert!(!rotator.tick());
        rotator.resume();
        assert!(rotator.tick());
    }

    #[test]
    fn reduced_motion_disables_the_rotator() {
        let mut rotator = Rotator::with_order(vec!["a", "b"], true);
        rotator.update_auto(MIN_VIEWPORT_WIDTH);
        assert_eq!(rotator.current(), None);
        assert!(!rotator.tick());
    }
}
