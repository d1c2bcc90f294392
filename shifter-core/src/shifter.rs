//! The per-cycle shifter state machine.

use crate::active::{ActiveButton, Transition};
use crate::classify::classify;
use crate::config::ShifterConfig;
use crate::double_press::DoublePressDetector;
use crate::mode::Mode;
use crate::types::{ButtonLevel, ShifterButton, ShifterSample};

/// Result of one [`Shifter::tick`].
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub struct Tick {
    /// New mode, if the gesture completed this cycle.
    pub mode_changed: Option<Mode>,
    /// Release/press events for the HID sink.
    pub transition: Transition,
}

/// Owns all state carried between poll cycles.
///
/// ```
/// use shifter_core::{ButtonLevel, Shifter, ShifterButton, ShifterSample};
///
/// let mut shifter = Shifter::default();
/// let tick = shifter.tick(ShifterSample::new(2500, 300, ButtonLevel::Low), 0);
/// assert_eq!(tick.transition.press, Some(ShifterButton::Gear1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Shifter {
    config: ShifterConfig,
    mode: Mode,
    active: ActiveButton,
    detector: DoublePressDetector,
    last_level: ButtonLevel,
}

impl Default for Shifter {
    fn default() -> Self {
        Self::new(ShifterConfig::DEFAULT)
    }
}

impl Shifter {
    /// Power-on state: H-pattern, nothing held, last button level LOW.
    #[must_use]
    pub const fn new(config: ShifterConfig) -> Self {
        Self {
            config,
            mode: Mode::HPattern,
            active: ActiveButton::new(),
            detector: DoublePressDetector::new(),
            last_level: ButtonLevel::Low,
        }
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn active(&self) -> Option<ShifterButton> {
        self.active.get()
    }

    /// Whether the gesture detector is waiting for a second press.
    #[inline]
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.detector.is_armed()
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ShifterConfig {
        &self.config
    }

    /// Advance one poll cycle.
    ///
    /// Gesture detection runs first, so classification already sees the
    /// mode the gesture may have just selected.
    pub fn tick(&mut self, sample: ShifterSample, now_ms: u32) -> Tick {
        let gesture_edge = self.config.polarity.gesture_edge;
        let pressed = sample.button == gesture_edge && sample.button != self.last_level;

        let mode_changed = if self
            .detector
            .update(pressed, now_ms, self.config.double_press_window_ms)
        {
            self.mode = self.mode.next();
            Some(self.mode)
        } else {
            None
        };
        self.last_level = sample.button;

        let candidate = classify(self.mode, sample.axes, sample.button, &self.config);
        let transition = if mode_changed.is_some() {
            self.active.force_transition_to(candidate)
        } else {
            self.active.transition_to(candidate)
        };

        Tick {
            mode_changed,
            transition,
        }
    }

    /// Drop whatever is held, e.g. when the inputs could not be read.
    ///
    /// Mode and gesture state are kept.
    pub fn release_all(&mut self) -> Transition {
        self.active.release_all()
    }

    /// Reset the held button to what the host was last told, after a
    /// transition could not be delivered.
    pub fn resync_active(&mut self, held: Option<ShifterButton>) {
        self.active.resync(held);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ButtonPolarity;
    use crate::types::ButtonLevel::{High, Low};

    const NEUTRAL: (u16, u16) = (1725, 1850);

    fn sample((horiz, vert): (u16, u16), button: ButtonLevel) -> ShifterSample {
        ShifterSample::new(horiz, vert, button)
    }

    #[test]
    fn test_initial_state() {
        let s = Shifter::default();
        assert_eq!(s.mode(), Mode::HPattern);
        assert_eq!(s.active(), None);
        assert!(!s.is_armed());
    }

    #[test]
    fn test_first_high_sample_arms() {
        // last level starts LOW, so a HIGH first sample is an edge.
        let mut s = Shifter::default();
        let tick = s.tick(sample(NEUTRAL, High), 0);
        assert_eq!(tick.mode_changed, None);
        assert!(s.is_armed());
    }

    #[test]
    fn test_held_level_is_not_an_edge() {
        let mut s = Shifter::default();
        let _ = s.tick(sample(NEUTRAL, High), 0);
        for t in 1..10 {
            let tick = s.tick(sample(NEUTRAL, High), t * 25);
            assert_eq!(tick.mode_changed, None);
        }
        assert_eq!(s.mode(), Mode::HPattern);
    }

    #[test]
    fn test_double_press_advances_mode() {
        let mut s = Shifter::default();
        let _ = s.tick(sample(NEUTRAL, High), 0);
        let _ = s.tick(sample(NEUTRAL, Low), 100);
        let tick = s.tick(sample(NEUTRAL, High), 200);
        assert_eq!(tick.mode_changed, Some(Mode::Sequential));
        assert_eq!(s.mode(), Mode::Sequential);
        assert!(!s.is_armed());
    }

    #[test]
    fn test_falling_edge_is_ignored_for_gesture() {
        let mut s = Shifter::default();
        let _ = s.tick(sample(NEUTRAL, Low), 0);
        let _ = s.tick(sample(NEUTRAL, Low), 25);
        assert!(!s.is_armed());
    }

    #[test]
    fn test_pull_up_polarity_reverse_on_low() {
        let cfg = ShifterConfig::DEFAULT.with_polarity(ButtonPolarity::PULL_UP_SHIFTER);
        let mut s = Shifter::new(cfg);
        let tick = s.tick(sample((1060, 3670), Low), 0);
        assert_eq!(tick.transition.press, Some(ShifterButton::Reverse));
        let tick = s.tick(sample((1060, 3670), High), 25);
        assert_eq!(
            tick.transition,
            Transition {
                release: Some(ShifterButton::Reverse),
                press: Some(ShifterButton::Gear6),
            }
        );
    }

    #[test]
    fn test_release_all_keeps_mode() {
        let mut s = Shifter::default();
        let _ = s.tick(sample((1725, 300), Low), 0);
        assert_eq!(s.active(), Some(ShifterButton::Gear3));
        let t = s.release_all();
        assert_eq!(t.release, Some(ShifterButton::Gear3));
        assert_eq!(s.active(), None);
        assert_eq!(s.mode(), Mode::HPattern);
    }

    #[test]
    fn test_resync_active_replays_transition() {
        let mut s = Shifter::default();
        let _ = s.tick(sample((2500, 300), Low), 0);
        let _ = s.tick(sample((1725, 300), Low), 25);
        assert_eq!(s.active(), Some(ShifterButton::Gear3));

        // The release of gear 1 never reached the host.
        s.resync_active(Some(ShifterButton::Gear1));
        let tick = s.tick(sample((1725, 300), Low), 50);
        assert_eq!(
            tick.transition,
            Transition {
                release: Some(ShifterButton::Gear1),
                press: Some(ShifterButton::Gear3),
            }
        );
    }
}
