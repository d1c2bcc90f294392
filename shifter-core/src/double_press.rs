//! Double-press gesture detection.

/// Detects two gesture presses within a bounded window.
///
/// The first press arms the detector; a second press within the window
/// fires and disarms. Once the window has elapsed the detector disarms on
/// the next update whether or not a press arrived.
///
/// Timestamps are a free-running millisecond counter and may wrap; elapsed
/// time is always computed with wrapping subtraction.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DoublePressDetector {
    armed_at: Option<u32>,
}

impl DoublePressDetector {
    #[must_use]
    pub const fn new() -> Self {
        Self { armed_at: None }
    }

    /// Whether a first press is waiting for its partner.
    #[inline]
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Timestamp of the arming press, if armed.
    #[inline]
    #[must_use]
    pub const fn armed_at(&self) -> Option<u32> {
        self.armed_at
    }

    /// Feed one poll cycle. Returns `true` when the gesture completed.
    ///
    /// A press that arrives while still armed but after the window only
    /// lets the detector expire; it does not re-arm in the same cycle.
    pub fn update(&mut self, pressed: bool, now_ms: u32, window_ms: u32) -> bool {
        let mut fired = false;

        if pressed {
            match self.armed_at {
                Some(at) => {
                    if now_ms.wrapping_sub(at) <= window_ms {
                        self.armed_at = None;
                        fired = true;
                    }
                }
                None => self.armed_at = Some(now_ms),
            }
        }

        if let Some(at) = self.armed_at {
            if now_ms.wrapping_sub(at) > window_ms {
                self.armed_at = None;
            }
        }

        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DOUBLE_PRESS_WINDOW_MS as W;

    #[test]
    fn test_second_press_inside_window_fires() {
        let mut d = DoublePressDetector::new();
        assert!(!d.update(true, 1000, W));
        assert!(d.is_armed());
        assert!(d.update(true, 1000 + W, W));
        assert!(!d.is_armed());
    }

    #[test]
    fn test_second_press_after_window_does_not_fire() {
        let mut d = DoublePressDetector::new();
        assert!(!d.update(true, 1000, W));
        assert!(!d.update(true, 1000 + W + 1, W));
        assert!(!d.is_armed());
    }

    #[test]
    fn test_expires_without_press() {
        let mut d = DoublePressDetector::new();
        d.update(true, 50, W);
        assert!(!d.update(false, 50 + W, W));
        assert!(d.is_armed());
        assert!(!d.update(false, 50 + W + 1, W));
        assert!(!d.is_armed());
    }

    #[test]
    fn test_late_press_while_armed_does_not_rearm() {
        let mut d = DoublePressDetector::new();
        d.update(true, 0, W);
        // No update ran between the presses, so the detector is still armed.
        assert!(!d.update(true, 900, W));
        assert_eq!(d.armed_at(), None);
        // The next press starts a fresh window.
        assert!(!d.update(true, 950, W));
        assert_eq!(d.armed_at(), Some(950));
    }

    #[test]
    fn test_window_across_counter_wrap() {
        let mut d = DoublePressDetector::new();
        let start = u32::MAX - 100;
        d.update(true, start, W);
        assert!(!d.update(false, start.wrapping_add(200), W));
        assert!(d.is_armed());
        assert!(d.update(true, start.wrapping_add(300), W));
    }

    #[test]
    fn test_no_press_never_arms() {
        let mut d = DoublePressDetector::new();
        for t in (0..2000).step_by(25) {
            assert!(!d.update(false, t, W));
        }
        assert!(!d.is_armed());
    }
}
