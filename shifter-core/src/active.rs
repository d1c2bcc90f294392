//! Single active button tracking and release/press transitions.

use crate::types::ShifterButton;

/// Events to send to the HID sink for one cycle, in order: release first,
/// then press.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub struct Transition {
    pub release: Option<ShifterButton>,
    pub press: Option<ShifterButton>,
}

impl Transition {
    pub const NONE: Self = Self {
        release: None,
        press: None,
    };

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.release.is_none() && self.press.is_none()
    }
}

/// The one virtual button currently asserted to the host.
///
/// At most one button is held at a time. Any change releases the old button
/// before the new one is pressed.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActiveButton {
    current: Option<ShifterButton>,
}

impl ActiveButton {
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    #[inline]
    #[must_use]
    pub const fn get(&self) -> Option<ShifterButton> {
        self.current
    }

    /// Move to `candidate`. Repeating the current value is a no-op.
    pub fn transition_to(&mut self, candidate: Option<ShifterButton>) -> Transition {
        if candidate == self.current {
            return Transition::NONE;
        }
        self.force_transition_to(candidate)
    }

    /// Move to `candidate`, always releasing whatever is held first.
    ///
    /// Used on the cycle the mode changes so a button from the old mode is
    /// never carried over, even when the new mode picks the same index.
    pub fn force_transition_to(&mut self, candidate: Option<ShifterButton>) -> Transition {
        let release = self.current.take();
        self.current = candidate;
        Transition {
            release,
            press: candidate,
        }
    }

    /// Release the held button, if any.
    pub fn release_all(&mut self) -> Transition {
        self.transition_to(None)
    }

    /// Overwrite the tracked button with what the sink actually holds.
    ///
    /// Emits nothing. The next [`transition_to`](Self::transition_to) is
    /// computed against `held`.
    pub fn resync(&mut self, held: Option<ShifterButton>) {
        self.current = held;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_from_idle() {
        let mut active = ActiveButton::new();
        let t = active.transition_to(Some(ShifterButton::Gear1));
        assert_eq!(t.release, None);
        assert_eq!(t.press, Some(ShifterButton::Gear1));
        assert_eq!(active.get(), Some(ShifterButton::Gear1));
    }

    #[test]
    fn test_repeat_is_noop() {
        let mut active = ActiveButton::new();
        let _ = active.transition_to(Some(ShifterButton::Gear4));
        for _ in 0..5 {
            assert!(active.transition_to(Some(ShifterButton::Gear4)).is_empty());
        }
        assert!(ActiveButton::new().transition_to(None).is_empty());
    }

    #[test]
    fn test_change_releases_then_presses() {
        let mut active = ActiveButton::new();
        let _ = active.transition_to(Some(ShifterButton::Gear1));
        let t = active.transition_to(Some(ShifterButton::Gear3));
        assert_eq!(
            t,
            Transition {
                release: Some(ShifterButton::Gear1),
                press: Some(ShifterButton::Gear3),
            }
        );
    }

    #[test]
    fn test_neutral_releases_only() {
        let mut active = ActiveButton::new();
        let _ = active.transition_to(Some(ShifterButton::Handbrake));
        let t = active.release_all();
        assert_eq!(t.release, Some(ShifterButton::Handbrake));
        assert_eq!(t.press, None);
        assert_eq!(active.get(), None);
    }

    #[test]
    fn test_force_repeats_same_button() {
        let mut active = ActiveButton::new();
        let _ = active.transition_to(Some(ShifterButton::Gear2));
        let t = active.force_transition_to(Some(ShifterButton::Gear2));
        assert_eq!(t.release, Some(ShifterButton::Gear2));
        assert_eq!(t.press, Some(ShifterButton::Gear2));
        assert_eq!(active.get(), Some(ShifterButton::Gear2));
    }

    #[test]
    fn test_resync_reissues_press() {
        let mut active = ActiveButton::new();
        let _ = active.transition_to(Some(ShifterButton::Gear3));
        active.resync(None);
        let t = active.transition_to(Some(ShifterButton::Gear3));
        assert_eq!(t.release, None);
        assert_eq!(t.press, Some(ShifterButton::Gear3));
    }
}
