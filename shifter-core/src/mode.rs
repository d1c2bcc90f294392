//! Operating modes of the shifter.

/// Gearbox layout the shifter is emulating.
///
/// Cycled with the double-press gesture: `HPattern -> Sequential -> Handbrake -> HPattern`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Six forward gears on a 2x3 grid plus reverse.
    #[default]
    HPattern,
    /// Up/down shift only, lateral position ignored.
    Sequential,
    /// Pulling the stick down holds the handbrake button.
    Handbrake,
}

impl Mode {
    /// The mode the gesture switches to from `self`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::HPattern => Self::Sequential,
            Self::Sequential => Self::Handbrake,
            Self::Handbrake => Self::HPattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Mode; 3] = [Mode::HPattern, Mode::Sequential, Mode::Handbrake];

    #[test]
    fn test_default_is_h_pattern() {
        assert_eq!(Mode::default(), Mode::HPattern);
    }

    #[test]
    fn test_next_order() {
        assert_eq!(Mode::HPattern.next(), Mode::Sequential);
        assert_eq!(Mode::Sequential.next(), Mode::Handbrake);
        assert_eq!(Mode::Handbrake.next(), Mode::HPattern);
    }

    #[test]
    fn test_next_three_times_is_identity() {
        for mode in ALL {
            assert_eq!(mode.next().next().next(), mode);
            assert_ne!(mode.next(), mode);
        }
    }
}
