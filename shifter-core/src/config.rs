//! Compile-time configuration: axis thresholds, button polarity and timing.
//!
//! Reference readings taken on a Logitech shifter (12-bit ADC):
//!
//! | Position | horiz | vert |
//! |----------|-------|------|
//! | neutral  | ~1725 | ~1850 |
//! | up       |       | ~300 |
//! | down     |       | ~3670 |
//! | left     | ~2540 |      |
//! | right    | ~1060 |      |
//!
//! The button reads HIGH at rest.

use crate::types::ButtonLevel;

/// Window in which a second gesture press advances the mode.
pub const DOUBLE_PRESS_WINDOW_MS: u32 = 400;

/// Period of the input poll loop.
pub const POLL_PERIOD_MS: u64 = 25;

/// Axis thresholds in raw ADC counts.
///
/// All comparisons are strict; a reading equal to a threshold belongs to
/// the neutral row (vertical) or the center column (horizontal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
    /// `vert` below this is the upper row.
    pub up: u16,
    /// `vert` above this is the lower row.
    pub down: u16,
    /// `horiz` below this is the right column.
    pub right: u16,
    /// `horiz` above this is the left column.
    pub left: u16,
}

impl Thresholds {
    pub const DEFAULT: Self = Self {
        up: 1000,
        down: 3000,
        right: 1300,
        left: 2000,
    };
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which digital levels mean what.
///
/// The same pin sample drives the mode gesture and the gear 6 / reverse
/// choice, so both levels are stated here instead of being inferred from
/// the pull configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonPolarity {
    /// A transition *to* this level counts as a gesture press.
    pub gesture_edge: ButtonLevel,
    /// Level that turns gear 6 into reverse.
    pub reverse_level: ButtonLevel,
}

impl ButtonPolarity {
    /// HIGH is both the gesture edge and the reverse level.
    pub const DEFAULT: Self = Self {
        gesture_edge: ButtonLevel::High,
        reverse_level: ButtonLevel::High,
    };

    /// Pull-up wired shifter: pushing down pulls the line LOW and selects
    /// reverse; the gesture fires when the stick is let back up (LOW -> HIGH).
    pub const PULL_UP_SHIFTER: Self = Self {
        gesture_edge: ButtonLevel::High,
        reverse_level: ButtonLevel::Low,
    };
}

impl Default for ButtonPolarity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Full set of tunables for a [`Shifter`](crate::Shifter).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShifterConfig {
    pub thresholds: Thresholds,
    pub polarity: ButtonPolarity,
    pub double_press_window_ms: u32,
}

impl ShifterConfig {
    pub const DEFAULT: Self = Self {
        thresholds: Thresholds::DEFAULT,
        polarity: ButtonPolarity::DEFAULT,
        double_press_window_ms: DOUBLE_PRESS_WINDOW_MS,
    };

    /// Same thresholds and timing with a different polarity.
    #[must_use]
    pub const fn with_polarity(self, polarity: ButtonPolarity) -> Self {
        Self { polarity, ..self }
    }
}

impl Default for ShifterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
