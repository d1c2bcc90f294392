//! Axis classification: raw sample + mode -> candidate virtual button.

use crate::config::ShifterConfig;
use crate::mode::Mode;
use crate::types::{AxisSample, ButtonLevel, ShifterButton};

/// Vertical position of the stick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Row {
    Up,
    Neutral,
    Down,
}

/// Horizontal position of the stick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Column {
    Left,
    Center,
    Right,
}

impl Row {
    #[inline]
    #[must_use]
    pub fn of(axes: AxisSample, config: &ShifterConfig) -> Self {
        let t = &config.thresholds;
        if axes.vert < t.up {
            Self::Up
        } else if axes.vert > t.down {
            Self::Down
        } else {
            Self::Neutral
        }
    }
}

impl Column {
    #[inline]
    #[must_use]
    pub fn of(axes: AxisSample, config: &ShifterConfig) -> Self {
        let t = &config.thresholds;
        if axes.horiz > t.left {
            Self::Left
        } else if axes.horiz < t.right {
            Self::Right
        } else {
            Self::Center
        }
    }
}

/// Map one cycle's readings to the button that should be held, if any.
///
/// `button` is the same pin sample used for gesture detection; in
/// [`Mode::HPattern`] it selects reverse instead of gear 6 when it matches
/// the configured reverse level.
///
/// ```
/// use shifter_core::{classify, AxisSample, ButtonLevel, Mode, ShifterButton, ShifterConfig};
///
/// let cfg = ShifterConfig::DEFAULT;
/// let up_left = AxisSample::new(2500, 300);
/// assert_eq!(
///     classify(Mode::HPattern, up_left, ButtonLevel::Low, &cfg),
///     Some(ShifterButton::Gear1)
/// );
/// assert_eq!(
///     classify(Mode::Sequential, up_left, ButtonLevel::Low, &cfg),
///     Some(ShifterButton::SequentialUp)
/// );
/// ```
#[must_use]
pub fn classify(
    mode: Mode,
    axes: AxisSample,
    button: ButtonLevel,
    config: &ShifterConfig,
) -> Option<ShifterButton> {
    let row = Row::of(axes, config);

    match (mode, row) {
        (_, Row::Neutral) => None,

        (Mode::HPattern, Row::Up) => Some(match Column::of(axes, config) {
            Column::Left => ShifterButton::Gear1,
            Column::Center => ShifterButton::Gear3,
            Column::Right => ShifterButton::Gear5,
        }),
        (Mode::HPattern, Row::Down) => Some(match Column::of(axes, config) {
            Column::Left => ShifterButton::Gear2,
            Column::Center => ShifterButton::Gear4,
            Column::Right if button == config.polarity.reverse_level => ShifterButton::Reverse,
            Column::Right => ShifterButton::Gear6,
        }),

        (Mode::Sequential, Row::Up) => Some(ShifterButton::SequentialUp),
        (Mode::Sequential, Row::Down) => Some(ShifterButton::SequentialDown),

        // Only the down motion means anything in handbrake mode.
        (Mode::Handbrake, Row::Up) => None,
        (Mode::Handbrake, Row::Down) => Some(ShifterButton::Handbrake),
    }
}
