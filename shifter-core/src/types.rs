//! Core shifter types: ButtonLevel, AxisSample, ShifterSample, ShifterButton, ButtonSet.

use core::ops::{BitOr, BitOrAssign};

/// Raw level of a digital input pin.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonLevel {
    #[default]
    Low,
    High,
}

impl ButtonLevel {
    /// Build a level from an `is_high()` style reading.
    #[inline]
    #[must_use]
    pub const fn from_high(high: bool) -> Self {
        if high {
            Self::High
        } else {
            Self::Low
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

/// Raw ADC counts of the two potentiometer axes.
///
/// Range depends on the converter; the RP2040 ADC is 12-bit (0..=4095).
/// Values are never clamped: anything outside the expected travel is
/// classified by the same threshold comparisons.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSample {
    pub horiz: u16,
    pub vert: u16,
}

impl AxisSample {
    #[must_use]
    pub const fn new(horiz: u16, vert: u16) -> Self {
        Self { horiz, vert }
    }
}

/// Everything read from the shifter in one poll cycle.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShifterSample {
    pub axes: AxisSample,
    pub button: ButtonLevel,
}

impl ShifterSample {
    #[must_use]
    pub const fn new(horiz: u16, vert: u16, button: ButtonLevel) -> Self {
        Self {
            axes: AxisSample::new(horiz, vert),
            button,
        }
    }
}

/// Virtual HID buttons reported to the host.
///
/// The discriminant is the 0-based HID button index (button 1 on the host
/// is index 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ShifterButton {
    Gear1 = 0,
    Gear2 = 1,
    Gear3 = 2,
    Gear4 = 3,
    Gear5 = 4,
    Gear6 = 5,
    Reverse = 6,
    SequentialUp = 7,
    SequentialDown = 8,
    Handbrake = 9,
}

impl ShifterButton {
    /// Number of virtual buttons.
    pub const COUNT: usize = 10;

    /// All buttons in index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Gear1,
        Self::Gear2,
        Self::Gear3,
        Self::Gear4,
        Self::Gear5,
        Self::Gear6,
        Self::Reverse,
        Self::SequentialUp,
        Self::SequentialDown,
        Self::Handbrake,
    ];

    /// 0-based HID button index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`index`](Self::index).
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }
}

/// Set of pressed virtual buttons, one bit per HID button index.
///
/// # Example
///
/// ```
/// use shifter_core::{ButtonSet, ShifterButton};
///
/// let mut set = ButtonSet::NONE;
/// set.insert(ShifterButton::Gear3);
/// assert!(set.contains(ShifterButton::Gear3));
/// assert_eq!(set.raw(), 0b100);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSet(pub u16);

impl ButtonSet {
    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    #[inline]
    #[must_use]
    const fn bit(button: ShifterButton) -> u16 {
        1 << button.index()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, button: ShifterButton) -> bool {
        self.0 & Self::bit(button) != 0
    }

    #[inline]
    pub fn insert(&mut self, button: ShifterButton) {
        self.0 |= Self::bit(button);
    }

    #[inline]
    pub fn remove(&mut self, button: ShifterButton) {
        self.0 &= !Self::bit(button);
    }

    /// Number of buttons currently in the set.
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the raw u16 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<ShifterButton> for ButtonSet {
    fn from(button: ShifterButton) -> Self {
        Self(Self::bit(button))
    }
}

impl BitOr<ShifterButton> for ButtonSet {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: ShifterButton) -> Self::Output {
        Self(self.0 | Self::bit(rhs))
    }
}

impl BitOrAssign<ShifterButton> for ButtonSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: ShifterButton) {
        self.insert(rhs);
    }
}
