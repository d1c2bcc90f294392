//! Platform-agnostic gear shifter logic: input classification and the mode
//! state machine.
//!
//! This crate turns raw potentiometer and button readings from a gear
//! shifter into virtual HID button presses. It has no platform
//! dependencies and runs both in embedded `no_std` environments and on the
//! host for testing.
//!
//! # Overview
//!
//! - [`types`]: Sample and button types ([`ShifterSample`], [`ShifterButton`], [`ButtonSet`])
//! - [`mode`]: Operating modes ([`Mode`])
//! - [`config`]: Thresholds, polarity and timing ([`ShifterConfig`])
//! - [`classify`](mod@classify): Sample + mode to candidate button ([`classify()`])
//! - [`double_press`]: Mode-switch gesture ([`DoublePressDetector`])
//! - [`active`]: Single held button and its transitions ([`ActiveButton`])
//! - [`shifter`]: Per-cycle state machine ([`Shifter`])
//! - [`input`] / [`output`]: Platform seams ([`ShifterInput`], [`ButtonSink`])
//! - [`bridge`]: One poll cycle from input to sink ([`ShifterBridge`])
//!
//! # Modes
//!
//! | Mode | Up | Down |
//! |------|----|------|
//! | H-pattern | gears 1/3/5 (left/center/right) | gears 2/4/6, reverse when the button is at the reverse level on the right |
//! | Sequential | shift up | shift down |
//! | Handbrake | nothing | handbrake |
//!
//! Two gesture presses within [`DOUBLE_PRESS_WINDOW_MS`] move to the next mode.
//!
//! # Example
//!
//! ```rust
//! use shifter_core::{ButtonLevel, Mode, Shifter, ShifterButton, ShifterSample};
//!
//! let mut shifter = Shifter::default();
//!
//! // Stick up and to the left: first gear.
//! let tick = shifter.tick(ShifterSample::new(2540, 300, ButtonLevel::Low), 0);
//! assert_eq!(tick.transition.press, Some(ShifterButton::Gear1));
//!
//! // Back to neutral releases it.
//! let tick = shifter.tick(ShifterSample::new(1725, 1850, ButtonLevel::Low), 25);
//! assert_eq!(tick.transition.release, Some(ShifterButton::Gear1));
//! assert_eq!(shifter.mode(), Mode::HPattern);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod active;
pub mod bridge;
pub mod classify;
pub mod config;
pub mod double_press;
pub mod input;
pub mod mode;
pub mod output;
pub mod shifter;
pub mod types;

// Re-export main types at crate root
pub use active::{ActiveButton, Transition};
pub use bridge::{BridgeError, Cycle, ShifterBridge};
pub use classify::{classify, Column, Row};
pub use config::{
    ButtonPolarity, ShifterConfig, Thresholds, DOUBLE_PRESS_WINDOW_MS, POLL_PERIOD_MS,
};
pub use double_press::DoublePressDetector;
pub use input::{InputError, ShifterInput};
pub use mode::Mode;
pub use output::{ButtonSink, OutputError};
pub use shifter::{Shifter, Tick};
pub use types::{AxisSample, ButtonLevel, ButtonSet, ShifterButton, ShifterSample};
