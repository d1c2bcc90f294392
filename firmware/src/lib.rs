//! USB HID gear shifter firmware for RP2040.
//!
//! Reads the two potentiometers and the push-down button of a gear shifter
//! and presents them to the host as a ten-button USB HID gamepad.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and, every
//! [`POLL_PERIOD_MS`]:
//! 1. Samples both axes on the ADC and the button on a GPIO
//! 2. Runs the mode state machine and classifier from [`shifter_core`]
//! 3. Sends release/press reports over USB HID
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | ADC0     | 26   | Horizontal potentiometer |
//! | ADC1     | 27   | Vertical potentiometer |
//! | Input    | 15   | Stick push-down button (pull-up, idle HIGH) |
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime with two tasks:
//!
//! - **USB Task**: Manages the USB device stack
//! - **Shifter Task**: Waits for enumeration, then drives one
//!   [`ShifterBridge`] cycle per timer tick
//!
//! # Modules
//!
//! - [`input`]: ADC/GPIO input source ([`AdcShifterInput`])
//! - [`usb_output`]: USB HID output ([`UsbHidButtons`], [`ShifterReport`])
//! - [`usb_device`]: Device identity and bus event logging
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//! - **`sample-trace`**: Log the raw readings every cycle at debug level
//! - **`rp2040`** (default): Target chip; required, it provides the native USB device controller
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`shifter_core`] that the
//! binary needs, so consumers only need to depend on this crate.

#![no_std]

#[cfg(not(feature = "rp2040"))]
compile_error!("No chip with a native USB device controller selected - enable the `rp2040` feature");

#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features - they install conflicting panic handlers");

// Re-export core types for convenience
pub use shifter_core::{
    BridgeError, ButtonPolarity, ButtonSet, ButtonSink, Cycle, InputError, Mode, OutputError,
    Shifter, ShifterBridge, ShifterButton, ShifterConfig, ShifterInput, ShifterSample,
    POLL_PERIOD_MS,
};

pub mod input;
pub mod usb_device;
pub mod usb_output;

pub use input::AdcShifterInput;
pub use usb_device::{usb_config, ShifterDeviceHandler};
pub use usb_output::{configure_usb_hid, ShifterHidWriter, ShifterReport, UsbHidButtons};

/// Polarity of the shifter's push-down switch: idle HIGH under the pull-up,
/// LOW while pushed (reverse), gesture on release.
pub const SHIFTER_POLARITY: ButtonPolarity = ButtonPolarity::PULL_UP_SHIFTER;

/// State machine configuration used by the firmware.
pub const SHIFTER_CONFIG: ShifterConfig = ShifterConfig::DEFAULT.with_polarity(SHIFTER_POLARITY);
