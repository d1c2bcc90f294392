//! Button sink trait and error types.

use crate::types::ShifterButton;
use core::future::Future;

/// Error type for output operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// USB/communication I/O error.
    Io,
    /// Device not ready (e.g., USB not enumerated).
    NotReady,
}

/// Async trait for HID button sinks.
///
/// Calls arrive strictly in the order the state machine issues them. The
/// sink is responsible for reporting the cumulative pressed set to the host.
/// Pressing a pressed button or releasing a released one must be tolerated,
/// since a transition that failed part-way is sent again in full.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait ButtonSink {
    /// Assert `button` to the host.
    fn press(&mut self, button: ShifterButton) -> impl Future<Output = Result<(), OutputError>>;

    /// Deassert `button`.
    fn release(&mut self, button: ShifterButton)
        -> impl Future<Output = Result<(), OutputError>>;
}
