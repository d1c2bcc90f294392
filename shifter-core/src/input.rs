//! Input source trait and error types.

use crate::types::ShifterSample;
use core::future::Future;

/// Error type for input operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Analog conversion failed.
    Adc,
    /// Digital pin could not be read.
    Pin,
}

/// Async trait for shifter input sources.
///
/// Abstracts the platform's analog and digital sampling so the state
/// machine can be driven from real pins or from recorded samples.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait ShifterInput {
    /// Take one reading of both axes and the button.
    fn sample(&mut self) -> impl Future<Output = Result<ShifterSample, InputError>>;
}
