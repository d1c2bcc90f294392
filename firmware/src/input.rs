//! ADC + GPIO input source for the shifter.
//!
//! # Pins
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | ADC0     | 26   | Horizontal potentiometer |
//! | ADC1     | 27   | Vertical potentiometer |
//! | Input    | 15   | Stick push-down button (pull-up) |

use embassy_rp::adc::{self, Adc, Async};
use embedded_hal::digital::InputPin;
use shifter_core::{AxisSample, ButtonLevel, InputError, ShifterInput, ShifterSample};

/// Convert ADC errors to [`InputError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan rule issues
/// (both `adc::Error` and `InputError` are defined in external crates).
#[inline]
fn adc_error_to_input_error(_e: adc::Error) -> InputError {
    InputError::Adc
}

/// Reads both potentiometers and the button once per call.
pub struct AdcShifterInput<'d, B> {
    adc: Adc<'d, Async>,
    horiz: adc::Channel<'d>,
    vert: adc::Channel<'d>,
    button: B,
}

impl<'d, B: InputPin> AdcShifterInput<'d, B> {
    /// Create a new input source.
    ///
    /// `button` must already be configured with its pull resistor.
    #[must_use]
    pub fn new(
        adc: Adc<'d, Async>,
        horiz: adc::Channel<'d>,
        vert: adc::Channel<'d>,
        button: B,
    ) -> Self {
        Self {
            adc,
            horiz,
            vert,
            button,
        }
    }

    async fn read_axes(&mut self) -> Result<AxisSample, InputError> {
        let horiz = self
            .adc
            .read(&mut self.horiz)
            .await
            .map_err(adc_error_to_input_error)?;
        let vert = self
            .adc
            .read(&mut self.vert)
            .await
            .map_err(adc_error_to_input_error)?;
        Ok(AxisSample::new(horiz, vert))
    }
}

impl<B: InputPin> ShifterInput for AdcShifterInput<'_, B> {
    async fn sample(&mut self) -> Result<ShifterSample, InputError> {
        let axes = self.read_axes().await?;
        let high = self.button.is_high().map_err(|_| InputError::Pin)?;

        Ok(ShifterSample {
            axes,
            button: ButtonLevel::from_high(high),
        })
    }
}
