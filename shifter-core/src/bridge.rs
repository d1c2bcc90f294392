//! ShifterBridge: connects an input source, the state machine and a button sink.

use crate::active::Transition;
use crate::input::{InputError, ShifterInput};
use crate::output::{ButtonSink, OutputError};
use crate::shifter::{Shifter, Tick};
use crate::types::{ShifterButton, ShifterSample};

/// Runs one poll cycle at a time: sample, tick, emit.
///
/// The bridge does not own a clock or a timer. The caller passes the
/// current millisecond count to [`process_one`](Self::process_one) and
/// paces the calls.
///
/// # Error Handling
///
/// On input errors the bridge releases the held button to prevent a stale
/// gear from persisting. On output errors the state machine's held button
/// is reset to the last one the sink accepted, so the next cycle re-sends
/// whatever did not get through.
pub struct ShifterBridge<I, O> {
    input: I,
    output: O,
    shifter: Shifter,
}

/// What one cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cycle {
    pub sample: ShifterSample,
    pub tick: Tick,
}

impl<I: ShifterInput, O: ButtonSink> ShifterBridge<I, O> {
    /// Create a new bridge from an input source, an output sink and a
    /// state machine in its power-on state.
    pub fn new(input: I, output: O, shifter: Shifter) -> Self {
        Self {
            input,
            output,
            shifter,
        }
    }

    /// Process a single poll cycle.
    ///
    /// Returns the sample and the tick outcome so the caller can log them.
    pub async fn process_one(&mut self, now_ms: u32) -> Result<Cycle, BridgeError> {
        let held = self.shifter.active();
        match self.input.sample().await {
            Ok(sample) => {
                let tick = self.shifter.tick(sample, now_ms);
                self.emit(held, tick.transition)
                    .await
                    .map_err(BridgeError::Output)?;
                Ok(Cycle { sample, tick })
            }
            Err(e) => {
                let transition = self.shifter.release_all();
                let _ = self.emit(held, transition).await;
                Err(BridgeError::Input(e))
            }
        }
    }

    /// Send a transition to the sink, release before press.
    ///
    /// `held` is the button the sink held before this transition. If a write
    /// fails the state machine is pointed back at what the sink still holds.
    async fn emit(
        &mut self,
        held: Option<ShifterButton>,
        transition: Transition,
    ) -> Result<(), OutputError> {
        if let Some(button) = transition.release {
            if let Err(e) = self.output.release(button).await {
                self.shifter.resync_active(held);
                return Err(e);
            }
        }
        if let Some(button) = transition.press {
            if let Err(e) = self.output.press(button).await {
                // The release (if any) went through, so nothing is held.
                self.shifter.resync_active(None);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Get a reference to the state machine.
    pub fn shifter(&self) -> &Shifter {
        &self.shifter
    }

    /// Get a reference to the input source.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Get a mutable reference to the input source.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Get a reference to the output sink.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output sink.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Decompose the bridge into its parts.
    pub fn into_parts(self) -> (I, O, Shifter) {
        (self.input, self.output, self.shifter)
    }
}

/// Error type for bridge operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError {
    /// Error from the input source.
    Input(InputError),
    /// Error from the output sink.
    Output(OutputError),
}
