use super::Oscillator;
use crate::{
    fixed::Fixed,
    table::{sine_table, SineTable},
    Block, Error, BUFBITS, BUFSIZE,
};

/// A table-lookup sine oscillator.
///
/// Amplitude ramps linearly towards the target passed to [`Oscillator::set`] over one block.
/// Frequency does not ramp: the new phase step applies from the first sample of the next block.
#[derive(Debug, Clone)]
pub struct Sinusoid {
    table: &'static SineTable,
    amplitude: Fixed,
    /// Phase in cycles. Only the fractional bits are meaningful.
    phase: Fixed,
    amplitude_step: Fixed,
    phase_step: Fixed,
}

impl Sinusoid {
    /// A silent oscillator using the process-wide sine table.
    pub fn new() -> Self {
        Self::with_table(sine_table())
    }

    pub fn with_table(table: &'static SineTable) -> Self {
        Self {
            table,
            amplitude: Fixed::ZERO,
            phase: Fixed::ZERO,
            amplitude_step: Fixed::ZERO,
            phase_step: Fixed::ZERO,
        }
    }

    pub fn amplitude(&self) -> Fixed {
        self.amplitude
    }

    pub fn phase(&self) -> Fixed {
        self.phase
    }

    pub fn amplitude_step(&self) -> Fixed {
        self.amplitude_step
    }

    pub fn phase_step(&self) -> Fixed {
        self.phase_step
    }

    /// Render into a buffer whose length is only known at runtime.
    pub fn try_iterate(&mut self, buffer: &mut [Fixed]) -> Result<(), Error> {
        let found = buffer.len();
        let block: &mut Block = buffer.try_into().map_err(|_| Error::BlockSize {
            expected: BUFSIZE,
            found,
        })?;
        self.iterate(block);
        Ok(())
    }

    /// Like [`Sinusoid::try_iterate`], but a wrong buffer length is a fatal error.
    pub fn iterate_slice(&mut self, buffer: &mut [Fixed]) {
        if let Err(e) = self.try_iterate(buffer) {
            panic!("{e}");
        }
    }
}

impl Default for Sinusoid {
    fn default() -> Self {
        Self::new()
    }
}

impl Oscillator for Sinusoid {
    fn set(&mut self, amplitude: Fixed, frequency: Fixed) {
        self.amplitude_step = (amplitude - self.amplitude) >> BUFBITS;
        // Absolute, not a delta against the previous step: frequency changes are not smoothed.
        self.phase_step = frequency >> BUFBITS;
        log::debug!(
            "sinusoid set: amplitude {} -> {}, step {}, phase step {}",
            self.amplitude,
            amplitude,
            self.amplitude_step,
            self.phase_step
        );
    }

    fn iterate(&mut self, block: &mut Block) {
        let mut amplitude = self.amplitude;
        let mut phase = self.phase;
        for sample in block.iter_mut() {
            *sample += amplitude * self.table.lookup(phase);
            amplitude += self.amplitude_step;
            phase += self.phase_step;
        }
        self.amplitude = amplitude;
        self.phase = phase;
    }
}
