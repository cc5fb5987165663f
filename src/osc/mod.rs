use crate::{fixed::Fixed, Block};

pub mod sinusoid;

pub trait Oscillator {
    /// Reconfigure the oscillator for the next block.
    ///
    /// - `amplitude` is the amplitude to reach by the end of the next block.
    /// - `frequency` is the block frequency: shifted right by [`crate::BUFBITS`] it gives the
    ///   phase advance per sample, in cycles. See [`crate::Config::block_frequency`].
    fn set(&mut self, amplitude: Fixed, frequency: Fixed);

    /// Render one block of samples.
    ///
    /// The oscillator implementation should **add** its samples to the block, instead of
    /// overwriting them, in order to allow oscillators to be composable.
    fn iterate(&mut self, block: &mut Block);
}
