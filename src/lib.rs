//! A fixed-point, table-lookup sine oscillator that renders audio one block at a time.
//!
//! All sample, amplitude and frequency values are Q16.16 [`Fixed`] words with wrapping
//! arithmetic. A [`Sinusoid`] is reconfigured once per block with [`Oscillator::set`] and
//! renders with [`Oscillator::iterate`], which adds its output to the caller's [`Block`] so
//! several sources can be mixed into the same buffer.
//!
//! ```
//! use happy_fixsynth::{Block, Config, Fixed, Oscillator, Sinusoid, BUFSIZE, note::Pitch};
//!
//! let cfg = Config::default();
//! let mut osc = Sinusoid::new();
//! let mut block: Block = [Fixed::ZERO; BUFSIZE];
//! osc.set(Fixed::ONE, cfg.block_frequency(Pitch::A.frequency()));
//! osc.iterate(&mut block);
//! assert_eq!(osc.amplitude(), Fixed::ONE);
//! ```

mod error;
pub mod fixed;
pub mod note;
pub mod osc;
pub mod table;

pub use error::Error;
pub use fixed::Fixed;
pub use osc::{sinusoid::Sinusoid, Oscillator};
pub use table::{sine_table, SineTable};

/// log2 of the block size.
pub const BUFBITS: u32 = 10;
/// The number of samples in a block.
pub const BUFSIZE: usize = 1 << BUFBITS;

/// One block of samples.
pub type Block = [Fixed; BUFSIZE];

pub const SAMPLE_RATE: f64 = 44_100.0;
pub const RETENTION_RATIO: usize = 1024;

pub struct Config {
    /// The sample rate of the audio stream, in Hz.
    pub sample_rate: f64,
    /// The number of samples folded into one retained (logged or downsampled) value by the host.
    pub retention_ratio: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            retention_ratio: RETENTION_RATIO,
        }
    }
}

impl Config {
    /// Time between samples, in seconds.
    pub fn dt(&self) -> f64 {
        1.0 / self.sample_rate
    }

    /// Retained values per second.
    pub fn retention_rate(&self) -> f64 {
        self.sample_rate / self.retention_ratio as f64
    }

    /// Seconds covered by one retained value.
    pub fn retention_period(&self) -> f64 {
        self.retention_ratio as f64 * self.dt()
    }

    /// Convert a frequency in Hz into the block frequency [`Oscillator::set`] expects, i.e.
    /// cycles per sample scaled up by [`BUFSIZE`].
    ///
    /// # Panics
    ///
    /// Panics if `hz` is not finite.
    pub fn block_frequency(&self, hz: f64) -> Fixed {
        Fixed::from_f64(hz / self.sample_rate * BUFSIZE as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing() {
        let cfg = Config::default();
        assert_eq!(cfg.retention_rate(), 44_100.0 / 1024.0);
        assert!((cfg.retention_period() - 1024.0 / 44_100.0).abs() < 1e-12);
        assert!((cfg.retention_period() * cfg.retention_rate() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_block_frequency() {
        let cfg = Config {
            sample_rate: 1024.0,
            ..Default::default()
        };
        // one cycle per second at 1024 samples per second is 1/1024 cycle per sample
        assert_eq!(cfg.block_frequency(1.0), Fixed::ONE);
        assert_eq!(cfg.block_frequency(1.0) >> BUFBITS, Fixed::from_bits(64));
    }
}
