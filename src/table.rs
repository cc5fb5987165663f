//! The shared sine lookup table.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::Index;
use std::sync::OnceLock;

use crate::fixed::{Fixed, FRACBITS, FRACMASK};

/// Number of phase bits used to index the table.
pub const TABLE_BITS: u32 = 12;
pub const TABLE_SIZE: usize = 1 << TABLE_BITS;

// The index is taken from the top bits of the phase fraction.
const _: () = assert!(TABLE_BITS <= FRACBITS);

/// One full cycle of `sin`, sampled at `TABLE_SIZE` points. Immutable once built.
pub struct SineTable {
    entries: [Fixed; TABLE_SIZE],
}

impl SineTable {
    pub fn new() -> Self {
        log::trace!("building {TABLE_SIZE}-entry sine table");
        Self {
            entries: std::array::from_fn(|i| {
                Fixed::from_f64((TAU * i as f64 / TABLE_SIZE as f64).sin())
            }),
        }
    }

    /// Map a phase (in fractional cycles) to a table index. Only the fractional bits of the
    /// phase are looked at, so any 32-bit phase lands in `0..TABLE_SIZE`.
    pub fn index_for_phase(phase: Fixed) -> usize {
        let index = ((phase.to_bits() & FRACMASK) >> (FRACBITS - TABLE_BITS)) as usize;
        assert!(index < TABLE_SIZE, "table index {index} out of range");
        index
    }

    pub fn lookup(&self, phase: Fixed) -> Fixed {
        self.entries[Self::index_for_phase(phase)]
    }

    pub fn entries(&self) -> &[Fixed; TABLE_SIZE] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        TABLE_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for SineTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for SineTable {
    type Output = Fixed;

    fn index(&self, index: usize) -> &Fixed {
        &self.entries[index]
    }
}

impl fmt::Debug for SineTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SineTable")
            .field("len", &TABLE_SIZE)
            .finish_non_exhaustive()
    }
}

/// The process-wide table, built on first use.
pub fn sine_table() -> &'static SineTable {
    static TABLE: OnceLock<SineTable> = OnceLock::new();
    TABLE.get_or_init(SineTable::new)
}
