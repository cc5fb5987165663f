//! Q16.16 fixed-point numbers with wrapping arithmetic.
//!
//! A [`Fixed`] is a 32-bit word holding a two's-complement integer scaled by 2^16. Every
//! operation is performed modulo 2^32: overflow wraps exactly like two's-complement integer
//! overflow and never saturates. The phase accumulator of the oscillator relies on this to
//! repeat cycles without an explicit modulo.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Shr, Sub, SubAssign};

use crate::Error;

/// Number of fractional bits.
pub const FRACBITS: u32 = 16;
/// The scale factor, `1.0` in fixed point.
pub const FRACTION: u32 = 1 << FRACBITS;
/// Mask selecting the fractional bits of a word.
pub const FRACMASK: u32 = FRACTION - 1;

const SIGN: u32 = 1 << 31;
const WORD: f64 = 4_294_967_296.0;

/// A Q16.16 fixed-point value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fixed(u32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(FRACTION);

    /// Reinterpret a raw 32-bit word as a fixed-point value.
    pub const fn from_bits(bits: u32) -> Self {
        Fixed(bits)
    }

    /// The raw 32-bit word.
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Convert from a float: `round(x * 2^16) mod 2^32`, rounding half away from zero.
    ///
    /// # Panics
    ///
    /// Panics if `x` is NaN or infinite.
    pub fn from_f64(x: f64) -> Self {
        match Self::try_from_f64(x) {
            Ok(fixed) => fixed,
            Err(e) => panic!("{e}"),
        }
    }

    /// Like [`Fixed::from_f64`], but reports non-finite input as an error.
    pub fn try_from_f64(x: f64) -> Result<Self, Error> {
        if !x.is_finite() {
            return Err(Error::NotFinite(x));
        }
        // `rem_euclid` is exact on integral floats, so large inputs alias the same way an
        // integer truncation to 32 bits would.
        let wrapped = (x * FRACTION as f64).round().rem_euclid(WORD);
        Ok(Fixed(wrapped as u32))
    }

    /// The signed real value this word represents.
    pub fn to_f64(self) -> f64 {
        self.0 as i32 as f64 / FRACTION as f64
    }

    pub const fn is_negative(self) -> bool {
        self.0 & SIGN != 0
    }

    /// Split into a sign (`true` when negative) and an unsigned magnitude.
    ///
    /// The magnitude of `i32::MIN` is 2^31, which is why it is returned widened.
    fn parts(self) -> (bool, u64) {
        if self.is_negative() {
            (true, (1u64 << 32) - self.0 as u64)
        } else {
            (false, self.0 as u64)
        }
    }

    /// Signed multiply, returning `None` when the rescaled magnitude product does not fit in
    /// 32 bits.
    pub fn checked_mul(self, rhs: Fixed) -> Option<Fixed> {
        let (neg1, mag1) = self.parts();
        let (neg2, mag2) = rhs.parts();
        // Both magnitudes are at most 2^32, so the product can't overflow 64 bits.
        let product = (mag1 * mag2) >> FRACBITS;
        if product >= 1 << 32 {
            return None;
        }
        let product = product as u32;
        if neg1 == neg2 {
            Some(Fixed(product))
        } else {
            Some(Fixed(product.wrapping_neg()))
        }
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Fixed) {
        *self = *self + rhs;
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Fixed) {
        *self = *self - rhs;
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        Fixed(self.0.wrapping_neg())
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    /// # Panics
    ///
    /// Panics if the magnitude product does not fit in 32 bits after rescaling, which means the
    /// operands are outside the supported range.
    fn mul(self, rhs: Fixed) -> Fixed {
        match self.checked_mul(rhs) {
            Some(product) => product,
            None => panic!("fixed-point multiply overflow: {self:?} * {rhs:?}"),
        }
    }
}

/// Arithmetic shift of the signed value; rounds toward negative infinity.
impl Shr<u32> for Fixed {
    type Output = Fixed;

    fn shr(self, rhs: u32) -> Fixed {
        Fixed(((self.0 as i32) >> rhs) as u32)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, magnitude) = self.parts();
        let sign = if negative { "-" } else { "" };
        // `{:?}` keeps the trailing `.0` on integral values
        write!(f, "{sign}{:?}", magnitude as f64 / FRACTION as f64)
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({:#010x} = {self})", self.0)
    }
}
