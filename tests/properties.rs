use happy_fixsynth::{
    fixed::FRACTION,
    table::{SineTable, TABLE_SIZE},
    Block, Fixed, Oscillator, Sinusoid, BUFBITS, BUFSIZE,
};
use proptest::prelude::*;

const ULP: f64 = 1.0 / FRACTION as f64;

// Addition agrees with float addition while the sum stays in range
proptest! {
    #[test]
    fn prop_add_matches_float(x in -16000.0f64..16000.0, y in -16000.0f64..16000.0) {
        let sum = Fixed::from_f64(x) + Fixed::from_f64(y);
        let diff = (sum.to_f64() - (x + y)).abs();
        prop_assert!(diff <= ULP + 1e-9, "{} + {} = {} (diff {})", x, y, sum, diff);
    }
}

// add and sub wrap modulo 2^32, bit for bit
proptest! {
    #[test]
    fn prop_add_sub_wrap(a in any::<u32>(), b in any::<u32>()) {
        let (fa, fb) = (Fixed::from_bits(a), Fixed::from_bits(b));
        prop_assert_eq!((fa + fb).to_bits() as u64, (a as u64 + b as u64) % (1 << 32));
        prop_assert_eq!((fa - fb).to_bits() as i64, (a as i64 - b as i64).rem_euclid(1 << 32));
        prop_assert_eq!(fa - fb, fa + -fb);
    }
}

// Multiplication matches float multiplication for all sign combinations
proptest! {
    #[test]
    fn prop_mul_signs(x in -100.0f64..100.0, y in -100.0f64..100.0) {
        let (fx, fy) = (Fixed::from_f64(x), Fixed::from_f64(y));
        let product = fx * fy;
        prop_assert_eq!(product, fy * fx);
        prop_assert_eq!(-fx * fy, -product);
        prop_assert_eq!(-fx * -fy, product);
        // inputs are rounded by up to half an ulp each, the product is truncated
        let expected = fx.to_f64() * fy.to_f64();
        prop_assert!((product.to_f64() - expected).abs() <= ULP);
    }
}

// Every possible phase maps to an index inside the table
proptest! {
    #[test]
    fn prop_table_index_bounded(phase in any::<u32>()) {
        let index = SineTable::index_for_phase(Fixed::from_bits(phase));
        prop_assert!(index < TABLE_SIZE);
        prop_assert_eq!(index, ((phase & 0xFFFF) >> 4) as usize);
    }
}

// The phase step after set() depends only on the new frequency
proptest! {
    #[test]
    fn prop_frequency_snaps(
        first in 0.0f64..512.0,
        second in 0.0f64..512.0,
        amp in 0.0f64..4.0,
    ) {
        let mut osc = Sinusoid::new();
        let mut block: Block = [Fixed::ZERO; BUFSIZE];
        osc.set(Fixed::from_f64(amp), Fixed::from_f64(first));
        osc.iterate(&mut block);

        let freq = Fixed::from_f64(second);
        osc.set(Fixed::from_f64(amp), freq);
        prop_assert_eq!(osc.phase_step(), freq >> BUFBITS);

        let start = osc.phase();
        osc.iterate(&mut block);
        prop_assert_eq!(osc.phase(), start + Fixed::from_bits((freq >> BUFBITS).to_bits().wrapping_mul(BUFSIZE as u32)));
    }
}

// One block reaches the target amplitude up to shift rounding, a second one stays there
proptest! {
    #[test]
    fn prop_amplitude_ramp(start in -8.0f64..8.0, target in -8.0f64..8.0) {
        let mut osc = Sinusoid::new();
        let mut block: Block = [Fixed::ZERO; BUFSIZE];
        osc.set(Fixed::from_f64(start), Fixed::ZERO);
        osc.iterate(&mut block);
        let before = osc.amplitude();

        let target = Fixed::from_f64(target);
        osc.set(target, Fixed::ZERO);
        osc.iterate(&mut block);
        let residual = (target - osc.amplitude()).to_bits();
        prop_assert!(residual < BUFSIZE as u32, "{:?} -> {:?}, left {}", before, target, residual);

        osc.set(target, Fixed::ZERO);
        prop_assert_eq!(osc.amplitude_step(), Fixed::ZERO);
        let settled = osc.amplitude();
        osc.iterate(&mut block);
        prop_assert_eq!(osc.amplitude(), settled);
    }
}
