//! Numeric metadata facade for the fixed-width integers.
//!
//! Everything here is derived from the bit width and the zero/bitwise-not
//! operations of the core; no arithmetic lives in this module. The dynamic
//! variant has no maximum, so it gets no impl.

use crate::fixed::FixedUint;

/// floor(log10(2) * 2**40)-style fixed-point constant; the ratio
/// 301_029_995_664 / 10**12 is just below log10(2), so the floor below never
/// overshoots for any realistic width.
const LOG10_2_NUM: u64 = 301_029_995_664;
const LOG10_2_DEN: u64 = 1_000_000_000_000;

/// Derived constants describing an unsigned, exact, integral, modulo-wrapping
/// binary integer type of a fixed width.
pub trait IntegerLimits: Sized {
	const IS_SIGNED: bool = false;
	const IS_INTEGER: bool = true;
	const IS_EXACT: bool = true;
	const IS_BOUNDED: bool = true;
	const IS_MODULO: bool = true;
	const RADIX: u32 = 2;

	/// Bit width of the type.
	const DIGITS: usize;

	/// Count of whole decimal digits representable at every value,
	/// `floor(DIGITS * log10(2))`.
	const DIGITS10: usize;

	fn min_value() -> Self;
	fn max_value() -> Self;
}

impl<const LIMBS: usize> IntegerLimits for FixedUint<LIMBS> {
	const DIGITS: usize = Self::BITS;
	const DIGITS10: usize = (Self::BITS as u64 * LOG10_2_NUM / LOG10_2_DEN) as usize;

	fn min_value() -> Self {
		Self::zero()
	}

	fn max_value() -> Self {
		!Self::zero()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fixed::{Uint128, Uint256, Uint512, Uint1024};

	#[test]
	fn test_digits() {
		assert_eq!(Uint128::DIGITS, 128);
		assert_eq!(Uint256::DIGITS, 256);
		assert_eq!(Uint512::DIGITS, 512);
		assert_eq!(Uint1024::DIGITS, 1024);
	}

	#[test]
	fn test_digits10() {
		// floor(Bits * log10(2))
		assert_eq!(Uint128::DIGITS10, 38);
		assert_eq!(Uint256::DIGITS10, 77);
		assert_eq!(Uint512::DIGITS10, 154);
		assert_eq!(Uint1024::DIGITS10, 308);
	}

	#[test]
	fn test_min_max() {
		assert_eq!(Uint128::min_value(), Uint128::zero());
		assert_eq!(Uint128::max_value(), Uint128::max());
		assert!(Uint128::min_value() < Uint128::max_value());

		// max + 1 wraps to min
		assert_eq!(
			Uint256::max_value() + Uint256::from(1u64),
			Uint256::min_value()
		);
	}

	#[test]
	fn test_flags() {
		assert!(!Uint128::IS_SIGNED);
		assert!(Uint128::IS_INTEGER);
		assert!(Uint128::IS_EXACT);
		assert!(Uint128::IS_MODULO);
		assert_eq!(Uint128::RADIX, 2);
	}

	#[test]
	fn test_max_matches_decimal_digit_count() {
		// 2^128 - 1 has DIGITS10 + 1 decimal digits
		assert_eq!(Uint128::max_value().to_string().len(), Uint128::DIGITS10 + 1);
	}
}
