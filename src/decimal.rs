//! Decimal string conversion, written only against the [`Integer`] contract
//! so one implementation serves both width variants. Base 10 only.

use smallvec::SmallVec;

use crate::integer::Integer;

/// Digits are produced least significant first; 64 inline slots cover a
/// 128-bit value (39 digits) without spilling to the heap.
type DigitBuf = SmallVec<[u8; 64]>;

/// Converts a value to its base-10 representation.
///
/// Repeatedly divides by ten and takes the remainder's low limb as the next
/// digit; one division per digit, deliberately simple over fast.
pub fn to_decimal<T: Integer>(value: &T) -> String {
	if value.is_zero() {
		return String::from("0");
	}

	let ten = T::from(10);
	let mut digits = DigitBuf::new();
	let mut rest = value.clone();

	while !rest.is_zero() {
		// remainder of a division by ten fits in the low limb
		let (quotient, remainder) = rest.div_rem(&ten).expect("ten is not zero");
		digits.push(b'0' + remainder.tail() as u8);
		rest = quotient;
	}

	let mut out = String::with_capacity(digits.len());
	for digit in digits.iter().rev() {
		out.push(*digit as char);
	}
	out
}

/// Parses a base-10 string, folding `result = result * 10 + digit` left to
/// right. Leading zeros are accepted; no sign or radix prefix is recognized.
///
/// Returns `None` on an empty input or any non-decimal-digit character.
pub fn from_decimal<T: Integer>(text: &str) -> Option<T> {
	if text.is_empty() {
		return None;
	}

	let ten = T::from(10);
	let mut result = T::from(0);

	for byte in text.bytes() {
		if !byte.is_ascii_digit() {
			return None;
		}
		result = result * ten.clone() + T::from((byte - b'0') as u64);
	}

	Some(result)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dynamic::DynUint;
	use crate::fixed::{Uint128, Uint256};

	fn check_zero<T: Integer + std::fmt::Debug>() {
		assert_eq!(to_decimal(&T::from(0)), "0");
		assert_eq!(from_decimal::<T>("0"), Some(T::from(0)));
		assert_eq!(from_decimal::<T>("000"), Some(T::from(0)));
	}

	fn check_small_values<T: Integer + std::fmt::Debug>() {
		for v in [1u64, 9, 10, 42, 12345, u64::MAX] {
			assert_eq!(to_decimal(&T::from(v)), v.to_string());
			assert_eq!(from_decimal::<T>(&v.to_string()), Some(T::from(v)));
		}
	}

	fn check_rejects<T: Integer + std::fmt::Debug>() {
		assert_eq!(from_decimal::<T>(""), None);
		assert_eq!(from_decimal::<T>("12a3"), None);
		assert_eq!(from_decimal::<T>("-5"), None);
		assert_eq!(from_decimal::<T>("+5"), None);
		assert_eq!(from_decimal::<T>(" 5"), None);
		assert_eq!(from_decimal::<T>("0x10"), None);
	}

	#[test]
	fn test_zero_both_variants() {
		check_zero::<Uint128>();
		check_zero::<DynUint>();
	}

	#[test]
	fn test_small_values_both_variants() {
		check_small_values::<Uint128>();
		check_small_values::<DynUint>();
	}

	#[test]
	fn test_rejects_both_variants() {
		check_rejects::<Uint128>();
		check_rejects::<DynUint>();
	}

	#[test]
	fn test_uint64_max_boundary() {
		// 2^128 - 1 across two limbs
		let v = (Uint256::from(1u64) << 128) - Uint256::from(1u64);
		assert_eq!(to_decimal(&v), "340282366920938463463374607431768211455");
	}

	#[test]
	fn test_leading_zeros() {
		assert_eq!(from_decimal::<DynUint>("00042"), from_decimal::<DynUint>("42"));
		assert_eq!(
			from_decimal::<Uint128>("000340282366920938463463374607431768211455"),
			Some(Uint128::max())
		);
	}

	#[test]
	fn test_round_trip() {
		let fixed_samples = [
			Uint256::from(0u64),
			Uint256::from(7u64),
			Uint256::from(u64::MAX),
			Uint256::from(1u64) << 200,
			Uint256::max(),
		];
		for v in fixed_samples {
			assert_eq!(from_decimal::<Uint256>(&to_decimal(&v)), Some(v));
		}

		let dyn_samples = [
			DynUint::zero(),
			DynUint::from(10u64),
			DynUint::from(1u64) << 300,
			(DynUint::from(u64::MAX) << 128) + DynUint::from(99u64),
		];
		for v in dyn_samples {
			assert_eq!(from_decimal::<DynUint>(&to_decimal(&v)), Some(v.clone()));
		}
	}

	#[test]
	fn test_large_multi_limb_parse() {
		// 10^40 needs 3 limbs
		let text = "10000000000000000000000000000000000000000";
		let parsed: DynUint = from_decimal(text).unwrap();
		assert_eq!(parsed.limb_count(), 3);
		assert_eq!(to_decimal(&parsed), text);
	}

	#[test]
	fn test_digit_buffer_spill() {
		// 78 digits, past the inline capacity of the digit buffer
		let text = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
		assert_eq!(to_decimal(&Uint256::max()), text);
		assert_eq!(from_decimal::<Uint256>(text), Some(Uint256::max()));

		// one digit per decade around the inline boundary
		for exp in [63usize, 64, 65] {
			let v = from_decimal::<DynUint>(&format!("1{}", "0".repeat(exp))).unwrap();
			assert_eq!(to_decimal(&v).len(), exp + 1);
		}
	}

	#[test]
	fn test_display_and_from_str() {
		let v: Uint128 = "123456789012345678901234567890".parse().unwrap();
		assert_eq!(v.to_string(), "123456789012345678901234567890");
		assert!("".parse::<Uint128>().is_err());
		assert!("12!".parse::<DynUint>().is_err());

		let d: DynUint = "99999999999999999999".parse().unwrap();
		assert_eq!(format!("{d}"), "99999999999999999999");
	}

	#[test]
	fn test_fixed_parse_wraps_like_arithmetic() {
		// parsing 2^128 into a 128-bit value wraps to zero, same as the
		// arithmetic that computes it
		let text = "340282366920938463463374607431768211456";
		assert_eq!(from_decimal::<Uint128>(text), Some(Uint128::zero()));
	}
}
