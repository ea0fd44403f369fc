//! Wide wrapping unsigned integers over 64-bit limbs.
//!
//! Two variants share one operation contract, the [`Integer`] trait:
//!
//! - [`FixedUint`]: the limb count is a const generic parameter; arithmetic
//!   wraps modulo `2**BITS`. [`Uint128`], [`Uint256`], [`Uint512`] and
//!   [`Uint1024`] are the common widths.
//! - [`DynUint`]: the limb count follows the value; addition, multiplication
//!   and left shift grow the storage, and every operation trims trailing zero
//!   limbs back off.
//!
//! There is no signed type. "Negative" values are ordinary unsigned
//! wraparound patterns, i.e. two's complement without a sign bit; a negative
//! native integer converts into [`FixedUint`] by sign extension and into
//! [`DynUint`] as its literal 64-bit pattern.
//!
//! Decimal conversion ([`to_decimal`], [`from_decimal`], plus `Display` and
//! `FromStr` on both types) is written once against the [`Integer`] trait.
//! Division and modulo by zero fail with [`ErrorKind::DivisionByZero`]
//! through [`Integer::div_rem`]; the `/` and `%` operators panic like the
//! native integer ones. All other operations are total.

pub mod decimal;
pub mod dynamic;
pub mod error;
pub mod fixed;
pub mod integer;
pub mod limb;
pub mod limits;

pub use decimal::{from_decimal, to_decimal};
pub use dynamic::DynUint;
pub use error::{Error, ErrorKind};
pub use fixed::{FixedUint, Uint128, Uint256, Uint512, Uint1024};
pub use integer::Integer;
pub use limb::Limb;
pub use limits::IntegerLimits;

#[cfg(test)]
mod tests {
	use super::*;

	// the shared contract, exercised once per variant
	fn check_identities<T: Integer + std::fmt::Debug>() {
		let zero = T::from(0);
		let one = T::from(1);
		let a = T::from(0xDEAD_BEEF_u64);

		assert_eq!(a.clone() + zero.clone(), a);
		assert_eq!(a.clone() * one.clone(), a);
		assert_eq!(a.clone() * zero.clone(), zero);
		assert_eq!(a.clone() - a.clone(), zero);
		assert!(zero.is_zero());
		assert!(!a.is_zero());
		assert_eq!(a.tail(), 0xDEAD_BEEF);
	}

	fn check_div_rem_contract<T: Integer + std::fmt::Debug>() {
		let a = T::from(1) << 100;
		let b = T::from(97);
		let (q, r) = a.div_rem(&b).unwrap();
		assert_eq!(q * b.clone() + r.clone(), a);
		assert!(r < b);

		assert_eq!(
			a.div_rem(&T::from(0)).unwrap_err().kind,
			ErrorKind::DivisionByZero
		);
	}

	fn check_inc_dec_roundtrip<T: Integer + std::fmt::Debug>() {
		let mut v = T::from(u64::MAX);
		let before = v.clone();
		v.inc();
		assert!(v > before);
		v.dec();
		assert_eq!(v, before);
	}

	#[test]
	fn test_contract_fixed() {
		check_identities::<Uint128>();
		check_identities::<Uint1024>();
		check_div_rem_contract::<Uint256>();
		check_inc_dec_roundtrip::<Uint128>();
	}

	#[test]
	fn test_contract_dynamic() {
		check_identities::<DynUint>();
		check_div_rem_contract::<DynUint>();
		check_inc_dec_roundtrip::<DynUint>();
	}

	#[test]
	fn test_cross_variant_consistency() {
		// the same computation through both variants prints the same digits
		let f = (Uint256::from(3u64) << 130) + Uint256::from(12345u64);
		let d = (DynUint::from(3u64) << 130) + DynUint::from(12345u64);
		assert_eq!(f.to_string(), d.to_string());

		let (fq, fr) = f.div_rem(&Uint256::from(1_000_003u64)).unwrap();
		let (dq, dr) = d.div_rem(&DynUint::from(1_000_003u64)).unwrap();
		assert_eq!(fq.to_string(), dq.to_string());
		assert_eq!(fr.to_string(), dr.to_string());
	}
}
