use std::cmp::Ordering;

use crate::decimal;
use crate::error::Error;
use crate::integer::Integer;
use crate::limb::Limb;

/// Unsigned integer with a limb count fixed at compile time.
///
/// The value is `LIMBS * 64` bits wide and every operation wraps modulo
/// `2**BITS`; a carry or borrow out of the top limb is discarded. `LIMBS`
/// must be a power of two and at least 2 (64 bits and below are what the
/// native types are for).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct FixedUint<const LIMBS: usize> {
	limbs: [Limb; LIMBS],
}

pub type Uint128 = FixedUint<2>;
pub type Uint256 = FixedUint<4>;
pub type Uint512 = FixedUint<8>;
pub type Uint1024 = FixedUint<16>;

impl<const LIMBS: usize> FixedUint<LIMBS> {
	pub const LIMBS: usize = LIMBS;
	pub const BITS: usize = LIMBS * Limb::BITS;

	const VALID: () = assert!(LIMBS >= 2 && LIMBS.is_power_of_two());

	#[inline]
	pub const fn zero() -> Self {
		let _ = Self::VALID;
		Self { limbs: [Limb::ZERO; LIMBS] }
	}

	#[inline]
	pub const fn max() -> Self {
		let _ = Self::VALID;
		Self { limbs: [Limb::MAX; LIMBS] }
	}

	#[inline]
	pub const fn from_u64(value: u64) -> Self {
		let mut r = Self::zero();
		r.limbs[0] = Limb(value);
		r
	}

	/// A negative input sign-extends: the low limb holds the two's-complement
	/// bit pattern and every remaining limb is all-ones.
	#[inline]
	pub const fn from_i64(value: i64) -> Self {
		let mut r = Self::zero();
		r.limbs[0] = Limb(value as u64);
		if value < 0 {
			let mut i = 1;
			while i < LIMBS {
				r.limbs[i] = Limb::MAX;
				i += 1;
			}
		}
		r
	}

	#[inline]
	pub const fn limb_count(&self) -> usize {
		LIMBS
	}

	#[inline]
	pub const fn bits(&self) -> usize {
		Self::BITS
	}

	#[inline]
	pub const fn as_limbs(&self) -> &[Limb] {
		&self.limbs
	}

	pub const fn is_zero(&self) -> bool {
		let mut i = 0;
		while i < LIMBS {
			if self.limbs[i].is_not_zero() {
				return false;
			}
			i += 1;
		}
		true
	}

	/// The lowest 64 bits.
	#[inline]
	pub const fn tail(&self) -> u64 {
		self.limbs[0].0
	}

	#[inline]
	fn bit(&self, index: usize) -> bool {
		self.limbs[index / Limb::BITS].0 >> (index % Limb::BITS) & 1 != 0
	}

	#[inline]
	fn set_bit(&mut self, index: usize) {
		self.limbs[index / Limb::BITS].0 |= 1 << (index % Limb::BITS);
	}

	pub fn wrapping_add(self, other: Self) -> Self {
		let mut r = Self::zero();
		let mut carry = false;
		for i in 0..LIMBS {
			(r.limbs[i], carry) = Limb::addc(self.limbs[i], other.limbs[i], carry);
		}
		// carry out of the top limb is discarded; that is the modulo contract
		r
	}

	pub fn wrapping_sub(self, other: Self) -> Self {
		let mut r = Self::zero();
		let mut borrow = false;
		for i in 0..LIMBS {
			(r.limbs[i], borrow) = Limb::subb(self.limbs[i], other.limbs[i], borrow);
		}
		r
	}

	/// Two's-complement negation, `0 - self`.
	pub fn wrapping_neg(self) -> Self {
		Self::zero().wrapping_sub(self)
	}

	/// Schoolbook multiplication truncated to `LIMBS` limbs. Cells with
	/// `i + j >= LIMBS` would land past the top limb and are never computed.
	pub fn wrapping_mul(self, other: Self) -> Self {
		let mut r = Self::zero();
		for i in 0..LIMBS {
			let mut carry = Limb::ZERO;
			for j in 0..LIMBS - i {
				let [low, high] = Limb::mul(self.limbs[i], other.limbs[j], carry, r.limbs[i + j]);
				r.limbs[i + j] = low;
				carry = high;
			}
		}
		r
	}

	/// Restoring binary long division, one bit per step from bit `BITS - 1`
	/// down to 0.
	///
	/// Returns:
	///     (quotient, remainder)
	///
	/// Fails when `divisor` is zero; `self` and `divisor` are untouched.
	pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error> {
		if divisor.is_zero() {
			return Err(Error::new_division_by_zero("FixedUint::div_rem"));
		}

		let mut quotient = Self::zero();
		let mut remainder = Self::zero();

		for bit in (0..Self::BITS).rev() {
			remainder = remainder.shl(1);
			if self.bit(bit) {
				remainder.limbs[0].0 |= 1;
			}
			if remainder >= *divisor {
				remainder = remainder.wrapping_sub(*divisor);
				quotient.set_bit(bit);
			}
		}

		Ok((quotient, remainder))
	}

	pub fn not(self) -> Self {
		let mut r = Self::zero();
		for i in 0..LIMBS {
			r.limbs[i] = !self.limbs[i];
		}
		r
	}

	pub fn bitand(self, other: Self) -> Self {
		let mut r = Self::zero();
		for i in 0..LIMBS {
			r.limbs[i] = self.limbs[i] & other.limbs[i];
		}
		r
	}

	pub fn bitor(self, other: Self) -> Self {
		let mut r = Self::zero();
		for i in 0..LIMBS {
			r.limbs[i] = self.limbs[i] | other.limbs[i];
		}
		r
	}

	pub fn bitxor(self, other: Self) -> Self {
		let mut r = Self::zero();
		for i in 0..LIMBS {
			r.limbs[i] = self.limbs[i] ^ other.limbs[i];
		}
		r
	}

	/// Logical left shift. A shift of `BITS` or more yields zero.
	pub fn shl(self, shift: usize) -> Self {
		let mut r = Self::zero();
		if shift >= Self::BITS {
			return r;
		}

		let limb_shift = shift / Limb::BITS;
		let bit_shift = shift % Limb::BITS;

		if bit_shift == 0 {
			for i in limb_shift..LIMBS {
				r.limbs[i] = self.limbs[i - limb_shift];
			}
		} else {
			// Each destination limb merges the two adjacent source limbs the
			// shifted bits straddle.
			for i in limb_shift..LIMBS {
				let low = self.limbs[i - limb_shift] << bit_shift;
				let high = if i > limb_shift {
					self.limbs[i - limb_shift - 1] >> (Limb::BITS - bit_shift)
				} else {
					Limb::ZERO
				};
				r.limbs[i] = low | high;
			}
		}
		r
	}

	/// Logical right shift. A shift of `BITS` or more yields zero.
	pub fn shr(self, shift: usize) -> Self {
		let mut r = Self::zero();
		if shift >= Self::BITS {
			return r;
		}

		let limb_shift = shift / Limb::BITS;
		let bit_shift = shift % Limb::BITS;

		if bit_shift == 0 {
			for i in 0..LIMBS - limb_shift {
				r.limbs[i] = self.limbs[i + limb_shift];
			}
		} else {
			for i in 0..LIMBS - limb_shift {
				let low = self.limbs[i + limb_shift] >> bit_shift;
				let high = if i + limb_shift + 1 < LIMBS {
					self.limbs[i + limb_shift + 1] << (Limb::BITS - bit_shift)
				} else {
					Limb::ZERO
				};
				r.limbs[i] = low | high;
			}
		}
		r
	}

	/// Adds one in place, rippling until a limb does not wrap.
	pub fn inc(&mut self) {
		for i in 0..LIMBS {
			self.limbs[i] = self.limbs[i].wrapping_add(Limb::ONE);
			if self.limbs[i].is_not_zero() {
				break;
			}
		}
	}

	/// Subtracts one in place, rippling until a limb does not wrap.
	pub fn dec(&mut self) {
		for i in 0..LIMBS {
			let old = self.limbs[i];
			self.limbs[i] = old.wrapping_sub(Limb::ONE);
			if old.is_not_zero() {
				break;
			}
		}
	}
}

impl<const LIMBS: usize> Default for FixedUint<LIMBS> {
	fn default() -> Self {
		Self::zero()
	}
}

impl<const LIMBS: usize> Ord for FixedUint<LIMBS> {
	fn cmp(&self, other: &Self) -> Ordering {
		for i in (0..LIMBS).rev() {
			match self.limbs[i].cmp(&other.limbs[i]) {
				Ordering::Equal => {},
				ord => return ord,
			}
		}
		Ordering::Equal
	}
}

impl<const LIMBS: usize> PartialOrd for FixedUint<LIMBS> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

macro_rules! impl_from_unsigned {
	($($t:ty),*) => {
		$(impl<const LIMBS: usize> From<$t> for FixedUint<LIMBS> {
			#[inline]
			fn from(value: $t) -> Self {
				Self::from_u64(value as u64)
			}
		})*
	};
}

macro_rules! impl_from_signed {
	($($t:ty),*) => {
		$(impl<const LIMBS: usize> From<$t> for FixedUint<LIMBS> {
			#[inline]
			fn from(value: $t) -> Self {
				Self::from_i64(value as i64)
			}
		})*
	};
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

macro_rules! impl_binop {
	($op:ident, $fn:ident, $assign_op:ident, $assign_fn:ident, $method:ident) => {
		impl<const LIMBS: usize> std::ops::$op for FixedUint<LIMBS> {
			type Output = Self;

			#[inline]
			fn $fn(self, rhs: Self) -> Self {
				self.$method(rhs)
			}
		}

		impl<const LIMBS: usize> std::ops::$assign_op for FixedUint<LIMBS> {
			#[inline]
			fn $assign_fn(&mut self, rhs: Self) {
				*self = self.$method(rhs);
			}
		}
	};
}

impl_binop!(Add, add, AddAssign, add_assign, wrapping_add);
impl_binop!(Sub, sub, SubAssign, sub_assign, wrapping_sub);
impl_binop!(Mul, mul, MulAssign, mul_assign, wrapping_mul);
impl_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, bitand);
impl_binop!(BitOr, bitor, BitOrAssign, bitor_assign, bitor);
impl_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor);

impl<const LIMBS: usize> std::ops::Div for FixedUint<LIMBS> {
	type Output = Self;

	/// Panics when `rhs` is zero; [`FixedUint::div_rem`] is the fallible form.
	fn div(self, rhs: Self) -> Self {
		match self.div_rem(&rhs) {
			Ok((quotient, _)) => quotient,
			Err(err) => panic!("{err}"),
		}
	}
}

impl<const LIMBS: usize> std::ops::Rem for FixedUint<LIMBS> {
	type Output = Self;

	/// Panics when `rhs` is zero; [`FixedUint::div_rem`] is the fallible form.
	fn rem(self, rhs: Self) -> Self {
		match self.div_rem(&rhs) {
			Ok((_, remainder)) => remainder,
			Err(err) => panic!("{err}"),
		}
	}
}

impl<const LIMBS: usize> std::ops::DivAssign for FixedUint<LIMBS> {
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}

impl<const LIMBS: usize> std::ops::RemAssign for FixedUint<LIMBS> {
	fn rem_assign(&mut self, rhs: Self) {
		*self = *self % rhs;
	}
}

impl<const LIMBS: usize> std::ops::Not for FixedUint<LIMBS> {
	type Output = Self;

	#[inline]
	fn not(self) -> Self {
		FixedUint::not(self)
	}
}

impl<const LIMBS: usize> std::ops::Neg for FixedUint<LIMBS> {
	type Output = Self;

	#[inline]
	fn neg(self) -> Self {
		self.wrapping_neg()
	}
}

impl<const LIMBS: usize> std::ops::Shl<usize> for FixedUint<LIMBS> {
	type Output = Self;

	#[inline]
	fn shl(self, shift: usize) -> Self {
		FixedUint::shl(self, shift)
	}
}

impl<const LIMBS: usize> std::ops::Shr<usize> for FixedUint<LIMBS> {
	type Output = Self;

	#[inline]
	fn shr(self, shift: usize) -> Self {
		FixedUint::shr(self, shift)
	}
}

impl<const LIMBS: usize> std::ops::ShlAssign<usize> for FixedUint<LIMBS> {
	#[inline]
	fn shl_assign(&mut self, shift: usize) {
		*self = FixedUint::shl(*self, shift);
	}
}

impl<const LIMBS: usize> std::ops::ShrAssign<usize> for FixedUint<LIMBS> {
	#[inline]
	fn shr_assign(&mut self, shift: usize) {
		*self = FixedUint::shr(*self, shift);
	}
}

impl<const LIMBS: usize> Integer for FixedUint<LIMBS> {
	fn limb_count(&self) -> usize {
		LIMBS
	}

	fn as_limbs(&self) -> &[Limb] {
		&self.limbs
	}

	fn is_zero(&self) -> bool {
		FixedUint::is_zero(self)
	}

	fn tail(&self) -> u64 {
		FixedUint::tail(self)
	}

	fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error> {
		FixedUint::div_rem(self, divisor)
	}

	fn inc(&mut self) {
		FixedUint::inc(self)
	}

	fn dec(&mut self) {
		FixedUint::dec(self)
	}
}

impl<const LIMBS: usize> std::fmt::Display for FixedUint<LIMBS> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&decimal::to_decimal(self))
	}
}

impl<const LIMBS: usize> std::str::FromStr for FixedUint<LIMBS> {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		decimal::from_decimal(s).ok_or(Error::new_parse_error("FixedUint::from_str"))
	}
}
