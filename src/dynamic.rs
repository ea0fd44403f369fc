use std::cmp::Ordering;

use log::trace;
use smallvec::{SmallVec, smallvec};

use crate::decimal;
use crate::error::Error;
use crate::integer::Integer;
use crate::limb::Limb;

/// A canonical one-limb value stays inline; the vec only spills to the heap
/// once a value actually grows past 64 bits.
type LimbVec = SmallVec<[Limb; 1]>;

/// Unsigned integer whose limb count grows and shrinks with the value.
///
/// The limb sequence is kept canonical: no trailing (most significant) zero
/// limb, except the single zero limb representing zero. Every mutating
/// operation restores this form before returning, so equality and ordering
/// can start from the limb counts.
///
/// Arithmetic is still unsigned and wrapping in spirit: subtracting a larger
/// value wraps at the current width instead of going negative. Addition,
/// multiplication and left shift never truncate; they grow the sequence.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct DynUint {
	limbs: LimbVec,
}

impl DynUint {
	#[inline]
	pub fn zero() -> Self {
		Self { limbs: smallvec![Limb::ZERO] }
	}

	/// The native bit pattern is stored literally in a single limb; there is
	/// no sign extension (contrast with [`FixedUint`](crate::FixedUint)).
	#[inline]
	pub fn from_u64(value: u64) -> Self {
		Self { limbs: smallvec![Limb(value)] }
	}

	#[inline]
	pub fn limb_count(&self) -> usize {
		self.limbs.len()
	}

	/// Storage bits at the current canonical length.
	#[inline]
	pub fn bits(&self) -> usize {
		self.limbs.len() * Limb::BITS
	}

	#[inline]
	pub fn as_limbs(&self) -> &[Limb] {
		&self.limbs
	}

	pub fn is_zero(&self) -> bool {
		self.limbs.iter().all(|limb| limb.is_zero())
	}

	/// The lowest 64 bits.
	#[inline]
	pub fn tail(&self) -> u64 {
		self.limbs[0].0
	}

	#[inline]
	fn limb_at(&self, index: usize) -> Limb {
		self.limbs.get(index).copied().unwrap_or(Limb::ZERO)
	}

	/// Drops trailing zero limbs down to a minimum length of one.
	fn trim(&mut self) {
		let mut len = self.limbs.len();
		while len > 1 && self.limbs[len - 1].is_zero() {
			len -= 1;
		}
		if len < self.limbs.len() {
			trace!("trim: {} -> {} limbs", self.limbs.len(), len);
			self.limbs.truncate(len);
		}
	}

	pub fn add_assign(&mut self, other: &DynUint) {
		let max_len = self.limbs.len().max(other.limbs.len());
		self.limbs.resize(max_len, Limb::ZERO);

		let mut carry = false;
		for i in 0..max_len {
			(self.limbs[i], carry) = Limb::addc(self.limbs[i], other.limb_at(i), carry);
		}

		// a carry out of the top limb grows the value instead of wrapping
		if carry {
			self.limbs.push(Limb::ONE);
			trace!("add: grew to {} limbs", self.limbs.len());
		}

		self.trim();
	}

	/// Wraps at the current width when `other` is larger; never grows.
	pub fn sub_assign(&mut self, other: &DynUint) {
		let max_len = self.limbs.len().max(other.limbs.len());
		self.limbs.resize(max_len, Limb::ZERO);

		let mut borrow = false;
		for i in 0..max_len {
			(self.limbs[i], borrow) = Limb::subb(self.limbs[i], other.limb_at(i), borrow);
		}

		self.trim();
	}

	/// `0 - self` over the current length; wraparound negation, not a sign flip.
	pub fn wrapping_neg(&self) -> DynUint {
		let mut r: LimbVec = smallvec![Limb::ZERO; self.limbs.len()];
		let mut borrow = false;
		for i in 0..self.limbs.len() {
			(r[i], borrow) = Limb::subb(Limb::ZERO, self.limbs[i], borrow);
		}
		let mut r = DynUint { limbs: r };
		r.trim();
		r
	}

	pub fn not(&self) -> DynUint {
		let mut r: LimbVec = smallvec![Limb::ZERO; self.limbs.len()];
		for i in 0..self.limbs.len() {
			r[i] = !self.limbs[i];
		}
		let mut r = DynUint { limbs: r };
		r.trim();
		r
	}

	/// Schoolbook multiplication into a `len_a + len_b` buffer, which always
	/// holds the full product, then trimmed.
	pub fn mul(&self, other: &DynUint) -> DynUint {
		let len_a = self.limbs.len();
		let len_b = other.limbs.len();
		let mut r: LimbVec = smallvec![Limb::ZERO; len_a + len_b];

		for i in 0..len_a {
			let mut carry = Limb::ZERO;
			for j in 0..len_b {
				let [low, high] = Limb::mul(self.limbs[i], other.limbs[j], carry, r[i + j]);
				r[i + j] = low;
				carry = high;
			}
			// row carry lands one past the row; that slot is still untouched
			r[i + len_b] = carry;
		}

		let mut r = DynUint { limbs: r };
		r.trim();
		r
	}

	/// Restoring binary long division over `self.bits()` bit positions.
	///
	/// Returns:
	///     (quotient, remainder)
	///
	/// The quotient's storage is grown lazily as high bits are set. Fails
	/// when `divisor` is zero; `self` and `divisor` are untouched.
	pub fn div_rem(&self, divisor: &DynUint) -> Result<(DynUint, DynUint), Error> {
		if divisor.is_zero() {
			return Err(Error::new_division_by_zero("DynUint::div_rem"));
		}

		let mut quotient = DynUint::zero();
		let mut remainder = DynUint::zero();

		for bit in (0..self.bits()).rev() {
			let limb_index = bit / Limb::BITS;
			let bit_in_limb = bit % Limb::BITS;

			remainder.shl_assign(1);
			if self.limbs[limb_index].0 >> bit_in_limb & 1 != 0 {
				remainder.limbs[0].0 |= 1;
			}

			if remainder >= *divisor {
				remainder.sub_assign(divisor);
				if limb_index >= quotient.limbs.len() {
					quotient.limbs.resize(limb_index + 1, Limb::ZERO);
				}
				quotient.limbs[limb_index].0 |= 1 << bit_in_limb;
			}
		}

		quotient.trim();
		remainder.trim();
		Ok((quotient, remainder))
	}

	pub fn bitand_assign(&mut self, other: &DynUint) {
		// limbs past the shorter operand are zero on at least one side
		let min_len = self.limbs.len().min(other.limbs.len());
		self.limbs.truncate(min_len);
		for i in 0..min_len {
			self.limbs[i] = self.limbs[i] & other.limbs[i];
		}
		self.trim();
	}

	pub fn bitor_assign(&mut self, other: &DynUint) {
		let max_len = self.limbs.len().max(other.limbs.len());
		self.limbs.resize(max_len, Limb::ZERO);
		for i in 0..other.limbs.len() {
			self.limbs[i] = self.limbs[i] | other.limbs[i];
		}
		self.trim();
	}

	pub fn bitxor_assign(&mut self, other: &DynUint) {
		let max_len = self.limbs.len().max(other.limbs.len());
		self.limbs.resize(max_len, Limb::ZERO);
		for i in 0..other.limbs.len() {
			self.limbs[i] = self.limbs[i] ^ other.limbs[i];
		}
		self.trim();
	}

	/// Left shift never truncates: the result gets `shift / 64` new low limbs
	/// and one more on top exactly when the top source limb's shifted-out
	/// high bits are nonzero.
	pub fn shl_assign(&mut self, shift: usize) {
		if shift == 0 {
			return;
		}

		let limb_shift = shift / Limb::BITS;
		let bit_shift = shift % Limb::BITS;
		let old_len = self.limbs.len();

		let mut new_len = old_len + limb_shift;
		if bit_shift > 0 && (self.limbs[old_len - 1] >> (Limb::BITS - bit_shift)).is_not_zero() {
			new_len += 1;
		}

		let mut r: LimbVec = smallvec![Limb::ZERO; new_len];
		if bit_shift == 0 {
			for i in 0..old_len {
				r[i + limb_shift] = self.limbs[i];
			}
		} else {
			for i in limb_shift..new_len {
				let src = i - limb_shift;
				let low = if src < old_len { self.limbs[src] << bit_shift } else { Limb::ZERO };
				let high = if src > 0 {
					self.limbs[src - 1] >> (Limb::BITS - bit_shift)
				} else {
					Limb::ZERO
				};
				r[i] = low | high;
			}
		}

		if new_len > old_len {
			trace!("shl: grew {} -> {} limbs", old_len, new_len);
		}
		self.limbs = r;
		self.trim();
	}

	pub fn shr_assign(&mut self, shift: usize) {
		if shift == 0 {
			return;
		}

		let limb_shift = shift / Limb::BITS;
		let bit_shift = shift % Limb::BITS;
		let old_len = self.limbs.len();

		if limb_shift >= old_len {
			self.limbs = smallvec![Limb::ZERO];
			return;
		}

		let new_len = old_len - limb_shift;
		let mut r: LimbVec = smallvec![Limb::ZERO; new_len];
		if bit_shift == 0 {
			for i in 0..new_len {
				r[i] = self.limbs[i + limb_shift];
			}
		} else {
			for i in 0..new_len {
				let low = self.limbs[i + limb_shift] >> bit_shift;
				let high = if i + limb_shift + 1 < old_len {
					self.limbs[i + limb_shift + 1] << (Limb::BITS - bit_shift)
				} else {
					Limb::ZERO
				};
				r[i] = low | high;
			}
		}

		self.limbs = r;
		self.trim();
	}

	/// Adds one in place; a carry out of the top limb appends a new limb, so
	/// no trim is needed (a fresh top limb of 1 is never spurious).
	pub fn inc(&mut self) {
		for i in 0..self.limbs.len() {
			self.limbs[i] = self.limbs[i].wrapping_add(Limb::ONE);
			if self.limbs[i].is_not_zero() {
				return;
			}
		}
		self.limbs.push(Limb::ONE);
		trace!("inc: grew to {} limbs", self.limbs.len());
	}

	/// Subtracts one in place; decrementing across a `2**(64*k)` boundary
	/// shrinks the limb count, and decrementing zero wraps to all-ones at the
	/// current length.
	pub fn dec(&mut self) {
		for i in 0..self.limbs.len() {
			let old = self.limbs[i];
			self.limbs[i] = old.wrapping_sub(Limb::ONE);
			if old.is_not_zero() {
				break;
			}
		}
		self.trim();
	}
}

impl Default for DynUint {
	fn default() -> Self {
		Self::zero()
	}
}

impl Ord for DynUint {
	/// A shorter canonical sequence is always numerically smaller; only equal
	/// lengths are compared limb by limb, most significant first.
	fn cmp(&self, other: &Self) -> Ordering {
		match self.limbs.len().cmp(&other.limbs.len()) {
			Ordering::Equal => {},
			ord => return ord,
		}
		for i in (0..self.limbs.len()).rev() {
			match self.limbs[i].cmp(&other.limbs[i]) {
				Ordering::Equal => {},
				ord => return ord,
			}
		}
		Ordering::Equal
	}
}

impl PartialOrd for DynUint {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

macro_rules! impl_from_prim {
	($($t:ty),*) => {
		$(impl From<$t> for DynUint {
			#[inline]
			fn from(value: $t) -> Self {
				Self::from_u64(value as u64)
			}
		})*
	};
}

// signed inputs keep their literal 64-bit pattern; no sign extension
impl_from_prim!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! impl_binop {
	($op:ident, $fn:ident, $assign_op:ident, $assign_fn:ident, $method:ident) => {
		impl std::ops::$op for DynUint {
			type Output = Self;

			#[inline]
			fn $fn(mut self, rhs: Self) -> Self {
				self.$method(&rhs);
				self
			}
		}

		impl std::ops::$assign_op for DynUint {
			#[inline]
			fn $assign_fn(&mut self, rhs: Self) {
				self.$method(&rhs);
			}
		}
	};
}

impl_binop!(Add, add, AddAssign, add_assign, add_assign);
impl_binop!(Sub, sub, SubAssign, sub_assign, sub_assign);
impl_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, bitand_assign);
impl_binop!(BitOr, bitor, BitOrAssign, bitor_assign, bitor_assign);
impl_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor_assign);

impl std::ops::Mul for DynUint {
	type Output = Self;

	#[inline]
	fn mul(self, rhs: Self) -> Self {
		DynUint::mul(&self, &rhs)
	}
}

impl std::ops::MulAssign for DynUint {
	#[inline]
	fn mul_assign(&mut self, rhs: Self) {
		*self = DynUint::mul(self, &rhs);
	}
}

impl std::ops::Div for DynUint {
	type Output = Self;

	/// Panics when `rhs` is zero; [`DynUint::div_rem`] is the fallible form.
	fn div(self, rhs: Self) -> Self {
		match self.div_rem(&rhs) {
			Ok((quotient, _)) => quotient,
			Err(err) => panic!("{err}"),
		}
	}
}

impl std::ops::Rem for DynUint {
	type Output = Self;

	/// Panics when `rhs` is zero; [`DynUint::div_rem`] is the fallible form.
	fn rem(self, rhs: Self) -> Self {
		match self.div_rem(&rhs) {
			Ok((_, remainder)) => remainder,
			Err(err) => panic!("{err}"),
		}
	}
}

impl std::ops::DivAssign for DynUint {
	fn div_assign(&mut self, rhs: Self) {
		*self = self.clone() / rhs;
	}
}

impl std::ops::RemAssign for DynUint {
	fn rem_assign(&mut self, rhs: Self) {
		*self = self.clone() % rhs;
	}
}

impl std::ops::Not for DynUint {
	type Output = Self;

	#[inline]
	fn not(self) -> Self {
		DynUint::not(&self)
	}
}

impl std::ops::Neg for DynUint {
	type Output = Self;

	#[inline]
	fn neg(self) -> Self {
		self.wrapping_neg()
	}
}

impl std::ops::Shl<usize> for DynUint {
	type Output = Self;

	#[inline]
	fn shl(mut self, shift: usize) -> Self {
		self.shl_assign(shift);
		self
	}
}

impl std::ops::Shr<usize> for DynUint {
	type Output = Self;

	#[inline]
	fn shr(mut self, shift: usize) -> Self {
		self.shr_assign(shift);
		self
	}
}

impl std::ops::ShlAssign<usize> for DynUint {
	#[inline]
	fn shl_assign(&mut self, shift: usize) {
		DynUint::shl_assign(self, shift);
	}
}

impl std::ops::ShrAssign<usize> for DynUint {
	#[inline]
	fn shr_assign(&mut self, shift: usize) {
		DynUint::shr_assign(self, shift);
	}
}

impl Integer for DynUint {
	fn limb_count(&self) -> usize {
		DynUint::limb_count(self)
	}

	fn as_limbs(&self) -> &[Limb] {
		DynUint::as_limbs(self)
	}

	fn is_zero(&self) -> bool {
		DynUint::is_zero(self)
	}

	fn tail(&self) -> u64 {
		DynUint::tail(self)
	}

	fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error> {
		DynUint::div_rem(self, divisor)
	}

	fn inc(&mut self) {
		DynUint::inc(self)
	}

	fn dec(&mut self) {
		DynUint::dec(self)
	}
}

impl std::fmt::Display for DynUint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&decimal::to_decimal(self))
	}
}

impl std::str::FromStr for DynUint {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		decimal::from_decimal(s).ok_or(Error::new_parse_error("DynUint::from_str"))
	}
}
