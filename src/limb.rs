pub type Value = u64;

/// One 64-bit word of a multi-word integer. Index 0 of a limb sequence is the
/// least significant limb.
#[derive(Clone, Copy, Default, PartialEq, Debug, Eq, Ord, PartialOrd, Hash)]
pub struct Limb(pub Value);

impl Limb {
	pub const BITS: usize = Value::BITS as usize;

	pub const ZERO: Limb = Self(0);
	pub const ONE: Limb = Self(1);
	pub const MAX: Limb = Self(Value::MAX);

	const HALF_BITS: usize = Self::BITS / 2;
	const LO_MASK: Value = Value::MAX >> Self::HALF_BITS;

	#[inline]
	pub const fn is_zero(self) -> bool {
		self.0 == 0
	}

	#[inline]
	pub const fn is_not_zero(self) -> bool {
		self.0 != 0
	}

	#[inline]
	pub const fn wrapping_add(self, other: Limb) -> Limb {
		Limb(self.0.wrapping_add(other.0))
	}

	#[inline]
	pub const fn wrapping_sub(self, other: Limb) -> Limb {
		Limb(self.0.wrapping_sub(other.0))
	}

	/// Returns:
	///     (value, carry)
	/// Where:
	///     value = (a + b + carry) % 2**BITS
	///     carry = (a + b + carry) > MAX
	#[inline]
	pub const fn addc(a: Limb, b: Limb, carry: bool) -> (Limb, bool) {
		let (sum, overflow1) = a.0.overflowing_add(b.0);
		let (sum, overflow2) = sum.overflowing_add(carry as Value);
		(Limb(sum), overflow1 | overflow2)
	}

	/// Returns:
	///     (value, borrow)
	/// Where:
	///     value = (a - b - borrow) % 2**BITS
	///     borrow = (a - b - borrow) < 0
	#[inline]
	pub const fn subb(a: Limb, b: Limb, borrow: bool) -> (Limb, bool) {
		let (diff, borrow1) = a.0.overflowing_sub(b.0);
		let (diff, borrow2) = diff.overflowing_sub(borrow as Value);
		(Limb(diff), borrow1 | borrow2)
	}

	/// Full product of two limbs, computed from 32-bit halves.
	///
	/// Returns:
	///     (low, high)
	/// Where:
	///     low = (a * b) % 2**BITS
	///     high = (a * b) / 2**BITS
	///
	/// The mid-term sum `p1 + (p0 >> 32)` cannot overflow, but adding `p2`
	/// can; that carry belongs to bit 96 and is added to the high word
	/// shifted left by 32.
	#[inline]
	pub const fn mul_wide(a: Limb, b: Limb) -> (Limb, Limb) {
		let a_lo = a.0 & Self::LO_MASK;
		let a_hi = a.0 >> Self::HALF_BITS;
		let b_lo = b.0 & Self::LO_MASK;
		let b_hi = b.0 >> Self::HALF_BITS;

		let p0 = a_lo * b_lo;
		let p1 = a_lo * b_hi;
		let p2 = a_hi * b_lo;
		let p3 = a_hi * b_hi;

		let mid = p1 + (p0 >> Self::HALF_BITS);
		let (mid, carry) = mid.overflowing_add(p2);

		let low = (mid << Self::HALF_BITS) | (p0 & Self::LO_MASK);
		let high = p3 + (mid >> Self::HALF_BITS) + ((carry as Value) << Self::HALF_BITS);

		(Limb(low), Limb(high))
	}

	/// One schoolbook multiplication cell.
	///
	/// Returns:
	///     [low, high]
	/// Where:
	///     big_value = a * b + c + d
	///     low = big_value % 2**BITS
	///     high = big_value / 2**BITS
	///
	/// `a * b + c + d <= 2**(2*BITS) - 1`, so the carries out of the low
	/// word cannot overflow the high word.
	#[inline]
	pub const fn mul(a: Limb, b: Limb, c: Limb, d: Limb) -> [Limb; 2] {
		let (low, high) = Self::mul_wide(a, b);
		let (low, carry1) = low.0.overflowing_add(c.0);
		let (low, carry2) = low.overflowing_add(d.0);
		[Limb(low), Limb(high.0 + carry1 as Value + carry2 as Value)]
	}
}

impl std::ops::Not for Limb {
	type Output = Self;

	#[inline]
	fn not(self) -> Self {
		Self(!self.0)
	}
}

impl std::ops::BitAnd for Limb {
	type Output = Self;

	#[inline]
	fn bitand(self, rhs: Self) -> Self {
		Self(self.0 & rhs.0)
	}
}

impl std::ops::BitOr for Limb {
	type Output = Self;

	#[inline]
	fn bitor(self, rhs: Self) -> Self {
		Self(self.0 | rhs.0)
	}
}

impl std::ops::BitXor for Limb {
	type Output = Self;

	#[inline]
	fn bitxor(self, rhs: Self) -> Self {
		Self(self.0 ^ rhs.0)
	}
}

impl std::ops::Shl<usize> for Limb {
	type Output = Self;

	#[inline]
	fn shl(self, rhs: usize) -> Self {
		Self(self.0 << rhs)
	}
}

impl std::ops::Shr<usize> for Limb {
	type Output = Self;

	#[inline]
	fn shr(self, rhs: usize) -> Self {
		Self(self.0 >> rhs)
	}
}
