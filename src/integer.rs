use std::ops::{
	Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
	Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::error::Error;
use crate::limb::Limb;

/// The operation set shared by [`FixedUint`](crate::FixedUint) and
/// [`DynUint`](crate::DynUint).
///
/// The two types have no common representation; they independently satisfy
/// this contract, and everything written against it (notably the decimal
/// codec in [`crate::decimal`]) works with either one.
///
/// All arithmetic is unsigned and wrapping. The only fallible operation is
/// [`div_rem`](Integer::div_rem); everything else is total.
pub trait Integer:
	Sized
	+ Clone
	+ Default
	+ Eq
	+ Ord
	+ From<u64>
	+ Add<Output = Self>
	+ AddAssign
	+ Sub<Output = Self>
	+ SubAssign
	+ Mul<Output = Self>
	+ MulAssign
	+ Div<Output = Self>
	+ DivAssign
	+ Rem<Output = Self>
	+ RemAssign
	+ Not<Output = Self>
	+ BitAnd<Output = Self>
	+ BitAndAssign
	+ BitOr<Output = Self>
	+ BitOrAssign
	+ BitXor<Output = Self>
	+ BitXorAssign
	+ Shl<usize, Output = Self>
	+ ShlAssign<usize>
	+ Shr<usize, Output = Self>
	+ ShrAssign<usize>
{
	/// Number of limbs currently held. Fixed for `FixedUint`; the canonical
	/// length for `DynUint`.
	fn limb_count(&self) -> usize;

	/// Read-only view of the limb sequence, least significant limb first.
	fn as_limbs(&self) -> &[Limb];

	/// Number of storage bits, i.e. `limb_count() * Limb::BITS`.
	fn bits(&self) -> usize {
		self.limb_count() * Limb::BITS
	}

	/// False iff every limb is zero.
	fn is_zero(&self) -> bool;

	/// The lowest 64 bits of the value.
	fn tail(&self) -> u64;

	/// Quotient and remainder in one pass.
	///
	/// Fails with [`ErrorKind::DivisionByZero`](crate::ErrorKind) when
	/// `divisor` is zero; neither operand is modified in that case.
	fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error>;

	/// Adds one in place.
	fn inc(&mut self);

	/// Subtracts one in place, wrapping at zero.
	fn dec(&mut self);
}
