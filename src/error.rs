#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Error {
	pub kind: ErrorKind,
	pub message: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
	/// Fatal for the failing call: division or modulo with a zero divisor.
	DivisionByZero,

	/// Recoverable: the input string is not a plain decimal number.
	ParseError,
}

impl std::fmt::Debug for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Error").field("kind", &self.kind).field("message", &self.message).finish()
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::DivisionByZero => write!(f, "division by zero: {}", self.message),
			ErrorKind::ParseError => write!(f, "parse error: {}", self.message),
		}
	}
}

impl std::error::Error for Error {}

impl Error {
	pub const fn new(kind: ErrorKind, msg: &'static str) -> Self {
		Self { kind, message: msg }
	}

	pub const fn new_division_by_zero(msg: &'static str) -> Self {
		Self::new(ErrorKind::DivisionByZero, msg)
	}

	pub const fn new_parse_error(msg: &'static str) -> Self {
		Self::new(ErrorKind::ParseError, msg)
	}
}
