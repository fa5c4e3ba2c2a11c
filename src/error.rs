//! Halting outcomes.

use alloc::vec::Vec;

/// Exceptional halt of a call frame. The taxonomy is closed; every value
/// is a consensus-visible fault that consumes the frame's remaining gas.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
	feature = "with-codec",
	derive(scale_codec::Encode, scale_codec::Decode, scale_info::TypeInfo)
)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExitException {
	/// Trying to pop from an empty stack.
	StackUnderflow,
	/// Trying to push into a stack over stack limit.
	StackOverflow,
	/// Jump destination is invalid.
	InvalidJump,
	/// An opcode accesses the return buffer outside its bounds.
	InvalidRange,
	/// Encountered the designated invalid opcode.
	DesignatedInvalid,
	/// The byte is not an instruction, either unassigned or masked out by
	/// the active hard-fork configuration.
	InvalidOpcode(u8),
	/// In static context but does mutation.
	NotStatic,
	/// Execution runs out of gas.
	OutOfGas,
}

/// Errors the machine itself cannot represent, as opposed to consensus
/// faults. A request that does not fit the host address width lands here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
	feature = "with-codec",
	derive(scale_codec::Encode, scale_codec::Decode, scale_info::TypeInfo)
)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExitFatal {
	/// The operation is not supported by this implementation.
	NotSupported,
}

/// Exit error reason, tying the exception and fatal tiers together at the
/// interpreter boundary.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
	feature = "with-codec",
	derive(scale_codec::Encode, scale_codec::Decode, scale_info::TypeInfo)
)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExitError {
	/// Machine returned a normal EVM exception.
	Exception(ExitException),
	/// Machine encountered an explicit revert.
	Reverted,
	/// Machine encountered an error that is not a normal EVM fault.
	Fatal(ExitFatal),
}

impl From<ExitException> for ExitError {
	fn from(s: ExitException) -> Self {
		Self::Exception(s)
	}
}

impl From<ExitFatal> for ExitError {
	fn from(s: ExitFatal) -> Self {
		Self::Fatal(s)
	}
}

#[cfg(feature = "std")]
impl std::fmt::Display for ExitError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self)
	}
}

#[cfg(feature = "std")]
impl std::error::Error for ExitError {}

/// Normal halt of a call frame, together with its return payload.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
	feature = "with-codec",
	derive(scale_codec::Encode, scale_codec::Decode, scale_info::TypeInfo)
)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormalExit {
	/// Machine encountered an explicit stop. The payload is empty.
	Stopped,
	/// Machine encountered an explicit suicide. The payload is empty.
	Suicided,
	/// Machine encountered an explicit return.
	Returned(Vec<u8>),
	/// Machine encountered an explicit revert.
	Reverted(Vec<u8>),
}

impl NormalExit {
	/// The return payload carried by this halt.
	pub fn payload(&self) -> &[u8] {
		match self {
			Self::Stopped | Self::Suicided => &[],
			Self::Returned(data) | Self::Reverted(data) => data,
		}
	}

	/// Whether this halt discards state changes.
	pub const fn is_revert(&self) -> bool {
		matches!(self, Self::Reverted(_))
	}
}
