//! Hard-fork configuration.

use crate::opcode::Opcode;

/// Runtime configuration of a hard fork, as far as instruction availability
/// is concerned. A flat record of feature flags; new forks extend it with
/// new fields rather than subclassing.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
	feature = "with-codec",
	derive(scale_codec::Encode, scale_codec::Decode, scale_info::TypeInfo)
)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
	/// Whether the EVM has DELEGATECALL opcode.
	pub has_delegate_call: bool,
	/// Whether the EVM has REVERT opcode.
	pub has_revert: bool,
	/// Whether the EVM has STATICCALL opcode.
	pub has_static_call: bool,
	/// Whether the EVM has RETURNDATASIZE and RETURNDATACOPY opcode.
	pub has_return_data: bool,
	/// Whether the EVM has SHL, SHR and SAR.
	pub has_bitwise_shift: bool,
	/// Whether the EVM has EXTCODEHASH.
	pub has_extcodehash: bool,
	/// Whether the EVM has CREATE2.
	pub has_create2: bool,
}

#[rustfmt::skip]
impl Config {
	/// Frontier hard fork configuration.
	pub const fn frontier() -> Config {
		Config {
			has_delegate_call: false,
			has_revert: false,
			has_static_call: false,
			has_return_data: false,
			has_bitwise_shift: false,
			has_extcodehash: false,
			has_create2: false,
		}
	}

	/// Homestead hard fork configuration.
	pub const fn homestead() -> Config {
		Config {
			has_delegate_call: true,
			has_revert: false,
			has_static_call: false,
			has_return_data: false,
			has_bitwise_shift: false,
			has_extcodehash: false,
			has_create2: false,
		}
	}

	/// Byzantium hard fork configuration.
	pub const fn byzantium() -> Config {
		Config {
			has_delegate_call: true,
			has_revert: true,
			has_static_call: true,
			has_return_data: true,
			has_bitwise_shift: false,
			has_extcodehash: false,
			has_create2: false,
		}
	}

	/// Constantinople hard fork configuration.
	pub const fn constantinople() -> Config {
		Config {
			has_delegate_call: true,
			has_revert: true,
			has_static_call: true,
			has_return_data: true,
			has_bitwise_shift: true,
			has_extcodehash: true,
			has_create2: true,
		}
	}
}

impl Config {
	/// Whether the given instruction is available under this
	/// configuration. The designated invalid instruction is always
	/// available; it must surface as itself rather than as an unassigned
	/// byte.
	pub fn enables(&self, opcode: Opcode) -> bool {
		match opcode {
			Opcode::DelegateCall => self.has_delegate_call,
			Opcode::Revert => self.has_revert,
			Opcode::StaticCall => self.has_static_call,
			Opcode::ReturnDataSize | Opcode::ReturnDataCopy => self.has_return_data,
			Opcode::Shl | Opcode::Shr | Opcode::Sar => self.has_bitwise_shift,
			Opcode::ExtCodeHash => self.has_extcodehash,
			Opcode::Create2 => self.has_create2,
			_ => true,
		}
	}
}
