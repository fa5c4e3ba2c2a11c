//! Instruction metadata table.

use crate::config::Config;
use crate::opcode::Opcode;

/// Metadata for a single instruction: its symbol, stack arity, immediate
/// width and whether it writes world state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OpcodeInfo {
	/// The instruction symbol.
	pub opcode: Opcode,
	/// Number of words the instruction pops.
	pub inputs: usize,
	/// Number of words the instruction pushes.
	pub outputs: usize,
	/// Number of immediate bytes following the instruction in code. Zero
	/// for everything except `PUSH1`..`PUSH32`.
	pub immediate: usize,
	/// Whether the instruction unconditionally writes world state. `CALL`
	/// is recorded as non-writing here; its value-transfer case is handled
	/// by the static check directly.
	pub writes_state: bool,
}

impl OpcodeInfo {
	const fn new(opcode: Opcode, inputs: usize, outputs: usize) -> Self {
		Self {
			opcode,
			inputs,
			outputs,
			immediate: 0,
			writes_state: false,
		}
	}

	const fn writing(opcode: Opcode, inputs: usize, outputs: usize) -> Self {
		Self {
			opcode,
			inputs,
			outputs,
			immediate: 0,
			writes_state: true,
		}
	}

	const fn push(n: u8) -> Self {
		Self {
			opcode: Opcode::Push(n),
			inputs: 0,
			outputs: 1,
			immediate: n as usize,
			writes_state: false,
		}
	}

	/// Look up the metadata assigned to a byte. Unassigned bytes return
	/// `None`; the designated invalid instruction `0xfe` is assigned and
	/// distinct from them.
	pub const fn of(byte: u8) -> Option<OpcodeInfo> {
		Some(match byte {
			0x00 => Self::new(Opcode::Stop, 0, 0),
			0x01 => Self::new(Opcode::Add, 2, 1),
			0x02 => Self::new(Opcode::Mul, 2, 1),
			0x03 => Self::new(Opcode::Sub, 2, 1),
			0x04 => Self::new(Opcode::Div, 2, 1),
			0x05 => Self::new(Opcode::SDiv, 2, 1),
			0x06 => Self::new(Opcode::Mod, 2, 1),
			0x07 => Self::new(Opcode::SMod, 2, 1),
			0x08 => Self::new(Opcode::AddMod, 3, 1),
			0x09 => Self::new(Opcode::MulMod, 3, 1),
			0x0a => Self::new(Opcode::Exp, 2, 1),
			0x0b => Self::new(Opcode::SignExtend, 2, 1),

			0x10 => Self::new(Opcode::Lt, 2, 1),
			0x11 => Self::new(Opcode::Gt, 2, 1),
			0x12 => Self::new(Opcode::SLt, 2, 1),
			0x13 => Self::new(Opcode::SGt, 2, 1),
			0x14 => Self::new(Opcode::Eq, 2, 1),
			0x15 => Self::new(Opcode::IsZero, 1, 1),
			0x16 => Self::new(Opcode::And, 2, 1),
			0x17 => Self::new(Opcode::Or, 2, 1),
			0x18 => Self::new(Opcode::Xor, 2, 1),
			0x19 => Self::new(Opcode::Not, 1, 1),
			0x1a => Self::new(Opcode::Byte, 2, 1),
			0x1b => Self::new(Opcode::Shl, 2, 1),
			0x1c => Self::new(Opcode::Shr, 2, 1),
			0x1d => Self::new(Opcode::Sar, 2, 1),

			0x20 => Self::new(Opcode::Sha3, 2, 1),

			0x30 => Self::new(Opcode::Address, 0, 1),
			0x31 => Self::new(Opcode::Balance, 1, 1),
			0x32 => Self::new(Opcode::Origin, 0, 1),
			0x33 => Self::new(Opcode::Caller, 0, 1),
			0x34 => Self::new(Opcode::CallValue, 0, 1),
			0x35 => Self::new(Opcode::CallDataLoad, 1, 1),
			0x36 => Self::new(Opcode::CallDataSize, 0, 1),
			0x37 => Self::new(Opcode::CallDataCopy, 3, 0),
			0x38 => Self::new(Opcode::CodeSize, 0, 1),
			0x39 => Self::new(Opcode::CodeCopy, 3, 0),
			0x3a => Self::new(Opcode::GasPrice, 0, 1),
			0x3b => Self::new(Opcode::ExtCodeSize, 1, 1),
			0x3c => Self::new(Opcode::ExtCodeCopy, 4, 0),
			0x3d => Self::new(Opcode::ReturnDataSize, 0, 1),
			0x3e => Self::new(Opcode::ReturnDataCopy, 3, 0),
			0x3f => Self::new(Opcode::ExtCodeHash, 1, 1),

			0x40 => Self::new(Opcode::BlockHash, 1, 1),
			0x41 => Self::new(Opcode::Coinbase, 0, 1),
			0x42 => Self::new(Opcode::Timestamp, 0, 1),
			0x43 => Self::new(Opcode::Number, 0, 1),
			0x44 => Self::new(Opcode::Difficulty, 0, 1),
			0x45 => Self::new(Opcode::GasLimit, 0, 1),

			0x50 => Self::new(Opcode::Pop, 1, 0),
			0x51 => Self::new(Opcode::MLoad, 1, 1),
			0x52 => Self::new(Opcode::MStore, 2, 0),
			0x53 => Self::new(Opcode::MStore8, 2, 0),
			0x54 => Self::new(Opcode::SLoad, 1, 1),
			0x55 => Self::writing(Opcode::SStore, 2, 0),
			0x56 => Self::new(Opcode::Jump, 1, 0),
			0x57 => Self::new(Opcode::JumpI, 2, 0),
			0x58 => Self::new(Opcode::PC, 0, 1),
			0x59 => Self::new(Opcode::MSize, 0, 1),
			0x5a => Self::new(Opcode::Gas, 0, 1),
			0x5b => Self::new(Opcode::JumpDest, 0, 0),

			0x60..=0x7f => Self::push(byte - 0x5f),
			0x80..=0x8f => {
				let n = byte - 0x7f;
				Self::new(Opcode::Dup(n), n as usize, n as usize + 1)
			}
			0x90..=0x9f => {
				let n = byte - 0x8f;
				Self::new(Opcode::Swap(n), n as usize + 1, n as usize + 1)
			}
			0xa0..=0xa4 => {
				let n = byte - 0xa0;
				Self::writing(Opcode::Log(n), n as usize + 2, 0)
			}

			0xf0 => Self::writing(Opcode::Create, 3, 1),
			0xf1 => Self::new(Opcode::Call, 7, 1),
			0xf2 => Self::new(Opcode::CallCode, 7, 1),
			0xf3 => Self::new(Opcode::Return, 2, 0),
			0xf4 => Self::new(Opcode::DelegateCall, 6, 1),
			0xf5 => Self::writing(Opcode::Create2, 4, 1),
			0xfa => Self::new(Opcode::StaticCall, 6, 1),
			0xfd => Self::new(Opcode::Revert, 2, 0),
			0xfe => Self::new(Opcode::Invalid, 0, 0),
			0xff => Self::writing(Opcode::Suicide, 1, 0),

			_ => return None,
		})
	}

	/// Pass the metadata through the fork gate. Instructions whose feature
	/// flag is off in `config` are masked to `None`, as if the byte was
	/// never assigned. The designated invalid instruction is never masked.
	pub fn enabled_in(self, config: &Config) -> Option<OpcodeInfo> {
		if config.enables(self.opcode) {
			Some(self)
		} else {
			None
		}
	}
}
