//! Gas gate: cost oracle interface and the static fee schedule.

use crate::machine::{Environment, Machine};
use crate::opcode::Opcode;
use crate::table::OpcodeInfo;

/// Gas paid for the zero tier of instructions.
pub const G_ZERO: u64 = 0;
/// Gas paid for the base tier of instructions.
pub const G_BASE: u64 = 2;
/// Gas paid for the very low tier of instructions.
pub const G_VERYLOW: u64 = 3;
/// Gas paid for the low tier of instructions.
pub const G_LOW: u64 = 5;
/// Gas paid for the mid tier of instructions.
pub const G_MID: u64 = 8;
/// Gas paid for the high tier of instructions.
pub const G_HIGH: u64 = 10;
/// Gas paid for an EXP, excluding the per-byte charge.
pub const G_EXP: u64 = 10;
/// Gas paid for a SHA3, excluding the per-word charge.
pub const G_SHA3: u64 = 30;
/// Gas paid for a BALANCE.
pub const G_BALANCE: u64 = 400;
/// Gas paid for EXTCODESIZE and EXTCODECOPY, excluding the per-word
/// charge.
pub const G_EXTCODE: u64 = 700;
/// Gas paid for an EXTCODEHASH.
pub const G_EXTCODEHASH: u64 = 400;
/// Gas paid for a BLOCKHASH.
pub const G_BLOCKHASH: u64 = 20;
/// Gas paid for an SLOAD.
pub const G_SLOAD: u64 = 200;
/// Gas paid for an SSTORE, excluding refund accounting.
pub const G_SSTORE: u64 = 5000;
/// Gas paid for a JUMPDEST.
pub const G_JUMPDEST: u64 = 1;
/// Gas paid for a LOG, excluding topics and data.
pub const G_LOG: u64 = 375;
/// Gas paid per LOG topic.
pub const G_LOGTOPIC: u64 = 375;
/// Gas paid for a CREATE or CREATE2, excluding the init-code charges.
pub const G_CREATE: u64 = 32000;
/// Gas paid for entering the CALL family, excluding transfer and
/// new-account charges.
pub const G_CALL: u64 = 700;
/// Gas paid for a SELFDESTRUCT, excluding the new-account charge.
pub const G_SUICIDE: u64 = 5000;

/// Outcome of a cost-oracle consultation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GasReport {
	/// The schedule cost applies as-is.
	Original(u64),
	/// The oracle substituted a different charge; the second field keeps
	/// the schedule cost it replaced.
	Changed(u64, u64),
}

impl GasReport {
	/// The charge to gate the step on.
	pub const fn cost(self) -> u64 {
		match self {
			Self::Original(cost) | Self::Changed(cost, _) => cost,
		}
	}
}

/// Prices the instruction the machine is about to execute. The halting
/// checks consult the oracle only after every cheaper check has passed,
/// so implementations may assume well-formed inputs. The oracle is the
/// only collaborator with write access to the environment.
pub trait CostOracle {
	/// Price the pending instruction.
	fn cost_of(&mut self, machine: &Machine, env: &mut Environment) -> GasReport;
}

/// The static Yellow Paper fee schedule. Dynamic components such as
/// memory expansion, copy sizes and cold-account surcharges are out of
/// its reach; oracles that track them report `Changed` instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScheduleOracle;

impl CostOracle for ScheduleOracle {
	fn cost_of(&mut self, machine: &Machine, env: &mut Environment) -> GasReport {
		let cost = match OpcodeInfo::of(env.opcode_at(machine.position)) {
			Some(info) => static_cost(info.opcode),
			None => G_ZERO,
		};
		GasReport::Original(cost)
	}
}

/// The schedule charge of a single instruction.
pub const fn static_cost(opcode: Opcode) -> u64 {
	match opcode {
		Opcode::Stop | Opcode::Return | Opcode::Revert | Opcode::Invalid => G_ZERO,

		Opcode::Address
		| Opcode::Origin
		| Opcode::Caller
		| Opcode::CallValue
		| Opcode::CallDataSize
		| Opcode::CodeSize
		| Opcode::GasPrice
		| Opcode::ReturnDataSize
		| Opcode::Coinbase
		| Opcode::Timestamp
		| Opcode::Number
		| Opcode::Difficulty
		| Opcode::GasLimit
		| Opcode::Pop
		| Opcode::PC
		| Opcode::MSize
		| Opcode::Gas => G_BASE,

		Opcode::Add
		| Opcode::Sub
		| Opcode::Lt
		| Opcode::Gt
		| Opcode::SLt
		| Opcode::SGt
		| Opcode::Eq
		| Opcode::IsZero
		| Opcode::And
		| Opcode::Or
		| Opcode::Xor
		| Opcode::Not
		| Opcode::Byte
		| Opcode::Shl
		| Opcode::Shr
		| Opcode::Sar
		| Opcode::CallDataLoad
		| Opcode::CallDataCopy
		| Opcode::CodeCopy
		| Opcode::ReturnDataCopy
		| Opcode::MLoad
		| Opcode::MStore
		| Opcode::MStore8
		| Opcode::Push(_)
		| Opcode::Dup(_)
		| Opcode::Swap(_) => G_VERYLOW,

		Opcode::Mul
		| Opcode::Div
		| Opcode::SDiv
		| Opcode::Mod
		| Opcode::SMod
		| Opcode::SignExtend => G_LOW,

		Opcode::AddMod | Opcode::MulMod | Opcode::Jump => G_MID,
		Opcode::JumpI => G_HIGH,
		Opcode::Exp => G_EXP,
		Opcode::Sha3 => G_SHA3,
		Opcode::Balance => G_BALANCE,
		Opcode::ExtCodeSize | Opcode::ExtCodeCopy => G_EXTCODE,
		Opcode::ExtCodeHash => G_EXTCODEHASH,
		Opcode::BlockHash => G_BLOCKHASH,
		Opcode::SLoad => G_SLOAD,
		Opcode::SStore => G_SSTORE,
		Opcode::JumpDest => G_JUMPDEST,
		Opcode::Log(n) => G_LOG + G_LOGTOPIC * n as u64,
		Opcode::Create | Opcode::Create2 => G_CREATE,
		Opcode::Call | Opcode::CallCode | Opcode::DelegateCall | Opcode::StaticCall => G_CALL,
		Opcode::Suicide => G_SUICIDE,
	}
}
