//! Halting checks run before every instruction.
//!
//! [classify] decides whether the pending instruction would halt the
//! machine exceptionally, and prices it when it would not. [normal_halt]
//! recognizes the instructions that end a frame normally and extracts
//! their return payload. Both are pure reads of the machine state; the
//! surrounding interpreter applies the outcome.

use primitive_types::U256;

use crate::error::{ExitError, ExitException, NormalExit};
use crate::gas::{CostOracle, GasReport};
use crate::machine::{Environment, Machine};
use crate::opcode::Opcode;
use crate::table::OpcodeInfo;

/// Classify the instruction at the current program counter. Returns the
/// cost report when the machine may continue, or the exceptional halt
/// reason when it may not.
///
/// The checks run in a fixed order and the first failure wins: designated
/// invalid, unassigned or fork-masked byte, stack underflow, stack
/// overflow, bad jump target, static-context violation, return-buffer
/// overrun, and finally insufficient gas. The cost oracle is consulted
/// only after every other check has passed.
pub fn classify<O: CostOracle>(
	machine: &Machine,
	env: &mut Environment,
	oracle: &mut O,
) -> Result<GasReport, ExitException> {
	let byte = env.opcode_at(machine.position);
	let fetched = OpcodeInfo::of(byte);

	if let Some(info) = fetched {
		if info.opcode == Opcode::Invalid {
			return Err(ExitException::DesignatedInvalid);
		}
	}

	let info = fetched
		.and_then(|info| info.enabled_in(env.config()))
		.ok_or(ExitException::InvalidOpcode(byte))?;

	if machine.stack.len() < info.inputs {
		return Err(ExitException::StackUnderflow);
	}
	if machine.stack.len() - info.inputs + info.outputs > machine.stack.limit() {
		return Err(ExitException::StackOverflow);
	}

	let inputs = machine.stack.peek_inputs(info.inputs)?;

	match info.opcode {
		Opcode::Jump => {
			check_jump_target(env, inputs.get(0))?;
		}
		Opcode::JumpI => {
			if !inputs.get(1).is_zero() {
				check_jump_target(env, inputs.get(0))?;
			}
		}
		_ => (),
	}

	if env.is_static() {
		let mutates = match info.opcode {
			// A zero-value CALL is permitted in a static frame.
			Opcode::Call => !inputs.get(2).is_zero(),
			_ => info.writes_state,
		};
		if mutates {
			return Err(ExitException::NotStatic);
		}
	}

	if info.opcode == Opcode::ReturnDataCopy {
		let start = inputs.get(1);
		let size = inputs.get(2);
		let end = start
			.checked_add(size)
			.ok_or(ExitException::InvalidRange)?;
		if end > U256::from(machine.retbuf.len()) {
			return Err(ExitException::InvalidRange);
		}
	}

	let report = oracle.cost_of(machine, env);
	if report.cost() > machine.gas {
		return Err(ExitException::OutOfGas);
	}

	#[cfg(feature = "force-debug")]
	log::trace!(
		target: "evm",
		"continue {:?} at {}, cost {}",
		info.opcode,
		machine.position,
		report.cost()
	);

	Ok(report)
}

fn check_jump_target(env: &Environment, target: U256) -> Result<(), ExitException> {
	// Targets beyond the address width cannot point into code.
	if target > U256::from(usize::MAX) {
		return Err(ExitException::InvalidJump);
	}
	if !env.valids().is_valid(target.as_usize()) {
		return Err(ExitException::InvalidJump);
	}
	Ok(())
}

/// Recognize a normal halt at the current program counter. Returns `None`
/// when the pending instruction does not end the frame; otherwise the
/// halt variant with its payload. Callers run [classify] first, so the
/// operand stack is already known to be deep enough.
pub fn normal_halt(machine: &Machine, env: &Environment) -> Result<Option<NormalExit>, ExitError> {
	let byte = env.opcode_at(machine.position);
	let info = match OpcodeInfo::of(byte).and_then(|info| info.enabled_in(env.config())) {
		Some(info) => info,
		None => return Ok(None),
	};

	Ok(match info.opcode {
		Opcode::Stop => Some(NormalExit::Stopped),
		Opcode::Suicide => Some(NormalExit::Suicided),
		Opcode::Return => Some(NormalExit::Returned(machine.return_value()?)),
		Opcode::Revert => Some(NormalExit::Reverted(machine.return_value()?)),
		_ => None,
	})
}
