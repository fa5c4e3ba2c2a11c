use std::rc::Rc;

use primitive_types::U256;

use evm_halt::{
	classify, normal_halt, Config, Environment, ExitException, GasReport, Machine, NormalExit,
	ScheduleOracle, STACK_LIMIT,
};

const GAS: u64 = 0xffff;
const MEMORY_LIMIT: usize = 10000;

fn env<'config>(code: &[u8], is_static: bool, config: &'config Config) -> Environment<'config> {
	Environment::new(Rc::new(code.to_vec()), is_static, config)
}

/// Build a machine with the given stack, written top first.
fn machine(stack_top_first: &[U256]) -> Machine {
	let mut machine = Machine::new(GAS, STACK_LIMIT, MEMORY_LIMIT);
	for value in stack_top_first.iter().rev() {
		machine.stack.push(*value).unwrap();
	}
	machine
}

fn machine_of_depth(depth: usize) -> Machine {
	let mut machine = Machine::new(GAS, STACK_LIMIT, MEMORY_LIMIT);
	for _ in 0..depth {
		machine.stack.push(U256::zero()).unwrap();
	}
	machine
}

fn classify_with(code: &[u8], machine: &Machine) -> Result<GasReport, ExitException> {
	let config = Config::constantinople();
	let mut env = env(code, false, &config);
	classify(machine, &mut env, &mut ScheduleOracle)
}

#[test]
fn add_on_empty_stack_underflows() {
	let machine = machine(&[]);
	assert_eq!(
		classify_with(&[0x01], &machine),
		Err(ExitException::StackUnderflow)
	);
}

#[test]
fn unassigned_byte_is_invalid_opcode() {
	let machine = machine(&[]);
	assert_eq!(
		classify_with(&[0xee], &machine),
		Err(ExitException::InvalidOpcode(0xee))
	);
}

#[test]
fn jump_to_non_dest_fails() {
	let machine = machine(&[U256::from(5)]);
	assert_eq!(
		classify_with(&[0x56], &machine),
		Err(ExitException::InvalidJump)
	);
}

#[test]
fn jump_to_dest_continues_at_mid_tier() {
	let machine = machine(&[U256::from(1)]);
	assert_eq!(
		classify_with(&[0x56, 0x5b], &machine),
		Ok(GasReport::Original(8))
	);
}

#[test]
fn jumpi_with_truthy_condition_checks_target() {
	// Target 1 on top, condition 5 below it.
	let machine = machine(&[U256::from(1), U256::from(5)]);
	assert_eq!(
		classify_with(&[0x57, 0x5b], &machine),
		Ok(GasReport::Original(10))
	);
}

#[test]
fn jumpi_with_zero_condition_ignores_target() {
	let machine = machine(&[U256::from(5), U256::zero()]);
	assert_eq!(
		classify_with(&[0x57], &machine),
		Ok(GasReport::Original(10))
	);
}

#[test]
fn push_on_full_stack_overflows() {
	let machine = machine_of_depth(STACK_LIMIT);
	assert_eq!(
		classify_with(&[0x60], &machine),
		Err(ExitException::StackOverflow)
	);
}

#[test]
fn stop_on_full_stack_continues() {
	let machine = machine_of_depth(STACK_LIMIT);
	assert_eq!(classify_with(&[0x00], &machine), Ok(GasReport::Original(0)));
}

#[test]
fn dup_on_full_stack_overflows_swap_does_not() {
	let machine = machine_of_depth(STACK_LIMIT);
	assert_eq!(
		classify_with(&[0x8f], &machine),
		Err(ExitException::StackOverflow)
	);
	assert_eq!(classify_with(&[0x90], &machine), Ok(GasReport::Original(3)));
}

#[test]
fn designated_invalid_opcode() {
	let machine = machine(&[]);
	assert_eq!(
		classify_with(&[0xfe], &machine),
		Err(ExitException::DesignatedInvalid)
	);
}

#[test]
fn designated_invalid_wins_over_fork_masking() {
	let machine = machine(&[]);
	let config = Config::frontier();
	let mut env = env(&[0xfe], false, &config);
	assert_eq!(
		classify(&machine, &mut env, &mut ScheduleOracle),
		Err(ExitException::DesignatedInvalid)
	);
}

#[test]
fn fork_masked_bytes_are_invalid_opcodes() {
	let machine = machine(&[]);
	let config = Config::frontier();
	// REVERT, SHL, DELEGATECALL and CREATE2 all predate their flags here.
	for byte in [0xfd, 0x1b, 0xf4, 0xf5] {
		let mut env = env(&[byte], false, &config);
		assert_eq!(
			classify(&machine, &mut env, &mut ScheduleOracle),
			Err(ExitException::InvalidOpcode(byte)),
			"{:#04x}",
			byte
		);
	}
}

#[test]
fn byzantium_unmasks_revert_but_not_shifts() {
	let config = Config::byzantium();
	let machine = machine(&[U256::zero(), U256::zero()]);
	let mut env1 = env(&[0xfd], false, &config);
	assert_eq!(
		classify(&machine, &mut env1, &mut ScheduleOracle),
		Ok(GasReport::Original(0))
	);

	let mut env2 = env(&[0x1c], false, &config);
	assert_eq!(
		classify(&machine, &mut env2, &mut ScheduleOracle),
		Err(ExitException::InvalidOpcode(0x1c))
	);
}

#[test]
fn underflow_wins_over_jump_validation() {
	let machine = machine(&[]);
	assert_eq!(
		classify_with(&[0x56], &machine),
		Err(ExitException::StackUnderflow)
	);
}

#[test]
fn underflow_wins_over_static_violation() {
	let machine = machine(&[]);
	let config = Config::constantinople();
	let mut env = env(&[0x55], true, &config);
	assert_eq!(
		classify(&machine, &mut env, &mut ScheduleOracle),
		Err(ExitException::StackUnderflow)
	);
}

#[test]
fn jump_beyond_address_width_fails() {
	let machine = machine(&[U256::MAX]);
	assert_eq!(
		classify_with(&[0x56, 0x5b], &machine),
		Err(ExitException::InvalidJump)
	);
}

#[test]
fn push_immediate_is_not_a_jump_dest() {
	// JUMP, then PUSH1 0x5b, then a real JUMPDEST at position 3.
	let code = [0x56, 0x60, 0x5b, 0x5b];
	let into_immediate = machine(&[U256::from(2)]);
	assert_eq!(
		classify_with(&code, &into_immediate),
		Err(ExitException::InvalidJump)
	);
	let into_dest = machine(&[U256::from(3)]);
	assert_eq!(
		classify_with(&code, &into_dest),
		Ok(GasReport::Original(8))
	);
}

fn call_stack(value: u64) -> Vec<U256> {
	// Pop order: gas, target, value, in offset, in size, out offset, out size.
	vec![
		U256::from(GAS),
		U256::zero(),
		U256::from(value),
		U256::zero(),
		U256::zero(),
		U256::zero(),
		U256::zero(),
	]
}

#[test]
fn static_frame_rejects_state_writers() {
	let config = Config::constantinople();

	let sstore = machine(&[U256::zero(), U256::zero()]);
	let mut env_sstore = env(&[0x55], true, &config);
	assert_eq!(
		classify(&sstore, &mut env_sstore, &mut ScheduleOracle),
		Err(ExitException::NotStatic)
	);

	let log0 = machine(&[U256::zero(), U256::zero()]);
	let mut env_log = env(&[0xa0], true, &config);
	assert_eq!(
		classify(&log0, &mut env_log, &mut ScheduleOracle),
		Err(ExitException::NotStatic)
	);

	let suicide = machine(&[U256::zero()]);
	let mut env_suicide = env(&[0xff], true, &config);
	assert_eq!(
		classify(&suicide, &mut env_suicide, &mut ScheduleOracle),
		Err(ExitException::NotStatic)
	);
}

#[test]
fn static_frame_permits_reads() {
	let config = Config::constantinople();

	let sload = machine(&[U256::zero()]);
	let mut env_sload = env(&[0x54], true, &config);
	assert_eq!(
		classify(&sload, &mut env_sload, &mut ScheduleOracle),
		Ok(GasReport::Original(200))
	);
}

#[test]
fn static_frame_call_depends_on_value() {
	let config = Config::constantinople();

	let value_free = machine(&call_stack(0));
	let mut env_free = env(&[0xf1], true, &config);
	assert_eq!(
		classify(&value_free, &mut env_free, &mut ScheduleOracle),
		Ok(GasReport::Original(700))
	);

	let value_bearing = machine(&call_stack(1));
	let mut env_bearing = env(&[0xf1], true, &config);
	assert_eq!(
		classify(&value_bearing, &mut env_bearing, &mut ScheduleOracle),
		Err(ExitException::NotStatic)
	);
}

#[test]
fn non_static_frame_allows_value_bearing_call() {
	let machine = machine(&call_stack(1));
	assert_eq!(
		classify_with(&[0xf1], &machine),
		Ok(GasReport::Original(700))
	);
}

#[test]
fn returndatacopy_respects_buffer_bounds() {
	// Pop order: memory offset, buffer offset, size.
	let mut within = machine(&[U256::zero(), U256::from(2), U256::from(2)]);
	within.retbuf = vec![0; 4];
	assert_eq!(classify_with(&[0x3e], &within), Ok(GasReport::Original(3)));

	let mut overrun = machine(&[U256::zero(), U256::from(2), U256::from(3)]);
	overrun.retbuf = vec![0; 4];
	assert_eq!(
		classify_with(&[0x3e], &overrun),
		Err(ExitException::InvalidRange)
	);
}

#[test]
fn returndatacopy_overflowing_sum_is_out_of_bounds() {
	let mut machine = machine(&[U256::zero(), U256::MAX, U256::from(1)]);
	machine.retbuf = vec![0; 4];
	assert_eq!(
		classify_with(&[0x3e], &machine),
		Err(ExitException::InvalidRange)
	);
}

#[test]
fn gas_gate_compares_against_remaining_gas() {
	let mut jump = machine(&[U256::from(1)]);
	jump.gas = 7;
	assert_eq!(
		classify_with(&[0x56, 0x5b], &jump),
		Err(ExitException::OutOfGas)
	);

	jump.gas = 8;
	assert_eq!(
		classify_with(&[0x56, 0x5b], &jump),
		Ok(GasReport::Original(8))
	);
}

#[test]
fn past_the_end_reads_as_stop() {
	let mut machine = machine(&[]);
	machine.position = 2;
	let code = [0x01, 0x02];
	assert_eq!(classify_with(&code, &machine), Ok(GasReport::Original(0)));

	let config = Config::constantinople();
	let environment = env(&code, false, &config);
	assert_eq!(
		normal_halt(&machine, &environment),
		Ok(Some(NormalExit::Stopped))
	);
}

#[test]
fn classify_is_pure() {
	let machine = machine(&[U256::from(1)]);
	let config = Config::constantinople();
	let mut environment = env(&[0x56, 0x5b], false, &config);

	let before = machine.clone();
	let first = classify(&machine, &mut environment, &mut ScheduleOracle);
	let second = classify(&machine, &mut environment, &mut ScheduleOracle);
	assert_eq!(first, second);
	assert_eq!(machine, before);
}

#[test]
fn return_extracts_payload_from_memory() {
	let mut machine = machine(&[U256::zero(), U256::from(2)]);
	machine.memory.set(0, &hex::decode("abcd").unwrap()).unwrap();
	let config = Config::constantinople();
	let environment = env(&[0xf3], false, &config);
	assert_eq!(
		normal_halt(&machine, &environment),
		Ok(Some(NormalExit::Returned(hex::decode("abcd").unwrap())))
	);
}

#[test]
fn return_slices_at_an_offset() {
	let mut machine = machine(&[U256::from(1), U256::from(1)]);
	machine.memory.set(0, &hex::decode("abcd").unwrap()).unwrap();
	let config = Config::constantinople();
	let environment = env(&[0xf3], false, &config);
	assert_eq!(
		normal_halt(&machine, &environment),
		Ok(Some(NormalExit::Returned(hex::decode("cd").unwrap())))
	);
}

#[test]
fn revert_carries_payload_and_marks_rollback() {
	let mut machine = machine(&[U256::zero(), U256::from(2)]);
	machine.memory.set(0, &hex::decode("1234").unwrap()).unwrap();
	let config = Config::constantinople();
	let environment = env(&[0xfd], false, &config);
	let exit = normal_halt(&machine, &environment).unwrap().unwrap();
	assert_eq!(exit, NormalExit::Reverted(hex::decode("1234").unwrap()));
	assert!(exit.is_revert());
	assert_eq!(exit.payload(), &hex::decode("1234").unwrap()[..]);
}

#[test]
fn stop_and_selfdestruct_halt_with_empty_payload() {
	let stopped = machine(&[]);
	let config = Config::constantinople();
	let env_stop = env(&[0x00], false, &config);
	assert_eq!(
		normal_halt(&stopped, &env_stop),
		Ok(Some(NormalExit::Stopped))
	);

	let suicided = machine(&[U256::zero()]);
	let env_suicide = env(&[0xff], false, &config);
	let exit = normal_halt(&suicided, &env_suicide).unwrap().unwrap();
	assert_eq!(exit, NormalExit::Suicided);
	assert!(exit.payload().is_empty());
}

#[test]
fn non_halting_opcodes_are_not_normal_halts() {
	let machine = machine(&[U256::from(1), U256::from(2)]);
	let config = Config::constantinople();
	for code in [[0x01], [0x56], [0x5b]] {
		let environment = env(&code, false, &config);
		assert_eq!(normal_halt(&machine, &environment), Ok(None));
	}
}

#[test]
fn fork_masked_revert_is_not_a_normal_halt() {
	let machine = machine(&[U256::zero(), U256::zero()]);
	let config = Config::frontier();
	let environment = env(&[0xfd], false, &config);
	assert_eq!(normal_halt(&machine, &environment), Ok(None));
}
