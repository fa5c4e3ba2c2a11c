use alloc::rc::Rc;
use alloc::vec::Vec;

use primitive_types::U256;

use crate::config::Config;
use crate::error::ExitError;
use crate::memory::Memory;
use crate::stack::Stack;
use crate::utils::u256_to_usize;
use crate::valids::Valids;

/// Machine state read by the halting checks: program counter, stack,
/// memory, remaining gas and the return buffer of the last sub-call. The
/// checks never mutate it; the surrounding interpreter owns all writes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Machine {
	/// Program counter.
	pub position: usize,
	/// Stack.
	pub stack: Stack,
	/// Memory.
	pub memory: Memory,
	/// Remaining gas.
	pub gas: u64,
	/// The buffer returned by the most recent sub-call, possibly empty.
	pub retbuf: Vec<u8>,
}

impl Machine {
	/// Create a new machine with the given gas and limits, positioned at
	/// the start of code.
	pub fn new(gas: u64, stack_limit: usize, memory_limit: usize) -> Self {
		Self {
			position: 0,
			stack: Stack::new(stack_limit),
			memory: Memory::new(memory_limit),
			gas,
			retbuf: Vec::new(),
		}
	}

	/// Copy and get the return value of the machine. Reads the top two
	/// stack words as `(offset, length)` and slices memory, zero-extended
	/// past the current memory size. A length that does not fit the host
	/// address width is a fatal error; callers treating the length as
	/// untrusted may apply their own limit first.
	pub fn return_value(&self) -> Result<Vec<u8>, ExitError> {
		let offset = self.stack.peek(0)?;
		let length = u256_to_usize(self.stack.peek(1)?)?;

		if length == 0 {
			return Ok(Vec::new());
		}

		if offset > U256::from(usize::MAX) {
			let mut ret: Vec<u8> = Vec::new();
			ret.resize(length, 0);
			return Ok(ret);
		}

		Ok(self.memory.get(offset.as_usize(), length))
	}
}

/// Execution environment of a call frame: the code under execution, its
/// derived jump-destination map, the static flag and the hard-fork
/// configuration. Read-only for the halting checks; only the cost oracle
/// may update the bookkeeping slot.
#[derive(Clone, Debug)]
pub struct Environment<'config> {
	code: Rc<Vec<u8>>,
	valids: Valids,
	is_static: bool,
	config: &'config Config,
	/// Bookkeeping slot for cost oracles that track the memory-expansion
	/// watermark across steps.
	pub memory_gas: u64,
}

impl<'config> Environment<'config> {
	/// Create an environment for the given code. The jump-destination map
	/// is derived here, once, and cached for the frame's lifetime.
	pub fn new(code: Rc<Vec<u8>>, is_static: bool, config: &'config Config) -> Self {
		let valids = Valids::new(&code[..]);

		Self {
			code,
			valids,
			is_static,
			config,
			memory_gas: 0,
		}
	}

	/// The code under execution.
	pub fn code(&self) -> &[u8] {
		&self.code
	}

	/// The jump-destination map derived from the code.
	pub const fn valids(&self) -> &Valids {
		&self.valids
	}

	/// Whether state mutation is forbidden in this frame.
	pub const fn is_static(&self) -> bool {
		self.is_static
	}

	/// The active hard-fork configuration.
	pub const fn config(&self) -> &Config {
		self.config
	}

	/// The opcode byte at the given position. Past-the-end positions read
	/// as the implicit `STOP`.
	pub fn opcode_at(&self, position: usize) -> u8 {
		self.code.get(position).copied().unwrap_or(0x00)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::stack::STACK_LIMIT;

	fn machine_with_memory(bytes: &[u8]) -> Machine {
		let mut machine = Machine::new(0xffff, STACK_LIMIT, usize::MAX);
		machine.memory.set(0, bytes).unwrap();
		machine
	}

	#[test]
	fn return_value_slices_memory() {
		let mut machine = machine_with_memory(&[0xab, 0xcd]);
		machine.stack.push(U256::from(2)).unwrap(); // length
		machine.stack.push(U256::zero()).unwrap(); // offset
		assert_eq!(machine.return_value().unwrap(), [0xab, 0xcd]);
	}

	#[test]
	fn return_value_zero_extends() {
		let mut machine = machine_with_memory(&[0xab, 0xcd]);
		machine.stack.push(U256::from(4)).unwrap();
		machine.stack.push(U256::from(1)).unwrap();
		assert_eq!(machine.return_value().unwrap(), [0xcd, 0x00, 0x00, 0x00]);
	}

	#[test]
	fn return_value_of_wide_offset_is_zeroes() {
		let mut machine = machine_with_memory(&[0xab, 0xcd]);
		machine.stack.push(U256::from(2)).unwrap();
		machine.stack.push(U256::MAX).unwrap();
		assert_eq!(machine.return_value().unwrap(), [0x00, 0x00]);
	}

	#[test]
	fn environment_reads_implicit_stop() {
		let config = Config::constantinople();
		let env = Environment::new(Rc::new(vec![0x01]), false, &config);
		assert_eq!(env.opcode_at(0), 0x01);
		assert_eq!(env.opcode_at(1), 0x00);
		assert_eq!(env.opcode_at(usize::MAX), 0x00);
	}
}
