use alloc::vec::Vec;

use crate::opcode::Opcode;
use crate::table::OpcodeInfo;

/// Mapping of valid jump destinations in a code blob. Derived once per
/// code and immutable afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Valids(Vec<bool>);

impl Valids {
	/// Create a new valid mapping from given code bytes. Bytes inside a
	/// PUSH immediate are skipped, so a `JUMPDEST` byte value appearing
	/// there is never recorded.
	pub fn new(code: &[u8]) -> Self {
		let mut valids: Vec<bool> = Vec::with_capacity(code.len());
		valids.resize(code.len(), false);

		let mut i = 0;
		while i < code.len() {
			match OpcodeInfo::of(code[i]) {
				Some(info) if info.opcode == Opcode::JumpDest => {
					valids[i] = true;
					i += 1;
				}
				Some(info) => {
					i += 1 + info.immediate;
				}
				None => {
					i += 1;
				}
			}
		}

		Valids(valids)
	}

	/// Get the length of the valid mapping. This is the same as the code
	/// bytes.
	#[inline]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if the valids list is empty.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns `true` if the position is a valid jump destination. If
	/// not, returns `false`.
	pub fn is_valid(&self, position: usize) -> bool {
		if position >= self.0.len() {
			return false;
		}

		self.0[position]
	}
}
