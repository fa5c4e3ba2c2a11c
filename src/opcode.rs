/// Opcode enum. A closed enumeration of every instruction the analyzer
/// recognizes; the byte-level mapping lives in [crate::OpcodeInfo].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
	feature = "with-codec",
	derive(scale_codec::Encode, scale_codec::Decode, scale_info::TypeInfo)
)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Opcode {
	/// `STOP`
	Stop,
	/// `ADD`
	Add,
	/// `MUL`
	Mul,
	/// `SUB`
	Sub,
	/// `DIV`
	Div,
	/// `SDIV`
	SDiv,
	/// `MOD`
	Mod,
	/// `SMOD`
	SMod,
	/// `ADDMOD`
	AddMod,
	/// `MULMOD`
	MulMod,
	/// `EXP`
	Exp,
	/// `SIGNEXTEND`
	SignExtend,

	/// `LT`
	Lt,
	/// `GT`
	Gt,
	/// `SLT`
	SLt,
	/// `SGT`
	SGt,
	/// `EQ`
	Eq,
	/// `ISZERO`
	IsZero,
	/// `AND`
	And,
	/// `OR`
	Or,
	/// `XOR`
	Xor,
	/// `NOT`
	Not,
	/// `BYTE`
	Byte,

	/// `SHL`
	Shl,
	/// `SHR`
	Shr,
	/// `SAR`
	Sar,

	/// `SHA3`
	Sha3,

	/// `ADDRESS`
	Address,
	/// `BALANCE`
	Balance,
	/// `ORIGIN`
	Origin,
	/// `CALLER`
	Caller,
	/// `CALLVALUE`
	CallValue,
	/// `CALLDATALOAD`
	CallDataLoad,
	/// `CALLDATASIZE`
	CallDataSize,
	/// `CALLDATACOPY`
	CallDataCopy,
	/// `CODESIZE`
	CodeSize,
	/// `CODECOPY`
	CodeCopy,
	/// `GASPRICE`
	GasPrice,
	/// `EXTCODESIZE`
	ExtCodeSize,
	/// `EXTCODECOPY`
	ExtCodeCopy,
	/// `RETURNDATASIZE`
	ReturnDataSize,
	/// `RETURNDATACOPY`
	ReturnDataCopy,
	/// `EXTCODEHASH`
	ExtCodeHash,

	/// `BLOCKHASH`
	BlockHash,
	/// `COINBASE`
	Coinbase,
	/// `TIMESTAMP`
	Timestamp,
	/// `NUMBER`
	Number,
	/// `DIFFICULTY`
	Difficulty,
	/// `GASLIMIT`
	GasLimit,

	/// `POP`
	Pop,
	/// `MLOAD`
	MLoad,
	/// `MSTORE`
	MStore,
	/// `MSTORE8`
	MStore8,
	/// `SLOAD`
	SLoad,
	/// `SSTORE`
	SStore,
	/// `JUMP`
	Jump,
	/// `JUMPI`
	JumpI,
	/// `PC`
	PC,
	/// `MSIZE`
	MSize,
	/// `GAS`
	Gas,
	/// `JUMPDEST`
	JumpDest,

	/// `PUSHn`
	Push(u8),
	/// `DUPn`
	Dup(u8),
	/// `SWAPn`
	Swap(u8),
	/// `LOGn`
	Log(u8),

	/// `CREATE`
	Create,
	/// `CALL`
	Call,
	/// `CALLCODE`
	CallCode,
	/// `RETURN`
	Return,
	/// `DELEGATECALL`
	DelegateCall,
	/// `CREATE2`
	Create2,
	/// `STATICCALL`
	StaticCall,
	/// `REVERT`
	Revert,

	/// `INVALID`, the designated invalid instruction.
	Invalid,

	/// `SELFDESTRUCT`
	Suicide,
}
