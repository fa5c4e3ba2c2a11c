//! Small utilities.

use primitive_types::U256;

use crate::error::ExitFatal;

/// Convert [U256] to [usize], failing when the value does not fit the
/// host address width.
pub fn u256_to_usize(v: U256) -> Result<usize, ExitFatal> {
	if v > U256::from(usize::MAX) {
		return Err(ExitFatal::NotSupported);
	}
	Ok(v.as_usize())
}
