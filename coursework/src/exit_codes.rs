//! Stable exit codes for coursework CLI commands.

use crate::core::averager::AverageError;
use crate::core::mask::MaskError;
use crate::core::radix::RadixError;
use crate::core::recurrence::RecurrenceError;
use crate::core::sequences::SequenceError;

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed on invalid config, unparsable input, or an I/O error.
pub const INVALID: i32 = 1;
/// An exercise rejected a caller-supplied value outside its domain.
pub const DOMAIN: i32 = 2;

/// Map an error to its exit code.
///
/// Any domain error anywhere in the chain is caller misuse and maps to
/// [`DOMAIN`]; everything else is [`INVALID`].
pub fn for_error(err: &anyhow::Error) -> i32 {
    let is_domain = err.chain().any(|cause| {
        cause.is::<RecurrenceError>()
            || cause.is::<AverageError>()
            || cause.is::<SequenceError>()
            || cause.is::<RadixError>()
            || cause.is::<MaskError>()
    });
    if is_domain { DOMAIN } else { INVALID }
}
