//! Error handling and exit codes.

use fibscroll_core::exit_codes;
use fibscroll_core::ConfigError;

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.chain().any(|cause| cause.is::<ConfigError>()) {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}
