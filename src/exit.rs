// src/exit.rs
//! Standardized process exit codes for `usecompass`.
//!
//! Provides a stable contract for CI scripts.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum UsecompassExit {
    /// Every requested check passed.
    Success = 0,
    /// At least one violation was reported.
    ViolationsFound = 1,
    /// Operational failure (I/O, malformed config, bad arguments).
    Error = 2,
}

impl UsecompassExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for UsecompassExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_and_stable() {
        assert_eq!(UsecompassExit::Success.code(), 0);
        assert_eq!(UsecompassExit::ViolationsFound.code(), 1);
        assert_eq!(UsecompassExit::Error.code(), 2);
    }
}
