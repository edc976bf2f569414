use crate::report::ErrorState;

/// How the process ends. Codes follow the BSD `sysexits.h` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Success,
    /// Malformed invocation (`EX_USAGE`).
    Usage,
    /// Lexical or syntax error in the script (`EX_DATAERR`).
    DataError,
    /// Runtime error while evaluating the script (`EX_SOFTWARE`).
    Software,
    /// The script or a standard stream could not be read or written (`EX_IOERR`).
    IoFailure,
}

impl ExitOutcome {
    pub fn code(self) -> i32 {
        match self {
            ExitOutcome::Success => 0,
            ExitOutcome::Usage => 64,
            ExitOutcome::DataError => 65,
            ExitOutcome::Software => 70,
            ExitOutcome::IoFailure => 74,
        }
    }
}

impl From<ErrorState> for ExitOutcome {
    fn from(state: ErrorState) -> Self {
        if state.had_error {
            ExitOutcome::DataError
        } else if state.had_runtime_error {
            ExitOutcome::Software
        } else {
            ExitOutcome::Success
        }
    }
}
