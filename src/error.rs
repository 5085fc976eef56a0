use thiserror::Error;

use crate::decode::ExtensionOp;
use crate::memory::TypeAddr;

/// Failures raised while running one interpreter cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CycleError {
    /// The word matches no instruction family.
    #[error("unknown instruction {word:04X} at {pc:#05x}")]
    UnknownInstruction { word: u16, pc: TypeAddr },
    /// A recognised instruction with no handler in this interpreter.
    #[error("unimplemented instruction {op:?} at {pc:#05x}")]
    Unimplemented { op: ExtensionOp, pc: TypeAddr },
    #[error("call stack overflow at {pc:#05x}")]
    StackOverflow { pc: TypeAddr },
    #[error("call stack underflow at {pc:#05x}")]
    StackUnderflow { pc: TypeAddr },
    #[error("interpreter halted after a fatal error")]
    Halted,
}

impl CycleError {
    /// Fatal errors stop the interpreter; the others only skip the word.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::StackOverflow { .. } | Self::StackUnderflow { .. } | Self::Halted
        )
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("rom is {len} bytes but only {max} fit in program memory")]
    Capacity { len: usize, max: usize },
    #[error("failed to read rom")]
    Io(#[from] std::io::Error),
}
