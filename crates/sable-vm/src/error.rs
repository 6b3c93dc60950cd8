use std::io;

use sable_core::ReadError;
use thiserror::Error;

/// A fatal fault during loading or execution.
///
/// Faults terminate the current run: none are retried or recovered
/// internally. Each variant carries the absolute stream offset of the
/// faulting instruction, and dispatch-time variants carry the opcode byte,
/// so a host can report "bad opcode at offset X".
#[derive(Debug, Error)]
pub enum Fault {
    /// The header or an inline operand needed more bytes than remain, or a
    /// string field was malformed. `opcode` is `None` for load-time faults.
    #[error("{source}")]
    Decode {
        opcode: Option<u8>,
        source: ReadError,
    },

    /// Unrecognized byte at dispatch position.
    #[error("bad opcode 0x{opcode:02X} at offset {at}")]
    UnknownOpcode { opcode: u8, at: usize },

    /// Pop on an empty operand stack.
    #[error("stack underflow at offset {at} (opcode 0x{opcode:02X})")]
    StackUnderflow { opcode: u8, at: usize },

    /// Push past the configured operand-stack limit.
    #[error("stack overflow at offset {at} (opcode 0x{opcode:02X})")]
    StackOverflow { opcode: u8, at: usize },

    /// Arithmetic between incompatible value kinds.
    #[error("unsupported operand types for {op}: {lhs} {op} {rhs} (offset {at})")]
    TypeMismatch {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
        at: usize,
    },

    /// Division with a zero divisor.
    #[error("division by zero at offset {at}")]
    DivisionByZero { at: usize },

    /// Jump with a non-integer address on the stack.
    #[error("jump target must be an int, got {found} (offset {at})")]
    InvalidJumpTarget { found: &'static str, at: usize },

    /// The print side-channel failed.
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

impl Fault {
    /// The absolute stream offset at the point of fault, if positional.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Fault::Decode { source, .. } => Some(source.offset()),
            Fault::UnknownOpcode { at, .. }
            | Fault::StackUnderflow { at, .. }
            | Fault::StackOverflow { at, .. }
            | Fault::TypeMismatch { at, .. }
            | Fault::DivisionByZero { at }
            | Fault::InvalidJumpTarget { at, .. } => Some(*at),
            Fault::Io(_) => None,
        }
    }

    /// The opcode being executed at the point of fault, if any.
    pub fn opcode(&self) -> Option<u8> {
        match self {
            Fault::Decode { opcode, .. } => *opcode,
            Fault::UnknownOpcode { opcode, .. }
            | Fault::StackUnderflow { opcode, .. }
            | Fault::StackOverflow { opcode, .. } => Some(*opcode),
            _ => None,
        }
    }
}
