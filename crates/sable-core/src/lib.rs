//! Core format types for the Sable virtual machine.
//!
//! This crate provides the binary side of the system, with no execution
//! semantics:
//! - Bounds-checked reads over a byte buffer
//! - The opcode set and its decoding
//! - The program image: header, symbol table, base-of-code
//! - A linear disassembler for inspection

pub mod disasm;
pub mod image;
pub mod opcode;
pub mod reader;

// Re-export commonly used types at crate root
pub use image::Image;
pub use opcode::OpCode;
pub use reader::ReadError;
