//! Sable Virtual Machine
//!
//! This crate provides the execution engine for Sable bytecode: a
//! stack-based interpreter over a loaded program image.
//!
//! # Architecture
//!
//! The engine handles:
//! - Operand stack management (push/pop with a depth limit)
//! - The decode-dispatch-execute loop
//! - Named-variable frames for `store`/`load`
//! - Symbol-based entry via `call`
//! - The `print` side-channel
//!
//! The binary format itself (header, symbol table, opcodes) lives in
//! `sable-core`; this crate only consumes it.
//!
//! # Example
//!
//! ```ignore
//! use sable_vm::Machine;
//!
//! let bytes = std::fs::read("script.sbc")?;
//! let mut vm = Machine::new(bytes)?;
//!
//! // Run from the image's declared entry point...
//! vm.run(None)?;
//!
//! // ...or from a named symbol. Unknown names are a silent no-op.
//! vm.call("on_load")?;
//! ```

mod error;
mod frame;
mod machine;
mod value;

// Re-export public types
pub use error::Fault;
pub use frame::Frame;
pub use machine::{DEFAULT_ENTRY, Machine, State};
pub use value::Value;
