//! Linear disassembler over a code region.
//!
//! Walks the stream from a starting offset, decoding one instruction per
//! line. Bytes that do not decode as an opcode render as `.byte 0xNN` and
//! the walk advances by one, so a listing never stops at the first bad
//! byte. Used by the CLI's `-d` flag and by tests.

use crate::image::Image;
use crate::opcode::OpCode;
use crate::reader::{self, ReadError};

/// One decoded line of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisasmLine {
    /// Absolute offset of the first byte of the instruction.
    pub offset: usize,
    /// Mnemonic and rendered operands.
    pub text: String,
    /// The raw bytes consumed, as space-separated hex.
    pub bytes: String,
}

/// Disassemble up to `limit` instructions starting at absolute `start`.
pub fn disassemble(image: &Image, start: usize, limit: usize) -> Vec<DisasmLine> {
    let data = image.data();
    let mut lines = Vec::new();
    let mut pos = start;

    while pos < data.len() && lines.len() < limit {
        let offset = pos;
        let byte = data[pos];
        pos += 1;

        let Some(op) = OpCode::from_u8(byte) else {
            lines.push(DisasmLine {
                offset,
                text: format!(".byte 0x{byte:02X}"),
                bytes: hex(&data[offset..pos]),
            });
            continue;
        };

        let text = match operand_text(op, data, &mut pos) {
            Ok(Some(operand)) => format!("{} {}", op.mnemonic(), operand),
            Ok(None) => op.mnemonic().to_string(),
            Err(_) => {
                // Operand runs past the end; show what is left and stop.
                lines.push(DisasmLine {
                    offset,
                    text: format!("{} <truncated>", op.mnemonic()),
                    bytes: hex(&data[offset..]),
                });
                break;
            }
        };

        lines.push(DisasmLine {
            offset,
            text,
            bytes: hex(&data[offset..pos]),
        });
    }

    lines
}

fn operand_text(op: OpCode, data: &[u8], pos: &mut usize) -> Result<Option<String>, ReadError> {
    match op {
        OpCode::PushInt => Ok(Some(reader::read_u32(data, pos)?.to_string())),
        OpCode::PushFloat => Ok(Some(reader::read_f32(data, pos)?.to_string())),
        OpCode::PushStr => Ok(Some(format!("{:?}", reader::read_cstr(data, pos)?))),
        _ => Ok(None),
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
