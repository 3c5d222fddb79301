// Debug module - disassembly and the nestest log comparator

mod disassembler;
mod test_log;

pub use disassembler::{disassemble_instruction, DisassembledInstruction};
pub use test_log::{LogFields, TraceError, TraceLog};
