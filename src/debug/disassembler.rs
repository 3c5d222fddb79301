// 6502 disassembler, driven by the decode table
//
// Formats one instruction per call in the conventional layout (`LDA
// #$44`, `STA $0200,X`, ...). Memory-value annotations (`= 05`) are only
// added for addresses whose read has no side effects; the I/O windows are
// never touched.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::opcodes::OPCODE_TABLE;

/// One decoded instruction
#[derive(Debug, Clone)]
pub struct DisassembledInstruction {
    /// Address the instruction was read from
    pub pc: u16,
    /// Raw instruction bytes (1-3)
    pub bytes: Vec<u8>,
    /// Formatted text, unofficial opcodes prefixed with `*`
    pub text: String,
    /// Instruction length in bytes
    pub length: u8,
}

/// Whether reading this address perturbs machine state
fn side_effect_free(addr: u16) -> bool {
    // RAM and the cartridge windows are safe; PPU/APU/controller registers
    // are not
    addr < 0x2000 || addr >= 0x6000
}

/// Disassemble the instruction at `pc`
pub fn disassemble_instruction(bus: &mut Bus, pc: u16) -> DisassembledInstruction {
    let opcode = bus.read(pc);
    let info = &OPCODE_TABLE[opcode as usize];

    let mut bytes = vec![opcode];
    for i in 1..info.bytes {
        bytes.push(bus.read(pc.wrapping_add(i as u16)));
    }

    let operand8 = bytes.get(1).copied().unwrap_or(0);
    let operand16 = u16::from_le_bytes([operand8, bytes.get(2).copied().unwrap_or(0)]);

    let prefix = if info.unofficial { "*" } else { "" };
    let mnemonic = info.mnemonic;

    let body = match info.mode {
        AddressingMode::Implied => mnemonic.to_string(),
        AddressingMode::Accumulator => format!("{} A", mnemonic),
        AddressingMode::Immediate => format!("{} #${:02X}", mnemonic, operand8),
        AddressingMode::ZeroPage => {
            let annotation = annotate(bus, operand8 as u16);
            format!("{} ${:02X}{}", mnemonic, operand8, annotation)
        }
        AddressingMode::ZeroPageX => format!("{} ${:02X},X", mnemonic, operand8),
        AddressingMode::ZeroPageY => format!("{} ${:02X},Y", mnemonic, operand8),
        AddressingMode::Relative => {
            let target = pc
                .wrapping_add(2)
                .wrapping_add(operand8 as i8 as u16);
            format!("{} ${:04X}", mnemonic, target)
        }
        AddressingMode::Absolute => {
            if mnemonic == "JMP" || mnemonic == "JSR" {
                format!("{} ${:04X}", mnemonic, operand16)
            } else {
                let annotation = annotate(bus, operand16);
                format!("{} ${:04X}{}", mnemonic, operand16, annotation)
            }
        }
        AddressingMode::AbsoluteX => format!("{} ${:04X},X", mnemonic, operand16),
        AddressingMode::AbsoluteY => format!("{} ${:04X},Y", mnemonic, operand16),
        AddressingMode::Indirect => format!("{} (${:04X})", mnemonic, operand16),
        AddressingMode::IndexedIndirect => format!("{} (${:02X},X)", mnemonic, operand8),
        AddressingMode::IndirectIndexed => format!("{} (${:02X}),Y", mnemonic, operand8),
    };

    DisassembledInstruction {
        pc,
        bytes,
        text: format!("{}{}", prefix, body),
        length: info.bytes,
    }
}

/// Format a `= value` annotation when the read is safe
fn annotate(bus: &mut Bus, addr: u16) -> String {
    if side_effect_free(addr) {
        format!(" = {:02X}", bus.read(addr))
    } else {
        String::new()
    }
}
