// Opcode table - static decode metadata for all 256 opcode bytes
//
// Each entry carries the mnemonic, addressing mode, instruction length,
// base cycle cost and whether an index page crossing adds a cycle. Read
// opcodes opt into the page-cross cycle; stores and read-modify-write
// opcodes never do. Entries left at `UNDEFINED` (cycle count 0) are the
// JAM/unstable bytes with no supported semantics; fetching one is a fatal
// error.
//
// The common unofficial opcodes (LAX, SAX, DCP, ISC, SLO, RLA, SRE, RRA,
// the DOP/TOP multi-byte NOPs and SBC $EB) are first-class entries, marked
// so the disassembler can flag them.

use crate::cpu::addressing::AddressingMode;

/// Decode metadata for one opcode byte
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    /// Three-letter mnemonic ("???" for undefined bytes)
    pub mnemonic: &'static str,
    /// Addressing mode
    pub mode: AddressingMode,
    /// Instruction length in bytes, opcode included
    pub bytes: u8,
    /// Base cycle cost; 0 marks an undefined byte
    pub cycles: u8,
    /// Whether an index page crossing adds one cycle
    pub page_cycle: bool,
    /// Whether this is an unofficial opcode
    pub unofficial: bool,
}

impl OpcodeInfo {
    /// Whether this byte has defined semantics
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.cycles != 0
    }
}

/// Placeholder for bytes with no supported semantics
const UNDEFINED: OpcodeInfo = OpcodeInfo {
    mnemonic: "???",
    mode: AddressingMode::Implied,
    bytes: 1,
    cycles: 0,
    page_cycle: false,
    unofficial: false,
};

const fn op(
    mnemonic: &'static str,
    mode: AddressingMode,
    bytes: u8,
    cycles: u8,
    page_cycle: bool,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        bytes,
        cycles,
        page_cycle,
        unofficial: false,
    }
}

const fn unof(
    mnemonic: &'static str,
    mode: AddressingMode,
    bytes: u8,
    cycles: u8,
    page_cycle: bool,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        bytes,
        cycles,
        page_cycle,
        unofficial: true,
    }
}

/// The 256-entry decode table, indexed by opcode byte
pub static OPCODE_TABLE: [OpcodeInfo; 256] = build_opcode_table();

#[allow(clippy::too_many_lines)]
const fn build_opcode_table() -> [OpcodeInfo; 256] {
    use AddressingMode::*;
    let mut t = [UNDEFINED; 256];

    // ADC - add with carry
    t[0x69] = op("ADC", Immediate, 2, 2, false);
    t[0x65] = op("ADC", ZeroPage, 2, 3, false);
    t[0x75] = op("ADC", ZeroPageX, 2, 4, false);
    t[0x6D] = op("ADC", Absolute, 3, 4, false);
    t[0x7D] = op("ADC", AbsoluteX, 3, 4, true);
    t[0x79] = op("ADC", AbsoluteY, 3, 4, true);
    t[0x61] = op("ADC", IndexedIndirect, 2, 6, false);
    t[0x71] = op("ADC", IndirectIndexed, 2, 5, true);

    // AND - bitwise and
    t[0x29] = op("AND", Immediate, 2, 2, false);
    t[0x25] = op("AND", ZeroPage, 2, 3, false);
    t[0x35] = op("AND", ZeroPageX, 2, 4, false);
    t[0x2D] = op("AND", Absolute, 3, 4, false);
    t[0x3D] = op("AND", AbsoluteX, 3, 4, true);
    t[0x39] = op("AND", AbsoluteY, 3, 4, true);
    t[0x21] = op("AND", IndexedIndirect, 2, 6, false);
    t[0x31] = op("AND", IndirectIndexed, 2, 5, true);

    // ASL - arithmetic shift left
    t[0x0A] = op("ASL", Accumulator, 1, 2, false);
    t[0x06] = op("ASL", ZeroPage, 2, 5, false);
    t[0x16] = op("ASL", ZeroPageX, 2, 6, false);
    t[0x0E] = op("ASL", Absolute, 3, 6, false);
    t[0x1E] = op("ASL", AbsoluteX, 3, 7, false);

    // Branches: base 2 cycles; taken/page-cross extras added at execution
    t[0x10] = op("BPL", Relative, 2, 2, false);
    t[0x30] = op("BMI", Relative, 2, 2, false);
    t[0x50] = op("BVC", Relative, 2, 2, false);
    t[0x70] = op("BVS", Relative, 2, 2, false);
    t[0x90] = op("BCC", Relative, 2, 2, false);
    t[0xB0] = op("BCS", Relative, 2, 2, false);
    t[0xD0] = op("BNE", Relative, 2, 2, false);
    t[0xF0] = op("BEQ", Relative, 2, 2, false);

    // BIT - bit test
    t[0x24] = op("BIT", ZeroPage, 2, 3, false);
    t[0x2C] = op("BIT", Absolute, 3, 4, false);

    // BRK - software interrupt
    t[0x00] = op("BRK", Implied, 1, 7, false);

    // Flag operations
    t[0x18] = op("CLC", Implied, 1, 2, false);
    t[0x38] = op("SEC", Implied, 1, 2, false);
    t[0x58] = op("CLI", Implied, 1, 2, false);
    t[0x78] = op("SEI", Implied, 1, 2, false);
    t[0xB8] = op("CLV", Implied, 1, 2, false);
    t[0xD8] = op("CLD", Implied, 1, 2, false);
    t[0xF8] = op("SED", Implied, 1, 2, false);

    // CMP - compare accumulator
    t[0xC9] = op("CMP", Immediate, 2, 2, false);
    t[0xC5] = op("CMP", ZeroPage, 2, 3, false);
    t[0xD5] = op("CMP", ZeroPageX, 2, 4, false);
    t[0xCD] = op("CMP", Absolute, 3, 4, false);
    t[0xDD] = op("CMP", AbsoluteX, 3, 4, true);
    t[0xD9] = op("CMP", AbsoluteY, 3, 4, true);
    t[0xC1] = op("CMP", IndexedIndirect, 2, 6, false);
    t[0xD1] = op("CMP", IndirectIndexed, 2, 5, true);

    // CPX / CPY - compare index registers
    t[0xE0] = op("CPX", Immediate, 2, 2, false);
    t[0xE4] = op("CPX", ZeroPage, 2, 3, false);
    t[0xEC] = op("CPX", Absolute, 3, 4, false);
    t[0xC0] = op("CPY", Immediate, 2, 2, false);
    t[0xC4] = op("CPY", ZeroPage, 2, 3, false);
    t[0xCC] = op("CPY", Absolute, 3, 4, false);

    // DEC - decrement memory
    t[0xC6] = op("DEC", ZeroPage, 2, 5, false);
    t[0xD6] = op("DEC", ZeroPageX, 2, 6, false);
    t[0xCE] = op("DEC", Absolute, 3, 6, false);
    t[0xDE] = op("DEC", AbsoluteX, 3, 7, false);
    t[0xCA] = op("DEX", Implied, 1, 2, false);
    t[0x88] = op("DEY", Implied, 1, 2, false);

    // EOR - bitwise exclusive or
    t[0x49] = op("EOR", Immediate, 2, 2, false);
    t[0x45] = op("EOR", ZeroPage, 2, 3, false);
    t[0x55] = op("EOR", ZeroPageX, 2, 4, false);
    t[0x4D] = op("EOR", Absolute, 3, 4, false);
    t[0x5D] = op("EOR", AbsoluteX, 3, 4, true);
    t[0x59] = op("EOR", AbsoluteY, 3, 4, true);
    t[0x41] = op("EOR", IndexedIndirect, 2, 6, false);
    t[0x51] = op("EOR", IndirectIndexed, 2, 5, true);

    // INC - increment memory
    t[0xE6] = op("INC", ZeroPage, 2, 5, false);
    t[0xF6] = op("INC", ZeroPageX, 2, 6, false);
    t[0xEE] = op("INC", Absolute, 3, 6, false);
    t[0xFE] = op("INC", AbsoluteX, 3, 7, false);
    t[0xE8] = op("INX", Implied, 1, 2, false);
    t[0xC8] = op("INY", Implied, 1, 2, false);

    // JMP / JSR / RTS / RTI
    t[0x4C] = op("JMP", Absolute, 3, 3, false);
    t[0x6C] = op("JMP", Indirect, 3, 5, false);
    t[0x20] = op("JSR", Absolute, 3, 6, false);
    t[0x60] = op("RTS", Implied, 1, 6, false);
    t[0x40] = op("RTI", Implied, 1, 6, false);

    // LDA - load accumulator
    t[0xA9] = op("LDA", Immediate, 2, 2, false);
    t[0xA5] = op("LDA", ZeroPage, 2, 3, false);
    t[0xB5] = op("LDA", ZeroPageX, 2, 4, false);
    t[0xAD] = op("LDA", Absolute, 3, 4, false);
    t[0xBD] = op("LDA", AbsoluteX, 3, 4, true);
    t[0xB9] = op("LDA", AbsoluteY, 3, 4, true);
    t[0xA1] = op("LDA", IndexedIndirect, 2, 6, false);
    t[0xB1] = op("LDA", IndirectIndexed, 2, 5, true);

    // LDX - load X
    t[0xA2] = op("LDX", Immediate, 2, 2, false);
    t[0xA6] = op("LDX", ZeroPage, 2, 3, false);
    t[0xB6] = op("LDX", ZeroPageY, 2, 4, false);
    t[0xAE] = op("LDX", Absolute, 3, 4, false);
    t[0xBE] = op("LDX", AbsoluteY, 3, 4, true);

    // LDY - load Y
    t[0xA0] = op("LDY", Immediate, 2, 2, false);
    t[0xA4] = op("LDY", ZeroPage, 2, 3, false);
    t[0xB4] = op("LDY", ZeroPageX, 2, 4, false);
    t[0xAC] = op("LDY", Absolute, 3, 4, false);
    t[0xBC] = op("LDY", AbsoluteX, 3, 4, true);

    // LSR - logical shift right
    t[0x4A] = op("LSR", Accumulator, 1, 2, false);
    t[0x46] = op("LSR", ZeroPage, 2, 5, false);
    t[0x56] = op("LSR", ZeroPageX, 2, 6, false);
    t[0x4E] = op("LSR", Absolute, 3, 6, false);
    t[0x5E] = op("LSR", AbsoluteX, 3, 7, false);

    // NOP
    t[0xEA] = op("NOP", Implied, 1, 2, false);

    // ORA - bitwise or
    t[0x09] = op("ORA", Immediate, 2, 2, false);
    t[0x05] = op("ORA", ZeroPage, 2, 3, false);
    t[0x15] = op("ORA", ZeroPageX, 2, 4, false);
    t[0x0D] = op("ORA", Absolute, 3, 4, false);
    t[0x1D] = op("ORA", AbsoluteX, 3, 4, true);
    t[0x19] = op("ORA", AbsoluteY, 3, 4, true);
    t[0x01] = op("ORA", IndexedIndirect, 2, 6, false);
    t[0x11] = op("ORA", IndirectIndexed, 2, 5, true);

    // Stack operations
    t[0x48] = op("PHA", Implied, 1, 3, false);
    t[0x08] = op("PHP", Implied, 1, 3, false);
    t[0x68] = op("PLA", Implied, 1, 4, false);
    t[0x28] = op("PLP", Implied, 1, 4, false);
    t[0x9A] = op("TXS", Implied, 1, 2, false);
    t[0xBA] = op("TSX", Implied, 1, 2, false);

    // ROL / ROR - rotate
    t[0x2A] = op("ROL", Accumulator, 1, 2, false);
    t[0x26] = op("ROL", ZeroPage, 2, 5, false);
    t[0x36] = op("ROL", ZeroPageX, 2, 6, false);
    t[0x2E] = op("ROL", Absolute, 3, 6, false);
    t[0x3E] = op("ROL", AbsoluteX, 3, 7, false);
    t[0x6A] = op("ROR", Accumulator, 1, 2, false);
    t[0x66] = op("ROR", ZeroPage, 2, 5, false);
    t[0x76] = op("ROR", ZeroPageX, 2, 6, false);
    t[0x6E] = op("ROR", Absolute, 3, 6, false);
    t[0x7E] = op("ROR", AbsoluteX, 3, 7, false);

    // SBC - subtract with carry
    t[0xE9] = op("SBC", Immediate, 2, 2, false);
    t[0xE5] = op("SBC", ZeroPage, 2, 3, false);
    t[0xF5] = op("SBC", ZeroPageX, 2, 4, false);
    t[0xED] = op("SBC", Absolute, 3, 4, false);
    t[0xFD] = op("SBC", AbsoluteX, 3, 4, true);
    t[0xF9] = op("SBC", AbsoluteY, 3, 4, true);
    t[0xE1] = op("SBC", IndexedIndirect, 2, 6, false);
    t[0xF1] = op("SBC", IndirectIndexed, 2, 5, true);

    // STA - store accumulator (no page-cross cycle, ever)
    t[0x85] = op("STA", ZeroPage, 2, 3, false);
    t[0x95] = op("STA", ZeroPageX, 2, 4, false);
    t[0x8D] = op("STA", Absolute, 3, 4, false);
    t[0x9D] = op("STA", AbsoluteX, 3, 5, false);
    t[0x99] = op("STA", AbsoluteY, 3, 5, false);
    t[0x81] = op("STA", IndexedIndirect, 2, 6, false);
    t[0x91] = op("STA", IndirectIndexed, 2, 6, false);

    // STX / STY
    t[0x86] = op("STX", ZeroPage, 2, 3, false);
    t[0x96] = op("STX", ZeroPageY, 2, 4, false);
    t[0x8E] = op("STX", Absolute, 3, 4, false);
    t[0x84] = op("STY", ZeroPage, 2, 3, false);
    t[0x94] = op("STY", ZeroPageX, 2, 4, false);
    t[0x8C] = op("STY", Absolute, 3, 4, false);

    // Register transfers
    t[0xAA] = op("TAX", Implied, 1, 2, false);
    t[0xA8] = op("TAY", Implied, 1, 2, false);
    t[0x8A] = op("TXA", Implied, 1, 2, false);
    t[0x98] = op("TYA", Implied, 1, 2, false);

    // ----------------------------------------
    // Unofficial opcodes
    // ----------------------------------------

    // Single-byte NOPs
    t[0x1A] = unof("NOP", Implied, 1, 2, false);
    t[0x3A] = unof("NOP", Implied, 1, 2, false);
    t[0x5A] = unof("NOP", Implied, 1, 2, false);
    t[0x7A] = unof("NOP", Implied, 1, 2, false);
    t[0xDA] = unof("NOP", Implied, 1, 2, false);
    t[0xFA] = unof("NOP", Implied, 1, 2, false);

    // DOP - double-byte NOPs (the operand is fetched and discarded)
    t[0x04] = unof("NOP", ZeroPage, 2, 3, false);
    t[0x44] = unof("NOP", ZeroPage, 2, 3, false);
    t[0x64] = unof("NOP", ZeroPage, 2, 3, false);
    t[0x14] = unof("NOP", ZeroPageX, 2, 4, false);
    t[0x34] = unof("NOP", ZeroPageX, 2, 4, false);
    t[0x54] = unof("NOP", ZeroPageX, 2, 4, false);
    t[0x74] = unof("NOP", ZeroPageX, 2, 4, false);
    t[0xD4] = unof("NOP", ZeroPageX, 2, 4, false);
    t[0xF4] = unof("NOP", ZeroPageX, 2, 4, false);
    t[0x80] = unof("NOP", Immediate, 2, 2, false);
    t[0x82] = unof("NOP", Immediate, 2, 2, false);
    t[0x89] = unof("NOP", Immediate, 2, 2, false);
    t[0xC2] = unof("NOP", Immediate, 2, 2, false);
    t[0xE2] = unof("NOP", Immediate, 2, 2, false);

    // TOP - triple-byte NOPs; the indexed forms pay the page-cross cycle
    t[0x0C] = unof("NOP", Absolute, 3, 4, false);
    t[0x1C] = unof("NOP", AbsoluteX, 3, 4, true);
    t[0x3C] = unof("NOP", AbsoluteX, 3, 4, true);
    t[0x5C] = unof("NOP", AbsoluteX, 3, 4, true);
    t[0x7C] = unof("NOP", AbsoluteX, 3, 4, true);
    t[0xDC] = unof("NOP", AbsoluteX, 3, 4, true);
    t[0xFC] = unof("NOP", AbsoluteX, 3, 4, true);

    // LAX - LDA then TAX
    t[0xA7] = unof("LAX", ZeroPage, 2, 3, false);
    t[0xB7] = unof("LAX", ZeroPageY, 2, 4, false);
    t[0xAF] = unof("LAX", Absolute, 3, 4, false);
    t[0xBF] = unof("LAX", AbsoluteY, 3, 4, true);
    t[0xA3] = unof("LAX", IndexedIndirect, 2, 6, false);
    t[0xB3] = unof("LAX", IndirectIndexed, 2, 5, true);

    // SAX - store A AND X
    t[0x87] = unof("SAX", ZeroPage, 2, 3, false);
    t[0x97] = unof("SAX", ZeroPageY, 2, 4, false);
    t[0x8F] = unof("SAX", Absolute, 3, 4, false);
    t[0x83] = unof("SAX", IndexedIndirect, 2, 6, false);

    // DCP - DEC then CMP
    t[0xC7] = unof("DCP", ZeroPage, 2, 5, false);
    t[0xD7] = unof("DCP", ZeroPageX, 2, 6, false);
    t[0xCF] = unof("DCP", Absolute, 3, 6, false);
    t[0xDF] = unof("DCP", AbsoluteX, 3, 7, false);
    t[0xDB] = unof("DCP", AbsoluteY, 3, 7, false);
    t[0xC3] = unof("DCP", IndexedIndirect, 2, 8, false);
    t[0xD3] = unof("DCP", IndirectIndexed, 2, 8, false);

    // ISC - INC then SBC
    t[0xE7] = unof("ISB", ZeroPage, 2, 5, false);
    t[0xF7] = unof("ISB", ZeroPageX, 2, 6, false);
    t[0xEF] = unof("ISB", Absolute, 3, 6, false);
    t[0xFF] = unof("ISB", AbsoluteX, 3, 7, false);
    t[0xFB] = unof("ISB", AbsoluteY, 3, 7, false);
    t[0xE3] = unof("ISB", IndexedIndirect, 2, 8, false);
    t[0xF3] = unof("ISB", IndirectIndexed, 2, 8, false);

    // SLO - ASL then ORA
    t[0x07] = unof("SLO", ZeroPage, 2, 5, false);
    t[0x17] = unof("SLO", ZeroPageX, 2, 6, false);
    t[0x0F] = unof("SLO", Absolute, 3, 6, false);
    t[0x1F] = unof("SLO", AbsoluteX, 3, 7, false);
    t[0x1B] = unof("SLO", AbsoluteY, 3, 7, false);
    t[0x03] = unof("SLO", IndexedIndirect, 2, 8, false);
    t[0x13] = unof("SLO", IndirectIndexed, 2, 8, false);

    // RLA - ROL then AND
    t[0x27] = unof("RLA", ZeroPage, 2, 5, false);
    t[0x37] = unof("RLA", ZeroPageX, 2, 6, false);
    t[0x2F] = unof("RLA", Absolute, 3, 6, false);
    t[0x3F] = unof("RLA", AbsoluteX, 3, 7, false);
    t[0x3B] = unof("RLA", AbsoluteY, 3, 7, false);
    t[0x23] = unof("RLA", IndexedIndirect, 2, 8, false);
    t[0x33] = unof("RLA", IndirectIndexed, 2, 8, false);

    // SRE - LSR then EOR
    t[0x47] = unof("SRE", ZeroPage, 2, 5, false);
    t[0x57] = unof("SRE", ZeroPageX, 2, 6, false);
    t[0x4F] = unof("SRE", Absolute, 3, 6, false);
    t[0x5F] = unof("SRE", AbsoluteX, 3, 7, false);
    t[0x5B] = unof("SRE", AbsoluteY, 3, 7, false);
    t[0x43] = unof("SRE", IndexedIndirect, 2, 8, false);
    t[0x53] = unof("SRE", IndirectIndexed, 2, 8, false);

    // RRA - ROR then ADC
    t[0x67] = unof("RRA", ZeroPage, 2, 5, false);
    t[0x77] = unof("RRA", ZeroPageX, 2, 6, false);
    t[0x6F] = unof("RRA", Absolute, 3, 6, false);
    t[0x7F] = unof("RRA", AbsoluteX, 3, 7, false);
    t[0x7B] = unof("RRA", AbsoluteY, 3, 7, false);
    t[0x63] = unof("RRA", IndexedIndirect, 2, 8, false);
    t[0x73] = unof("RRA", IndirectIndexed, 2, 8, false);

    // SBC alias
    t[0xEB] = unof("SBC", Immediate, 2, 2, false);

    t
}
