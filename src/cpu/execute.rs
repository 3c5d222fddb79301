// CPU execution - the cycle-scheduled step loop and instruction dispatch
//
// `step` is called once per CPU cycle. An instruction executes atomically
// on the cycle its fetch becomes due; its full cost (base cycles plus any
// page-cross, branch or DMA-stall extras accumulated while executing) is
// then paid down one cycle per subsequent call.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::opcodes::OPCODE_TABLE;
use crate::cpu::{Cpu, CpuError};

impl Cpu {
    /// Advance the CPU by one cycle
    ///
    /// If cycles from a previous instruction remain, one is consumed.
    /// Otherwise the opcode at PC is fetched, decoded and executed, and
    /// its cycle cost is charged: `remaining_cycles` receives the total
    /// minus the cycle happening now, `total_cycles` receives all of it.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::IllegalOpcode` when PC points at a byte with no
    /// defined semantics.
    pub fn step(&mut self, bus: &mut Bus) -> Result<(), CpuError> {
        if self.remaining_cycles > 0 {
            self.remaining_cycles -= 1;
            return Ok(());
        }

        let pc = self.pc;
        let opcode = bus.read(pc);
        let info = &OPCODE_TABLE[opcode as usize];
        if !info.is_defined() {
            return Err(CpuError::IllegalOpcode { pc, opcode });
        }

        // Move past the opcode; addressing consumes the operand bytes
        self.pc = self.pc.wrapping_add(1);

        let addr = match info.mode {
            AddressingMode::Implied => self.addr_implied(),
            AddressingMode::Accumulator => self.addr_accumulator(),
            AddressingMode::Immediate => self.addr_immediate(bus),
            AddressingMode::ZeroPage => self.addr_zero_page(bus),
            AddressingMode::ZeroPageX => self.addr_zero_page_x(bus),
            AddressingMode::ZeroPageY => self.addr_zero_page_y(bus),
            AddressingMode::Relative => self.addr_relative(bus),
            AddressingMode::Absolute => self.addr_absolute(bus),
            AddressingMode::AbsoluteX => self.addr_absolute_x(bus),
            AddressingMode::AbsoluteY => self.addr_absolute_y(bus),
            AddressingMode::Indirect => self.addr_indirect(bus),
            AddressingMode::IndexedIndirect => self.addr_indexed_indirect(bus),
            AddressingMode::IndirectIndexed => self.addr_indirect_indexed(bus),
        };

        // Read opcodes pay for index displacements that cross a page
        if info.page_cycle && addr.page_crossed {
            self.additional_cycle += 1;
        }

        let branch_extra = self.execute_instruction(opcode, &addr, bus);
        self.additional_cycle += branch_extra as u16;

        let cycles = info.cycles as u32 + self.additional_cycle as u32;
        self.total_cycles = self.total_cycles.wrapping_add(cycles as u64);
        self.remaining_cycles = cycles - 1;
        self.additional_cycle = 0;

        Ok(())
    }

    /// Run cycles until the current instruction completes
    ///
    /// Convenience for instruction-granular harnesses (nestest, unit
    /// tests); returns the number of cycles spent.
    pub fn step_instruction(&mut self, bus: &mut Bus) -> Result<u32, CpuError> {
        let mut spent = 0;
        loop {
            self.step(bus)?;
            spent += 1;
            if self.remaining_cycles == 0 {
                return Ok(spent);
            }
        }
    }

    /// Dispatch an opcode to its instruction body
    ///
    /// Returns the extra cycles reported by branch instructions (taken /
    /// taken-across-a-page); every other instruction returns 0.
    #[allow(clippy::too_many_lines)]
    fn execute_instruction(
        &mut self,
        opcode: u8,
        addr: &crate::cpu::addressing::AddressingResult,
        bus: &mut Bus,
    ) -> u8 {
        match opcode {
            // Load/Store
            0xA9 | 0xA5 | 0xB5 | 0xAD | 0xBD | 0xB9 | 0xA1 | 0xB1 => self.lda(bus, addr),
            0xA2 | 0xA6 | 0xB6 | 0xAE | 0xBE => self.ldx(bus, addr),
            0xA0 | 0xA4 | 0xB4 | 0xAC | 0xBC => self.ldy(bus, addr),
            0x85 | 0x95 | 0x8D | 0x9D | 0x99 | 0x81 | 0x91 => self.sta(bus, addr),
            0x86 | 0x96 | 0x8E => self.stx(bus, addr),
            0x84 | 0x94 | 0x8C => self.sty(bus, addr),

            // Arithmetic
            0x69 | 0x65 | 0x75 | 0x6D | 0x7D | 0x79 | 0x61 | 0x71 => self.adc(bus, addr),
            0xE9 | 0xE5 | 0xF5 | 0xED | 0xFD | 0xF9 | 0xE1 | 0xF1 => self.sbc(bus, addr),
            0xE6 | 0xF6 | 0xEE | 0xFE => self.inc(bus, addr),
            0xE8 => self.inx(),
            0xC8 => self.iny(),
            0xC6 | 0xD6 | 0xCE | 0xDE => self.dec(bus, addr),
            0xCA => self.dex(),
            0x88 => self.dey(),

            // Logic
            0x29 | 0x25 | 0x35 | 0x2D | 0x3D | 0x39 | 0x21 | 0x31 => self.and(bus, addr),
            0x09 | 0x05 | 0x15 | 0x0D | 0x1D | 0x19 | 0x01 | 0x11 => self.ora(bus, addr),
            0x49 | 0x45 | 0x55 | 0x4D | 0x5D | 0x59 | 0x41 | 0x51 => self.eor(bus, addr),
            0x24 | 0x2C => self.bit(bus, addr),

            // Shift/Rotate
            0x0A => self.asl(bus, addr, true),
            0x06 | 0x16 | 0x0E | 0x1E => self.asl(bus, addr, false),
            0x4A => self.lsr(bus, addr, true),
            0x46 | 0x56 | 0x4E | 0x5E => self.lsr(bus, addr, false),
            0x2A => self.rol(bus, addr, true),
            0x26 | 0x36 | 0x2E | 0x3E => self.rol(bus, addr, false),
            0x6A => self.ror(bus, addr, true),
            0x66 | 0x76 | 0x6E | 0x7E => self.ror(bus, addr, false),

            // Compare
            0xC9 | 0xC5 | 0xD5 | 0xCD | 0xDD | 0xD9 | 0xC1 | 0xD1 => self.cmp(bus, addr),
            0xE0 | 0xE4 | 0xEC => self.cpx(bus, addr),
            0xC0 | 0xC4 | 0xCC => self.cpy(bus, addr),

            // Branches report their extra cycles
            0x90 => return self.bcc(addr),
            0xB0 => return self.bcs(addr),
            0xF0 => return self.beq(addr),
            0x30 => return self.bmi(addr),
            0xD0 => return self.bne(addr),
            0x10 => return self.bpl(addr),
            0x50 => return self.bvc(addr),
            0x70 => return self.bvs(addr),

            // Jumps and subroutines
            0x4C | 0x6C => self.jmp(addr),
            0x20 => self.jsr(bus, addr),
            0x60 => self.rts(bus),

            // Stack
            0x48 => self.pha(bus),
            0x68 => self.pla(bus),
            0x08 => self.php(bus),
            0x28 => self.plp(bus),
            0x9A => self.txs(),
            0xBA => self.tsx(),

            // Transfers
            0xAA => self.tax(),
            0xA8 => self.tay(),
            0x8A => self.txa(),
            0x98 => self.tya(),

            // Flags
            0x18 => self.clc(),
            0xD8 => self.cld(),
            0x58 => self.cli(),
            0xB8 => self.clv(),
            0x38 => self.sec(),
            0xF8 => self.sed(),
            0x78 => self.sei(),

            // Miscellaneous
            0x00 => self.brk(bus),
            0x40 => self.rti(bus),
            0xEA | 0x1A | 0x3A | 0x5A | 0x7A | 0xDA | 0xFA => self.nop(),

            // Unofficial: multi-byte NOPs still perform the operand read
            0x04 | 0x44 | 0x64 | 0x14 | 0x34 | 0x54 | 0x74 | 0xD4 | 0xF4 | 0x80 | 0x82
            | 0x89 | 0xC2 | 0xE2 | 0x0C | 0x1C | 0x3C | 0x5C | 0x7C | 0xDC | 0xFC => {
                self.nop_read(bus, addr)
            }

            // Unofficial: combined operations
            0xA7 | 0xB7 | 0xAF | 0xBF | 0xA3 | 0xB3 => self.lax(bus, addr),
            0x87 | 0x97 | 0x8F | 0x83 => self.sax(bus, addr),
            0xC7 | 0xD7 | 0xCF | 0xDF | 0xDB | 0xC3 | 0xD3 => self.dcp(bus, addr),
            0xE7 | 0xF7 | 0xEF | 0xFF | 0xFB | 0xE3 | 0xF3 => self.isc(bus, addr),
            0x07 | 0x17 | 0x0F | 0x1F | 0x1B | 0x03 | 0x13 => self.slo(bus, addr),
            0x27 | 0x37 | 0x2F | 0x3F | 0x3B | 0x23 | 0x33 => self.rla(bus, addr),
            0x47 | 0x57 | 0x4F | 0x5F | 0x5B | 0x43 | 0x53 => self.sre(bus, addr),
            0x67 | 0x77 | 0x6F | 0x7F | 0x7B | 0x63 | 0x73 => self.rra(bus, addr),
            0xEB => self.sbc(bus, addr),

            // Undefined bytes were rejected before dispatch
            _ => unreachable!("undefined opcode ${:02X} reached dispatch", opcode),
        }
        0
    }

    /// Render the nestest-format trace line for the instruction at PC
    ///
    /// Format:
    /// `PPPP  OP AA BB  MNEMONIC ...  A:aa X:xx Y:yy P:pp SP:ss PPU:lll,ccc CYC:n`
    pub fn trace(&self, bus: &mut Bus) -> String {
        let disasm = crate::debug::disassemble_instruction(bus, self.pc);

        let hex_bytes = disasm
            .bytes
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "{:04X}  {:<8}  {:<30}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} PPU:{:3},{:3} CYC:{}",
            self.pc,
            hex_bytes,
            disasm.text,
            self.a,
            self.x,
            self.y,
            self.status,
            self.sp,
            bus.ppu().line(),
            bus.ppu().dot(),
            self.total_cycles
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::{Cpu, CpuError};

    fn cpu_at(pc: u16) -> (Cpu, Bus) {
        let mut cpu = Cpu::new();
        cpu.pc = pc;
        (cpu, Bus::new())
    }

    #[test]
    fn test_step_pays_cycles_one_at_a_time() {
        let (mut cpu, mut bus) = cpu_at(0x8000);
        bus.write(0x8000, 0xA9); // LDA #$42 (2 cycles)
        bus.write(0x8001, 0x42);

        cpu.step(&mut bus).expect("fetch cycle");
        assert_eq!(cpu.a, 0x42, "instruction executed on the fetch cycle");
        assert_eq!(cpu.remaining_cycles, 1, "one cycle still owed");
        assert_eq!(cpu.total_cycles, 2);

        cpu.step(&mut bus).expect("payoff cycle");
        assert_eq!(cpu.remaining_cycles, 0);
        assert_eq!(cpu.total_cycles, 2, "no new cost while paying off");
    }

    #[test]
    fn test_step_instruction_returns_cycle_count() {
        let (mut cpu, mut bus) = cpu_at(0x8000);
        bus.write(0x8000, 0xA9);
        bus.write(0x8001, 0x42);

        let spent = cpu.step_instruction(&mut bus).expect("LDA");
        assert_eq!(spent, 2);
        assert_eq!(cpu.pc, 0x8002);
    }

    #[test]
    fn test_page_cross_adds_cycle_for_reads() {
        let (mut cpu, mut bus) = cpu_at(0x8000);
        cpu.x = 0x01;
        bus.write(0x8000, 0xBD); // LDA $02FF,X
        bus.write(0x8001, 0xFF);
        bus.write(0x8002, 0x02);
        bus.write(0x0300, 0x77);

        let spent = cpu.step_instruction(&mut bus).expect("LDA abs,X");
        assert_eq!(spent, 5, "4 base + 1 page cross");
        assert_eq!(cpu.a, 0x77);
    }

    #[test]
    fn test_store_never_pays_page_cross() {
        let (mut cpu, mut bus) = cpu_at(0x8000);
        cpu.x = 0x01;
        cpu.a = 0x55;
        bus.write(0x8000, 0x9D); // STA $02FF,X
        bus.write(0x8001, 0xFF);
        bus.write(0x8002, 0x02);

        let spent = cpu.step_instruction(&mut bus).expect("STA abs,X");
        assert_eq!(spent, 5, "flat 5 regardless of crossing");
        assert_eq!(bus.read(0x0300), 0x55);
    }

    #[test]
    fn test_illegal_opcode_is_fatal() {
        let (mut cpu, mut bus) = cpu_at(0x8000);
        bus.write(0x8000, 0x02); // JAM

        let err = cpu.step(&mut bus).expect_err("JAM must fail");
        assert_eq!(
            err,
            CpuError::IllegalOpcode {
                pc: 0x8000,
                opcode: 0x02
            }
        );
    }

    #[test]
    fn test_pc_advances_by_documented_length() {
        let (mut cpu, mut bus) = cpu_at(0x8000);
        // NOP (1), LDA #$01 (2), STA $1234 (3)
        bus.write(0x8000, 0xEA);
        bus.write(0x8001, 0xA9);
        bus.write(0x8002, 0x01);
        bus.write(0x8003, 0x8D);
        bus.write(0x8004, 0x34);
        bus.write(0x8005, 0x12);

        cpu.step_instruction(&mut bus).expect("NOP");
        assert_eq!(cpu.pc, 0x8001);
        cpu.step_instruction(&mut bus).expect("LDA");
        assert_eq!(cpu.pc, 0x8003);
        cpu.step_instruction(&mut bus).expect("STA");
        assert_eq!(cpu.pc, 0x8006);
    }

    #[test]
    fn test_total_cycles_accumulates_exactly() {
        let (mut cpu, mut bus) = cpu_at(0x8000);
        bus.write(0x8000, 0xA9); // LDA #imm: 2
        bus.write(0x8001, 0x10);
        bus.write(0x8002, 0x85); // STA zp: 3
        bus.write(0x8003, 0x20);
        bus.write(0x8004, 0xE6); // INC zp: 5
        bus.write(0x8005, 0x20);

        cpu.step_instruction(&mut bus).expect("LDA");
        cpu.step_instruction(&mut bus).expect("STA");
        cpu.step_instruction(&mut bus).expect("INC");
        assert_eq!(cpu.total_cycles, 10);
        assert_eq!(bus.read(0x0020), 0x11);
    }

    #[test]
    fn test_trace_format() {
        let (mut cpu, mut bus) = cpu_at(0xC000);
        bus.write(0xC000, 0x4C); // JMP $C5F5
        bus.write(0xC001, 0xF5);
        bus.write(0xC002, 0xC5);
        cpu.total_cycles = 7;

        let line = cpu.trace(&mut bus);
        assert!(line.starts_with("C000  4C F5 C5"), "got: {}", line);
        assert!(line.contains("JMP $C5F5"));
        assert!(line.contains("A:00 X:00 Y:00 P:24 SP:FD"));
        assert!(line.contains("CYC:7"));
    }
}
