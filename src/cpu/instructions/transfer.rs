// Register transfer instructions: TAX, TAY, TXA, TYA

use crate::cpu::Cpu;

impl Cpu {
    /// TAX - transfer A to X
    pub(crate) fn tax(&mut self) {
        self.x = self.a;
        self.update_zero_and_negative_flags(self.x);
    }

    /// TAY - transfer A to Y
    pub(crate) fn tay(&mut self) {
        self.y = self.a;
        self.update_zero_and_negative_flags(self.y);
    }

    /// TXA - transfer X to A
    pub(crate) fn txa(&mut self) {
        self.a = self.x;
        self.update_zero_and_negative_flags(self.a);
    }

    /// TYA - transfer Y to A
    pub(crate) fn tya(&mut self) {
        self.a = self.y;
        self.update_zero_and_negative_flags(self.a);
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::{flags, Cpu};

    fn run_program(program: &[u8]) -> (Cpu, Bus) {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        for (i, &byte) in program.iter().enumerate() {
            bus.write(0x8000 + i as u16, byte);
        }
        cpu.pc = 0x8000;
        (cpu, bus)
    }

    #[test]
    fn test_tax_tay() {
        let (mut cpu, mut bus) = run_program(&[0xAA, 0xA8]);
        cpu.a = 0x42;
        cpu.step_instruction(&mut bus).expect("TAX");
        cpu.step_instruction(&mut bus).expect("TAY");
        assert_eq!(cpu.x, 0x42);
        assert_eq!(cpu.y, 0x42);
    }

    #[test]
    fn test_txa_tya() {
        let (mut cpu, mut bus) = run_program(&[0x8A, 0x98]);
        cpu.x = 0x11;
        cpu.y = 0x22;
        cpu.step_instruction(&mut bus).expect("TXA");
        assert_eq!(cpu.a, 0x11);
        cpu.step_instruction(&mut bus).expect("TYA");
        assert_eq!(cpu.a, 0x22);
    }

    #[test]
    fn test_transfer_flags() {
        let (mut cpu, mut bus) = run_program(&[0xAA]);
        cpu.a = 0x00;
        cpu.step_instruction(&mut bus).expect("TAX");
        assert!(cpu.get_flag(flags::ZERO));

        let (mut cpu, mut bus) = run_program(&[0xA8]);
        cpu.a = 0x90;
        cpu.step_instruction(&mut bus).expect("TAY");
        assert!(cpu.get_flag(flags::NEGATIVE));
    }
}
