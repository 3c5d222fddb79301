// Load and store instructions: LDA, LDX, LDY, STA, STX, STY

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// LDA - load accumulator, setting Z and N
    pub(crate) fn lda(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = self.operand(bus, addr);
        self.a = value;
        self.update_zero_and_negative_flags(value);
    }

    /// LDX - load X, setting Z and N
    pub(crate) fn ldx(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = self.operand(bus, addr);
        self.x = value;
        self.update_zero_and_negative_flags(value);
    }

    /// LDY - load Y, setting Z and N
    pub(crate) fn ldy(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = self.operand(bus, addr);
        self.y = value;
        self.update_zero_and_negative_flags(value);
    }

    /// STA - store accumulator; flags untouched
    pub(crate) fn sta(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        self.store(bus, addr.address, self.a);
    }

    /// STX - store X; flags untouched
    pub(crate) fn stx(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        self.store(bus, addr.address, self.x);
    }

    /// STY - store Y; flags untouched
    pub(crate) fn sty(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        self.store(bus, addr.address, self.y);
    }
}
