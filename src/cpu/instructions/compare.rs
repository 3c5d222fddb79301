// Compare instructions: CMP, CPX, CPY

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// Shared comparison: C when lhs >= rhs, Z on equality, N from bit 7
    /// of the 8-bit difference
    pub(crate) fn compare(&mut self, lhs: u8, rhs: u8) {
        let result = lhs.wrapping_sub(rhs);
        self.update_flag(flags::CARRY, lhs >= rhs);
        self.update_zero_and_negative_flags(result);
    }

    /// CMP - compare accumulator with memory
    pub(crate) fn cmp(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = self.operand(bus, addr);
        self.compare(self.a, value);
    }

    /// CPX - compare X with memory
    pub(crate) fn cpx(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = self.operand(bus, addr);
        self.compare(self.x, value);
    }

    /// CPY - compare Y with memory
    pub(crate) fn cpy(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = self.operand(bus, addr);
        self.compare(self.y, value);
    }
}
