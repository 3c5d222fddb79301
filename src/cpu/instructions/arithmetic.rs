// Arithmetic instructions: ADC, SBC, INC/DEC and the register steppers

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// Shared adder for ADC/SBC (SBC adds the one's complement)
    ///
    /// C is carry out of bit 7; V is set when both inputs share a sign the
    /// result does not. The NES 2A03 has no decimal mode, so D is ignored.
    pub(crate) fn add_with_carry(&mut self, value: u8) {
        let carry = self.get_flag(flags::CARRY) as u16;
        let sum = self.a as u16 + value as u16 + carry;
        let result = (sum & 0xFF) as u8;

        self.update_flag(flags::CARRY, sum > 0xFF);
        self.update_flag(
            flags::OVERFLOW,
            (self.a ^ result) & (value ^ result) & 0x80 != 0,
        );
        self.a = result;
        self.update_zero_and_negative_flags(result);
    }

    /// ADC - add memory and carry to the accumulator
    pub(crate) fn adc(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = self.operand(bus, addr);
        self.add_with_carry(value);
    }

    /// SBC - subtract memory and borrow from the accumulator
    pub(crate) fn sbc(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = self.operand(bus, addr);
        self.add_with_carry(!value);
    }

    /// INC - increment memory
    pub(crate) fn inc(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = bus.read(addr.address).wrapping_add(1);
        self.store(bus, addr.address, value);
        self.update_zero_and_negative_flags(value);
    }

    /// DEC - decrement memory
    pub(crate) fn dec(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = bus.read(addr.address).wrapping_sub(1);
        self.store(bus, addr.address, value);
        self.update_zero_and_negative_flags(value);
    }

    /// INX - increment X
    pub(crate) fn inx(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative_flags(self.x);
    }

    /// INY - increment Y
    pub(crate) fn iny(&mut self) {
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative_flags(self.y);
    }

    /// DEX - decrement X
    pub(crate) fn dex(&mut self) {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.x);
    }

    /// DEY - decrement Y
    pub(crate) fn dey(&mut self) {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.y);
    }
}
