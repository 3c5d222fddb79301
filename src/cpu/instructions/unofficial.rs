// Unofficial opcodes with stable, widely-relied-on semantics
//
// Each is the documented combination of two official operations sharing
// one memory access: LAX = LDA+TAX, SAX = store A AND X, DCP = DEC+CMP,
// ISB = INC+SBC, SLO = ASL+ORA, RLA = ROL+AND, SRE = LSR+EOR and
// RRA = ROR+ADC (the ADC sees the carry the ROR just produced). The
// nestest ROM exercises all of them.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// LAX - load memory into A and X at once
    pub(crate) fn lax(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = self.operand(bus, addr);
        self.a = value;
        self.x = value;
        self.update_zero_and_negative_flags(value);
    }

    /// SAX - store A AND X; no flags
    pub(crate) fn sax(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        self.store(bus, addr.address, self.a & self.x);
    }

    /// DCP - decrement memory, then compare A against it
    pub(crate) fn dcp(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = bus.read(addr.address).wrapping_sub(1);
        self.store(bus, addr.address, value);
        self.compare(self.a, value);
    }

    /// ISB - increment memory, then subtract it from A
    pub(crate) fn isc(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = bus.read(addr.address).wrapping_add(1);
        self.store(bus, addr.address, value);
        self.add_with_carry(!value);
    }

    /// SLO - shift memory left, then OR it into A
    pub(crate) fn slo(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = bus.read(addr.address);
        let shifted = value << 1;
        self.update_flag(flags::CARRY, value & 0x80 != 0);
        self.store(bus, addr.address, shifted);

        self.a |= shifted;
        self.update_zero_and_negative_flags(self.a);
    }

    /// RLA - rotate memory left, then AND it into A
    pub(crate) fn rla(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = bus.read(addr.address);
        let rotated = (value << 1) | self.get_flag(flags::CARRY) as u8;
        self.update_flag(flags::CARRY, value & 0x80 != 0);
        self.store(bus, addr.address, rotated);

        self.a &= rotated;
        self.update_zero_and_negative_flags(self.a);
    }

    /// SRE - shift memory right, then EOR it into A
    pub(crate) fn sre(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = bus.read(addr.address);
        let shifted = value >> 1;
        self.update_flag(flags::CARRY, value & 0x01 != 0);
        self.store(bus, addr.address, shifted);

        self.a ^= shifted;
        self.update_zero_and_negative_flags(self.a);
    }

    /// RRA - rotate memory right, then add it to A with the new carry
    pub(crate) fn rra(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        let value = bus.read(addr.address);
        let rotated = (value >> 1) | ((self.get_flag(flags::CARRY) as u8) << 7);
        self.update_flag(flags::CARRY, value & 0x01 != 0);
        self.store(bus, addr.address, rotated);

        self.add_with_carry(rotated);
    }
}
