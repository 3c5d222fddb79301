// Shift and rotate instructions: ASL, LSR, ROL, ROR
//
// Each takes an accumulator flag: the accumulator forms operate on A
// directly, the memory forms are read-modify-write through the bus.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// ASL - shift left, bit 7 into carry
    pub(crate) fn asl(&mut self, bus: &mut Bus, addr: &AddressingResult, accumulator: bool) {
        let value = if accumulator {
            self.a
        } else {
            bus.read(addr.address)
        };
        let result = value << 1;
        self.update_flag(flags::CARRY, value & 0x80 != 0);
        self.write_shift_result(bus, addr, accumulator, result);
    }

    /// LSR - shift right, bit 0 into carry
    pub(crate) fn lsr(&mut self, bus: &mut Bus, addr: &AddressingResult, accumulator: bool) {
        let value = if accumulator {
            self.a
        } else {
            bus.read(addr.address)
        };
        let result = value >> 1;
        self.update_flag(flags::CARRY, value & 0x01 != 0);
        self.write_shift_result(bus, addr, accumulator, result);
    }

    /// ROL - rotate left through carry
    pub(crate) fn rol(&mut self, bus: &mut Bus, addr: &AddressingResult, accumulator: bool) {
        let value = if accumulator {
            self.a
        } else {
            bus.read(addr.address)
        };
        let result = (value << 1) | self.get_flag(flags::CARRY) as u8;
        self.update_flag(flags::CARRY, value & 0x80 != 0);
        self.write_shift_result(bus, addr, accumulator, result);
    }

    /// ROR - rotate right through carry
    pub(crate) fn ror(&mut self, bus: &mut Bus, addr: &AddressingResult, accumulator: bool) {
        let value = if accumulator {
            self.a
        } else {
            bus.read(addr.address)
        };
        let result = (value >> 1) | ((self.get_flag(flags::CARRY) as u8) << 7);
        self.update_flag(flags::CARRY, value & 0x01 != 0);
        self.write_shift_result(bus, addr, accumulator, result);
    }

    fn write_shift_result(
        &mut self,
        bus: &mut Bus,
        addr: &AddressingResult,
        accumulator: bool,
        result: u8,
    ) {
        if accumulator {
            self.a = result;
        } else {
            self.store(bus, addr.address, result);
        }
        self.update_zero_and_negative_flags(result);
    }
}
