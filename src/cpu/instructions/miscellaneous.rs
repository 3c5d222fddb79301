// Miscellaneous instructions: BRK, RTI, NOP

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{vectors, Cpu};

impl Cpu {
    /// BRK - software interrupt
    ///
    /// Pushes PC+2 of the BRK itself (PC is already one past the opcode,
    /// so one more increment) and the status byte with B set, then
    /// vectors through $FFFE with I set.
    pub(crate) fn brk(&mut self, bus: &mut Bus) {
        let return_addr = self.pc.wrapping_add(1);
        self.stack_push_u16(bus, return_addr);

        let status = self.status_for_push(true);
        self.stack_push(bus, status);

        self.set_flag(crate::cpu::flags::INTERRUPT_DISABLE);
        self.pc = bus.read_u16(vectors::IRQ);
    }

    /// RTI - return from interrupt
    ///
    /// Pops the status byte (B keeps its live value), then PC. Unlike
    /// RTS there is no +1: interrupts push the exact resume address.
    pub(crate) fn rti(&mut self, bus: &mut Bus) {
        let popped = self.stack_pop(bus);
        self.restore_status(popped);
        self.pc = self.stack_pop_u16(bus);
    }

    /// NOP - no operation (official $EA and the single-byte unofficials)
    pub(crate) fn nop(&mut self) {}

    /// Multi-byte NOP: the operand read still happens on the bus
    pub(crate) fn nop_read(&mut self, bus: &mut Bus, addr: &AddressingResult) {
        if addr.value.is_none() {
            let _ = bus.read(addr.address);
        }
    }
}
