// Flag instructions: CLC, CLD, CLI, CLV, SEC, SED, SEI

use crate::cpu::{flags, Cpu};

impl Cpu {
    /// CLC - clear carry
    pub(crate) fn clc(&mut self) {
        self.clear_flag(flags::CARRY);
    }

    /// CLD - clear decimal mode
    pub(crate) fn cld(&mut self) {
        self.clear_flag(flags::DECIMAL);
    }

    /// CLI - clear interrupt disable
    pub(crate) fn cli(&mut self) {
        self.clear_flag(flags::INTERRUPT_DISABLE);
    }

    /// CLV - clear overflow
    pub(crate) fn clv(&mut self) {
        self.clear_flag(flags::OVERFLOW);
    }

    /// SEC - set carry
    pub(crate) fn sec(&mut self) {
        self.set_flag(flags::CARRY);
    }

    /// SED - set decimal mode (stored but inert on the NES)
    pub(crate) fn sed(&mut self) {
        self.set_flag(flags::DECIMAL);
    }

    /// SEI - set interrupt disable
    pub(crate) fn sei(&mut self) {
        self.set_flag(flags::INTERRUPT_DISABLE);
    }
}
