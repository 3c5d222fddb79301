// famicore - NES emulator core library
//
// A cycle-scheduled composition of a 6502 CPU, a dot-accurate PPU and an
// NROM cartridge bus, driven in the NTSC 1:3 CPU/PPU phase ratio.

// Public modules
pub mod apu;
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod debug;
pub mod display;
pub mod emulator;
pub mod input;
pub mod ppu;
pub mod ram;

// Re-export main types for convenience
pub use apu::Apu;
pub use bus::Bus;
pub use cartridge::{Cartridge, INesError, INesHeader, Mapper, Mirroring};
pub use cpu::{Cpu, CpuError};
pub use debug::{disassemble_instruction, TraceError, TraceLog};
pub use display::FrameBuffer;
pub use emulator::{Emulator, EmulatorConfig};
pub use input::{Button, Controller, ControllerIO};
pub use ppu::Ppu;
pub use ram::Ram;
