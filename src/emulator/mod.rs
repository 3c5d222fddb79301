// Emulator module - the frame driver tying CPU, PPU and bus together
//
// One driver iteration services the NMI latch at an instruction boundary,
// advances the CPU by one cycle and the PPU by three dots (the NTSC 1:3
// ratio). `run_frame` repeats that until the PPU signals frame completion
// and hands the finished surface back to the caller.

mod config;
mod recent_roms;
mod screenshot;

pub use config::{EmulatorConfig, HotkeyConfig, ScreenshotConfig, VideoConfig};
pub use recent_roms::RecentRomsList;
pub use screenshot::{save_screenshot, ScreenshotError};

use crate::bus::Bus;
use crate::cartridge::mappers::create_mapper;
use crate::cartridge::Cartridge;
use crate::cpu::{Cpu, CpuError};
use crate::input::ControllerIO;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// The emulator core: CPU, bus (with PPU/APU/controllers) and config
pub struct Emulator {
    /// 6502 interpreter
    cpu: Cpu,

    /// Memory bus owning the PPU, APU stub and controller ports
    bus: Bus,

    /// User configuration (TOML-backed)
    config: EmulatorConfig,

    /// Path of the loaded ROM, for screenshots and the recent list
    rom_path: Option<PathBuf>,

    /// Paused: `run_frame` callers skip emulation while set
    paused: bool,
}

impl Emulator {
    /// Create an emulator with no cartridge loaded
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            config: EmulatorConfig::load_or_default(),
            rom_path: None,
            paused: false,
        }
    }

    /// Load an iNES ROM from disk and reset into it
    ///
    /// Parses the image, builds the mapper, wires it into the bus and PPU,
    /// records the path in the recent-ROM list and asserts reset.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let cartridge = Cartridge::from_ines_file(path)?;
        log::info!(
            "loaded {} (mapper {}, {}KB PRG, {}KB CHR)",
            path.display(),
            cartridge.mapper_id(),
            cartridge.prg_rom.len() / 1024,
            cartridge.chr_rom.len() / 1024,
        );
        self.insert_cartridge(cartridge)?;
        self.rom_path = Some(path.to_path_buf());

        let mut recent = RecentRomsList::load_or_default();
        recent.add(path);
        if let Err(err) = recent.save() {
            log::warn!("could not update recent-ROM list: {}", err);
        }

        Ok(())
    }

    /// Load a ROM image already in memory (test harnesses)
    pub fn load_rom_bytes(&mut self, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
        let cartridge = Cartridge::from_bytes(data)?;
        self.insert_cartridge(cartridge)?;
        Ok(())
    }

    fn insert_cartridge(&mut self, cartridge: Cartridge) -> Result<(), Box<dyn std::error::Error>> {
        let mapper = Rc::new(RefCell::new(create_mapper(cartridge)?));
        self.bus.attach_mapper(mapper);
        self.reset();
        Ok(())
    }

    /// Press the reset button: CPU reset sequence plus PPU power state
    pub fn reset(&mut self) {
        self.bus.ppu_mut().reset();
        self.cpu.reset(&mut self.bus);
        self.paused = false;
    }

    /// One driver iteration: interrupts, one CPU cycle, three PPU dots
    ///
    /// Interrupt latches raised by the PPU during its dots are observed
    /// here at the start of the next iteration, and only once the CPU sits
    /// at an instruction boundary. Returns true when the PPU completed a
    /// frame during this iteration.
    ///
    /// # Errors
    ///
    /// Propagates `CpuError::IllegalOpcode` from the CPU.
    pub fn step(&mut self) -> Result<bool, CpuError> {
        if self.cpu.at_instruction_boundary() && self.bus.ppu().nmi_pending() {
            self.bus.ppu_mut().clear_nmi();
            self.cpu.nmi(&mut self.bus);
        }
        // No IRQ sources exist in this configuration (NROM has no IRQ and
        // the APU is a register stub); `Cpu::irq` is the hook when one
        // appears.

        self.cpu.step(&mut self.bus)?;

        let mut frame_done = false;
        for _ in 0..3 {
            frame_done |= self.bus.ppu_mut().step();
        }
        Ok(frame_done)
    }

    /// Run until the PPU completes the current frame
    ///
    /// Returns the finished 256x240 surface of master-palette indices.
    pub fn run_frame(&mut self) -> Result<&[u8], CpuError> {
        loop {
            if self.step()? {
                return Ok(self.bus.ppu().frame());
            }
        }
    }

    /// The nestest-format trace line for the instruction at PC
    pub fn trace(&mut self) -> String {
        self.cpu.trace(&mut self.bus)
    }

    /// Save a PNG screenshot of the given frame surface
    pub fn screenshot(&self, frame: &[u8]) -> Result<PathBuf, ScreenshotError> {
        save_screenshot(
            frame,
            &self.config.screenshot,
            self.rom_path.as_deref(),
        )
    }

    // ========================================
    // Pause control
    // ========================================

    /// Pause emulation
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume emulation
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle the paused state
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Whether emulation is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    // ========================================
    // Component access
    // ========================================

    /// The CPU
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// The CPU, mutably (test harnesses)
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// The bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// The bus, mutably
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// The controller ports (host input path)
    pub fn controller_io_mut(&mut self) -> &mut ControllerIO {
        self.bus.controllers_mut()
    }

    /// The configuration
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// The loaded ROM's path, if any
    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
