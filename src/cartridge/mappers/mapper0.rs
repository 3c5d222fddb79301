// Mapper 0 (NROM) - fixed windows, no bank switching
//
// Memory layout:
// - CPU $8000-$BFFF: first 16KB of PRG-ROM
// - CPU $C000-$FFFF: last 16KB of PRG-ROM (mirror of the first for NROM-128)
// - CPU $6000-$7FFF: 8KB PRG-RAM
// - PPU $0000-$1FFF: 8KB CHR-ROM, or CHR-RAM when the header ships no CHR
//
// Variants: NROM-128 (16KB PRG, mirrored into both halves) and NROM-256
// (32KB PRG, direct).

use super::MapperError;
use crate::cartridge::{Cartridge, Mapper, Mirroring, PRG_BANK_SIZE};

/// Mapper 0 implementation (NROM)
///
/// The simplest board: PRG and CHR map straight through, mirroring is fixed
/// by the header, and the only writable memory is PRG-RAM (and CHR-RAM on
/// the boards that carry it).
pub struct Mapper0 {
    /// PRG-ROM data (16KB or 32KB)
    prg_rom: Vec<u8>,
    /// CHR-ROM or CHR-RAM data (8KB)
    chr_mem: Vec<u8>,
    /// PRG-RAM backing the $6000-$7FFF window
    prg_ram: Vec<u8>,
    /// Whether CHR memory accepts writes
    chr_is_ram: bool,
    /// Mirroring is fixed on NROM boards
    mirroring: Mirroring,
}

impl Mapper0 {
    /// Build an NROM board from a parsed cartridge, taking over its banks
    ///
    /// # Errors
    ///
    /// Returns `MapperError::InvalidConfiguration` unless PRG-ROM is
    /// exactly 16KB or 32KB.
    pub fn new(cartridge: Cartridge) -> Result<Self, MapperError> {
        let prg_rom_size = cartridge.prg_rom.len();
        if prg_rom_size != PRG_BANK_SIZE && prg_rom_size != 2 * PRG_BANK_SIZE {
            return Err(MapperError::InvalidConfiguration(format!(
                "NROM requires 16KB or 32KB PRG-ROM, got {} bytes",
                prg_rom_size
            )));
        }

        Ok(Mapper0 {
            prg_rom: cartridge.prg_rom,
            chr_mem: cartridge.chr_rom,
            prg_ram: cartridge.prg_ram,
            chr_is_ram: cartridge.chr_is_ram,
            mirroring: cartridge.header.mirroring,
        })
    }
}

impl Mapper for Mapper0 {
    /// $8000-$FFFF maps onto PRG-ROM; the modulo mirrors 16KB images into
    /// both halves and is a no-op for 32KB images
    fn read_prg(&self, addr: u16) -> u8 {
        let index = (addr as usize - 0x8000) % self.prg_rom.len();
        self.prg_rom[index]
    }

    /// NROM has no bank registers; PRG-space writes are ignored
    fn write_prg(&mut self, _addr: u16, _value: u8) {}

    fn read_chr(&self, addr: u16) -> u8 {
        self.chr_mem[(addr & 0x1FFF) as usize]
    }

    fn write_chr(&mut self, addr: u16, value: u8) -> Result<(), MapperError> {
        if self.chr_is_ram {
            self.chr_mem[(addr & 0x1FFF) as usize] = value;
            Ok(())
        } else {
            Err(MapperError::ChrRomWrite(addr))
        }
    }

    fn read_ram(&self, addr: u16) -> u8 {
        let index = (addr as usize - 0x6000) % self.prg_ram.len();
        self.prg_ram[index]
    }

    fn write_ram(&mut self, addr: u16, value: u8) {
        let index = (addr as usize - 0x6000) % self.prg_ram.len();
        self.prg_ram[index] = value;
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}
