// PPU memory access - VRAM, palette RAM and pattern-table routing
//
// PPU address space ($0000-$3FFF):
//
// ```text
// $0000-$1FFF: pattern tables (cartridge CHR via the mapper)
// $2000-$2FFF: nametables (2KB internal VRAM, mirrored per cartridge)
// $3000-$3EFF: mirror of $2000-$2EFF
// $3F00-$3FFF: palette RAM (32 bytes, mirrored every 32)
// ```

use super::constants::NAMETABLE_SIZE;
use super::Ppu;
use crate::cartridge::Mirroring;

impl Ppu {
    /// Map a nametable address onto the 2KB internal VRAM
    ///
    /// The address space has room for four nametables but the console only
    /// has two physical ones; the cartridge's mirroring mode decides which
    /// pairs alias.
    pub(super) fn mirror_nametable_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x0FFF) as usize;
        let table = addr / NAMETABLE_SIZE;
        let offset = addr % NAMETABLE_SIZE;

        let physical_table = match self.mirroring {
            // $2000=$2400, $2800=$2C00
            Mirroring::Horizontal => table / 2,
            // $2000=$2800, $2400=$2C00
            Mirroring::Vertical => table % 2,
            Mirroring::SingleScreen => 0,
            // Needs cartridge VRAM for tables 2/3; fold like horizontal
            Mirroring::FourScreen => table / 2,
        };

        physical_table * NAMETABLE_SIZE + offset
    }

    /// Map a palette address onto the 32-byte palette RAM
    ///
    /// Every fourth entry aliases the universal background color at $3F00,
    /// so $3F04/$3F08/$3F0C and the sprite-side $3F10/$3F14/$3F18/$3F1C
    /// all resolve to index 0. Enforced here for both reads and writes.
    pub(super) fn mirror_palette_addr(&self, addr: u16) -> usize {
        let index = (addr & 0x001F) as usize;
        if index % 4 == 0 {
            0
        } else {
            index
        }
    }

    /// Read a byte from PPU address space
    pub(super) fn read_ppu_memory(&self, addr: u16) -> u8 {
        let addr = addr & 0x3FFF;

        match addr {
            // Pattern tables live on the cartridge
            0x0000..=0x1FFF => match &self.mapper {
                Some(mapper) => mapper.borrow().read_chr(addr),
                None => 0,
            },

            0x2000..=0x2FFF => self.nametables[self.mirror_nametable_addr(addr)],

            // Nametable mirror
            0x3000..=0x3EFF => self.nametables[self.mirror_nametable_addr(addr - 0x1000)],

            0x3F00..=0x3FFF => self.palette_ram[self.mirror_palette_addr(addr)],

            _ => unreachable!(),
        }
    }

    /// Write a byte into PPU address space
    ///
    /// Pattern-table writes are forwarded to the mapper; a board with
    /// CHR-ROM rejects them, which is logged and dropped here (permissive
    /// policy - the typed error exists for strict callers).
    pub(super) fn write_ppu_memory(&mut self, addr: u16, data: u8) {
        let addr = addr & 0x3FFF;

        match addr {
            0x0000..=0x1FFF => {
                if let Some(mapper) = &self.mapper {
                    if let Err(err) = mapper.borrow_mut().write_chr(addr, data) {
                        log::warn!("PPU: {}", err);
                    }
                }
            }

            0x2000..=0x2FFF => {
                let index = self.mirror_nametable_addr(addr);
                self.nametables[index] = data;
            }

            0x3000..=0x3EFF => {
                let index = self.mirror_nametable_addr(addr - 0x1000);
                self.nametables[index] = data;
            }

            0x3F00..=0x3FFF => {
                let index = self.mirror_palette_addr(addr);
                self.palette_ram[index] = data;
            }

            _ => unreachable!(),
        }
    }
}
