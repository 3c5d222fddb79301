// PPU test suites
//
// Split by concern, mirroring the implementation files: register behavior,
// memory mirroring, dot timing and the rendering pipeline.

mod memory;
mod rendering;
mod timing;

use super::Ppu;
use crate::cartridge::{mappers::create_mapper, Cartridge};
use std::cell::RefCell;
use std::rc::Rc;

/// Build a PPU wired to an NROM cartridge whose CHR-ROM holds `chr`
/// (padded to 8KB); rendering left disabled.
fn ppu_with_chr(chr: &[u8]) -> Ppu {
    let mut image = vec![0u8; 16];
    image[0..4].copy_from_slice(b"NES\x1A");
    image[4] = 1; // 16KB PRG
    image[5] = 1; // 8KB CHR
    image.extend(vec![0u8; 16 * 1024]);
    let mut chr_bank = chr.to_vec();
    chr_bank.resize(8 * 1024, 0);
    image.extend(&chr_bank);

    let cartridge = Cartridge::from_bytes(&image).expect("valid test image");
    let mapper = Rc::new(RefCell::new(
        create_mapper(cartridge).expect("NROM mapper"),
    ));

    let mut ppu = Ppu::new();
    ppu.set_mapper(mapper);
    ppu
}

/// Step the PPU to an exact (line, dot) position from wherever it is
fn step_to(ppu: &mut Ppu, line: u16, dot: u16) {
    // Bounded by two frames so a broken counter fails fast
    for _ in 0..(341 * 262 * 2) {
        if ppu.line == line && ppu.dot == dot {
            return;
        }
        ppu.step();
    }
    panic!("PPU never reached ({}, {})", line, dot);
}
