// VRAM, palette and pattern-table routing

use super::super::Ppu;
use super::ppu_with_chr;
use crate::cartridge::Mirroring;

#[test]
fn test_pattern_table_reads_chr() {
    let mut chr = vec![0u8; 32];
    chr[0] = 0xDE;
    chr[16] = 0xAD;
    let ppu = ppu_with_chr(&chr);

    assert_eq!(ppu.read_ppu_memory(0x0000), 0xDE);
    assert_eq!(ppu.read_ppu_memory(0x0010), 0xAD);
}

#[test]
fn test_pattern_table_without_cartridge_reads_zero() {
    let ppu = Ppu::new();
    assert_eq!(ppu.read_ppu_memory(0x0000), 0);
    assert_eq!(ppu.read_ppu_memory(0x1FFF), 0);
}

#[test]
fn test_chr_rom_write_is_dropped() {
    let mut ppu = ppu_with_chr(&[0x77]);
    // NROM with CHR-ROM rejects the write; the PPU logs and drops it
    ppu.write_ppu_memory(0x0000, 0x42);
    assert_eq!(ppu.read_ppu_memory(0x0000), 0x77);
}

#[test]
fn test_horizontal_mirroring() {
    let mut ppu = Ppu::new();
    ppu.set_mirroring(Mirroring::Horizontal);

    // $2000 and $2400 share a physical table
    ppu.write_ppu_memory(0x2000, 0x11);
    assert_eq!(ppu.read_ppu_memory(0x2400), 0x11);

    // $2800 and $2C00 share the other one
    ppu.write_ppu_memory(0x2800, 0x22);
    assert_eq!(ppu.read_ppu_memory(0x2C00), 0x22);
    assert_eq!(ppu.read_ppu_memory(0x2000), 0x11, "tables stay distinct");
}

#[test]
fn test_vertical_mirroring() {
    let mut ppu = Ppu::new();
    ppu.set_mirroring(Mirroring::Vertical);

    ppu.write_ppu_memory(0x2000, 0x33);
    assert_eq!(ppu.read_ppu_memory(0x2800), 0x33);

    ppu.write_ppu_memory(0x2400, 0x44);
    assert_eq!(ppu.read_ppu_memory(0x2C00), 0x44);
    assert_eq!(ppu.read_ppu_memory(0x2000), 0x33);
}

#[test]
fn test_single_screen_mirroring() {
    let mut ppu = Ppu::new();
    ppu.set_mirroring(Mirroring::SingleScreen);

    ppu.write_ppu_memory(0x2000, 0x55);
    assert_eq!(ppu.read_ppu_memory(0x2400), 0x55);
    assert_eq!(ppu.read_ppu_memory(0x2800), 0x55);
    assert_eq!(ppu.read_ppu_memory(0x2C00), 0x55);
}

#[test]
fn test_nametable_mirror_region() {
    let mut ppu = Ppu::new();
    // $3000-$3EFF mirrors $2000-$2EFF
    ppu.write_ppu_memory(0x2005, 0x66);
    assert_eq!(ppu.read_ppu_memory(0x3005), 0x66);

    ppu.write_ppu_memory(0x3123, 0x77);
    assert_eq!(ppu.read_ppu_memory(0x2123), 0x77);
}

#[test]
fn test_palette_mirrors_every_32_bytes() {
    let mut ppu = Ppu::new();
    ppu.write_ppu_memory(0x3F01, 0x21);
    assert_eq!(ppu.read_ppu_memory(0x3F21), 0x21);
    assert_eq!(ppu.read_ppu_memory(0x3FE1), 0x21);
}

#[test]
fn test_palette_entry_zero_aliases() {
    let mut ppu = Ppu::new();
    ppu.write_ppu_memory(0x3F00, 0x0F);

    // Every fourth entry reads as the universal background color
    for offset in [0x00u16, 0x04, 0x08, 0x0C, 0x10, 0x14, 0x18, 0x1C] {
        assert_eq!(
            ppu.read_ppu_memory(0x3F00 + offset),
            0x0F,
            "$3F{:02X} aliases $3F00",
            offset
        );
    }

    // And writes through any alias land on the universal entry
    ppu.write_ppu_memory(0x3F10, 0x2A);
    assert_eq!(ppu.read_ppu_memory(0x3F00), 0x2A);
    ppu.write_ppu_memory(0x3F08, 0x17);
    assert_eq!(ppu.read_ppu_memory(0x3F00), 0x17);
}

#[test]
fn test_palette_non_aliased_entries_distinct() {
    let mut ppu = Ppu::new();
    ppu.write_ppu_memory(0x3F01, 0x01);
    ppu.write_ppu_memory(0x3F05, 0x05);
    ppu.write_ppu_memory(0x3F11, 0x11);

    assert_eq!(ppu.read_ppu_memory(0x3F01), 0x01);
    assert_eq!(ppu.read_ppu_memory(0x3F05), 0x05);
    assert_eq!(ppu.read_ppu_memory(0x3F11), 0x11);
}

#[test]
fn test_address_space_wraps_at_16k() {
    let mut ppu = Ppu::new();
    // $4000 folds onto $0000; with no cartridge the read is open-bus zero,
    // but the wrap must not panic
    assert_eq!(ppu.read_ppu_memory(0x4000), ppu.read_ppu_memory(0x0000));
    ppu.write_ppu_memory(0x6005, 0x99); // folds onto $2005
    assert_eq!(ppu.read_ppu_memory(0x2005), 0x99);
}
