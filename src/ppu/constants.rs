// PPU constants

/// PPU register select mask: the eight registers repeat through $2000-$3FFF
pub(super) const PPU_REGISTER_MASK: u16 = 0x0007;

/// Size of one nametable in bytes (1KB)
pub(super) const NAMETABLE_SIZE: usize = 1024;

/// Size of palette RAM in bytes
pub(super) const PALETTE_SIZE: usize = 32;

/// Screen width in pixels
pub(super) const SCREEN_WIDTH: usize = 256;

/// Screen height in pixels
pub(super) const SCREEN_HEIGHT: usize = 240;

// ========================================
// PPU Timing Constants (NTSC)
// ========================================

/// Number of dots per scanline
pub(super) const DOTS_PER_LINE: u16 = 341;

/// Number of scanlines per frame (NTSC)
pub(super) const LINES_PER_FRAME: u16 = 262;

/// First visible scanline
pub(super) const FIRST_VISIBLE_LINE: u16 = 0;

/// Last visible scanline
pub(super) const LAST_VISIBLE_LINE: u16 = 239;

/// Post-render scanline (idle)
pub(super) const POSTRENDER_LINE: u16 = 240;

/// First vblank scanline; the vblank flag rises at dot 1
pub(super) const FIRST_VBLANK_LINE: u16 = 241;

/// Pre-render scanline (also written as line -1)
pub(super) const PRERENDER_LINE: u16 = 261;

/// The dot of the pre-render line skipped on odd frames when rendering
pub(super) const ODD_FRAME_SKIP_DOT: u16 = 339;

/// Primary OAM size: 64 sprites x 4 bytes
pub(super) const OAM_SIZE: usize = 256;

/// Secondary OAM size: 8 sprites x 4 bytes
pub(super) const SECONDARY_OAM_SIZE: usize = 32;

/// Hard per-scanline sprite limit
pub(super) const MAX_SPRITES_PER_LINE: usize = 8;
