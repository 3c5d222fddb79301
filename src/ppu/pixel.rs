// Pixel generator - background/sprite shift queues and the priority mux
//
// A small sub-object owned by the PPU that turns the fetch pipeline's
// output into one pixel per dot:
//
// - Background: a two-entry queue of tile slices (attribute selector plus
//   the two pattern bitplanes). The fetcher pushes a new slice every 8
//   dots; `shift` pops the consumed slice at the end of each 8-dot window.
//   Fine-X picks the sampling position across the two buffered tiles.
// - Sprites: a bounded array of 8 slots (pattern planes with horizontal
//   flip pre-applied, attribute byte, screen X). The first in-range slot
//   with a non-zero color wins.
//
// Nothing here allocates; both queues are fixed-size arrays refilled in
// place every scanline.

/// One background tile slice ready for sampling
#[derive(Debug, Clone, Copy, Default)]
struct BgSlice {
    /// 2-bit attribute palette selector for this tile
    attr: u8,
    /// Pattern low bitplane
    low: u8,
    /// Pattern high bitplane
    high: u8,
}

/// One fetched sprite, ready for sampling
#[derive(Debug, Clone, Copy, Default)]
struct SpriteSlot {
    /// Pattern low bitplane (horizontal flip already applied)
    low: u8,
    /// Pattern high bitplane (horizontal flip already applied)
    high: u8,
    /// Raw OAM attribute byte (palette, priority, flips)
    attr: u8,
    /// Screen X of the sprite's left edge
    x: u8,
    /// Whether this slot holds sprite 0 (for the hit flag)
    sprite_0: bool,
}

/// A resolved sprite pixel candidate
#[derive(Debug, Clone, Copy)]
struct SpritePixel {
    /// 2-bit color code, never 0
    code: u8,
    /// Sprite palette (attribute bits 0-1)
    palette: u8,
    /// Attribute bit 5: sprite renders behind non-zero background
    behind: bool,
    /// Candidate came from sprite 0
    sprite_0: bool,
}

/// Background and sprite shift queues plus the priority multiplexer
pub(super) struct PixelGenerator {
    /// Tile slices: [0] is being consumed, [1] is on deck
    bg: [BgSlice; 2],
    /// Up to eight sprites for the current scanline
    sprites: [SpriteSlot; 8],
    /// Occupied sprite slots
    sprite_count: usize,
}

impl PixelGenerator {
    pub(super) fn new() -> Self {
        PixelGenerator {
            bg: [BgSlice::default(); 2],
            sprites: [SpriteSlot::default(); 8],
            sprite_count: 0,
        }
    }

    /// Pop the consumed background slice and promote the on-deck one
    pub(super) fn shift(&mut self) {
        self.bg[0] = self.bg[1];
    }

    /// Queue the next fetched background tile slice
    pub(super) fn push_bg(&mut self, attr: u8, low: u8, high: u8) {
        self.bg[1] = BgSlice { attr, low, high };
    }

    /// Drop all sprite slots (start of the per-line sprite fetch)
    pub(super) fn clear_sprites(&mut self) {
        self.sprite_count = 0;
    }

    /// Queue a fetched sprite; silently bounded at 8 slots
    pub(super) fn push_sprite(&mut self, low: u8, high: u8, attr: u8, x: u8, sprite_0: bool) {
        if self.sprite_count < self.sprites.len() {
            self.sprites[self.sprite_count] = SpriteSlot {
                low,
                high,
                attr,
                x,
                sprite_0,
            };
            self.sprite_count += 1;
        }
    }

    /// Background color code and palette selector at the given position
    ///
    /// `slice_offset` is the dot's position within the current 8-dot
    /// window; adding fine-X may carry the sample into the on-deck tile.
    fn background_pixel(&self, slice_offset: u16, fine_x: u8) -> (u8, u8) {
        let pos = slice_offset + fine_x as u16;
        let (slice, bit) = if pos < 8 {
            (&self.bg[0], 7 - pos)
        } else {
            (&self.bg[1], 15 - pos)
        };
        let code = (((slice.high >> bit) & 1) << 1) | ((slice.low >> bit) & 1);
        (code, slice.attr)
    }

    /// First opaque sprite pixel covering screen column `x`, if any
    fn sprite_pixel(&self, x: u16) -> Option<SpritePixel> {
        for slot in &self.sprites[..self.sprite_count] {
            let offset = x.wrapping_sub(slot.x as u16);
            if offset >= 8 {
                continue;
            }
            let bit = 7 - offset;
            let code = (((slot.high >> bit) & 1) << 1) | ((slot.low >> bit) & 1);
            if code != 0 {
                return Some(SpritePixel {
                    code,
                    palette: slot.attr & 0x03,
                    behind: slot.attr & 0x20 != 0,
                    sprite_0: slot.sprite_0,
                });
            }
        }
        None
    }

    /// Resolve the pixel at screen column `x`
    ///
    /// Applies the PPUMASK enable and left-8 clip bits, runs the priority
    /// mux and looks the winner up in palette RAM. Returns the 6-bit
    /// master-palette entry and whether this dot produced a sprite-0 hit.
    pub(super) fn compute_pixel(
        &self,
        x: u16,
        slice_offset: u16,
        fine_x: u8,
        mask: u8,
        palette_ram: &[u8; 32],
    ) -> (u8, bool) {
        let bg_enabled = mask & 0x08 != 0;
        let sprites_enabled = mask & 0x10 != 0;

        let (mut bg_code, bg_palette) = if bg_enabled {
            self.background_pixel(slice_offset, fine_x)
        } else {
            (0, 0)
        };
        if x < 8 && mask & 0x02 == 0 {
            bg_code = 0;
        }

        let mut sprite = if sprites_enabled {
            self.sprite_pixel(x)
        } else {
            None
        };
        if x < 8 && mask & 0x04 == 0 {
            sprite = None;
        }

        // Priority multiplexer: transparent layers fall through, otherwise
        // the sprite's priority bit decides
        let palette_index = match (bg_code, &sprite) {
            (0, None) => 0,
            (0, Some(s)) => 0x10 + s.palette * 4 + s.code,
            (_, None) => bg_palette * 4 + bg_code,
            (_, Some(s)) => {
                if s.behind {
                    bg_palette * 4 + bg_code
                } else {
                    0x10 + s.palette * 4 + s.code
                }
            }
        };

        // Sprite 0 hit: both layers opaque at this dot, excluding X=255;
        // the left-8 clip exclusions already zeroed the layers above
        let sprite_0_hit = bg_code != 0
            && x != 255
            && matches!(&sprite, Some(s) if s.sprite_0);

        (palette_ram[palette_index as usize] & 0x3F, sprite_0_hit)
    }
}
