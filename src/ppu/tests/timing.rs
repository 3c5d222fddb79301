// Dot timing: frame length, vblank/NMI edges, odd-frame skip

use super::super::Ppu;
use super::step_to;

/// Dots in a full NTSC frame with rendering disabled
const DOTS_PER_FRAME: u32 = 341 * 262;

#[test]
fn test_even_frame_is_full_length() {
    let mut ppu = Ppu::new();

    let mut completed = false;
    for _ in 0..DOTS_PER_FRAME {
        completed = ppu.step();
    }
    assert!(completed, "frame completes on the last dot");
    assert_eq!((ppu.line, ppu.dot), (0, 0));
    assert!(ppu.frame_parity(), "parity toggled after the first frame");
}

#[test]
fn test_odd_frame_skips_one_dot_when_rendering() {
    let mut ppu = Ppu::new();
    ppu.cpu_write(0x2001, 0x08); // background on

    // Frame 0 is even: full length
    for _ in 0..DOTS_PER_FRAME {
        ppu.step();
    }
    assert_eq!((ppu.line, ppu.dot), (0, 0));

    // Frame 1 is odd: one dot shorter
    let mut completed = false;
    for _ in 0..DOTS_PER_FRAME - 1 {
        completed = ppu.step();
    }
    assert!(completed, "odd frame ends a dot early");
    assert_eq!((ppu.line, ppu.dot), (0, 0));
}

#[test]
fn test_odd_frame_full_length_when_rendering_disabled() {
    let mut ppu = Ppu::new();

    for _ in 0..DOTS_PER_FRAME {
        ppu.step();
    }
    // Odd frame, but rendering off: no skip
    let mut completed = false;
    for _ in 0..DOTS_PER_FRAME {
        completed = ppu.step();
    }
    assert!(completed);
    assert_eq!((ppu.line, ppu.dot), (0, 0));
}

#[test]
fn test_parity_toggles_every_frame() {
    let mut ppu = Ppu::new();
    assert!(!ppu.frame_parity());

    for frame in 1..=3u64 {
        loop {
            if ppu.step() {
                break;
            }
        }
        assert_eq!(ppu.frame_count(), frame);
        assert_eq!(ppu.frame_parity(), frame % 2 == 1);
    }
}

#[test]
fn test_vblank_flag_rises_at_241_1() {
    let mut ppu = Ppu::new();
    ppu.ppustatus = 0;
    step_to(&mut ppu, 241, 1);
    assert_eq!(ppu.ppustatus & 0x80, 0, "not yet set at the dot boundary");

    ppu.step(); // processes (241,1)
    assert_eq!(ppu.ppustatus & 0x80, 0x80, "vblank set");
}

#[test]
fn test_nmi_latched_only_when_enabled() {
    let mut ppu = Ppu::new();
    ppu.ppustatus = 0;
    step_to(&mut ppu, 241, 2);
    assert!(!ppu.nmi_pending(), "PPUCTRL bit 7 clear: no NMI");

    let mut ppu = Ppu::new();
    ppu.ppustatus = 0;
    ppu.cpu_write(0x2000, 0x80);
    step_to(&mut ppu, 241, 2);
    assert!(ppu.nmi_pending(), "PPUCTRL bit 7 set: NMI latched");
}

#[test]
fn test_flags_clear_at_prerender_dot_1() {
    let mut ppu = Ppu::new();
    step_to(&mut ppu, 260, 0);
    ppu.ppustatus = 0xE0; // vblank + sprite 0 + overflow

    step_to(&mut ppu, 261, 1);
    ppu.step(); // processes (261,1)
    assert_eq!(ppu.ppustatus & 0xE0, 0, "all three flags cleared");
}

#[test]
fn test_status_read_consumes_vblank_before_prerender() {
    let mut ppu = Ppu::new();
    ppu.ppustatus = 0;
    step_to(&mut ppu, 241, 2);

    assert_eq!(ppu.cpu_read(0x2002) & 0x80, 0x80);
    assert_eq!(ppu.cpu_read(0x2002) & 0x80, 0, "second read sees it clear");
}

#[test]
fn test_frame_complete_signaled_once_per_frame() {
    let mut ppu = Ppu::new();
    let mut completions = 0;
    for _ in 0..DOTS_PER_FRAME * 3 {
        if ppu.step() {
            completions += 1;
        }
    }
    assert_eq!(completions, 3);
}
