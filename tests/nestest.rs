// nestest conformance
//
// Runs the nestest ROM in automation mode (PC forced to $C000) and
// verifies every instruction against the golden log: PC, A, X, Y, P and
// SP always; the cycle counter in the strict variant.
//
// The ROM and log are not checked in; drop them at tests/roms/nestest.nes
// and tests/roms/nestest.log and run:
//
//   cargo test --test nestest -- --ignored --nocapture

mod common;

use common::cpu_with_program;
use famicore::debug::TraceLog;
use famicore::Emulator;
use std::path::Path;

const ROM_PATH: &str = "tests/roms/nestest.nes";
const LOG_PATH: &str = "tests/roms/nestest.log";

/// Instructions covered by the official-opcode portion of the log
const OFFICIAL_INSTRUCTIONS: usize = 5003;

/// Full log length including the unofficial-opcode section
const ALL_INSTRUCTIONS: usize = 8991;

fn run_against_log(max_instructions: usize, strict: bool) {
    let rom = std::fs::read(ROM_PATH).expect("nestest ROM present");
    let log = TraceLog::load(LOG_PATH)
        .expect("golden log parses")
        .with_strict(strict);

    let mut emulator = Emulator::new();
    emulator.load_rom_bytes(&rom).expect("nestest is NROM");

    // Automation entry point, reset cost pre-charged
    let cpu = emulator.cpu_mut();
    cpu.pc = 0xC000;
    cpu.total_cycles = 7;
    cpu.remaining_cycles = 0;
    for _ in 0..21 {
        emulator.bus_mut().ppu_mut().step();
    }

    let limit = max_instructions.min(log.len());
    for index in 0..limit {
        if let Err(err) = log.verify(index, emulator.cpu(), emulator.bus()) {
            let trace = emulator.trace();
            panic!("{}\nactual: {}", err, trace);
        }

        loop {
            emulator.step().expect("no illegal opcodes in nestest");
            if emulator.cpu().at_instruction_boundary() {
                break;
            }
        }
    }

    // nestest reports failure codes in $02/$03; both zero means pass
    let code_02 = emulator.bus_mut().read(0x0002);
    let code_03 = emulator.bus_mut().read(0x0003);
    assert_eq!(code_02, 0, "nestest error code $02");
    assert_eq!(code_03, 0, "nestest error code $03");

    println!("verified {} instructions against the golden log", limit);
}

#[test]
#[ignore] // needs tests/roms/nestest.nes + .log
fn nestest_official_opcodes() {
    if !Path::new(ROM_PATH).exists() {
        eprintln!("skipping: {} not present", ROM_PATH);
        return;
    }
    run_against_log(OFFICIAL_INSTRUCTIONS, false);
}

#[test]
#[ignore] // needs tests/roms/nestest.nes + .log
fn nestest_all_opcodes() {
    if !Path::new(ROM_PATH).exists() {
        eprintln!("skipping: {} not present", ROM_PATH);
        return;
    }
    run_against_log(ALL_INSTRUCTIONS, false);
}

#[test]
#[ignore] // needs tests/roms/nestest.nes + .log
fn nestest_strict_cycles() {
    if !Path::new(ROM_PATH).exists() {
        eprintln!("skipping: {} not present", ROM_PATH);
        return;
    }
    run_against_log(ALL_INSTRUCTIONS, true);
}

#[test]
fn nestest_smoke_test_without_rom() {
    // The harness machinery itself, exercised with a hand-rolled program:
    // LDA #$42, STA $00, NOP
    let (mut cpu, mut bus) = cpu_with_program(0x8000, &[0xA9, 0x42, 0x85, 0x00, 0xEA]);

    cpu.step_instruction(&mut bus).expect("LDA");
    assert_eq!(cpu.a, 0x42);
    assert_eq!(cpu.pc, 0x8002);

    cpu.step_instruction(&mut bus).expect("STA");
    assert_eq!(bus.read(0x0000), 0x42);

    let trace = cpu.trace(&mut bus);
    assert!(trace.starts_with("8004  EA"), "trace line: {}", trace);
    assert!(trace.contains("A:42"));
}
