// famicore - binary front end
//
// Two modes:
// - `famicore game.nes` opens the emulator window.
// - `famicore nestest.nes --test-log nestest.log` runs headless and
//   verifies every instruction against the golden log (add `--strict` to
//   compare the PPU position and cycle counter too).

use famicore::debug::TraceLog;
use famicore::display::run_emulator_window;
use famicore::emulator::Emulator;
use std::path::{Path, PathBuf};
use std::process;

struct Args {
    rom: PathBuf,
    test_log: Option<PathBuf>,
    strict: bool,
}

const USAGE: &str = "usage: famicore <rom.nes> [--test-log PATH] [--strict]";

fn parse_args() -> Result<Args, String> {
    let mut rom = None;
    let mut test_log = None;
    let mut strict = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--test-log" => {
                let path = args.next().ok_or("--test-log needs a path")?;
                test_log = Some(PathBuf::from(path));
            }
            "--strict" => strict = true,
            "--help" | "-h" => return Err(USAGE.to_string()),
            _ if rom.is_none() => rom = Some(PathBuf::from(arg)),
            other => return Err(format!("unexpected argument '{}'\n{}", other, USAGE)),
        }
    }

    Ok(Args {
        rom: rom.ok_or(USAGE)?,
        test_log,
        strict,
    })
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    let result = match &args.test_log {
        Some(log_path) => run_test_log(&args, log_path),
        None => run_windowed(&args),
    };

    if let Err(err) = result {
        eprintln!("famicore: {}", err);
        process::exit(1);
    }
}

/// Headless mode: execute under the golden log, aborting on divergence
fn run_test_log(args: &Args, log_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let log = TraceLog::load(log_path)?.with_strict(args.strict);
    log::info!("loaded golden log with {} instructions", log.len());

    let mut emulator = Emulator::new();
    emulator.load_rom(&args.rom)?;

    // nestest automation entry: PC forced to $C000 with the reset cost
    // already charged, PPU advanced by the matching 21 dots
    let cpu = emulator.cpu_mut();
    cpu.pc = 0xC000;
    cpu.total_cycles = 7;
    cpu.remaining_cycles = 0;
    for _ in 0..21 {
        emulator.bus_mut().ppu_mut().step();
    }

    for index in 0..log.len() {
        log.verify(index, emulator.cpu(), emulator.bus())?;
        // One full instruction plus its PPU dots
        loop {
            emulator.step()?;
            if emulator.cpu().at_instruction_boundary() {
                break;
            }
        }
    }

    println!("test log passed: {} instructions, no divergence", log.len());
    Ok(())
}

/// Interactive mode: open the window and run until the host quits
fn run_windowed(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut emulator = Emulator::new();
    emulator.load_rom(&args.rom)?;

    // The window sizes and paces itself from the emulator's video config
    run_emulator_window(emulator)
}
