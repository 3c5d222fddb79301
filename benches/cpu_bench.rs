// CPU benchmarks - dispatch and execution throughput

use criterion::{criterion_group, criterion_main, Criterion};
use famicore::{Bus, Cpu};
use std::hint::black_box;

fn bench_cpu_instructions(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_instructions");

    // NOP: the cheapest dispatch path
    group.bench_function("nop", |b| {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        for i in 0x8000..0x8100u16 {
            bus.write(i, 0xEA);
        }
        cpu.pc = 0x8000;

        b.iter(|| {
            if cpu.pc >= 0x80F0 {
                cpu.pc = 0x8000;
            }
            cpu.step(black_box(&mut bus)).expect("NOP");
        });
    });

    // LDA #imm: operand fetch plus flag updates
    group.bench_function("lda_immediate", |b| {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        for i in (0x8000..0x8100u16).step_by(2) {
            bus.write(i, 0xA9);
            bus.write(i + 1, 0x42);
        }
        cpu.pc = 0x8000;

        b.iter(|| {
            if cpu.pc >= 0x80F0 {
                cpu.pc = 0x8000;
            }
            cpu.step(black_box(&mut bus)).expect("LDA");
        });
    });

    // ADC #imm: the full flag computation
    group.bench_function("adc_immediate", |b| {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        for i in (0x8000..0x8100u16).step_by(2) {
            bus.write(i, 0x69);
            bus.write(i + 1, 0x01);
        }
        cpu.pc = 0x8000;

        b.iter(|| {
            if cpu.pc >= 0x80F0 {
                cpu.pc = 0x8000;
            }
            cpu.step(black_box(&mut bus)).expect("ADC");
        });
    });

    // A tight counted loop: branches, compares, memory traffic
    group.bench_function("counted_loop", |b| {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        // LDX #$00; INX; CPX #$FF; BNE -5
        let program = [0xA2, 0x00, 0xE8, 0xE0, 0xFF, 0xD0, 0xFB];
        for (i, &byte) in program.iter().enumerate() {
            bus.write(0x8000 + i as u16, byte);
        }
        cpu.pc = 0x8000;

        b.iter(|| {
            for _ in 0..64 {
                cpu.step(black_box(&mut bus)).expect("loop body");
            }
            if cpu.pc < 0x8000 || cpu.pc > 0x8007 {
                cpu.pc = 0x8000;
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cpu_instructions);
criterion_main!(benches);
