//! Shared setup for the integration tests: a `SystemBus` with a program at
//! $8000 and the three vectors pointing at distinct handlers.

#![allow(dead_code)]

use nescpu::{Cpu, SystemBus};

pub const PROGRAM_START: u16 = 0x8000;
pub const NMI_HANDLER: u16 = 0x9000;
pub const IRQ_HANDLER: u16 = 0xA000;

pub fn bus_with(program: &[u8]) -> SystemBus {
    let mut bus = SystemBus::new();
    bus.load(PROGRAM_START, program).unwrap();
    bus.set_vectors(NMI_HANDLER, PROGRAM_START, IRQ_HANDLER);
    bus
}

/// Reset and drain the reset sequence; the next operation is the first
/// instruction of `program`.
pub fn boot(program: &[u8]) -> (Cpu, SystemBus) {
    let mut bus = bus_with(program);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    assert_eq!(cpu.step_instruction(&mut bus), 7);
    (cpu, bus)
}
