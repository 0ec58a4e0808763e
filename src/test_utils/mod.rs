//! Shared test utilities: a flat 64 KiB bus and CPU boot helpers.
//!
//! `FlatBus` maps every address to plain memory, which keeps per-opcode tests
//! free of mirroring and register side effects. It still honors the $4014
//! DMA latch so DMA can be triggered by a real `STA $4014`, and it logs every
//! read address so tests can assert which accesses an instruction issued.
//!
//! Default vectors used by `boot`:
//! - RESET -> $8000 (program start)
//! - NMI   -> $9000
//! - IRQ   -> $A000

#![allow(dead_code)]

use crate::bus::{CpuBus, OAM_DMA, OamWriter};
use crate::cpu::core::Cpu;

pub const PROGRAM_START: u16 = 0x8000;
pub const NMI_TARGET: u16 = 0x9000;
pub const IRQ_TARGET: u16 = 0xA000;

pub struct FlatBus {
    pub mem: Vec<u8>,
    pub oam: [u8; 256],
    pub reads: Vec<u16>,
    dma_request: Option<u8>,
}

impl FlatBus {
    pub fn new() -> Self {
        Self {
            mem: vec![0; 0x1_0000],
            oam: [0; 256],
            reads: Vec::new(),
            dma_request: None,
        }
    }

    /// Read without logging.
    pub fn peek(&self, addr: u16) -> u8 {
        self.mem[addr as usize]
    }

    pub fn poke(&mut self, addr: u16, value: u8) {
        self.mem[addr as usize] = value;
    }

    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let start = addr as usize;
        self.mem[start..start + bytes.len()].copy_from_slice(bytes);
    }

    pub fn set_vectors(&mut self, nmi: u16, reset: u16, irq: u16) {
        self.load(0xFFFA, &nmi.to_le_bytes());
        self.load(0xFFFC, &reset.to_le_bytes());
        self.load(0xFFFE, &irq.to_le_bytes());
    }
}

impl CpuBus for FlatBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.reads.push(addr);
        self.mem[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        if addr == OAM_DMA {
            self.dma_request = Some(value);
        }
        self.mem[addr as usize] = value;
    }

    fn take_dma_request(&mut self) -> Option<u8> {
        self.dma_request.take()
    }
}

impl OamWriter for FlatBus {
    fn write_oam(&mut self, index: u8, value: u8) {
        self.oam[index as usize] = value;
    }
}

/// Bus with `program` at $8000 and the default vectors installed.
pub fn bus_with_program(program: &[u8]) -> FlatBus {
    let mut bus = FlatBus::new();
    bus.load(PROGRAM_START, program);
    bus.set_vectors(NMI_TARGET, PROGRAM_START, IRQ_TARGET);
    bus
}

/// Reset a CPU against `program` and drain the 7 reset cycles so the next
/// `step` dispatches the first instruction.
pub fn boot(program: &[u8]) -> (Cpu, FlatBus) {
    let mut bus = bus_with_program(program);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    cpu.step_instruction(&mut bus);
    bus.reads.clear();
    (cpu, bus)
}
