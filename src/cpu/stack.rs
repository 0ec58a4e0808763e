//! Stack helpers.
//!
//! The 6502 stack lives on page $0100 with SP post-decrement on push and
//! pre-increment on pull:
//!   Push: write at $0100 | SP, then SP = SP - 1
//!   Pull: SP = SP + 1, then read at $0100 | SP
//! SP wraps within the page; it never carries into $0000 or $0200.

use crate::bus::CpuBus;
use crate::cpu::regs::CpuRegs;

pub const STACK_BASE: u16 = 0x0100;

#[inline]
pub(crate) fn push<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, v: u8) {
    let sp = cpu.sp();
    bus.write(STACK_BASE | sp as u16, v);
    cpu.set_sp(sp.wrapping_sub(1));
}

#[inline]
pub(crate) fn pull<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u8 {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    bus.read(STACK_BASE | sp as u16)
}

/// Push a word high byte first, so it reads back little-endian.
#[inline]
pub(crate) fn push_word<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, v: u16) {
    push(cpu, bus, (v >> 8) as u8);
    push(cpu, bus, v as u8);
}

#[inline]
pub(crate) fn pull_word<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u16 {
    let lo = pull(cpu, bus) as u16;
    let hi = pull(cpu, bus) as u16;
    (hi << 8) | lo
}

/// Push P; `software` selects the BRK/PHP form of the breakpoint field.
#[inline]
pub(crate) fn push_status<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, software: bool) {
    let v = cpu.compose_status_for_push(software);
    push(cpu, bus, v);
}
