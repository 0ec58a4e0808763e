/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, RMW, branches)

Purpose
=======
Centralize the side-effect logic of every instruction family so the
dispatch handlers stay thin: they resolve operands, call one of these
helpers, and report cycles.

Scope (crate-visible)
---------------------
Loads / transfers:
    lda/ldx/ldy, tax/tay/txa/tya, tsx/txs
Logical:
    and/ora/eor/bit
ADC / SBC (binary only; the 2A03 has no decimal mode)
Compare:
    compare
Increment / decrement:
    inx/iny/dex/dey, inc_value/dec_value
Shifts / rotates on a value:
    asl/lsr/rol/ror
RMW choreography:
    rmw_memory
Branch:
    branch_to

Design Notes
============
- Register helpers rely only on the `CpuRegs` API (no bus coupling).
- Shifts and rotates operate on a value and return the result, so one
  implementation serves both the accumulator and the memory forms.
- Only `rmw_memory` touches the bus.
*/

use crate::bus::CpuBus;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::Status;

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldx(cpu, v);
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldy(cpu, v);
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.sp();
    ldx(cpu, v);
}

/// TXS is the one transfer that leaves the flags alone.
#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x();
    cpu.set_sp(v);
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() & v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() | v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() ^ v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    let zero = (cpu.a() & v) == 0;
    cpu.assign_flag(Status::ZERO, zero);
    cpu.assign_flag(Status::NEGATIVE, (v & 0x80) != 0);
    cpu.assign_flag(Status::OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// ADC / SBC
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let carry_in = cpu.is_flag_set(Status::CARRY) as u16;
    let sum16 = a as u16 + v as u16 + carry_in;
    let result = sum16 as u8;

    cpu.assign_flag(Status::CARRY, sum16 > 0xFF);
    // Overflow: ( !(A ^ M) & (A ^ R) & 0x80 ) != 0
    cpu.assign_flag(Status::OVERFLOW, ((!(a ^ v)) & (a ^ result) & 0x80) != 0);
    lda(cpu, result);
}

#[inline]
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    adc(cpu, !v);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn compare<C: CpuRegs>(cpu: &mut C, reg: u8, v: u8) {
    cpu.assign_flag(Status::CARRY, reg >= v);
    cpu.update_zn(reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Increment / Decrement
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_add(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_add(1);
    ldy(cpu, v);
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_sub(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_sub(1);
    ldy(cpu, v);
}

#[inline]
pub(crate) fn inc_value<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v.wrapping_add(1);
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn dec_value<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v.wrapping_sub(1);
    cpu.update_zn(r);
    r
}

// ---------------------------------------------------------------------------
// Shifts / Rotates
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.assign_flag(Status::CARRY, (v & 0x80) != 0);
    let r = v << 1;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn lsr<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.assign_flag(Status::CARRY, (v & 0x01) != 0);
    let r = v >> 1;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn rol<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.is_flag_set(Status::CARRY) as u8;
    cpu.assign_flag(Status::CARRY, (v & 0x80) != 0);
    let r = (v << 1) | carry_in;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn ror<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = if cpu.is_flag_set(Status::CARRY) { 0x80 } else { 0 };
    cpu.assign_flag(Status::CARRY, (v & 0x01) != 0);
    let r = (v >> 1) | carry_in;
    cpu.update_zn(r);
    r
}

// ---------------------------------------------------------------------------
// Read-Modify-Write (memory) choreography
// ---------------------------------------------------------------------------

/// 6502 RMW bus sequence: the old value (already read by the resolver) is
/// written back unmodified, then the new value. Returns the new value.
pub(crate) fn rmw_memory<C: CpuRegs, B: CpuBus, F>(
    cpu: &mut C,
    bus: &mut B,
    addr: u16,
    old: u8,
    transform: F,
) -> u8
where
    F: FnOnce(&mut C, u8) -> u8,
{
    bus.write(addr, old);
    let new = transform(cpu, old);
    bus.write(addr, new);
    new
}

// ---------------------------------------------------------------------------
// Branch
// ---------------------------------------------------------------------------

/// Jump to a resolved branch target.
#[inline]
pub(crate) fn branch_to<C: CpuRegs>(cpu: &mut C, target: u16) {
    cpu.set_pc(target);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
