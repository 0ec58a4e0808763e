/*!
load_store.rs - Load / Store opcode family

Overview
========
Loads (set Z/N flags; may incur page-cross penalty):
    LDA: A9, A5, B5, AD, BD*, B9*, A1, B1*
    LDX: A2, A6, B6, AE, BE*
    LDY: A0, A4, B4, AC, BC*

Stores (no flags changed, no page-cross cycle penalties):
    STA: 85, 95, 8D, 9D, 99, 81, 91
    STX: 86, 96, 8E
    STY: 84, 94, 8C

(*) The resolver reports the crossing; the dispatcher adds the +1 for the
    read cases. Stores carry the extra cycle in their base count.

Operands arrive pre-resolved: loads consume `ctx.data`, stores write to
`ctx.operand` (the resolver never reads a store's target).
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::FetchContext;
use crate::cpu::execute::{lda, ldx, ldy};
use crate::cpu::regs::CpuRegs;

#[inline]
pub(super) fn op_lda<C: CpuRegs>(cpu: &mut C, ctx: &FetchContext) {
    lda(cpu, ctx.data);
}

#[inline]
pub(super) fn op_ldx<C: CpuRegs>(cpu: &mut C, ctx: &FetchContext) {
    ldx(cpu, ctx.data);
}

#[inline]
pub(super) fn op_ldy<C: CpuRegs>(cpu: &mut C, ctx: &FetchContext) {
    ldy(cpu, ctx.data);
}

#[inline]
pub(super) fn op_sta<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, ctx: &FetchContext) {
    bus.write(ctx.operand, cpu.a());
}

#[inline]
pub(super) fn op_stx<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, ctx: &FetchContext) {
    bus.write(ctx.operand, cpu.x());
}

#[inline]
pub(super) fn op_sty<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, ctx: &FetchContext) {
    bus.write(ctx.operand, cpu.y());
}
