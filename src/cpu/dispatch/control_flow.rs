/*!
control_flow.rs - Control-flow / system opcode family handler

Overview
========
  JMP abs        (0x4C)
  JMP (ind)      (0x6C)  (page-wrap quirk handled by the resolver)
  JSR abs        (0x20)
  RTS            (0x60)
  RTI            (0x40)
  BRK            (0x00)

Behavior Details
================
- JSR pushes (PC - 1), high byte first, where PC is the address after the
  operand.
- RTS pulls the return address and adds 1 (wrap-safe) to produce the next PC.
- RTI pulls status, clears the breakpoint bits in the live register, then
  pulls PC.
- BRK skips its padding byte: it pushes (opcode address + 2), then status
  with the breakpoint bits set, sets I, and loads the vector at $FFFE.
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::FetchContext;
use crate::cpu::interrupt::IRQ_VECTOR;
use crate::cpu::regs::CpuRegs;
use crate::cpu::stack::{pull, pull_word, push_status, push_word};
use crate::cpu::state::Status;

#[inline]
pub(super) fn op_jmp<C: CpuRegs>(cpu: &mut C, ctx: &FetchContext) {
    cpu.set_pc(ctx.operand);
}

pub(super) fn op_jsr<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, ctx: &FetchContext) {
    let ret = cpu.pc().wrapping_sub(1);
    push_word(cpu, bus, ret);
    cpu.set_pc(ctx.operand);
}

pub(super) fn op_rts<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let ret = pull_word(cpu, bus);
    cpu.set_pc(ret.wrapping_add(1));
}

pub(super) fn op_rti<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let p = pull(cpu, bus);
    cpu.set_status(p & !Status::BREAKPOINT.bits());
    let pc = pull_word(cpu, bus);
    cpu.set_pc(pc);
}

pub(super) fn op_brk<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let ret = cpu.pc().wrapping_add(1);
    push_word(cpu, bus, ret);
    push_status(cpu, bus, true);
    cpu.assign_flag(Status::IRQ_DISABLE, true);
    let target = bus.read_word(IRQ_VECTOR);
    cpu.set_pc(target);
}
