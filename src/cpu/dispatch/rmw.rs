/*!
rmw.rs - Read-Modify-Write / shift / INC / DEC opcode family

Overview
========
```text
ASL: 0A (A), 06, 16, 0E, 1E
LSR: 4A (A), 46, 56, 4E, 5E
ROL: 2A (A), 26, 36, 2E, 3E
ROR: 6A (A), 66, 76, 6E, 7E
INC: E6, F6, EE, FE
DEC: C6, D6, CE, DE
```

Accumulator forms (Implied mode) transform `ctx.data`, which the resolver
loaded from A, and store the result back into A.

Memory forms follow the 6502 RMW bus pattern: the resolver has already read
the old value; `rmw_memory` writes it back unmodified and then writes the
new value. Code watching bus writes (mapper registers, for one) sees both.

Timing
======
Base counts already include the indexed extra cycle (abs,X = 7), so no
page-cross penalty is ever added for this family.
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::{AddressingMode, FetchContext};
use crate::cpu::execute::{asl, dec_value, inc_value, lsr, rmw_memory, rol, ror};
use crate::cpu::regs::CpuRegs;

fn modify<C, B, F>(cpu: &mut C, bus: &mut B, mode: AddressingMode, ctx: &FetchContext, f: F)
where
    C: CpuRegs,
    B: CpuBus,
    F: FnOnce(&mut C, u8) -> u8,
{
    if mode == AddressingMode::Implied {
        let r = f(cpu, ctx.data);
        cpu.set_a(r);
    } else {
        rmw_memory(cpu, bus, ctx.operand, ctx.data, f);
    }
}

#[inline]
pub(super) fn op_asl<C: CpuRegs, B: CpuBus>(
    cpu: &mut C,
    bus: &mut B,
    mode: AddressingMode,
    ctx: &FetchContext,
) {
    modify(cpu, bus, mode, ctx, asl);
}

#[inline]
pub(super) fn op_lsr<C: CpuRegs, B: CpuBus>(
    cpu: &mut C,
    bus: &mut B,
    mode: AddressingMode,
    ctx: &FetchContext,
) {
    modify(cpu, bus, mode, ctx, lsr);
}

#[inline]
pub(super) fn op_rol<C: CpuRegs, B: CpuBus>(
    cpu: &mut C,
    bus: &mut B,
    mode: AddressingMode,
    ctx: &FetchContext,
) {
    modify(cpu, bus, mode, ctx, rol);
}

#[inline]
pub(super) fn op_ror<C: CpuRegs, B: CpuBus>(
    cpu: &mut C,
    bus: &mut B,
    mode: AddressingMode,
    ctx: &FetchContext,
) {
    modify(cpu, bus, mode, ctx, ror);
}

#[inline]
pub(super) fn op_inc<C: CpuRegs, B: CpuBus>(
    cpu: &mut C,
    bus: &mut B,
    mode: AddressingMode,
    ctx: &FetchContext,
) {
    modify(cpu, bus, mode, ctx, inc_value);
}

#[inline]
pub(super) fn op_dec<C: CpuRegs, B: CpuBus>(
    cpu: &mut C,
    bus: &mut B,
    mode: AddressingMode,
    ctx: &FetchContext,
) {
    modify(cpu, bus, mode, ctx, dec_value);
}
