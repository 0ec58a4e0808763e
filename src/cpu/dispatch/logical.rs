/*!
logical.rs - AND / ORA / EOR / BIT opcode family

```text
AND: 29, 25, 35, 2D, 3D*, 39*, 21, 31*
ORA: 09, 05, 15, 0D, 1D*, 19*, 01, 11*
EOR: 49, 45, 55, 4D, 5D*, 59*, 41, 51*
BIT: 24, 2C
```

(*) page-cross penalty applied by the dispatcher. BIT has no indexed forms.
*/

use crate::cpu::addressing::FetchContext;
use crate::cpu::execute::{and, bit, eor, ora};
use crate::cpu::regs::CpuRegs;

#[inline]
pub(super) fn op_and<C: CpuRegs>(cpu: &mut C, ctx: &FetchContext) {
    and(cpu, ctx.data);
}

#[inline]
pub(super) fn op_ora<C: CpuRegs>(cpu: &mut C, ctx: &FetchContext) {
    ora(cpu, ctx.data);
}

#[inline]
pub(super) fn op_eor<C: CpuRegs>(cpu: &mut C, ctx: &FetchContext) {
    eor(cpu, ctx.data);
}

#[inline]
pub(super) fn op_bit<C: CpuRegs>(cpu: &mut C, ctx: &FetchContext) {
    bit(cpu, ctx.data);
}
