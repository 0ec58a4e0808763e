/*!
compare.rs - CMP / CPX / CPY opcode family

```text
CMP: C9, C5, D5, CD, DD*, D9*, C1, D1*
CPX: E0, E4, EC
CPY: C0, C4, CC
```

C = register >= operand; Z/N from (register - operand). Registers are not
modified. (*) page-cross penalty applied by the dispatcher.
*/

use crate::cpu::addressing::FetchContext;
use crate::cpu::execute::compare;
use crate::cpu::regs::CpuRegs;

#[inline]
pub(super) fn op_cmp<C: CpuRegs>(cpu: &mut C, ctx: &FetchContext) {
    let reg = cpu.a();
    compare(cpu, reg, ctx.data);
}

#[inline]
pub(super) fn op_cpx<C: CpuRegs>(cpu: &mut C, ctx: &FetchContext) {
    let reg = cpu.x();
    compare(cpu, reg, ctx.data);
}

#[inline]
pub(super) fn op_cpy<C: CpuRegs>(cpu: &mut C, ctx: &FetchContext) {
    let reg = cpu.y();
    compare(cpu, reg, ctx.data);
}
