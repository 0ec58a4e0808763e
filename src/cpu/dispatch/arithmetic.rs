/*!
arithmetic.rs - ADC / SBC opcode family

```text
ADC: 69, 65, 75, 6D, 7D*, 79*, 61, 71*
SBC: E9, E5, F5, ED, FD*, F9*, E1, F1*
```

Binary arithmetic only. The 2A03 ignores the DECIMAL flag, so SED has no
effect here. (*) page-cross penalty applied by the dispatcher.
*/

use crate::cpu::addressing::FetchContext;
use crate::cpu::execute::{adc, sbc};
use crate::cpu::regs::CpuRegs;

#[inline]
pub(super) fn op_adc<C: CpuRegs>(cpu: &mut C, ctx: &FetchContext) {
    adc(cpu, ctx.data);
}

#[inline]
pub(super) fn op_sbc<C: CpuRegs>(cpu: &mut C, ctx: &FetchContext) {
    sbc(cpu, ctx.data);
}
