/*!
dispatch - Instruction execution for one resolved opcode.

Overview
========
The step driver fetches the opcode, looks up its descriptor and runs the
addressing resolver. `execute` then hands the resolved `FetchContext` to the
family handler for the mnemonic and returns the total cycle cost:

```text
cost = descriptor base cycles
     + page-cross penalty (read-type instructions in indexed modes)
     + branch extras (taken / taken across a page)
```

Architecture
============
- One exhaustive `match` on `Mnemonic`. Adding a variant without an arm is
  a compile error; there is no "unknown opcode" path because undefined bytes
  decode to `Mnemonic::Illegal`.
- Family handlers live in submodules (load_store, arithmetic, logical,
  compare, rmw, branches, control_flow, misc). They mutate registers and the
  bus; none of them touch the cycle budget.

Caller Requirements
===================
- PC has been advanced past the opcode and its operand bytes.
- `ctx` came from `addressing::resolve` for this descriptor's mode.
*/

mod arithmetic;
mod branches;
mod compare;
mod control_flow;
mod load_store;
mod logical;
mod misc;
mod rmw;

use crate::bus::CpuBus;
use crate::cpu::addressing::FetchContext;
use crate::cpu::cycles::page_cross_penalty;
use crate::cpu::execute::{dex, dey, inx, iny, tax, tay, tsx, txa, txs, tya};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::Status;
use crate::cpu::table::{InstructionDescriptor, Mnemonic};

/// Execute one resolved instruction and return its total cycle cost.
pub(crate) fn execute<C: CpuRegs, B: CpuBus>(
    cpu: &mut C,
    bus: &mut B,
    desc: &InstructionDescriptor,
    ctx: &FetchContext,
) -> u32 {
    use Mnemonic::*;

    let mode = desc.mode;
    let mut extra = page_cross_penalty(desc.mnemonic, mode, ctx.page_crossed);

    match desc.mnemonic {
        // Load / Store
        Lda => load_store::op_lda(cpu, ctx),
        Ldx => load_store::op_ldx(cpu, ctx),
        Ldy => load_store::op_ldy(cpu, ctx),
        Sta => load_store::op_sta(cpu, bus, ctx),
        Stx => load_store::op_stx(cpu, bus, ctx),
        Sty => load_store::op_sty(cpu, bus, ctx),

        // Arithmetic
        Adc => arithmetic::op_adc(cpu, ctx),
        Sbc => arithmetic::op_sbc(cpu, ctx),

        // Logical
        And => logical::op_and(cpu, ctx),
        Ora => logical::op_ora(cpu, ctx),
        Eor => logical::op_eor(cpu, ctx),
        Bit => logical::op_bit(cpu, ctx),

        // Compare
        Cmp => compare::op_cmp(cpu, ctx),
        Cpx => compare::op_cpx(cpu, ctx),
        Cpy => compare::op_cpy(cpu, ctx),

        // Read-modify-write
        Asl => rmw::op_asl(cpu, bus, mode, ctx),
        Lsr => rmw::op_lsr(cpu, bus, mode, ctx),
        Rol => rmw::op_rol(cpu, bus, mode, ctx),
        Ror => rmw::op_ror(cpu, bus, mode, ctx),
        Inc => rmw::op_inc(cpu, bus, mode, ctx),
        Dec => rmw::op_dec(cpu, bus, mode, ctx),

        // Branches
        Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs => {
            extra += branches::op_branch(cpu, desc.mnemonic, ctx);
        }

        // Control flow
        Jmp => control_flow::op_jmp(cpu, ctx),
        Jsr => control_flow::op_jsr(cpu, bus, ctx),
        Rts => control_flow::op_rts(cpu, bus),
        Rti => control_flow::op_rti(cpu, bus),
        Brk => control_flow::op_brk(cpu, bus),

        // Stack
        Pha => misc::op_pha(cpu, bus),
        Pla => misc::op_pla(cpu, bus),
        Php => misc::op_php(cpu, bus),
        Plp => misc::op_plp(cpu, bus),

        // Transfers
        Tax => tax(cpu),
        Tay => tay(cpu),
        Txa => txa(cpu),
        Tya => tya(cpu),
        Tsx => tsx(cpu),
        Txs => txs(cpu),

        // Register increment / decrement
        Inx => inx(cpu),
        Iny => iny(cpu),
        Dex => dex(cpu),
        Dey => dey(cpu),

        // Flags
        Clc => misc::op_flag(cpu, Status::CARRY, false),
        Sec => misc::op_flag(cpu, Status::CARRY, true),
        Cli => misc::op_flag(cpu, Status::IRQ_DISABLE, false),
        Sei => misc::op_flag(cpu, Status::IRQ_DISABLE, true),
        Cld => misc::op_flag(cpu, Status::DECIMAL, false),
        Sed => misc::op_flag(cpu, Status::DECIMAL, true),
        Clv => misc::op_flag(cpu, Status::OVERFLOW, false),

        Nop => {}
        Illegal => misc::op_illegal(cpu, ctx),
    }

    desc.cycles as u32 + extra
}
