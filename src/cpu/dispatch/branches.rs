/*!
branches.rs - Relative branch opcode handler (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Cycle Rules
===========
Base cost: 2 cycles.
If branch is taken: +1 cycle.
If branch is taken and target crosses a page boundary: +2 total (vs base).

The resolver has already consumed the displacement and computed the target
(`ctx.operand`) and the crossing against the next instruction's address.
*/

use crate::cpu::addressing::FetchContext;
use crate::cpu::cycles::branch_penalty;
use crate::cpu::execute::branch_to;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::Status;
use crate::cpu::table::Mnemonic;

/// Branch condition for `mnemonic` against the current flags.
fn condition<C: CpuRegs>(cpu: &C, mnemonic: Mnemonic) -> bool {
    match mnemonic {
        Mnemonic::Bpl => !cpu.is_flag_set(Status::NEGATIVE),
        Mnemonic::Bmi => cpu.is_flag_set(Status::NEGATIVE),
        Mnemonic::Bvc => !cpu.is_flag_set(Status::OVERFLOW),
        Mnemonic::Bvs => cpu.is_flag_set(Status::OVERFLOW),
        Mnemonic::Bcc => !cpu.is_flag_set(Status::CARRY),
        Mnemonic::Bcs => cpu.is_flag_set(Status::CARRY),
        Mnemonic::Bne => !cpu.is_flag_set(Status::ZERO),
        Mnemonic::Beq => cpu.is_flag_set(Status::ZERO),
        _ => false,
    }
}

/// Execute a branch; returns the extra cycles (0, 1 or 2).
pub(super) fn op_branch<C: CpuRegs>(cpu: &mut C, mnemonic: Mnemonic, ctx: &FetchContext) -> u32 {
    let taken = condition(cpu, mnemonic);
    if taken {
        branch_to(cpu, ctx.operand);
    }
    branch_penalty(taken, ctx.page_crossed)
}
