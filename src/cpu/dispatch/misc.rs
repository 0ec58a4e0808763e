/*!
misc.rs - Transfers / Stack / Flag / Register inc-dec / NOP family

Overview
========
Transfers:
  TAX (0xAA), TAY (0xA8), TXA (0x8A), TYA (0x98), TSX (0xBA), TXS (0x9A)

Stack:
  PHA (0x48), PLA (0x68), PHP (0x08), PLP (0x28)

Flag operations:
  CLC (0x18), SEC (0x38),
  CLI (0x58), SEI (0x78),
  CLD (0xD8), SED (0xF8),
  CLV (0xB8)

Register increment / decrement:
  INX (0xE8), INY (0xC8), DEX (0xCA), DEY (0x88)

No-ops:
  NOP (0xEA) and every undefined opcode byte.

All of these have fixed base cycles and no page-cross penalties.
*/

use log::debug;

use crate::bus::CpuBus;
use crate::cpu::addressing::FetchContext;
use crate::cpu::execute::lda;
use crate::cpu::regs::CpuRegs;
use crate::cpu::stack::{pull, push, push_status};
use crate::cpu::state::Status;

#[inline]
pub(super) fn op_pha<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let a = cpu.a();
    push(cpu, bus, a);
}

#[inline]
pub(super) fn op_pla<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let v = pull(cpu, bus);
    lda(cpu, v);
}

#[inline]
pub(super) fn op_php<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    push_status(cpu, bus, true);
}

/// PLP drops the breakpoint bits; they exist only in pushed copies.
#[inline]
pub(super) fn op_plp<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let v = pull(cpu, bus);
    cpu.set_status(v & !Status::BREAKPOINT.bits());
}

#[inline]
pub(super) fn op_flag<C: CpuRegs>(cpu: &mut C, flag: Status, on: bool) {
    cpu.assign_flag(flag, on);
}

/// Undefined opcode: consumes its table cycles and nothing else.
pub(super) fn op_illegal<C: CpuRegs>(cpu: &C, ctx: &FetchContext) {
    debug!(
        "illegal opcode ${:02X} at ${:04X}, executed as NOP",
        ctx.opcode,
        cpu.pc().wrapping_sub(1)
    );
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::Status;
    use crate::test_utils::{PROGRAM_START, boot};

    #[test]
    fn transfers_sequence() {
        // LDA #$05; TAX; TAY; LDA #$00; TXA; TYA; TSX; TXS
        let (mut cpu, mut bus) =
            boot(&[0xA9, 0x05, 0xAA, 0xA8, 0xA9, 0x00, 0x8A, 0x98, 0xBA, 0x9A]);
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.step_instruction(&mut bus), 2);
        assert_eq!(cpu.x(), 0x05);
        assert_eq!(cpu.step_instruction(&mut bus), 2);
        assert_eq!(cpu.y(), 0x05);
        cpu.step_instruction(&mut bus);
        assert!(cpu.is_flag_set(Status::ZERO));
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.a(), 0x05);
        assert!(!cpu.is_flag_set(Status::ZERO));
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.a(), 0x05);
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.x(), 0xFD);
        assert!(cpu.is_flag_set(Status::NEGATIVE));
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn stack_push_pull() {
        // LDA #$AB; PHA; LDA #$00; PLA
        let (mut cpu, mut bus) = boot(&[0xA9, 0xAB, 0x48, 0xA9, 0x00, 0x68]);
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.step_instruction(&mut bus), 3);
        assert_eq!(cpu.sp(), 0xFC);
        assert_eq!(bus.peek(0x01FD), 0xAB);
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.step_instruction(&mut bus), 4);
        assert_eq!(cpu.a(), 0xAB);
        assert!(cpu.is_flag_set(Status::NEGATIVE));
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn php_plp_round_trip_flags() {
        // SEC; PHP; CLC; PLP
        let (mut cpu, mut bus) = boot(&[0x38, 0x08, 0x18, 0x28]);
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.step_instruction(&mut bus), 3);
        // Pushed copy carries the breakpoint field.
        assert_eq!(bus.peek(0x01FD) & 0x31, 0x31);
        cpu.step_instruction(&mut bus);
        assert!(!cpu.is_flag_set(Status::CARRY));
        assert_eq!(cpu.step_instruction(&mut bus), 4);
        assert!(cpu.is_flag_set(Status::CARRY));
        assert!(!cpu.is_flag_set(Status::BREAK));
    }

    #[test]
    fn flag_instructions() {
        // SED; SEI; CLI; CLD
        let (mut cpu, mut bus) = boot(&[0xF8, 0x78, 0x58, 0xD8]);
        cpu.step_instruction(&mut bus);
        assert!(cpu.is_flag_set(Status::DECIMAL));
        cpu.step_instruction(&mut bus);
        assert!(cpu.is_flag_set(Status::IRQ_DISABLE));
        cpu.step_instruction(&mut bus);
        assert!(!cpu.is_flag_set(Status::IRQ_DISABLE));
        cpu.step_instruction(&mut bus);
        assert!(!cpu.is_flag_set(Status::DECIMAL));
    }

    #[test]
    fn clv_clears_overflow() {
        // LDA #$50; ADC #$50 (sets V); CLV
        let (mut cpu, mut bus) = boot(&[0xA9, 0x50, 0x69, 0x50, 0xB8]);
        cpu.step_instruction(&mut bus);
        cpu.step_instruction(&mut bus);
        assert!(cpu.is_flag_set(Status::OVERFLOW));
        cpu.step_instruction(&mut bus);
        assert!(!cpu.is_flag_set(Status::OVERFLOW));
    }

    #[test]
    fn register_inc_dec_wrap() {
        // DEX; INY; INX; DEY
        let (mut cpu, mut bus) = boot(&[0xCA, 0xC8, 0xE8, 0x88]);
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.x(), 0xFF);
        assert!(cpu.is_flag_set(Status::NEGATIVE));
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.y(), 0x01);
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.x(), 0x00);
        assert!(cpu.is_flag_set(Status::ZERO));
        cpu.step_instruction(&mut bus);
        assert_eq!(cpu.y(), 0x00);
    }

    #[test]
    fn illegal_opcode_is_two_cycle_nop() {
        let (mut cpu, mut bus) = boot(&[0x02, 0xEA]);
        let before = *cpu.state();
        assert_eq!(cpu.step_instruction(&mut bus), 2);
        assert_eq!(cpu.pc(), PROGRAM_START + 1);
        assert_eq!(cpu.a(), before.a);
        assert_eq!(cpu.sp(), before.sp);
        assert_eq!(cpu.status(), before.status());
        assert_eq!(cpu.step_instruction(&mut bus), 2);
        assert_eq!(cpu.pc(), PROGRAM_START + 2);
    }
}
