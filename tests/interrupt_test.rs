//! Reset, NMI, IRQ and BRK sequencing through the public `Cpu` API.
//!
//! Tests cover:
//! - Post-reset register contract and its 7-cycle cost
//! - Reset idempotence
//! - NMI / IRQ entry: push order, B clear in the pushed status, I set
//! - IRQ masking and NMI priority
//! - BRK: PC+2 pushed, B set in the pushed status, IRQ vector
//! - RTI back out of a hardware interrupt

mod common;

use common::{IRQ_HANDLER, NMI_HANDLER, PROGRAM_START, boot, bus_with};
use nescpu::cpu::InterruptState;
use nescpu::{Cpu, CpuBus, Interrupt, Pending, Status};

fn stack(bus: &mut nescpu::SystemBus, sp: u8) -> u8 {
    bus.read(0x0100 | sp as u16)
}

// ========== Reset ==========

#[test]
fn test_reset_register_contract() {
    let mut bus = bus_with(&[0xEA]);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    assert_eq!(cpu.status(), 0x34);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0, 0, 0));
    assert_eq!(cpu.pc(), PROGRAM_START);
    assert_eq!(cpu.cycles(), 7);
    assert_eq!(cpu.step_instruction(&mut bus), 7);
    assert_eq!(cpu.interrupt_state(), InterruptState::Resetting);
}

#[test]
fn test_reset_is_idempotent() {
    let mut bus = bus_with(&[0xA9, 0x42, 0xAA, 0xEA]);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    let first = *cpu.state();

    cpu.run(&mut bus, 4);
    cpu.interrupt(Interrupt::Maskable);
    cpu.transfer(0x03);
    cpu.reset(&mut bus);
    assert_eq!(*cpu.state(), first);

    cpu.reset(&mut bus);
    assert_eq!(*cpu.state(), first);
    assert_eq!(*cpu.transfer_context(), Default::default());
}

// ========== Hardware Interrupts ==========

#[test]
fn test_nmi_entry_sequence() {
    let (mut cpu, mut bus) = boot(&[0x38, 0xEA]); // SEC; NOP
    cpu.step_instruction(&mut bus);
    let sp = cpu.sp();
    let pc = cpu.pc();
    cpu.interrupt(Interrupt::NonMaskable);

    assert_eq!(cpu.step_instruction(&mut bus), 7);
    assert_eq!(cpu.pc(), NMI_HANDLER);
    assert_eq!(cpu.sp(), sp.wrapping_sub(3));
    assert_eq!(stack(&mut bus, sp), (pc >> 8) as u8);
    assert_eq!(stack(&mut bus, sp.wrapping_sub(1)), pc as u8);
    let pushed = stack(&mut bus, sp.wrapping_sub(2));
    assert_eq!(pushed & 0x10, 0, "B clear for hardware interrupts");
    assert_eq!(pushed & 0x20, 0x20);
    assert_eq!(pushed & 0x01, 0x01, "carry preserved");
    assert!(cpu.is_flag_set(Status::IRQ_DISABLE));
}

#[test]
fn test_nmi_ignores_interrupt_disable() {
    let (mut cpu, mut bus) = boot(&[0x78, 0xEA]); // SEI
    cpu.step_instruction(&mut bus);
    cpu.interrupt(Interrupt::NonMaskable);
    cpu.step_instruction(&mut bus);
    assert_eq!(cpu.pc(), NMI_HANDLER);
}

#[test]
fn test_irq_suppressed_while_i_set() {
    let (mut cpu, mut bus) = boot(&[0xEA, 0xEA, 0xEA]);
    cpu.interrupt(Interrupt::Maskable);
    for n in 1..=3 {
        assert_eq!(cpu.step_instruction(&mut bus), 2);
        assert_eq!(cpu.pc(), PROGRAM_START + n);
    }
    assert!(cpu.is_pending(Pending::IRQ));
}

#[test]
fn test_irq_serviced_once_i_clear() {
    let (mut cpu, mut bus) = boot(&[0x58, 0xEA]); // CLI; NOP
    cpu.step_instruction(&mut bus);
    cpu.interrupt(Interrupt::Maskable);
    assert_eq!(cpu.step_instruction(&mut bus), 7);
    assert_eq!(cpu.pc(), IRQ_HANDLER);
    assert_eq!(cpu.interrupt_state(), InterruptState::ServicingMaskable);
    // Pending bit drops when the sequence has drained.
    cpu.step(&mut bus);
    assert!(!cpu.is_pending(Pending::IRQ));
    assert_eq!(cpu.interrupt_state(), InterruptState::Idle);
}

#[test]
fn test_nmi_has_priority_over_irq() {
    let (mut cpu, mut bus) = boot(&[0x58, 0xEA]);
    cpu.step_instruction(&mut bus);
    cpu.interrupt(Interrupt::Maskable);
    cpu.interrupt(Interrupt::NonMaskable);
    cpu.step_instruction(&mut bus);
    assert_eq!(cpu.pc(), NMI_HANDLER);
    assert!(cpu.is_pending(Pending::IRQ));
}

#[test]
fn test_rti_returns_from_irq() {
    let mut program = vec![0x58, 0xEA, 0xEA]; // CLI; NOP; NOP
    program.resize((IRQ_HANDLER - PROGRAM_START) as usize, 0xEA);
    program.push(0x40); // RTI at IRQ_HANDLER
    let (mut cpu, mut bus) = boot(&program);
    cpu.step_instruction(&mut bus); // CLI
    let sp = cpu.sp();
    cpu.interrupt(Interrupt::Maskable);
    cpu.step_instruction(&mut bus); // entry
    assert_eq!(cpu.step_instruction(&mut bus), 6); // RTI
    assert_eq!(cpu.pc(), PROGRAM_START + 1);
    assert_eq!(cpu.sp(), sp);
    // Status came back with I clear, so the IRQ was serviced exactly once.
    assert!(!cpu.is_flag_set(Status::IRQ_DISABLE));
    assert!(!cpu.is_pending(Pending::IRQ));
}

// ========== BRK ==========

#[test]
fn test_brk_sequence() {
    let (mut cpu, mut bus) = boot(&[0x00, 0xEA]);
    let sp = cpu.sp();
    assert_eq!(cpu.step_instruction(&mut bus), 7);
    assert_eq!(cpu.pc(), IRQ_HANDLER);
    assert_eq!(cpu.sp(), sp.wrapping_sub(3));
    let ret = PROGRAM_START + 2;
    assert_eq!(stack(&mut bus, sp), (ret >> 8) as u8);
    assert_eq!(stack(&mut bus, sp.wrapping_sub(1)), ret as u8);
    let pushed = stack(&mut bus, sp.wrapping_sub(2));
    assert_eq!(pushed & 0x30, 0x30);
    assert!(cpu.is_flag_set(Status::IRQ_DISABLE));
    // BRK is an instruction, not an interrupt sequence.
    assert_eq!(cpu.interrupt_state(), InterruptState::Idle);
}
