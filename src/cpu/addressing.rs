/*!
addressing.rs - 6502 addressing modes and operand resolution.

Overview
========
`resolve` turns an addressing mode into a `FetchContext`: the effective
address, the pre-index / pointer address (kept for diagnostics), the operand
byte, and whether the index add crossed a page. It is the only code that
reads operand bytes from the instruction stream, so PC always ends up on the
next opcode.

Scope & Responsibilities
========================
- Pure address / operand resolution only.
- Does NOT touch the cycle budget. `page_crossed` is reported so the
  dispatcher can apply the +1 penalty where the instruction calls for it.
- Reads the byte at the effective address only for `Access::Read`
  instructions; stores and jumps never issue a spurious read.
- Reproduces the JMP (indirect) page-wrap bug and the zero-page wrap of the
  indexed and indirect zero-page modes.

Caller Assumptions
==================
PC points at the first operand byte (the opcode has already been fetched).
*/

use crate::bus::CpuBus;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Access;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Immediate,
    /// No operand bytes; shift/rotate forms operate on the accumulator.
    Implied,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
    Zeropage,
    ZeropageX,
    ZeropageY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        use AddressingMode::*;
        match self {
            Implied => 0,
            Immediate | IndirectX | IndirectY | Relative | Zeropage | ZeropageX | ZeropageY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    /// True when `operand` names a memory location the instruction may access.
    pub const fn is_memory(self) -> bool {
        !matches!(
            self,
            AddressingMode::Implied | AddressingMode::Immediate | AddressingMode::Relative
        )
    }
}

/// Per-dispatch operand state. Rebuilt for every instruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchContext {
    pub opcode: u8,
    /// Effective address (branch target for Relative, immediate byte's
    /// address for Immediate, 0 for Implied).
    pub operand: u16,
    /// Address before indexing / the pointer that was dereferenced.
    pub pointer: u16,
    /// Operand byte: the immediate value, the byte read from `operand`, the
    /// accumulator for Implied, or the raw offset for Relative.
    pub data: u8,
    pub page_crossed: bool,
}

#[inline]
fn crosses_page(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Fetch next byte from the instruction stream, incrementing PC.
#[inline]
pub(crate) fn fetch_byte<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u8 {
    let v = bus.read(cpu.pc());
    cpu.advance_pc_one();
    v
}

/// Fetch next little-endian word, incrementing PC twice.
#[inline]
pub(crate) fn fetch_word<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u16 {
    let lo = fetch_byte(cpu, bus) as u16;
    let hi = fetch_byte(cpu, bus) as u16;
    (hi << 8) | lo
}

/// Read a 16-bit pointer from zero page; the high byte wraps $FF -> $00.
#[inline]
pub(crate) fn read_word_zp<B: CpuBus>(bus: &mut B, base: u8) -> u16 {
    let lo = bus.read(base as u16) as u16;
    let hi = bus.read(base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// JMP (indirect) hardware bug: the high byte is fetched from the same page
/// as the low byte, so a pointer at $xxFF reads its high byte from $xx00.
#[inline]
pub(crate) fn read_word_indirect_bug<B: CpuBus>(bus: &mut B, addr: u16) -> u16 {
    let lo = bus.read(addr) as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = bus.read(hi_addr) as u16;
    (hi << 8) | lo
}

/// Resolve the operand of the instruction whose opcode was just fetched.
pub(crate) fn resolve<C: CpuRegs, B: CpuBus>(
    cpu: &mut C,
    bus: &mut B,
    opcode: u8,
    mode: AddressingMode,
    access: Access,
) -> FetchContext {
    let mut ctx = FetchContext {
        opcode,
        ..FetchContext::default()
    };

    match mode {
        AddressingMode::Implied => {
            ctx.data = cpu.a();
        }
        AddressingMode::Immediate => {
            ctx.operand = cpu.pc();
            ctx.data = fetch_byte(cpu, bus);
        }
        AddressingMode::Zeropage => {
            ctx.operand = fetch_byte(cpu, bus) as u16;
            ctx.pointer = ctx.operand;
        }
        AddressingMode::ZeropageX | AddressingMode::ZeropageY => {
            let index = if mode == AddressingMode::ZeropageX {
                cpu.x()
            } else {
                cpu.y()
            };
            let zp = fetch_byte(cpu, bus);
            ctx.pointer = zp as u16;
            ctx.operand = zp.wrapping_add(index) as u16;
        }
        AddressingMode::Absolute => {
            ctx.operand = fetch_word(cpu, bus);
            ctx.pointer = ctx.operand;
        }
        AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => {
            let index = if mode == AddressingMode::AbsoluteX {
                cpu.x()
            } else {
                cpu.y()
            };
            let base = fetch_word(cpu, bus);
            ctx.pointer = base;
            ctx.operand = base.wrapping_add(index as u16);
            ctx.page_crossed = crosses_page(base, ctx.operand);
        }
        AddressingMode::Indirect => {
            ctx.pointer = fetch_word(cpu, bus);
            ctx.operand = read_word_indirect_bug(bus, ctx.pointer);
        }
        AddressingMode::IndirectX => {
            let zp = fetch_byte(cpu, bus).wrapping_add(cpu.x());
            ctx.pointer = zp as u16;
            ctx.operand = read_word_zp(bus, zp);
        }
        AddressingMode::IndirectY => {
            let zp = fetch_byte(cpu, bus);
            let base = read_word_zp(bus, zp);
            ctx.pointer = base;
            ctx.operand = base.wrapping_add(cpu.y() as u16);
            ctx.page_crossed = crosses_page(base, ctx.operand);
        }
        AddressingMode::Relative => {
            let offset = fetch_byte(cpu, bus);
            let next = cpu.pc();
            ctx.data = offset;
            ctx.pointer = next;
            ctx.operand = next.wrapping_add(offset as i8 as u16);
            ctx.page_crossed = crosses_page(next, ctx.operand);
        }
    }

    if access == Access::Read && mode.is_memory() {
        ctx.data = bus.read(ctx.operand);
    }

    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CpuState;
    use crate::test_utils::FlatBus;

    fn at(pc: u16, bytes: &[u8]) -> (CpuState, FlatBus) {
        let mut bus = FlatBus::new();
        bus.load(pc, bytes);
        let mut cpu = CpuState::new();
        cpu.pc = pc;
        (cpu, bus)
    }

    #[test]
    fn absolute_x_page_cross_detection() {
        let (mut cpu, mut bus) = at(0x8000, &[0xF5, 0x80]);
        cpu.x = 0x10;
        bus.poke(0x8105, 0x42);
        let ctx = resolve(&mut cpu, &mut bus, 0xBD, AddressingMode::AbsoluteX, Access::Read);
        assert_eq!(ctx.pointer, 0x80F5);
        assert_eq!(ctx.operand, 0x8105);
        assert!(ctx.page_crossed);
        assert_eq!(ctx.data, 0x42);
        assert_eq!(cpu.pc, 0x8002);
    }

    #[test]
    fn absolute_y_no_cross_within_page() {
        let (mut cpu, mut bus) = at(0x8000, &[0x00, 0x20]);
        cpu.y = 0xFF;
        let ctx = resolve(&mut cpu, &mut bus, 0xB9, AddressingMode::AbsoluteY, Access::Read);
        assert_eq!(ctx.operand, 0x20FF);
        assert!(!ctx.page_crossed);
    }

    #[test]
    fn zeropage_x_wraps() {
        let (mut cpu, mut bus) = at(0x8000, &[0xF0]);
        cpu.x = 0x20;
        let ctx = resolve(&mut cpu, &mut bus, 0xB5, AddressingMode::ZeropageX, Access::Read);
        assert_eq!(ctx.operand, 0x0010);
        assert!(!ctx.page_crossed);
    }

    #[test]
    fn indirect_x_wraps_pointer_in_zero_page() {
        let (mut cpu, mut bus) = at(0x8000, &[0xFE]);
        cpu.x = 0x01;
        // Pointer at $FF: low from $FF, high from $00.
        bus.poke(0x00FF, 0x34);
        bus.poke(0x0000, 0x12);
        bus.poke(0x1234, 0x99);
        let ctx = resolve(&mut cpu, &mut bus, 0xA1, AddressingMode::IndirectX, Access::Read);
        assert_eq!(ctx.pointer, 0x00FF);
        assert_eq!(ctx.operand, 0x1234);
        assert_eq!(ctx.data, 0x99);
    }

    #[test]
    fn indirect_y_page_cross() {
        let (mut cpu, mut bus) = at(0x8000, &[0x10]);
        cpu.y = 0x01;
        bus.poke(0x0010, 0xFF);
        bus.poke(0x0011, 0x12);
        let ctx = resolve(&mut cpu, &mut bus, 0xB1, AddressingMode::IndirectY, Access::Read);
        assert_eq!(ctx.pointer, 0x12FF);
        assert_eq!(ctx.operand, 0x1300);
        assert!(ctx.page_crossed);
    }

    #[test]
    fn indirect_jmp_bug() {
        let (mut cpu, mut bus) = at(0x8000, &[0xFF, 0x10]);
        bus.poke(0x10FF, 0x34);
        bus.poke(0x1000, 0x12);
        bus.poke(0x1100, 0x56);
        let ctx = resolve(&mut cpu, &mut bus, 0x6C, AddressingMode::Indirect, Access::None);
        assert_eq!(ctx.operand, 0x1234);
    }

    #[test]
    fn relative_backward_crossing() {
        let (mut cpu, mut bus) = at(0x8100, &[0xFC]); // -4
        let ctx = resolve(&mut cpu, &mut bus, 0xD0, AddressingMode::Relative, Access::None);
        assert_eq!(ctx.pointer, 0x8101);
        assert_eq!(ctx.operand, 0x80FD);
        assert!(ctx.page_crossed);
    }

    #[test]
    fn implied_carries_accumulator() {
        let (mut cpu, mut bus) = at(0x8000, &[]);
        cpu.a = 0x81;
        let ctx = resolve(&mut cpu, &mut bus, 0x0A, AddressingMode::Implied, Access::Read);
        assert_eq!(ctx.data, 0x81);
        assert_eq!(cpu.pc, 0x8000);
        assert!(bus.reads.is_empty());
    }

    #[test]
    fn stores_do_not_read_target() {
        let (mut cpu, mut bus) = at(0x8000, &[0x00, 0x02]);
        let ctx = resolve(&mut cpu, &mut bus, 0x8D, AddressingMode::Absolute, Access::Write);
        assert_eq!(ctx.operand, 0x0200);
        assert!(!bus.reads.contains(&0x0200));
    }
}
