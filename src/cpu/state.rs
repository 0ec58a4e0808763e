/*!
state.rs - Canonical 6502 register file (registers, status, pending lines,
remaining cycle budget).

Overview
========
`CpuState` is the single authoritative owner for every architecturally
visible register plus the two pieces of bookkeeping the step driver needs:
the pending-request byte (DMA / NMI / IRQ) and the count of clocks still owed
by the operation in flight. It excludes:
  - Bus / memory logic
  - Instruction decode / dispatch logic
Those live in higher layers (addressing, dispatch, core).

Status Register Bit Layout
==========================
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (always reads as 1)
  B = BREAK (bits 4-5 together form the pushed "breakpoint" field; PHP/BRK
      push it set, hardware IRQ/NMI push it with B clear)
  D = DECIMAL (toggled by SED/CLD, ignored by ADC/SBC on the 2A03)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY

The live register may hold bits 4-5 clear (after PLP/RTI); `status()` always
reports bit 5 as set.
*/

use bitflags::bitflags;

bitflags! {
    /// Processor status flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const IRQ_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;

        /// Two-bit field pushed set by PHP/BRK and cleared by PLP/RTI.
        const BREAKPOINT = Self::BREAK.bits() | Self::UNUSED.bits();
    }
}

bitflags! {
    /// Requests waiting for the step driver.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Pending: u8 {
        /// OAM DMA requested via `transfer()` (or a $4014 write).
        const TRANSFER = 0b0000_0001;
        /// Non-maskable interrupt latched.
        const NMI = 0b0000_0010;
        /// Maskable interrupt latched.
        const IRQ = 0b0000_0100;
    }
}

/// Status byte after reset: I set plus the breakpoint field.
pub const RESET_STATUS: u8 = 0x34;
/// Stack pointer after reset.
pub const RESET_SP: u8 = 0xFD;

/// Register file for the 6502 core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Status,
    pub pending: Pending,
    /// Clocks still owed by the operation in flight; 0 = ready to dispatch.
    pub cycles: u32,
}

impl Default for CpuState {
    /// Zero-initialized register file, as at emulator load (before `reset`).
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0,
            pc: 0x0000,
            status: Status::empty(),
            pending: Pending::empty(),
            cycles: 0,
        }
    }
}

impl CpuState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-seed registers to the documented post-reset values. The caller
    /// loads PC from the reset vector and charges the reset cycles.
    pub fn reseed(&mut self) {
        *self = Self {
            sp: RESET_SP,
            status: Status::from_bits_retain(RESET_STATUS),
            ..Self::default()
        };
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------
    #[inline]
    pub fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    pub fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    pub fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Status byte as seen externally (bit 5 always reads 1).
    #[inline]
    pub fn status(&self) -> u8 {
        (self.status | Status::UNUSED).bits()
    }

    #[inline]
    pub fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    pub fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    pub fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    pub fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    pub fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    pub fn set_status(&mut self, v: u8) {
        self.status = Status::from_bits_retain(v);
    }

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    // ---------------------------------------------------------------------
    // Flags
    // ---------------------------------------------------------------------

    #[inline]
    pub fn is_flag_set(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    #[inline]
    pub fn assign_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag, value);
    }

    /// Status byte for a stack push. BRK/PHP push the breakpoint field set;
    /// IRQ/NMI push it with B clear (bit 5 still reads 1).
    pub fn compose_status_for_push(&self, software: bool) -> u8 {
        let mut v = self.status | Status::UNUSED;
        v.set(Status::BREAK, software);
        v.bits()
    }

    // ---------------------------------------------------------------------
    // Pending requests
    // ---------------------------------------------------------------------

    #[inline]
    pub fn is_pending(&self, request: Pending) -> bool {
        self.pending.contains(request)
    }

    #[inline]
    pub fn set_pending(&mut self, request: Pending, value: bool) {
        self.pending.set(request, value);
    }
}
