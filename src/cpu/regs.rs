/*!
regs.rs - `CpuRegs`: the register + flag interface the execution helpers are
generic over.

The trait does NOT include bus access, stack push/pull, or operand fetch.
Those stay explicit at call sites (`&mut B: CpuBus`) so a helper's signature
tells you whether it can touch memory.

Static dispatch via generics only; the hot path never goes through a trait
object.
*/

use crate::cpu::state::{CpuState, Status};

pub trait CpuRegs {
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u8;
    fn pc(&self) -> u16;
    fn status(&self) -> u8;

    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);
    fn set_status(&mut self, v: u8);

    /// Advance PC by `delta` (wrapping at 16 bits).
    fn advance_pc(&mut self, delta: u16);

    #[inline]
    fn advance_pc_one(&mut self) {
        self.advance_pc(1);
    }

    fn is_flag_set(&self, flag: Status) -> bool;

    fn assign_flag(&mut self, flag: Status, value: bool);

    /// Update ZERO and NEGATIVE from `result`.
    #[inline]
    fn update_zn(&mut self, result: u8) {
        self.assign_flag(Status::ZERO, result == 0);
        self.assign_flag(Status::NEGATIVE, (result & 0x80) != 0);
    }

    /// Status byte for a stack push (`software` = PHP/BRK).
    fn compose_status_for_push(&self, software: bool) -> u8;
}

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    fn status(&self) -> u8 {
        CpuState::status(self)
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    fn set_status(&mut self, v: u8) {
        CpuState::set_status(self, v);
    }

    #[inline]
    fn advance_pc(&mut self, delta: u16) {
        CpuState::advance_pc(self, delta);
    }

    #[inline]
    fn is_flag_set(&self, flag: Status) -> bool {
        CpuState::is_flag_set(self, flag)
    }

    #[inline]
    fn assign_flag(&mut self, flag: Status, value: bool) {
        CpuState::assign_flag(self, flag, value);
    }

    #[inline]
    fn compose_status_for_push(&self, software: bool) -> u8 {
        CpuState::compose_status_for_push(self, software)
    }
}
