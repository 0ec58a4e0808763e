/*!
interrupt.rs - Reset / IRQ / NMI sequencing.

Overview
========
`InterruptController` tracks which non-instruction sequence the core is in:

```text
Idle ──reset()──────────────▶ Resetting ─────────────┐
  │                                                   │
  ├──NMI pending─────────────▶ ServicingNonMaskable ──┤ cycles drain to 0
  │                                                   │ (complete)
  └──IRQ pending && !I───────▶ ServicingMaskable ─────┘──▶ Idle
```

Entry (`service`) pushes PC (high, then low) and the status byte with B
clear and bit 5 set, sets I, and loads PC from the vector. It costs 7
cycles. The request's pending bit stays set while the sequence runs and is
cleared by `complete` once the budget has drained, which is also when the
controller returns to Idle.

Priority is decided by the step driver: NMI before IRQ, and IRQ only while
I is clear. A masked IRQ stays latched until software clears I.
*/

use log::debug;

use crate::bus::CpuBus;
use crate::cpu::cycles::INTERRUPT_CYCLES;
use crate::cpu::regs::CpuRegs;
use crate::cpu::stack::{push_status, push_word};
use crate::cpu::state::{Pending, Status};

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// External interrupt lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interrupt {
    /// IRQ: honored only while the I flag is clear.
    Maskable,
    /// NMI: always honored, takes priority over IRQ.
    NonMaskable,
}

impl Interrupt {
    pub const fn vector(self) -> u16 {
        match self {
            Interrupt::Maskable => IRQ_VECTOR,
            Interrupt::NonMaskable => NMI_VECTOR,
        }
    }

    pub const fn pending(self) -> Pending {
        match self {
            Interrupt::Maskable => Pending::IRQ,
            Interrupt::NonMaskable => Pending::NMI,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterruptState {
    #[default]
    Idle,
    Resetting,
    ServicingMaskable,
    ServicingNonMaskable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterruptController {
    state: InterruptState,
}

impl InterruptController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> InterruptState {
        self.state
    }

    pub(crate) fn begin_reset(&mut self) {
        self.state = InterruptState::Resetting;
    }

    /// Run the entry sequence for `kind`. Returns the cycles it costs.
    pub(crate) fn service<C: CpuRegs, B: CpuBus>(
        &mut self,
        cpu: &mut C,
        bus: &mut B,
        kind: Interrupt,
    ) -> u32 {
        let pc = cpu.pc();
        push_word(cpu, bus, pc);
        push_status(cpu, bus, false);
        cpu.assign_flag(Status::IRQ_DISABLE, true);
        let target = bus.read_word(kind.vector());
        cpu.set_pc(target);
        self.state = match kind {
            Interrupt::Maskable => InterruptState::ServicingMaskable,
            Interrupt::NonMaskable => InterruptState::ServicingNonMaskable,
        };
        debug!("{:?} interrupt: ${:04X} -> ${:04X}", kind, pc, target);
        INTERRUPT_CYCLES
    }

    /// Finish the sequence in flight (called once its cycles have drained).
    pub(crate) fn complete(&mut self, pending: &mut Pending) {
        match self.state {
            InterruptState::Idle | InterruptState::Resetting => {}
            InterruptState::ServicingMaskable => pending.remove(Pending::IRQ),
            InterruptState::ServicingNonMaskable => pending.remove(Pending::NMI),
        }
        self.state = InterruptState::Idle;
    }
}
