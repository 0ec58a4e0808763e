/*!
core::Cpu - The 6502 CPU façade and per-clock step driver.

Design
======
- `Cpu` owns the register file (`CpuState`), the most recent operand
  resolution (`FetchContext`), the OAM DMA progress (`TransferContext`) and
  the interrupt sequencer. The bus is never owned; every entry point takes
  `&mut B`.
- `step` advances exactly one clock. Work happens at dispatch time (the
  clock where `cycles` is 0); the remaining clocks of the operation only
  drain the budget. An operation costing N therefore spans N `step` calls,
  and nothing new starts while one is in flight.

Dispatch priority (when `cycles == 0`)
======================================
1. Finish the interrupt / reset sequence that just drained (clears its
   pending bit, controller back to Idle).
2. TRANSFER: copy one OAM DMA byte.
3. NMI.
4. IRQ, only while I is clear.
5. Fetch / resolve / execute the next instruction, then collect any DMA
   request the instruction latched on the bus ($4014 write).

Coarse helpers
==============
`step_instruction` runs clocks until the budget returns to zero and reports
how many it took; `run` repeats that for a number of operations. Tests and
the demo binary use them; cycle-accurate callers use `step`.
*/

use log::{debug, warn};

use crate::bus::{CpuBus, OamWriter};
use crate::cpu::addressing::{FetchContext, fetch_byte, resolve};
use crate::cpu::cycles::RESET_CYCLES;
use crate::cpu::dispatch;
use crate::cpu::dma::TransferContext;
use crate::cpu::interrupt::{Interrupt, InterruptController, InterruptState, RESET_VECTOR};
use crate::cpu::state::{CpuState, Pending, Status};
use crate::cpu::table::lookup;

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
    fetch: FetchContext,
    transfer: TransferContext,
    interrupts: InterruptController,
}

impl Cpu {
    /// Construct a CPU with zeroed registers. Call `reset` before stepping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Return mutable reference to internal state.
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Power-on / reset sequence: SP = $FD, P = $34, A = X = Y = 0, PC from
    /// $FFFC, 7 cycles owed. Pending requests and any DMA in progress are
    /// discarded, so repeated resets over the same bus contents converge to
    /// the same state.
    pub fn reset<B: CpuBus>(&mut self, bus: &mut B) {
        self.state.reseed();
        self.state.pc = bus.read_word(RESET_VECTOR);
        self.state.cycles = RESET_CYCLES;
        self.fetch = FetchContext::default();
        self.transfer = TransferContext::default();
        self.interrupts.begin_reset();
        debug!("reset: PC=${:04X}", self.state.pc);
    }

    /// Latch an interrupt request. NMI is serviced at the next dispatch
    /// point; IRQ waits there until I is clear.
    pub fn interrupt(&mut self, kind: Interrupt) {
        self.state.set_pending(kind.pending(), true);
    }

    /// Request an OAM DMA from CPU page `page`. A request made while a
    /// transfer is running restarts it from the new page.
    pub fn transfer(&mut self, page: u8) {
        if self.state.is_pending(Pending::TRANSFER) {
            warn!(
                "OAM DMA from page ${:02X} restarted at offset {} by request for page ${:02X}",
                self.transfer.page, self.transfer.offset, page
            );
        } else {
            debug!("OAM DMA requested from page ${:02X}", page);
        }
        self.transfer.start(page);
        self.state.set_pending(Pending::TRANSFER, true);
    }

    /// Advance one clock.
    pub fn step<B: CpuBus + OamWriter>(&mut self, bus: &mut B) {
        if self.state.cycles == 0 {
            self.interrupts.complete(&mut self.state.pending);
            self.state.cycles = self.dispatch(bus);
        }
        self.state.cycles = self.state.cycles.saturating_sub(1);
    }

    fn dispatch<B: CpuBus + OamWriter>(&mut self, bus: &mut B) -> u32 {
        if self.state.is_pending(Pending::TRANSFER) {
            return self.transfer.service(&mut self.state.pending, bus);
        }
        if self.state.is_pending(Pending::NMI) {
            return self
                .interrupts
                .service(&mut self.state, bus, Interrupt::NonMaskable);
        }
        if self.state.is_pending(Pending::IRQ) && !self.state.is_flag_set(Status::IRQ_DISABLE) {
            return self
                .interrupts
                .service(&mut self.state, bus, Interrupt::Maskable);
        }
        self.execute_next(bus)
    }

    fn execute_next<B: CpuBus>(&mut self, bus: &mut B) -> u32 {
        #[cfg(feature = "trace-fetch")]
        let pc = self.state.pc;
        let opcode = fetch_byte(&mut self.state, bus);
        let desc = lookup(opcode);

        #[cfg(feature = "trace-fetch")]
        log::trace!(
            "${:04X}: {:02X} {} {:?} A={:02X} X={:02X} Y={:02X} P={:02X} SP={:02X}",
            pc,
            opcode,
            desc.mnemonic,
            desc.mode,
            self.state.a,
            self.state.x,
            self.state.y,
            self.state.status(),
            self.state.sp
        );

        self.fetch = resolve(
            &mut self.state,
            bus,
            opcode,
            desc.mode,
            desc.mnemonic.access(),
        );
        let cost = dispatch::execute(&mut self.state, bus, desc, &self.fetch);

        if let Some(page) = bus.take_dma_request() {
            self.transfer(page);
        }
        cost
    }

    /// Run clocks until the current operation (or the next one, if none is
    /// in flight) has fully drained. Returns the clocks consumed.
    pub fn step_instruction<B: CpuBus + OamWriter>(&mut self, bus: &mut B) -> u32 {
        let mut clocks = 0;
        loop {
            self.step(bus);
            clocks += 1;
            if self.state.cycles == 0 {
                return clocks;
            }
        }
    }

    /// Run up to `max_operations` whole operations. Returns the clocks
    /// consumed.
    pub fn run<B: CpuBus + OamWriter>(&mut self, bus: &mut B, max_operations: usize) -> u64 {
        let mut clocks = 0u64;
        for _ in 0..max_operations {
            clocks += self.step_instruction(bus) as u64;
        }
        clocks
    }

    /// Operand resolution of the most recent instruction.
    pub fn last_fetch(&self) -> &FetchContext {
        &self.fetch
    }

    pub fn transfer_context(&self) -> &TransferContext {
        &self.transfer
    }

    pub fn interrupt_state(&self) -> InterruptState {
        self.interrupts.state()
    }

    /// Clocks still owed by the operation in flight.
    pub fn cycles(&self) -> u32 {
        self.state.cycles
    }

    pub fn is_pending(&self, request: Pending) -> bool {
        self.state.is_pending(request)
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    /// Status byte; bit 5 always reads 1.
    pub fn status(&self) -> u8 {
        self.state.status()
    }

    pub fn is_flag_set(&self, flag: Status) -> bool {
        self.state.is_flag_set(flag)
    }

    // ---------------------------------------------------------------------
    // Register mutators (write)
    // ---------------------------------------------------------------------
    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.set_status(v);
    }
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------
