/*!
dma.rs - OAM DMA transfer context.

Models the $4014 sprite DMA: 256 bytes copied from CPU page `page` into
object memory, one byte per servicing dispatch. Each byte costs a read and a
write (2 cycles); the first byte also pays the fixed setup cost. A full
transfer is therefore 256 dispatches and 514 clocks, during which the step
driver fetches no instructions and services no interrupts.

The context only tracks progress. The step driver owns the TRANSFER pending
bit and decides when to call `service`.
*/

use log::debug;

use crate::bus::{CpuBus, OamWriter};
use crate::cpu::cycles::{DMA_BYTE_CYCLES, DMA_SETUP_CYCLES};
use crate::cpu::state::Pending;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferContext {
    /// Source page (high byte of the source address).
    pub page: u8,
    /// Next byte to copy (0-255).
    pub offset: u8,
    /// Whether the fixed setup cost is still owed.
    pub setup_pending: bool,
}

impl TransferContext {
    /// Begin (or restart) a transfer from `page`.
    pub fn start(&mut self, page: u8) {
        *self = Self {
            page,
            offset: 0,
            setup_pending: true,
        };
    }

    #[inline]
    pub fn source(&self) -> u16 {
        ((self.page as u16) << 8) | self.offset as u16
    }

    /// Copy one byte; clears TRANSFER after the last one. Returns the cycles
    /// this dispatch costs.
    pub(crate) fn service<B: CpuBus + OamWriter>(
        &mut self,
        pending: &mut Pending,
        bus: &mut B,
    ) -> u32 {
        let value = bus.read(self.source());
        bus.write_oam(self.offset, value);

        let mut cost = DMA_BYTE_CYCLES;
        if self.setup_pending {
            self.setup_pending = false;
            cost += DMA_SETUP_CYCLES;
        }

        if self.offset == 0xFF {
            pending.remove(Pending::TRANSFER);
            debug!("OAM DMA from page ${:02X} complete", self.page);
        } else {
            self.offset += 1;
        }
        cost
    }
}
