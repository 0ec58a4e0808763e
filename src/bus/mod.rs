#![doc = r#"
Bus module: the memory contract the CPU core consumes, plus a concrete
NES-style bus used by the demo binary and the tests.

Modules and responsibilities
- `CpuBus` / `OamWriter` (this file): the two traits the core is generic over.
  The core never knows what sits behind an address; out-of-range or unmapped
  accesses are the bus's business.
- ram: 2 KiB internal RAM with $0000-$1FFF mirroring.
- oam: `ObjectMemory`, a 256-byte stand-in for the picture unit's OAM with the
  OAMADDR/OAMDATA register pair.
- system: `SystemBus`, the CPU address decoder (RAM, OAM window, $4014 DMA
  latch, flat program space) and program/vector loading.
"#]

pub mod oam;
pub mod ram;
pub mod system;

pub use oam::ObjectMemory;
pub use ram::Ram;
pub use system::SystemBus;

/// Address of the OAM DMA register; a write here requests a page transfer.
pub const OAM_DMA: u16 = 0x4014;

/// CPU-visible memory. Reads and writes are total: every address yields a
/// byte and accepts a byte.
pub trait CpuBus {
    fn read(&mut self, addr: u16) -> u8;

    fn write(&mut self, addr: u16, value: u8);

    /// Little-endian word at `addr` / `addr + 1` (wrapping at $FFFF).
    #[inline]
    fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Source page of an OAM DMA requested since the last call, if any.
    /// Buses without a DMA port keep the default.
    #[inline]
    fn take_dma_request(&mut self) -> Option<u8> {
        None
    }
}

/// Destination of OAM DMA: the picture unit's object memory.
pub trait OamWriter {
    fn write_oam(&mut self, index: u8, value: u8);
}
